//! Gradient vector sets.
//!
//! Small-integer directions, identical for every seed. The lengths are
//! chosen so the normalisation constants in `geometry` bring the output
//! close to `[-1, 1]`.

/// 2D gradients: 8 directions around the unit circle.
pub const PLANE: [[i8; 2]; 8] = [
    [5, 2], [2, 5], [-5, 2], [-2, 5],
    [5, -2], [2, -5], [-5, -2], [-2, -5],
];

/// 3D gradients: 24 directions, three per octant.
pub const SPACE: [[i8; 3]; 24] = [
    [-11, 4, 4], [-4, 11, 4], [-4, 4, 11],
    [11, 4, 4], [4, 11, 4], [4, 4, 11],
    [-11, -4, 4], [-4, -11, 4], [-4, -4, 11],
    [11, -4, 4], [4, -11, 4], [4, -4, 11],
    [-11, 4, -4], [-4, 11, -4], [-4, 4, -11],
    [11, 4, -4], [4, 11, -4], [4, 4, -11],
    [-11, -4, -4], [-4, -11, -4], [-4, -4, -11],
    [11, -4, -4], [4, -11, -4], [4, -4, -11],
];

/// 4D gradients: 64 directions, four per hyperoctant.
pub const HYPER: [[i8; 4]; 64] = [
    [3, 1, 1, 1], [1, 3, 1, 1], [1, 1, 3, 1], [1, 1, 1, 3],
    [-3, 1, 1, 1], [-1, 3, 1, 1], [-1, 1, 3, 1], [-1, 1, 1, 3],
    [3, -1, 1, 1], [1, -3, 1, 1], [1, -1, 3, 1], [1, -1, 1, 3],
    [-3, -1, 1, 1], [-1, -3, 1, 1], [-1, -1, 3, 1], [-1, -1, 1, 3],
    [3, 1, -1, 1], [1, 3, -1, 1], [1, 1, -3, 1], [1, 1, -1, 3],
    [-3, 1, -1, 1], [-1, 3, -1, 1], [-1, 1, -3, 1], [-1, 1, -1, 3],
    [3, -1, -1, 1], [1, -3, -1, 1], [1, -1, -3, 1], [1, -1, -1, 3],
    [-3, -1, -1, 1], [-1, -3, -1, 1], [-1, -1, -3, 1], [-1, -1, -1, 3],
    [3, 1, 1, -1], [1, 3, 1, -1], [1, 1, 3, -1], [1, 1, 1, -3],
    [-3, 1, 1, -1], [-1, 3, 1, -1], [-1, 1, 3, -1], [-1, 1, 1, -3],
    [3, -1, 1, -1], [1, -3, 1, -1], [1, -1, 3, -1], [1, -1, 1, -3],
    [-3, -1, 1, -1], [-1, -3, 1, -1], [-1, -1, 3, -1], [-1, -1, 1, -3],
    [3, 1, -1, -1], [1, 3, -1, -1], [1, 1, -3, -1], [1, 1, -1, -3],
    [-3, 1, -1, -1], [-1, 3, -1, -1], [-1, 1, -3, -1], [-1, 1, -1, -3],
    [3, -1, -1, -1], [1, -3, -1, -1], [1, -1, -3, -1], [1, -1, -1, -3],
    [-3, -1, -1, -1], [-1, -3, -1, -1], [-1, -1, -3, -1], [-1, -1, -1, -3],
];
