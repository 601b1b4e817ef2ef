//! Contribution chains for the 2D, 3D and 4D lattices.
//!
//! A chain starts with the vertices of the simplex slice picked by
//! `floor(in_sum)` and continues with the extra lattice points named by the
//! key: one in 2D, two in 3D, three in 4D. These are the OpenSimplex
//! lookup tables, so a far neighbour whose support barely reaches the cell
//! is not always listed.
//! Offsets are relative to the floored cell origin in skewed space.

use super::ChainTable;

/// Triangles of the 2D cell: lower (`in_sum < 1`) and upper.
pub(super) const PLANE: ChainTable<2> = ChainTable {
    key_space: 64,
    slices: &[
        &[[1, 0], [0, 1], [0, 0]],
        &[[1, 0], [0, 1], [1, 1]],
    ],
    chains: &[
        (0, &[[-1, 1]]),
        (0, &[[1, -1]]),
        (0, &[[1, 1]]),
        (1, &[[0, 0]]),
        (1, &[[0, 2]]),
        (1, &[[2, 0]]),
    ],
    keys: &[
        (0, 0), (1, 1), (4, 0), (17, 1), (20, 2), (21, 2),
        (22, 3), (23, 3), (26, 4), (39, 5), (42, 4), (43, 5),
    ],
};

/// Lower tetrahedron, upper tetrahedron and octahedron of the 3D cell,
/// each chain followed by two extra lattice points.
pub(super) const SPACE: ChainTable<3> = ChainTable {
    key_space: 2048,
    slices: &[
        &[[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1]],
        &[[1, 1, 0], [1, 0, 1], [0, 1, 1], [1, 1, 1]],
        &[[1, 0, 0], [0, 1, 0], [0, 0, 1], [1, 1, 0], [1, 0, 1], [0, 1, 1]],
    ],
    chains: &[
        (0, &[[1, -1, 0], [1, 0, -1]]),
        (0, &[[-1, 1, 0], [0, 1, -1]]),
        (0, &[[-1, 0, 1], [0, -1, 1]]),
        (0, &[[1, 1, 0], [1, 1, -1]]),
        (0, &[[1, 0, 1], [1, -1, 1]]),
        (0, &[[0, 1, 1], [-1, 1, 1]]),
        (1, &[[2, 1, 0], [1, 2, 0]]),
        (1, &[[2, 0, 1], [1, 0, 2]]),
        (1, &[[0, 2, 1], [0, 1, 2]]),
        (1, &[[1, 0, 0], [2, 0, 0]]),
        (1, &[[0, 1, 0], [0, 2, 0]]),
        (1, &[[0, 0, 1], [0, 0, 2]]),
        (2, &[[0, 0, 0], [1, -1, 1]]),
        (2, &[[0, 0, 0], [-1, 1, 1]]),
        (2, &[[0, 0, 0], [1, 1, -1]]),
        (2, &[[1, 1, 1], [0, 0, 2]]),
        (2, &[[1, 1, 1], [2, 0, 0]]),
        (2, &[[1, 1, 1], [0, 2, 0]]),
        (2, &[[1, -1, 1], [0, 0, 2]]),
        (2, &[[1, -1, 1], [2, 0, 0]]),
        (2, &[[-1, 1, 1], [0, 0, 2]]),
        (2, &[[-1, 1, 1], [0, 2, 0]]),
        (2, &[[1, 1, -1], [2, 0, 0]]),
        (2, &[[1, 1, -1], [0, 2, 0]]),
    ],
    keys: &[
        (0, 2), (1, 1), (2, 2), (5, 1), (6, 0), (7, 0),
        (32, 2), (34, 2), (129, 1), (133, 1), (160, 5), (161, 5),
        (518, 0), (519, 0), (546, 4), (550, 4), (645, 3), (647, 3),
        (672, 5), (673, 5), (674, 4), (677, 3), (678, 4), (679, 3),
        (680, 13), (681, 13), (682, 12), (685, 14), (686, 12), (687, 14),
        (712, 20), (714, 18), (809, 21), (813, 23), (840, 20), (841, 21),
        (1198, 19), (1199, 22), (1226, 18), (1230, 19), (1325, 23), (1327, 22),
        (1352, 15), (1353, 17), (1354, 15), (1357, 17), (1358, 16), (1359, 16),
        (1360, 11), (1361, 10), (1362, 11), (1365, 10), (1366, 9), (1367, 9),
        (1392, 11), (1394, 11), (1489, 10), (1493, 10), (1520, 8), (1521, 8),
        (1878, 9), (1879, 9), (1906, 7), (1910, 7), (2005, 6), (2007, 6),
        (2032, 8), (2033, 8), (2034, 7), (2037, 6), (2038, 7), (2039, 6),
    ],
};

/// Lower pentachoron, upper pentachoron and the two middle slices of the
/// 4D cell, each chain followed by three extra lattice points.
pub(super) const HYPER: ChainTable<4> = ChainTable {
    key_space: 1 << 20,
    slices: &[
        &[[0, 0, 0, 0], [1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]],
        &[[1, 1, 1, 0], [1, 1, 0, 1], [1, 0, 1, 1], [0, 1, 1, 1], [1, 1, 1, 1]],
        &[[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1], [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1], [0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1]],
        &[[1, 1, 1, 0], [1, 1, 0, 1], [1, 0, 1, 1], [0, 1, 1, 1], [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1], [0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1]],
    ],
    chains: &[
        (0, &[[-1, 0, 0, 1], [0, -1, 0, 1], [0, 0, -1, 1]]),
        (0, &[[-1, 0, 1, 0], [0, -1, 1, 0], [0, 0, 1, -1]]),
        (0, &[[-1, 1, 0, 0], [0, 1, -1, 0], [0, 1, 0, -1]]),
        (0, &[[1, -1, 0, 0], [1, 0, -1, 0], [1, 0, 0, -1]]),
        (0, &[[0, 0, 1, 1], [-1, 0, 1, 1], [0, -1, 1, 1]]),
        (0, &[[0, 1, 0, 1], [-1, 1, 0, 1], [0, 1, -1, 1]]),
        (0, &[[0, 1, 1, 0], [-1, 1, 1, 0], [0, 1, 1, -1]]),
        (0, &[[1, 0, 0, 1], [1, -1, 0, 1], [1, 0, -1, 1]]),
        (0, &[[1, 0, 1, 0], [1, -1, 1, 0], [1, 0, 1, -1]]),
        (0, &[[1, 1, 0, 0], [1, 1, -1, 0], [1, 1, 0, -1]]),
        (2, &[[-1, 0, 1, 1], [0, -1, 1, 1], [0, 0, 0, 0]]),
        (2, &[[-1, 1, 0, 1], [0, 1, -1, 1], [0, 0, 0, 0]]),
        (2, &[[-1, 1, 1, 0], [0, 1, 1, -1], [0, 0, 0, 0]]),
        (2, &[[1, -1, 0, 1], [1, 0, -1, 1], [0, 0, 0, 0]]),
        (2, &[[1, -1, 1, 0], [1, 0, 1, -1], [0, 0, 0, 0]]),
        (2, &[[1, 1, -1, 0], [1, 1, 0, -1], [0, 0, 0, 0]]),
        (2, &[[-1, 0, 1, 1], [0, -1, 1, 1], [0, 0, 0, 2]]),
        (2, &[[-1, 1, 0, 1], [0, 1, -1, 1], [0, 0, 0, 2]]),
        (2, &[[1, -1, 0, 1], [1, 0, -1, 1], [0, 0, 0, 2]]),
        (2, &[[-1, 0, 1, 1], [0, -1, 1, 1], [0, 0, 2, 0]]),
        (2, &[[-1, 1, 1, 0], [0, 1, 1, -1], [0, 0, 2, 0]]),
        (2, &[[1, -1, 1, 0], [1, 0, 1, -1], [0, 0, 2, 0]]),
        (2, &[[-1, 1, 0, 1], [0, 1, -1, 1], [0, 2, 0, 0]]),
        (2, &[[-1, 1, 1, 0], [0, 1, 1, -1], [0, 2, 0, 0]]),
        (2, &[[1, 1, -1, 0], [1, 1, 0, -1], [0, 2, 0, 0]]),
        (2, &[[0, 1, 1, 1], [-1, 1, 1, 1], [0, 0, 0, 2]]),
        (2, &[[0, 1, 1, 1], [-1, 1, 1, 1], [0, 0, 2, 0]]),
        (2, &[[0, 1, 1, 1], [-1, 1, 1, 1], [0, 2, 0, 0]]),
        (2, &[[1, -1, 0, 1], [1, 0, -1, 1], [2, 0, 0, 0]]),
        (2, &[[1, -1, 1, 0], [1, 0, 1, -1], [2, 0, 0, 0]]),
        (2, &[[1, 1, -1, 0], [1, 1, 0, -1], [2, 0, 0, 0]]),
        (2, &[[1, 0, 1, 1], [1, -1, 1, 1], [0, 0, 0, 2]]),
        (2, &[[1, 0, 1, 1], [1, -1, 1, 1], [0, 0, 2, 0]]),
        (2, &[[1, 0, 1, 1], [1, -1, 1, 1], [2, 0, 0, 0]]),
        (2, &[[1, 1, 0, 1], [1, 1, -1, 1], [0, 0, 0, 2]]),
        (2, &[[1, 1, 0, 1], [1, 1, -1, 1], [0, 2, 0, 0]]),
        (2, &[[1, 1, 0, 1], [1, 1, -1, 1], [2, 0, 0, 0]]),
        (2, &[[1, 1, 1, 0], [1, 1, 1, -1], [0, 0, 2, 0]]),
        (2, &[[1, 1, 1, 0], [1, 1, 1, -1], [0, 2, 0, 0]]),
        (2, &[[1, 1, 1, 0], [1, 1, 1, -1], [2, 0, 0, 0]]),
        (3, &[[0, 0, 0, 1], [0, 0, 0, 2], [-1, 1, 1, 1]]),
        (3, &[[0, 0, 1, 0], [0, 0, 2, 0], [-1, 1, 1, 1]]),
        (3, &[[0, 1, 0, 0], [0, 2, 0, 0], [-1, 1, 1, 1]]),
        (3, &[[0, 0, 0, 1], [0, 0, 0, 2], [1, -1, 1, 1]]),
        (3, &[[0, 0, 1, 0], [0, 0, 2, 0], [1, -1, 1, 1]]),
        (3, &[[0, 0, 0, 1], [0, 0, 0, 2], [1, 1, -1, 1]]),
        (3, &[[0, 1, 0, 0], [0, 2, 0, 0], [1, 1, -1, 1]]),
        (3, &[[0, 0, 1, 0], [0, 0, 2, 0], [1, 1, 1, -1]]),
        (3, &[[0, 1, 0, 0], [0, 2, 0, 0], [1, 1, 1, -1]]),
        (3, &[[1, 0, 0, 0], [2, 0, 0, 0], [1, -1, 1, 1]]),
        (3, &[[1, 0, 0, 0], [2, 0, 0, 0], [1, 1, -1, 1]]),
        (3, &[[1, 0, 0, 0], [2, 0, 0, 0], [1, 1, 1, -1]]),
        (3, &[[0, 0, 2, 1], [0, 0, 1, 2], [-1, 1, 1, 1]]),
        (3, &[[0, 0, 2, 1], [0, 0, 1, 2], [1, -1, 1, 1]]),
        (3, &[[0, 2, 0, 1], [0, 1, 0, 2], [-1, 1, 1, 1]]),
        (3, &[[0, 2, 0, 1], [0, 1, 0, 2], [1, 1, -1, 1]]),
        (3, &[[0, 2, 1, 0], [0, 1, 2, 0], [-1, 1, 1, 1]]),
        (3, &[[0, 2, 1, 0], [0, 1, 2, 0], [1, 1, 1, -1]]),
        (3, &[[2, 0, 0, 1], [1, 0, 0, 2], [1, -1, 1, 1]]),
        (3, &[[2, 0, 0, 1], [1, 0, 0, 2], [1, 1, -1, 1]]),
        (3, &[[2, 0, 1, 0], [1, 0, 2, 0], [1, -1, 1, 1]]),
        (3, &[[2, 0, 1, 0], [1, 0, 2, 0], [1, 1, 1, -1]]),
        (3, &[[2, 1, 0, 0], [1, 2, 0, 0], [1, 1, -1, 1]]),
        (3, &[[2, 1, 0, 0], [1, 2, 0, 0], [1, 1, 1, -1]]),
        (3, &[[0, 0, 2, 1], [0, 0, 1, 2], [1, 1, 1, 1]]),
        (3, &[[0, 2, 0, 1], [0, 1, 0, 2], [1, 1, 1, 1]]),
        (3, &[[0, 2, 1, 0], [0, 1, 2, 0], [1, 1, 1, 1]]),
        (3, &[[2, 0, 0, 1], [1, 0, 0, 2], [1, 1, 1, 1]]),
        (3, &[[2, 0, 1, 0], [1, 0, 2, 0], [1, 1, 1, 1]]),
        (3, &[[2, 1, 0, 0], [1, 2, 0, 0], [1, 1, 1, 1]]),
        (1, &[[0, 0, 1, 1], [0, 0, 2, 1], [0, 0, 1, 2]]),
        (1, &[[0, 1, 0, 1], [0, 2, 0, 1], [0, 1, 0, 2]]),
        (1, &[[0, 1, 1, 0], [0, 2, 1, 0], [0, 1, 2, 0]]),
        (1, &[[1, 0, 0, 1], [2, 0, 0, 1], [1, 0, 0, 2]]),
        (1, &[[1, 0, 1, 0], [2, 0, 1, 0], [1, 0, 2, 0]]),
        (1, &[[1, 1, 0, 0], [2, 1, 0, 0], [1, 2, 0, 0]]),
        (1, &[[0, 2, 1, 1], [0, 1, 2, 1], [0, 1, 1, 2]]),
        (1, &[[2, 0, 1, 1], [1, 0, 2, 1], [1, 0, 1, 2]]),
        (1, &[[2, 1, 0, 1], [1, 2, 0, 1], [1, 1, 0, 2]]),
        (1, &[[2, 1, 1, 0], [1, 2, 1, 0], [1, 1, 2, 0]]),
    ],
    keys: &[
        (0, 0), (1, 1), (2, 0), (5, 1), (6, 2), (7, 2),
        (8, 0), (9, 1), (18, 0), (22, 2), (24, 0), (26, 0),
        (37, 1), (39, 2), (41, 1), (45, 1), (54, 2), (55, 2),
        (56, 3), (57, 3), (58, 3), (61, 3), (62, 3), (63, 3),
        (256, 0), (258, 0), (264, 0), (274, 0), (280, 0), (282, 0),
        (2049, 1), (2053, 1), (2057, 1), (2085, 1), (2089, 1), (2093, 1),
        (2304, 4), (2305, 4), (2312, 4), (2313, 4), (16390, 2), (16391, 2),
        (16406, 2), (16423, 2), (16438, 2), (16439, 2), (16642, 5), (16646, 5),
        (16658, 5), (16662, 5), (18437, 6), (18439, 6), (18469, 6), (18471, 6),
        (18688, 4), (18689, 4), (18690, 5), (18693, 6), (18694, 5), (18695, 6),
        (131128, 3), (131129, 3), (131130, 3), (131133, 3), (131134, 3), (131135, 3),
        (131352, 7), (131354, 7), (131384, 7), (131386, 7), (133161, 8), (133165, 8),
        (133177, 8), (133181, 8), (133384, 4), (133385, 4), (133400, 7), (133417, 8),
        (133432, 7), (133433, 8), (147510, 9), (147511, 9), (147518, 9), (147519, 9),
        (147730, 5), (147734, 5), (147738, 7), (147766, 9), (147770, 7), (147774, 9),
        (149541, 6), (149543, 6), (149549, 8), (149559, 9), (149565, 8), (149567, 9),
        (149760, 4), (149761, 4), (149762, 5), (149765, 6), (149766, 5), (149767, 6),
        (149768, 4), (149769, 4), (149778, 5), (149782, 5), (149784, 7), (149786, 7),
        (149797, 6), (149799, 6), (149801, 8), (149805, 8), (149814, 9), (149815, 9),
        (149816, 7), (149817, 8), (149818, 7), (149821, 8), (149822, 9), (149823, 9),
        (149824, 10), (149825, 10), (149826, 11), (149829, 12), (149830, 11), (149831, 12),
        (149832, 10), (149833, 10), (149842, 11), (149846, 11), (149848, 13), (149850, 13),
        (149861, 12), (149863, 12), (149865, 14), (149869, 14), (149878, 15), (149879, 15),
        (149880, 13), (149881, 14), (149882, 13), (149885, 14), (149886, 15), (149887, 15),
        (150080, 16), (150082, 17), (150088, 16), (150098, 17), (150104, 18), (150106, 18),
        (151873, 19), (151877, 20), (151881, 19), (151909, 20), (151913, 21), (151917, 21),
        (152128, 16), (152129, 19), (152136, 16), (152137, 19), (166214, 22), (166215, 23),
        (166230, 22), (166247, 23), (166262, 24), (166263, 24), (166466, 17), (166470, 22),
        (166482, 17), (166486, 22), (168261, 20), (168263, 23), (168293, 20), (168295, 23),
        (168512, 25), (168513, 26), (168514, 25), (168517, 26), (168518, 27), (168519, 27),
        (280952, 28), (280953, 29), (280954, 28), (280957, 29), (280958, 30), (280959, 30),
        (281176, 18), (281178, 18), (281208, 28), (281210, 28), (282985, 21), (282989, 21),
        (283001, 29), (283005, 29), (283208, 31), (283209, 32), (283224, 31), (283241, 32),
        (283256, 33), (283257, 33), (297334, 24), (297335, 24), (297342, 30), (297343, 30),
        (297554, 34), (297558, 35), (297562, 34), (297590, 35), (297594, 36), (297598, 36),
        (299365, 37), (299367, 38), (299373, 37), (299383, 38), (299389, 39), (299391, 39),
        (299584, 25), (299585, 26), (299586, 25), (299589, 26), (299590, 27), (299591, 27),
        (299592, 31), (299593, 32), (299602, 34), (299606, 35), (299608, 31), (299610, 34),
        (299621, 37), (299623, 38), (299625, 32), (299629, 37), (299638, 35), (299639, 38),
        (299640, 33), (299641, 33), (299642, 36), (299645, 39), (299646, 36), (299647, 39),
        (299648, 40), (299649, 41), (299650, 40), (299653, 41), (299654, 42), (299655, 42),
        (299656, 43), (299657, 44), (299666, 45), (299670, 46), (299672, 43), (299674, 45),
        (299685, 47), (299687, 48), (299689, 44), (299693, 47), (299702, 46), (299703, 48),
        (299704, 49), (299705, 49), (299706, 50), (299709, 51), (299710, 50), (299711, 51),
        (299904, 40), (299906, 40), (299912, 43), (299922, 45), (299928, 43), (299930, 45),
        (301697, 41), (301701, 41), (301705, 44), (301733, 47), (301737, 44), (301741, 47),
        (301952, 52), (301953, 52), (301960, 53), (301961, 53), (316038, 42), (316039, 42),
        (316054, 46), (316071, 48), (316086, 46), (316087, 48), (316290, 54), (316294, 54),
        (316306, 55), (316310, 55), (318085, 56), (318087, 56), (318117, 57), (318119, 57),
        (318336, 52), (318337, 52), (318338, 54), (318341, 56), (318342, 54), (318343, 56),
        (430776, 49), (430777, 49), (430778, 50), (430781, 51), (430782, 50), (430783, 51),
        (431000, 58), (431002, 59), (431032, 58), (431034, 59), (432809, 60), (432813, 61),
        (432825, 60), (432829, 61), (433032, 53), (433033, 53), (433048, 58), (433065, 60),
        (433080, 58), (433081, 60), (447158, 62), (447159, 63), (447166, 62), (447167, 63),
        (447378, 55), (447382, 55), (447386, 59), (447414, 62), (447418, 59), (447422, 62),
        (449189, 57), (449191, 57), (449197, 61), (449207, 63), (449213, 61), (449215, 63),
        (449408, 64), (449409, 64), (449410, 65), (449413, 66), (449414, 65), (449415, 66),
        (449416, 64), (449417, 64), (449426, 65), (449430, 65), (449432, 67), (449434, 67),
        (449445, 66), (449447, 66), (449449, 68), (449453, 68), (449462, 69), (449463, 69),
        (449464, 67), (449465, 68), (449466, 67), (449469, 68), (449470, 69), (449471, 69),
        (449472, 70), (449473, 70), (449474, 71), (449477, 72), (449478, 71), (449479, 72),
        (449480, 70), (449481, 70), (449490, 71), (449494, 71), (449496, 73), (449498, 73),
        (449509, 72), (449511, 72), (449513, 74), (449517, 74), (449526, 75), (449527, 75),
        (449528, 73), (449529, 74), (449530, 73), (449533, 74), (449534, 75), (449535, 75),
        (449728, 70), (449730, 71), (449736, 70), (449746, 71), (449752, 73), (449754, 73),
        (451521, 70), (451525, 72), (451529, 70), (451557, 72), (451561, 74), (451565, 74),
        (451776, 70), (451777, 70), (451784, 70), (451785, 70), (465862, 71), (465863, 72),
        (465878, 71), (465895, 72), (465910, 75), (465911, 75), (466114, 71), (466118, 71),
        (466130, 71), (466134, 71), (467909, 72), (467911, 72), (467941, 72), (467943, 72),
        (468160, 76), (468161, 76), (468162, 76), (468165, 76), (468166, 76), (468167, 76),
        (580600, 73), (580601, 74), (580602, 73), (580605, 74), (580606, 75), (580607, 75),
        (580824, 73), (580826, 73), (580856, 73), (580858, 73), (582633, 74), (582637, 74),
        (582649, 74), (582653, 74), (582856, 77), (582857, 77), (582872, 77), (582889, 77),
        (582904, 77), (582905, 77), (596982, 75), (596983, 75), (596990, 75), (596991, 75),
        (597202, 78), (597206, 78), (597210, 78), (597238, 78), (597242, 78), (597246, 78),
        (599013, 79), (599015, 79), (599021, 79), (599031, 79), (599037, 79), (599039, 79),
        (599232, 76), (599233, 76), (599234, 76), (599237, 76), (599238, 76), (599239, 76),
        (599240, 77), (599241, 77), (599250, 78), (599254, 78), (599256, 77), (599258, 78),
        (599269, 79), (599271, 79), (599273, 77), (599277, 79), (599286, 78), (599287, 79),
        (599288, 77), (599289, 77), (599290, 78), (599293, 79), (599294, 78), (599295, 79),
    ],
};
