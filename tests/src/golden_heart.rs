//! A heart-shaped test path, stored with its expected flattened output.
//!
//! The same shape is stored three ways: as the six cubics it is authored
//! with, as a lossy quadratic re-fit of those cubics, and as a snapshot of
//! the flattened points an earlier implementation produced at an
//! (unrecorded) tolerance around 0.1. The snapshot values are rounded for
//! easier storage, and flattening engines legitimately disagree on point
//! counts, so tests must assert closeness of shape rather than exact
//! coordinates or counts.
//!
//! The outline, as an SVG path:
//!
//! ```svg
//! M140 20 C73 20 20 74 20 140 C20 275 156 310 248 443 C336 311 477 270 477
//! 140 C477 74 423 20 357 20 C309 20 267 48 248 89 C229 48 188 20 140 20 Z
//! ```

use flatiron::geom::{CubicBezierSegment, QuadraticBezierSegment};
use flatiron::math::{point, Point};
use flatiron::path::Path;

pub static HEART_CUBICS: [[[f32; 2]; 4]; 6] = [
    [[140.0, 20.0], [73.0, 20.0], [20.0, 74.0], [20.0, 140.0]],
    [[20.0, 140.0], [20.0, 275.0], [156.0, 310.0], [248.0, 443.0]],
    [[248.0, 443.0], [336.0, 311.0], [477.0, 270.0], [477.0, 140.0]],
    [[477.0, 140.0], [477.0, 74.0], [423.0, 20.0], [357.0, 20.0]],
    [[357.0, 20.0], [309.0, 20.0], [267.0, 48.0], [248.0, 89.0]],
    [[248.0, 89.0], [229.0, 48.0], [188.0, 20.0], [140.0, 20.0]],
];

pub static HEART_QUADS: [[[f32; 2]; 3]; 26] = [
    [[140.0, 20.0], [114.723, 20.1641], [92.9844, 29.4688]],
    [[92.9844, 29.4688], [71.2461, 38.7734], [54.875, 55.25]],
    [[54.875, 55.25], [38.5039, 71.7266], [29.3281, 93.4062]],
    [[29.3281, 93.4062], [20.1523, 115.086], [20.0, 140.0]],
    [[20.0, 140.0], [20.2083, 173.521], [30.5, 200.083]],
    [[30.5, 200.083], [40.7917, 226.646], [58.6667, 249.0]],
    [[58.6667, 249.0], [76.5417, 271.354], [99.5, 292.25]],
    [[99.5, 292.25], [122.458, 313.146], [148.0, 335.333]],
    [[148.0, 335.333], [173.542, 357.521], [199.167, 383.75]],
    [[199.167, 383.75], [224.792, 409.979], [248.0, 443.0]],
    [[248.0, 443.0], [270.225, 410.208], [295.519, 383.75]],
    [[295.519, 383.75], [320.812, 357.292], [346.481, 334.667]],
    [[346.481, 334.667], [372.15, 312.042], [395.5, 290.75]],
    [[395.5, 290.75], [418.85, 269.458], [437.185, 247.0]],
    [[437.185, 247.0], [455.521, 224.542], [466.148, 198.417]],
    [[466.148, 198.417], [476.775, 172.292], [477.0, 140.0]],
    [[477.0, 140.0], [476.836, 115.086], [467.531, 93.4062]],
    [[467.531, 93.4062], [458.227, 71.7266], [441.75, 55.25]],
    [[441.75, 55.25], [425.273, 38.7734], [403.594, 29.4688]],
    [[403.594, 29.4688], [381.914, 20.1641], [357.0, 20.0]],
    [[357.0, 20.0], [332.843, 20.1389], [311.63, 28.7778]],
    [[311.63, 28.7778], [290.417, 37.4167], [274.037, 52.8889]],
    [[274.037, 52.8889], [257.657, 68.3611], [248.0, 89.0]],
    [[248.0, 89.0], [238.361, 68.3611], [222.222, 52.8889]],
    [[222.222, 52.8889], [206.083, 37.4167], [185.111, 28.7778]],
    [[185.111, 28.7778], [164.139, 20.1389], [140.0, 20.0]],
];

pub static HEART_POINTS: [[f32; 2]; 147] = [
    [140.0, 20.0], [131.765, 20.3023], [123.672, 21.1078], [115.734, 22.4238], [107.965, 24.2553],
    [100.378, 26.604], [92.9844, 29.4688], [85.9188, 32.7537], [79.1253, 36.4472],
    [72.615, 40.5481], [66.3979, 45.0528], [60.4823, 49.956], [54.875, 55.25], [49.6196, 60.8847],
    [44.7551, 66.8194], [40.2891, 73.0478], [36.2272, 79.5616], [32.5731, 86.3513],
    [29.3281, 93.4062], [26.5067, 100.762], [24.1924, 108.297], [22.387, 116.001],
    [21.0895, 123.861], [20.296, 131.865], [20.0, 140.0], [20.2534, 149.197], [20.906, 158.214],
    [21.9689, 167.034], [23.4519, 175.646], [25.3637, 184.033], [27.7113, 192.184],
    [30.5, 200.083], [34.1384, 208.814], [38.2033, 217.323], [42.6928, 225.603],
    [47.6032, 233.646], [52.9299, 241.447], [58.6667, 249.0], [66.101, 257.978],
    [73.9105, 266.793], [82.0864, 275.443], [90.6194, 283.929], [99.5, 292.25], [115.262, 306.476],
    [131.433, 320.838], [148.0, 335.333], [160.921, 346.811], [173.756, 358.715],
    [186.505, 371.032], [199.167, 383.75], [207.755, 392.805], [216.162, 402.199],
    [224.39, 411.923], [232.439, 421.971], [240.308, 432.333], [248.0, 443.0], [255.407, 432.367],
    [263.018, 422.027], [270.834, 411.988], [278.856, 402.258], [287.084, 392.843],
    [295.519, 383.75], [308.072, 370.878], [320.751, 358.4], [333.554, 346.326],
    [346.481, 334.667], [363.181, 319.87], [379.524, 305.229], [395.5, 290.75], [404.531, 282.291],
    [413.224, 273.686], [421.57, 264.936], [429.56, 256.04], [437.185, 247.0], [443.055, 239.45],
    [448.516, 231.674], [453.562, 223.678], [458.186, 215.466], [462.382, 207.043],
    [466.148, 198.417], [469.016, 190.697], [471.437, 182.748], [473.413, 174.582],
    [474.949, 166.211], [476.054, 157.649], [476.734, 148.908], [477.0, 140.0], [476.697, 131.863],
    [475.889, 123.858], [474.571, 115.997], [472.739, 108.293], [470.392, 100.759],
    [467.531, 93.4062], [464.244, 86.3502], [460.548, 79.56], [456.446, 73.0462],
    [451.942, 66.8182], [447.041, 60.884], [441.75, 55.25], [436.116, 49.9595], [430.182, 45.0581],
    [423.954, 40.5537], [417.44, 36.4519], [410.65, 32.7564], [403.594, 29.4688],
    [396.241, 26.6083], [388.707, 24.2609], [381.004, 22.4285], [373.143, 21.1106],
    [365.137, 20.3032], [357.0, 20.0], [349.102, 20.2777], [341.323, 21.0241], [333.676, 22.2452],
    [326.17, 23.9443], [318.818, 26.1223], [311.63, 28.7778], [304.721, 31.8336],
    [298.058, 35.2778], [291.65, 39.1093], [285.505, 43.3251], [279.632, 47.9205],
    [274.037, 52.8889], [268.767, 58.1866], [263.861, 63.7819], [259.326, 69.6689],
    [255.169, 75.8403], [251.393, 82.2873], [248.0, 89.0], [244.622, 82.2933], [240.874, 75.8498],
    [236.755, 69.6796], [232.27, 63.7913], [227.424, 58.1923], [222.222, 52.8889],
    [216.709, 47.922], [210.918, 43.3271], [204.854, 39.1112], [198.525, 35.2792],
    [191.941, 31.8344], [185.111, 28.7778], [177.988, 26.1195], [170.693, 23.9406],
    [163.234, 22.242], [155.625, 21.0222], [147.876, 20.277], [140.0, 20.0],
];

/// The heart's cubic segments.
pub fn heart_cubics() -> Vec<CubicBezierSegment<f32>> {
    HEART_CUBICS
        .iter()
        .map(|c| CubicBezierSegment {
            from: point(c[0][0], c[0][1]),
            ctrl1: point(c[1][0], c[1][1]),
            ctrl2: point(c[2][0], c[2][1]),
            to: point(c[3][0], c[3][1]),
        })
        .collect()
}

/// The lossy quadratic re-fit of the heart.
pub fn heart_quads() -> Vec<QuadraticBezierSegment<f32>> {
    HEART_QUADS
        .iter()
        .map(|q| QuadraticBezierSegment {
            from: point(q[0][0], q[0][1]),
            ctrl: point(q[1][0], q[1][1]),
            to: point(q[2][0], q[2][1]),
        })
        .collect()
}

/// The stored flattened outline.
pub fn heart_points() -> Vec<Point> {
    HEART_POINTS.iter().map(|p| point(p[0], p[1])).collect()
}

/// The heart as a single closed path built from the cubics.
pub fn build_heart_path() -> Path {
    let mut builder = Path::builder();
    let cubics = heart_cubics();
    builder.begin(cubics[0].from);
    for cubic in &cubics {
        builder.cubic_bezier_to(cubic.ctrl1, cubic.ctrl2, cubic.to);
    }
    builder.end(true);

    builder.build()
}

/// The heart as a single closed path built from the quadratic re-fit.
pub fn build_heart_path_from_quads() -> Path {
    let mut builder = Path::builder();
    let quads = heart_quads();
    builder.begin(quads[0].from);
    for quad in &quads {
        builder.quadratic_bezier_to(quad.ctrl, quad.to);
    }
    builder.end(true);

    builder.build()
}
