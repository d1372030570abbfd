pub mod albers;
pub mod albers_usa;
pub mod conic;
pub mod mercator;

use std::f64::consts::PI;
use std::fmt::Debug;

/// Default resampling tolerance, in pixels
pub const DEFAULT_PRECISION: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Maps geographic coordinates to planar pixel coordinates.
///
/// Input is `[longitude, latitude]` in degrees, output is `[x, y]` in pixels
/// with y growing downward. Composite projections return `None` for points
/// that none of their parts cover.
pub trait Projection: Debug {
    fn project(&self, lon_lat: [f64; 2]) -> Option<[f64; 2]>;

    /// Maximum distance in pixels that a resampled line may deviate from
    /// the projected curve
    fn precision(&self) -> f64 {
        DEFAULT_PRECISION
    }
}

/// Raw projection in radians, before scaling and translation
pub(crate) trait RawProjection: Debug {
    fn forward(&self, lambda: f64, phi: f64) -> [f64; 2];
}

/// Scale, translation and center shared by the single-part projections.
///
/// The center is given in rotated coordinates, so it is projected with the
/// raw projection directly.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProjectionTransform {
    pub scale: f64,
    pub translate: [f64; 2],
    pub center: [f64; 2],
    pub rotate: f64,
}

impl ProjectionTransform {
    pub fn apply(&self, raw: &dyn RawProjection, lon_lat: [f64; 2]) -> [f64; 2] {
        let lambda = wrap_lambda(lon_lat[0].to_radians() + self.rotate.to_radians());
        let phi = lon_lat[1].to_radians();
        let [x, y] = raw.forward(lambda, phi);

        let [cx, cy] = raw.forward(self.center[0].to_radians(), self.center[1].to_radians());
        let dx = self.translate[0] - cx * self.scale;
        let dy = self.translate[1] + cy * self.scale;

        [x * self.scale + dx, dy - y * self.scale]
    }
}

/// Wraps a longitude in radians into [-π, π]
pub(crate) fn wrap_lambda(lambda: f64) -> f64 {
    if lambda > PI {
        lambda - 2.0 * PI
    } else if lambda < -PI {
        lambda + 2.0 * PI
    } else {
        lambda
    }
}
