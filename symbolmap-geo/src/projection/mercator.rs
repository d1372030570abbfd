use std::f64::consts::{FRAC_PI_4, PI};

use super::{Projection, ProjectionTransform, RawProjection, DEFAULT_PRECISION};

/// Latitude at which the Mercator map becomes square
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq)]
struct MercatorRaw;

impl RawProjection for MercatorRaw {
    fn forward(&self, lambda: f64, phi: f64) -> [f64; 2] {
        [lambda, (FRAC_PI_4 + phi / 2.0).tan().ln()]
    }
}

/// Spherical Mercator projection.
///
/// Latitudes are clamped to ±[`MAX_LATITUDE`] so the poles project to finite
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Mercator {
    transform: ProjectionTransform,
    precision: f64,
}

impl Mercator {
    pub fn new() -> Self {
        Self {
            transform: ProjectionTransform {
                scale: 150.0,
                translate: [480.0, 250.0],
                center: [0.0, 0.0],
                rotate: 0.0,
            },
            precision: DEFAULT_PRECISION,
        }
    }

    /// World map filling a canvas of the given width, centered on the canvas
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self::new()
            .with_scale((width + 1.0) / 2.0 / PI)
            .with_translate([width / 2.0, height / 2.0])
            .with_precision(0.1)
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_translate(mut self, translate: [f64; 2]) -> Self {
        self.transform.translate = translate;
        self
    }

    pub fn with_center(mut self, center: [f64; 2]) -> Self {
        self.transform.center = center;
        self
    }

    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.transform.rotate = rotate;
        self
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn get_scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn get_translate(&self) -> [f64; 2] {
        self.transform.translate
    }

    pub fn get_center(&self) -> [f64; 2] {
        self.transform.center
    }
}

impl Default for Mercator {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for Mercator {
    fn project(&self, lon_lat: [f64; 2]) -> Option<[f64; 2]> {
        let lat = lon_lat[1].clamp(-MAX_LATITUDE, MAX_LATITUDE);
        Some(self.transform.apply(&MercatorRaw, [lon_lat[0], lat]))
    }

    fn precision(&self) -> f64 {
        self.precision
    }
}
