use super::conic::ConicEqualAreaRaw;
use super::{Projection, ProjectionTransform, DEFAULT_PRECISION};

/// Albers equal-area conic projection.
///
/// Defaults are centered on the contiguous United States.
#[derive(Debug, Clone, PartialEq)]
pub struct Albers {
    raw: ConicEqualAreaRaw,
    parallels: [f64; 2],
    transform: ProjectionTransform,
    precision: f64,
}

impl Albers {
    pub fn new() -> Self {
        let parallels = [29.5, 45.5];
        Self {
            raw: ConicEqualAreaRaw::new(parallels),
            parallels,
            transform: ProjectionTransform {
                scale: 1070.0,
                translate: [480.0, 250.0],
                center: [-0.6, 38.7],
                rotate: 96.0,
            },
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the two standard parallels, in degrees
    pub fn with_parallels(mut self, parallels: [f64; 2]) -> Self {
        self.raw = ConicEqualAreaRaw::new(parallels);
        self.parallels = parallels;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_translate(mut self, translate: [f64; 2]) -> Self {
        self.transform.translate = translate;
        self
    }

    /// Center in rotated coordinates
    pub fn with_center(mut self, center: [f64; 2]) -> Self {
        self.transform.center = center;
        self
    }

    /// Longitude rotation in degrees
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.transform.rotate = rotate;
        self
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn get_parallels(&self) -> [f64; 2] {
        self.parallels
    }

    pub fn get_scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn get_translate(&self) -> [f64; 2] {
        self.transform.translate
    }
}

impl Default for Albers {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for Albers {
    fn project(&self, lon_lat: [f64; 2]) -> Option<[f64; 2]> {
        Some(self.transform.apply(&self.raw, lon_lat))
    }

    fn precision(&self) -> f64 {
        self.precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_center_projects_to_translate() {
        // The default center (-0.6, 38.7) is in rotated coordinates, which is
        // longitude -96.6 before the 96 degree rotation
        let projection = Albers::new();
        let [x, y] = projection.project([-96.6, 38.7]).unwrap();
        assert_approx_eq!(f64, x, 480.0, epsilon = 1e-6);
        assert_approx_eq!(f64, y, 250.0, epsilon = 1e-6);
    }

    #[test]
    fn test_orientation() {
        let projection = Albers::new();
        let [x_west, _] = projection.project([-120.0, 40.0]).unwrap();
        let [x_east, _] = projection.project([-75.0, 40.0]).unwrap();
        let [_, y_north] = projection.project([-96.0, 48.0]).unwrap();
        let [_, y_south] = projection.project([-96.0, 30.0]).unwrap();
        assert!(x_west < x_east);
        assert!(y_north < y_south);
    }
}
