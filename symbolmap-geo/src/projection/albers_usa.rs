use super::albers::Albers;
use super::{Projection, DEFAULT_PRECISION};

/// Axis-aligned clip extent, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    min: [f64; 2],
    max: [f64; 2],
}

impl Extent {
    fn contains(&self, point: [f64; 2]) -> bool {
        point[0] >= self.min[0]
            && point[0] <= self.max[0]
            && point[1] >= self.min[1]
            && point[1] <= self.max[1]
    }
}

/// Composite Albers projection of the United States: the lower 48 states
/// plus Alaska and Hawaii as insets in the lower left corner.
///
/// Each part is only consulted inside its own clip extent, so points outside
/// the three regions project to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbersUsa {
    scale: f64,
    translate: [f64; 2],
    precision: f64,
    parts: Vec<(Albers, Extent)>,
}

impl AlbersUsa {
    pub fn new() -> Self {
        let mut this = Self {
            scale: 1070.0,
            translate: [480.0, 250.0],
            precision: DEFAULT_PRECISION,
            parts: Vec::new(),
        };
        this.reset();
        this
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self.reset();
        self
    }

    pub fn with_translate(mut self, translate: [f64; 2]) -> Self {
        self.translate = translate;
        self.reset();
        self
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self.reset();
        self
    }

    pub fn get_scale(&self) -> f64 {
        self.scale
    }

    pub fn get_translate(&self) -> [f64; 2] {
        self.translate
    }

    fn reset(&mut self) {
        let k = self.scale;
        let [x, y] = self.translate;

        let lower48 = Albers::new()
            .with_scale(k)
            .with_translate([x, y])
            .with_precision(self.precision);
        let alaska = Albers::new()
            .with_rotate(154.0)
            .with_center([-2.0, 58.5])
            .with_parallels([55.0, 65.0])
            .with_scale(0.35 * k)
            .with_translate([x - 0.307 * k, y + 0.201 * k])
            .with_precision(self.precision);
        let hawaii = Albers::new()
            .with_rotate(157.0)
            .with_center([-3.0, 19.9])
            .with_parallels([8.0, 18.0])
            .with_scale(k)
            .with_translate([x - 0.205 * k, y + 0.212 * k])
            .with_precision(self.precision);

        self.parts = vec![
            (
                lower48,
                Extent {
                    min: [x - 0.455 * k, y - 0.238 * k],
                    max: [x + 0.455 * k, y + 0.238 * k],
                },
            ),
            (
                alaska,
                Extent {
                    min: [x - 0.425 * k, y + 0.120 * k],
                    max: [x - 0.214 * k, y + 0.234 * k],
                },
            ),
            (
                hawaii,
                Extent {
                    min: [x - 0.214 * k, y + 0.166 * k],
                    max: [x - 0.115 * k, y + 0.234 * k],
                },
            ),
        ];
    }
}

impl Default for AlbersUsa {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for AlbersUsa {
    fn project(&self, lon_lat: [f64; 2]) -> Option<[f64; 2]> {
        self.parts.iter().find_map(|(projection, extent)| {
            projection
                .project(lon_lat)
                .filter(|point| extent.contains(*point))
        })
    }

    fn precision(&self) -> f64 {
        self.precision
    }
}
