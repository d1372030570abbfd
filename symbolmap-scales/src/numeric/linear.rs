use super::{range_bounds, ContinuousNumericScale};

#[derive(Clone, Debug)]
pub struct LinearNumericScaleConfig {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub clamp: bool,
    pub round: bool,
}

impl Default for LinearNumericScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            round: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearNumericScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
    round: bool,
}

impl LinearNumericScale {
    /// Creates a new linear scale from its configuration
    pub fn new(config: &LinearNumericScaleConfig) -> Self {
        Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            round: config.round,
        }
    }

    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn round(&self) -> bool {
        self.round
    }
}

impl Default for LinearNumericScale {
    fn default() -> Self {
        Self::new(&Default::default())
    }
}

impl ContinuousNumericScale for LinearNumericScale {
    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn clamp(&self) -> bool {
        self.clamp
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.range_start = range.0;
        self.range_end = range.1;
    }

    fn set_clamp(&mut self, clamp: bool) {
        self.clamp = clamp;
    }

    fn scale(&self, value: f64) -> f64 {
        // Degenerate domain maps everything to the start of the range
        if self.domain_start == self.domain_end {
            return self.range_start;
        }

        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        let mut v = self.range_start + t * (self.range_end - self.range_start);

        if self.clamp {
            let (min, max) = range_bounds(self.range());
            v = v.clamp(min, max);
        }
        if self.round {
            v = v.round();
        }
        v
    }

    fn invert(&self, value: f64) -> f64 {
        if self.range_start == self.range_end {
            return self.domain_start;
        }

        let value = if self.clamp {
            let (min, max) = range_bounds(self.range());
            value.clamp(min, max)
        } else {
            value
        };

        let t = (value - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + t * (self.domain_end - self.domain_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_defaults() {
        let scale = LinearNumericScale::default();
        assert_eq!(scale.domain(), (0.0, 1.0));
        assert_eq!(scale.range(), (0.0, 1.0));
        assert!(!scale.clamp());
    }

    #[test]
    fn test_scale_and_invert() {
        let scale = LinearNumericScale::default()
            .with_domain((10.0, 20.0))
            .with_range((0.0, 100.0));
        assert_approx_eq!(f64, scale.scale(15.0), 50.0);
        assert_approx_eq!(f64, scale.scale(25.0), 150.0);
        assert_approx_eq!(f64, scale.invert(50.0), 15.0);
    }

    #[test]
    fn test_clamp_reversed_range() {
        let scale = LinearNumericScale::default()
            .with_domain((0.0, 10.0))
            .with_range((100.0, 0.0))
            .with_clamp(true);
        assert_approx_eq!(f64, scale.scale(-5.0), 100.0);
        assert_approx_eq!(f64, scale.scale(20.0), 0.0);
        assert_approx_eq!(f64, scale.scale(2.5), 75.0);
    }

    #[test]
    fn test_round() {
        let scale = LinearNumericScale::default()
            .with_domain((0.0, 3.0))
            .with_range((0.0, 10.0))
            .with_round(true);
        assert_eq!(scale.scale(1.0), 3.0);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearNumericScale::default()
            .with_domain((4.0, 4.0))
            .with_range((0.0, 10.0));
        assert_approx_eq!(f64, scale.scale(4.0), 0.0);
        assert_approx_eq!(f64, scale.scale(100.0), 0.0);
    }
}
