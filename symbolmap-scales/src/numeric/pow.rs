use std::sync::Arc;

use super::{range_bounds, ContinuousNumericScale};
use crate::error::SymbolMapScaleError;

/// Handles power transformations with different exponents
#[derive(Clone, Debug)]
enum PowerFunction {
    Static {
        pow_fun: fn(f64) -> f64,
        pow_inv_fun: fn(f64) -> f64,
        exponent: f64,
    },
    Custom {
        exponent: f64,
    },
}

impl PowerFunction {
    /// Creates a new PowerFunction with optimized implementations for common exponents
    fn new(exponent: f64) -> Self {
        if exponent == 2.0 {
            PowerFunction::Static {
                pow_fun: |x| x * x,
                pow_inv_fun: f64::sqrt,
                exponent,
            }
        } else if exponent == 0.5 {
            PowerFunction::Static {
                pow_fun: f64::sqrt,
                pow_inv_fun: |x| x * x,
                exponent,
            }
        } else {
            PowerFunction::Custom { exponent }
        }
    }

    /// Raises the absolute value of x to the power, preserving sign
    fn pow(&self, x: f64) -> f64 {
        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        match self {
            PowerFunction::Static { pow_fun, .. } => sign * pow_fun(x.abs()),
            PowerFunction::Custom { exponent } => sign * x.abs().powf(*exponent),
        }
    }

    /// Computes the inverse power transform, preserving sign
    fn pow_inv(&self, x: f64) -> f64 {
        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        match self {
            PowerFunction::Static { pow_inv_fun, .. } => sign * pow_inv_fun(x.abs()),
            PowerFunction::Custom { exponent } => sign * x.abs().powf(1.0 / *exponent),
        }
    }

    fn exponent(&self) -> f64 {
        match self {
            PowerFunction::Static { exponent, .. } => *exponent,
            PowerFunction::Custom { exponent } => *exponent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowNumericScaleConfig {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub exponent: f64,
    pub clamp: bool,
    pub round: bool,
}

impl Default for PowNumericScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            exponent: 1.0,
            clamp: false,
            round: false,
        }
    }
}

/// A power scale that maps numeric input values using a power transform.
///
/// With an exponent of 0.5 this is the square-root scale used to size
/// circles, so that the circle *area* grows linearly with the value.
#[derive(Clone, Debug)]
pub struct PowNumericScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
    round: bool,
    power_fun: Arc<PowerFunction>,
}

impl PowNumericScale {
    pub fn new(config: &PowNumericScaleConfig) -> Self {
        Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            round: config.round,
            power_fun: Arc::new(PowerFunction::new(config.exponent)),
        }
    }

    /// Square-root scale with domain [0, 1] and range [0, 1]
    pub fn sqrt() -> Self {
        Self::new(&PowNumericScaleConfig {
            exponent: 0.5,
            ..Default::default()
        })
    }

    /// Returns the current exponent
    pub fn get_exponent(&self) -> f64 {
        self.power_fun.exponent()
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

    /// Sets the exponent. Zero and non-finite exponents are rejected since
    /// the inverse transform would be undefined.
    pub fn try_with_exponent(mut self, exponent: f64) -> Result<Self, SymbolMapScaleError> {
        if exponent == 0.0 || !exponent.is_finite() {
            return Err(SymbolMapScaleError::InvalidExponent(exponent));
        }
        self.power_fun = Arc::new(PowerFunction::new(exponent));
        Ok(self)
    }
}

impl Default for PowNumericScale {
    fn default() -> Self {
        Self::new(&Default::default())
    }
}

impl PartialEq for PowNumericScale {
    fn eq(&self, other: &Self) -> bool {
        self.domain() == other.domain()
            && self.range() == other.range()
            && self.clamp == other.clamp
            && self.round == other.round
            && self.get_exponent() == other.get_exponent()
    }
}

impl ContinuousNumericScale for PowNumericScale {
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
        let d0 = self.power_fun.pow(self.domain_start);
        let d1 = self.power_fun.pow(self.domain_end);

        // Degenerate domain maps everything to the start of the range
        if d0 == d1 {
            return self.range_start;
        }

        let t = (self.power_fun.pow(value) - d0) / (d1 - d0);
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
        let d0 = self.power_fun.pow(self.domain_start);
        let d1 = self.power_fun.pow(self.domain_end);

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
        self.power_fun.pow_inv(d0 + t * (d1 - d0))
    }
}
