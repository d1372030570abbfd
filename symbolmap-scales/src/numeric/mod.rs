pub mod linear;
pub mod pow;

/// Shared interface of scales that map a continuous numeric domain onto a
/// continuous numeric range.
pub trait ContinuousNumericScale: Clone {
    fn domain(&self) -> (f64, f64);

    fn range(&self) -> (f64, f64);

    fn clamp(&self) -> bool;

    fn set_domain(&mut self, domain: (f64, f64));

    fn set_range(&mut self, range: (f64, f64));

    fn set_clamp(&mut self, clamp: bool);

    /// Maps a single domain value to the range
    fn scale(&self, value: f64) -> f64;

    /// Maps a range value back to the domain
    fn invert(&self, value: f64) -> f64;

    fn scale_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    fn invert_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| self.invert(*v)).collect()
    }
}

/// Lower and upper bounds of a range, regardless of its orientation
pub(crate) fn range_bounds(range: (f64, f64)) -> (f64, f64) {
    if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    }
}
