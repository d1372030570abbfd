use super::RawProjection;

/// Albers conic equal-area projection with two standard parallels
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ConicEqualAreaRaw {
    n: f64,
    c: f64,
    rho0: f64,
}

impl ConicEqualAreaRaw {
    /// Standard parallels in degrees
    pub fn new(parallels: [f64; 2]) -> Self {
        let sin_phi0 = parallels[0].to_radians().sin();
        let sin_phi1 = parallels[1].to_radians().sin();
        let n = (sin_phi0 + sin_phi1) / 2.0;
        let c = 1.0 + sin_phi0 * (2.0 * n - sin_phi0);
        let rho0 = c.sqrt() / n;
        Self { n, c, rho0 }
    }
}

impl RawProjection for ConicEqualAreaRaw {
    fn forward(&self, lambda: f64, phi: f64) -> [f64; 2] {
        let rho = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let lambda = lambda * self.n;
        [rho * lambda.sin(), self.rho0 - rho * lambda.cos()]
    }
}
