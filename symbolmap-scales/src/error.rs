#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SymbolMapScaleError {
    #[error("Empty domain")]
    EmptyDomain,

    #[error("Invalid exponent: {0}")]
    InvalidExponent(f64),
}
