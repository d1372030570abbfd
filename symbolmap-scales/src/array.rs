use crate::error::SymbolMapScaleError;

/// Returns the minimum and maximum of the input values.
///
/// Values that are NaN or infinite are ignored, so a dataset with a few
/// unparseable entries still yields a usable domain. Returns `None` when no
/// finite value is present.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Like [`extent`], but reports an empty domain as an error
pub fn try_extent<I>(values: I) -> Result<(f64, f64), SymbolMapScaleError>
where
    I: IntoIterator<Item = f64>,
{
    extent(values).ok_or(SymbolMapScaleError::EmptyDomain)
}
