use crate::Error;
use std::cmp::Ordering;

/// Three-way comparison used by the generic counting path.
///
/// Elements that refuse to order against each other (e.g. a NaN on either
/// side of an `f64` comparison) surface as [`Error::ComparisonError`] rather
/// than being silently skipped.
pub fn try_compare<T: PartialOrd>(a: &T, b: &T) -> Result<Ordering, Error> {
    a.partial_cmp(b).ok_or_else(|| {
        Error::ComparisonError("elements do not admit a total order".to_string())
    })
}
