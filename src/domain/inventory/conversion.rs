//! Unit conversion - packaging quantity to base inventory units.

/// Total base units for a packaging quantity and a per-product factor.
///
/// Pure arithmetic; the caller validates factor positivity and quantity
/// non-negativity upstream.
pub fn total_units(packaging_quantity: i64, factor: i64) -> i64 {
    packaging_quantity * factor
}
