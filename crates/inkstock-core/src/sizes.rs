//! Size-aware ordering for garment size labels.
//!
//! Apparel sizes don't sort lexically: `"2XL"` belongs after `"XL"`, not
//! before `"L"`. The comparator ranks the named base sizes, pushes
//! digit-prefixed sizes (`"2XL"`, `"3XL"`) after them ordered by their
//! leading numeral, and leaves anything unrecognized (`"OSFA"`, `"S/M"`) at
//! the end in lexical order.

use std::cmp::Ordering;

/// Rank for the named base sizes. Anything else gets [`UNRANKED`].
fn named_rank(size: &str) -> u8 {
    match size {
        "XS" => 1,
        "S" => 2,
        "M" => 3,
        "L" => 4,
        "XL" => 5,
        _ => UNRANKED,
    }
}

const UNRANKED: u8 = 99;

/// Returns the leading character's digit value, if the label starts with one.
/// Only the first character counts: `"2XL"` → 2, `"12"` → 1.
fn leading_digit(size: &str) -> Option<u32> {
    size.chars().next()?.to_digit(10)
}

/// Total order over size labels, for upper-cased header sorting.
///
/// - Named sizes sort by rank: `XS < S < M < L < XL`.
/// - Digit-prefixed sizes sort after all named sizes, first by leading
///   numeral, then lexically by the remainder (`"2XL" < "2XLT" < "3XL"`).
/// - Unrecognized sizes sort last, lexically among themselves.
/// - Ties always break on full string comparison, so the order is total.
#[must_use]
pub fn compare_sizes(a: &str, b: &str) -> Ordering {
    match (leading_digit(a), leading_digit(b)) {
        (Some(da), Some(db)) => da.cmp(&db).then_with(|| a[1..].cmp(&b[1..])),
        // A digit-prefixed size goes after named sizes but before the
        // unranked tail.
        (Some(_), None) => {
            if named_rank(b) == UNRANKED {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (None, Some(_)) => {
            if named_rank(a) == UNRANKED {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (None, None) => named_rank(a).cmp(&named_rank(b)).then_with(|| a.cmp(b)),
    }
}
