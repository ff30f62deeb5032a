//! Owner-estimate parsing.
//!
//! SteamSpy publishes owner counts as ranges (`"20000-50000"`). The midpoint of
//! the range is used as the point estimate. Plain integers are accepted as-is,
//! and thousands separators are ignored.

/// Parse an owner estimate into a single count.
///
/// Returns `None` for empty or unparsable input.
///
/// ```
/// use sense_core::owners::parse_owner_range;
///
/// assert_eq!(parse_owner_range("20000-50000"), Some(35_000));
/// assert_eq!(parse_owner_range("1,500"), Some(1_500));
/// assert_eq!(parse_owner_range("n/a"), None);
/// ```
#[must_use]
pub fn parse_owner_range(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.split_once('-') {
        Some((lo, hi)) => {
            let lo: u64 = lo.parse().ok()?;
            let hi: u64 = hi.parse().ok()?;
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            Some(lo + (hi - lo) / 2)
        }
        None => cleaned.parse().ok(),
    }
}
