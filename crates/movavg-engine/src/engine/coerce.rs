//! Lenient conversion of cell text to numbers.

/// Parse a cell as an integer, falling back to `default` when it is not one.
///
/// Surrounding whitespace is ignored. Decimals such as "24.4" are not
/// integers and fall back as well.
pub fn coerce_int(raw: &str, default: i64) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(default)
}
