//! Lenient parsing of segment lengths.

/// Error returned when a length field cannot be read as a distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LengthParseError {
    #[error("length is empty")]
    Empty,

    #[error("length {0:?} does not start with a digit")]
    NoDigits(String),

    #[error("length {0:?} is negative")]
    Negative(String),

    #[error("length {0:?} is too large")]
    Overflow(String),
}

/// Longest accepted segment, in metres.
///
/// Route lengths are summed as `u64`; capping each segment at `u32::MAX`
/// keeps any simple path's total far from overflow.
pub const MAX_SEGMENT_LENGTH: u64 = u32::MAX as u64;

/// Parse a segment length in metres.
///
/// Surrounding whitespace and a leading `+` are accepted, and the longest
/// leading run of ASCII digits is used, so `"5000m"` reads as 5000 and
/// `"12.7"` as 12. Anything without leading digits is an error, as is a
/// negative number or one above [`MAX_SEGMENT_LENGTH`].
///
/// # Examples
///
/// ```
/// use route_server::network::parse_length;
///
/// assert_eq!(parse_length(" 1560 "), Ok(1560));
/// assert_eq!(parse_length("800m"), Ok(800));
/// assert!(parse_length("n/a").is_err());
/// assert!(parse_length("-5").is_err());
/// ```
pub fn parse_length(raw: &str) -> Result<u64, LengthParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LengthParseError::Empty);
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(LengthParseError::Negative(trimmed.to_string()));
        }
        return Err(LengthParseError::NoDigits(trimmed.to_string()));
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return Err(LengthParseError::NoDigits(trimmed.to_string()));
    }

    digits
        .parse::<u64>()
        .ok()
        .filter(|length| *length <= MAX_SEGMENT_LENGTH)
        .ok_or_else(|| LengthParseError::Overflow(trimmed.to_string()))
}
