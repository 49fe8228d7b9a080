//! Recognition and decoding of `aperi-show-items://` URIs.
//!
//! The handler receives a single URI whose remainder is a percent-encoded
//! filesystem path. Decoding is applied to the whole argument before the
//! prefix is removed, so the prefix is stripped by character count from the
//! decoded text rather than from the raw argument.

/// Scheme prefix that identifies arguments addressed to this handler.
pub const SCHEME_PREFIX: &str = "aperi-show-items://";

/// Returns `true` when `argument` starts with [`SCHEME_PREFIX`].
#[must_use]
pub fn has_scheme(argument: &str) -> bool {
    argument.starts_with(SCHEME_PREFIX)
}

/// Percent-decodes `argument` and drops the leading prefix-length characters.
///
/// Escapes that do not form a valid `%XX` pair are left untouched, and byte
/// sequences that do not decode to UTF-8 are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use aperi_show_items::uri::decode_argument;
///
/// let decoded = decode_argument("aperi-show-items://%2Ftmp%2Fexample%20file.txt");
/// assert_eq!(decoded, "/tmp/example file.txt");
/// ```
#[must_use]
pub fn decode_argument(argument: &str) -> String {
    let bytes = urlencoding::decode_binary(argument.as_bytes());
    String::from_utf8_lossy(&bytes)
        .chars()
        .skip(SCHEME_PREFIX.chars().count())
        .collect()
}
