//! Locating the `!h!` hint block in a read name.

/// Marker that opens a hint block inside a read name
pub const SENTINEL: &[u8; 3] = b"!h!";

/// Find the start of the first hint block in a read name.
///
/// Returns `None` if the name does not contain `!h!`, including names shorter
/// than the sentinel itself.
///
/// # Examples
///
/// ```
/// use read_hints::hints::detect::detect;
///
/// assert_eq!(detect(b"read42!h!!chr1!100!+!50!10"), Some(6));
/// assert_eq!(detect(b"read42"), None);
/// assert_eq!(detect(b"!h"), None);
/// ```
#[must_use]
pub fn detect(name: &[u8]) -> Option<usize> {
    name.windows(SENTINEL.len())
        .position(|window| window == SENTINEL)
}

/// Whether the sentinel starts exactly at `offset`
#[must_use]
pub fn has_sentinel_at(name: &[u8], offset: usize) -> bool {
    name.get(offset..)
        .is_some_and(|rest| rest.starts_with(SENTINEL))
}
