//! Name tables shared by the pixel format and colorspace catalogs.

use core::fmt;

/// A catalog name could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseNameError {
    /// Input was empty, or only the prefix.
    Empty,
    /// No catalog entry has this name.
    Unrecognized,
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty catalog name"),
            Self::Unrecognized => write!(f, "unrecognized catalog name"),
        }
    }
}

impl core::error::Error for ParseNameError {}

/// First name in `table` whose value equals `value`.
pub(crate) fn name_of<T: Copy + PartialEq>(
    table: &'static [(&'static str, T)],
    value: T,
) -> Option<&'static str> {
    table.iter().find(|(_, v)| *v == value).map(|(n, _)| *n)
}

/// Case-insensitive lookup by name.
pub(crate) fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| *v)
}

pub(crate) fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const TABLE: &[(&str, u8)] = &[("ONE", 1), ("TWO", 2), ("UNO", 1)];

    #[test]
    fn name_of_returns_first_match() {
        assert_eq!(name_of(TABLE, 1), Some("ONE"));
        assert_eq!(name_of(TABLE, 2), Some("TWO"));
        assert_eq!(name_of(TABLE, 3), None);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup(TABLE, "two"), Some(2));
        assert_eq!(lookup(TABLE, "Uno"), Some(1));
        assert_eq!(lookup(TABLE, "three"), None);
    }

    #[test]
    fn strip_prefix() {
        assert_eq!(strip_prefix_ignore_case("SDL_X_ABC", "SDL_X_"), "ABC");
        assert_eq!(strip_prefix_ignore_case("sdl_x_abc", "SDL_X_"), "abc");
        assert_eq!(strip_prefix_ignore_case("ABC", "SDL_X_"), "ABC");
        assert_eq!(strip_prefix_ignore_case("SD", "SDL_X_"), "SD");
        // Multi-byte input never splits a char boundary.
        assert_eq!(strip_prefix_ignore_case("ßßßß", "SDL_"), "ßßßß");
    }

    #[test]
    fn error_display() {
        assert_eq!(ParseNameError::Empty.to_string(), "empty catalog name");
        assert_eq!(
            ParseNameError::Unrecognized.to_string(),
            "unrecognized catalog name"
        );
    }
}
