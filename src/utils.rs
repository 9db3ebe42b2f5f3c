//! Common utility functions shared across the codebase.

/// Normalize whitespace in translatable text.
///
/// Collapses runs of spaces, tabs and newlines into a single space and trims
/// the result, the way JSX whitespace is collapsed when rendered.
///
/// # Examples
///
/// ```
/// use lokal::utils::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("Hello\n    world  \n  foo"), "Hello world foo");
/// assert_eq!(normalize_whitespace("  already clean "), "already clean");
/// assert_eq!(normalize_whitespace(" \n\t "), "");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_was_space && !out.is_empty() {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("Hello World"), "Hello World");
        assert_eq!(normalize_whitespace("Hello\n  World"), "Hello World");
        assert_eq!(normalize_whitespace("\t Hello \n World \n"), "Hello World");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("one"), "one");
    }
}
