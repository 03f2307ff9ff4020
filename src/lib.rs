#![forbid(unsafe_code)]
//! Fluent text transformation for Rust.
//!
//! Build a chain from a string, a number, a list of strings or a borrowed
//! `&mut String`, apply case mapping, diacritic folding, identifier styles,
//! rounding and digit grouping, then take the result as a new string or write
//! it back in place. A chain reuses two buffers for every step.
//!
//! # Quick Start
//!
//! ```rust
//! use textchain::{convert, textf, Conv};
//!
//! let slug = convert("  Hello@World#2024!  ")
//!     .trim()
//!     .replace("@", "_at_")
//!     .replace("#", "_hash_")
//!     .replace("!", "")
//!     .to_lower()
//!     .string();
//! assert_eq!(slug, "hello_at_world_hash_2024");
//!
//! assert_eq!(convert(1234.567).round_decimals(2).format_number().string(), "1,234.57");
//! assert_eq!(convert(["a", "b", "c"]).join(", ").string(), "a, b, c");
//!
//! let line = Conv::new().write("total: ").write(42).string();
//! assert_eq!(line, "total: 42");
//!
//! assert_eq!(textf!("%s has %d items", "cart", 3)?, "cart has 3 items");
//! # Ok::<(), textchain::Error>(())
//! ```
//!
//! # Features
//!
//! - Chainable [`Conv`] with sticky errors: the first failure freezes the value
//! - Latin and extended-Latin case mapping and diacritic folding
//! - `camelCase`, `PascalCase`, `snake_case` and `kebab-case` conversions
//! - Decimal-exact rounding and locale-style digit grouping
//! - printf-style [`format()`] and a small multi-language [`translate()`] dictionary
//! - JSON [`Settings`] for the process language and number separators

pub mod buffer;
pub mod charmap;
pub mod conv;
pub mod error;
pub mod format;
pub mod number;
pub mod operations;
pub mod settings;
pub mod traits;
pub mod transform;
pub mod translate;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    conv::{Conv, convert},
    error::Error,
    format::format,
    number::NumberFormat,
    settings::Settings,
    traits::Parser,
    translate::{Language, language, set_language, translate, translate_in, use_language},
    types::{State, Value},
};

/// Formats a printf-style template with heterogeneous arguments.
///
/// Each argument is converted with `Value::from`, so strings, numbers, booleans
/// and string lists can be mixed freely.
///
/// ```rust
/// let text = textchain::textf!("%s=%.1f (%t)", "ratio", 0.25, true)?;
/// assert_eq!(text, "ratio=0.3 (true)");
/// # Ok::<(), textchain::Error>(())
/// ```
#[macro_export]
macro_rules! textf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),*])
    };
}

/// Reports whether `needle` occurs in `haystack`. An empty needle always matches.
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Counts non-overlapping occurrences of `needle`. An empty needle counts zero.
pub fn count(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Byte offset of the first occurrence of `needle`.
pub fn index(haystack: &str, needle: &str) -> Option<usize> {
    haystack.find(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains("hello world", "o w"));
        assert!(contains("hello", ""));
        assert!(contains("", ""));
        assert!(!contains("", "a"));
        assert!(!contains("Hello", "hello"));
    }

    #[test]
    fn test_count_and_index() {
        assert_eq!(count("aaaa", "aa"), 2);
        assert_eq!(count("abc", ""), 0);
        assert_eq!(index("señor", "or"), Some(4));
        assert_eq!(index("abc", "z"), None);
    }

    #[test]
    fn test_textf_macro() {
        assert_eq!(
            textf!("Result: %s | N: %d | F: %.2f", "ok", 7, 3.14159).unwrap(),
            "Result: ok | N: 7 | F: 3.14"
        );
        assert_eq!(textf!("plain").unwrap(), "plain");
    }
}
