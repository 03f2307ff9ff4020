//! Transformation kernels.
//!
//! Every kernel reads `input` and appends its result to `out`; none of them
//! touch `input` in place. [`crate::Conv`] runs a kernel from its working
//! buffer into its scratch buffer and then swaps the two.

use crate::{buffer::Buffer, charmap, error::Error};

pub fn lower(input: &str, out: &mut Buffer) -> Result<(), Error> {
    out.reserve(input.len())?;
    for c in input.chars() {
        out.push(charmap::to_lower(c))?;
    }
    Ok(())
}

pub fn upper(input: &str, out: &mut Buffer) -> Result<(), Error> {
    out.reserve(input.len())?;
    for c in input.chars() {
        out.push(charmap::to_upper(c))?;
    }
    Ok(())
}

/// Replaces accented letters with their ASCII base letter.
pub fn fold_diacritics(input: &str, out: &mut Buffer) -> Result<(), Error> {
    out.reserve(input.len())?;
    for c in input.chars() {
        out.push(charmap::fold(c))?;
    }
    Ok(())
}

/// Strips leading and trailing Unicode whitespace.
pub fn trim(input: &str, out: &mut Buffer) -> Result<(), Error> {
    out.push_str(input.trim())
}

pub fn trim_prefix(input: &str, prefix: &str, out: &mut Buffer) -> Result<(), Error> {
    out.push_str(input.strip_prefix(prefix).unwrap_or(input))
}

pub fn trim_suffix(input: &str, suffix: &str, out: &mut Buffer) -> Result<(), Error> {
    out.push_str(input.strip_suffix(suffix).unwrap_or(input))
}

/// Substitutes every non-overlapping occurrence of `old`, scanning left to right.
/// An empty `old` copies the input unchanged.
pub fn replace(input: &str, old: &str, new: &str, out: &mut Buffer) -> Result<(), Error> {
    if old.is_empty() {
        return out.push_str(input);
    }
    out.reserve(input.len())?;
    let mut last = 0;
    for (start, matched) in input.match_indices(old) {
        out.push_str(&input[last..start])?;
        out.push_str(new)?;
        last = start + matched.len();
    }
    out.push_str(&input[last..])
}

/// Uppercases the first code point only.
pub fn capitalize(input: &str, out: &mut Buffer) -> Result<(), Error> {
    let mut chars = input.chars();
    if let Some(first) = chars.next() {
        out.reserve(input.len())?;
        out.push(charmap::to_upper(first))?;
        out.push_str(chars.as_str())?;
    }
    Ok(())
}

/// `camelCase` (or `PascalCase` with `upper_first`). Words are split on
/// separators only, so existing inner capitals are lowercased.
pub fn camel(input: &str, upper_first: bool, out: &mut Buffer) -> Result<(), Error> {
    out.reserve(input.len())?;
    for (i, word) in Words::new(input, false).enumerate() {
        let mut chars = word.chars();
        if i == 0 && !upper_first {
            for c in chars {
                out.push(charmap::to_lower(c))?;
            }
            continue;
        }
        if let Some(first) = chars.next() {
            out.push(charmap::to_upper(first))?;
        }
        for c in chars {
            out.push(charmap::to_lower(c))?;
        }
    }
    Ok(())
}

/// `snake_case` / `kebab-case` family: words joined by `delimiter`, all lower or all upper.
pub fn delimited(input: &str, delimiter: char, upper: bool, out: &mut Buffer) -> Result<(), Error> {
    out.reserve(input.len())?;
    for (i, word) in Words::new(input, true).enumerate() {
        if i > 0 {
            out.push(delimiter)?;
        }
        for c in word.chars() {
            out.push(if upper {
                charmap::to_upper(c)
            } else {
                charmap::to_lower(c)
            })?;
        }
    }
    Ok(())
}

pub fn repeat(input: &str, times: usize, out: &mut Buffer) -> Result<(), Error> {
    if input.is_empty() {
        return Ok(());
    }
    let total = input.len().checked_mul(times).ok_or(Error::OutOfMemory)?;
    out.reserve(total)?;
    for _ in 0..times {
        out.push_str(input)?;
    }
    Ok(())
}

/// Shortens to at most `max` code points, ending in `...` when there is room for it.
pub fn truncate(input: &str, max: usize, out: &mut Buffer) -> Result<(), Error> {
    if input.chars().count() <= max {
        return out.push_str(input);
    }
    let (keep, ellipsis) = if max > 3 { (max - 3, "...") } else { (max, "") };
    let end = input
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    out.push_str(&input[..end])?;
    out.push_str(ellipsis)
}

/// Wraps in double quotes, escaping quotes, backslashes and control whitespace.
pub fn quote(input: &str, out: &mut Buffer) -> Result<(), Error> {
    out.reserve(input.len() + 2)?;
    out.push('"')?;
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\"")?,
            '\\' => out.push_str("\\\\")?,
            '\n' => out.push_str("\\n")?,
            '\r' => out.push_str("\\r")?,
            '\t' => out.push_str("\\t")?,
            c => out.push(c)?,
        }
    }
    out.push('"')
}

/// Iterator over the words of an identifier-style conversion.
///
/// Runs of separators (see [`charmap::is_separator`]) are skipped entirely; with
/// `split_case`, a lowercase letter followed by an uppercase one also ends a word.
pub struct Words<'t> {
    input: &'t str,
    pos: usize,
    split_case: bool,
}

impl<'t> Words<'t> {
    pub fn new(input: &'t str, split_case: bool) -> Self {
        Self {
            input,
            pos: 0,
            split_case,
        }
    }
}

impl<'t> Iterator for Words<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let rest = &self.input[self.pos..];
        let offset = rest
            .char_indices()
            .find(|&(_, c)| !charmap::is_separator(c))
            .map(|(i, _)| i)?;
        let start = self.pos + offset;

        let mut end = self.input.len();
        let mut prev_lower = false;
        for (i, c) in self.input[start..].char_indices() {
            if charmap::is_separator(c) || (self.split_case && prev_lower && c.is_uppercase()) {
                end = start + i;
                break;
            }
            prev_lower = c.is_lowercase();
        }

        self.pos = end;
        Some(&self.input[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kernel: impl Fn(&str, &mut Buffer) -> Result<(), Error>, input: &str) -> String {
        let mut out = Buffer::new();
        kernel(input, &mut out).unwrap();
        out.into_string()
    }

    #[test]
    fn test_case_mapping_latin() {
        assert_eq!(run(lower, "MÍ téxtO cön AcÉntos"), "mí téxto cön acéntos");
        assert_eq!(run(upper, "ñandú über"), "ÑANDÚ ÜBER");
        assert_eq!(run(upper, "straße"), "STRAßE");
    }

    #[test]
    fn test_fold() {
        assert_eq!(run(fold_diacritics, "José María Núñez"), "Jose Maria Nunez");
        assert_eq!(run(fold_diacritics, "Tiếng Việt"), "Tieng Viet");
    }

    #[test]
    fn test_trim_unicode_whitespace() {
        assert_eq!(run(trim, " \t\u{00A0}hola\r\n"), "hola");
        assert_eq!(run(trim, "   "), "");
    }

    #[test]
    fn test_replace_non_overlapping() {
        let r = |input: &str, old: &str, new: &str| run(|i, o| replace(i, old, new, o), input);
        assert_eq!(r("aaaa", "aa", "b"), "bb");
        assert_eq!(r("abc", "b", "bb"), "abbc");
        assert_eq!(r("a-b-c", "-", ""), "abc");
        assert_eq!(r("abc", "", "x"), "abc");
    }

    #[test]
    fn test_capitalize_first_code_point_only() {
        assert_eq!(run(capitalize, "élan vital"), "Élan vital");
        assert_eq!(run(capitalize, ""), "");
    }

    #[test]
    fn test_words() {
        let words: Vec<&str> = Words::new("--hello  world__", false).collect();
        assert_eq!(words, vec!["hello", "world"]);
        let words: Vec<&str> = Words::new("parseHTTPRequest id", true).collect();
        assert_eq!(words, vec!["parse", "HTTPRequest", "id"]);
        assert_eq!(Words::new(" -_. ", true).count(), 0);
    }

    #[test]
    fn test_camel() {
        assert_eq!(run(|i, o| camel(i, false, o), "hello big_WORLD"), "helloBigWorld");
        assert_eq!(run(|i, o| camel(i, true, o), "hello big_WORLD"), "HelloBigWorld");
        assert_eq!(run(|i, o| camel(i, false, o), "__"), "");
    }

    #[test]
    fn test_delimited() {
        assert_eq!(run(|i, o| delimited(i, '_', false, o), "helloWorld  foo-bar_"), "hello_world_foo_bar");
        assert_eq!(run(|i, o| delimited(i, '_', true, o), "helloWorld"), "HELLO_WORLD");
        assert_eq!(run(|i, o| delimited(i, '-', false, o), "Some Title!"), "some-title");
    }

    #[test]
    fn test_delimited_splits_only_after_lowercase() {
        assert_eq!(run(|i, o| delimited(i, '_', false, o), "parseHTTPRequest"), "parse_httprequest");
        assert_eq!(run(|i, o| delimited(i, '_', false, o), "version2Update"), "version2update");
        assert_eq!(run(|i, o| delimited(i, '-', true, o), "v2 Update"), "V2-UPDATE");
    }

    #[test]
    fn test_truncate_and_repeat() {
        assert_eq!(run(|i, o| truncate(i, 8, o), "Hello, World"), "Hello...");
        assert_eq!(run(|i, o| truncate(i, 20, o), "short"), "short");
        assert_eq!(run(|i, o| truncate(i, 2, o), "añb"), "añ");
        assert_eq!(run(|i, o| repeat(i, 3, o), "ab"), "ababab");
        assert_eq!(run(|i, o| repeat(i, 0, o), "ab"), "");
    }

    #[test]
    fn test_repeat_overflow_is_out_of_memory() {
        let mut out = Buffer::new();
        assert!(matches!(repeat("ab", usize::MAX, &mut out), Err(Error::OutOfMemory)));
        assert!(matches!(repeat("ab", usize::MAX / 2, &mut out), Err(Error::OutOfMemory)));
        assert!(out.is_empty());
        repeat("", usize::MAX, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_quote() {
        assert_eq!(run(quote, "say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    }
}
