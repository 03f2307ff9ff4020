//! Numeric rendering, rounding and digit grouping.
//!
//! Rounding works on the decimal digits of the text, not on the binary value,
//! so `2.675` rounds to `2.68` the way it reads. Every render writes straight into
//! the caller's [`Buffer`]; floats are first rendered into a small stack buffer.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

use crate::{buffer::Buffer, error::Error, translate::Language};

/// Exponents beyond this are rejected rather than expanded into digits.
const MAX_EXPONENT: i64 = 1024;

/// Thousands and decimal separators used by `format_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub thousands: char,
    pub decimal: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(',', '.')
    }
}

impl NumberFormat {
    pub const fn new(thousands: char, decimal: char) -> Self {
        Self { thousands, decimal }
    }

    /// Conventional separators for `lang`.
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::En | Language::Zh => Self::default(),
            Language::Es | Language::De | Language::It | Language::Pt => Self::new('.', ','),
            Language::Fr => Self::new('\u{202F}', ','),
            Language::Ru => Self::new('\u{00A0}', ','),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    HalfAwayFromZero,
    TowardZero,
}

pub fn write_int(out: &mut Buffer, value: i64) -> Result<(), Error> {
    out.push_display(value)
}

pub fn write_uint(out: &mut Buffer, value: u64) -> Result<(), Error> {
    out.push_display(value)
}

/// Shortest round-trip decimal form. Magnitudes in `[1e-6, 1e21)` (and zero) are
/// written without an exponent; everything else uses scientific notation.
pub fn write_float(out: &mut Buffer, value: f64) -> Result<(), Error> {
    if let Some(special) = non_finite(value) {
        return out.push_str(special);
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        out.push_display(value)
    } else {
        out.push_display(format_args!("{:e}", value))
    }
}

/// Renders `value` with exactly `precision` fractional digits, rounding half away from zero.
pub fn write_fixed(out: &mut Buffer, value: f64, precision: usize) -> Result<(), Error> {
    if let Some(special) = non_finite(value) {
        return out.push_str(special);
    }
    let mut text = StackText::default();
    let magnitude = value.abs();
    let written = if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        fmt::Write::write_fmt(&mut text, format_args!("{}", value))
    } else {
        fmt::Write::write_fmt(&mut text, format_args!("{:e}", value))
    };
    written.map_err(|_| Error::InvalidNumber(value.to_string()))?;
    let decimal = Decimal::parse(text.as_str()).ok_or_else(|| Error::InvalidNumber(value.to_string()))?;
    decimal.write_rounded(out, precision, Rounding::HalfAwayFromZero)
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("+Inf")
    } else if value == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

/// Rounds the number written in `text` to `places` fractional digits.
pub fn round_into(text: &str, places: usize, mode: Rounding, out: &mut Buffer) -> Result<(), Error> {
    parse_decimal(text)?.write_rounded(out, places, mode)
}

/// Rewrites the number in `text` with grouped integer digits.
pub fn group_into(text: &str, format: &NumberFormat, out: &mut Buffer) -> Result<(), Error> {
    parse_decimal(text)?.write_grouped(out, format)
}

fn parse_decimal(text: &str) -> Result<Decimal<'_>, Error> {
    Decimal::parse(text.trim()).ok_or_else(|| Error::InvalidNumber(text.to_string()))
}

pub fn parse_int(text: &str) -> Result<i64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}

pub fn parse_uint(text: &str) -> Result<u64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}

pub fn parse_float(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}

/// Accepts `true/false`, `t/f` and `1/0`, ignoring ASCII case.
pub fn parse_bool(text: &str) -> Result<bool, Error> {
    let text = text.trim();
    for yes in ["true", "t", "1"] {
        if text.eq_ignore_ascii_case(yes) {
            return Ok(true);
        }
    }
    for no in ["false", "f", "0"] {
        if text.eq_ignore_ascii_case(no) {
            return Ok(false);
        }
    }
    Err(Error::InvalidNumber(text.to_string()))
}

/// A plain decimal number split into its digit strings.
///
/// `int` never has leading zeros (zero itself is `"0"`); `frac` keeps its
/// trailing zeros because they are part of what the caller wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal<'t> {
    negative: bool,
    int: Cow<'t, str>,
    frac: Cow<'t, str>,
}

impl<'t> Decimal<'t> {
    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`. At least one mantissa digit is required.
    pub fn parse(text: &'t str) -> Option<Self> {
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };
        let (int, frac) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };
        if int.is_empty() && frac.is_empty() {
            return None;
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let int = int.trim_start_matches('0');
        let decimal = Decimal {
            negative,
            int: Cow::Borrowed(if int.is_empty() { "0" } else { int }),
            frac: Cow::Borrowed(frac),
        };

        match exponent {
            None => Some(decimal),
            Some(exp) => {
                let exp: i64 = exp.parse().ok()?;
                if exp.abs() > MAX_EXPONENT {
                    return None;
                }
                Some(decimal.shifted(exp))
            }
        }
    }

    /// Moves the decimal point `exp` places to the right.
    fn shifted(self, exp: i64) -> Decimal<'static> {
        let int_digits = if self.int == "0" { "" } else { self.int.as_ref() };
        let mut digits = String::with_capacity(int_digits.len() + self.frac.len());
        digits.push_str(int_digits);
        digits.push_str(&self.frac);

        let point = int_digits.len() as i64 + exp;
        let (int, frac) = if point <= 0 {
            let mut frac = "0".repeat(point.unsigned_abs() as usize);
            frac.push_str(&digits);
            (String::new(), frac)
        } else if point as usize >= digits.len() {
            let zeros = point as usize - digits.len();
            digits.extend(std::iter::repeat_n('0', zeros));
            (digits, String::new())
        } else {
            let frac = digits.split_off(point as usize);
            (digits, frac)
        };

        let int = int.trim_start_matches('0');
        Decimal {
            negative: self.negative,
            int: Cow::Owned(if int.is_empty() { "0".to_string() } else { int.to_string() }),
            frac: Cow::Owned(frac),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.int == "0" && self.frac.bytes().all(|b| b == b'0')
    }

    pub fn write_grouped(&self, out: &mut Buffer, format: &NumberFormat) -> Result<(), Error> {
        if self.negative && !self.is_zero() {
            out.push('-')?;
        }
        let len = self.int.len();
        for (i, digit) in self.int.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(format.thousands)?;
            }
            out.push(digit)?;
        }
        if !self.frac.is_empty() {
            out.push(format.decimal)?;
            out.push_str(&self.frac)?;
        }
        Ok(())
    }

    /// Writes the number with exactly `places` fractional digits.
    pub fn write_rounded(&self, out: &mut Buffer, places: usize, mode: Rounding) -> Result<(), Error> {
        let int = self.int.as_bytes();
        let frac = self.frac.as_bytes();
        let needed = int
            .len()
            .checked_add(places)
            .and_then(|n| n.checked_add(3))
            .ok_or(Error::OutOfMemory)?;
        out.reserve(needed)?;

        if frac.len() <= places {
            if self.negative && !self.is_zero() {
                out.push('-')?;
            }
            out.push_str(&self.int)?;
            if places > 0 {
                out.push('.')?;
                out.push_str(&self.frac)?;
                out.push_repeated('0', places - frac.len())?;
            }
            return Ok(());
        }

        let kept = &frac[..places];
        let round_up = mode == Rounding::HalfAwayFromZero && frac[places] >= b'5';
        let total = int.len() + places;
        let digit_at = |i: usize| if i < int.len() { int[i] } else { kept[i - int.len()] };

        // Index of the digit that absorbs the carry; every digit after it becomes zero.
        let pivot = if round_up {
            (0..total).rev().find(|&i| digit_at(i) != b'9')
        } else {
            Some(total)
        };

        let nonzero = round_up || (0..total).any(|i| digit_at(i) != b'0');
        if self.negative && nonzero {
            out.push('-')?;
        }
        if pivot.is_none() {
            out.push('1')?;
        }
        for i in 0..total {
            if i == int.len() {
                out.push('.')?;
            }
            let digit = match pivot {
                Some(p) if i < p => digit_at(i),
                Some(p) if i == p => digit_at(i) + 1,
                _ => b'0',
            };
            out.push(char::from(digit))?;
        }
        Ok(())
    }
}

/// Fixed-capacity text sink for float renders; shortest `f64` forms fit easily.
struct StackText {
    bytes: [u8; 64],
    len: usize,
}

impl Default for StackText {
    fn default() -> Self {
        Self {
            bytes: [0; 64],
            len: 0,
        }
    }
}

impl StackText {
    fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl fmt::Write for StackText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(text: &str, places: usize) -> String {
        let mut out = Buffer::new();
        round_into(text, places, Rounding::HalfAwayFromZero, &mut out).unwrap();
        out.into_string()
    }

    fn grouped(text: &str, format: NumberFormat) -> String {
        let mut out = Buffer::new();
        group_into(text, &format, &mut out).unwrap();
        out.into_string()
    }

    fn float(value: f64) -> String {
        let mut out = Buffer::new();
        write_float(&mut out, value).unwrap();
        out.into_string()
    }

    fn fixed(value: f64, precision: usize) -> String {
        let mut out = Buffer::new();
        write_fixed(&mut out, value, precision).unwrap();
        out.into_string()
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(rounded("1234.567", 2), "1234.57");
        assert_eq!(rounded("2.675", 2), "2.68");
        assert_eq!(rounded("2.5", 0), "3");
        assert_eq!(rounded("-2.5", 0), "-3");
        assert_eq!(rounded("1.244", 2), "1.24");
    }

    #[test]
    fn test_round_carries() {
        assert_eq!(rounded("9.999", 2), "10.00");
        assert_eq!(rounded("-99.96", 1), "-100.0");
        assert_eq!(rounded("0.999", 2), "1.00");
    }

    #[test]
    fn test_round_pads_and_drops_negative_zero() {
        assert_eq!(rounded("5", 3), "5.000");
        assert_eq!(rounded("1.5", 4), "1.5000");
        assert_eq!(rounded("-0.001", 2), "0.00");
        assert_eq!(rounded("007.10", 1), "7.1");
    }

    #[test]
    fn test_round_toward_zero() {
        let mut out = Buffer::new();
        round_into("-2.679", 2, Rounding::TowardZero, &mut out).unwrap();
        assert_eq!(out.as_str(), "-2.67");
    }

    #[test]
    fn test_round_huge_places_is_out_of_memory() {
        let mut out = Buffer::new();
        for places in [usize::MAX, usize::MAX - 2, usize::MAX / 2] {
            assert!(
                matches!(
                    round_into("1.5", places, Rounding::HalfAwayFromZero, &mut out),
                    Err(Error::OutOfMemory)
                ),
                "{}",
                places
            );
        }
        assert!(matches!(write_fixed(&mut out, 1.5, usize::MAX), Err(Error::OutOfMemory)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_round_expands_exponent() {
        assert_eq!(rounded("1e21", 0), "1000000000000000000000");
        assert_eq!(rounded("1.5e-7", 8), "0.00000015");
        assert_eq!(rounded("2.5E1", 1), "25.0");
    }

    #[test]
    fn test_round_rejects_text() {
        let mut out = Buffer::new();
        for text in ["abc", "", ".", "1.2.3", "1e", "--1", "1e99999"] {
            assert!(
                matches!(
                    round_into(text, 2, Rounding::HalfAwayFromZero, &mut out),
                    Err(Error::InvalidNumber(_))
                ),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_grouping() {
        assert_eq!(grouped("1234.57", NumberFormat::default()), "1,234.57");
        assert_eq!(grouped("1234567.891", NumberFormat::default()), "1,234,567.891");
        assert_eq!(grouped("-1234", NumberFormat::default()), "-1,234");
        assert_eq!(grouped("999", NumberFormat::default()), "999");
        assert_eq!(grouped("1234.50", NumberFormat::default()), "1,234.50");
        assert_eq!(grouped("1234567.5", NumberFormat::for_language(Language::Es)), "1.234.567,5");
    }

    #[test]
    fn test_default_float_render() {
        assert_eq!(float(123.456), "123.456");
        assert_eq!(float(1.0), "1");
        assert_eq!(float(0.0), "0");
        assert_eq!(float(1e20), "100000000000000000000");
        assert_eq!(float(1e21), "1e21");
        assert_eq!(float(1.5e-7), "1.5e-7");
        assert_eq!(float(0.000001), "0.000001");
        assert_eq!(float(f64::NAN), "NaN");
        assert_eq!(float(f64::INFINITY), "+Inf");
        assert_eq!(float(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn test_fixed_precision() {
        assert_eq!(fixed(3.14159, 2), "3.14");
        assert_eq!(fixed(1.0, 6), "1.000000");
        assert_eq!(fixed(-0.5, 0), "-1");
        assert_eq!(fixed(2.5e-7, 7), "0.0000003");
    }

    #[test]
    fn test_parse_bool_forms() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" t ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("yes").is_err());
    }
}
