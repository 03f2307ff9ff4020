//! printf-style template interpreter.
//!
//! Directives:
//! - `%s`, `%v`: default rendering of any argument
//! - `%d`: integer in base 10; `%x`, `%X`, `%o`, `%b` for other bases
//! - `%f`: float with 6 decimals; `%.<n>f` with `n` decimals
//! - `%t`: boolean
//! - `%c`: integer as a code point
//! - `%q`: double-quoted, escaped text
//! - `%%`: a literal percent sign
//!
//! An argument of the wrong kind falls back to its default rendering. A missing
//! argument prints `(MISSING)`; extra arguments are ignored.

use crate::{buffer::Buffer, error::Error, number, transform, types::Value};

const MISSING: &str = "(MISSING)";
const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
}

/// Expands `template` with `args`, appending to `out`.
///
/// An unknown directive is written literally (`%z`) and consumes an argument
/// if one is left. When none is left, or the template ends in a lone `%`, the
/// whole template is still written and [`Error::BadDirective`] is returned
/// afterwards for the first such directive.
pub fn write_formatted(template: &str, args: &[Value<'_>], out: &mut Buffer) -> Result<(), Error> {
    out.reserve(template.len())?;
    let mut args = args.iter();
    let mut bad: Option<String> = None;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos])?;
        let after = &rest[pos + 1..];

        // Explicit precision: %.<digits>f
        if let Some((precision, consumed)) = parse_precision(after) {
            match args.next() {
                Some(arg) => write_float_arg(arg, precision, out)?,
                None => out.push_str(MISSING)?,
            }
            rest = &after[consumed..];
            continue;
        }

        let mut chars = after.chars();
        let Some(verb) = chars.next() else {
            out.push('%')?;
            bad.get_or_insert_with(|| "trailing %".to_string());
            rest = "";
            break;
        };
        rest = chars.as_str();

        if verb == '%' {
            out.push('%')?;
            continue;
        }

        let arg = args.next();
        let Some(arg) = arg else {
            if is_known(verb) {
                out.push_str(MISSING)?;
            } else {
                out.push('%')?;
                out.push(verb)?;
                bad.get_or_insert_with(|| format!("%{}", verb));
            }
            continue;
        };

        match verb {
            's' | 'v' | 't' => arg.write_to(out)?,
            'd' => write_integer_arg(arg, Radix::Decimal, out)?,
            'x' => write_integer_arg(arg, Radix::LowerHex, out)?,
            'X' => write_integer_arg(arg, Radix::UpperHex, out)?,
            'o' => write_integer_arg(arg, Radix::Octal, out)?,
            'b' => write_integer_arg(arg, Radix::Binary, out)?,
            'f' => write_float_arg(arg, DEFAULT_PRECISION, out)?,
            'c' => write_char_arg(arg, out)?,
            'q' => write_quoted_arg(arg, out)?,
            unknown => {
                out.push('%')?;
                out.push(unknown)?;
            }
        }
    }
    out.push_str(rest)?;

    match bad {
        Some(directive) => Err(Error::BadDirective(directive)),
        None => Ok(()),
    }
}

/// Formats into a fresh string.
pub fn format(template: &str, args: &[Value<'_>]) -> Result<String, Error> {
    let mut out = Buffer::acquire();
    let written = write_formatted(template, args, &mut out);
    let text = out.finish();
    written.map(|()| text)
}

fn is_known(verb: char) -> bool {
    matches!(verb, 's' | 'v' | 't' | 'd' | 'x' | 'X' | 'o' | 'b' | 'f' | 'c' | 'q')
}

/// Returns the precision and the number of bytes consumed after `%` for `.<digits>f`.
fn parse_precision(after: &str) -> Option<(usize, usize)> {
    let digits = after.strip_prefix('.')?;
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 || !digits[len..].starts_with('f') {
        return None;
    }
    let precision = digits[..len].parse().ok()?;
    Some((precision, 1 + len + 1))
}

fn write_integer_arg(arg: &Value<'_>, radix: Radix, out: &mut Buffer) -> Result<(), Error> {
    let (negative, magnitude) = match arg {
        Value::Int(i) => (*i < 0, i.unsigned_abs()),
        Value::Uint(u) => (false, *u),
        other => return other.write_to(out),
    };
    if negative {
        out.push('-')?;
    }
    match radix {
        Radix::Decimal => out.push_display(magnitude),
        Radix::LowerHex => out.push_display(format_args!("{:x}", magnitude)),
        Radix::UpperHex => out.push_display(format_args!("{:X}", magnitude)),
        Radix::Octal => out.push_display(format_args!("{:o}", magnitude)),
        Radix::Binary => out.push_display(format_args!("{:b}", magnitude)),
    }
}

fn write_float_arg(arg: &Value<'_>, precision: usize, out: &mut Buffer) -> Result<(), Error> {
    let value = match arg {
        Value::Float(x) => *x,
        Value::Int(i) => *i as f64,
        Value::Uint(u) => *u as f64,
        other => match other.as_str().and_then(|s| number::parse_float(s).ok()) {
            Some(x) => x,
            None => return other.write_to(out),
        },
    };
    number::write_fixed(out, value, precision)
}

fn write_char_arg(arg: &Value<'_>, out: &mut Buffer) -> Result<(), Error> {
    let code = match arg {
        Value::Int(i) => u32::try_from(*i).ok(),
        Value::Uint(u) => u32::try_from(*u).ok(),
        other => return other.write_to(out),
    };
    out.push(code.and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER))
}

fn write_quoted_arg(arg: &Value<'_>, out: &mut Buffer) -> Result<(), Error> {
    if let Some(text) = arg.as_str() {
        return transform::quote(text, out);
    }
    let mut rendered = Buffer::new();
    arg.write_to(&mut rendered)?;
    transform::quote(rendered.as_str(), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_directives() {
        let args = [Value::from("ok"), Value::from(7), Value::from(3.14159)];
        assert_eq!(
            format("Result: %s | N: %d | F: %.2f", &args).unwrap(),
            "Result: ok | N: 7 | F: 3.14"
        );
    }

    #[test]
    fn test_default_float_precision() {
        assert_eq!(format("%f", &[Value::from(2.5)]).unwrap(), "2.500000");
        assert_eq!(format("%.0f", &[Value::from(7)]).unwrap(), "7");
    }

    #[test]
    fn test_literal_percent_and_unicode_text() {
        assert_eq!(format("100%% señal", &[]).unwrap(), "100% señal");
        assert_eq!(format("ñ%sñ", &[Value::from("é")]).unwrap(), "ñéñ");
    }

    #[test]
    fn test_missing_and_extra_arguments() {
        assert_eq!(format("%s and %d", &[Value::from("a")]).unwrap(), "a and (MISSING)");
        assert_eq!(
            format("%s", &[Value::from("a"), Value::from("b")]).unwrap(),
            "a"
        );
    }

    #[test]
    fn test_unknown_directive_with_argument() {
        assert_eq!(format("x%zy", &[Value::from(1)]).unwrap(), "x%zy");
    }

    #[test]
    fn test_unknown_directive_without_argument() {
        let mut out = Buffer::new();
        let result = write_formatted("x%zy", &[], &mut out);
        assert!(matches!(result, Err(Error::BadDirective(d)) if d == "%z"));
        assert_eq!(out.as_str(), "x%zy");
    }

    #[test]
    fn test_trailing_percent() {
        let mut out = Buffer::new();
        let result = write_formatted("50%", &[], &mut out);
        assert!(matches!(result, Err(Error::BadDirective(_))));
        assert_eq!(out.as_str(), "50%");
    }

    #[test]
    fn test_radix_directives() {
        let args = [Value::from(255), Value::from(-255), Value::from(8u8), Value::from(5)];
        assert_eq!(format("%x %X %o %b", &args).unwrap(), "ff -FF 10 101");
    }

    #[test]
    fn test_kind_fallbacks() {
        let args = [Value::from("abc"), Value::from(true), Value::from("1.5")];
        assert_eq!(format("%d %t %.1f", &args).unwrap(), "abc true 1.5");
    }

    #[test]
    fn test_char_and_quote() {
        let args = [Value::from(0x00F1), Value::from("a \"b\""), Value::from(3)];
        assert_eq!(format("%c %q %q", &args).unwrap(), "ñ \"a \\\"b\\\"\" \"3\"");
    }

    #[test]
    fn test_precision_beyond_memory() {
        assert!(matches!(
            format("%.18446744073709551615f", &[Value::from(1.5)]),
            Err(Error::OutOfMemory)
        ));
    }

    #[test]
    fn test_precision_beyond_usize_is_unknown_directive() {
        assert_eq!(
            format("%.99999999999999999999f", &[Value::from(1.5)]).unwrap(),
            "%.99999999999999999999f"
        );
        assert!(matches!(
            format("%.99999999999999999999f", &[]),
            Err(Error::BadDirective(d)) if d == "%."
        ));
    }

    #[test]
    fn test_result_does_not_keep_pooled_capacity() {
        let mut big = Buffer::acquire();
        big.reserve(10_000).unwrap();
        big.release();

        let text = format("%s!", &[Value::from("hola")]).unwrap();
        assert_eq!(text, "hola!");
        assert_eq!(text.capacity(), text.len());
        assert!(Buffer::acquire().capacity() >= 10_000);
    }

    #[test]
    fn test_unsupported_argument() {
        assert!(matches!(
            format("%v", &[Value::Unsupported("u128")]),
            Err(Error::UnsupportedType(_))
        ));
    }
}
