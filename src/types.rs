//! Core input model: the tagged [`Value`] accepted by constructors, `write`,
//! `format` and `translate`, and the [`State`] a conversion is in.

use std::{any::Any, borrow::Cow, fmt::Display};

use crate::{buffer::Buffer, error::Error, number};

/// Which kind of value a [`crate::Conv`] currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// One owned working string.
    Scalar,
    /// An ordered list of strings, collapsed by `join`.
    Sequence,
    /// Created empty; grows through repeated `write` calls.
    Accumulator,
    /// Scalar whose final text is written back to a caller slot by `apply`.
    Borrowed,
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            State::Scalar => "scalar",
            State::Sequence => "sequence",
            State::Accumulator => "accumulator",
            State::Borrowed => "borrowed",
        };
        f.write_str(name)
    }
}

/// Any input the engine understands.
#[derive(Debug)]
pub enum Value<'a> {
    Str(Cow<'a, str>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Seq(Vec<Cow<'a, str>>),
    /// Caller-owned string that `apply` writes back to.
    Slot(&'a mut String),
    /// A runtime value of a kind the engine does not render, by type name.
    Unsupported(&'static str),
}

impl<'a> Value<'a> {
    /// Dispatches on the runtime type of `value`.
    ///
    /// Recognizes strings, all primitive integers up to 64 bits, floats, `bool`,
    /// `char` and vectors of strings; every other type becomes
    /// [`Value::Unsupported`].
    pub fn from_any(value: &'a dyn Any) -> Self {
        macro_rules! try_cast {
            ($($ty:ty),*) => {
                $(
                    if let Some(v) = value.downcast_ref::<$ty>() {
                        return Value::from(*v);
                    }
                )*
            };
        }

        if let Some(s) = value.downcast_ref::<String>() {
            return Value::Str(Cow::Borrowed(s.as_str()));
        }
        if let Some(s) = value.downcast_ref::<&'static str>() {
            return Value::Str(Cow::Borrowed(*s));
        }
        if let Some(v) = value.downcast_ref::<Vec<String>>() {
            return Value::from(v.as_slice());
        }
        if let Some(v) = value.downcast_ref::<Vec<&'static str>>() {
            return Value::from(v.as_slice());
        }
        try_cast!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char);

        Value::Unsupported(type_name_hint(value))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Seq(_) => "sequence",
            Value::Slot(_) => "string slot",
            Value::Unsupported(name) => *name,
        }
    }

    /// The text form of a string-like value, without rendering.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Slot(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Appends the default text rendering: strings verbatim, numbers in their
    /// shortest decimal form, booleans as `true`/`false`, sequences joined by a
    /// single space.
    pub fn write_to(&self, out: &mut Buffer) -> Result<(), Error> {
        match self {
            Value::Str(s) => out.push_str(s),
            Value::Slot(s) => out.push_str(s),
            Value::Int(i) => number::write_int(out, *i),
            Value::Uint(u) => number::write_uint(out, *u),
            Value::Float(x) => number::write_float(out, *x),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ')?;
                    }
                    out.push_str(item)?;
                }
                Ok(())
            }
            Value::Unsupported(name) => Err(Error::UnsupportedType(name.to_string())),
        }
    }
}

/// `dyn Any` carries no type name; only a few common unsupported kinds are named.
fn type_name_hint(value: &dyn Any) -> &'static str {
    if value.is::<i128>() {
        "i128"
    } else if value.is::<u128>() {
        "u128"
    } else if value.is::<()>() {
        "()"
    } else {
        "unknown"
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Value::Str(s)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Str(Cow::Owned(c.to_string()))
    }
}

impl<'a> From<&'a mut String> for Value<'a> {
    fn from(slot: &'a mut String) -> Self {
        Value::Slot(slot)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Value::Uint(v as u64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value<'_> {
    /// Keeps the shortest `f32` rendering (`0.1f32` stays `0.1`).
    fn from(x: f32) -> Self {
        Value::Float(x.to_string().parse().unwrap_or(f64::from(x)))
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<&'a [&'a str]> for Value<'a> {
    fn from(items: &'a [&'a str]) -> Self {
        Value::Seq(items.iter().map(|s| Cow::Borrowed(*s)).collect())
    }
}

impl<'a> From<&'a [String]> for Value<'a> {
    fn from(items: &'a [String]) -> Self {
        Value::Seq(items.iter().map(|s| Cow::Borrowed(s.as_str())).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Value<'a> {
    fn from(items: [&'a str; N]) -> Self {
        Value::Seq(items.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Value<'a> {
    fn from(items: Vec<&'a str>) -> Self {
        Value::Seq(items.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for Value<'_> {
    fn from(items: Vec<String>) -> Self {
        Value::Seq(items.into_iter().map(Cow::Owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: Value<'_>) -> String {
        let mut out = Buffer::new();
        value.write_to(&mut out).unwrap();
        out.into_string()
    }

    #[test]
    fn test_default_rendering() {
        assert_eq!(render(Value::from("héllo")), "héllo");
        assert_eq!(render(Value::from(-42i32)), "-42");
        assert_eq!(render(Value::from(42u8)), "42");
        assert_eq!(render(Value::from(3.5)), "3.5");
        assert_eq!(render(Value::from(0.1f32)), "0.1");
        assert_eq!(render(Value::from(true)), "true");
        assert_eq!(render(Value::from(["x", "y"])), "x y");
        assert_eq!(render(Value::from('ñ')), "ñ");
    }

    #[test]
    fn test_slot_renders_current_text() {
        let mut slot = String::from("current");
        assert_eq!(render(Value::from(&mut slot)), "current");
    }

    #[test]
    fn test_from_any_dispatch() {
        let n: i32 = 7;
        let s = String::from("seven");
        let words = vec!["a".to_string(), "b".to_string()];
        assert!(matches!(Value::from_any(&n), Value::Int(7)));
        assert!(matches!(Value::from_any(&s), Value::Str(_)));
        assert!(matches!(Value::from_any(&words), Value::Seq(ref v) if v.len() == 2));
        assert!(matches!(Value::from_any(&2.5f64), Value::Float(_)));
    }

    #[test]
    fn test_from_any_unsupported() {
        let wide: u128 = 1;
        let value = Value::from_any(&wide);
        assert_eq!(value.kind(), "u128");
        let mut out = Buffer::new();
        assert!(matches!(
            value.write_to(&mut out),
            Err(Error::UnsupportedType(name)) if name == "u128"
        ));
        assert!(out.is_empty());
    }
}
