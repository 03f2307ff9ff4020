//! The conversion builder.
//!
//! A [`Conv`] owns a working buffer and a scratch buffer. Each chained operation
//! writes its result into the scratch buffer and swaps the two, so a chain of any
//! length reuses the same two allocations. When the `Conv` is dropped both
//! buffers go back to a per-thread pool for the next chain.
//!
//! # Example
//!
//! ```rust
//! use textchain::convert;
//!
//! let id = convert("José María-González 2024")
//!     .remove_tilde()
//!     .to_snake_case_lower()
//!     .string();
//! assert_eq!(id, "jose_maria_gonzalez_2024");
//!
//! let mut title = String::from("  hello world  ");
//! convert(&mut title).trim().capitalize().apply()?;
//! assert_eq!(title, "Hello world");
//! # Ok::<(), textchain::Error>(())
//! ```

use std::{borrow::Cow, fmt::Display};

use crate::{
    buffer::Buffer,
    error::Error,
    number::{self, NumberFormat},
    types::{State, Value},
};

pub struct Conv<'a> {
    pub(crate) state: State,
    pub(crate) buf: Buffer,
    pub(crate) scratch: Buffer,
    pub(crate) seq: Vec<Cow<'a, str>>,
    pub(crate) err: Option<Error>,
    pub(crate) slot: Option<&'a mut String>,
    pub(crate) number_format: NumberFormat,
}

/// Starts a chain from any supported value.
///
/// Strings and numbers give a scalar conversion, string lists a sequence and
/// `&mut String` a borrowed conversion that [`Conv::apply`] writes back to.
pub fn convert<'a>(value: impl Into<Value<'a>>) -> Conv<'a> {
    Conv::from_value(value.into())
}

impl<'a> Conv<'a> {
    /// Creates an empty accumulator that collects [`Conv::write`] fragments.
    pub fn new() -> Self {
        Self::with_state(State::Accumulator)
    }

    fn with_state(state: State) -> Self {
        Self {
            state,
            buf: Buffer::acquire(),
            scratch: Buffer::acquire(),
            seq: Vec::new(),
            err: None,
            slot: None,
            number_format: NumberFormat::default(),
        }
    }

    pub fn from_value(value: Value<'a>) -> Self {
        match value {
            Value::Seq(items) => {
                let mut conv = Self::with_state(State::Sequence);
                conv.seq = items;
                conv
            }
            Value::Slot(slot) => {
                let mut conv = Self::with_state(State::Borrowed);
                if let Err(e) = conv.buf.set(slot.as_str()) {
                    conv.fail(e);
                }
                conv.slot = Some(slot);
                conv
            }
            other => {
                let mut conv = Self::with_state(State::Scalar);
                if let Err(e) = other.write_to(&mut conv.buf) {
                    conv.buf.clear();
                    conv.fail(e);
                }
                conv
            }
        }
    }

    /// Separators used by `format_number` from now on.
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The sticky error, if any operation in the chain has failed.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Current working text. Empty while in the sequence state.
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Current elements. Empty unless in the sequence state.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.seq.iter().map(|item| item.as_ref())
    }

    /// Returns an owned copy of the current value. A sequence is joined with single spaces.
    ///
    /// After a failure this is the last successful intermediate; check [`Conv::err`].
    pub fn string(&self) -> String {
        match self.state {
            State::Sequence => self.seq.join(" "),
            _ => self.buf.as_str().to_owned(),
        }
    }

    /// Consumes the conversion, returning its text or the sticky error.
    pub fn into_result(mut self) -> Result<String, Error> {
        if let Some(err) = self.err.take() {
            return Err(err);
        }
        Ok(self.take_string())
    }

    /// Consumes the conversion, returning its text without checking the sticky error.
    pub fn into_string(mut self) -> String {
        self.take_string()
    }

    /// Consumes the conversion, returning the elements of a sequence, or the
    /// scalar text as a single element.
    pub fn into_vec(mut self) -> Vec<String> {
        match self.state {
            State::Sequence => std::mem::take(&mut self.seq)
                .into_iter()
                .map(Cow::into_owned)
                .collect(),
            _ => vec![self.take_string()],
        }
    }

    fn take_string(&mut self) -> String {
        match self.state {
            State::Sequence => self.seq.join(" "),
            _ => self.buf.as_str().to_owned(),
        }
    }

    /// Writes the final text back into the borrowed string.
    ///
    /// Fails with [`Error::InvalidState`] unless the conversion was created from a
    /// `&mut String` and is not currently a sequence. On any error the borrowed
    /// string is left untouched.
    pub fn apply(mut self) -> Result<(), Error> {
        if let Some(err) = self.err.take() {
            return Err(err);
        }
        if self.state != State::Borrowed {
            return Err(Error::invalid_state(format!(
                "apply needs a borrowed conversion, found {}",
                self.state
            )));
        }
        let Some(slot) = self.slot.take() else {
            return Err(Error::invalid_state("borrowed conversion has no slot"));
        };
        let text = self.buf.as_str();
        slot.try_reserve(text.len().saturating_sub(slot.len()))
            .map_err(|_| Error::OutOfMemory)?;
        slot.clear();
        slot.push_str(text);
        Ok(())
    }

    pub fn to_int(&self) -> Result<i64, Error> {
        self.check()?;
        number::parse_int(self.buf.as_str())
    }

    pub fn to_uint(&self) -> Result<u64, Error> {
        self.check()?;
        number::parse_uint(self.buf.as_str())
    }

    pub fn to_float(&self) -> Result<f64, Error> {
        self.check()?;
        number::parse_float(self.buf.as_str())
    }

    pub fn to_bool(&self) -> Result<bool, Error> {
        self.check()?;
        number::parse_bool(self.buf.as_str())
    }

    fn check(&self) -> Result<(), Error> {
        match (&self.err, self.state) {
            (Some(err), _) => Err(Error::invalid_state(format!("chain already failed: {}", err))),
            (None, State::Sequence) => Err(Error::invalid_state("a sequence has no single value")),
            (None, _) => Ok(()),
        }
    }

    /// Records the first failure; later ones are ignored.
    pub(crate) fn fail(&mut self, err: Error) {
        if self.err.is_none() {
            log::debug!("conversion failed in {} state: {}", self.state, err);
            self.err = Some(err);
        }
    }

    /// The state a non-sequence conversion settles in.
    pub(crate) fn scalar_state(&self) -> State {
        if self.slot.is_some() {
            State::Borrowed
        } else {
            State::Scalar
        }
    }
}

impl Default for Conv<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Conv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state {
            State::Sequence => {
                for (i, item) in self.seq.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(item)?;
                }
                Ok(())
            }
            _ => f.write_str(self.buf.as_str()),
        }
    }
}

impl std::fmt::Debug for Conv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conv")
            .field("state", &self.state)
            .field("buf", &self.buf.as_str())
            .field("seq", &self.seq)
            .field("err", &self.err)
            .finish()
    }
}

impl Drop for Conv<'_> {
    fn drop(&mut self) {
        std::mem::take(&mut self.buf).release();
        std::mem::take(&mut self.scratch).release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_states() {
        assert_eq!(Conv::new().state(), State::Accumulator);
        assert_eq!(convert("x").state(), State::Scalar);
        assert_eq!(convert(3).state(), State::Scalar);
        assert_eq!(convert(["a", "b"]).state(), State::Sequence);
        let mut slot = String::new();
        assert_eq!(convert(&mut slot).state(), State::Borrowed);
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(convert("hola").string(), "hola");
        assert_eq!(convert(-12i64).string(), "-12");
        assert_eq!(convert(u64::MAX).string(), "18446744073709551615");
        assert_eq!(convert(1234.567).string(), "1234.567");
        assert_eq!(convert(false).string(), "false");
    }

    #[test]
    fn test_unsupported_type() {
        let conv = convert(Value::Unsupported("u128"));
        assert_eq!(conv.state(), State::Scalar);
        assert!(matches!(conv.err(), Some(Error::UnsupportedType(_))));
        assert_eq!(conv.string(), "");
    }

    #[test]
    fn test_sequence_string_joins_with_space() {
        let conv = convert(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(conv.string(), "a b");
        assert_eq!(conv.to_string(), "a b");
        assert_eq!(conv.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_apply_on_scalar_is_invalid_state() {
        let result = convert("text").apply();
        assert!(matches!(result, Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_borrowed_string_does_not_touch_slot() {
        let mut slot = String::from("Original");
        let conv = convert(&mut slot);
        assert_eq!(conv.string(), "Original");
        drop(conv);
        assert_eq!(slot, "Original");
    }

    #[test]
    fn test_parsing_terminals() {
        assert_eq!(convert(" 42 ").to_int().unwrap(), 42);
        assert_eq!(convert("42").to_uint().unwrap(), 42);
        assert_eq!(convert(2.5).to_float().unwrap(), 2.5);
        assert!(convert("T").to_bool().unwrap());
        assert!(matches!(convert("x1").to_int(), Err(Error::InvalidNumber(_))));
        assert!(matches!(convert(["1"]).to_int(), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(convert("ok").into_result().unwrap(), "ok");
        assert!(convert(Value::Unsupported("u128")).into_result().is_err());
    }

    #[test]
    fn test_terminals_return_exact_capacity() {
        let (mut a, mut b) = (Buffer::acquire(), Buffer::acquire());
        a.reserve(10_000).unwrap();
        b.reserve(10_000).unwrap();
        a.release();
        b.release();
        let text = convert("pooled").to_upper().into_result().unwrap();
        assert_eq!(text, "POOLED");
        assert_eq!(text.capacity(), text.len());

        let text = Conv::new().write("a").write(1).into_string();
        assert_eq!(text, "a1");
        assert_eq!(text.capacity(), text.len());
    }
}
