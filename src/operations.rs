//! Chainable operations on [`Conv`].
//!
//! Every operation takes the conversion by value and hands it back, so calls
//! chain. Once a step fails the error sticks and later steps leave the value
//! as it was.

use std::borrow::Cow;

use crate::{
    buffer::Buffer,
    conv::Conv,
    error::Error,
    format,
    number::{self, NumberFormat, Rounding},
    transform,
    types::{State, Value},
};

impl<'a> Conv<'a> {
    /// Runs `kernel` over the current value.
    ///
    /// Scalars go through the scratch buffer and are swapped in on success. A
    /// sequence is transformed element by element and only replaced once every
    /// element succeeded. An accumulator becomes a scalar.
    fn transform<F>(mut self, kernel: F) -> Self
    where
        F: Fn(&str, &mut Buffer) -> Result<(), Error>,
    {
        if self.err.is_some() {
            return self;
        }

        if self.state == State::Sequence {
            match map_items(&self.seq, &mut self.scratch, &kernel) {
                Ok(items) => self.seq = items,
                Err(e) => self.fail(e),
            }
            return self;
        }

        self.scratch.clear();
        match kernel(self.buf.as_str(), &mut self.scratch) {
            Ok(()) => {
                std::mem::swap(&mut self.buf, &mut self.scratch);
                if self.state == State::Accumulator {
                    self.state = self.scalar_state();
                }
            }
            Err(e) => self.fail(e),
        }
        self
    }

    pub fn to_lower(self) -> Self {
        self.transform(transform::lower)
    }

    pub fn to_upper(self) -> Self {
        self.transform(transform::upper)
    }

    /// Replaces accented Latin letters with their ASCII base (`á` → `a`, `Ñ` → `N`).
    pub fn remove_tilde(self) -> Self {
        self.transform(transform::fold_diacritics)
    }

    /// Alias of [`Conv::remove_tilde`].
    pub fn tilde(self) -> Self {
        self.remove_tilde()
    }

    /// Strips leading and trailing Unicode whitespace.
    pub fn trim(self) -> Self {
        self.transform(transform::trim)
    }

    /// Alias of [`Conv::trim`].
    pub fn trim_space(self) -> Self {
        self.trim()
    }

    pub fn trim_prefix(self, prefix: &str) -> Self {
        self.transform(|input, out| transform::trim_prefix(input, prefix, out))
    }

    pub fn trim_suffix(self, suffix: &str) -> Self {
        self.transform(|input, out| transform::trim_suffix(input, suffix, out))
    }

    /// Replaces every non-overlapping occurrence of `old` with `new`, left to right.
    ///
    /// An empty `old` leaves the value unchanged.
    pub fn replace(self, old: &str, new: &str) -> Self {
        self.transform(|input, out| transform::replace(input, old, new, out))
    }

    /// Uppercases the first code point and leaves the rest untouched.
    pub fn capitalize(self) -> Self {
        self.transform(transform::capitalize)
    }

    /// `camelCase`. Words are split on whitespace and ASCII punctuation only.
    pub fn camel_case_lower(self) -> Self {
        self.transform(|input, out| transform::camel(input, false, out))
    }

    /// `PascalCase`.
    pub fn camel_case_upper(self) -> Self {
        self.transform(|input, out| transform::camel(input, true, out))
    }

    /// `snake_case`. Also splits where a lowercase letter meets an uppercase one.
    pub fn to_snake_case_lower(self) -> Self {
        self.transform(|input, out| transform::delimited(input, '_', false, out))
    }

    /// `SCREAMING_SNAKE_CASE`.
    pub fn to_snake_case_upper(self) -> Self {
        self.transform(|input, out| transform::delimited(input, '_', true, out))
    }

    pub fn to_kebab_case(self) -> Self {
        self.transform(|input, out| transform::delimited(input, '-', false, out))
    }

    pub fn to_kebab_case_upper(self) -> Self {
        self.transform(|input, out| transform::delimited(input, '-', true, out))
    }

    pub fn repeat(self, times: usize) -> Self {
        self.transform(|input, out| transform::repeat(input, times, out))
    }

    /// Shortens the value to at most `max` code points, ending in `...` when it
    /// had to cut and `max` leaves room for it.
    pub fn truncate(self, max: usize) -> Self {
        self.transform(|input, out| transform::truncate(input, max, out))
    }

    /// Wraps the value in double quotes, escaping quotes, backslashes and control whitespace.
    pub fn quote(self) -> Self {
        self.transform(transform::quote)
    }

    /// Rounds the numeric text to exactly `places` fractional digits, half away from zero.
    ///
    /// # Arguments
    ///
    /// * `places` - Number of fractional digits to keep; missing digits are padded with zeros
    ///
    /// # Returns
    ///
    /// Returns `self`. Non-numeric text records [`Error::InvalidNumber`].
    pub fn round_decimals(self, places: usize) -> Self {
        self.transform(|input, out| number::round_into(input, places, Rounding::HalfAwayFromZero, out))
    }

    /// Like [`Conv::round_decimals`] but drops the extra digits instead of rounding.
    pub fn round_decimals_down(self, places: usize) -> Self {
        self.transform(|input, out| number::round_into(input, places, Rounding::TowardZero, out))
    }

    /// Groups the integer digits of the numeric text in threes, using the
    /// separators set by [`Conv::with_number_format`] (`,` and `.` by default).
    pub fn format_number(self) -> Self {
        let format = self.number_format;
        self.format_number_with(&format)
    }

    pub fn format_number_with(self, format: &NumberFormat) -> Self {
        self.transform(|input, out| number::group_into(input, format, out))
    }

    /// Appends the text rendering of `value`.
    ///
    /// Accumulator, scalar and borrowed conversions grow their text; a sequence
    /// gets a new element. A failed write leaves the value as it was.
    pub fn write<'v>(mut self, value: impl Into<Value<'v>>) -> Self {
        if self.err.is_some() {
            return self;
        }
        let value = value.into();

        if self.state == State::Sequence {
            let mut item = Buffer::new();
            let pushed = value.write_to(&mut item).and_then(|()| {
                self.seq.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
                self.seq.push(Cow::Owned(item.into_string()));
                Ok(())
            });
            if let Err(e) = pushed {
                self.fail(e);
            }
            return self;
        }

        let len = self.buf.len();
        if let Err(e) = value.write_to(&mut self.buf) {
            self.buf.truncate(len);
            self.fail(e);
        }
        self
    }

    /// Collapses a sequence into one string with `sep` between elements.
    ///
    /// Any other state is left alone.
    pub fn join(mut self, sep: &str) -> Self {
        if self.err.is_some() || self.state != State::Sequence {
            return self;
        }

        self.scratch.clear();
        match join_items(&self.seq, sep, &mut self.scratch) {
            Ok(()) => {
                std::mem::swap(&mut self.buf, &mut self.scratch);
                self.seq.clear();
                self.state = self.scalar_state();
            }
            Err(e) => self.fail(e),
        }
        self
    }

    /// Splits the text on `sep` into a sequence. An empty `sep` splits into code points.
    ///
    /// A sequence is left alone.
    pub fn split(mut self, sep: &str) -> Self {
        if self.err.is_some() || self.state == State::Sequence {
            return self;
        }

        let text = self.buf.as_str();
        let items: Vec<Cow<'a, str>> = if sep.is_empty() {
            text.chars().map(|c| Cow::Owned(c.to_string())).collect()
        } else {
            text.split(sep).map(|item| Cow::Owned(item.to_owned())).collect()
        };
        self.seq = items;
        self.buf.clear();
        self.state = State::Sequence;
        self
    }

    /// Expands a printf-style `template` (see [`crate::format()`]).
    ///
    /// An accumulator appends the expansion; every other state is replaced by
    /// it. A [`Error::BadDirective`] leaves the previous value in place.
    pub fn format(mut self, template: &str, args: &[Value<'_>]) -> Self {
        if self.err.is_some() {
            return self;
        }

        if self.state == State::Accumulator {
            let len = self.buf.len();
            if let Err(e) = format::write_formatted(template, args, &mut self.buf) {
                self.buf.truncate(len);
                self.fail(e);
            }
            return self;
        }

        self.scratch.clear();
        match format::write_formatted(template, args, &mut self.scratch) {
            Ok(()) => {
                std::mem::swap(&mut self.buf, &mut self.scratch);
                self.seq.clear();
                self.state = self.scalar_state();
            }
            Err(e) => self.fail(e),
        }
        self
    }
}

fn map_items<'a, F>(items: &[Cow<'a, str>], scratch: &mut Buffer, kernel: &F) -> Result<Vec<Cow<'a, str>>, Error>
where
    F: Fn(&str, &mut Buffer) -> Result<(), Error>,
{
    let mut mapped = Vec::new();
    mapped.try_reserve(items.len()).map_err(|_| Error::OutOfMemory)?;
    for item in items {
        scratch.clear();
        kernel(item, scratch)?;
        mapped.push(Cow::Owned(scratch.as_str().to_owned()));
    }
    Ok(mapped)
}

fn join_items(items: &[Cow<'_, str>], sep: &str, out: &mut Buffer) -> Result<(), Error> {
    let total = items.iter().map(|item| item.len()).sum::<usize>()
        + sep.len() * items.len().saturating_sub(1);
    out.reserve(total)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep)?;
        }
        out.push_str(item)?;
    }
    Ok(())
}
