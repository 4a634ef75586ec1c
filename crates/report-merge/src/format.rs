use std::io;

use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

/// `serde_json` formatter that writes floats the way JavaScript's
/// `Number.prototype.toString` does, so reports stay byte-identical to the
/// ones produced by `JSON.stringify`: `100` rather than `100.0`, plain digits
/// up to `1e21`, and `1e-7` / `1e+21` exponents outside that range.
///
/// Structural output is delegated to the wrapped formatter.
pub(crate) struct ScriptNumbers<F> {
    inner: F,
}

impl ScriptNumbers<CompactFormatter> {
    pub(crate) fn compact() -> Self {
        ScriptNumbers {
            inner: CompactFormatter,
        }
    }
}

impl ScriptNumbers<PrettyFormatter<'static>> {
    pub(crate) fn pretty() -> Self {
        ScriptNumbers {
            inner: PrettyFormatter::new(),
        }
    }
}

impl<F: Formatter> Formatter for ScriptNumbers<F> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(script_number(value).as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Formats a finite float with the shortest round-trip digits, laid out as
/// JavaScript does. Negative zero prints as `0`.
pub(crate) fn script_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };

    // shortest digits, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // value = 0.<digits> * 10^point
    let len = digits.len() as i32;
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(-point as usize))
    } else {
        let exp = point - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exp.abs())
        }
    };

    format!("{sign}{body}")
}
