//! Positional `%` formatting for log messages whose format string is only known at runtime.
//!
//! Each verb consumes one argument in order. Mismatches never panic: they are rendered
//! inline (`%!d(string=abc)`, `%!s(MISSING)`, `%!(EXTRA int=3)`) so a bad call site still
//! produces a readable line. Widths and precisions above [`MAX_WIDTH`] are reported as
//! `%!(BADWIDTH)` / `%!(BADPREC)` and ignored.

use std::borrow::Cow;
use std::fmt;

/// One formatting argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Bool(bool),
    Str(Cow<'a, str>),
}

impl Arg<'_> {
    /// Renders any `Display` value as a string argument.
    pub fn display(value: &impl fmt::Display) -> Arg<'static> {
        Arg::Str(Cow::Owned(value.to_string()))
    }

    /// Name used in inline error text.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Char(_) => "char",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&general(*v, None, false, false)),
            Self::Char(c) => write!(f, "{c}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(v: $t) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }

            impl From<&$t> for Arg<'_> {
                fn from(v: &$t) -> Self {
                    Self::$variant(<$target>::from(*v))
                }
            }
        )*
    };
}

impl_from!(Int as i64: i8, i16, i32, i64);
impl_from!(Uint as u64: u8, u16, u32, u64);
impl_from!(Float as f64: f32, f64);
impl_from!(Char as char: char);
impl_from!(Bool as bool: bool);

impl From<isize> for Arg<'_> {
    fn from(v: isize) -> Self {
        match i64::try_from(v) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Str(Cow::Owned(v.to_string())),
        }
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        match u64::try_from(v) {
            Ok(v) => Self::Uint(v),
            Err(_) => Self::Str(Cow::Owned(v.to_string())),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(Cow::Borrowed(v))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(v: &'a String) -> Self {
        Self::Str(Cow::Borrowed(v.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(v: String) -> Self {
        Self::Str(Cow::Owned(v))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(v: Cow<'a, str>) -> Self {
        Self::Str(v)
    }
}

/// Largest width or precision a directive may request.
pub const MAX_WIDTH: usize = 1_000_000;

/// An `f64` has at most 1074 fraction digits and fewer significant ones; digits past
/// this many are always zero.
const EXACT_DIGITS: usize = 1100;

/// Flags, width and precision of one directive.
#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    zero: bool,
    space: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Formats `format` against `args`.
#[must_use]
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut remaining = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = take_number(&mut chars);
        if spec.width.is_some_and(|width| width > MAX_WIDTH) {
            out.push_str("%!(BADWIDTH)");
            spec.width = None;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let precision = take_number(&mut chars).unwrap_or(0);
            if precision > MAX_WIDTH {
                out.push_str("%!(BADPREC)");
            } else {
                spec.precision = Some(precision);
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match remaining.next() {
            None => {
                out.push_str("%!");
                out.push(verb);
                out.push_str("(MISSING)");
            }
            Some(arg) => match render(verb, &spec, arg) {
                Some(text) => out.push_str(&text),
                None => out.push_str(&bad_verb(verb, arg)),
            },
        }
    }

    let extra: Vec<String> = remaining
        .map(|arg| format!("{}={arg}", arg.type_name()))
        .collect();
    if !extra.is_empty() {
        out.push_str("%!(EXTRA ");
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let digit = usize::try_from(digit).unwrap_or(0);
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }
    value
}

fn bad_verb(verb: char, arg: &Arg<'_>) -> String {
    format!("%!{verb}({}={arg})", arg.type_name())
}

/// `None` means the verb does not apply to this argument type.
fn render(verb: char, spec: &Spec, arg: &Arg<'_>) -> Option<String> {
    match (verb, arg) {
        ('v', Arg::Float(v)) => Some(float('g', spec, *v)),
        ('v', Arg::Int(v)) => integer('d', spec, *v < 0, v.unsigned_abs()),
        ('v', Arg::Uint(v)) => integer('d', spec, false, *v),
        ('v' | 's', Arg::Str(s)) => Some(text(spec, s)),
        ('v' | 'c', Arg::Char(c)) => Some(pad_text(spec, c.to_string())),
        ('v' | 't', Arg::Bool(b)) => Some(pad_text(spec, b.to_string())),
        ('d' | 'x' | 'X' | 'o' | 'b', Arg::Int(v)) => integer(verb, spec, *v < 0, v.unsigned_abs()),
        ('d' | 'x' | 'X' | 'o' | 'b', Arg::Uint(v)) => integer(verb, spec, false, *v),
        ('d' | 'x' | 'X' | 'o' | 'b', Arg::Char(c)) => integer(verb, spec, false, u64::from(*c)),
        ('x' | 'X', Arg::Str(s)) => Some(hex_bytes(verb, spec, s)),
        ('c', Arg::Int(v)) => Some(code_point(spec, u32::try_from(*v).ok())),
        ('c', Arg::Uint(v)) => Some(code_point(spec, u32::try_from(*v).ok())),
        ('q', Arg::Str(s)) => Some(pad_text(spec, format!("{s:?}"))),
        ('q', Arg::Char(c)) => Some(pad_text(spec, format!("{c:?}"))),
        ('f' | 'F' | 'e' | 'E' | 'g' | 'G', Arg::Float(v)) => Some(float(verb, spec, *v)),
        _ => None,
    }
}

fn sign(negative: bool, spec: &Spec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn integer(verb: char, spec: &Spec, negative: bool, magnitude: u64) -> Option<String> {
    let (mut digits, prefix) = match verb {
        'd' => (magnitude.to_string(), ""),
        'x' => (format!("{magnitude:x}"), if spec.sharp { "0x" } else { "" }),
        'X' => (format!("{magnitude:X}"), if spec.sharp { "0X" } else { "" }),
        'o' => (format!("{magnitude:o}"), if spec.sharp { "0" } else { "" }),
        'b' => (format!("{magnitude:b}"), if spec.sharp { "0b" } else { "" }),
        _ => return None,
    };
    if let Some(precision) = spec.precision
        && digits.len() < precision
    {
        digits = "0".repeat(precision - digits.len()) + &digits;
    }
    // Precision already fixes the digit count, so the zero flag no longer pads.
    let zero_pad = spec.precision.is_none();
    Some(pad_number(spec, sign(negative, spec), prefix, &digits, zero_pad))
}

fn float(verb: char, spec: &Spec, value: f64) -> String {
    let negative = value.is_sign_negative() && !value.is_nan();
    if !value.is_finite() {
        let body = if value.is_nan() { "NaN" } else { "Inf" };
        let sign = if value.is_nan() {
            ""
        } else if negative {
            "-"
        } else {
            "+"
        };
        return pad_text(spec, format!("{sign}{body}"));
    }

    let magnitude = value.abs();
    let digits = match verb {
        'e' | 'E' => scientific(magnitude, spec.precision.unwrap_or(6), verb == 'E'),
        'g' | 'G' => general(magnitude, spec.precision, spec.sharp, verb == 'G'),
        _ => fixed(magnitude, spec.precision.unwrap_or(6)),
    };
    pad_number(spec, sign(negative, spec), "", &digits, true)
}

fn fixed(magnitude: f64, precision: usize) -> String {
    let exact = precision.min(EXACT_DIGITS);
    let mut digits = format!("{magnitude:.exact$}");
    digits.extend(std::iter::repeat_n('0', precision - exact));
    digits
}

/// `d.ddddde±XX` with at least two exponent digits.
fn scientific(magnitude: f64, precision: usize, upper: bool) -> String {
    let exact = precision.min(EXACT_DIGITS);
    let raw = format!("{magnitude:.exact$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let zeros = "0".repeat(precision - exact);
    normalize_exponent(&format!("{mantissa}{zeros}e{exponent}"), upper)
}

fn normalize_exponent(raw: &str, upper: bool) -> String {
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{sign}{:02}", exponent.unsigned_abs())
}

fn exponent_of(raw: &str) -> i32 {
    raw.split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

/// `%g`: scientific for very large or small exponents, plain decimal otherwise.
fn general(magnitude: f64, precision: Option<usize>, sharp: bool, upper: bool) -> String {
    let Some(precision) = precision else {
        let shortest = format!("{magnitude:e}");
        let exponent = exponent_of(&shortest);
        return if magnitude != 0.0 && !(-4..6).contains(&exponent) {
            normalize_exponent(&shortest, upper)
        } else {
            magnitude.to_string()
        };
    };

    let precision = precision.clamp(1, 1000);
    let significant = precision - 1;
    let rounded = format!("{magnitude:.significant$e}");
    let exponent = exponent_of(&rounded);
    let limit = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= limit {
        let (mantissa, _) = rounded.split_once('e').unwrap_or((rounded.as_str(), ""));
        let mantissa = if sharp {
            mantissa.to_string()
        } else {
            trim_fraction(mantissa)
        };
        normalize_exponent(&format!("{mantissa}e{exponent}"), upper)
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        let fixed = format!("{magnitude:.decimals$}");
        if sharp { fixed } else { trim_fraction(&fixed) }
    }
}

fn trim_fraction(number: &str) -> String {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        number.to_string()
    }
}

fn text(spec: &Spec, s: &str) -> String {
    match spec.precision {
        Some(precision) => pad_text(spec, s.chars().take(precision).collect()),
        None => pad_text(spec, s.to_string()),
    }
}

fn hex_bytes(verb: char, spec: &Spec, s: &str) -> String {
    let encoded: String = s
        .bytes()
        .map(|b| {
            if verb == 'X' {
                format!("{b:02X}")
            } else {
                format!("{b:02x}")
            }
        })
        .collect();
    pad_text(spec, encoded)
}

fn code_point(spec: &Spec, value: Option<u32>) -> String {
    let c = value
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    pad_text(spec, c.to_string())
}

fn pad_text(spec: &Spec, body: String) -> String {
    let len = body.chars().count();
    match spec.width {
        Some(width) if width > len => {
            let fill = " ".repeat(width - len);
            if spec.minus {
                body + &fill
            } else {
                fill + &body
            }
        }
        _ => body,
    }
}

fn pad_number(spec: &Spec, sign: &str, prefix: &str, digits: &str, zero_pad: bool) -> String {
    let len = sign.len() + prefix.len() + digits.chars().count();
    match spec.width {
        Some(width) if width > len => {
            let fill = width - len;
            if spec.minus {
                format!("{sign}{prefix}{digits}{}", " ".repeat(fill))
            } else if spec.zero && zero_pad {
                format!("{sign}{prefix}{}{digits}", "0".repeat(fill))
            } else {
                format!("{}{sign}{prefix}{digits}", " ".repeat(fill))
            }
        }
        _ => format!("{sign}{prefix}{digits}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_verbs() {
        let args: Vec<Arg<'_>> = vec![1.into(), "two".into(), 3.5.into(), 'x'.into()];
        assert_eq!(sprintf("%d %s %f %c", &args), "1 two 3.500000 x");
    }

    #[test]
    fn literal_percent_consumes_nothing() {
        assert_eq!(sprintf("100%% of %d", &[7.into()]), "100% of 7");
    }

    #[test]
    fn width_precision_and_flags() {
        assert_eq!(
            sprintf("%5d|%-5d|%05d", &[42.into(), 42.into(), (-42).into()]),
            "   42|42   |-0042"
        );
        assert_eq!(sprintf("%.2f", &[1.23456.into()]), "1.23");
        assert_eq!(sprintf("%+d", &[3.into()]), "+3");
        assert_eq!(sprintf("%.3s", &["abcdef".into()]), "abc");
        assert_eq!(sprintf("%8.3f", &[2.5.into()]), "   2.500");
    }

    #[test]
    fn radix_verbs() {
        let args: Vec<Arg<'_>> = vec![255.into(), 255.into(), 255.into(), 8.into(), 5.into()];
        assert_eq!(sprintf("%x %X %#x %o %b", &args), "ff FF 0xff 10 101");
        assert_eq!(sprintf("%x", &["hi".into()]), "6869");
    }

    #[test]
    fn scientific_and_general() {
        assert_eq!(sprintf("%e", &[1234.5678.into()]), "1.234568e+03");
        assert_eq!(sprintf("%E", &[0.00012.into()]), "1.200000E-04");
        assert_eq!(sprintf("%g", &[0.5.into()]), "0.5");
        assert_eq!(sprintf("%g", &[1_000_000.0.into()]), "1e+06");
        assert_eq!(sprintf("%v", &[123_456.0.into()]), "123456");
        assert_eq!(sprintf("%.3g", &[1.23456.into()]), "1.23");
    }

    #[test]
    fn char_and_quote_verbs() {
        assert_eq!(sprintf("%c", &[65.into()]), "A");
        assert_eq!(sprintf("%d", &['A'.into()]), "65");
        assert_eq!(sprintf("%q", &["a\"b".into()]), "\"a\\\"b\"");
    }

    #[test]
    fn wrong_type_is_reported_inline() {
        assert_eq!(sprintf("%d", &["abc".into()]), "%!d(string=abc)");
        assert_eq!(sprintf("%s", &[5.into()]), "%!s(int=5)");
        assert_eq!(sprintf("%z", &[true.into()]), "%!z(bool=true)");
    }

    #[test]
    fn missing_and_extra_arguments() {
        assert_eq!(sprintf("%d and %s", &[1.into()]), "1 and %!s(MISSING)");
        assert_eq!(sprintf("x", &[1.into(), "y".into()]), "x%!(EXTRA int=1, string=y)");
        assert_eq!(sprintf("tail %", &[]), "tail %!(NOVERB)");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(sprintf("%f", &[f64::INFINITY.into()]), "+Inf");
        assert_eq!(sprintf("%f", &[f64::NEG_INFINITY.into()]), "-Inf");
        assert_eq!(sprintf("%f", &[f64::NAN.into()]), "NaN");
    }

    #[test]
    fn oversized_width_and_precision_are_reported() {
        assert_eq!(
            sprintf("%99999999999999999999d", &[1.into()]),
            "%!(BADWIDTH)1"
        );
        assert_eq!(
            sprintf("%.99999999999999999999d", &[1.into()]),
            "%!(BADPREC)1"
        );
        assert_eq!(sprintf("%1000001s|", &["x".into()]), "%!(BADWIDTH)x|");
        assert_eq!(sprintf("%1000000d", &[7.into()]).len(), MAX_WIDTH);
    }

    #[test]
    fn float_precision_beyond_exact_digits_pads_with_zeros() {
        let fixed = sprintf("%.70000f", &[1.0.into()]);
        assert_eq!(fixed.len(), 2 + 70_000);
        assert!(fixed.starts_with("1.000"));
        assert!(fixed.bytes().skip(2).all(|b| b == b'0'));

        let scientific = sprintf("%.70000e", &[1.0.into()]);
        assert_eq!(scientific.len(), 2 + 70_000 + 4);
        assert!(scientific.ends_with("0e+00"));

        assert_eq!(sprintf("%.1200f", &[0.5.into()]), format!("0.5{}", "0".repeat(1199)));
    }

    #[test]
    fn display_values_become_strings() {
        let path = std::path::Path::new("/tmp/x.log");
        assert_eq!(sprintf("%s", &[Arg::display(&path.display())]), "/tmp/x.log");
    }
}
