//! printf-style substitution for log templates.
//!
//! Templates come from callers at runtime (facade functions take a template
//! string plus an argument slice), so `format!` cannot be used here. The
//! accepted syntax is `%[index$][flags][width][.precision]conversion` with the
//! conversions `s S d x X o f e E b B c C % n`.

use std::fmt;

/// Largest width or precision a conversion may ask for; anything above is
/// rejected as malformed.
pub const MAX_WIDTH: usize = 64 * 1024;

/// One substitution argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "signed integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! arg_from {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

arg_from!(Int as i64: i8, i16, i32, i64);
arg_from!(UInt as u64: u8, u16, u32, u64);
arg_from!(Float as f64: f32, f64);

impl From<isize> for Arg {
    fn from(v: isize) -> Self {
        i64::try_from(v).map_or_else(|_| Self::Str(v.to_string()), Self::Int)
    }
}

impl From<usize> for Arg {
    fn from(v: usize) -> Self {
        u64::try_from(v).map_or_else(|_| Self::Str(v.to_string()), Self::UInt)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Arg {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

/// Why a template could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A conversion referenced argument `index` (1-based) that was not supplied.
    MissingArgument(usize),
    /// More arguments were supplied than the template consumed.
    UnusedArguments(usize),
    /// The conversion cannot render an argument of that kind (`%d` with a string).
    IllegalConversion { conversion: char, kind: &'static str },
    /// Unknown conversion character.
    UnknownConversion(char),
    /// `%` at the end of the template, a malformed index/precision, or a width
    /// or precision above [`MAX_WIDTH`].
    Malformed(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(i) => write!(f, "missing argument #{i}"),
            Self::UnusedArguments(n) => write!(f, "{n} argument(s) not used by the template"),
            Self::IllegalConversion { conversion, kind } => {
                write!(f, "%{conversion} cannot format a {kind}")
            }
            Self::UnknownConversion(c) => write!(f, "unknown conversion '%{c}'"),
            Self::Malformed(pos) => write!(f, "malformed conversion at offset {pos}"),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Default)]
struct Spec {
    index: Option<usize>,
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    group: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Substitutes `args` into `template`.
///
/// # Errors
/// Returns a [`FormatError`] when the template references a missing argument,
/// leaves arguments unused, or applies a conversion to an incompatible value.
pub fn format(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut next = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '%' {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        i += 1;
        let spec = parse_spec(&chars, &mut i).ok_or(FormatError::Malformed(start))?;

        match spec.conversion {
            '%' => {
                out.push_str(&pad(&spec, "%".to_string()));
                continue;
            }
            'n' => {
                out.push('\n');
                continue;
            }
            _ => {}
        }

        let position = if let Some(index) = spec.index {
            index - 1
        } else {
            next += 1;
            next - 1
        };
        let arg = args
            .get(position)
            .ok_or(FormatError::MissingArgument(position + 1))?;
        used[position] = true;

        let body = convert(&spec, arg)?;
        out.push_str(&pad(&spec, body));
    }

    let unused = used.iter().filter(|u| !**u).count();
    if unused > 0 {
        return Err(FormatError::UnusedArguments(unused));
    }

    Ok(out)
}

fn read_number(chars: &[char], i: &mut usize) -> Option<usize> {
    let start = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i == start {
        return None;
    }
    chars[start..*i].iter().collect::<String>().parse().ok()
}

fn parse_spec(chars: &[char], i: &mut usize) -> Option<Spec> {
    let mut spec = Spec::default();

    // An explicit argument index is a digit run terminated by '$'.
    let checkpoint = *i;
    match read_number(chars, i) {
        Some(n) if n > 0 && chars.get(*i) == Some(&'$') => {
            spec.index = Some(n);
            *i += 1;
        }
        _ => *i = checkpoint,
    }

    while let Some(&c) = chars.get(*i) {
        match c {
            '-' => spec.left = true,
            '0' => spec.zero = true,
            '+' => spec.plus = true,
            ' ' => spec.space = true,
            ',' => spec.group = true,
            '#' => spec.alternate = true,
            _ => break,
        }
        *i += 1;
    }

    let width_start = *i;
    spec.width = read_number(chars, i);
    if *i > width_start && spec.width.is_none_or(|w| w > MAX_WIDTH) {
        return None;
    }

    if chars.get(*i) == Some(&'.') {
        *i += 1;
        spec.precision = Some(read_number(chars, i).filter(|p| *p <= MAX_WIDTH)?);
    }

    spec.conversion = *chars.get(*i)?;
    *i += 1;
    Some(spec)
}

fn convert(spec: &Spec, arg: &Arg) -> Result<String, FormatError> {
    let illegal = || FormatError::IllegalConversion {
        conversion: spec.conversion,
        kind: arg.kind(),
    };

    let body = match spec.conversion {
        's' | 'S' => {
            let mut s = arg.to_string();
            if let Some(p) = spec.precision {
                s = s.chars().take(p).collect();
            }
            if spec.conversion == 'S' {
                s = s.to_uppercase();
            }
            s
        }
        'd' => {
            let (negative, digits) = match arg {
                Arg::Int(v) => (*v < 0, v.unsigned_abs().to_string()),
                Arg::UInt(v) => (false, v.to_string()),
                _ => return Err(illegal()),
            };
            let digits = if spec.group { group(&digits) } else { digits };
            signed(spec, negative, &digits)
        }
        'x' | 'X' | 'o' => {
            let raw = match (arg, spec.conversion) {
                (Arg::Int(v), 'o') => format!("{v:o}"),
                (Arg::UInt(v), 'o') => format!("{v:o}"),
                (Arg::Int(v), _) => format!("{v:x}"),
                (Arg::UInt(v), _) => format!("{v:x}"),
                _ => return Err(illegal()),
            };
            let prefix = match (spec.alternate, spec.conversion) {
                (false, _) => "",
                (true, 'o') => "0",
                (true, _) => "0x",
            };
            let s = format!("{prefix}{raw}");
            if spec.conversion == 'X' {
                s.to_uppercase()
            } else {
                s
            }
        }
        'f' | 'e' | 'E' => {
            let Arg::Float(v) = arg else {
                return Err(illegal());
            };
            let precision = spec.precision.unwrap_or(6);
            let magnitude = v.abs();
            let digits = if spec.conversion == 'f' {
                format!("{magnitude:.precision$}")
            } else {
                scientific(magnitude, precision)
            };
            let digits = if spec.conversion == 'E' {
                digits.to_uppercase()
            } else {
                digits
            };
            signed(spec, *v < 0.0, &digits)
        }
        'b' | 'B' => {
            let s = match arg {
                Arg::Bool(v) => v.to_string(),
                _ => "true".to_string(),
            };
            if spec.conversion == 'B' {
                s.to_uppercase()
            } else {
                s
            }
        }
        'c' | 'C' => {
            let c = match arg {
                Arg::Char(c) => *c,
                Arg::Int(v) => u32::try_from(*v)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(illegal)?,
                Arg::UInt(v) => u32::try_from(*v)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(illegal)?,
                _ => return Err(illegal()),
            };
            if spec.conversion == 'C' {
                c.to_uppercase().collect()
            } else {
                c.to_string()
            }
        }
        other => return Err(FormatError::UnknownConversion(other)),
    };

    Ok(body)
}

fn signed(spec: &Spec, negative: bool, digits: &str) -> String {
    let sign = if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };
    format!("{sign}{digits}")
}

/// `1.5e3` style output with a signed two-digit exponent: `1.500000e+03`.
fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

fn group(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn pad(spec: &Spec, body: String) -> String {
    let Some(width) = spec.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let fill = width - len;

    if spec.left {
        return format!("{body}{}", " ".repeat(fill));
    }

    let numeric = matches!(spec.conversion, 'd' | 'x' | 'X' | 'o' | 'f' | 'e' | 'E');
    if spec.zero && numeric {
        let sign_len = body
            .chars()
            .next()
            .filter(|c| matches!(c, '-' | '+' | ' '))
            .map_or(0, char::len_utf8);
        let (sign, rest) = body.split_at(sign_len);
        return format!("{sign}{}{rest}", "0".repeat(fill));
    }

    format!("{}{body}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_substitution() {
        let out = format("hello %s, you are %d", &["world".into(), 42.into()]).unwrap();
        assert_eq!(out, "hello world, you are 42");
    }

    #[test]
    fn width_precision_and_flags() {
        assert_eq!(format("[%5s]", &["ab".into()]).unwrap(), "[   ab]");
        assert_eq!(format("[%-5s]", &["ab".into()]).unwrap(), "[ab   ]");
        assert_eq!(format("%05d", &[(-42).into()]).unwrap(), "-0042");
        assert_eq!(format("%+d", &[7.into()]).unwrap(), "+7");
        assert_eq!(format("%.2f", &[1.23456.into()]).unwrap(), "1.23");
        assert_eq!(format("%,d", &[1_234_567.into()]).unwrap(), "1,234,567");
        assert_eq!(format("%.3s", &["abcdef".into()]).unwrap(), "abc");
    }

    #[test]
    fn hex_octal_and_scientific() {
        assert_eq!(format("%x", &[255.into()]).unwrap(), "ff");
        assert_eq!(format("%#X", &[255.into()]).unwrap(), "0XFF");
        assert_eq!(format("%o", &[8.into()]).unwrap(), "10");
        assert_eq!(format("%e", &[1500.0.into()]).unwrap(), "1.500000e+03");
        assert_eq!(format("%.1e", &[0.05.into()]).unwrap(), "5.0e-02");
    }

    #[test]
    fn literal_percent_and_newline() {
        assert_eq!(format("100%% done%n", &[]).unwrap(), "100% done\n");
    }

    #[test]
    fn explicit_indices() {
        let out = format("%2$s %1$s", &["a".into(), "b".into()]).unwrap();
        assert_eq!(out, "b a");
    }

    #[test]
    fn bool_and_char() {
        assert_eq!(format("%b %b", &[false.into(), "x".into()]).unwrap(), "false true");
        assert_eq!(format("%c%C", &['a'.into(), 'b'.into()]).unwrap(), "aB");
        assert_eq!(format("%c", &[65.into()]).unwrap(), "A");
    }

    #[test]
    fn oversized_width_and_precision_are_malformed() {
        assert_eq!(
            format("%4000000000s", &["x".into()]),
            Err(FormatError::Malformed(0))
        );
        assert_eq!(
            format("a %99999999999999999999999d", &[1.into()]),
            Err(FormatError::Malformed(2))
        );
        assert_eq!(
            format("%.100000f", &[1.5.into()]),
            Err(FormatError::Malformed(0))
        );
        let widest = format!("%{MAX_WIDTH}s");
        assert_eq!(format(&widest, &["x".into()]).unwrap().len(), MAX_WIDTH);
    }

    #[test]
    fn missing_argument() {
        assert_eq!(
            format("%s and %s", &["one".into()]),
            Err(FormatError::MissingArgument(2))
        );
    }

    #[test]
    fn unused_arguments() {
        assert_eq!(
            format("just %s", &["one".into(), "two".into()]),
            Err(FormatError::UnusedArguments(1))
        );
    }

    #[test]
    fn illegal_conversion() {
        assert!(matches!(
            format("%d", &["nope".into()]),
            Err(FormatError::IllegalConversion { conversion: 'd', .. })
        ));
    }

    #[test]
    fn unknown_and_dangling() {
        assert_eq!(
            format("%q", &["x".into()]),
            Err(FormatError::UnknownConversion('q'))
        );
        assert_eq!(format("50%", &[]), Err(FormatError::Malformed(2)));
    }
}
