use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::traits::{FloatScalar, Scalar};

use super::Vector;

/// Longest prefix of `s` that parses as a number, with the byte length
/// consumed. The candidate run stops at the first character that can
/// never appear in a numeric literal.
fn parse_leading_number<T: FromStr>(s: &str) -> Option<(T, usize)> {
    let run = s
        .find(|c: char| !(c.is_ascii_digit() || "+-.eE".contains(c)))
        .unwrap_or(s.len());
    let mut end = run;
    while end > 0 {
        if let Ok(v) = s[..end].parse::<T>() {
            return Some((v, end));
        }
        end -= 1;
    }
    None
}

impl<T: Scalar + FromStr> Vector<T> {
    /// Lenient parse of a textual numeric representation.
    ///
    /// Numbers may be separated by commas, whitespace, or newlines;
    /// anything unparseable is skipped one character at a time rather
    /// than failing hard. A deliberate leniency: the rendered
    /// diagnostic format (and hand-typed input) round-trips without
    /// ceremony, at the cost of never reporting malformed input.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::<f64>::from_text("( 1.0, -2.5e1 ; x 3 )");
    /// assert_eq!(v.as_slice(), &[1.0, -25.0, 3.0]);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut data = Vec::new();
        let mut i = 0;
        while i < text.len() {
            let rest = &text[i..];
            match parse_leading_number::<T>(rest) {
                Some((v, consumed)) => {
                    data.push(v);
                    i += consumed;
                }
                None => {
                    i += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        Self { data }
    }
}

impl<T: Scalar + FromStr> FromStr for Vector<T> {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_text(s))
    }
}

// Diagnostic rendering: sign marker then `%.2e`-style magnitude per
// element. Not a lossless round-trip (precision is truncated).
impl<T: FloatScalar + fmt::LowerExp> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for &x in &self.data {
            let sign = if x >= T::zero() { "  " } else { " -" };
            write!(f, "{}{:.2e}", sign, x.abs())?;
        }
        write!(f, "  )")
    }
}
