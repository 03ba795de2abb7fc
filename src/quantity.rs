use log::debug;

/// Largest denominator used for fraction notation
pub const FRACTION_MAX_DENOMINATOR: u32 = 10;

/// Significant digits kept in decimal notation
pub const DECIMAL_PRECISION: i32 = 3;

/// Digits of the exact expansion inspected when rounding; enough to tell an
/// exact tie from a double that only sits close to one
const EXACT_DIGITS: usize = 30;

/// Whether rendered fragments may carry inline markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Fractions use `<sup>`/`<sub>` around a fraction slash (default)
    #[default]
    Markup,
    /// Fractions render as `n/d`
    PlainText,
}

/// Mixed or improper fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// Integer part, zero for improper fractions
    pub whole: i64,
    /// Numerator of the fractional part
    pub numerator: i64,
    /// Denominator of the fractional part
    pub denominator: i64,
}

impl Fraction {
    pub fn new(whole: i64, numerator: i64, denominator: i64) -> Self {
        Self {
            whole,
            numerator,
            denominator,
        }
    }
}

pub trait FractionConverter {
    /// Approximate `value` with a fraction whose denominator never exceeds
    /// `max_denominator`. With `simplify` the result is split into a whole
    /// part and a proper fraction.
    fn to_fraction(&self, value: f64, max_denominator: u32, simplify: bool) -> Fraction;
}

/// Mediant (Stern-Brocot) approximation
///
/// Walks the tree between `floor(value)` and `floor(value) + 1` and keeps the
/// lower bracketing fraction unless its denominator ran past the limit.
/// Values beyond the `i64` range saturate; the formatter never passes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediantFraction;

impl FractionConverter for MediantFraction {
    fn to_fraction(&self, value: f64, max_denominator: u32, simplify: bool) -> Fraction {
        let max = f64::from(max_denominator);
        let mut n1 = value.floor();
        let mut d1 = 1.0;
        let mut n2 = n1 + 1.0;
        let mut d2 = 1.0;

        if value != n1 {
            while d1 <= max && d2 <= max {
                let mediant = (n1 + n2) / (d1 + d2);
                if value == mediant {
                    if d1 + d2 <= max {
                        d1 += d2;
                        n1 += n2;
                        d2 = max + 1.0;
                    } else if d1 > d2 {
                        d2 = max + 1.0;
                    } else {
                        d1 = max + 1.0;
                    }
                    break;
                } else if value < mediant {
                    n2 += n1;
                    d2 += d1;
                } else {
                    n1 += n2;
                    d1 += d2;
                }
            }
        }

        if d1 > max {
            n1 = n2;
            d1 = d2;
        }

        let (numerator, denominator) = (n1 as i64, d1 as i64);
        if !simplify || denominator == 0 {
            return Fraction::new(0, numerator, denominator);
        }

        let whole = numerator.div_euclid(denominator);
        Fraction::new(whole, numerator - whole * denominator, denominator)
    }
}

/// Format `quantity * scale` for display using the default converter
pub fn format_quantity(
    quantity: Option<f64>,
    scale: f64,
    use_fraction: bool,
    mode: RenderMode,
) -> String {
    format_quantity_with(&MediantFraction, quantity, scale, use_fraction, mode)
}

/// Format `quantity * scale` in decimal or fraction notation
///
/// Returns an empty string when there is no quantity or the scaled value is
/// not finite. Scaled values too large for a whole number fall back to
/// decimal notation. Plain-text fractions separate `n/d` from the whole part
/// with one space and carry no leading space on their own (`3/4`, `< 1/10`).
/// The result is not sanitized and may contain fraction markup.
pub fn format_quantity_with(
    converter: &dyn FractionConverter,
    quantity: Option<f64>,
    scale: f64,
    use_fraction: bool,
    mode: RenderMode,
) -> String {
    let quantity = match quantity {
        Some(q) if q != 0.0 => q,
        _ => return String::new(),
    };
    let scaled = quantity * scale;
    if !scaled.is_finite() {
        return String::new();
    }

    if !use_fraction || scaled >= i64::MAX as f64 {
        return format_decimal(scaled);
    }

    let min_val = 1.0 / f64::from(FRACTION_MAX_DENOMINATOR);
    let under_min = !(scaled >= min_val);
    let fraction = if under_min {
        Fraction::new(0, 1, i64::from(FRACTION_MAX_DENOMINATOR))
    } else {
        converter.to_fraction(scaled, FRACTION_MAX_DENOMINATOR, true)
    };
    debug!("Formatting {} as fraction {:?}", scaled, fraction);

    let mut out = String::new();
    if fraction.whole > 0 {
        out.push_str(&fraction.whole.to_string());
    }
    if fraction.numerator > 0 {
        match mode {
            RenderMode::Markup => out.push_str(&format!(
                "<sup>{}</sup><span>&frasl;</span><sub>{}</sub>",
                fraction.numerator, fraction.denominator
            )),
            RenderMode::PlainText => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&format!("{}/{}", fraction.numerator, fraction.denominator));
            }
        }
    }

    if under_min {
        format!("< {out}")
    } else {
        out
    }
}

fn format_decimal(scaled: f64) -> String {
    let min_val = 1.0 / 10f64.powi(DECIMAL_PRECISION);
    if scaled >= min_val {
        round_significant(scaled, DECIMAL_PRECISION as usize).to_string()
    } else {
        format!("< {min_val}")
    }
}

/// Round a positive value to `digits` significant digits, ties away from zero
///
/// Works on the exact decimal expansion of the double so a stored value just
/// below a half step (1.045 is 1.04499...) rounds down.
fn round_significant(value: f64, digits: usize) -> f64 {
    let exact = format!("{:.*e}", EXACT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return value;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value;
    };

    let expansion: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let mut kept = expansion
        .iter()
        .take(digits)
        .fold(0u64, |acc, d| acc * 10 + u64::from(*d));
    if expansion.get(digits).is_some_and(|d| *d >= 5) {
        kept += 1;
    }

    format!("{kept}e{}", exponent - (digits as i32 - 1))
        .parse()
        .unwrap_or(value)
}
