//! Money and number presentation in the es-CO locale (Colombian pesos)

const NBSP: char = '\u{a0}';
const INFINITY_GLYPH: &str = "∞";

/// Format an amount as whole Colombian pesos, e.g. `$ 2.446.000`
///
/// Rounds half away from zero and drops the fraction. The space after the
/// symbol is a no-break space. A negative amount keeps its sign even when it
/// rounds to zero (`-$ 0`).
pub fn currency(value: f64) -> String {
    if value.is_nan() {
        return format!("${NBSP}NaN");
    }
    let rounded = value.round();
    let magnitude = if rounded.is_infinite() {
        INFINITY_GLYPH.to_string()
    } else {
        group_thousands(&format!("{:.0}", rounded.abs()))
    };

    if value.is_sign_negative() {
        format!("-${NBSP}{magnitude}")
    } else {
        format!("${NBSP}{magnitude}")
    }
}

/// Plain es-CO number: `.` for thousands, `,` for decimals, at most three
/// fraction digits
pub fn number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return signed(value < 0.0, INFINITY_GLYPH);
    }

    let fixed = to_fixed(value.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let mut body = group_thousands(int_part);
    if !frac_part.is_empty() {
        body.push(',');
        body.push_str(frac_part);
    }

    signed(value.is_sign_negative(), &body)
}

/// One decimal place with a `.` separator, as shown next to margins and
/// ROI months
pub fn fixed1(value: f64) -> String {
    if value.is_infinite() {
        return signed(value < 0.0, INFINITY_GLYPH);
    }
    to_fixed(value, 1)
}

/// `digits` decimals of the exact binary value, with exact ties rounded away
/// from zero (`1.25` -> `1.3`) where `{:.N}` would round them to even
fn to_fixed(value: f64, digits: i32) -> String {
    let width = digits as usize;
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    let exact = value.mul_add(factor, -scaled) == 0.0;
    if exact && (scaled - scaled.trunc()).abs() == 0.5 {
        let units = scaled.trunc() + scaled.signum();
        return format!("{:.*}", width, units / factor);
    }
    format!("{:.*}", width, value)
}

fn signed(negative: bool, body: &str) -> String {
    if negative {
        format!("-{body}")
    } else {
        body.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
