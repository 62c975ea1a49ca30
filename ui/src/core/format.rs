//! Formatting helpers for presenting metrics.

pub fn format_currency(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let rendered = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let grouped = group_thousands(whole);
    if fraction.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction}")
    }
}

/// Small amounts keep enough precision to be non-zero on screen.
pub fn format_small_currency(value: f64) -> String {
    if value.abs() < 0.01 {
        format_currency(value, 4)
    } else {
        format_currency(value, 2)
    }
}

pub fn format_markup(value: f64) -> String {
    if value.is_finite() {
        format!("{}x", group_thousands(&format!("{:.0}", value)))
    } else {
        "—".into()
    }
}

pub fn format_integer(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let rounded = format!("{:.0}", value.abs());
    let sign = if value < -0.5 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&rounded))
}

pub fn format_grams(grams: f64) -> String {
    if grams >= 1.0 {
        format!("{grams:.1}g")
    } else {
        format!("{grams:.3}g")
    }
}

pub fn format_kg(value: f64) -> String {
    if value.abs() < 0.01 {
        format!("{value:.3} kg")
    } else {
        format!("{value:.2} kg")
    }
}

pub fn format_litres(value: f64) -> String {
    format!("{value:.1} L")
}

/// `value` is already a percentage (0..=100).
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "—".into()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234.5, 2), "$1,234.50");
        assert_eq!(format_currency(999.0, 0), "$999");
        assert_eq!(format_currency(-75000.0, 0), "-$75,000");
    }

    #[test]
    fn small_currency_keeps_precision() {
        assert_eq!(format_small_currency(0.0042), "$0.0042");
        assert_eq!(format_small_currency(2.5), "$2.50");
    }

    #[test]
    fn integers_and_markup() {
        assert_eq!(format_integer(2960.4), "2,960");
        assert_eq!(format_markup(228.6), "229x");
        assert_eq!(format_integer(f64::NAN), "—");
    }

    #[test]
    fn grams_switch_precision_below_one() {
        assert_eq!(format_grams(24.0), "24.0g");
        assert_eq!(format_grams(0.03), "0.030g");
    }
}
