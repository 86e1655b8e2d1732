/// Formats with thousands separators and exactly two decimals, e.g. `1,234.50`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // Manual thousands formatting
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// Exchange rate caption value, four decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn amounts_always_have_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(format_amount(95.0), "95.00");
        assert_eq!(format_amount(51.025), "51.02");
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(306.088), "306.09");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-2960.88), "-2,960.88");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn non_finite_amounts_render_placeholder() {
        assert_eq!(format_amount(f64::NAN), "n/a");
        assert_eq!(format_amount(f64::INFINITY), "n/a");
    }

    #[test]
    fn rate_uses_four_decimals() {
        assert_eq!(format_rate(3.06088), "3.0609");
    }
}
