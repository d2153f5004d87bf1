/// Number formatting for money cells and summary cards.

/// Group digits with thin spaces: 1234567 -> "1 234 567".
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Rupee amount; fractional paise are dropped for display.
pub fn format_rupees(amount: f64) -> String {
    format!("₹{}", format_thousands(amount as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_thousands(-1500), "-1\u{00a0}500");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(185000.0), "₹185\u{00a0}000");
        assert_eq!(format_rupees(999.9), "₹999");
    }
}
