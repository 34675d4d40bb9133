//! Indian-system currency display.
//!
//! Rupee amounts group the last three digits, then pairs: Rs. 12,34,567.

use rust_decimal::Decimal;

/// Format whole rupees with the Rs. prefix: `Rs. 1,00,000`.
pub fn format_rupees(amount: i64) -> String {
    format!("Rs. {}", group_indian(amount))
}

/// Group digits in the Indian lakh/crore system, no prefix.
pub fn group_indian(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };
    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut i = head_bytes.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(&head[start..i]);
        i = start;
    }
    groups.reverse();
    format!("{}{},{}", sign, groups.join(","), tail)
}

/// Render an amount in word form: "1.50 crore", "5 lakh", "1.5 thousand".
pub fn format_in_words(amount: i64) -> String {
    if amount >= 1_00_00_000 {
        scaled(amount, 1_00_00_000, "crore", 2)
    } else if amount >= 1_00_000 {
        scaled(amount, 1_00_000, "lakh", 2)
    } else if amount >= 1_000 {
        scaled(amount, 1_000, "thousand", 1)
    } else {
        group_indian(amount)
    }
}

fn scaled(amount: i64, unit: i64, word: &str, places: usize) -> String {
    if amount % unit == 0 {
        format!("{} {}", amount / unit, word)
    } else {
        let quotient = Decimal::from(amount) / Decimal::from(unit);
        format!("{:.*} {}", places, quotient, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_lakh_system() {
        assert_eq!(group_indian(100), "100");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(1_00_000), "1,00,000");
        assert_eq!(group_indian(12_34_567), "12,34,567");
        assert_eq!(group_indian(10_00_00_000), "10,00,00,000");
        assert_eq!(group_indian(-50_000), "-50,000");
    }

    #[test]
    fn rupee_prefix() {
        assert_eq!(format_rupees(2_47_125), "Rs. 2,47,125");
        assert_eq!(format_rupees(0), "Rs. 0");
    }

    #[test]
    fn word_form() {
        assert_eq!(format_in_words(5_00_00_000), "5 crore");
        assert_eq!(format_in_words(1_50_00_000), "1.50 crore");
        assert_eq!(format_in_words(2_00_000), "2 lakh");
        assert_eq!(format_in_words(2_50_000), "2.50 lakh");
        assert_eq!(format_in_words(1_500), "1.5 thousand");
        assert_eq!(format_in_words(999), "999");
    }
}
