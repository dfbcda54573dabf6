//! Number formatting for tables and cards

/// Formats a number with a space every three integer digits
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a money value with 2 decimals and thousands separators
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Money value with the currency symbol, e.g. `R$ 1 234.50`
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", format_money(value))
}

/// Formats an integer count with thousands separators
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}
