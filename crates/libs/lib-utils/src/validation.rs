//! # Validation Utilities
//!
//! Input validation helpers for decimal amount fields.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Strip everything from an amount field that cannot be part of a plain decimal.
///
/// Keeps ASCII digits and the first `.`; a leading `.` gains a `0`. Mirrors
/// what a numeric HTML input would let through.
pub fn sanitize_amount_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_dot = false;
    for ch in raw.trim().chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' | ',' if !seen_dot => {
                seen_dot = true;
                if out.is_empty() {
                    out.push('0');
                }
                out.push('.');
            }
            _ => {}
        }
    }
    out
}

/// Validate that an amount field holds a plain, non-negative decimal with at
/// most `max_decimals` fraction digits.
pub fn validate_amount_input(value: &str, max_decimals: usize) -> Result<(), String> {
    let value = value.trim();
    validate_not_empty(value, "Amount")?;

    let (int_part, frac_part) = value.split_once('.').unwrap_or((value, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err("Amount must contain digits".to_string());
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err("Amount must be a plain decimal number".to_string());
    }
    if frac_part.len() > max_decimals {
        return Err(format!("Amount supports at most {} decimals", max_decimals));
    }
    Ok(())
}
