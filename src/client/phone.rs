use crate::utils::validation::phone_digits;

pub const PHONE_DIGITS: usize = 10;

/// Re-renders raw phone input as `(XXX) XXX-XXXX`, punctuation appearing
/// only once enough digits exist. Extra digits past ten are dropped.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = phone_digits(raw).chars().take(PHONE_DIGITS).collect();

    let mut formatted = String::with_capacity(14);
    if digits.is_empty() {
        return formatted;
    }

    let (area, rest) = digits.split_at(digits.len().min(3));
    formatted.push('(');
    formatted.push_str(area);

    if !rest.is_empty() {
        let (exchange, line) = rest.split_at(rest.len().min(3));
        formatted.push_str(") ");
        formatted.push_str(exchange);

        if !line.is_empty() {
            formatted.push('-');
            formatted.push_str(line);
        }
    }

    formatted
}
