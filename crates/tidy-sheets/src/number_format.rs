//! Number format literals and date format detection

/// Two decimals with thousands separators, negatives in parentheses, dash for zero
pub const ACCOUNTING_FORMAT: &str = "#,##0.00;(#,##0.00);-";

/// US-style short date
pub const DATE_FORMAT: &str = "mm/dd/yyyy";

/// Format code of a cell that was never formatted
pub const GENERAL_FORMAT: &str = "General";

/// Check if a format code displays a date or time
///
/// Quoted literals, escaped characters and bracketed sections such as
/// colors or locale tags are ignored; elapsed-time sections (`[h]`, `[mm]`)
/// count as time.
pub fn is_date_format(code: &str) -> bool {
    let code = code.trim();
    if code.is_empty() || code.eq_ignore_ascii_case(GENERAL_FORMAT) || code == "@" {
        return false;
    }

    let mut chars = code.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                for q in chars.by_ref() {
                    if q == '"' {
                        break;
                    }
                }
            }
            '[' => {
                let section: String = chars.by_ref().take_while(|&b| b != ']').collect();
                if !section.is_empty()
                    && section
                        .chars()
                        .all(|b| matches!(b.to_ascii_lowercase(), 'h' | 'm' | 's'))
                {
                    return true;
                }
            }
            // Escaped literal, padding and repeat markers consume the next char
            '\\' | '_' | '*' => {
                chars.next();
            }
            _ if matches!(c.to_ascii_lowercase(), 'd' | 'm' | 'y' | 'h' | 's') => return true,
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_literals() {
        assert!(!is_date_format(ACCOUNTING_FORMAT));
        assert!(is_date_format(DATE_FORMAT));
    }

    #[test]
    fn test_date_and_time_codes() {
        assert!(is_date_format("yyyy-mm-dd"));
        assert!(is_date_format("d-mmm-yy"));
        assert!(is_date_format("h:mm AM/PM"));
        assert!(is_date_format("[h]:mm:ss"));
        assert!(is_date_format("[$-409]dd/mm/yyyy"));
    }

    #[test]
    fn test_non_date_codes() {
        assert!(!is_date_format("General"));
        assert!(!is_date_format(""));
        assert!(!is_date_format("@"));
        assert!(!is_date_format("0.00E+00"));
        assert!(!is_date_format("#,##0;[Red](#,##0)"));
        assert!(!is_date_format("0.0 \"days\""));
        assert!(!is_date_format("0\\d"));
    }
}
