//! CSV delimiter detection.

/// Number of leading characters inspected.
pub const DELIMITER_SNIFF_LEN: usize = 2000;

/// Picks `;` or `,` as the field delimiter.
///
/// Counts both characters outside double-quoted fields in the first
/// [`DELIMITER_SNIFF_LEN`] characters. Semicolon wins only when strictly
/// more frequent.
///
/// # Examples
///
/// ```
/// use payroll_engine::import::detect_delimiter;
///
/// assert_eq!(detect_delimiter("name;salary;housing\nAli;3000;500"), b';');
/// assert_eq!(detect_delimiter("name,salary\nAli,3000"), b',');
/// assert_eq!(detect_delimiter("\"a;b;c\",x"), b',');
/// ```
pub fn detect_delimiter(text: &str) -> u8 {
    let mut in_quotes = false;
    let mut semicolons = 0usize;
    let mut commas = 0usize;

    for c in text.chars().take(DELIMITER_SNIFF_LEN) {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => semicolons += 1,
            ',' if !in_quotes => commas += 1,
            _ => {}
        }
    }

    if semicolons > commas { b';' } else { b',' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semicolons_outnumber_commas() {
        let sample = "a;b;c;d;e;f\n1;2;3,5;4;5,5\n6;7,5";
        assert_eq!(sample.matches(';').count(), 10);
        assert_eq!(sample.matches(',').count(), 3);
        assert_eq!(detect_delimiter(sample), b';');
    }

    #[test]
    fn test_tie_prefers_comma() {
        assert_eq!(detect_delimiter("a;b,c"), b',');
        assert_eq!(detect_delimiter(""), b',');
    }

    #[test]
    fn test_quoted_delimiters_ignored() {
        let sample = "\"x;y;z;w\",b,c";
        assert_eq!(detect_delimiter(sample), b',');
    }

    #[test]
    fn test_only_first_window_counted() {
        let mut sample = ",".repeat(DELIMITER_SNIFF_LEN);
        sample.push_str(&";".repeat(DELIMITER_SNIFF_LEN * 2));
        assert_eq!(detect_delimiter(&sample), b',');
    }
}
