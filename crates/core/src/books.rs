//! Book validation constants and functions, including ISBN checksums.

/// Maximum length of a book title in characters.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Maximum length of a genre label in characters.
pub const MAX_GENRE_LENGTH: usize = 100;

/// Validate a book title.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a genre label.
pub fn validate_genre(genre: &str) -> Result<(), String> {
    if genre.chars().count() > MAX_GENRE_LENGTH {
        return Err(format!(
            "genre exceeds maximum length of {MAX_GENRE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an ISBN-10 or ISBN-13, tolerating hyphen and space separators.
pub fn validate_isbn(isbn: &str) -> Result<(), String> {
    let chars: Vec<char> = isbn.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    let valid = match chars.len() {
        10 => is_valid_isbn10(&chars),
        13 => is_valid_isbn13(&chars),
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(format!("'{isbn}' is not a valid ISBN-10 or ISBN-13"))
    }
}

/// ISBN-10 checksum: sum of digit * (10 - position) must be divisible by 11.
/// The final position may be 'X', standing for the value 10.
fn is_valid_isbn10(chars: &[char]) -> bool {
    let mut sum = 0u32;
    for (i, &c) in chars.iter().enumerate() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'X' | 'x' if i == 9 => 10,
            _ => return false,
        };
        sum += value * (10 - i as u32);
    }
    sum % 11 == 0
}

/// ISBN-13 checksum: digits weighted 1, 3 alternating must sum to a
/// multiple of 10.
fn is_valid_isbn13(chars: &[char]) -> bool {
    let mut sum = 0u32;
    for (i, &c) in chars.iter().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { digit } else { 3 * digit };
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_isbn13_with_hyphens() {
        assert!(validate_isbn("978-1-4028-9462-6").is_ok());
    }

    #[test]
    fn accepts_valid_isbn13_without_separators() {
        assert!(validate_isbn("9780451524935").is_ok());
    }

    #[test]
    fn accepts_valid_isbn10() {
        assert!(validate_isbn("0-306-40615-2").is_ok());
    }

    #[test]
    fn accepts_isbn10_with_check_character_x() {
        // 043942089X ("The Amber Spyglass"), checksum value 10.
        assert!(validate_isbn("0-439-42089-X").is_ok());
    }

    #[test]
    fn rejects_isbn13_with_bad_checksum() {
        assert!(validate_isbn("978-1-4028-9462-7").is_err());
    }

    #[test]
    fn rejects_isbn10_with_bad_checksum() {
        assert!(validate_isbn("0-306-40615-3").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(validate_isbn("12345").is_err());
        assert!(validate_isbn("").is_err());
    }

    #[test]
    fn rejects_non_digit_characters() {
        assert!(validate_isbn("97814028946ab").is_err());
    }

    #[test]
    fn rejects_x_anywhere_but_last_position() {
        assert!(validate_isbn("0X3942089X").is_err());
    }

    #[test]
    fn title_must_be_non_empty() {
        assert!(validate_title("").is_err());
        assert!(validate_title("  ").is_err());
        assert!(validate_title("Nineteen Eighty-Four").is_ok());
    }

    #[test]
    fn genre_length_is_bounded() {
        assert!(validate_genre("Dystopian fiction").is_ok());
        assert!(validate_genre(&"g".repeat(MAX_GENRE_LENGTH + 1)).is_err());
    }
}
