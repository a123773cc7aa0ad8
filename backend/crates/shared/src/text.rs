//! Text rules shared by every bounded context
//!
//! Lengths are counted in Unicode code points, never bytes, and the
//! "letters and numbers only" rule covers the full Unicode `L` and `N`
//! categories so that `пользователь1` is as valid as `user1`.

use std::sync::LazyLock;

use regex::Regex;

static LETTERS_AND_NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("Invalid regex"));

/// コードポイント数
#[inline]
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// 文字と数字のみで構成されているか（空文字列は `false`）
pub fn is_letters_and_numbers(value: &str) -> bool {
    LETTERS_AND_NUMBERS.is_match(value)
}

/// Result of comparing a length with an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCheck {
    TooShort,
    TooLong,
    Ok,
}

/// `value` のコードポイント数を `[min, max]` と比較
pub fn check_length(value: &str, min: usize, max: usize) -> LengthCheck {
    let len = char_count(value);
    if len < min {
        LengthCheck::TooShort
    } else if len > max {
        LengthCheck::TooLong
    } else {
        LengthCheck::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_counts_code_points() {
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("日本語"), 3);
        assert_eq!("日本語".len(), 9);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn test_letters_and_numbers() {
        assert!(is_letters_and_numbers("user1"));
        assert!(is_letters_and_numbers("Пользователь2"));
        assert!(is_letters_and_numbers("ユーザー３"));
        assert!(is_letters_and_numbers("٣٤٥"));

        assert!(!is_letters_and_numbers(""));
        assert!(!is_letters_and_numbers("user 1"));
        assert!(!is_letters_and_numbers("user_1"));
        assert!(!is_letters_and_numbers("user-1"));
        assert!(!is_letters_and_numbers("user!"));
        assert!(!is_letters_and_numbers("emoji😀"));
        assert!(!is_letters_and_numbers("tab\t"));
    }

    #[test]
    fn test_check_length_bounds_are_inclusive() {
        assert_eq!(check_length("ab", 3, 5), LengthCheck::TooShort);
        assert_eq!(check_length("abc", 3, 5), LengthCheck::Ok);
        assert_eq!(check_length("abcde", 3, 5), LengthCheck::Ok);
        assert_eq!(check_length("abcdef", 3, 5), LengthCheck::TooLong);
        assert_eq!(check_length("日本語", 3, 3), LengthCheck::Ok);
    }
}
