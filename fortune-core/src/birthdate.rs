//! Birthdate input parsing.

use crate::error::{FortuneError, Result};
use crate::zodiac::{self, MonthDay, ZodiacSign};

/// Parse `YYYY-MM-DD` into the month/day that decides the sign.
///
/// Only ranges are checked (month 1-12, day 1-31); `2001-02-30` is accepted.
pub fn parse_birthdate(input: &str) -> Result<MonthDay> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FortuneError::MissingBirthdate);
    }

    let segments: Vec<&str> = input.split('-').collect();
    if segments.len() != 3 {
        return Err(FortuneError::InvalidBirthdate(input.to_string()));
    }

    let mut numbers = [0i64; 3];
    for (slot, segment) in numbers.iter_mut().zip(&segments) {
        *slot = segment
            .trim()
            .parse::<i64>()
            .map_err(|_| FortuneError::InvalidBirthdate(input.to_string()))?;
    }

    let [_, month, day] = numbers;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(FortuneError::InvalidBirthdate(input.to_string()));
    }

    Ok(MonthDay::new(month as u32, day as u32))
}

/// Parse a birthdate and resolve its sign in one step.
pub fn sign_for_birthdate(input: &str) -> Result<&'static ZodiacSign> {
    let date = parse_birthdate(input)?;
    zodiac::find_zodiac(date.month, date.day)
        .ok_or_else(|| FortuneError::UnknownSign(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_birthdate("1990-04-20").unwrap(), MonthDay::new(4, 20));
        assert_eq!(parse_birthdate(" 2001-02-30 ").unwrap(), MonthDay::new(2, 30));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_birthdate("   "), Err(FortuneError::MissingBirthdate));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["1990/04/20", "1990-04", "1990-xx-01", "1990-13-01", "1990-00-10", "1990-01-32"] {
            assert!(
                matches!(parse_birthdate(bad), Err(FortuneError::InvalidBirthdate(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn resolves_sign_from_text() {
        assert_eq!(sign_for_birthdate("1985-12-25").unwrap().english_key, "Capricorn");
    }
}
