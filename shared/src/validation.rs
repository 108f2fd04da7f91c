//! Input validation functions
//!
//! Validation helpers for caller-supplied scheduling and 1RM input.
//! Used both directly and through the `validator` derive macros on the
//! request types.

use chrono::Weekday;
use validator::ValidationError;

/// Parse a caller-supplied weekday token ("monday", "mon", ...).
pub fn parse_weekday(token: &str) -> Option<Weekday> {
    match token.trim().to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Validator-compatible check that every preferred-day token parses.
pub fn validate_weekday_tokens(days: &[String]) -> Result<(), ValidationError> {
    for day in days {
        if parse_weekday(day).is_none() {
            let mut err = ValidationError::new("invalid_weekday");
            err.message = Some(format!("Unknown weekday token: {}", day).into());
            return Err(err);
        }
    }
    Ok(())
}

/// Validate a single 1RM value.
///
/// Zero is legal ("not yet established"); negative or non-finite values
/// are not.
pub fn validate_one_rm(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("1RM must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("1RM cannot be negative".to_string());
    }
    if value > 1000.0 {
        return Err("1RM unreasonably high".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("monday", Weekday::Mon)]
    #[case("Mon", Weekday::Mon)]
    #[case("THURSDAY", Weekday::Thu)]
    #[case(" sat ", Weekday::Sat)]
    fn parses_weekday_tokens(#[case] token: &str, #[case] expected: Weekday) {
        assert_eq!(parse_weekday(token), Some(expected));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(parse_weekday("someday"), None);
        assert!(validate_weekday_tokens(&["monday".into(), "someday".into()]).is_err());
        assert!(validate_weekday_tokens(&["monday".into(), "thursday".into()]).is_ok());
    }

    #[test]
    fn one_rm_bounds() {
        assert!(validate_one_rm(0.0).is_ok());
        assert!(validate_one_rm(180.0).is_ok());
        assert!(validate_one_rm(-1.0).is_err());
        assert!(validate_one_rm(f64::NAN).is_err());
        assert!(validate_one_rm(5000.0).is_err());
    }
}
