//! Brazilian `DD/MM/AAAA` date handling.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use validator::ValidationError;

const BR_DATE_FORMAT: &str = "%d/%m/%Y";
const MINIMUM_AGE: i32 = 18;

/// Parses a `DD/MM/AAAA` date.
///
/// # Returns
/// - `Some(NaiveDate)` - Valid calendar date
/// - `None` - Wrong format or impossible date such as `31/02/2000`
pub fn parse_br_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BR_DATE_FORMAT).ok()
}

/// Formats a date as `DD/MM/AAAA`.
pub fn format_br_date(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

/// Formats the calendar day of a timestamp as `DD/MM/AAAA`.
pub fn format_br_datetime(date: DateTime<Utc>) -> String {
    format_br_date(date.date_naive())
}

/// Full years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validator hook for user birth dates: `DD/MM/AAAA` and at least 18 years old.
pub fn validate_adult_birth_date(value: &str) -> Result<(), ValidationError> {
    let Some(birth) = parse_br_date(value) else {
        return Err(ValidationError::new("birth_date_format")
            .with_message("Formato de data inválido. FORMATO {01/01/2001}.".into()));
    };

    if age_on(birth, Utc::now().date_naive()) < MINIMUM_AGE {
        return Err(ValidationError::new("birth_date_minimum_age")
            .with_message("Você deve ter 18 anos ou mais".into()));
    }

    Ok(())
}
