//! Birthdate estimation from a stated age.

use chrono::{Days, Months, NaiveDate};

use crate::{AgeError, AgeResult};

/// Estimate a birthdate from an age such as `30y`, `6m`, `4w` or `10d`.
///
/// The unit suffix is case-insensitive. Years and months step back whole calendar months,
/// clamping to the end of shorter months (`2y` before 2024-02-29 is 2022-02-28).
pub fn birthdate_from_age(text: &str, today: NaiveDate) -> AgeResult<NaiveDate> {
    let text = text.trim();
    let mut chars = text.chars();
    let unit = chars.next_back().ok_or(AgeError::Empty)?;
    let amount: u32 = chars
        .as_str()
        .parse()
        .map_err(|_| AgeError::InvalidNumber(text.to_owned()))?;

    let birthdate = match unit.to_ascii_lowercase() {
        'y' => amount
            .checked_mul(12)
            .and_then(|months| today.checked_sub_months(Months::new(months))),
        'm' => today.checked_sub_months(Months::new(amount)),
        'w' => today.checked_sub_days(Days::new(u64::from(amount) * 7)),
        'd' => today.checked_sub_days(Days::new(u64::from(amount))),
        other => return Err(AgeError::UnknownUnit(other)),
    };

    birthdate.ok_or_else(|| AgeError::OutOfRange(text.to_owned()))
}
