use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Maximum number of teams a single group may hold
pub const MAX_TEAMS_PER_GROUP: usize = 6;

/// Errors raised while validating team value objects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("Invalid date format '{0}'. Expected DD/MM.")]
    MalformedDate(String),

    #[error("Group number must be 1 or 2, got {0}.")]
    InvalidGroup(i64),
}

/// One of the two disjoint pools of teams
///
/// Serialized as its plain number so it can key JSON objects (`{"1": [...]}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum GroupNumber {
    One,
    Two,
}

impl GroupNumber {
    /// Both groups in ranking/display order
    pub const ALL: [GroupNumber; 2] = [GroupNumber::One, GroupNumber::Two];

    pub fn as_u8(self) -> u8 {
        match self {
            GroupNumber::One => 1,
            GroupNumber::Two => 2,
        }
    }
}

impl TryFrom<i64> for GroupNumber {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GroupNumber::One),
            2 => Ok(GroupNumber::Two),
            other => Err(ValueError::InvalidGroup(other)),
        }
    }
}

impl From<GroupNumber> for u8 {
    fn from(group: GroupNumber) -> Self {
        group.as_u8()
    }
}

impl fmt::Display for GroupNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Calendar day-and-month a team registered on, without a year
///
/// Keeps the text it was parsed from so it can be echoed back untouched.
/// Ordering is chronological within a year (month first, then day); the
/// raw text never takes part in comparisons.
///
/// # Example
/// ```
/// use championship_api::domain::team::RegistrationDate;
///
/// let early = RegistrationDate::parse("9/1").unwrap();
/// let late = RegistrationDate::parse("10/02").unwrap();
/// assert!(early < late);
/// assert_eq!(late.as_str(), "10/02");
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationDate {
    raw: String,
    month: u32,
    day: u32,
}

impl RegistrationDate {
    /// Parses `DD/MM` (one or two digits per field)
    ///
    /// The day must exist in the month; 29/02 is accepted since no year
    /// is attached.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        let malformed = || ValueError::MalformedDate(input.to_string());

        let (day, month) = input.split_once('/').ok_or_else(malformed)?;
        let day = parse_field(day).ok_or_else(malformed)?;
        let month = parse_field(month).ok_or_else(malformed)?;

        // 2000 is a leap year, so every real day/month pair resolves
        NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(malformed)?;

        Ok(Self {
            raw: input.to_string(),
            month,
            day,
        })
    }

    /// Returns the original text form
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Comparable `(month, day)` key
    pub fn sort_key(&self) -> (u32, u32) {
        (self.month, self.day)
    }
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl PartialEq for RegistrationDate {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for RegistrationDate {}

impl PartialOrd for RegistrationDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RegistrationDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for RegistrationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_digit_fields() {
        let date = RegistrationDate::parse("17/03").unwrap();
        assert_eq!(date.day(), 17);
        assert_eq!(date.month(), 3);
        assert_eq!(date.as_str(), "17/03");
    }

    #[test]
    fn parses_single_digit_fields() {
        let date = RegistrationDate::parse("9/1").unwrap();
        assert_eq!(date.sort_key(), (1, 9));
    }

    #[test]
    fn accepts_leap_day() {
        assert!(RegistrationDate::parse("29/02").is_ok());
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(RegistrationDate::parse("31/04").is_err());
        assert!(RegistrationDate::parse("30/02").is_err());
        assert!(RegistrationDate::parse("00/01").is_err());
        assert!(RegistrationDate::parse("01/13").is_err());
    }

    #[test]
    fn rejects_malformed_text() {
        for input in ["", "0101", "01-01", "1/1/2024", "a/01", " 1/01", "+1/01", "001/01"] {
            assert_eq!(
                RegistrationDate::parse(input),
                Err(ValueError::MalformedDate(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn orders_by_month_then_day() {
        let jan_9 = RegistrationDate::parse("9/1").unwrap();
        let feb_10 = RegistrationDate::parse("10/02").unwrap();
        let jan_31 = RegistrationDate::parse("31/01").unwrap();

        // Lexically "9/1" > "10/02", chronologically it is earlier
        assert!(jan_9 < feb_10);
        assert!(jan_9 < jan_31);
        assert!(jan_31 < feb_10);
    }

    #[test]
    fn equal_dates_ignore_padding() {
        assert_eq!(
            RegistrationDate::parse("01/02").unwrap(),
            RegistrationDate::parse("1/2").unwrap()
        );
    }

    #[test]
    fn group_number_conversion() {
        assert_eq!(GroupNumber::try_from(1), Ok(GroupNumber::One));
        assert_eq!(GroupNumber::try_from(2), Ok(GroupNumber::Two));
        assert_eq!(GroupNumber::try_from(3), Err(ValueError::InvalidGroup(3)));
        assert_eq!(GroupNumber::try_from(0), Err(ValueError::InvalidGroup(0)));
    }

    #[test]
    fn group_number_serializes_as_number() {
        assert_eq!(serde_json::to_string(&GroupNumber::Two).unwrap(), "2");
        let group: GroupNumber = serde_json::from_str("1").unwrap();
        assert_eq!(group, GroupNumber::One);
        assert!(serde_json::from_str::<GroupNumber>("7").is_err());
    }
}
