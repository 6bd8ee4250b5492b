use super::events::TeamEvent;
use super::value_objects::{GroupNumber, RegistrationDate, ValueError};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by Team invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot start or end with whitespace: '{0}'")]
    SurroundingWhitespace(String),

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Team aggregate root
///
/// A team registered for the championship. The name is the natural key
/// and is what matches reference.
///
/// # Invariants
/// - Name is non-blank with no leading or trailing whitespace
/// - Registration date parses as DD/MM
/// - Group number is 1 or 2
///
/// Group capacity and name uniqueness span several records and are
/// enforced by the championship service.
///
/// # Example
/// ```
/// use championship_api::domain::team::{GroupNumber, Team};
///
/// let (team, event) = Team::new("Lions", "04/07", 1).expect("valid team");
///
/// assert_eq!(team.name(), "Lions");
/// assert_eq!(team.group(), GroupNumber::One);
/// assert_eq!(event.team_name(), "Lions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    name: String,
    registration_date: String,
    #[serde(rename = "group_number")]
    group: GroupNumber,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Returns
    /// * `Ok((Team, TeamEvent))` - New team and its registration event
    /// * `Err(TeamError)` - If any field is invalid
    pub fn new(
        name: impl Into<String>,
        registration_date: &str,
        group_number: i64,
    ) -> Result<(Self, TeamEvent), TeamError> {
        let (name, date, group) = validate_fields(name.into(), registration_date, group_number)?;

        let team = Self {
            name,
            registration_date: date.as_str().to_string(),
            group,
        };

        let event = TeamEvent::Registered {
            name: team.name.clone(),
            registration_date: team.registration_date.clone(),
            group: team.group,
        };

        Ok((team, event))
    }

    /// Replaces every field of the team
    ///
    /// Validation happens before anything changes, so a failed update
    /// leaves the team untouched.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        registration_date: &str,
        group_number: i64,
    ) -> Result<TeamEvent, TeamError> {
        let (name, date, group) = validate_fields(name.into(), registration_date, group_number)?;
        let previous_name = std::mem::replace(&mut self.name, name);
        self.registration_date = date.as_str().to_string();
        self.group = group;

        Ok(TeamEvent::Updated {
            previous_name,
            name: self.name.clone(),
            registration_date: self.registration_date.clone(),
            group: self.group,
        })
    }

    // ===== Getters =====

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registration date as it was entered
    pub fn registration_date(&self) -> &str {
        &self.registration_date
    }

    /// Returns the team's group
    pub fn group(&self) -> GroupNumber {
        self.group
    }

    /// Parses the stored registration date into its comparable form
    pub fn parsed_registration_date(&self) -> Result<RegistrationDate, ValueError> {
        RegistrationDate::parse(&self.registration_date)
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Skips validation; the ranking engine re-parses the date and
    /// reports stored garbage instead of guessing.
    pub fn from_persistence(name: String, registration_date: String, group: GroupNumber) -> Self {
        Self {
            name,
            registration_date,
            group,
        }
    }
}

fn validate_fields(
    name: String,
    registration_date: &str,
    group_number: i64,
) -> Result<(String, RegistrationDate, GroupNumber), TeamError> {
    if name.trim().is_empty() {
        return Err(TeamError::EmptyName);
    }
    if name.trim() != name {
        return Err(TeamError::SurroundingWhitespace(name));
    }

    let date = RegistrationDate::parse(registration_date)?;
    let group = GroupNumber::try_from(group_number)?;

    Ok((name, date, group))
}
