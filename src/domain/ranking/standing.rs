use crate::domain::fixture::Match;
use crate::domain::team::{GroupNumber, Team};
use serde::Serialize;
use std::collections::BTreeMap;

/// Derived per-team totals for one ranking computation
///
/// Never stored; rebuilt from scratch on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub team_name: String,
    pub match_points: u32,
    /// Summed over every match; wider than a single match's goal count
    pub goals_scored: u64,
    pub alternate_points: u32,
    /// Registration date in the form it was entered
    pub registration_date: String,
    pub group_number: GroupNumber,
}

impl Standing {
    /// Zeroed standing for a team that has not played yet
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_name: team.name().to_string(),
            match_points: 0,
            goals_scored: 0,
            alternate_points: 0,
            registration_date: team.registration_date().to_string(),
            group_number: team.group(),
        }
    }
}

/// Output of [`compute_rankings`](super::compute_rankings)
///
/// Both groups are always present, empty when no team is registered there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rankings {
    pub standings_by_group: BTreeMap<GroupNumber, Vec<Standing>>,
    /// Group 1 entries followed by group 2 entries, each already sorted
    pub combined_standings: Vec<Standing>,
    pub matches: Vec<Match>,
    pub top4: BTreeMap<GroupNumber, Vec<String>>,
}

impl Rankings {
    /// Sorted standings of one group
    pub fn group(&self, group: GroupNumber) -> &[Standing] {
        self.standings_by_group
            .get(&group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Names of the teams advancing from one group
    pub fn qualifiers(&self, group: GroupNumber) -> &[String] {
        self.top4.get(&group).map(Vec::as_slice).unwrap_or_default()
    }
}
