//! Standings computation
//!
//! Pure function from a snapshot of teams and matches to the ranked table.
//! No I/O, no logging, no shared state: the same input always yields the
//! same output, and invalid input always fails the same way.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use super::standing::{Rankings, Standing};
use crate::domain::fixture::{Match, MatchId, Outcome};
use crate::domain::team::{GroupNumber, RegistrationDate, Team};

/// Number of teams advancing from each group
pub const QUALIFIERS_PER_GROUP: usize = 4;

/// Points awarded for one match, from the fixture's point of view
struct Award {
    match_points: (u32, u32),
    alternate_points: (u32, u32),
}

impl Award {
    fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::TeamAWins => Award {
                match_points: (3, 0),
                alternate_points: (5, 1),
            },
            Outcome::TeamBWins => Award {
                match_points: (0, 3),
                alternate_points: (1, 5),
            },
            Outcome::Draw => Award {
                match_points: (1, 1),
                alternate_points: (3, 3),
            },
        }
    }
}

/// Invalid engine input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("Match {match_id} references unknown team '{team}'")]
    ReferentialIntegrity { match_id: MatchId, team: String },

    #[error("Team '{team}' has malformed registration date '{value}'")]
    MalformedDate { team: String, value: String },
}

struct Entry {
    standing: Standing,
    registered: RegistrationDate,
}

impl Entry {
    fn credit(&mut self, match_points: u32, alternate_points: u32, goals: u32) {
        self.standing.match_points += match_points;
        self.standing.alternate_points += alternate_points;
        self.standing.goals_scored += u64::from(goals);
    }
}

/// Ranking order: points, goals and alternate points descending, then
/// earlier registration first.
fn rank_order(a: &Entry, b: &Entry) -> Ordering {
    b.standing
        .match_points
        .cmp(&a.standing.match_points)
        .then_with(|| b.standing.goals_scored.cmp(&a.standing.goals_scored))
        .then_with(|| b.standing.alternate_points.cmp(&a.standing.alternate_points))
        .then_with(|| a.registered.cmp(&b.registered))
}

/// Computes per-group standings and qualifiers
///
/// Teams keep their input order when every ranking key ties, since the
/// sort is stable.
///
/// # Errors
/// * [`RankingError::MalformedDate`] - a team's date is not DD/MM
/// * [`RankingError::ReferentialIntegrity`] - a match names a team not in `teams`
///
/// # Example
/// ```
/// use championship_api::domain::fixture::NewMatch;
/// use championship_api::domain::ranking::compute_rankings;
/// use championship_api::domain::team::{GroupNumber, Team};
///
/// let (a, _) = Team::new("A", "01/01", 1).unwrap();
/// let (b, _) = Team::new("B", "02/01", 1).unwrap();
/// let played = NewMatch::new("A", "B", 3, 1).unwrap().into_match(1);
///
/// let rankings = compute_rankings(&[a, b], &[played]).unwrap();
/// assert_eq!(rankings.qualifiers(GroupNumber::One), ["A", "B"]);
/// ```
pub fn compute_rankings(teams: &[Team], matches: &[Match]) -> Result<Rankings, RankingError> {
    let mut entries = teams
        .iter()
        .map(|team| -> Result<Entry, RankingError> {
            let registered = team
                .parsed_registration_date()
                .map_err(|_| RankingError::MalformedDate {
                    team: team.name().to_string(),
                    value: team.registration_date().to_string(),
                })?;
            Ok(Entry {
                standing: Standing::for_team(team),
                registered,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let index: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.name(), i))
        .collect();

    let lookup = |played: &Match, name: &str| {
        index
            .get(name)
            .copied()
            .ok_or_else(|| RankingError::ReferentialIntegrity {
                match_id: played.id,
                team: name.to_string(),
            })
    };

    for played in matches {
        let a = lookup(played, &played.team_a)?;
        let b = lookup(played, &played.team_b)?;
        let award = Award::for_outcome(played.outcome());

        entries[a].credit(award.match_points.0, award.alternate_points.0, played.goals_a);
        entries[b].credit(award.match_points.1, award.alternate_points.1, played.goals_b);
    }

    let mut standings_by_group = BTreeMap::new();
    let mut top4 = BTreeMap::new();
    let mut combined_standings = Vec::with_capacity(entries.len());

    for group in GroupNumber::ALL {
        let mut members: Vec<&Entry> = entries
            .iter()
            .filter(|entry| entry.standing.group_number == group)
            .collect();
        members.sort_by(|a, b| rank_order(a, b));

        let sorted: Vec<Standing> = members.into_iter().map(|e| e.standing.clone()).collect();
        let qualifiers = sorted
            .iter()
            .take(QUALIFIERS_PER_GROUP)
            .map(|s| s.team_name.clone())
            .collect();

        combined_standings.extend(sorted.iter().cloned());
        standings_by_group.insert(group, sorted);
        top4.insert(group, qualifiers);
    }

    Ok(Rankings {
        standings_by_group,
        combined_standings,
        matches: matches.to_vec(),
        top4,
    })
}
