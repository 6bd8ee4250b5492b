//! Line-oriented bulk import
//!
//! Teams: `<name> <DD/MM> <group>` per line.
//! Matches: `<team_a> <team_b> <goals_a> <goals_b>` per line.
//!
//! Fields are whitespace separated, so names containing spaces cannot be
//! imported this way. Blank lines are skipped. Every line is parsed on its
//! own and one bad line never hides the others.

use serde::Serialize;
use thiserror::Error;

/// Why a single import line was rejected before reaching the service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Invalid format for line: expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Invalid {field}: '{value}' is not an integer")]
    NotAnInteger { field: &'static str, value: String },
}

/// A parsed team line, still unvalidated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLine {
    pub name: String,
    pub registration_date: String,
    pub group_number: i64,
}

/// A parsed match line, still unvalidated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLine {
    pub team_a: String,
    pub team_b: String,
    pub goals_a: i64,
    pub goals_b: i64,
}

/// Result for one non-blank input line, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub line: usize,
    pub text: String,
    pub result: Result<T, ImportError>,
}

/// Outcome reported back to the caller for one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub line: usize,
    pub input: String,
    pub ok: bool,
    pub message: String,
}

pub fn parse_team_lines(text: &str) -> Vec<Parsed<TeamLine>> {
    parse_lines(text, |fields| {
        let [name, date, group] = fixed::<3>(fields)?;
        Ok(TeamLine {
            name: name.to_string(),
            registration_date: date.to_string(),
            group_number: integer("group number", group)?,
        })
    })
}

pub fn parse_match_lines(text: &str) -> Vec<Parsed<MatchLine>> {
    parse_lines(text, |fields| {
        let [team_a, team_b, goals_a, goals_b] = fixed::<4>(fields)?;
        Ok(MatchLine {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            goals_a: integer("goals", goals_a)?,
            goals_b: integer("goals", goals_b)?,
        })
    })
}

fn parse_lines<T>(
    text: &str,
    parse: impl Fn(&[&str]) -> Result<T, ImportError>,
) -> Vec<Parsed<T>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            Parsed {
                line: i + 1,
                text: line.trim().to_string(),
                result: parse(&fields),
            }
        })
        .collect()
}

fn fixed<'a, const N: usize>(fields: &[&'a str]) -> Result<[&'a str; N], ImportError> {
    <[&str; N]>::try_from(fields).map_err(|_| ImportError::FieldCount {
        expected: N,
        found: fields.len(),
    })
}

fn integer(field: &'static str, value: &str) -> Result<i64, ImportError> {
    value.parse().map_err(|_| ImportError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}
