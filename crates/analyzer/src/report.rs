use crate::error::AnalyzerError;
use core_types::LeaderboardRow;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One line of the final report. Location, organization and the raw rating are dropped;
/// the raw ratings are kept only for terminal colouring and are never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    #[serde(rename = "Sl. No.")]
    pub serial: usize,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Contest Rating")]
    pub contest_rating: String,
    #[serde(rename = "Contests Joined")]
    pub contests_joined: usize,
    #[serde(rename = "Problems Solved")]
    pub problems_solved: usize,
    #[serde(rename = "Member Since")]
    pub member_since: String,
    #[serde(skip)]
    pub rating: i64,
    #[serde(skip)]
    pub max_rating: i64,
}

impl RankedRow {
    pub fn new(serial: usize, row: LeaderboardRow) -> Self {
        Self {
            serial,
            name: row.name,
            username: row.username,
            rank: row.rank,
            contest_rating: row.contest_rating,
            contests_joined: row.contests_joined,
            problems_solved: row.problems_solved,
            member_since: row.member_since,
            rating: row.rating,
            max_rating: row.max_rating,
        }
    }
}

/// Serializes the rows, header first, into CSV bytes.
pub fn to_csv(rows: &[RankedRow]) -> Result<Vec<u8>, AnalyzerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| AnalyzerError::Io(e.into_error()))
}

/// Writes the report to `path`, overwriting any existing file, and returns its absolute path.
///
/// The CSV is fully rendered before the file is touched, and an empty row set is rejected
/// without creating anything.
pub fn write_csv(rows: &[RankedRow], path: impl AsRef<Path>) -> Result<PathBuf, AnalyzerError> {
    if rows.is_empty() {
        return Err(AnalyzerError::NoRows);
    }

    let bytes = to_csv(rows)?;
    let path = std::env::current_dir()?.join(path.as_ref());
    fs::write(&path, bytes)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Report written.");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ranked(serial: usize, username: &str) -> RankedRow {
        RankedRow {
            serial,
            name: "Gennady Korotkevich".to_string(),
            username: username.to_string(),
            rank: "Legendary Grandmaster".to_string(),
            contest_rating: "3800 (max. tourist, 4009)".to_string(),
            contests_joined: 250,
            problems_solved: 2000,
            member_since: "14 years".to_string(),
            rating: 3800,
            max_rating: 4009,
        }
    }

    #[test]
    fn header_and_quoting() {
        let csv = String::from_utf8(to_csv(&[ranked(1, "tourist")]).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Sl. No.,Name,Username,Rank,Contest Rating,Contests Joined,Problems Solved,Member Since"
        );
        assert_eq!(
            lines.next().unwrap(),
            r#"1,Gennady Korotkevich,tourist,Legendary Grandmaster,"3800 (max. tourist, 4009)",250,2000,14 years"#
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn overwrites_and_returns_absolute_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("leaderboard.csv");
        fs::write(&target, "stale").unwrap();

        let written = write_csv(&[ranked(1, "a"), ranked(2, "b")], &target).unwrap();

        assert!(written.is_absolute());
        assert_eq!(written, target);
        let contents = fs::read_to_string(&target).unwrap();
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn empty_rows_write_nothing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("leaderboard.csv");

        let err = write_csv(&[], &target).unwrap_err();

        assert!(matches!(err, AnalyzerError::NoRows));
        assert!(!target.exists());
    }
}
