use configuration::SortKey;
use core_types::LeaderboardRow;

pub mod error;
pub mod report;

pub use error::AnalyzerError;
pub use report::{RankedRow, write_csv};

/// Orders leaderboard rows and projects them into the report shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    sort_by: SortKey,
}

impl Analyzer {
    pub fn new(sort_by: SortKey) -> Self {
        Self { sort_by }
    }

    /// Sorts descending by the configured key and assigns 1-based serial numbers.
    ///
    /// The sort is stable: rows with equal keys keep their input order.
    pub fn rank(&self, mut rows: Vec<LeaderboardRow>) -> Vec<RankedRow> {
        let sort_by = self.sort_by;
        rows.sort_by(|a, b| sort_value(b, sort_by).cmp(&sort_value(a, sort_by)));

        rows.into_iter()
            .enumerate()
            .map(|(i, row)| RankedRow::new(i + 1, row))
            .collect()
    }
}

fn sort_value(row: &LeaderboardRow, sort_by: SortKey) -> i64 {
    match sort_by {
        SortKey::ProblemsSolved => row.problems_solved as i64,
        SortKey::Rating => row.rating,
        SortKey::ContestsJoined => row.contests_joined as i64,
    }
}
