use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Contest id used for problems the API reports without one (gym/acmsguru problems).
pub const DEFAULT_CONTEST_ID: i64 = 99999;

/// Rendered in place of any profile field the user left empty.
pub const PLACEHOLDER: &str = "-";

// Using `#[serde(rename_all = "camelCase")]` to map the API's camelCase JSON onto snake_case.
// Every optional field is an `Option` because the API simply omits fields a user never filled in.

/// A single user object as returned by `user.info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub handle: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub organization: Option<String>,
    pub rating: Option<i64>,
    pub rank: Option<String>,
    pub max_rating: Option<i64>,
    pub max_rank: Option<String>,
    pub contribution: Option<i64>,
    pub registration_time_seconds: Option<i64>,
}

/// A problem reference embedded in a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: Option<i64>,
    pub index: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `user.status`. `verdict` is absent while a submission is still being judged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub id: i64,
    pub verdict: Option<String>,
    pub problem: Problem,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some("OK")
    }
}

/// One entry of `user.rating`. Only the number of entries is used downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingChange {
    pub contest_id: i64,
    pub contest_name: String,
    pub rank: i64,
    pub old_rating: i64,
    pub new_rating: i64,
}

/// Identity of a solved problem: contest id plus problem index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemKey {
    pub contest_id: i64,
    pub index: String,
}

impl ProblemKey {
    pub fn from_problem(problem: &Problem) -> Self {
        Self {
            contest_id: problem.contest_id.unwrap_or(DEFAULT_CONTEST_ID),
            index: problem.index.clone(),
        }
    }
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.contest_id, self.index)
    }
}

/// The normalized per-handle profile, built fresh for every handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub handle: String,
    pub name: String,
    pub location: String,
    pub organization: String,
    pub rating: i64,
    pub rank: String,
    pub max_rating: i64,
    pub max_rank: String,
    pub contribution: i64,
    /// Seconds since the Unix epoch.
    pub registration_time: i64,
    pub solved: HashSet<ProblemKey>,
    pub contests: usize,
}

impl ProfileRecord {
    pub fn problems_solved(&self) -> usize {
        self.solved.len()
    }

    /// `"{rating} (max. {max_rank}, {max_rating})"`
    pub fn contest_rating(&self) -> String {
        format!(
            "{} (max. {}, {})",
            self.rating, self.max_rank, self.max_rating
        )
    }
}

/// The flat record produced for each handle before ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "Rating")]
    pub rating: i64,
    #[serde(rename = "Contest Rating")]
    pub contest_rating: String,
    #[serde(rename = "Contests Joined")]
    pub contests_joined: usize,
    #[serde(rename = "Problems Solved")]
    pub problems_solved: usize,
    #[serde(rename = "Member Since")]
    pub member_since: String,
    /// Kept for display only; never written to the report.
    #[serde(skip)]
    pub max_rating: i64,
}
