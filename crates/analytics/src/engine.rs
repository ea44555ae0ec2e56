use crate::error::AnalyticsError;
use crate::membership::membership_duration;
use crate::profile::{display_location, display_name, display_organization, solved_problems, title_case};
use chrono::{DateTime, Utc};
use core_types::{LeaderboardRow, ProfileRecord, RatingChange, Submission, UserInfo};

/// A stateless calculator for turning raw API data into profile records and rows.
///
/// The only thing it carries is the reference time "Member Since" is measured against,
/// so a whole run reports durations relative to the same instant.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine {
    now: DateTime<Utc>,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// An engine that measures membership against a fixed instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.now
    }

    /// Normalizes the three API payloads of one handle into a `ProfileRecord`.
    ///
    /// # Arguments
    ///
    /// * `info` - The `user.info` object.
    /// * `submissions` - Every submission from `user.status`.
    /// * `rating_history` - The `user.rating` entries; only their count is used.
    pub fn profile(
        &self,
        info: UserInfo,
        submissions: &[Submission],
        rating_history: &[RatingChange],
    ) -> ProfileRecord {
        let rank = info
            .rank
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or("Unrated");
        let max_rank = info
            .max_rank
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or("unrated");

        let solved = solved_problems(submissions);
        tracing::debug!(
            handle = %info.handle,
            submissions = submissions.len(),
            solved = solved.len(),
            contests = rating_history.len(),
            "Normalized profile."
        );

        ProfileRecord {
            name: display_name(&info.first_name, &info.last_name),
            location: display_location(&info.country, &info.city),
            organization: display_organization(&info.organization),
            rating: info.rating.unwrap_or(0),
            rank: title_case(rank),
            max_rating: info.max_rating.unwrap_or(0),
            max_rank: max_rank.to_string(),
            contribution: info.contribution.unwrap_or(0),
            registration_time: info.registration_time_seconds.unwrap_or(0),
            solved,
            contests: rating_history.len(),
            handle: info.handle,
        }
    }

    /// Renders the "Member Since" value for a registration timestamp in seconds.
    pub fn member_since(&self, registration_time: i64) -> Result<String, AnalyticsError> {
        let registered = DateTime::from_timestamp(registration_time, 0)
            .ok_or(AnalyticsError::InvalidTimestamp(registration_time))?;
        Ok(membership_duration(registered, self.now))
    }

    /// Flattens a profile into the row shape the report is built from.
    pub fn leaderboard_row(&self, profile: &ProfileRecord) -> Result<LeaderboardRow, AnalyticsError> {
        Ok(LeaderboardRow {
            name: profile.name.clone(),
            username: profile.handle.clone(),
            rank: profile.rank.clone(),
            location: profile.location.clone(),
            organization: profile.organization.clone(),
            rating: profile.rating,
            contest_rating: profile.contest_rating(),
            contests_joined: profile.contests,
            problems_solved: profile.problems_solved(),
            member_since: self.member_since(profile.registration_time)?,
            max_rating: profile.max_rating,
        })
    }
}
