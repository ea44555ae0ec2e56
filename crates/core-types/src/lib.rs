pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::RatingTier;
pub use structs::{
    LeaderboardRow, Problem, ProblemKey, ProfileRecord, RatingChange, Submission, UserInfo,
    DEFAULT_CONTEST_ID, PLACEHOLDER,
};
