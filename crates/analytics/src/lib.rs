//! # Leaderboard Analytics
//!
//! Pure derivations over the data returned by the Codeforces API: rating colour bands,
//! membership duration, the solved-problem set and the placeholder rules for empty
//! profile fields.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no knowledge of the HTTP client. It depends only on
//!   `core-types`.
//! - **Stateless calculation:** `AnalyticsEngine` holds nothing but the reference time it
//!   measures membership against, so every profile is derived independently.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod membership;
pub mod profile;
pub mod rating;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use membership::{CalendarDelta, calendar_delta, membership_duration};
pub use profile::solved_problems;
pub use rating::{color_for_rating, tier_for_rating};
