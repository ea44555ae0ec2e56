use serde::{Deserialize, Serialize};

/// The eight colour bands a Codeforces rating falls into.
///
/// Variants are ordered from the lowest band to the highest, so the derived
/// `Ord` matches rating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingTier {
    Newbie,
    Pupil,
    Specialist,
    Expert,
    CandidateMaster,
    Master,
    InternationalMaster,
    Grandmaster,
}

impl RatingTier {
    pub const ALL: [RatingTier; 8] = [
        RatingTier::Newbie,
        RatingTier::Pupil,
        RatingTier::Specialist,
        RatingTier::Expert,
        RatingTier::CandidateMaster,
        RatingTier::Master,
        RatingTier::InternationalMaster,
        RatingTier::Grandmaster,
    ];

    /// The hex colour string used for this band.
    pub fn hex(&self) -> &'static str {
        match self {
            RatingTier::Newbie => "#cec8c1",
            RatingTier::Pupil => "#43A217",
            RatingTier::Specialist => "#22C4AE",
            RatingTier::Expert => "#1427B2",
            RatingTier::CandidateMaster => "#700CB0",
            RatingTier::Master => "#F9A908",
            RatingTier::InternationalMaster => "#FBB948",
            RatingTier::Grandmaster => "#FF0000",
        }
    }

    /// The same colour as an `(r, g, b)` triple, for terminal rendering.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}
