use core_types::{ProfileRecord, RatingTier};

/// Maps a rating onto its colour band. Each band's upper bound is inclusive.
pub fn tier_for_rating(rating: i64) -> RatingTier {
    match rating {
        ..=1199 => RatingTier::Newbie,
        1200..=1399 => RatingTier::Pupil,
        1400..=1599 => RatingTier::Specialist,
        1600..=1899 => RatingTier::Expert,
        1900..=2099 => RatingTier::CandidateMaster,
        2100..=2299 => RatingTier::Master,
        2300..=2399 => RatingTier::InternationalMaster,
        _ => RatingTier::Grandmaster,
    }
}

/// Hex colour for a rating, e.g. `#43A217` for 1300.
pub fn color_for_rating(rating: i64) -> &'static str {
    tier_for_rating(rating).hex()
}

pub fn rating_color(profile: &ProfileRecord) -> &'static str {
    color_for_rating(profile.rating)
}

pub fn max_rating_color(profile: &ProfileRecord) -> &'static str {
    color_for_rating(profile.max_rating)
}
