// Core algorithm exports
pub mod allocator;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use allocator::{allocate, FillState, InternshipAllocation};
pub use matcher::{MatchError, Matcher};
pub use scoring::{
    affirmative_boost, default_preferred_categories, eligibility_score, location_score,
    score_pair, sector_score, skill_score,
};
pub use similarity::similarity;
