//! Intern Match - matching and allocation engine for internship placement
//!
//! This library computes composite compatibility scores between candidates
//! and internships (skill similarity, location, sector, eligibility, plus
//! an affirmative-action boost) and converts them into a capacity- and
//! rural-quota-constrained allocation.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{allocate, similarity, FillState, InternshipAllocation, MatchError, Matcher};
pub use models::{
    Candidate, DistrictType, Internship, Match, ScoringWeights, Sector, SocialCategory,
};
pub use services::{DataStore, StoreError};
