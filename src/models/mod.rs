// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, DistrictType, Internship, Match, ScoringWeights, Sector, SocialCategory};
pub use requests::{TopCandidatesRequest, TopMatchesRequest};
pub use responses::{AllocationResponse, ErrorResponse, HealthResponse, MatchesResponse};
