use crate::core::allocator::InternshipAllocation;
use crate::models::domain::Match;
use serde::{Deserialize, Serialize};

/// Response for the top-match queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<Match>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for an allocation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    pub allocations: Vec<InternshipAllocation>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "totalAllocated")]
    pub total_allocated: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
