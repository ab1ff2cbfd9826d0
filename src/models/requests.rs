use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for the top matches of one candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
    #[serde(default = "default_top_k")]
    #[serde(alias = "top_k", rename = "topK")]
    pub top_k: u16,
}

/// Request for the top candidates of one internship
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopCandidatesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "internship_id", rename = "internshipId")]
    pub internship_id: String,
    #[serde(default = "default_top_k")]
    #[serde(alias = "top_k", rename = "topK")]
    pub top_k: u16,
}

fn default_top_k() -> u16 {
    5
}
