use crate::core::allocator::{allocate, InternshipAllocation};
use crate::core::scoring::{default_preferred_categories, score_pair};
use crate::models::{Candidate, Internship, Match, ScoringWeights, SocialCategory};
use thiserror::Error;

/// Errors surfaced by the matching and allocation engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

/// Matching orchestrator
///
/// Scores the full candidate/internship cross product, answers top-k
/// queries over the scored matches, and runs the quota-constrained
/// allocation. Scoring is pure; only the allocator's own fill state
/// mutates during a run.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    preferred_categories: Vec<SocialCategory>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, preferred_categories: Vec<SocialCategory>) -> Self {
        Self {
            weights,
            preferred_categories,
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            preferred_categories: default_preferred_categories(),
        }
    }

    /// Score every candidate against every internship
    ///
    /// Pure pairwise scoring: no capacity logic, no thresholding. The
    /// result has exactly |candidates| * |internships| entries, including
    /// ineligible pairs (flagged, with a zero eligibility component).
    pub fn match_candidates(
        &self,
        candidates: &[Candidate],
        internships: &[Internship],
    ) -> Vec<Match> {
        let mut matches = Vec::with_capacity(candidates.len() * internships.len());

        for candidate in candidates {
            for internship in internships {
                matches.push(score_pair(
                    candidate,
                    internship,
                    &self.weights,
                    &self.preferred_categories,
                ));
            }
        }

        tracing::debug!(
            "Scored {} candidate/internship pairs ({} candidates x {} internships)",
            matches.len(),
            candidates.len(),
            internships.len()
        );

        matches
    }

    /// Top `top_k` matches for one candidate, best first
    ///
    /// Ties are broken by internship id ascending so repeated runs return
    /// identical orderings. A `top_k` larger than the available matches
    /// returns everything; an unknown candidate id is an error.
    pub fn get_top_matches_for_candidate(
        &self,
        candidate_id: &str,
        matches: &[Match],
        top_k: usize,
    ) -> Result<Vec<Match>, MatchError> {
        let mut selected: Vec<Match> = matches
            .iter()
            .filter(|m| m.candidate_id == candidate_id)
            .cloned()
            .collect();

        if selected.is_empty() {
            return Err(MatchError::NotFound(format!(
                "candidate {candidate_id} has no matches"
            )));
        }

        selected.sort_by(|a, b| {
            b.total_score
                .total_cmp(&a.total_score)
                .then_with(|| a.internship_id.cmp(&b.internship_id))
        });
        selected.truncate(top_k);

        Ok(selected)
    }

    /// Top `top_k` candidates for one internship, best first
    ///
    /// Mirror of `get_top_matches_for_candidate` with the tie-break on
    /// candidate id ascending.
    pub fn get_top_candidates_for_internship(
        &self,
        internship_id: &str,
        matches: &[Match],
        top_k: usize,
    ) -> Result<Vec<Match>, MatchError> {
        let mut selected: Vec<Match> = matches
            .iter()
            .filter(|m| m.internship_id == internship_id)
            .cloned()
            .collect();

        if selected.is_empty() {
            return Err(MatchError::NotFound(format!(
                "internship {internship_id} has no matches"
            )));
        }

        selected.sort_by(|a, b| {
            b.total_score
                .total_cmp(&a.total_score)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });
        selected.truncate(top_k);

        Ok(selected)
    }

    /// Run the capacity- and quota-constrained allocation over all
    /// internships. See `core::allocator` for the two-pass algorithm.
    pub fn allocate(
        &self,
        internships: &[Internship],
        matches: &[Match],
    ) -> Result<Vec<InternshipAllocation>, MatchError> {
        allocate(internships, matches)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
