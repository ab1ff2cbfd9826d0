use crate::models::{Candidate, Internship};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading a matching snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    Validation(String),
}

/// On-disk snapshot format: one JSON document with both record sets
#[derive(Debug, Deserialize)]
struct Snapshot {
    candidates: Vec<Candidate>,
    internships: Vec<Internship>,
}

/// In-memory snapshot of candidates and internships for one matching run
///
/// The store is the validating boundary: records that reach the engine are
/// guaranteed to have unique ids and in-range numeric fields, so scoring
/// and allocation never re-validate.
#[derive(Debug, Clone)]
pub struct DataStore {
    candidates: Vec<Candidate>,
    internships: Vec<Internship>,
}

impl DataStore {
    /// Build a store from pre-constructed records, failing fast on
    /// duplicate ids or out-of-range fields.
    pub fn new(
        candidates: Vec<Candidate>,
        internships: Vec<Internship>,
    ) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            candidate
                .validate()
                .map_err(|e| StoreError::Validation(format!("candidate {}: {e}", candidate.id)))?;
            if !seen.insert(candidate.id.clone()) {
                return Err(StoreError::Validation(format!(
                    "duplicate candidate id {}",
                    candidate.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for internship in &internships {
            internship.validate().map_err(|e| {
                StoreError::Validation(format!("internship {}: {e}", internship.id))
            })?;
            if !seen.insert(internship.id.clone()) {
                return Err(StoreError::Validation(format!(
                    "duplicate internship id {}",
                    internship.id
                )));
            }
        }

        Ok(Self {
            candidates,
            internships,
        })
    }

    /// Load and validate a JSON snapshot file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Self::new(snapshot.candidates, snapshot.internships)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn internship(&self, id: &str) -> Option<&Internship> {
        self.internships.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    #[test]
    fn test_sample_data_passes_validation() {
        let store = DataStore::new(
            fixtures::sample_candidates(),
            fixtures::sample_internships(),
        )
        .unwrap();

        assert_eq!(store.candidates().len(), 5);
        assert_eq!(store.internships().len(), 5);
        assert!(store.candidate("C001").is_some());
        assert!(store.internship("I103").is_some());
        assert!(store.candidate("C999").is_none());
    }

    #[test]
    fn test_duplicate_candidate_id_rejected() {
        let mut candidates = fixtures::sample_candidates();
        let duplicate = candidates[0].clone();
        candidates.push(duplicate);

        let err = DataStore::new(candidates, fixtures::sample_internships()).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_out_of_range_quota_rejected_at_load() {
        let mut internships = fixtures::sample_internships();
        internships[0].rural_quota = 2.0;

        let err = DataStore::new(fixtures::sample_candidates(), internships).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let json = serde_json::json!({
            "candidates": [{
                "id": "C1",
                "name": "Test",
                "skills": ["Python"],
                "cgpa": 8.0,
                "experienceMonths": 6,
                "preferredLocations": ["Mumbai"],
                "sectorInterests": ["technology"],
                "socialCategory": "general",
                "districtType": "urban",
                "pastInternships": 0
            }],
            "internships": [{
                "id": "I1",
                "company": "Acme",
                "title": "Intern",
                "sector": "technology",
                "requiredSkills": ["Python"],
                "location": "Mumbai",
                "minCgpa": 7.0,
                "capacity": 3,
                "ruralQuota": 0.2
            }]
        });

        let dir = std::env::temp_dir().join("intern-match-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("snapshot.json");
        std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

        let store = DataStore::load_from_file(&path).unwrap();
        assert_eq!(store.candidates().len(), 1);
        assert_eq!(store.internships()[0].rural_quota, 0.2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DataStore::load_from_file("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
