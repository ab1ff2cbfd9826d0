use serde::{Deserialize, Serialize};
use validator::Validate;

/// Industry sectors for internships and candidate interests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Technology,
    Finance,
    Healthcare,
    Education,
    Manufacturing,
    Agriculture,
    Government,
    Ngo,
}

/// Social categories considered by the affirmative-action booster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialCategory {
    General,
    Obc,
    Sc,
    St,
    Ews,
}

/// District classification of a candidate's home district
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistrictType {
    Urban,
    Rural,
    Aspirational,
}

impl DistrictType {
    /// Whether candidates from this district count toward the rural quota
    pub fn quota_relevant(self) -> bool {
        matches!(self, DistrictType::Rural | DistrictType::Aspirational)
    }
}

/// Candidate profile, immutable for the duration of a matching run
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub qualification: String,
    #[validate(range(min = 0.0, max = 10.0))]
    pub cgpa: f64,
    #[serde(rename = "experienceMonths")]
    pub experience_months: u32,
    #[serde(rename = "preferredLocations", default)]
    pub preferred_locations: Vec<String>,
    #[serde(rename = "remoteOk", default)]
    pub remote_ok: bool,
    #[serde(rename = "sectorInterests", default)]
    pub sector_interests: Vec<Sector>,
    #[serde(rename = "socialCategory")]
    pub social_category: SocialCategory,
    #[serde(rename = "districtType")]
    pub district_type: DistrictType,
    #[serde(rename = "pastInternships", default)]
    pub past_internships: u32,
}

/// Internship opening. Fill counters are not stored here: they live in the
/// allocator's per-run state so the record stays immutable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Internship {
    pub id: String,
    pub company: String,
    pub title: String,
    pub sector: Sector,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    pub location: String,
    #[serde(rename = "remoteAllowed", default)]
    pub remote_allowed: bool,
    #[serde(rename = "minCgpa")]
    #[validate(range(min = 0.0, max = 10.0))]
    pub min_cgpa: f64,
    #[serde(rename = "minExperienceMonths", default)]
    pub min_experience_months: u32,
    pub capacity: u32,
    #[serde(rename = "ruralQuota")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub rural_quota: f64,
}

impl Internship {
    /// Number of positions reserved for quota-relevant candidates in pass 1
    pub fn rural_slots(&self) -> u32 {
        (self.capacity as f64 * self.rural_quota).ceil() as u32
    }
}

/// Scored candidate/internship pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "internshipId")]
    pub internship_id: String,
    #[serde(rename = "skillScore")]
    pub skill_score: f64,
    #[serde(rename = "locationScore")]
    pub location_score: f64,
    #[serde(rename = "sectorScore")]
    pub sector_score: f64,
    #[serde(rename = "eligibilityScore")]
    pub eligibility_score: f64,
    #[serde(rename = "affirmativeBoost")]
    pub affirmative_boost: f64,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    pub eligible: bool,
    #[serde(rename = "quotaRelevant")]
    pub quota_relevant: bool,
}

/// Scoring weights for the composite score
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill: f64,
    pub location: f64,
    pub sector: f64,
    pub eligibility: f64,
    pub boost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.30,
            location: 0.20,
            sector: 0.20,
            eligibility: 0.20,
            boost: 0.10,
        }
    }
}
