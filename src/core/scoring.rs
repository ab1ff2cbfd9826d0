use crate::core::similarity::similarity;
use crate::models::{Candidate, Internship, Match, ScoringWeights, SocialCategory};

/// Skill score (0-1): cosine similarity between the candidate's skills and
/// the internship's required skills.
#[inline]
pub fn skill_score(candidate: &Candidate, internship: &Internship) -> f64 {
    similarity(&candidate.skills, &internship.required_skills)
}

/// Location score (0-1)
///
/// A remote internship with a remote-accepting candidate is a perfect
/// match, as is the candidate's first-ranked preferred location. Later
/// preference ranks decay as 1/(1+rank). A location missing from the
/// preference list scores 0.3 when the internship is at least remote
/// friendly, otherwise 0.0.
#[inline]
pub fn location_score(candidate: &Candidate, internship: &Internship) -> f64 {
    if internship.remote_allowed && candidate.remote_ok {
        return 1.0;
    }

    let rank = candidate
        .preferred_locations
        .iter()
        .position(|loc| loc.eq_ignore_ascii_case(&internship.location));

    match rank {
        Some(r) => 1.0 / (1.0 + r as f64),
        None if internship.remote_allowed => 0.3,
        None => 0.0,
    }
}

/// Sector score (0-1): full credit for a declared interest, partial credit
/// otherwise. Total over every sector combination.
#[inline]
pub fn sector_score(candidate: &Candidate, internship: &Internship) -> f64 {
    if candidate.sector_interests.contains(&internship.sector) {
        1.0
    } else {
        0.3
    }
}

/// Eligibility score (0-1) plus the hard eligibility gate
///
/// Candidates below the CGPA or experience minimum are hard-gated to 0.0
/// and flagged ineligible. Above the gate the score grows smoothly with the
/// margin over both minimums, starting at 0.4 at the exact minimums and
/// approaching 1.0.
#[inline]
pub fn eligibility_score(candidate: &Candidate, internship: &Internship) -> (f64, bool) {
    if candidate.cgpa < internship.min_cgpa
        || candidate.experience_months < internship.min_experience_months
    {
        return (0.0, false);
    }

    let cgpa_margin = candidate.cgpa - internship.min_cgpa;
    let experience_margin = (candidate.experience_months - internship.min_experience_months) as f64;

    // Exponential saturation keeps the score monotonic in both margins.
    let score = 1.0 - 0.6 * (-(cgpa_margin / 2.0 + experience_margin / 12.0)).exp();

    (score.min(1.0), true)
}

/// Affirmative-action boost (0-0.7), independent of the internship
///
/// Additive components: +0.3 for a rural or aspirational home district,
/// +0.2 for a social category in the configured preferred set, and +0.2 for
/// no past internships or +0.1 for exactly one (mutually exclusive).
#[inline]
pub fn affirmative_boost(candidate: &Candidate, preferred_categories: &[SocialCategory]) -> f64 {
    let mut boost = 0.0;

    if candidate.district_type.quota_relevant() {
        boost += 0.3;
    }

    if preferred_categories.contains(&candidate.social_category) {
        boost += 0.2;
    }

    match candidate.past_internships {
        0 => boost += 0.2,
        1 => boost += 0.1,
        _ => {}
    }

    boost
}

/// Score one candidate/internship pair into a Match record
///
/// total = 0.3*skill + 0.2*location + 0.2*sector + 0.2*eligibility
///       + 0.1*boost
///
/// The weight table is applied as-is, never renormalized; with each
/// component in its stated range the total stays within [0, 1.07].
pub fn score_pair(
    candidate: &Candidate,
    internship: &Internship,
    weights: &ScoringWeights,
    preferred_categories: &[SocialCategory],
) -> Match {
    let skill = skill_score(candidate, internship);
    let location = location_score(candidate, internship);
    let sector = sector_score(candidate, internship);
    let (eligibility, eligible) = eligibility_score(candidate, internship);
    let boost = affirmative_boost(candidate, preferred_categories);

    let total = skill * weights.skill
        + location * weights.location
        + sector * weights.sector
        + eligibility * weights.eligibility
        + boost * weights.boost;

    Match {
        candidate_id: candidate.id.clone(),
        internship_id: internship.id.clone(),
        skill_score: skill,
        location_score: location,
        sector_score: sector,
        eligibility_score: eligibility,
        affirmative_boost: boost,
        total_score: total,
        eligible,
        quota_relevant: candidate.district_type.quota_relevant(),
    }
}

/// Default preferred social categories for the booster
pub fn default_preferred_categories() -> Vec<SocialCategory> {
    vec![
        SocialCategory::Obc,
        SocialCategory::Sc,
        SocialCategory::St,
        SocialCategory::Ews,
    ]
}
