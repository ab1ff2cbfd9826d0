use crate::core::matcher::MatchError;
use crate::models::{Internship, Match};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Per-internship fill counters, owned by the allocator for one run
///
/// Internship records stay immutable; this arena entry is the only mutable
/// state in the engine. `filled <= capacity` and `rural_filled <=
/// rural_slots` hold after every allocation step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FillState {
    pub capacity: u32,
    #[serde(rename = "ruralSlots")]
    pub rural_slots: u32,
    pub filled: u32,
    #[serde(rename = "ruralFilled")]
    pub rural_filled: u32,
}

impl FillState {
    fn new(internship: &Internship) -> Self {
        Self {
            capacity: internship.capacity,
            rural_slots: internship.rural_slots(),
            filled: 0,
            rural_filled: 0,
        }
    }

    /// OPEN -> FULL is monotonic; an internship never reopens within a run
    pub fn is_full(&self) -> bool {
        self.filled >= self.capacity
    }
}

/// Allocation outcome for one internship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternshipAllocation {
    #[serde(rename = "internshipId")]
    pub internship_id: String,
    pub selected: Vec<Match>,
    pub fill: FillState,
}

fn by_score_then_candidate(a: &Match, b: &Match) -> Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| a.candidate_id.cmp(&b.candidate_id))
}

/// Two-pass constrained allocation for a single internship
///
/// Pass 1 fills up to `rural_slots` positions from the eligible
/// quota-relevant pool in score order. Pass 2 fills the remaining capacity
/// from all leftover eligible candidates, re-ranked purely by merit. A
/// quota shortfall in pass 1 lapses into ordinary pass-2 positions; it is
/// never backfilled from the general pool inside pass 1 and never leaves
/// seats empty while merit candidates remain.
fn allocate_internship(internship: &Internship, matches: &[Match]) -> InternshipAllocation {
    let mut fill = FillState::new(internship);

    let mut pool: Vec<&Match> = matches
        .iter()
        .filter(|m| m.internship_id == internship.id && m.eligible)
        .collect();
    pool.sort_by(|a, b| by_score_then_candidate(a, b));

    let mut selected = Vec::new();
    let mut leftovers = Vec::new();

    // Pass 1: rural-quota floor
    for m in pool {
        if m.quota_relevant && fill.rural_filled < fill.rural_slots && !fill.is_full() {
            fill.filled += 1;
            fill.rural_filled += 1;
            selected.push(m.clone());
        } else {
            leftovers.push(m);
        }
    }

    // Pass 2: open positions by merit, leftovers are already score-sorted
    for m in leftovers {
        if fill.is_full() {
            break;
        }
        fill.filled += 1;
        selected.push(m.clone());
    }

    InternshipAllocation {
        internship_id: internship.id.clone(),
        selected,
        fill,
    }
}

/// Run constrained allocation for every internship
///
/// Internships are processed sequentially and independently; each owns its
/// own fill state, so the passes never contend. Matches flagged ineligible
/// never enter either pass. A quota fraction outside [0,1] means the record
/// escaped construction-time validation and is rejected here.
pub fn allocate(
    internships: &[Internship],
    matches: &[Match],
) -> Result<Vec<InternshipAllocation>, MatchError> {
    for internship in internships {
        if !(0.0..=1.0).contains(&internship.rural_quota) {
            return Err(MatchError::InvalidRange(format!(
                "internship {} has rural quota {} outside [0, 1]",
                internship.id, internship.rural_quota
            )));
        }
    }

    // Group once so each internship only scans its own matches
    let mut by_internship: HashMap<&str, Vec<Match>> = HashMap::new();
    for m in matches {
        by_internship
            .entry(m.internship_id.as_str())
            .or_default()
            .push(m.clone());
    }

    let empty: Vec<Match> = Vec::new();
    let allocations = internships
        .iter()
        .map(|internship| {
            let pool = by_internship
                .get(internship.id.as_str())
                .unwrap_or(&empty);
            allocate_internship(internship, pool)
        })
        .collect();

    Ok(allocations)
}
