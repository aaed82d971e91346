//! # Suggestion Ranking
//!
//! The recommendation service returns one equipment list per sport a facility
//! supports. Before display these lists are:
//!
//! 1. **Merged**: flattened in input order, keeping only the first suggestion
//!    seen for each equipment id. Later duplicates are dropped as-is, never
//!    re-scored.
//! 2. **Ranked**: stably sorted by descending score, so equal scores keep
//!    their merged order.
//! 3. **Resolved**: joined with the facility's equipment catalog. Suggestions
//!    for equipment the catalog does not contain are dropped silently.
//!
//! Selection state is not tracked here; callers keep their own set of
//! selected ids.

use std::{cmp::Ordering, collections::HashSet};

use serde::{Deserialize, Serialize};
use sportslink_core::models::{
    equipment::EquipmentItem,
    suggestion::{EquipmentSuggestion, FacilitySuggestion, OwnerSuggestion},
};
use tracing::debug;

use crate::config::BookingConfig;

/// Scores strictly above this are "Highly Recommended".
pub const HIGHLY_RECOMMENDED_SCORE: f64 = 80.0;

/// Facility suggestions at or above this are a "Top Match!".
pub const TOP_MATCH_SCORE: f64 = 80.0;

/// Facility suggestions at or above this are "Recommended".
pub const RECOMMENDED_SCORE: f64 = 60.0;

pub fn merge_suggestions<I, L>(per_sport_lists: I) -> Vec<EquipmentSuggestion>
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = EquipmentSuggestion>,
{
    let mut seen = HashSet::new();
    per_sport_lists
        .into_iter()
        .flatten()
        .filter(|suggestion| seen.insert(suggestion.equipment_id))
        .collect()
}

/// NaN scores sort after every real score. `-0.0` and `0.0` compare equal.
fn descending(a: f64, b: f64) -> Ordering {
    let key = |score: f64| {
        if score.is_nan() {
            f64::NEG_INFINITY
        } else if score == 0.0 {
            0.0
        } else {
            score
        }
    };
    key(b).total_cmp(&key(a))
}

pub fn rank_by_score(mut suggestions: Vec<EquipmentSuggestion>) -> Vec<EquipmentSuggestion> {
    suggestions.sort_by(|a, b| descending(a.score, b.score));
    suggestions
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSuggestion {
    pub equipment: EquipmentItem,
    pub suggestion: EquipmentSuggestion,
}

/// Inner join on `equipment_id == item.id`, preserving suggestion order.
pub fn resolve_against_catalog(
    suggestions: Vec<EquipmentSuggestion>,
    catalog: &[EquipmentItem],
) -> Vec<ResolvedSuggestion> {
    suggestions
        .into_iter()
        .filter_map(|suggestion| {
            match catalog.iter().find(|item| item.id == suggestion.equipment_id) {
                Some(equipment) => Some(ResolvedSuggestion {
                    equipment: equipment.clone(),
                    suggestion,
                }),
                None => {
                    debug!(
                        equipment_id = suggestion.equipment_id,
                        "dropping suggestion for equipment missing from catalog"
                    );
                    None
                }
            }
        })
        .collect()
}

pub fn is_highly_recommended(score: f64) -> bool {
    score > HIGHLY_RECOMMENDED_SCORE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionBadge {
    HighlyRecommended,
    Suggested,
}

impl SuggestionBadge {
    /// The boundary is exclusive: a score equal to `threshold` is only "Suggested".
    pub fn for_score(score: f64, threshold: f64) -> Self {
        if score > threshold {
            SuggestionBadge::HighlyRecommended
        } else {
            SuggestionBadge::Suggested
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuggestionBadge::HighlyRecommended => "Highly Recommended",
            SuggestionBadge::Suggested => "Suggested",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityBadge {
    TopMatch,
    Recommended,
}

impl FacilityBadge {
    pub fn for_score(score: f64) -> Option<Self> {
        if score >= TOP_MATCH_SCORE {
            Some(FacilityBadge::TopMatch)
        } else if score >= RECOMMENDED_SCORE {
            Some(FacilityBadge::Recommended)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacilityBadge::TopMatch => "Top Match!",
            FacilityBadge::Recommended => "Recommended",
        }
    }
}

pub fn rank_facility_suggestions(mut suggestions: Vec<FacilitySuggestion>) -> Vec<FacilitySuggestion> {
    suggestions.sort_by(|a, b| descending(a.score, b.score));
    suggestions
}

/// High priority first; within a priority, larger potential revenue first and
/// suggestions without an estimate last.
pub fn rank_owner_suggestions(mut suggestions: Vec<OwnerSuggestion>) -> Vec<OwnerSuggestion> {
    suggestions.sort_by(|a, b| {
        a.priority.cmp(&b.priority).then_with(|| {
            match (a.potential_revenue, b.potential_revenue) {
                (Some(a), Some(b)) => descending(a, b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        })
    });
    suggestions
}

/// Merge, rank and resolve in one step, with a configurable badge threshold.
#[derive(Debug, Clone, Copy)]
pub struct EquipmentSuggestionRanker {
    highly_recommended_score: f64,
}

impl Default for EquipmentSuggestionRanker {
    fn default() -> Self {
        Self {
            highly_recommended_score: HIGHLY_RECOMMENDED_SCORE,
        }
    }
}

impl EquipmentSuggestionRanker {
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            highly_recommended_score: config.highly_recommended_score,
        }
    }

    pub fn rank<I, L>(&self, per_sport_lists: I, catalog: &[EquipmentItem]) -> Vec<ResolvedSuggestion>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = EquipmentSuggestion>,
    {
        let merged = merge_suggestions(per_sport_lists);
        let ranked = rank_by_score(merged);
        resolve_against_catalog(ranked, catalog)
    }

    pub fn badge(&self, suggestion: &EquipmentSuggestion) -> SuggestionBadge {
        SuggestionBadge::for_score(suggestion.score, self.highly_recommended_score)
    }
}
