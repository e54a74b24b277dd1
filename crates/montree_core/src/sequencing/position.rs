//! Insertion-point search for a work name inside an ordered area list.
//!
//! # Responsibility
//! - Rank candidate neighbours by fuzzy score, inserting after the best one.
//! - Fall back to keyword-category placement when no match is trustworthy.
//!
//! # Invariants
//! - The returned index is always within `0..=works.len()`.
//! - Ties keep the lowest index.
//! - Keyword rules are evaluated in table order; first hit wins.

use super::fuzzy;
use crate::model::curriculum::CurriculumWork;
use serde::{Deserialize, Serialize};

/// Best score below which ranked placement is not trusted.
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.2;
/// Curriculum length the default keyword ranges were authored against.
pub const DEFAULT_REFERENCE_LENGTH: usize = 100;

/// One keyword category: any term contained in the name selects `range`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub terms: Vec<String>,
    /// Half-open `[start, end)` index range; placement uses `start`.
    pub range: (usize, usize),
}

impl KeywordRule {
    pub fn new(terms: &[&str], range: (usize, usize)) -> Self {
        Self {
            terms: terms.iter().map(|term| term.to_lowercase()).collect(),
            range,
        }
    }

    fn matches(&self, lowered_name: &str) -> bool {
        self.terms
            .iter()
            .any(|term| !term.is_empty() && lowered_name.contains(term.to_lowercase().as_str()))
    }
}

/// How keyword range starts relate to the actual list length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeScaling {
    /// Use the authored start index, clamped to the list length.
    #[default]
    Fixed,
    /// Rescale the start from `reference_length` to the list length.
    Proportional,
}

/// Built-in keyword table for Montessori curricula.
pub fn default_keyword_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(&["pour", "transfer", "spoon", "tong", "scoop"], (0, 10)),
        KeywordRule::new(&["button", "zip", "snap", "lace", "bow", "dress"], (10, 20)),
        KeywordRule::new(&["wash", "clean", "polish", "fold", "sweep"], (20, 35)),
        KeywordRule::new(&["food", "cut", "slice", "peel", "prepare", "cook"], (35, 50)),
        KeywordRule::new(&["count", "number", "bead", "rod"], (0, 30)),
        KeywordRule::new(&["add", "subtract", "plus", "minus"], (30, 60)),
        KeywordRule::new(&["multiply", "divide", "stamp"], (60, 90)),
        KeywordRule::new(&["letter", "sound", "phonetic", "alphabet"], (0, 20)),
        KeywordRule::new(&["word", "read", "sentence", "story"], (40, 80)),
        KeywordRule::new(&["cylinder", "block", "tower", "stair"], (0, 15)),
        KeywordRule::new(&["color", "tablet", "shade"], (15, 25)),
        KeywordRule::new(&["geometry", "shape", "triangle", "square"], (25, 50)),
    ]
}

/// Placement policy: keyword table plus confidence and scaling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFinder {
    keyword_rules: Vec<KeywordRule>,
    low_confidence_threshold: f64,
    range_scaling: RangeScaling,
    reference_length: usize,
}

impl Default for PositionFinder {
    fn default() -> Self {
        Self::new(
            default_keyword_rules(),
            DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            RangeScaling::Fixed,
            DEFAULT_REFERENCE_LENGTH,
        )
    }
}

impl PositionFinder {
    pub fn new(
        keyword_rules: Vec<KeywordRule>,
        low_confidence_threshold: f64,
        range_scaling: RangeScaling,
        reference_length: usize,
    ) -> Self {
        Self {
            keyword_rules,
            low_confidence_threshold,
            range_scaling,
            reference_length: reference_length.max(1),
        }
    }

    /// Returns the index at which `work_name` should be inserted.
    pub fn find_position(&self, work_name: &str, works: &[CurriculumWork]) -> usize {
        if works.is_empty() {
            return 0;
        }

        let mut best_score = 0.0_f64;
        let mut best_index = works.len();
        for (index, work) in works.iter().enumerate() {
            let candidate = fuzzy::score(work_name, &work.name);
            if candidate > best_score {
                best_score = candidate;
                best_index = index + 1;
            }
        }

        if best_score >= self.low_confidence_threshold {
            return best_index;
        }

        self.keyword_position(work_name, works.len())
            .unwrap_or(works.len())
    }

    /// Keyword-category fallback, or `None` when no rule matches.
    pub fn keyword_position(&self, work_name: &str, len: usize) -> Option<usize> {
        let lowered = work_name.to_lowercase();
        let rule = self
            .keyword_rules
            .iter()
            .find(|rule| rule.matches(&lowered))?;

        let start = match self.range_scaling {
            RangeScaling::Fixed => rule.range.0,
            RangeScaling::Proportional => {
                let scaled = rule.range.0 as u128 * len as u128 / self.reference_length as u128;
                usize::try_from(scaled).unwrap_or(len)
            }
        };
        Some(start.min(len))
    }
}

/// Finds an insertion index using the built-in placement policy.
pub fn find_position(work_name: &str, works: &[CurriculumWork]) -> usize {
    PositionFinder::default().find_position(work_name, works)
}
