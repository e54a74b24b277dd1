//! Area label and work name canonicalization.
//!
//! # Responsibility
//! - Map free-text area labels into one canonical key space.
//! - Provide the single work-name canonical form used for exact matching.
//! - Resolve display metadata for known areas.
//!
//! # Invariants
//! - `math` always resolves to `mathematics`.
//! - Unknown labels pass through normalized, never rejected.
//! - Merge-time and frontier-time name comparison use `canonical_work_name`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const BUILTIN_AREA_ALIASES: &[(&str, &str)] = &[
    ("math", "mathematics"),
    ("maths", "mathematics"),
    ("culture", "cultural"),
    ("culture_and_science", "cultural"),
    ("practical", "practical_life"),
];

/// Display metadata for one area key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaDisplay {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

const AREA_CATALOG: &[(&str, AreaDisplay)] = &[
    (
        "practical_life",
        AreaDisplay {
            name: "Practical Life",
            icon: "🧹",
            color: "#DB2777",
        },
    ),
    (
        "sensorial",
        AreaDisplay {
            name: "Sensorial",
            icon: "👁️",
            color: "#7C3AED",
        },
    ),
    (
        "mathematics",
        AreaDisplay {
            name: "Mathematics",
            icon: "🔢",
            color: "#2563EB",
        },
    ),
    (
        "language",
        AreaDisplay {
            name: "Language",
            icon: "📖",
            color: "#059669",
        },
    ),
    (
        "cultural",
        AreaDisplay {
            name: "Cultural",
            icon: "🌍",
            color: "#D97706",
        },
    ),
];

const FALLBACK_ICON: &str = "📋";
const FALLBACK_COLOR: &str = "#888";

/// Lower-cases, trims and joins whitespace runs with `_`, without aliasing.
pub fn slug_area_label(label: &str) -> String {
    WHITESPACE_RE
        .replace_all(label.trim(), "_")
        .to_lowercase()
}

/// Normalizes an area label using the built-in alias table only.
pub fn normalize_area_key(label: &str) -> String {
    let slug = slug_area_label(label);
    builtin_alias(&slug).map_or(slug, str::to_string)
}

/// Canonical form for exact work-name comparison.
///
/// Trims, lower-cases and collapses internal whitespace to a single space.
pub fn canonical_work_name(name: &str) -> String {
    WHITESPACE_RE.replace_all(name.trim(), " ").to_lowercase()
}

/// Display metadata for a canonical key, if it is a catalog area.
pub fn known_area_display(key: &str) -> Option<AreaDisplay> {
    AREA_CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, display)| *display)
}

/// Display name, icon and color for any key, with a neutral fallback.
pub fn area_display(key: &str) -> (String, String, String) {
    match known_area_display(key) {
        Some(display) => (
            display.name.to_string(),
            display.icon.to_string(),
            display.color.to_string(),
        ),
        None => (
            key.to_string(),
            FALLBACK_ICON.to_string(),
            FALLBACK_COLOR.to_string(),
        ),
    }
}

/// Area value safe for log events: catalog keys pass through, anything
/// else is reported as `custom`.
pub fn log_area_key(key: &str) -> &str {
    if known_area_display(key).is_some() {
        key
    } else {
        "custom"
    }
}

/// Catalog position used to order areas; unknown areas sort last.
pub fn catalog_rank(key: &str) -> usize {
    AREA_CATALOG
        .iter()
        .position(|(candidate, _)| *candidate == key)
        .unwrap_or(AREA_CATALOG.len())
}

fn builtin_alias(slug: &str) -> Option<&'static str> {
    BUILTIN_AREA_ALIASES
        .iter()
        .find(|(alias, _)| *alias == slug)
        .map(|(_, key)| *key)
}

/// Area normalizer with optional extra aliases layered over the built-ins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaKeyNormalizer {
    extra_aliases: BTreeMap<String, String>,
}

impl AreaKeyNormalizer {
    /// Builds a normalizer from configured aliases.
    ///
    /// Alias sources and targets are slugged so configuration may use any
    /// casing or spacing. Entries shadowing a built-in alias are ignored.
    pub fn with_aliases(aliases: &BTreeMap<String, String>) -> Self {
        let extra_aliases = aliases
            .iter()
            .map(|(from, to)| (slug_area_label(from), normalize_area_key(to)))
            .filter(|(from, _)| builtin_alias(from).is_none())
            .collect();
        Self { extra_aliases }
    }

    pub fn normalize(&self, label: &str) -> String {
        let slug = slug_area_label(label);
        if let Some(key) = builtin_alias(&slug) {
            return key.to_string();
        }
        match self.extra_aliases.get(&slug) {
            Some(key) => key.clone(),
            None => slug,
        }
    }
}
