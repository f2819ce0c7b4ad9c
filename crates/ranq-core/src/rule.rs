//! Priority rules and their matching predicates
//!
//! A rule kind selects which predicate fires against an item and the base
//! score it contributes; the rule's position in the priority list determines
//! its weight (see `rank`). The set of kinds is closed, but data that names
//! a kind we don't recognize degrades to a scoring no-op instead of failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RanqError;
use crate::item::Item;

/// The closed set of matching criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Item name equals the query exactly
    ExactName,
    /// Item name contains the query as a substring
    PartialName,
    /// At least one tag contains the query as a substring
    TagMatch,
    /// Item text contains the query as a substring
    TextMatch,
    /// Unrecognized kind from external data; never matches, scores nothing
    Unknown,
}

impl RuleKind {
    /// All recognized kinds, in default priority order.
    pub const KNOWN: [RuleKind; 4] = [
        RuleKind::ExactName,
        RuleKind::PartialName,
        RuleKind::TagMatch,
        RuleKind::TextMatch,
    ];

    /// Fixed per-kind base score, before positional weighting.
    pub fn base_value(self) -> f64 {
        match self {
            RuleKind::ExactName => 10.0,
            RuleKind::PartialName => 5.0,
            RuleKind::TagMatch => 3.0,
            RuleKind::TextMatch => 2.0,
            RuleKind::Unknown => 0.0,
        }
    }

    /// Case-insensitive predicate for this kind.
    ///
    /// `query` must already be trimmed and lowercased by the caller; item
    /// fields are folded here.
    pub fn matches(self, item: &Item, query: &str) -> bool {
        match self {
            RuleKind::ExactName => item.name.to_lowercase() == query,
            RuleKind::PartialName => item.name.to_lowercase().contains(query),
            RuleKind::TagMatch => item
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query)),
            RuleKind::TextMatch => item.text.to_lowercase().contains(query),
            RuleKind::Unknown => false,
        }
    }

    /// Lenient parse: unrecognized ids map to `Unknown`.
    ///
    /// Used when deserializing priority lists, where forward compatibility
    /// matters. For user-typed input, use `FromStr`, which rejects typos.
    pub fn from_id(id: &str) -> RuleKind {
        match id {
            "exact-name" => RuleKind::ExactName,
            "partial-name" => RuleKind::PartialName,
            "tag-match" => RuleKind::TagMatch,
            "text-match" => RuleKind::TextMatch,
            _ => RuleKind::Unknown,
        }
    }

    /// Kebab-case identifier, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::ExactName => "exact-name",
            RuleKind::PartialName => "partial-name",
            RuleKind::TagMatch => "tag-match",
            RuleKind::TextMatch => "text-match",
            RuleKind::Unknown => "unknown",
        }
    }

    /// Default display label for this kind.
    pub fn default_label(self) -> &'static str {
        match self {
            RuleKind::ExactName => "Exact name match",
            RuleKind::PartialName => "Partial name match",
            RuleKind::TagMatch => "Tag match",
            RuleKind::TextMatch => "Text content match",
            RuleKind::Unknown => "Unknown rule",
        }
    }
}

impl FromStr for RuleKind {
    type Err = RanqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match RuleKind::from_id(s) {
            RuleKind::Unknown => Err(RanqError::UnknownRuleKind(s.to_string())),
            kind => Ok(kind),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Manual impl rather than derive: unrecognized kinds must deserialize to
// `Unknown`, not fail the whole document.
impl<'de> Deserialize<'de> for RuleKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        Ok(RuleKind::from_id(&id))
    }
}

/// A named matching criterion with a position-dependent weight contribution.
///
/// `label` is presentation-only; scoring keys entirely off `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRule {
    #[serde(rename = "id")]
    pub kind: RuleKind,
    pub label: String,
}

impl PriorityRule {
    /// Create a rule with the default label for its kind.
    pub fn new(kind: RuleKind) -> Self {
        PriorityRule {
            kind,
            label: kind.default_label().to_string(),
        }
    }

    /// The default priority order: exact-name, partial-name, tag-match,
    /// text-match.
    pub fn defaults() -> Vec<PriorityRule> {
        RuleKind::KNOWN.iter().copied().map(PriorityRule::new).collect()
    }
}
