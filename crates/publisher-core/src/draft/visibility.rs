use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::{AspectId, VisibilityScope};

/// Submission value for the "all aspects" scope.
pub const ALL_ASPECTS_VALUE: &str = "all_aspects";
/// Submission value for the public scope.
pub const PUBLIC_VALUE: &str = "public";

/// Entry picked in the audience selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityTarget {
    AllAspects,
    Public,
    Aspect(AspectId),
}

/// Icon shown next to the audience selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityIcon {
    Lock,
    Globe,
}

impl VisibilityScope {
    /// Scope after the user picks `target`.
    ///
    /// `AllAspects` and `Public` replace whatever was selected. An aspect is
    /// added to the current specific set, or removed if already present;
    /// removing the last one falls back to `AllAspects`.
    pub fn toggled(&self, target: VisibilityTarget) -> VisibilityScope {
        match (self, target) {
            (_, VisibilityTarget::AllAspects) => VisibilityScope::AllAspects,
            (_, VisibilityTarget::Public) => VisibilityScope::Public,
            (VisibilityScope::SpecificAspects(selected), VisibilityTarget::Aspect(id)) => {
                let mut selected = selected.clone();
                if !selected.remove(&id) {
                    selected.insert(id);
                }
                if selected.is_empty() {
                    VisibilityScope::AllAspects
                } else {
                    VisibilityScope::SpecificAspects(selected)
                }
            }
            (_, VisibilityTarget::Aspect(id)) => {
                VisibilityScope::SpecificAspects(BTreeSet::from([id]))
            }
        }
    }

    pub fn is_selected(&self, target: VisibilityTarget) -> bool {
        match (self, target) {
            (VisibilityScope::AllAspects, VisibilityTarget::AllAspects) => true,
            (VisibilityScope::Public, VisibilityTarget::Public) => true,
            (VisibilityScope::SpecificAspects(selected), VisibilityTarget::Aspect(id)) => {
                selected.contains(&id)
            }
            _ => false,
        }
    }

    /// Values submitted as `aspect_ids[]`. Never empty.
    pub fn form_values(&self) -> Vec<String> {
        match self {
            VisibilityScope::AllAspects => vec![ALL_ASPECTS_VALUE.to_string()],
            VisibilityScope::Public => vec![PUBLIC_VALUE.to_string()],
            VisibilityScope::SpecificAspects(selected) => {
                selected.iter().map(|id| id.to_string()).collect()
            }
        }
    }

    pub fn icon(&self) -> VisibilityIcon {
        match self {
            VisibilityScope::Public => VisibilityIcon::Globe,
            _ => VisibilityIcon::Lock,
        }
    }
}
