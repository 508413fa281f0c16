use serde::{Deserialize, Serialize};

use super::super::domain::{Candidate, GenderPolicy};
use super::super::normalizer::NormalizedResponse;

/// Constraint whose violation forces a score of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum HardGate {
    Gender {
        required: GenderPolicy,
        offered: GenderPolicy,
    },
    Accessibility,
}

impl HardGate {
    pub const fn label(self) -> &'static str {
        match self {
            HardGate::Gender { .. } => "gender",
            HardGate::Accessibility => "accessibility",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            HardGate::Gender { required, offered } => format!(
                "requires {} housing but the residence is {}",
                required.label(),
                offered.label()
            ),
            HardGate::Accessibility => {
                "requires accessible housing but the residence is not accessible".to_string()
            }
        }
    }
}

/// Gender is evaluated before accessibility; the first failing gate wins.
pub(crate) fn check(response: &NormalizedResponse, candidate: &Candidate) -> Option<HardGate> {
    let required = response.gender;
    let offered = candidate.gender_type;
    if !required.is_co_ed() && !offered.is_co_ed() && required != offered {
        return Some(HardGate::Gender { required, offered });
    }

    if response.accessibility_required && !candidate.is_accessible {
        return Some(HardGate::Accessibility);
    }

    None
}
