//! primary/target selection over a parsed DisplayMap

use std::collections::BTreeMap;
use std::fmt;

use strsim::levenshtein;

use super::{Display, DisplayMap};

/// maximum edit distance for "did you mean" suggestions
const SUGGESTION_DISTANCE: usize = 3;
const MAX_SUGGESTIONS: usize = 3;

/// explicit display choices, from CLI flags or config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub primary: Option<String>,
    pub target: Option<String>,
}

impl Overrides {
    pub fn new(primary: Option<String>, target: Option<String>) -> Self {
        Self { primary, target }
    }

    /// replace alias names with the output ids they stand for
    pub fn resolve_aliases(self, aliases: &BTreeMap<String, String>) -> Self {
        let lookup = |name: Option<String>| {
            name.map(|n| aliases.get(&n).cloned().unwrap_or(n))
        };
        Self {
            primary: lookup(self.primary),
            target: lookup(self.target),
        }
    }
}

/// which side of the pair an identifier was meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Target,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Primary => write!(f, "primary"),
            Role::Target => write!(f, "target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no displays detected")]
    NoDisplays,
    #[error("no primary display detected")]
    NoPrimary,
    #[error("no target display detected")]
    NoTarget,
    #[error("requested {role} display not found: {id}")]
    DisplayNotFound {
        role: Role,
        id: String,
        /// similarly named outputs from the report
        suggestions: Vec<String>,
    },
}

/// resolved pair, target may be absent only for optional-target resolution
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub primary: &'a Display,
    pub target: Option<&'a Display>,
}

/// resolved pair where both sides are required
#[derive(Debug, Clone, Copy)]
pub struct Pair<'a> {
    pub primary: &'a Display,
    pub target: &'a Display,
}

impl<'a> From<Pair<'a>> for Selection<'a> {
    fn from(pair: Pair<'a>) -> Self {
        Selection {
            primary: pair.primary,
            target: Some(pair.target),
        }
    }
}

/// resolve primary and target, failing when no target can be found
pub fn resolve<'a>(map: &'a DisplayMap, overrides: &Overrides) -> Result<Pair<'a>, SelectError> {
    let selection = resolve_optional_target(map, overrides)?;
    let target = selection.target.ok_or(SelectError::NoTarget)?;
    Ok(Pair {
        primary: selection.primary,
        target,
    })
}

/// resolve primary and, if one exists, a target
///
/// - primary: override, else the first display with index 0
/// - target: override, else the first connected display that is not the primary
/// - an override naming an unknown output fails with DisplayNotFound
pub fn resolve_optional_target<'a>(
    map: &'a DisplayMap,
    overrides: &Overrides,
) -> Result<Selection<'a>, SelectError> {
    if map.is_empty() {
        return Err(SelectError::NoDisplays);
    }

    let primary = match &overrides.primary {
        Some(id) => lookup(map, id, Role::Primary)?,
        None => map
            .iter()
            .find(|d| d.index == 0)
            .ok_or(SelectError::NoPrimary)?,
    };

    let target = match &overrides.target {
        Some(id) => Some(lookup(map, id, Role::Target)?),
        None => map.iter().find(|d| d.id != primary.id && d.connected),
    };

    Ok(Selection { primary, target })
}

fn lookup<'a>(map: &'a DisplayMap, id: &str, role: Role) -> Result<&'a Display, SelectError> {
    map.get(id).ok_or_else(|| SelectError::DisplayNotFound {
        role,
        id: id.to_string(),
        suggestions: suggest(map, id),
    })
}

/// output names close to the requested one, nearest first
fn suggest(map: &DisplayMap, id: &str) -> Vec<String> {
    let wanted = id.to_lowercase();
    let mut scored: Vec<(usize, &str)> = map
        .ids()
        .map(|candidate| (levenshtein(&wanted, &candidate.to_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
