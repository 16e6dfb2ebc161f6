//! layout builders - turn a resolved display pair into display tool arguments
//!
//! builders are pure: they never run the tool, so every argument list can be
//! checked before anything touches the screen

mod mirror;

pub use mirror::{plan_mirror, MirrorPlan};

use crate::display::{Display, Selection};

/// positional relation flag understood by the display tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    LeftOf,
    RightOf,
    Above,
    Below,
}

impl Relation {
    pub fn flag(&self) -> &'static str {
        match self {
            Relation::LeftOf => "--left-of",
            Relation::RightOf => "--right-of",
            Relation::Above => "--above",
            Relation::Below => "--below",
        }
    }
}

/// where to put the target relative to the primary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
    Above,
    Below,
}

impl Direction {
    pub fn relation(&self) -> Relation {
        match self {
            Direction::Left => Relation::LeftOf,
            Direction::Right => Relation::RightOf,
            Direction::Top | Direction::Above => Relation::Above,
            Direction::Bottom | Direction::Below => Relation::Below,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Above => "above",
            Direction::Below => "below",
        }
    }
}

/// layout operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mirror,
    Toggle,
    Place(Direction),
    Reset,
    Off,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Mirror => "mirror",
            Layout::Toggle => "toggle",
            Layout::Place(direction) => direction.name(),
            Layout::Reset => "reset",
            Layout::Off => "off",
        }
    }

    /// reset works without a second display, everything else needs a pair
    pub fn requires_target(&self) -> bool {
        !matches!(self, Layout::Reset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("I don't understand the current state of {primary} and {target} -- try 'xit reset' first")]
    AmbiguousState { primary: String, target: String },
    #[error("invalid mode data for {display}: {reason}")]
    InvalidModeData { display: String, reason: String },
    #[error("{layout} needs a target display")]
    MissingTarget { layout: &'static str },
}

impl LayoutError {
    pub fn invalid_mode_data(display: &str, reason: impl Into<String>) -> Self {
        Self::InvalidModeData {
            display: display.to_string(),
            reason: reason.into(),
        }
    }
}

/// build the argument list for a layout over a resolved selection
pub fn build(layout: Layout, selection: &Selection) -> Result<Vec<String>, LayoutError> {
    let primary = selection.primary;
    let Some(target) = selection.target else {
        return match layout {
            Layout::Reset => Ok(reset(None)),
            _ => Err(LayoutError::MissingTarget {
                layout: layout.name(),
            }),
        };
    };

    match layout {
        Layout::Mirror => mirror(primary, target),
        Layout::Toggle => toggle(primary, target),
        Layout::Place(direction) => Ok(place(primary, target, direction.relation())),
        Layout::Reset => Ok(reset(Some(target))),
        Layout::Off => Ok(off(primary, target)),
    }
}

pub fn mirror(primary: &Display, target: &Display) -> Result<Vec<String>, LayoutError> {
    Ok(plan_mirror(primary, target)?.args(&primary.id, &target.id))
}

/// switch to whichever of the two outputs is currently dark
pub fn toggle(primary: &Display, target: &Display) -> Result<Vec<String>, LayoutError> {
    match (primary.native, target.native) {
        (false, true) => Ok(args(&[
            "--output",
            &primary.id,
            "--auto",
            "--output",
            &target.id,
            "--off",
        ])),
        (true, false) => Ok(args(&[
            "--output",
            &target.id,
            "--auto",
            "--output",
            &primary.id,
            "--off",
        ])),
        _ => Err(LayoutError::AmbiguousState {
            primary: primary.id.clone(),
            target: target.id.clone(),
        }),
    }
}

pub fn place(primary: &Display, target: &Display, relation: Relation) -> Vec<String> {
    args(&[
        "--output",
        &target.id,
        "--auto",
        relation.flag(),
        &primary.id,
    ])
}

pub fn reset(target: Option<&Display>) -> Vec<String> {
    match target {
        Some(target) => args(&["--auto", "--output", &target.id, "--off"]),
        None => args(&["--auto"]),
    }
}

pub fn off(primary: &Display, target: &Display) -> Vec<String> {
    args(&[
        "--output",
        &target.id,
        "--off",
        "--output",
        &primary.id,
        "--auto",
    ])
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
