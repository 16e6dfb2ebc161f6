//! display model built from the display tool's report

pub mod parser;
pub mod select;

use serde::Serialize;

pub use parser::{parse, ParseError};
pub use select::{resolve, resolve_optional_target, Overrides, Pair, Role, SelectError, Selection};

/// a mode supported by an output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub interlaced: bool,
    /// trailing part of a user-added mode name, e.g. "_60.00"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    /// refresh rates as printed in the report (e.g. "60.00")
    pub rates: Vec<String>,
    /// the output is currently driving this mode
    pub current: bool,
    /// the output advertises this mode as preferred
    pub preferred: bool,
}

impl Mode {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            interlaced: false,
            suffix: String::new(),
            rates: Vec::new(),
            current: false,
            preferred: false,
        }
    }

    /// mode name as accepted by `--mode`
    pub fn name(&self) -> String {
        let scan = if self.interlaced { "i" } else { "" };
        format!("{}x{}{}{}", self.width, self.height, scan, self.suffix)
    }

    /// width / height, None for a zero height
    pub fn aspect(&self) -> Option<f64> {
        if self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }

    /// exact aspect comparison without going through floats
    pub fn same_aspect(&self, other: &Mode) -> bool {
        self.width as u64 * other.height as u64 == other.width as u64 * self.height as u64
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width <= width && self.height <= height
    }
}

/// one output from the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Display {
    /// output name, e.g. "HDMI-1"
    pub id: String,
    pub connected: bool,
    /// the output is currently driving one of its modes
    pub native: bool,
    /// marked `primary` by the display tool
    pub primary: bool,
    /// ordinal of the output in report order
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    pub modes: Vec<Mode>,
}

impl Display {
    /// a disconnected output with no geometry and no modes
    pub fn new(id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            connected: false,
            native: false,
            primary: false,
            index,
            width: None,
            height: None,
            x: None,
            y: None,
            modes: Vec::new(),
        }
    }

    /// current width and height, present only while the output is active
    pub fn geometry(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    pub fn describe(&self) -> String {
        let state = if self.connected {
            "connected"
        } else {
            "disconnected"
        };
        let geometry = match (self.geometry(), self.x, self.y) {
            (Some((w, h)), Some(x), Some(y)) => format!(" {}x{}+{}+{}", w, h, x, y),
            (Some((w, h)), _, _) => format!(" {}x{}", w, h),
            _ => String::new(),
        };
        let primary_marker = if self.primary { " (primary)" } else { "" };
        format!(
            "{} [{}]: {}{}{}, {} modes",
            self.id,
            self.index,
            state,
            geometry,
            primary_marker,
            self.modes.len()
        )
    }
}

/// displays keyed by output name, in report order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayMap {
    displays: Vec<Display>,
}

impl DisplayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// append a display, returns false (and drops it) if the id is taken
    pub fn insert(&mut self, display: Display) -> bool {
        if self.contains(&display.id) {
            return false;
        }
        self.displays.push(display);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Display> {
        self.displays.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Display> {
        self.displays.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.displays.iter().map(|d| d.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

impl FromIterator<Display> for DisplayMap {
    fn from_iter<I: IntoIterator<Item = Display>>(iter: I) -> Self {
        let mut map = DisplayMap::new();
        for display in iter {
            map.insert(display);
        }
        map
    }
}

impl<'a> IntoIterator for &'a DisplayMap {
    type Item = &'a Display;
    type IntoIter = std::slice::Iter<'a, Display>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
