//! mirror planning: pick a target mode and horizontal scale so the target
//! shows the primary's picture with the primary's aspect

use crate::display::{Display, Mode};

use super::LayoutError;

/// computed parameters for a mirror command
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorPlan {
    /// mode applied to the primary, its current geometry
    pub primary_mode: String,
    /// mode chosen for the target
    pub target_mode: Mode,
    /// horizontal scale factor, vertical is always 1
    pub scale_x: f64,
}

impl MirrorPlan {
    /// `--scale` argument
    pub fn scale(&self) -> String {
        format!("{}x1", self.scale_x)
    }

    pub fn args(&self, primary: &str, target: &str) -> Vec<String> {
        vec![
            "--output".to_string(),
            primary.to_string(),
            "--mode".to_string(),
            self.primary_mode.clone(),
            "--output".to_string(),
            target.to_string(),
            "--mode".to_string(),
            self.target_mode.name(),
            "--scale".to_string(),
            self.scale(),
        ]
    }
}

/// plan a mirror of `primary` onto `target`
///
/// target mode preference: same aspect as the target's first mode and within
/// the primary's geometry, then anything within the primary's geometry, then
/// the target's first mode
pub fn plan_mirror(primary: &Display, target: &Display) -> Result<MirrorPlan, LayoutError> {
    let primary_native = first_mode(primary)?;
    let target_native = first_mode(target)?;
    let pratio = checked_aspect(primary, primary_native)?;
    checked_aspect(target, target_native)?;

    // an inactive primary has no geometry, its native mode stands in
    let (width, height) = primary
        .geometry()
        .unwrap_or((primary_native.width, primary_native.height));

    let in_bounds: Vec<&Mode> = target
        .modes
        .iter()
        .filter(|m| m.width > 0 && m.height > 0)
        .filter(|m| m.fits_within(width, height))
        .collect();
    let same_aspect = in_bounds.iter().find(|m| m.same_aspect(target_native));

    let chosen = same_aspect
        .or_else(|| in_bounds.first())
        .copied()
        .unwrap_or(target_native);
    let tratio = checked_aspect(target, chosen)?;

    Ok(MirrorPlan {
        primary_mode: format!("{}x{}", width, height),
        target_mode: chosen.clone(),
        scale_x: pratio / tratio,
    })
}

fn first_mode(display: &Display) -> Result<&Mode, LayoutError> {
    display
        .modes
        .first()
        .ok_or_else(|| LayoutError::invalid_mode_data(&display.id, "no modes listed"))
}

fn checked_aspect(display: &Display, mode: &Mode) -> Result<f64, LayoutError> {
    if mode.width == 0 || mode.height == 0 {
        return Err(LayoutError::invalid_mode_data(
            &display.id,
            format!("degenerate mode {}", mode.name()),
        ));
    }
    mode.aspect()
        .ok_or_else(|| LayoutError::invalid_mode_data(&display.id, "degenerate aspect ratio"))
}
