//! common utilities for action handlers

use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::display::{self, DisplayMap};

/// query the display tool and parse its report
pub fn query_displays(ctx: &ExecutionContext) -> Result<DisplayMap, ActionError> {
    if ctx.verbose {
        eprintln!("Querying {}...", ctx.tool.program());
    }

    let report = ctx.tool.query().map_err(ActionError::query)?;
    let displays = display::parse(&report)?;

    if ctx.verbose {
        eprintln!("Parsed {} outputs:", displays.len());
        for d in &displays {
            eprintln!("  {}", d.describe());
        }
    }

    Ok(displays)
}
