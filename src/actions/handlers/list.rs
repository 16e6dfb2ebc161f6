//! list action handler

use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::handlers::common::query_displays;
use crate::actions::result::ActionResult;

/// execute list displays action
pub fn execute(all: bool, ctx: &ExecutionContext) -> Result<ActionResult, ActionError> {
    let displays = query_displays(ctx)?;

    let items = displays
        .iter()
        .filter(|d| all || d.connected)
        .cloned()
        .collect();

    Ok(ActionResult::list(items))
}
