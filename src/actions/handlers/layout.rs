//! layout action handler (mirror, toggle, placement, reset, off)

use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::handlers::common::query_displays;
use crate::actions::result::ActionResult;
use crate::display;
use crate::layout::{self, Layout};
use crate::tool;

/// execute a layout action
///
/// nothing is sent to the display tool unless selection and argument
/// building both succeed
pub fn execute(layout: Layout, ctx: &ExecutionContext) -> Result<ActionResult, ActionError> {
    let displays = query_displays(ctx)?;

    let selection = if layout.requires_target() {
        display::resolve(&displays, &ctx.overrides)?.into()
    } else {
        display::resolve_optional_target(&displays, &ctx.overrides)?
    };
    let args = layout::build(layout, &selection)?;
    let (primary, target) = (selection.primary, selection.target);

    if ctx.verbose {
        match target {
            Some(t) => eprintln!("Primary: {}, target: {}", primary.id, t.id),
            None => eprintln!("Primary: {}, no target", primary.id),
        }
    }

    let program = ctx.tool.program();
    let target_id = target.map(|t| t.id.as_str());

    if ctx.dry_run {
        return Ok(ActionResult::layout(
            layout.name(),
            &primary.id,
            target_id,
            program,
            args,
            None,
        ));
    }

    if ctx.verbose {
        eprintln!("Running: {}", tool::command_line(program, &args));
    }
    let code = ctx.tool.apply(&args)?;
    if ctx.verbose && code != 0 {
        eprintln!("{} exited with status {}", program, code);
    }

    Ok(ActionResult::layout(
        layout.name(),
        &primary.id,
        target_id,
        program,
        args,
        Some(code),
    ))
}
