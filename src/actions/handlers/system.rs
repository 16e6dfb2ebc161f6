//! system action handlers (version)

use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::result::ActionResult;
use crate::version::Version;

/// execute version action
pub fn execute_version(_ctx: &ExecutionContext) -> Result<ActionResult, ActionError> {
    let version = Version::current();

    Ok(ActionResult::simple(
        "version",
        serde_json::json!({
            "semver": version.semver,
            "commit": version.short_commit,
            "channel": version.channel,
            "timestamp": version.timestamp.to_rfc3339(),
            "build_date": version.build_date.to_rfc3339(),
            "dirty": version.dirty,
            "version_string": version.version_string(),
        }),
    ))
}
