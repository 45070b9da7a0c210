//! Narrow seam around external archiver subprocesses.
//!
//! All subprocess invocations in the crate go through [`run_tool`], so the
//! pipeline only depends on "run these argv, succeed iff exit status 0".
//! This keeps the door open for swapping a format over to an in-process
//! codec later without touching pipeline logic.
//!
//! No timeout is applied: a hung external tool blocks the whole run. Callers
//! that need a deadline must wrap the invocation themselves.

use std::process::Command;

use tracing::debug;

use crate::error::StampackError;

/// Runs `cmd` to completion, blocking the current thread.
///
/// Returns `Ok(())` only if the process spawned and exited with status 0.
/// A spawn failure and a nonzero exit are reported as distinct errors.
pub(crate) fn run_tool(tool: &'static str, cmd: &mut Command) -> Result<(), StampackError> {
    debug!(tool, args = ?cmd.get_args().collect::<Vec<_>>(), "running external tool");

    let status = cmd
        .status()
        .map_err(|source| StampackError::ToolSpawn { tool, source })?;

    if !status.success() {
        return Err(StampackError::ToolFailed { tool, status });
    }
    Ok(())
}
