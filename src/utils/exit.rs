//! Process exit codes.

use anyhow::Result;

use crate::history::HistoryError;

/// Map the outcome of a picker run to a process exit code.
///
/// Any produced result, empty included, is a success. A history source that
/// cannot be located or read gets its own code so shell wrappers can tell
/// it apart from terminal failures.
pub fn exit_code(result: &Result<()>) -> u8 {
    let code = match result {
        Ok(()) => exitcode::OK,
        Err(e) if e.downcast_ref::<HistoryError>().is_some() => exitcode::NOINPUT,
        Err(_) => exitcode::SOFTWARE,
    };
    u8::try_from(code).unwrap_or(1)
}
