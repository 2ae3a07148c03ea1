use crate::gateway::{DeleteOutcome, FunctionDeleter};
use crate::models::ResolvedTarget;
use log::warn;
use std::io::Write;

/// Deletes every target in order and returns how many deletions were attempted.
///
/// A failed deletion is reported and the remaining targets are still tried.
pub fn dispatch(
    targets: &[ResolvedTarget],
    deleter: &dyn FunctionDeleter,
    out: &mut dyn Write,
) -> usize {
    let mut attempted = 0;
    for target in targets {
        // Output is best-effort; a closed stdout must not stop the deletions.
        let _ = writeln!(out, "Deleting: {}.", target.name);
        attempted += 1;

        let line = match deleter.delete_function(&target.gateway_url, &target.name) {
            Ok(DeleteOutcome::Removed) => "Removing old function.".to_owned(),
            Ok(DeleteOutcome::NotFound) => "No existing function to remove".to_owned(),
            Ok(DeleteOutcome::Unexpected { status, body }) => {
                warn!("unexpected status {} deleting {}", status, target.name);
                format!("Server returned unexpected status code {} {}", status, body)
            }
            Err(e) => {
                warn!("failed to delete {}: {}", target.name, e);
                format!(
                    "Error removing existing function: {}, gateway={}, functionName={}",
                    e, target.gateway_url, target.name
                )
            }
        };
        let _ = writeln!(out, "{}", line);
    }
    attempted
}
