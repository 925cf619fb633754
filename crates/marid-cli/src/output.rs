use anyhow::{Result, anyhow};
use marid_application::WorkflowResult;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Turns a workflow error into its display message.
pub fn user_facing<T>(result: WorkflowResult<T>) -> Result<T> {
    result.map_err(|e| anyhow!(e.user_message().to_string()))
}
