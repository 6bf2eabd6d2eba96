use crate::models::error::AppError;

/// Message logged when the agent connection is requested
pub const AGENT_PLACEHOLDER_NOTE: &str =
    "Autonomous agent integration is not available yet; connection request logged";

/// Connects to the autonomous agent. There is no agent protocol yet, so this
/// logs a note and completes immediately.
pub async fn connect_agent() -> Result<(), AppError> {
    gloo::console::log!(AGENT_PLACEHOLDER_NOTE);
    Ok(())
}
