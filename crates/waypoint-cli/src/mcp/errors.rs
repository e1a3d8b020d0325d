//! Error handling utilities for MCP server

use rmcp::ErrorData;
use waypoint_core::TripError;

/// Converts a companion error into an MCP error.
///
/// Errors the caller can fix by changing the request (bad index or time, an
/// unknown trip, a pending decision) are reported as invalid parameters; the
/// rest are internal errors.
pub fn to_mcp_error(message: &str, error: &TripError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        TripError::OutOfRange { .. }
        | TripError::StaleResolution { .. }
        | TripError::ResolutionPending { .. }
        | TripError::NoPendingResolution { .. }
        | TripError::TripNotFound { .. }
        | TripError::SessionNotFound { .. }
        | TripError::NoActiveTrip
        | TripError::InvalidInput { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_user_errors_are_invalid_params() {
        let err = to_mcp_error("Failed to toggle plan", &TripError::NoActiveTrip);
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.starts_with("Failed to toggle plan: No active trip"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = to_mcp_error(
            "Failed to list trips",
            &TripError::Configuration {
                message: "broken catalog".to_string(),
            },
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
