//! Mapping of Waitlist Service responses to signup outcomes.
//!
//! Shared by the browser and server clients so both agree on the contract.

use serde::Deserialize;

use super::error::WaitlistError;
use super::types::{DEFAULT_SUCCESS_MESSAGE, GENERIC_FAILURE_MESSAGE};

#[derive(Debug, Deserialize)]
struct AcceptedBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RejectedBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Whether the service accepted the request (any 2xx)
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a raw response into the success message or a `WaitlistError`.
///
/// A rejected response never fails to interpret: an unreadable body falls
/// back to `GENERIC_FAILURE_MESSAGE`. An accepted response must carry JSON.
pub fn interpret_response(status: u16, body: &str) -> Result<String, WaitlistError> {
    if !is_success_status(status) {
        let detail = serde_json::from_str::<RejectedBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .filter(|detail| !detail.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        return Err(WaitlistError::Rejected(detail));
    }

    let accepted: AcceptedBody =
        serde_json::from_str(body).map_err(|e| WaitlistError::Decode(e.to_string()))?;

    Ok(accepted
        .message
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
}
