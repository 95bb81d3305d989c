//! Waitlist data model

use serde::{Deserialize, Serialize};

/// Shown when the form is submitted without an email
pub const MISSING_EMAIL_MESSAGE: &str = "Please enter a valid email.";

/// Shown when the service rejects a signup without a usable `detail`
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to join the waitlist right now.";

/// Shown when the service accepts a signup without a `message`
pub const DEFAULT_SUCCESS_MESSAGE: &str = "You're on the list! We'll be in touch soon.";

/// One of the four inputs of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Email,
    Name,
    Referrer,
    Notes,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::Email,
        SignupField::Name,
        SignupField::Referrer,
        SignupField::Notes,
    ];
}

/// JSON body sent to `POST /api/waitlist`
///
/// Optional fields are omitted from the body when empty, never sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SignupRequest {
    pub fn new(email: &str, name: &str, referrer: &str, notes: &str) -> Self {
        Self {
            email: email.to_string(),
            name: non_empty(name),
            referrer: non_empty(referrer),
            notes: non_empty(notes),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Outcome of a single submit attempt, held for display only
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(String),
    Error(String),
}

impl SubmissionResult {
    pub fn message(&self) -> &str {
        match self {
            SubmissionResult::Success(message) | SubmissionResult::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_only_email() {
        let request = SignupRequest::new("ada@example.com", "", "", "");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "email": "ada@example.com" })
        );
    }

    #[test]
    fn test_request_with_all_fields() {
        let request = SignupRequest::new("ada@example.com", "Ada", "Twitter", "Hi there");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "email": "ada@example.com",
                "name": "Ada",
                "referrer": "Twitter",
                "notes": "Hi there"
            })
        );
    }

    #[test]
    fn test_request_omits_each_empty_optional() {
        let request = SignupRequest::new("ada@example.com", "", "newsletter", "");
        let body = serde_json::to_value(&request).unwrap();
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(!object.contains_key("name"));
        assert!(!object.contains_key("notes"));
        assert_eq!(object["referrer"], "newsletter");
    }

    #[test]
    fn test_request_keeps_whitespace_values() {
        // Only the empty string counts as absent
        let request = SignupRequest::new("ada@example.com", " ", "", "");

        assert_eq!(request.name, Some(" ".to_string()));
    }

    #[test]
    fn test_submission_result_accessors() {
        let ok = SubmissionResult::Success("Welcome!".to_string());
        let err = SubmissionResult::Error("Nope".to_string());

        assert!(ok.is_success());
        assert_eq!(ok.message(), "Welcome!");
        assert!(!err.is_success());
        assert_eq!(err.message(), "Nope");
    }
}
