//! Waitlist form controller
//!
//! Holds the four inputs, the in-flight flag and the last submission result.
//! A submission is split in two halves around the single network call so a
//! reactive view can keep the form inside a signal while the request is
//! pending:
//!
//! 1. [`SignupForm::begin_submit`] validates and marks the form as submitting
//! 2. [`SignupForm::finish_submit`] records the outcome and releases the flag
//!
//! [`SignupForm::submit`] runs both halves against a [`WaitlistService`].

use super::client::WaitlistService;
use super::error::WaitlistError;
use super::types::{SignupField, SignupRequest, SubmissionResult};

/// State of the waitlist signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    name: String,
    referrer: String,
    notes: String,
    submitting: bool,
    result: Option<SubmissionResult>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn field(&self, field: SignupField) -> &str {
        match field {
            SignupField::Email => &self.email,
            SignupField::Name => &self.name,
            SignupField::Referrer => &self.referrer,
            SignupField::Notes => &self.notes,
        }
    }

    /// Assign a field; no validation happens until submit
    pub fn update_field(&mut self, field: SignupField, value: impl Into<String>) {
        let slot = match field {
            SignupField::Email => &mut self.email,
            SignupField::Name => &mut self.name,
            SignupField::Referrer => &mut self.referrer,
            SignupField::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    /// Whether a request is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Result of the last submit attempt, if any
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Build the request body from the current fields.
    ///
    /// Only presence of the email is checked; its format is left to the
    /// service and to the browser's `type="email"` hint.
    pub fn to_request(&self) -> Result<SignupRequest, WaitlistError> {
        if self.email.is_empty() {
            return Err(WaitlistError::MissingEmail);
        }

        Ok(SignupRequest::new(
            &self.email,
            &self.name,
            &self.referrer,
            &self.notes,
        ))
    }

    /// Start a submission.
    ///
    /// Clears the previous result. Returns the request to send, or `None` when
    /// validation failed, in which case the error result is already set and
    /// nothing must be sent.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        self.result = None;

        match self.to_request() {
            Ok(request) => {
                self.submitting = true;
                Some(request)
            }
            Err(e) => {
                self.result = Some(SubmissionResult::Error(e.to_string()));
                None
            }
        }
    }

    /// Record the outcome of a submission started with `begin_submit`.
    ///
    /// Always releases the in-flight flag. Fields are cleared only on success.
    pub fn finish_submit(&mut self, outcome: Result<String, WaitlistError>) {
        self.submitting = false;

        self.result = Some(match outcome {
            Ok(message) => {
                self.clear_fields();
                SubmissionResult::Success(message)
            }
            Err(e) => SubmissionResult::Error(e.to_string()),
        });
    }

    /// Validate, send one request through `service` and record the outcome
    pub async fn submit<S: WaitlistService>(&mut self, service: &S) {
        let Some(request) = self.begin_submit() else {
            return;
        };

        let outcome = service.join(&request).await;
        self.finish_submit(outcome);
    }

    fn clear_fields(&mut self) {
        self.email.clear();
        self.name.clear();
        self.referrer.clear();
        self.notes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::waitlist::{
        DEFAULT_SUCCESS_MESSAGE, GENERIC_FAILURE_MESSAGE, MISSING_EMAIL_MESSAGE,
    };
    use std::cell::RefCell;

    /// Service that records requests and replies with a canned outcome
    struct RecordingService {
        outcome: Result<String, WaitlistError>,
        requests: RefCell<Vec<SignupRequest>>,
    }

    impl RecordingService {
        fn replying(outcome: Result<String, WaitlistError>) -> Self {
            Self {
                outcome,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl WaitlistService for RecordingService {
        async fn join(&self, request: &SignupRequest) -> Result<String, WaitlistError> {
            self.requests.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.update_field(SignupField::Email, "ada@example.com");
        form.update_field(SignupField::Name, "Ada Lovelace");
        form.update_field(SignupField::Referrer, "friend");
        form.update_field(SignupField::Notes, "Looking forward to it");
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = SignupForm::new();

        for field in SignupField::ALL {
            assert_eq!(form.field(field), "");
        }
        assert!(!form.is_submitting());
        assert!(form.result().is_none());
    }

    #[test]
    fn test_update_field_assigns_without_validation() {
        let mut form = SignupForm::new();
        form.update_field(SignupField::Email, "not-an-email");
        form.update_field(SignupField::Notes, String::from("multi\nline"));

        assert_eq!(form.field(SignupField::Email), "not-an-email");
        assert_eq!(form.field(SignupField::Notes), "multi\nline");
        assert!(form.result().is_none());
    }

    #[test]
    fn test_to_request_accepts_any_non_empty_email() {
        let mut form = SignupForm::new();
        form.update_field(SignupField::Email, "no at sign");

        let request = form.to_request().unwrap();
        assert_eq!(request.email, "no at sign");
        assert_eq!(request.name, None);
    }

    #[test]
    fn test_begin_submit_sets_flag_and_clears_result() {
        let mut form = filled_form();
        form.finish_submit(Err(WaitlistError::Transport("offline".to_string())));
        assert!(form.result().is_some());

        let request = form.begin_submit();

        assert!(request.is_some());
        assert!(form.is_submitting());
        assert!(form.result().is_none());
    }

    #[tokio::test]
    async fn test_empty_email_never_contacts_service() {
        let service = RecordingService::replying(Ok("Welcome!".to_string()));
        let mut form = SignupForm::new();
        form.update_field(SignupField::Name, "Ada");

        form.submit(&service).await;

        assert_eq!(service.calls(), 0);
        assert_eq!(
            form.result(),
            Some(&SubmissionResult::Error(MISSING_EMAIL_MESSAGE.to_string()))
        );
        assert!(!form.is_submitting());
        assert_eq!(form.field(SignupField::Name), "Ada");
    }

    #[tokio::test]
    async fn test_success_sets_message_and_resets_fields() {
        let service = RecordingService::replying(Ok("Welcome!".to_string()));
        let mut form = filled_form();

        form.submit(&service).await;

        assert_eq!(service.calls(), 1);
        assert_eq!(
            form.result(),
            Some(&SubmissionResult::Success("Welcome!".to_string()))
        );
        for field in SignupField::ALL {
            assert_eq!(form.field(field), "");
        }
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_sends_only_non_empty_fields() {
        let service = RecordingService::replying(Ok(DEFAULT_SUCCESS_MESSAGE.to_string()));
        let mut form = SignupForm::new();
        form.update_field(SignupField::Email, "ada@example.com");
        form.update_field(SignupField::Referrer, "newsletter");

        form.submit(&service).await;

        let requests = service.requests.borrow();
        assert_eq!(
            requests[0],
            SignupRequest {
                email: "ada@example.com".to_string(),
                name: None,
                referrer: Some("newsletter".to_string()),
                notes: None,
            }
        );
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields() {
        let service = RecordingService::replying(Err(WaitlistError::Rejected(
            "Email already registered".to_string(),
        )));
        let mut form = filled_form();

        form.submit(&service).await;

        assert_eq!(
            form.result(),
            Some(&SubmissionResult::Error(
                "Email already registered".to_string()
            ))
        );
        assert_eq!(form.field(SignupField::Email), "ada@example.com");
        assert_eq!(form.field(SignupField::Notes), "Looking forward to it");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_flag_released_for_every_outcome() {
        let outcomes = [
            Ok("Welcome!".to_string()),
            Err(WaitlistError::Rejected(GENERIC_FAILURE_MESSAGE.to_string())),
            Err(WaitlistError::Transport("connection refused".to_string())),
            Err(WaitlistError::Decode("expected value at line 1".to_string())),
        ];

        for outcome in outcomes {
            let service = RecordingService::replying(outcome);
            let mut form = filled_form();

            form.submit(&service).await;

            assert!(!form.is_submitting());
            assert!(form.result().is_some());
        }
    }

    #[tokio::test]
    async fn test_transport_error_uses_failure_text() {
        let service =
            RecordingService::replying(Err(WaitlistError::Transport("dns error".to_string())));
        let mut form = filled_form();

        form.submit(&service).await;

        assert_eq!(
            form.result(),
            Some(&SubmissionResult::Error("dns error".to_string()))
        );
    }

    #[tokio::test]
    async fn test_resubmit_replaces_previous_result() {
        let mut form = filled_form();

        let failing = RecordingService::replying(Err(WaitlistError::Rejected(
            GENERIC_FAILURE_MESSAGE.to_string(),
        )));
        form.submit(&failing).await;
        assert!(!form.result().unwrap().is_success());

        let accepting = RecordingService::replying(Ok("Welcome!".to_string()));
        form.submit(&accepting).await;

        assert_eq!(
            form.result(),
            Some(&SubmissionResult::Success("Welcome!".to_string()))
        );
    }
}
