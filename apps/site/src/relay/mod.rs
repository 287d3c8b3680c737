//! Form-relay client — the single point of entry for contact submissions.
//!
//! The relay is an external collaborator whose only contract is the
//! request/response shape: a JSON POST carrying the access key and form
//! fields, answered by JSON with a `success` flag. Anything else — non-2xx
//! status, malformed body, `success: false` — is a failure and is surfaced
//! as one. Failures are never converted into fake successes.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
const REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, Error)]
pub enum RelayError {
    /// The access key is absent from configuration. Checked at request
    /// time so the rest of the site runs without it.
    #[error("form relay access key is not configured")]
    MissingAccessKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("form relay rejected the submission: {0}")]
    Rejected(String),

    #[error("form relay returned status {0}")]
    Status(u16),

    #[error("form relay returned a malformed response")]
    Malformed,
}

/// The validated form payload accepted from the site's contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct RelayAck {
    success: bool,
    #[serde(default)]
    message: String,
}

#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: String,
    access_key: Option<String>,
}

impl RelayClient {
    pub fn new(endpoint: Option<String>, access_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            access_key,
        }
    }

    /// Relays one submission. Returns the user-facing success message.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<String, RelayError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(RelayError::MissingAccessKey)?;

        let response = self
            .client
            .post(&self.endpoint)
            .json(&RelayRequest {
                access_key,
                name: &submission.name,
                email: &submission.email,
                subject: &submission.subject,
                message: &submission.message,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx bodies are not parsed further.
            warn!(status = status.as_u16(), "form relay returned an error status");
            return Err(RelayError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        ack_to_outcome(&body)
    }
}

/// Maps a 2xx relay body to an outcome. Pure so the mapping is testable
/// without a live relay.
fn ack_to_outcome(body: &str) -> Result<String, RelayError> {
    let ack: RelayAck = serde_json::from_str(body).map_err(|_| RelayError::Malformed)?;
    if ack.success {
        if ack.message.is_empty() {
            Ok(DEFAULT_SUCCESS_MESSAGE.to_string())
        } else {
            Ok(ack.message)
        }
    } else {
        let reason = if ack.message.is_empty() {
            "submission was not accepted".to_string()
        } else {
            ack.message
        };
        Err(RelayError::Rejected(reason))
    }
}

/// Field checks applied before anything reaches the relay.
pub fn validate(submission: &ContactSubmission) -> Result<(), String> {
    if submission.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if !looks_like_email(&submission.email) {
        return Err("email address does not look valid".to_string());
    }
    if submission.subject.trim().is_empty() {
        return Err("subject cannot be empty".to_string());
    }
    if submission.message.trim().is_empty() {
        return Err("message cannot be empty".to_string());
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Interested in working together.".to_string(),
        }
    }

    #[test]
    fn test_success_ack_returns_message() {
        let out = ack_to_outcome(r#"{"success": true, "message": "Thanks!"}"#).unwrap();
        assert_eq!(out, "Thanks!");
    }

    #[test]
    fn test_success_ack_without_message_uses_default() {
        let out = ack_to_outcome(r#"{"success": true}"#).unwrap();
        assert_eq!(out, DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_failure_ack_is_rejected() {
        let err = ack_to_outcome(r#"{"success": false, "message": "bad key"}"#).unwrap_err();
        assert!(matches!(err, RelayError::Rejected(reason) if reason == "bad key"));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = ack_to_outcome("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, RelayError::Malformed));
    }

    #[test]
    fn test_validate_accepts_reasonable_payload() {
        assert!(validate(&submission()).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        for bad in ["", "jane", "jane@", "@example.com", "jane@example."] {
            let mut s = submission();
            s.email = bad.to_string();
            assert!(validate(&s).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut s = submission();
        s.message = "   ".to_string();
        assert!(validate(&s).is_err());
    }

    #[tokio::test]
    async fn test_submit_without_access_key_fails_fast() {
        let relay = RelayClient::new(None, None);
        let err = relay.submit(&submission()).await.unwrap_err();
        assert!(matches!(err, RelayError::MissingAccessKey));
    }
}
