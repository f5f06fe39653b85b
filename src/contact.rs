//! Contact form submission through the external form relay.

use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ContactError;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Quote request as submitted by the contact page.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    pub message: String,
    /// Page language the form was sent from
    #[serde(default)]
    pub language: Option<String>,
}

impl ContactForm {
    /// Local checks before anything is sent to the relay.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
        });
        if !regex.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    access_key: &'a str,
    subject: String,
    from_name: &'a str,
    name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_type: Option<&'a str>,
    message: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Observable result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    /// The relay answered but refused the submission
    Rejected { message: String },
    /// The relay could not be reached or answered garbage
    Unreachable { reason: String },
}

/// HTTP client for the relay, bounded by `form_relay_timeout_secs` so a
/// stalled relay ends as `Unreachable`.
pub fn relay_client(config: &Config) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.form_relay_timeout_secs))
        .build()
        .context("Failed to build form relay HTTP client")
}

/// Forward a validated form to the relay. Sent once, never retried: the
/// visitor re-submits from the error state.
pub async fn submit(
    client: &reqwest::Client,
    config: &Config,
    form: &ContactForm,
) -> Result<ContactOutcome, ContactError> {
    form.validate()?;
    let access_key = config
        .form_relay_access_key
        .as_deref()
        .ok_or(ContactError::NotConfigured)?;

    let request = RelayRequest {
        access_key,
        subject: format!("Solicitud de presupuesto: {}", form.name.trim()),
        from_name: &config.site_name,
        name: form.name.trim(),
        email: form.email.trim(),
        phone: form.phone.as_deref().filter(|p| !p.trim().is_empty()),
        document_type: form.document_type.as_deref().filter(|d| !d.trim().is_empty()),
        message: form.message.trim(),
        language: form.language.as_deref().unwrap_or("es"),
    };

    let response = match client
        .post(&config.form_relay_url)
        .header("Accept", "application/json")
        .json(&request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!("Form relay unreachable: {}", e);
            return Ok(ContactOutcome::Unreachable {
                reason: e.to_string(),
            });
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<RelayResponse>(&body) {
        Ok(parsed) if parsed.success && status.is_success() => {
            info!(
                "Contact form relayed (language: {}, document: {})",
                request.language,
                request.document_type.unwrap_or("-")
            );
            Ok(ContactOutcome::Sent)
        }
        Ok(parsed) => {
            warn!("Form relay rejected submission ({}): {}", status, parsed.message);
            Ok(ContactOutcome::Rejected {
                message: parsed.message,
            })
        }
        Err(_) if status.is_client_error() => {
            warn!("Form relay rejected submission ({}): {}", status, body);
            Ok(ContactOutcome::Rejected { message: body })
        }
        Err(e) => {
            warn!("Form relay returned unreadable response ({}): {}", status, e);
            Ok(ContactOutcome::Unreachable {
                reason: format!("{}: {}", status, e),
            })
        }
    }
}
