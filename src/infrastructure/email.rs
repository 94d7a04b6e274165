//! Contact form delivery through an EmailJS-compatible REST endpoint

use std::fmt;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;

use crate::domain::contact::ContactMessage;

pub const DEFAULT_API_URL: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Identifiers the provider needs to route a message to the owner's inbox
#[derive(Clone)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: SecretString,
}

impl EmailCredentials {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: SecretString,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key,
        }
    }
}

impl fmt::Debug for EmailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailCredentials")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for EmailCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.service_id == other.service_id
            && self.template_id == other.template_id
            && self.public_key.expose_secret() == other.public_key.expose_secret()
    }
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends contact messages on the owner's behalf
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(
        &self,
        credentials: &EmailCredentials,
        message: &ContactMessage,
    ) -> Result<(), EmailError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// HTTP client for the EmailJS send API
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    api_url: String,
}

impl EmailJsClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.api_url.trim_end_matches('/'))
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl EmailProvider for EmailJsClient {
    async fn send(
        &self,
        credentials: &EmailCredentials,
        message: &ContactMessage,
    ) -> Result<(), EmailError> {
        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: credentials.public_key.expose_secret(),
            template_params: TemplateParams {
                name: &message.name,
                email: &message.email,
                message: &message.message,
            },
        };

        tracing::debug!(endpoint = %self.endpoint(), "sending contact message");
        let response = self.http.post(self.endpoint()).json(&request).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
