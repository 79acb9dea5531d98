//! HTTP client for the auth service's validate endpoint.
//! Used by: main.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::auth::CredentialValidator;

#[derive(Serialize)]
struct ValidateRequest<'a> {
    username: &'a str,
    password: &'a str,
}

pub struct HttpCredentialValidator {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpCredentialValidator {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    async fn post(&self, username: &str, password: &str) -> Result<(), reqwest::Error> {
        self.client
            .post(self.endpoint.clone())
            .json(&ValidateRequest { username, password })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl CredentialValidator for HttpCredentialValidator {
    async fn validate(&self, username: &str, password: &str) -> bool {
        match self.post(username, password).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "credential validation failed");
                false
            }
        }
    }
}
