use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::config::tournament_service::TournamentServiceSettings;
use crate::models::submission::{CreatedTournament, TournamentSubmission};

#[derive(Debug, thiserror::Error)]
pub enum TournamentServiceError {
    #[error("Tournament service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Tournament service rejected the submission ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response from tournament service: {0}")]
    InvalidResponse(String),
}

/// Client for the external Tournament Service that persists finished tournaments.
///
/// Failures are reported as-is; nothing is retried here.
pub struct TournamentServiceClient {
    base_url: String,
    api_key: SecretString,
    timeout: Duration,
    client: Client,
}

impl TournamentServiceClient {
    pub fn new(settings: &TournamentServiceSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            client: Client::new(),
        }
    }

    /// `POST /tournaments` with the submission as JSON body
    pub async fn create_tournament(
        &self,
        submission: &TournamentSubmission,
    ) -> Result<CreatedTournament, TournamentServiceError> {
        let url = format!("{}/tournaments", self.base_url);

        tracing::debug!(
            "Submitting draft {} ({} sports) to {}",
            submission.draft_id,
            submission.sports.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .header("X-API-Key", self.api_key.expose_secret())
            .json(submission)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Tournament service returned error {}: {}", status, body);
            return Err(TournamentServiceError::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let created = response
            .json::<CreatedTournament>()
            .await
            .map_err(|e| TournamentServiceError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            "Tournament service created tournament {} for draft {}",
            created.id,
            submission.draft_id
        );

        Ok(created)
    }
}

// Structured errors carry a `message` (or `error`) field; anything else is passed through.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
