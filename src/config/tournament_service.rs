use serde::Deserialize;
use secrecy::SecretString;

#[derive(Deserialize, Debug, Clone)]
pub struct TournamentServiceSettings {
    pub base_url: String,
    pub api_key: SecretString,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl TournamentServiceSettings {
    pub fn new(base_url: String, api_key: SecretString) -> Self {
        Self {
            base_url,
            api_key,
            timeout_secs: default_timeout_secs(),
        }
    }
}
