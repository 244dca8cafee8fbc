use crate::generation::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::session::Participant;
use anyhow::{bail, Result};
use serde::Deserialize;
use tracing::warn;

/// Warning raised when the initial participant list cannot be parsed
pub const MALFORMED_PARTICIPANTS_NOTICE: &str = "環境変数 PARTICIPANTS の形式が不正です。JSON形式で定義してください。例: [{\"name\":\"Aさん\",\"role\":\"役割\",\"remark\":\"備考\"}]";

/// Error raised when the API credential is absent
pub const MISSING_API_KEY_MESSAGE: &str = "環境変数 GEMINI_API_KEY が設定されていません。";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    /// Gemini API credential (env `GEMINI_API_KEY`)
    pub gemini_api_key: Option<String>,

    /// JSON-encoded initial participant list (env `PARTICIPANTS`)
    pub participants: Option<String>,

    /// Directory holding the single-page form
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,

    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Initial participants plus the warning to show when parsing failed
#[derive(Debug, Default)]
pub struct InitialParticipants {
    pub participants: Vec<Participant>,
    pub notice: Option<String>,
}

fn default_service_name() -> String {
    "minutegem".to_string()
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load from an optional config file, then the process environment
    ///
    /// `GEMINI_API_KEY` and `PARTICIPANTS` override the file; other keys can
    /// be overridden with `MINUTEGEM_` variables (e.g. `MINUTEGEM_SERVICE__HTTP__PORT`).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MINUTEGEM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("gemini_api_key", std::env::var("GEMINI_API_KEY").ok())?
            .set_override_option("participants", std::env::var("PARTICIPANTS").ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load from TOML text only; no file or environment lookup
    pub fn from_toml(toml: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// The API credential; absent or empty is fatal
    pub fn api_key(&self) -> Result<&str> {
        match self.gemini_api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => bail!(MISSING_API_KEY_MESSAGE),
        }
    }

    pub fn initial_participants(&self) -> InitialParticipants {
        parse_initial_participants(self.participants.as_deref())
    }
}

/// Parse the JSON participant list; malformed input degrades to an empty list
pub fn parse_initial_participants(raw: Option<&str>) -> InitialParticipants {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return InitialParticipants::default();
    };

    match serde_json::from_str::<Vec<Participant>>(raw) {
        Ok(participants) => InitialParticipants {
            participants,
            notice: None,
        },
        Err(e) => {
            warn!("Malformed PARTICIPANTS configuration: {}", e);
            InitialParticipants {
                participants: Vec::new(),
                notice: Some(MALFORMED_PARTICIPANTS_NOTICE.to_string()),
            }
        }
    }
}
