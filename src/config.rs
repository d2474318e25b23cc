use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";
const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
const DEFAULT_LLM_TEMPERATURE: f32 = 0.6;

/// Maximum accepted JSON request body (1 MiB).
pub const JSON_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Deck persistence file. `None` keeps decks in memory only.
    pub store_path: Option<PathBuf>,
    pub frontend_dist: PathBuf,
    pub llm: LlmConfig,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid PORT '{raw}', using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            store_path: get("DECK_STORE_PATH").map(PathBuf::from),
            frontend_dist: get("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIST)),
            llm: LlmConfig {
                api_key: get("OPENAI_API_KEY"),
                base_url: get("OPENAI_API_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
                temperature: DEFAULT_LLM_TEMPERATURE,
            },
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.store_path.is_none());
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("PORT", "abc"), ("OPENAI_API_KEY", "  ")]));
        assert_eq!(config.port, 3000);
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("DECK_STORE_PATH", "data/decks.json"),
            ("OPENAI_MODEL", "gpt-4o"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.store_path, Some(PathBuf::from("data/decks.json")));
        assert_eq!(config.llm.model, "gpt-4o");
    }
}
