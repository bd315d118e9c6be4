use serde::Deserialize;

/// Demo harness configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Seed for the recommendation RNG; picks change run to run when unset
    #[serde(default)]
    pub recommendation_seed: Option<u64>,

    /// Log filter directives, e.g. "info" or "showreel=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config: Config = envy::from_iter(std::iter::empty::<(String, String)>()).unwrap();
        assert_eq!(config.recommendation_seed, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_seed_parsed_from_env_pair() {
        let vars = vec![("RECOMMENDATION_SEED".to_string(), "42".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.recommendation_seed, Some(42));
    }
}
