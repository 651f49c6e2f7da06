use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Display label for the session (shown on the dashboard header)
    pub session_name: String,

    // Roster source, loaded once at startup
    pub roster_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists (for local development)
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        Ok(Self {
            host: config.get("host").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: config.get("port").unwrap_or(8080),
            session_name: config
                .get("session_name")
                .unwrap_or_else(|_| "Computer Science - Year 3".to_string()),
            roster_path: config
                .get("roster_path")
                .unwrap_or_else(|_| "data/roster.json".to_string()),
        })
    }
}
