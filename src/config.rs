pub struct Config {
    pub discord_token: String,
    pub presence_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .expect("DISCORD_TOKEN environment variable is required"),
            presence_interval_secs: std::env::var("GUILDKEEPER_PRESENCE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}
