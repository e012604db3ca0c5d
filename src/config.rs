use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("STATS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Config { base_url }
    }
}
