use std::env;

/// Port shared by the provider fakes; harnesses override it per process.
const DEFAULT_PORT: u16 = 8443;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("TERMINUS_PAPI_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}
