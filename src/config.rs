use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub migrations_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("PENSIONS_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PENSIONS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: env::var("PENSIONS_DATABASE_URL")
                .map(|v| database_path_from_url(&v))
                .unwrap_or_else(|_| PathBuf::from("data/pensions.db")),
            migrations_path: env::var("PENSIONS_MIGRATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("migrations")),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accepts `sqlite://path`, `sqlite:path` or a bare path.
fn database_path_from_url(url: &str) -> PathBuf {
    PathBuf::from(
        url.strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url),
    )
}
