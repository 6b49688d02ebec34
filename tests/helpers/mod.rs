use kondate::config::{Config, DatabaseConfig, FetchConfig, ObservabilityConfig};
use temp_dir::TempDir;

/// Config pointing at a fresh SQLite file inside `dir`.
pub fn test_config(dir: &TempDir) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.child("kondate.db").display()),
            max_connections: 2,
        },
        fetch: FetchConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}
