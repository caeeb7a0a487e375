/// Server configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Directory holding the SQLite database file.
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        // A .env file is optional; real environment variables win.
        dotenvy::dotenv().ok();

        Self {
            listen_addr: std::env::var("PT_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            data_dir: std::env::var("PT_DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
        }
    }
}
