use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "./recordatorios".to_string())
                .into(),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./public".to_string())
                .into(),
        }
    }
}
