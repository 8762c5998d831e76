use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub port: u16,
    pub mongodb_uri: String,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenv().is_ok();

        let port = env::var("PORT")
            .expect("PORT missing, it is required")
            .parse()
            .expect("PORT must be a valid u16 number");

        let mongodb_uri = env::var("MONGODB_CONNECTION_STRING")
            .expect("MONGODB_CONNECTION_STRING missing, it is required");

        Self { port, mongodb_uri }
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    /// Directory holding the prebuilt front-end bundle (tracker only).
    pub fn static_dir() -> PathBuf {
        env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"))
    }
}
