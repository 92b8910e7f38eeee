use std::{env, error::Error, fmt::Display, str::FromStr};

use tracing::info;

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub allowed_origin: String,
    pub static_dir: String,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            port: try_load("PORT", "3000")?,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| "DATABASE_URL must be set")?,
            allowed_origin: try_load("ALLOWED_ORIGIN", "http://localhost:5173")?,
            static_dir: try_load("STATIC_DIR", "static")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, Box<dyn Error>>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| format!("Invalid {key} value: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_load_falls_back_to_default() {
        let port: u16 = try_load("EVENT_API_TEST_UNSET_PORT", "3000").unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn try_load_rejects_garbage() {
        unsafe { env::set_var("EVENT_API_TEST_BAD_PORT", "not-a-port") };
        let result: Result<u16, _> = try_load("EVENT_API_TEST_BAD_PORT", "3000");
        assert!(result.is_err());
    }
}
