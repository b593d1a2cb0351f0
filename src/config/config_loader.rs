use anyhow::{Ok, Result};

use super::config_model::{DotEnvyConfig, SessionSecret};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = super::config_model::Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let storage = super::config_model::Storage {
        data_file: std::env::var("DATA_FILE").unwrap_or_else(|_| "data.json".to_string()),
    };

    let admin_seed = super::config_model::AdminSeed {
        email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@studypro.local".to_string()),
        password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "Admin@123".to_string()),
    };

    Ok(DotEnvyConfig {
        server,
        storage,
        admin_seed,
    })
}

pub fn get_session_secret() -> Result<SessionSecret> {
    dotenvy::dotenv().ok();

    Ok(SessionSecret {
        secret: std::env::var("JWT_SECRET").expect("JWT_SECRET is invalid"),
        token_ttl_days: std::env::var("TOKEN_TTL_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()?,
    })
}
