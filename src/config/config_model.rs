#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub storage: Storage,
    pub admin_seed: AdminSeed,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Storage {
    pub data_file: String,
}

#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SessionSecret {
    pub secret: String,
    pub token_ttl_days: i64,
}
