use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Products per page; always `> 0`.
    pub page_size: usize,
    /// DummyJSON products snapshot (envelope or bare array).
    pub catalog_path: PathBuf,
    /// DummyJSON categories snapshot.
    pub categories_path: PathBuf,
    /// Where the cart is persisted between runs.
    pub cart_path: PathBuf,
}
