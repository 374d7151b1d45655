mod settings;

pub use settings::{
    mask_database_url, DatabaseConfig, LoggingConfig, ServerConfig, Settings, StoreConfig,
};
