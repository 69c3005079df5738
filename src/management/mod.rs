mod config_store;

pub use config_store::ConfigStore;
pub use config_store::FileConfigStore;
pub use config_store::StoredConfig;
