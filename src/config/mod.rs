mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{CONFIG_VERSION, Config, DEFAULT_MOUNT_ROOT, DefaultsConfig, TransportConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.transport.mount_root.to_str(), Some(DEFAULT_MOUNT_ROOT));
        assert!(config.defaults.perfdata);
        assert!(!config.defaults.case_sensitive);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[defaults]\ncase_sensitive = true\n").unwrap();
        assert!(config.defaults.case_sensitive);
        assert!(config.defaults.perfdata);
        assert_eq!(config.transport, TransportConfig::default());
    }
}
