use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default location under which shares are mounted.
pub const DEFAULT_MOUNT_ROOT: &str = "/mnt/smb";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// How shares are reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransportConfig {
    /// Share `//HOST/SHARE` is found at `<mount_root>/<HOST>/<SHARE>`.
    #[serde(default = "default_mount_root")]
    pub mount_root: PathBuf,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub domain: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            mount_root: default_mount_root(),
            username: None,
            domain: None,
        }
    }
}

/// Defaults for flags that can also be given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub case_sensitive: bool,

    /// Emit performance data.
    #[serde(default = "default_true")]
    pub perfdata: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            perfdata: true,
            format: OutputFormat::default(),
        }
    }
}

fn default_mount_root() -> PathBuf {
    PathBuf::from(DEFAULT_MOUNT_ROOT)
}

const fn default_true() -> bool {
    true
}
