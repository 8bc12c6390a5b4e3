use crate::error::{PyPublishError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for py-publish.
///
/// Contains the activation signal names and behavior options. Version
/// translation is a fixed convention and is intentionally not configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub signals: SignalsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default one-time build flag name.
fn default_build_flag() -> String {
    "python".to_string()
}

/// Returns the default local-development opt-in variables.
fn default_local_env() -> Vec<String> {
    vec!["PYTHON_BINDINGS".to_string()]
}

/// Returns the default CI indicator variables.
fn default_ci_env() -> Vec<String> {
    vec![
        "JENKINS_URL".to_string(),
        "BUILD_URL".to_string(),
        "CI".to_string(),
    ]
}

/// Names of the signals that can activate the Python packaging step.
///
/// Each field is one signal class: the explicit one-time build flag, the
/// developer's persistent opt-in variables, and the variables a CI server
/// sets on its build agents.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SignalsConfig {
    #[serde(default = "default_build_flag")]
    pub build_flag: String,

    #[serde(default = "default_local_env")]
    pub local_env: Vec<String>,

    #[serde(default = "default_ci_env")]
    pub ci_env: Vec<String>,
}

impl Default for SignalsConfig {
    fn default() -> Self {
        SignalsConfig {
            build_flag: default_build_flag(),
            local_env: default_local_env(),
            ci_env: default_ci_env(),
        }
    }
}

fn default_warn_nonstandard() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// Controls reporting behavior without affecting any decision.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_warn_nonstandard")]
    pub warn_nonstandard: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            warn_nonstandard: default_warn_nonstandard(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            signals: SignalsConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pypublish.toml` in current directory
/// 3. `.pypublish.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./pypublish.toml").exists() {
        fs::read_to_string("./pypublish.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".pypublish.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| PyPublishError::config(e.to_string()))?;
    Ok(config)
}
