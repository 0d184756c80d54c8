//! Build request configuration with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and config files.
//! Priority: CLI > Environment (`MODGATE_*`) > File > Defaults

mod defaults;
mod loading;

use modgate_descriptor::{
    BuildRequest, KnownPlatforms, PlatformRegistry, TargetConfiguration, TargetType,
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub use defaults::*;

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE: &str = "modgate.toml";

/// Prefix of environment variables that override config file values.
pub const ENV_PREFIX: &str = "MODGATE_";

/// Effective build request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
    /// Platform being built
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default = "default_configuration")]
    pub configuration: TargetConfiguration,

    #[serde(default = "default_target_type")]
    pub target_type: TargetType,

    /// Name of the target, matched against program lists
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default)]
    pub developer_tools: bool,

    #[serde(default)]
    pub cooked: bool,

    /// Platforms known in addition to the built-in ones
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            configuration: default_configuration(),
            target_type: default_target_type(),
            target: default_target(),
            developer_tools: false,
            cooked: false,
            platforms: Vec::new(),
        }
    }
}

impl RequestConfig {
    /// Built-in platforms plus the ones listed under `platforms`.
    pub fn registry(&self) -> KnownPlatforms {
        self.platforms
            .iter()
            .fold(KnownPlatforms::default(), |registry, name| {
                registry.with_platform(name)
            })
    }

    /// Resolve the settings into a request the policy can evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPlatform`] if `platform` is not known
    /// to `registry`.
    pub fn build_request<R>(&self, registry: &R) -> Result<BuildRequest>
    where
        R: PlatformRegistry + ?Sized,
    {
        let platform = registry
            .try_parse(&self.platform)
            .ok_or_else(|| ConfigError::UnknownPlatform {
                name: self.platform.clone(),
                hint: "Use a built-in platform name or list it under 'platforms' in modgate.toml"
                    .to_string(),
            })?;

        Ok(BuildRequest::new(
            platform,
            self.configuration,
            self.target.clone(),
            self.target_type,
        )
        .with_developer_tools(self.developer_tools)
        .with_cooked_data(self.cooked))
    }
}
