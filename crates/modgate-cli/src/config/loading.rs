use crate::cli::RequestArgs;
use crate::config::{RequestConfig, CONFIG_FILE, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml},
    Figment,
};
use modgate_descriptor::{TargetConfiguration, TargetType};
use serde::Serialize;
use std::path::{Path, PathBuf};

const KEYS: &[&str] = &[
    "platform",
    "configuration",
    "target_type",
    "target",
    "developer_tools",
    "cooked",
    "platforms",
];

/// The subset of settings given on the command line.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration: Option<TargetConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_type: Option<TargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    // Flags can only switch a setting on.
    #[serde(skip_serializing_if = "Option::is_none")]
    developer_tools: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cooked: Option<bool>,
}

impl From<&RequestArgs> for Overrides {
    fn from(args: &RequestArgs) -> Self {
        Self {
            platform: args.platform.clone(),
            configuration: args.configuration.map(Into::into),
            target_type: args.target_type.map(Into::into),
            target: args.target.clone(),
            developer_tools: args.developer_tools.then_some(true),
            cooked: args.cooked.then_some(true),
        }
    }
}

impl RequestConfig {
    /// Load the request from all sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// Without `config_path`, `modgate.toml` in the working directory is
    /// used if it exists.
    pub fn load(args: &RequestArgs, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(config_path)? {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = if is_json(&path) {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        // MODGATE_PLATFORM, MODGATE_TARGET_TYPE, ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(KEYS));

        figment = figment.merge(Serialized::defaults(Overrides::from(args)));

        figment.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "configuration".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                value: e.kind.to_string(),
                hint: "Check modgate.toml and MODGATE_* variables for typos and value types"
                    .to_string(),
            }
            .into()
        })
    }
}

fn config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            Ok(default_path.is_file().then(|| default_path.to_path_buf()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
