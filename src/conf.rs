// Configuration definitions, functions and tests
//

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string as de_num;
use std::path::{Path, PathBuf};
use std::sync::Arc;

static ENV_PREFIX: &str = "GK";

fn prefixed_env(suffix: &str) -> String {
    format!("{}__{}", ENV_PREFIX, suffix)
}

#[derive(Clone, derived_deref::Deref)]
pub struct Conf {
    #[target]
    pub env_conf: Arc<EnvConf>,
    pub env: Env,
}

impl Conf {
    pub fn new(env: Env, env_conf: EnvConf) -> Self {
        Self {
            env_conf: Arc::new(env_conf),
            env,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EnvConf {
    #[serde(deserialize_with = "de_num")]
    pub port: u16,
    pub host: String,
    pub log: Log,
    pub page: PageConf,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub pretty: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PageConf {
    pub title: String,
}

impl EnvConf {
    /// Layers `default`, then the per-environment file, then `GK__*` variables.
    ///
    /// `conf_dir` falls back to `GK__CONF_DIR`, then to `./conf`.
    pub fn derive(env: Env, conf_dir: Option<PathBuf>) -> Result<Self, config::ConfigError> {
        let conf_dir = conf_dir
            .or_else(|| std::env::var(prefixed_env("CONF_DIR")).map(PathBuf::from).ok())
            .unwrap_or_else(|| PathBuf::from("conf"));

        fn join_filename(conf_dir: &Path, filename: &str) -> String {
            conf_dir.join(filename).to_string_lossy().into_owned()
        }

        config::Config::builder()
            .add_source(
                config::File::with_name(&join_filename(&conf_dir, "default")).required(true),
            )
            .add_source(
                config::File::with_name(&join_filename(&conf_dir, env.as_ref())).required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn test_default() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".into(),
            log: Log { pretty: false },
            page: PageConf {
                title: "Greekosystem Login".into(),
            },
        }
    }
}

use derive_more::Display;

#[derive(Debug, PartialEq, Display, Clone, Copy)]
pub enum Env {
    #[display(fmt = "local")]
    Local,
    #[display(fmt = "prod")]
    Prod,
}

impl Env {
    pub fn derive() -> Result<Self, String> {
        // One variable to rule all
        let glob_env = std::env::var("GK_ENV").unwrap_or_else(|_| "local".into());

        // Or set a more specific per executable
        std::env::var(prefixed_env("ENV"))
            .unwrap_or(glob_env)
            .try_into()
    }
}

impl AsRef<str> for Env {
    fn as_ref(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "prod" => Ok(Self::Prod),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `prod`.",
                other
            )),
        }
    }
}
