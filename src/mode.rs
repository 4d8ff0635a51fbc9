use std::env;

use derive_ex::Ex;
use parse_display::{Display, FromStr};


/// Environment variable that overrides the compiled [`BuildMode`].
pub const MODE_ENV_VAR: &str = "COMPARE_EFFECT_MODE";

/// Whether dependency lists are checked for misuse.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, FromStr)]
#[display(style = "snake_case")]
pub enum BuildMode {
    Development,
    Production,
}
impl BuildMode {
    /// The mode selected by [`MODE_ENV_VAR`], falling back to [`compiled`](Self::compiled).
    pub fn current() -> Self {
        let Some(value) = env::var_os(MODE_ENV_VAR) else {
            return Self::compiled();
        };
        match value.to_str() {
            Some(value) => Self::from_env_value(Some(value)),
            None => {
                tracing::warn!(value = ?value, "ignoring non UTF-8 {}", MODE_ENV_VAR);
                Self::compiled()
            }
        }
    }

    /// `Development` with `debug_assertions`, `Production` without.
    pub const fn compiled() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn from_env_value(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::compiled();
        };
        match value.trim().parse() {
            Ok(mode) => mode,
            Err(_) => {
                tracing::warn!(value, "ignoring invalid {}", MODE_ENV_VAR);
                Self::compiled()
            }
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Settings of a [`CompareEffect`](crate::CompareEffect).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ex)]
#[derive_ex(Default)]
#[default(Self::new(BuildMode::current()))]
pub struct EffectConfig {
    pub mode: BuildMode,
}
impl EffectConfig {
    pub const fn new(mode: BuildMode) -> Self {
        Self { mode }
    }
    pub const fn development() -> Self {
        Self::new(BuildMode::Development)
    }
    pub const fn production() -> Self {
        Self::new(BuildMode::Production)
    }

    pub fn checks_deps(&self) -> bool {
        !self.mode.is_production()
    }
}
