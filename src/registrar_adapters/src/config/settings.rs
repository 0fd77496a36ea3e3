use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use registrar_application::{
    WelcomeEmail,
    listeners::welcome_email::{DEFAULT_SENDER, DEFAULT_TEMPLATE, USERNAME_PLACEHOLDER},
};
use serde::Deserialize;
use thiserror::Error;

use crate::config::constants::{defaults, env, files};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Welcome email template must contain the {{username}} placeholder")]
    MissingUsernamePlaceholder,
    #[error("Welcome email sender must not be empty")]
    EmptySender,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub welcome_email: WelcomeEmailSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WelcomeEmailSettings {
    pub sender: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    pub filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            welcome_email: WelcomeEmailSettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl Default for WelcomeEmailSettings {
    fn default() -> Self {
        Self {
            sender: DEFAULT_SENDER.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: defaults::LOG_FILTER.to_string(),
        }
    }
}

impl From<WelcomeEmailSettings> for WelcomeEmail {
    fn from(settings: WelcomeEmailSettings) -> Self {
        WelcomeEmail::new(settings.sender, settings.template)
    }
}

impl Settings {
    /// Load settings from `config/default`, `config/local` and `REGISTRAR__*`
    /// environment variables, later sources overriding earlier ones.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let config = Self::builder_with_defaults()?
            .add_source(File::with_name(files::DEFAULT_CONFIG_FILE).required(false))
            .add_source(File::with_name(files::LOCAL_CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("welcome_email.sender", DEFAULT_SENDER)?
            .set_default("welcome_email.template", DEFAULT_TEMPLATE)?
            .set_default("log.filter", defaults::LOG_FILTER)
    }

    fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.welcome_email.sender.is_empty() {
            return Err(SettingsError::EmptySender);
        }
        if !self.welcome_email.template.contains(USERNAME_PLACEHOLDER) {
            return Err(SettingsError::MissingUsernamePlaceholder);
        }
        Ok(())
    }

    pub fn welcome_email(&self) -> WelcomeEmail {
        self.welcome_email.clone().into()
    }
}
