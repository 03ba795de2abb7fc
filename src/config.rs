use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;

/// When a food name takes its plural form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PluralFoodHandling {
    /// Pluralize whenever the quantity is above one or missing
    Always,
    /// Pluralize only when no unit qualifies the quantity
    #[default]
    WithoutUnit,
    /// Never pluralize food names
    Never,
}

impl PluralFoodHandling {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralFoodHandling::Always => "always",
            PluralFoodHandling::WithoutUnit => "without-unit",
            PluralFoodHandling::Never => "never",
        }
    }
}

impl From<&str> for PluralFoodHandling {
    /// Unknown values behave like `without-unit`
    fn from(value: &str) -> Self {
        match value.trim() {
            "always" => PluralFoodHandling::Always,
            "never" => PluralFoodHandling::Never,
            _ => PluralFoodHandling::WithoutUnit,
        }
    }
}

impl From<String> for PluralFoodHandling {
    fn from(value: String) -> Self {
        PluralFoodHandling::from(value.as_str())
    }
}

impl fmt::Display for PluralFoodHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the active locale's plural policy
pub trait PluralPolicyProvider {
    fn plural_food_handling(&self) -> PluralFoodHandling;
}

impl PluralPolicyProvider for PluralFoodHandling {
    fn plural_food_handling(&self) -> PluralFoodHandling {
        *self
    }
}

/// A locale known to the application
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocaleEntry {
    /// Locale identifier, e.g. "en-US"
    pub value: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub plural_food_handling: PluralFoodHandling,
}

impl LocaleEntry {
    fn new(value: &str, name: &str, plural_food_handling: PluralFoodHandling) -> Self {
        Self {
            value: value.to_string(),
            name: name.to_string(),
            plural_food_handling,
        }
    }
}

/// Locale configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocaleConfig {
    /// Active locale identifier
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Known locales and their plural policies
    #[serde(default = "default_locales")]
    pub locales: Vec<LocaleEntry>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            locales: default_locales(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_locales() -> Vec<LocaleEntry> {
    use PluralFoodHandling::{Always, Never, WithoutUnit};

    vec![
        LocaleEntry::new("en-US", "American English", Always),
        LocaleEntry::new("en-GB", "British English", Always),
        LocaleEntry::new("de-DE", "Deutsch", WithoutUnit),
        LocaleEntry::new("es-ES", "Español", WithoutUnit),
        LocaleEntry::new("fr-FR", "Français", WithoutUnit),
        LocaleEntry::new("it-IT", "Italiano", WithoutUnit),
        LocaleEntry::new("nl-NL", "Nederlands", WithoutUnit),
        LocaleEntry::new("pl-PL", "Polski", WithoutUnit),
        LocaleEntry::new("pt-BR", "Português Brasileiro", WithoutUnit),
        LocaleEntry::new("sv-SE", "Svenska", WithoutUnit),
        LocaleEntry::new("ja-JP", "日本語", Never),
        LocaleEntry::new("ko-KR", "한국어", Never),
        LocaleEntry::new("zh-CN", "简体中文", Never),
        LocaleEntry::new("zh-TW", "繁體中文", Never),
    ]
}

impl LocaleConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with INGREDIENT_TEXT__ prefix
    /// 2. ingredient-text.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: INGREDIENT_TEXT__LOCALE=fr-FR
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Same locale table with a different active locale
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            locales: self.locales.clone(),
        }
    }

    /// Entry for the active locale, if it is known
    pub fn active_locale(&self) -> Option<&LocaleEntry> {
        self.locales.iter().find(|lc| lc.value == self.locale)
    }
}

impl PluralPolicyProvider for LocaleConfig {
    fn plural_food_handling(&self) -> PluralFoodHandling {
        self.active_locale()
            .map(|lc| lc.plural_food_handling)
            .unwrap_or_default()
    }
}

/// Load configuration from file and environment variables
///
/// See [`LocaleConfig::load`] for the source priority.
pub fn load_config() -> Result<LocaleConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("ingredient-text").required(false))
        .add_source(
            Environment::with_prefix("INGREDIENT_TEXT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
