use crate::config::{LocaleConfig, PluralFoodHandling, PluralPolicyProvider};
use crate::parser::IngredientTextParser;
use crate::quantity::{FractionConverter, MediantFraction};

/// Builder for configuring an [`IngredientTextParser`]
#[derive(Default)]
pub struct IngredientTextParserBuilder {
    policy: Option<Box<dyn PluralPolicyProvider + Send + Sync>>,
    converter: Option<Box<dyn FractionConverter + Send + Sync>>,
}

impl IngredientTextParserBuilder {
    /// Use a fixed plural policy regardless of locale
    ///
    /// # Example
    /// ```
    /// use ingredient_text::{IngredientTextParser, PluralFoodHandling};
    ///
    /// let parser = IngredientTextParser::builder()
    ///     .plural_food_handling(PluralFoodHandling::Never)
    ///     .build();
    /// ```
    pub fn plural_food_handling(self, policy: PluralFoodHandling) -> Self {
        self.provider(policy)
    }

    /// Take the plural policy from the active locale of a configuration
    ///
    /// # Example
    /// ```
    /// use ingredient_text::{IngredientTextParser, LocaleConfig};
    ///
    /// let parser = IngredientTextParser::builder()
    ///     .locale_config(LocaleConfig::default().with_locale("fr-FR"))
    ///     .build();
    /// ```
    pub fn locale_config(self, config: LocaleConfig) -> Self {
        self.provider(config)
    }

    /// Use a custom source for the plural policy
    ///
    /// The provider is consulted on every render, so it may reflect a locale
    /// that changes at runtime.
    pub fn provider(mut self, provider: impl PluralPolicyProvider + Send + Sync + 'static) -> Self {
        self.policy = Some(Box::new(provider));
        self
    }

    /// Replace the fraction approximation used in fraction notation
    pub fn fraction_converter(
        mut self,
        converter: impl FractionConverter + Send + Sync + 'static,
    ) -> Self {
        self.converter = Some(Box::new(converter));
        self
    }

    /// Build the parser
    ///
    /// Unset options fall back to the built-in locale table (active locale
    /// `en-US`) and the mediant fraction converter.
    pub fn build(self) -> IngredientTextParser {
        IngredientTextParser {
            policy: self
                .policy
                .unwrap_or_else(|| Box::new(LocaleConfig::default())),
            converter: self.converter.unwrap_or_else(|| Box::new(MediantFraction)),
        }
    }
}
