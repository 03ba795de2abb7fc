//! Render structured recipe ingredients into display text.
//!
//! ```
//! use ingredient_text::{render_flat, Food, Ingredient, QuantityValue, RenderMode, Unit};
//!
//! let ingredient = Ingredient {
//!     quantity: Some(QuantityValue::Number(2.0)),
//!     unit: Some(Unit {
//!         name: "cup".to_string(),
//!         plural_name: Some("cups".to_string()),
//!         ..Default::default()
//!     }),
//!     food: Some(Food {
//!         name: "apple".to_string(),
//!         plural_name: Some("apples".to_string()),
//!     }),
//!     ..Default::default()
//! };
//!
//! assert_eq!(render_flat(&ingredient, 1.0, RenderMode::Markup), "2 cups apples");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod link;
pub mod model;
pub mod parser;
pub mod plural;
pub mod quantity;
pub mod sanitize;

pub use builder::IngredientTextParserBuilder;
pub use crate::config::{load_config, LocaleConfig, LocaleEntry, PluralFoodHandling, PluralPolicyProvider};
pub use error::IngredientTextError;
pub use link::build_recipe_link;
pub use model::{Food, Ingredient, ParsedIngredientText, QuantityValue, RecipeRef, Unit};
pub use parser::IngredientTextParser;
pub use plural::{resolve_food_name, resolve_unit_name, should_pluralize_food, should_pluralize_unit};
pub use quantity::{
    format_quantity, format_quantity_with, Fraction, FractionConverter, MediantFraction,
    RenderMode,
};
pub use sanitize::{sanitize_fragment, ALLOWED_TAGS};

/// Render an ingredient into display fragments with the built-in locale table
pub fn render(
    ingredient: &Ingredient,
    scale: f64,
    mode: RenderMode,
    group_slug: Option<&str>,
) -> ParsedIngredientText {
    IngredientTextParser::default().render(ingredient, scale, mode, group_slug)
}

/// Render an ingredient into one line with the built-in locale table
pub fn render_flat(ingredient: &Ingredient, scale: f64, mode: RenderMode) -> String {
    IngredientTextParser::default().render_flat(ingredient, scale, mode)
}

/// Build a parser from the on-disk and environment locale configuration
pub fn parser_from_config() -> Result<IngredientTextParser, IngredientTextError> {
    let config = LocaleConfig::load()?;
    Ok(IngredientTextParser::builder().locale_config(config).build())
}
