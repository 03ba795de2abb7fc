use log::debug;

use crate::builder::IngredientTextParserBuilder;
use crate::config::PluralPolicyProvider;
use crate::link::build_recipe_link;
use crate::model::{Ingredient, ParsedIngredientText};
use crate::plural::{
    resolve_food_name, resolve_unit_name, should_pluralize_food, should_pluralize_unit,
};
use crate::quantity::{format_quantity_with, FractionConverter, MediantFraction, RenderMode};
use crate::sanitize::sanitize_fragment;

/// Turns structured ingredients into display text
///
/// Holds no per-call state; one parser can serve any number of renders.
pub struct IngredientTextParser {
    pub(crate) policy: Box<dyn PluralPolicyProvider + Send + Sync>,
    pub(crate) converter: Box<dyn FractionConverter + Send + Sync>,
}

impl Default for IngredientTextParser {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for IngredientTextParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngredientTextParser")
            .field("plural_food_handling", &self.policy.plural_food_handling())
            .finish_non_exhaustive()
    }
}

impl IngredientTextParser {
    pub fn new(policy: impl PluralPolicyProvider + Send + Sync + 'static) -> Self {
        Self {
            policy: Box::new(policy),
            converter: Box::new(MediantFraction),
        }
    }

    /// Creates a new builder for configuring a parser
    ///
    /// # Example
    /// ```
    /// use ingredient_text::{IngredientTextParser, PluralFoodHandling};
    ///
    /// let parser = IngredientTextParser::builder()
    ///     .plural_food_handling(PluralFoodHandling::Always)
    ///     .build();
    /// ```
    pub fn builder() -> IngredientTextParserBuilder {
        IngredientTextParserBuilder::default()
    }

    /// Render an ingredient into sanitized display fragments
    ///
    /// `group_slug` is only needed for the recipe link of ingredients that
    /// reference another recipe.
    pub fn render(
        &self,
        ingredient: &Ingredient,
        scale: f64,
        mode: RenderMode,
        group_slug: Option<&str>,
    ) -> ParsedIngredientText {
        let policy = self.policy.plural_food_handling();
        let quantity = ingredient.quantity();
        let unit = ingredient.unit.as_ref();

        let scaled = quantity.unwrap_or(0.0) * scale;
        let plural_unit = should_pluralize_unit(quantity, scale);
        let plural_food = should_pluralize_food(scaled, unit.is_some(), policy);

        let use_fraction = unit.is_some_and(|u| u.fraction);
        debug!(
            "Rendering ingredient: scaled quantity {}, policy {}, fraction {}, plural unit {}, plural food {}",
            scaled, policy, use_fraction, plural_unit, plural_food
        );

        let quantity_text =
            format_quantity_with(self.converter.as_ref(), quantity, scale, use_fraction, mode);
        let has_quantity = quantity.is_some_and(|q| q != 0.0);
        let unit_name = if has_quantity {
            resolve_unit_name(unit, plural_unit)
        } else {
            String::new()
        };

        let name = match &ingredient.referenced_recipe {
            Some(recipe) => recipe.name.clone().unwrap_or_default(),
            None => resolve_food_name(ingredient.food.as_ref(), plural_food),
        };
        let note = ingredient.note.as_deref().unwrap_or_default();

        ParsedIngredientText {
            quantity: sanitized(&quantity_text),
            unit: sanitized(&unit_name),
            name: sanitized(&name),
            note: sanitized(note),
            recipe_link: build_recipe_link(ingredient.referenced_recipe.as_ref(), group_slug),
        }
    }

    /// Render an ingredient into a single sanitized line
    ///
    /// The recipe link is not part of the line.
    pub fn render_flat(&self, ingredient: &Ingredient, scale: f64, mode: RenderMode) -> String {
        let parsed = self.render(ingredient, scale, mode, None);
        let text = [parsed.quantity, parsed.unit, parsed.name, parsed.note]
            .iter()
            .map(|fragment| fragment.as_deref().unwrap_or_default())
            .collect::<Vec<&str>>()
            .join(" ");

        sanitize_fragment(collapse_spaces(&text).trim())
    }
}

fn sanitized(fragment: &str) -> Option<String> {
    if fragment.is_empty() {
        None
    } else {
        Some(sanitize_fragment(fragment))
    }
}

fn collapse_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PluralFoodHandling;
    use crate::model::{Food, QuantityValue, RecipeRef, Unit};
    use crate::quantity::Fraction;

    fn cup(fraction: bool) -> Unit {
        Unit {
            name: "cup".to_string(),
            plural_name: Some("cups".to_string()),
            fraction,
            ..Default::default()
        }
    }

    fn apple() -> Food {
        Food {
            name: "apple".to_string(),
            plural_name: Some("apples".to_string()),
        }
    }

    fn ingredient(quantity: Option<f64>, unit: Option<Unit>) -> Ingredient {
        Ingredient {
            quantity: quantity.map(QuantityValue::Number),
            unit,
            food: Some(apple()),
            ..Default::default()
        }
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("2  cups   apples "), "2 cups apples");
        assert_eq!(collapse_spaces("   "), "");
    }

    #[test]
    fn test_render_fields() {
        let parser = IngredientTextParser::default();
        let parsed = parser.render(
            &ingredient(Some(2.0), Some(cup(false))),
            1.0,
            RenderMode::Markup,
            None,
        );

        assert_eq!(parsed.quantity.as_deref(), Some("2"));
        assert_eq!(parsed.unit.as_deref(), Some("cups"));
        assert_eq!(parsed.name.as_deref(), Some("apples"));
        assert_eq!(parsed.note, None);
        assert_eq!(parsed.recipe_link, None);
    }

    #[test]
    fn test_unit_hidden_without_quantity() {
        let parser = IngredientTextParser::default();
        let parsed = parser.render(&ingredient(None, Some(cup(false))), 1.0, RenderMode::Markup, None);
        assert_eq!(parsed.quantity, None);
        assert_eq!(parsed.unit, None);

        let zero = parser.render(&ingredient(Some(0.0), Some(cup(false))), 1.0, RenderMode::Markup, None);
        assert_eq!(zero.quantity, None);
        assert_eq!(zero.unit, None);
    }

    #[test]
    fn test_scale_drives_pluralization() {
        let parser = IngredientTextParser::new(PluralFoodHandling::Always);
        let one = ingredient(Some(0.5), Some(cup(false)));

        assert_eq!(parser.render_flat(&one, 1.0, RenderMode::PlainText), "0.5 cup apple");
        assert_eq!(parser.render_flat(&one, 4.0, RenderMode::PlainText), "2 cups apples");
    }

    #[test]
    fn test_injected_converter_zero_fraction() {
        struct ZeroFraction;
        impl FractionConverter for ZeroFraction {
            fn to_fraction(&self, _value: f64, max_denominator: u32, _simplify: bool) -> Fraction {
                Fraction::new(0, 0, i64::from(max_denominator))
            }
        }

        let parser = IngredientTextParser::builder()
            .fraction_converter(ZeroFraction)
            .build();
        let parsed = parser.render(
            &ingredient(Some(0.5), Some(cup(true))),
            1.0,
            RenderMode::Markup,
            None,
        );
        assert_eq!(parsed.quantity, None);
        assert_eq!(parsed.unit.as_deref(), Some("cup"));
    }

    #[test]
    fn test_referenced_recipe_replaces_food() {
        let parser = IngredientTextParser::default();
        let ingredient = Ingredient {
            quantity: Some(QuantityValue::Number(3.0)),
            food: Some(apple()),
            referenced_recipe: Some(RecipeRef {
                slug: Some("pie-crust".to_string()),
                name: Some("Pie Crust".to_string()),
            }),
            ..Default::default()
        };

        let parsed = parser.render(&ingredient, 1.0, RenderMode::Markup, Some("home"));
        assert_eq!(parsed.name.as_deref(), Some("Pie Crust"));
        assert_eq!(
            parsed.recipe_link.as_deref(),
            Some(r#"<a href="/g/home/r/pie-crust" target="_blank">Pie Crust</a>"#)
        );
        assert_eq!(
            parser.render_flat(&ingredient, 1.0, RenderMode::Markup),
            "3 Pie Crust"
        );
    }
}
