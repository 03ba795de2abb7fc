use serde::{Deserialize, Serialize};

/// Quantity as it arrives from the recipe API
///
/// Older records store the amount as a string, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuantityValue {
    /// JSON number
    Number(f64),
    /// Numeric-looking string such as `"1.5"`
    Text(String),
}

impl QuantityValue {
    /// Coerce to a finite number, treating anything unparseable as absent
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            QuantityValue::Number(n) => *n,
            QuantityValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for QuantityValue {
    fn from(value: f64) -> Self {
        QuantityValue::Number(value)
    }
}

impl From<&str> for QuantityValue {
    fn from(value: &str) -> Self {
        QuantityValue::Text(value.to_string())
    }
}

/// Measurement unit attached to an ingredient
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Singular name, e.g. "cup"
    pub name: String,
    /// Plural name, falls back to `name` when missing
    #[serde(default)]
    pub plural_name: Option<String>,
    /// Singular abbreviation, e.g. "tbsp"
    #[serde(default)]
    pub abbreviation: Option<String>,
    /// Plural abbreviation, falls back to `abbreviation` when missing
    #[serde(default)]
    pub plural_abbreviation: Option<String>,
    /// Prefer the abbreviation over the full name
    #[serde(default)]
    pub use_abbreviation: bool,
    /// Quantities paired with this unit render as vulgar fractions
    #[serde(default)]
    pub fraction: bool,
}

/// Food an ingredient is made of
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Singular name, e.g. "apple"
    pub name: String,
    /// Plural name, falls back to `name` when missing
    #[serde(default)]
    pub plural_name: Option<String>,
}

/// Another recipe used as an ingredient
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRef {
    /// URL slug of the referenced recipe
    #[serde(default)]
    pub slug: Option<String>,
    /// Display name, used in place of the food name
    #[serde(default)]
    pub name: Option<String>,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Stored amount before scaling
    #[serde(default)]
    pub quantity: Option<QuantityValue>,
    /// Unit qualifying the amount
    #[serde(default)]
    pub unit: Option<Unit>,
    /// Food, ignored for the name when `referenced_recipe` is set
    #[serde(default)]
    pub food: Option<Food>,
    /// Free-form note, may carry inline markup
    #[serde(default)]
    pub note: Option<String>,
    /// Recipe used as this ingredient
    #[serde(default)]
    pub referenced_recipe: Option<RecipeRef>,
}

impl Ingredient {
    /// Numeric quantity after coercion, `None` when missing or unparseable
    pub fn quantity(&self) -> Option<f64> {
        self.quantity.as_ref().and_then(QuantityValue::as_number)
    }
}

/// Display fragments of a single ingredient
///
/// Every fragment except `recipe_link` has passed through the sanitizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredientText {
    /// Scaled quantity in decimal or fraction notation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Unit name, only present alongside a quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Food or referenced recipe name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ingredient note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// HTML link to the referenced recipe, if the ingredient is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_string_quantity_is_coerced() {
        assert_eq!(QuantityValue::from(" 1.5 ").as_number(), Some(1.5));
        assert_eq!(QuantityValue::from("2").as_number(), Some(2.0));
    }

    #[test]
    fn test_non_numeric_quantity_is_absent() {
        assert_eq!(QuantityValue::from("a pinch").as_number(), None);
        assert_eq!(QuantityValue::from("").as_number(), None);
        assert_eq!(QuantityValue::from("NaN").as_number(), None);
        assert_eq!(QuantityValue::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn test_deserialize_camel_case_ingredient() {
        let ingredient: Ingredient = serde_json::from_value(json!({
            "quantity": "3",
            "unit": {"name": "tablespoon", "abbreviation": "tbsp", "useAbbreviation": true},
            "food": {"name": "sugar"},
            "referencedRecipe": {"slug": "syrup", "name": "Syrup"}
        }))
        .unwrap();

        assert_eq!(ingredient.quantity(), Some(3.0));
        let unit = ingredient.unit.unwrap();
        assert!(unit.use_abbreviation);
        assert!(!unit.fraction);
        assert_eq!(unit.plural_name, None);
        assert_eq!(
            ingredient.referenced_recipe.unwrap().slug.as_deref(),
            Some("syrup")
        );
    }

    #[test]
    fn test_null_quantity() {
        let ingredient: Ingredient =
            serde_json::from_value(json!({"quantity": null, "note": "to taste"})).unwrap();
        assert_eq!(ingredient.quantity(), None);
    }

    #[test]
    fn test_parsed_text_skips_empty_fragments() {
        let parsed = ParsedIngredientText {
            quantity: Some("2".to_string()),
            name: Some("eggs".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value, json!({"quantity": "2", "name": "eggs"}));
    }
}
