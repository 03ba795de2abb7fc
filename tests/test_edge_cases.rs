use ingredient_text::{
    format_quantity, render, render_flat, Fraction, FractionConverter, Ingredient,
    IngredientTextParser, ParsedIngredientText, RenderMode,
};
use serde_json::json;

struct ZeroFraction;

impl FractionConverter for ZeroFraction {
    fn to_fraction(&self, _value: f64, max_denominator: u32, _simplify: bool) -> Fraction {
        Fraction::new(0, 0, i64::from(max_denominator))
    }
}

fn ingredient(value: serde_json::Value) -> Ingredient {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_empty_ingredient() {
    let empty = Ingredient::default();
    let parsed = render(&empty, 1.0, RenderMode::Markup, Some("home"));

    assert_eq!(parsed, ParsedIngredientText::default());
    assert_eq!(render_flat(&empty, 1.0, RenderMode::Markup), "");
}

#[test]
fn test_unparseable_quantity_is_absent() {
    let pinch = ingredient(json!({
        "quantity": "a pinch",
        "unit": {"name": "cup", "pluralName": "cups"},
        "food": {"name": "salt"}
    }));
    let parsed = render(&pinch, 1.0, RenderMode::Markup, None);

    assert_eq!(parsed.quantity, None);
    assert_eq!(parsed.unit, None);
    assert_eq!(parsed.name.as_deref(), Some("salt"));
}

#[test]
fn test_zero_quantity_hides_quantity_and_unit() {
    let zero = ingredient(json!({
        "quantity": 0,
        "unit": {"name": "cup", "pluralName": "cups"},
        "food": {"name": "apple", "pluralName": "apples"}
    }));
    assert_eq!(render_flat(&zero, 1.0, RenderMode::Markup), "apples");
}

#[test]
fn test_zero_scale() {
    let apples = ingredient(json!({
        "quantity": 2,
        "unit": {"name": "cup", "pluralName": "cups"},
        "food": {"name": "apple", "pluralName": "apples"}
    }));
    let parsed = render(&apples, 0.0, RenderMode::Markup, None);

    assert_eq!(parsed.quantity.as_deref(), Some("&lt; 0.001"));
    assert_eq!(parsed.unit.as_deref(), Some("cups"));
}

#[test]
fn test_zero_fraction_from_converter_renders_empty() {
    assert_eq!(
        format_quantity(Some(0.5), 1.0, true, RenderMode::Markup),
        "<sup>1</sup><span>&frasl;</span><sub>2</sub>"
    );

    let parser = IngredientTextParser::builder()
        .fraction_converter(ZeroFraction)
        .build();
    let half = ingredient(json!({
        "quantity": 0.5,
        "unit": {"name": "cup", "pluralName": "cups", "fraction": true},
        "food": {"name": "milk"}
    }));

    assert_eq!(parser.render_flat(&half, 1.0, RenderMode::Markup), "cup milk");
}

#[test]
fn test_missing_plural_names_fall_back() {
    let rice = ingredient(json!({
        "quantity": 3,
        "unit": {"name": "handful"},
        "food": {"name": "rice"}
    }));
    assert_eq!(render_flat(&rice, 1.0, RenderMode::Markup), "3 handful rice");
}

#[test]
fn test_recipe_reference_without_name() {
    let nameless = ingredient(json!({
        "quantity": 1,
        "food": {"name": "flour"},
        "referencedRecipe": {"slug": "mystery"}
    }));
    let parsed = render(&nameless, 1.0, RenderMode::Markup, Some("home"));

    assert_eq!(parsed.name, None);
    assert_eq!(parsed.recipe_link, None);
}

#[test]
fn test_note_only() {
    let note = ingredient(json!({"note": "  salt   to taste "}));
    assert_eq!(render_flat(&note, 1.0, RenderMode::Markup), "salt to taste");
}
