use crate::config::PluralFoodHandling;
use crate::model::{Food, Unit};

/// Whether the food name should take its plural form
///
/// `quantity` is the scaled amount, zero when the ingredient has none.
/// Any nonzero amount at or below one is singular under every policy.
pub fn should_pluralize_food(quantity: f64, has_unit: bool, policy: PluralFoodHandling) -> bool {
    let has_quantity = quantity != 0.0 && !quantity.is_nan();
    if has_quantity && quantity <= 1.0 {
        return false;
    }

    match policy {
        PluralFoodHandling::Always => true,
        PluralFoodHandling::Never => false,
        PluralFoodHandling::WithoutUnit => !(has_quantity && has_unit),
    }
}

/// Whether the unit name should take its plural form
///
/// A present quantity that scales to zero counts as plural ("0 cups").
pub fn should_pluralize_unit(quantity: Option<f64>, scale: f64) -> bool {
    match quantity {
        Some(q) => {
            let scaled = q * scale;
            scaled > 1.0 || scaled == 0.0
        }
        None => false,
    }
}

pub fn resolve_food_name(food: Option<&Food>, plural: bool) -> String {
    let Some(food) = food else {
        return String::new();
    };

    if plural {
        non_empty(food.plural_name.as_deref())
            .unwrap_or(food.name.as_str())
            .to_string()
    } else {
        food.name.clone()
    }
}

/// Display name of a unit, preferring the abbreviation when the unit asks for it
pub fn resolve_unit_name(unit: Option<&Unit>, plural: bool) -> String {
    let Some(unit) = unit else {
        return String::new();
    };

    if unit.use_abbreviation {
        let abbreviation = if plural {
            non_empty(unit.plural_abbreviation.as_deref())
                .or_else(|| non_empty(unit.abbreviation.as_deref()))
        } else {
            non_empty(unit.abbreviation.as_deref())
        };
        if let Some(abbreviation) = abbreviation {
            return abbreviation.to_string();
        }
    }

    if plural {
        non_empty(unit.plural_name.as_deref())
            .unwrap_or(unit.name.as_str())
            .to_string()
    } else {
        unit.name.clone()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
