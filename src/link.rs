use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::RecipeRef;

/// Anchor pointing at a referenced recipe inside a group
///
/// Returns `None` unless the slug, the name and the group are all present.
/// The markup is built here, so only the interpolated values are escaped.
pub fn build_recipe_link(recipe: Option<&RecipeRef>, group_slug: Option<&str>) -> Option<String> {
    let recipe = recipe?;
    let slug = recipe.slug.as_deref().filter(|s| !s.is_empty())?;
    let name = recipe.name.as_deref().filter(|s| !s.is_empty())?;
    let group_slug = group_slug.filter(|s| !s.is_empty())?;

    Some(format!(
        r#"<a href="/g/{}/r/{}" target="_blank">{}</a>"#,
        encode_double_quoted_attribute(group_slug),
        encode_double_quoted_attribute(slug),
        encode_text(name)
    ))
}
