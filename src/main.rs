use log::{debug, error};
use std::env;
use std::fs;
use std::io::{self, Read};

use ingredient_text::{parser_from_config, Ingredient, IngredientTextError, RenderMode};

const USAGE: &str = "Usage: ingredient-text [--scale N] [--plain] [--group SLUG] [--fields] [FILE]";

#[derive(Debug)]
struct Options {
    scale: f64,
    mode: RenderMode,
    group: Option<String>,
    fields: bool,
    path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, IngredientTextError> {
    let mut options = Options {
        scale: 1.0,
        mode: RenderMode::Markup,
        group: None,
        fields: false,
        path: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--scale" => {
                let value = iter.next().ok_or_else(|| {
                    IngredientTextError::InvalidInput("--scale needs a value".to_string())
                })?;
                options.scale = value.parse().map_err(|_| {
                    IngredientTextError::InvalidInput(format!("Invalid scale: {value}"))
                })?;
            }
            "--plain" => options.mode = RenderMode::PlainText,
            "--fields" => options.fields = true,
            "--group" => {
                let value = iter.next().ok_or_else(|| {
                    IngredientTextError::InvalidInput("--group needs a value".to_string())
                })?;
                options.group = Some(value.clone());
            }
            other if other.starts_with("--") => {
                return Err(IngredientTextError::InvalidInput(format!(
                    "Unknown option {other}\n{USAGE}"
                )));
            }
            path => options.path = Some(path.to_string()),
        }
    }

    Ok(options)
}

/// Accepts a single ingredient object or an array of them
fn parse_ingredients(input: &str) -> Result<Vec<Ingredient>, IngredientTextError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let ingredients = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(ingredients)
}

fn run() -> Result<(), IngredientTextError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;
    debug!("{:?}", options);

    let input = match &options.path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let parser = parser_from_config()?;
    for ingredient in parse_ingredients(&input)? {
        if options.fields {
            let parsed = parser.render(
                &ingredient,
                options.scale,
                options.mode,
                options.group.as_deref(),
            );
            println!("{}", serde_json::to_string(&parsed)?);
        } else {
            println!(
                "{}",
                parser.render_flat(&ingredient, options.scale, options.mode)
            );
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
