use scraper::{Html, Selector};
use serde_json::Value;

use crate::{duration, normalizer::Extracted};

const JSON_LD: &str = "script[type=\"application/ld+json\"]";

/// Reads the first JSON-LD block that carries a `Recipe` node. Blocks that are
/// not valid JSON are skipped.
pub(crate) fn extract(document: &Html) -> Option<Extracted> {
    let selector = Selector::parse(JSON_LD).ok()?;

    document.select(&selector).find_map(|script| {
        let raw = script.text().collect::<String>();
        let value = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("failed to parse ld+json block: {err}");
                return None;
            }
        };

        find_recipe(&value).map(map_recipe)
    })
}

fn is_recipe(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind == "Recipe",
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind.as_str() == Some("Recipe")),
        _ => false,
    }
}

fn find_recipe(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(nodes) => nodes.iter().find(|node| is_recipe(node)),
        Value::Object(node) => {
            if is_recipe(value) {
                return Some(value);
            }

            node.get("@graph")?
                .as_array()?
                .iter()
                .find(|node| is_recipe(node))
        }
        _ => None,
    }
}

fn non_empty<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key)?.as_str().filter(|value| !value.trim().is_empty())
}

fn map_recipe(node: &Value) -> Extracted {
    let category = match node.get("recipeCategory") {
        Some(Value::Array(values)) => values.iter().find_map(Value::as_str),
        Some(value) => value.as_str(),
        None => None,
    }
    .map(str::trim)
    .filter(|category| !category.is_empty())
    .map(str::to_owned);

    let cook_time = non_empty(node, "totalTime")
        .or_else(|| non_empty(node, "cookTime"))
        .and_then(duration::parse_minutes);

    let ingredients = node
        .get("recipeIngredient")
        .and_then(Value::as_array)
        .map(|lines| {
            lines
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect()
        });

    Extracted {
        name: non_empty(node, "name").map(|name| name.trim().to_owned()),
        description: non_empty(node, "description").map(|text| text.trim().to_owned()),
        category,
        cook_time,
        ingredients,
        instructions: node.get("recipeInstructions").and_then(instructions),
    }
}

fn instructions(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(step) => {
            let step = step.trim();
            Some(if step.is_empty() {
                vec![]
            } else {
                vec![step.to_owned()]
            })
        }
        Value::Array(steps) => {
            let mut out = vec![];
            collect_steps(steps, &mut out);
            Some(out)
        }
        _ => None,
    }
}

fn collect_steps(steps: &[Value], out: &mut Vec<String>) {
    for step in steps {
        match step {
            Value::String(text) => push_step(text, out),
            Value::Object(_) => {
                if let Some(children) = step.get("itemListElement").and_then(Value::as_array) {
                    collect_steps(children, out);
                } else if let Some(text) = step.get("text").and_then(Value::as_str) {
                    push_step(text, out);
                }
            }
            _ => {}
        }
    }
}

fn push_step(text: &str, out: &mut Vec<String>) {
    let text = text.trim();
    if !text.is_empty() {
        out.push(text.to_owned());
    }
}
