use scraper::{ElementRef, Html, Selector};

use crate::{duration, normalizer::Extracted};

const NAME: &[&str] = &[".recipe-name", ".recipe-title", "h1"];
const CATEGORY: &[&str] = &[".recipe-category", "[itemprop=\"recipeCategory\"]", ".category"];
const COOK_TIME: &[&str] = &["[itemprop=\"totalTime\"]", ".cook-time", ".prep-time"];
const INGREDIENTS: &[&str] = &["[itemprop=\"recipeIngredient\"]", ".ingredient", ".ingredients li"];
const INSTRUCTIONS: &[&str] = &[
    "[itemprop=\"recipeInstructions\"]",
    ".instructions li",
    ".steps li",
];
const DESCRIPTION: &str = "meta[name=\"description\"]";

/// Resolves every field from the visible markup. Each field commits to the
/// first locator with a usable match, locators are never merged.
pub(crate) fn extract(document: &Html) -> Extracted {
    Extracted {
        name: first_text(document, NAME),
        description: description(document),
        category: first_text(document, CATEGORY),
        cook_time: cook_time(document),
        ingredients: first_list(document, INGREDIENTS),
        instructions: first_list(document, INSTRUCTIONS),
    }
}

fn select<'a>(document: &'a Html, locator: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(locator) {
        Ok(selector) => document.select(&selector).collect(),
        Err(err) => {
            tracing::warn!(locator, "invalid locator: {err}");
            vec![]
        }
    }
}

fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

fn first_text(document: &Html, locators: &[&str]) -> Option<String> {
    locators.iter().find_map(|locator| {
        select(document, locator)
            .iter()
            .map(text_of)
            .find(|text| !text.is_empty())
    })
}

fn first_list(document: &Html, locators: &[&str]) -> Option<Vec<String>> {
    locators.iter().find_map(|locator| {
        let items = select(document, locator)
            .iter()
            .map(text_of)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>();

        (!items.is_empty()).then_some(items)
    })
}

/// Text is preferred, the `content`/`datetime` attribute covers `<meta>` and `<time>`.
fn cook_time(document: &Html) -> Option<u32> {
    COOK_TIME.iter().find_map(|locator| {
        select(document, locator).iter().find_map(|element| {
            let text = text_of(element);
            if !text.is_empty() {
                return duration::parse_minutes(&text);
            }

            let value = element.attr("content").or_else(|| element.attr("datetime"))?;
            duration::parse_minutes(value)
        })
    })
}

fn description(document: &Html) -> Option<String> {
    select(document, DESCRIPTION)
        .iter()
        .filter_map(|element| element.attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(markup: &str) -> Extracted {
        extract(&Html::parse_document(markup))
    }

    #[test]
    fn test_name_falls_back_to_heading() {
        let extracted = parse("<html><body><h1>  Miso <em>Soup</em> </h1></body></html>");
        assert_eq!(extracted.name.as_deref(), Some("Miso Soup"));

        let extracted = parse(
            r#"<h1>Site title</h1><div class="recipe-title">Curry</div><p class="recipe-name"> </p>"#,
        );
        assert_eq!(extracted.name.as_deref(), Some("Curry"));
    }

    #[test]
    fn test_list_commits_to_first_locator() {
        let extracted = parse(
            r#"
            <span itemprop="recipeIngredient">tofu</span>
            <span itemprop="recipeIngredient"> </span>
            <ul class="ingredients"><li>miso</li><li>wakame</li></ul>
            "#,
        );
        assert_eq!(extracted.ingredients, Some(vec!["tofu".to_owned()]));

        let extracted = parse(
            r#"<ul class="ingredients"><li>miso</li><li></li><li>wakame</li></ul>"#,
        );
        assert_eq!(
            extracted.ingredients,
            Some(vec!["miso".to_owned(), "wakame".to_owned()])
        );
    }

    #[test]
    fn test_step_keeps_inner_line_breaks() {
        let extracted = parse(
            "<ol class=\"instructions\"><li>\n  Whisk the eggs.\nRest 5 min.\n</li></ol>",
        );
        assert_eq!(
            extracted.instructions,
            Some(vec!["Whisk the eggs.\nRest 5 min.".to_owned()])
        );
    }

    #[test]
    fn test_cook_time_locators() {
        let extracted = parse(r#"<span class="cook-time">約20分</span>"#);
        assert_eq!(extracted.cook_time, Some(20));

        let extracted = parse(
            r#"<meta itemprop="totalTime" content="PT45M"><span class="cook-time">10分</span>"#,
        );
        assert_eq!(extracted.cook_time, Some(45));

        let extracted = parse(
            r#"<span class="cook-time">quick</span><span class="prep-time">15 min</span>"#,
        );
        assert_eq!(extracted.cook_time, Some(15));
    }

    #[test]
    fn test_description_and_category() {
        let extracted = parse(
            r#"<head><meta name="description" content=" Warm soup. "></head>
            <body><a class="category">Soup</a></body>"#,
        );
        assert_eq!(extracted.description.as_deref(), Some("Warm soup."));
        assert_eq!(extracted.category.as_deref(), Some("Soup"));
    }

    #[test]
    fn test_empty_page() {
        let extracted = parse("<html><body><p>nothing here</p></body></html>");
        assert!(extracted.name.is_none());
        assert!(extracted.cook_time.is_none());
        assert!(extracted.ingredients.is_none());
        assert!(extracted.instructions.is_none());
    }
}
