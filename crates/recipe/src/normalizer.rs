use kondate_shared::recipe::{
    DEFAULT_CATEGORY, DEFAULT_COOK_TIME, DEFAULT_SERVINGS, Ingredient, RecipeDraft,
};
use scraper::Html;

use crate::{heuristic, structured};

/// Fields resolved by one extraction pass, `None` when the pass found nothing.
#[derive(Debug, Default)]
pub(crate) struct Extracted {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cook_time: Option<u32>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

impl Extracted {
    fn overlay(self, other: Extracted) -> Self {
        Self {
            name: other.name.or(self.name),
            description: other.description.or(self.description),
            category: other.category.or(self.category),
            cook_time: other.cook_time.or(self.cook_time),
            ingredients: other.ingredients.or(self.ingredients),
            instructions: other.instructions.or(self.instructions),
        }
    }
}

/// Builds a [`RecipeDraft`] from a raw page.
///
/// The visible markup provides the baseline and any embedded JSON-LD recipe
/// overrides it field by field. Missing fields get their defaults, a page
/// without a recipe name is rejected.
pub fn normalize(markup: &str) -> kondate_shared::Result<RecipeDraft> {
    if markup.trim().is_empty() {
        return Err(kondate_shared::Error::Extraction("empty page".to_owned()));
    }

    let document = Html::parse_document(markup);
    let mut extracted = heuristic::extract(&document);

    if let Some(data) = structured::extract(&document) {
        extracted = extracted.overlay(data);
    }

    let Some(name) = extracted.name else {
        return Err(kondate_shared::Error::Extraction(
            "no recipe name found".to_owned(),
        ));
    };

    Ok(RecipeDraft {
        name,
        description: extracted.description.unwrap_or_default(),
        category: extracted
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
        cook_time: extracted.cook_time.unwrap_or(DEFAULT_COOK_TIME),
        servings: DEFAULT_SERVINGS,
        ingredients: extracted
            .ingredients
            .unwrap_or_default()
            .into_iter()
            .map(Ingredient::as_needed)
            .collect(),
        instructions: extracted.instructions.unwrap_or_default(),
        tags: vec![],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kondate_shared::recipe::AMOUNT_AS_NEEDED;

    #[test]
    fn test_structured_block_wins_field_by_field() {
        let draft = normalize(
            r#"<html><head>
                <meta name="description" content="From the meta tag">
                <script type="application/ld+json">
                {"@type": "Recipe", "name": "Miso Soup", "cookTime": "PT15M",
                 "recipeIngredient": ["tofu", "miso"]}
                </script>
            </head><body>
                <h1>Site</h1>
                <span class="recipe-name">Soup from markup</span>
                <span class="recipe-category">Soup</span>
                <span class="cook-time">40分</span>
                <ul class="ingredients"><li>water</li></ul>
                <ol class="instructions"><li>Boil.</li><li>Serve.</li></ol>
            </body></html>"#,
        )
        .unwrap();

        assert_eq!(draft.name, "Miso Soup");
        assert_eq!(draft.description, "From the meta tag");
        assert_eq!(draft.category, "Soup");
        assert_eq!(draft.cook_time, 15);
        assert_eq!(
            draft.ingredients,
            vec![Ingredient::as_needed("tofu"), Ingredient::as_needed("miso")]
        );
        assert_eq!(draft.instructions, vec!["Boil.", "Serve."]);
        assert_eq!(draft.servings, 2);
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_structured_only_page() {
        let draft = normalize(
            r#"<script type="application/ld+json">
            {"@type":"Recipe","name":"Miso Soup","totalTime":"PT15M","recipeIngredient":["Tofu","Wakame"]}
            </script>"#,
        )
        .unwrap();

        let mut expected = RecipeDraft::named("Miso Soup");
        expected.cook_time = 15;
        expected.ingredients = vec![Ingredient::as_needed("Tofu"), Ingredient::as_needed("Wakame")];

        assert_eq!(draft, expected);
    }

    #[test]
    fn test_defaults_on_bare_page() {
        let draft = normalize("<html><body><h1>Toast</h1></body></html>").unwrap();

        assert_eq!(draft, RecipeDraft::named("Toast"));
        assert_eq!(draft.category, "other");
        assert_eq!(draft.cook_time, 30);
    }

    #[test]
    fn test_heuristic_ingredients_get_placeholder_amount() {
        let draft = normalize(
            r#"<h1>Salad</h1><ul class="ingredients"><li>lettuce</li><li>tomato</li></ul>"#,
        )
        .unwrap();

        assert!(
            draft
                .ingredients
                .iter()
                .all(|ingredient| ingredient.amount == AMOUNT_AS_NEEDED)
        );
        assert_eq!(draft.ingredients.len(), 2);
    }

    #[test]
    fn test_zero_minutes_is_kept() {
        let draft =
            normalize(r#"<h1>Sashimi</h1><span class="cook-time">0 min</span>"#).unwrap();

        assert_eq!(draft.cook_time, 0);
    }

    #[test]
    fn test_prep_time_text_is_read_as_minutes() {
        let draft =
            normalize(r#"<h1>Curry</h1><span class="prep-time">Prep: 20 min</span>"#).unwrap();

        assert_eq!(draft.cook_time, 20);
    }

    #[test]
    fn test_single_string_instructions_replace_markup_steps() {
        let draft = normalize(
            r#"<h1>Salad</h1>
            <ol class="instructions"><li>Chop.</li><li>Toss.</li></ol>
            <script type="application/ld+json">
            {"@type": "Recipe", "name": "Salad", "recipeInstructions": "Mix and serve."}
            </script>"#,
        )
        .unwrap();

        assert_eq!(draft.instructions, vec!["Mix and serve."]);
    }

    #[test]
    fn test_unusable_pages() {
        let err = normalize("   ").unwrap_err();
        assert_eq!(err.to_string(), "recipe extraction failed: empty page");

        let err = normalize("<html><body><p>No title</p></body></html>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "recipe extraction failed: no recipe name found"
        );
    }
}
