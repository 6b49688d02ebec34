use kondate_db::table::Recipe;
use kondate_shared::recipe::{Ingredient, RecipeDraft};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Validate, Clone, Debug, Default, Deserialize)]
pub struct RecipeInput {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub cook_time: u32,
    #[validate(range(min = 1))]
    pub servings: u32,
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl From<RecipeDraft> for RecipeInput {
    fn from(draft: RecipeDraft) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            category: draft.category,
            cook_time: draft.cook_time,
            servings: draft.servings,
            tags: draft.tags,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            ..Default::default()
        }
    }
}

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub async fn create(&self, input: impl Into<RecipeInput>) -> kondate_shared::Result<i64> {
        let input = input.into();
        input.validate()?;

        let timestamp = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Name,
                Recipe::Description,
                Recipe::Category,
                Recipe::CookTime,
                Recipe::Servings,
                Recipe::Calories,
                Recipe::Protein,
                Recipe::Carbs,
                Recipe::Fat,
                Recipe::ImageUrl,
                Recipe::Tags,
                Recipe::Ingredients,
                Recipe::Instructions,
                Recipe::CreatedAt,
            ])
            .values_panic([
                input.name.to_owned().into(),
                input.description.into(),
                input.category.into(),
                input.cook_time.into(),
                input.servings.into(),
                input.calories.into(),
                input.protein.into(),
                input.carbs.into(),
                input.fat.into(),
                input.image_url.into(),
                serde_json::to_value(&input.tags)?.into(),
                serde_json::to_value(&input.ingredients)?.into(),
                serde_json::to_value(&input.instructions)?.into(),
                timestamp.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(recipe_id = id, name = %input.name, "recipe created");

        Ok(id)
    }
}
