use kondate_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::RecipeInput;

impl super::Command {
    #[tracing::instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: RecipeInput) -> kondate_shared::Result<()> {
        input.validate()?;

        let statement = Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Name, input.name.into()),
                (Recipe::Description, input.description.into()),
                (Recipe::Category, input.category.into()),
                (Recipe::CookTime, input.cook_time.into()),
                (Recipe::Servings, input.servings.into()),
                (Recipe::Calories, input.calories.into()),
                (Recipe::Protein, input.protein.into()),
                (Recipe::Carbs, input.carbs.into()),
                (Recipe::Fat, input.fat.into()),
                (Recipe::ImageUrl, input.image_url.into()),
                (Recipe::Tags, serde_json::to_value(&input.tags)?.into()),
                (
                    Recipe::Ingredients,
                    serde_json::to_value(&input.ingredients)?.into(),
                ),
                (
                    Recipe::Instructions,
                    serde_json::to_value(&input.instructions)?.into(),
                ),
            ])
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            kondate_shared::not_found!("recipe {id}");
        }

        tracing::info!("recipe updated");

        Ok(())
    }
}
