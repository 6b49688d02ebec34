use kondate_db::table::ShoppingListItem;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{ShoppingListItemView, consolidate};

impl super::Command {
    /// Rebuilds the whole shopping list from the given meal plans.
    ///
    /// Meal plans are read in the given order. Unknown meal plans and meal
    /// plans whose recipe no longer exists are skipped. The previous list,
    /// manual entries and checked state included, is replaced in a single
    /// transaction and ids restart at 1.
    #[tracing::instrument(skip(self))]
    pub async fn generate(
        &self,
        meal_plan_ids: &[i64],
    ) -> kondate_shared::Result<Vec<ShoppingListItemView>> {
        let meal_plans = kondate_mealplan::Query(self.state.clone());
        let recipes = kondate_recipe::Query(self.state.clone());
        let mut ingredient_lists = vec![];

        for &meal_plan_id in meal_plan_ids {
            let Some(meal_plan) = meal_plans.find(meal_plan_id).await? else {
                tracing::debug!(meal_plan_id, "meal plan not found, skipped");
                continue;
            };

            let Some(recipe) = recipes.find(meal_plan.recipe_id).await? else {
                tracing::debug!(
                    meal_plan_id,
                    recipe_id = meal_plan.recipe_id,
                    "recipe not found, skipped"
                );
                continue;
            };

            ingredient_lists.push(recipe.ingredients.0);
        }

        let items = consolidate(&ingredient_lists)
            .into_iter()
            .zip(1..)
            .map(|(item, id)| ShoppingListItemView {
                id,
                name: item.name,
                amount: item.amount,
                category: sqlx::types::Text(item.category),
                checked: false,
            })
            .collect::<Vec<_>>();

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = Query::delete()
            .from_table(ShoppingListItem::Table)
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !items.is_empty() {
            let mut statement = Query::insert()
                .into_table(ShoppingListItem::Table)
                .columns([
                    ShoppingListItem::Id,
                    ShoppingListItem::Name,
                    ShoppingListItem::Amount,
                    ShoppingListItem::Category,
                    ShoppingListItem::Checked,
                ])
                .to_owned();

            for item in &items {
                statement.values_panic([
                    item.id.into(),
                    item.name.to_owned().into(),
                    item.amount.to_owned().into(),
                    item.category.0.to_string().into(),
                    item.checked.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            meal_plans = meal_plan_ids.len(),
            recipes = ingredient_lists.len(),
            items = items.len(),
            "shopping list generated"
        );

        Ok(items)
    }
}
