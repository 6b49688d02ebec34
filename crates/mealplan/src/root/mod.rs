use std::ops::Deref;

use kondate_db::table::MealPlan;
use kondate_shared::mealplan::MealType;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;
use validator::Validate;

#[derive(Validate, Clone, Debug)]
pub struct MealPlanInput {
    pub date: Date,
    pub meal_type: MealType,
    #[validate(range(min = 1))]
    pub recipe_id: i64,
}

#[derive(Clone)]
pub struct Command {
    state: kondate_shared::State,
}

impl Deref for Command {
    type Target = kondate_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: kondate_shared::State) -> Self {
        Self { state }
    }

    /// The recipe reference is stored as given, it is not checked against
    /// the recipe table.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, input: MealPlanInput) -> kondate_shared::Result<i64> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(MealPlan::Table)
            .columns([MealPlan::Date, MealPlan::MealType, MealPlan::RecipeId])
            .values_panic([
                crate::day_timestamp(input.date).into(),
                input.meal_type.to_string().into(),
                input.recipe_id.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(meal_plan_id = id, "meal plan created");

        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: i64, input: MealPlanInput) -> kondate_shared::Result<()> {
        input.validate()?;

        let statement = Query::update()
            .table(MealPlan::Table)
            .values([
                (MealPlan::Date, crate::day_timestamp(input.date).into()),
                (MealPlan::MealType, input.meal_type.to_string().into()),
                (MealPlan::RecipeId, input.recipe_id.into()),
            ])
            .and_where(Expr::col(MealPlan::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            kondate_shared::not_found!("meal plan {id}");
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> kondate_shared::Result<()> {
        let (sql, values) = Query::delete()
            .from_table(MealPlan::Table)
            .and_where(Expr::col(MealPlan::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            kondate_shared::not_found!("meal plan {id}");
        }

        tracing::info!("meal plan deleted");

        Ok(())
    }
}
