use std::ops::Deref;

use kondate_db::table::MealPlan;
use kondate_shared::mealplan::MealType;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::Date;

#[derive(Debug, Clone, FromRow)]
pub struct MealPlanView {
    pub id: i64,
    pub date: i64,
    pub meal_type: sqlx::types::Text<MealType>,
    pub recipe_id: i64,
}

impl MealPlanView {
    pub fn day(&self) -> kondate_shared::Result<Date> {
        crate::day_from_timestamp(self.date)
    }
}

#[derive(Clone)]
pub struct Query(pub kondate_shared::State);

impl Deref for Query {
    type Target = kondate_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            MealPlan::Id,
            MealPlan::Date,
            MealPlan::MealType,
            MealPlan::RecipeId,
        ])
        .from(MealPlan::Table)
        .order_by(MealPlan::Date, Order::Asc)
        .order_by(MealPlan::Id, Order::Asc)
        .to_owned()
}

impl Query {
    pub async fn find(&self, id: i64) -> kondate_shared::Result<Option<MealPlanView>> {
        let statement = select()
            .and_where(Expr::col(MealPlan::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn list(&self) -> kondate_shared::Result<Vec<MealPlanView>> {
        let (sql, values) = select().build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    /// Meal plans scheduled between `start` and `end`, both days included.
    pub async fn list_range(
        &self,
        start: Date,
        end: Date,
    ) -> kondate_shared::Result<Vec<MealPlanView>> {
        let statement = select()
            .and_where(Expr::col(MealPlan::Date).gte(crate::day_timestamp(start)))
            .and_where(Expr::col(MealPlan::Date).lte(crate::day_timestamp(end)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
