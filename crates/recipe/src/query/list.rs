use kondate_db::table::Recipe;
use kondate_shared::recipe::Ingredient;
use sea_query::{Cond, Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecipeView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub cook_time: u32,
    pub servings: u32,
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
    pub image_url: Option<String>,
    pub tags: sqlx::types::Json<Vec<String>>,
    pub ingredients: sqlx::types::Json<Vec<Ingredient>>,
    pub instructions: sqlx::types::Json<Vec<String>>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Case-insensitive substring of the name or the description.
    pub query: Option<String>,
    pub category: Option<String>,
    /// Upper bound on the cook time, inclusive.
    pub max_cook_time: Option<u32>,
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Recipe::Id,
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
        .from(Recipe::Table)
        .to_owned()
}

impl super::Query {
    pub async fn find(&self, id: i64) -> kondate_shared::Result<Option<RecipeView>> {
        let statement = select()
            .and_where(Expr::col(Recipe::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn list(&self) -> kondate_shared::Result<Vec<RecipeView>> {
        self.search(SearchInput::default()).await
    }

    pub async fn search(&self, input: SearchInput) -> kondate_shared::Result<Vec<RecipeView>> {
        let mut statement = select();

        if let Some(query) = input.query.filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", query.trim().to_lowercase());
            statement.cond_where(
                Cond::any()
                    .add(Expr::cust_with_values("LOWER(name) LIKE ?", [pattern.to_owned()]))
                    .add(Expr::cust_with_values("LOWER(description) LIKE ?", [pattern])),
            );
        }

        if let Some(category) = input.category {
            statement.and_where(Expr::col(Recipe::Category).eq(category));
        }

        if let Some(max_cook_time) = input.max_cook_time {
            statement.and_where(Expr::col(Recipe::CookTime).lte(max_cook_time));
        }

        statement.order_by(Recipe::Id, Order::Asc);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
