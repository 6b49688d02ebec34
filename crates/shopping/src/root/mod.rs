mod generate;
mod toggle;

use std::ops::Deref;

use kondate_db::table::ShoppingListItem;
use kondate_shared::shopping::IngredientCategory;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::CategorizationService;

#[derive(Validate, Clone, Debug)]
pub struct AddInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 100))]
    pub amount: String,
    /// Derived from the name when not given.
    pub category: Option<IngredientCategory>,
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

    /// Manual entry. It lives until the next generation replaces the list.
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, input: AddInput) -> kondate_shared::Result<i64> {
        input.validate()?;

        let category = input
            .category
            .unwrap_or_else(|| CategorizationService::categorize(&input.name));

        let statement = Query::insert()
            .into_table(ShoppingListItem::Table)
            .columns([
                ShoppingListItem::Name,
                ShoppingListItem::Amount,
                ShoppingListItem::Category,
                ShoppingListItem::Checked,
            ])
            .values_panic([
                input.name.into(),
                input.amount.into(),
                category.to_string().into(),
                false.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(item_id = id, "shopping list item added");

        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> kondate_shared::Result<()> {
        let (sql, values) = Query::delete()
            .from_table(ShoppingListItem::Table)
            .and_where(Expr::col(ShoppingListItem::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            kondate_shared::not_found!("shopping list item {id}");
        }

        Ok(())
    }

    /// Removes every checked item and returns how many were removed.
    #[tracing::instrument(skip(self))]
    pub async fn delete_checked(&self) -> kondate_shared::Result<u64> {
        let (sql, values) = Query::delete()
            .from_table(ShoppingListItem::Table)
            .and_where(Expr::col(ShoppingListItem::Checked).eq(true))
            .build_sqlx(SqliteQueryBuilder);

        let removed = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .rows_affected();

        tracing::info!(removed, "checked shopping list items removed");

        Ok(removed)
    }
}
