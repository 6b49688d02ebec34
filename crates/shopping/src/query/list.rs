use kondate_db::table::ShoppingListItem;
use kondate_shared::shopping::IngredientCategory;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ShoppingListItemView {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub category: sqlx::types::Text<IngredientCategory>,
    pub checked: bool,
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            ShoppingListItem::Id,
            ShoppingListItem::Name,
            ShoppingListItem::Amount,
            ShoppingListItem::Category,
            ShoppingListItem::Checked,
        ])
        .from(ShoppingListItem::Table)
        .order_by(ShoppingListItem::Id, Order::Asc)
        .to_owned()
}

impl super::Query {
    pub async fn list(&self) -> kondate_shared::Result<Vec<ShoppingListItemView>> {
        let (sql, values) = select().build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find(&self, id: i64) -> kondate_shared::Result<Option<ShoppingListItemView>> {
        let statement = select()
            .and_where(Expr::col(ShoppingListItem::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
