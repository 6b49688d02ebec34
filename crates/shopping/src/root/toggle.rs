use kondate_db::table::ShoppingListItem;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn check(&self, id: i64) -> kondate_shared::Result<()> {
        self.set_checked(id, true).await
    }

    pub async fn uncheck(&self, id: i64) -> kondate_shared::Result<()> {
        self.set_checked(id, false).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_checked(&self, id: i64, checked: bool) -> kondate_shared::Result<()> {
        let statement = Query::update()
            .table(ShoppingListItem::Table)
            .values([(ShoppingListItem::Checked, checked.into())])
            .and_where(Expr::col(ShoppingListItem::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            kondate_shared::not_found!("shopping list item {id}");
        }

        Ok(())
    }
}
