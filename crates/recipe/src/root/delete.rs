use kondate_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Meal plans pointing at the recipe are left in place.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> kondate_shared::Result<()> {
        let (sql, values) = Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            kondate_shared::not_found!("recipe {id}");
        }

        tracing::info!("recipe deleted");

        Ok(())
    }
}
