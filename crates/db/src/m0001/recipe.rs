use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Recipe;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Recipe::Name).string().not_null())
        .col(
            ColumnDef::new(Recipe::Description)
                .text()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Recipe::Category).string().not_null())
        .col(ColumnDef::new(Recipe::CookTime).integer().not_null())
        .col(ColumnDef::new(Recipe::Servings).integer().not_null())
        .col(ColumnDef::new(Recipe::Calories).integer().null())
        .col(ColumnDef::new(Recipe::Protein).integer().null())
        .col(ColumnDef::new(Recipe::Carbs).integer().null())
        .col(ColumnDef::new(Recipe::Fat).integer().null())
        .col(ColumnDef::new(Recipe::ImageUrl).string().null())
        .col(ColumnDef::new(Recipe::Tags).text().not_null())
        .col(ColumnDef::new(Recipe::Ingredients).text().not_null())
        .col(ColumnDef::new(Recipe::Instructions).text().not_null())
        .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
