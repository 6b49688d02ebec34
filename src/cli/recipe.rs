use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use kondate_recipe::{Fetcher, Importer, SearchInput};
use serde_json::json;

use crate::config::Config;

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Fetch a recipe page and store the extracted recipe
    Import {
        url: String,

        /// Print the extracted recipe without storing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Extract a recipe from a saved page
    Parse { file: PathBuf },
    /// List recipes, optionally filtered
    List {
        /// Matches name or description, case-insensitive
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Maximum cook time in minutes
        #[arg(long)]
        max_cook_time: Option<u32>,
    },
    Show { id: i64 },
    Delete { id: i64 },
}

pub async fn run(config: &Config, command: RecipeCommands) -> Result<()> {
    match command {
        RecipeCommands::Import { url, dry_run } => {
            let fetcher = Fetcher::new(config.fetch.timeout(), &config.fetch.user_agent)?;
            let draft = Importer::new(fetcher).import(&url).await?;

            if dry_run {
                return super::print_json(&draft);
            }

            let state = crate::db::create_state(&config.database).await?;
            let id = kondate_recipe::Command::new(state)
                .create(draft.clone())
                .await?;

            super::print_json(&json!({ "id": id, "recipe": draft }))
        }
        RecipeCommands::Parse { file } => {
            let markup = tokio::fs::read_to_string(&file).await?;
            let draft = kondate_recipe::normalize(&markup)?;

            super::print_json(&draft)
        }
        RecipeCommands::List {
            query,
            category,
            max_cook_time,
        } => {
            let state = crate::db::create_state(&config.database).await?;
            let recipes = kondate_recipe::Query(state)
                .search(SearchInput {
                    query,
                    category,
                    max_cook_time,
                })
                .await?;

            super::print_json(&recipes)
        }
        RecipeCommands::Show { id } => {
            let state = crate::db::create_state(&config.database).await?;
            let Some(recipe) = kondate_recipe::Query(state).find(id).await? else {
                anyhow::bail!("recipe {id} not found");
            };

            super::print_json(&recipe)
        }
        RecipeCommands::Delete { id } => {
            let state = crate::db::create_state(&config.database).await?;
            kondate_recipe::Command::new(state).delete(id).await?;

            super::print_json(&json!({ "deleted": id }))
        }
    }
}
