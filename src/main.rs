use anyhow::Result;
use clap::{Parser, Subcommand};
use kondate::cli::{plan::PlanCommands, recipe::RecipeCommands, shopping::ShoppingCommands};

/// kondate - recipe import and shopping lists
#[derive(Parser)]
#[command(name = "kondate")]
#[command(about = "Import recipes from the web and build shopping lists from meal plans", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Import, inspect and manage recipes
    #[command(subcommand)]
    Recipe(RecipeCommands),
    /// Manage meal plans
    #[command(subcommand)]
    Plan(PlanCommands),
    /// Generate and manage the shopping list
    #[command(subcommand)]
    Shopping(ShoppingCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = kondate::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    kondate::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Migrate => kondate::cli::migrate::migrate(&config).await,
        Commands::Reset => kondate::cli::migrate::reset(&config).await,
        Commands::Recipe(command) => kondate::cli::recipe::run(&config, command).await,
        Commands::Plan(command) => kondate::cli::plan::run(&config, command).await,
        Commands::Shopping(command) => kondate::cli::shopping::run(&config, command).await,
    }
}
