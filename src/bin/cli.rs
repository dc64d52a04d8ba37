use clap::{Args, Parser, Subcommand};
use user_manager_service::{
    cli::{
        db::db_init,
        manager::{add_manager, list_managers, set_manager_status},
    },
    core::db::{init_pool, init_schema},
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Manager related command
    Manager(ManagerArgs),
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Create tables and seed sample managers when empty
    Init,
}

#[derive(Debug, Args)]
struct ManagerArgs {
    #[command(subcommand)]
    command: ManagerCommands,
}

#[derive(Debug, Subcommand)]
enum ManagerCommands {
    /// Insert a manager unless it already exists
    Add {
        manager_id: String,
        #[arg(long)]
        inactive: bool,
    },
    /// List all managers
    List,
    /// Activate or deactivate a manager
    SetStatus {
        manager_id: String,
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = get_config()?;
    match &cli.command {
        Commands::Db(db_args) => match &db_args.command {
            DbCommands::Init => {
                println!("init database on {}", config.database_url);
                db_init(&config).await?;
            }
        },
        Commands::Manager(manager_args) => {
            let pool = init_pool(&config).await?;
            init_schema(&pool).await?;
            match &manager_args.command {
                ManagerCommands::Add {
                    manager_id,
                    inactive,
                } => add_manager(&pool, manager_id, !inactive).await?,
                ManagerCommands::List => {
                    list_managers(&pool).await?;
                }
                ManagerCommands::SetStatus { manager_id, active } => {
                    set_manager_status(&pool, manager_id, *active).await?
                }
            }
            pool.close().await;
        }
    }
    Ok(())
}
