mod add_cmd;
mod config;
mod import_cmd;
mod show_cmd;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use mealweek_store::PlanStore;

use config::MealweekConfig;

#[derive(Parser)]
#[command(name = "mealweek", about = "Weekly meal planner with CSV import")]
struct Cli {
    /// Meal plan data file (overrides MEALWEEK_DATA_FILE env var)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a mealweek config file
    Init {
        /// Data file path to record (defaults to the XDG data location)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Assign a meal to a date and slot
    Add {
        /// Date in YYYY-MM-DD form
        date: NaiveDate,
        /// Meal slot: breakfast, lunch, or dinner
        slot: String,
        /// Meal name
        name: String,
    },
    /// Import meals from a CSV file (header line, then date,meal_type,meal_name rows)
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
    /// Show the week view (all three slots for seven days)
    Show {
        /// Anchor date; the week containing it is shown (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Shift the view by whole weeks (e.g. -1 for last week)
        #[arg(long, default_value_t = 0)]
        weeks: i64,
    },
}

/// Execute the `mealweek init` command: write config file.
fn cmd_init(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let config_path = config::config_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    let data_path = path.unwrap_or_else(mealweek_store::StoreConfig::default_data_file);

    let cfg = config::ConfigFile {
        storage: config::StorageSection {
            path: data_path.clone(),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", config_path.display());
    println!("  storage.path = {}", data_path.display());
    println!();
    println!("Next: `mealweek add <date> <slot> <name>` or `mealweek import <file>`.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => {
            cmd_init(path, force)?;
        }
        Commands::Add { date, slot, name } => {
            let resolved = MealweekConfig::resolve(cli.data_file.as_deref());
            let store = PlanStore::open(&resolved.store_config);
            add_cmd::run_add(&store, date, &slot, &name)?;
        }
        Commands::Import { file } => {
            let resolved = MealweekConfig::resolve(cli.data_file.as_deref());
            let store = PlanStore::open(&resolved.store_config);
            import_cmd::run_import(&store, &file)?;
        }
        Commands::Show { date, weeks } => {
            let resolved = MealweekConfig::resolve(cli.data_file.as_deref());
            let store = PlanStore::open(&resolved.store_config);
            show_cmd::run_show(&store, date, weeks)?;
        }
    }

    Ok(())
}
