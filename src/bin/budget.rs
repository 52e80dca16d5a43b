use std::{error::Error, path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use budget_store::{
    Category, DeletePolicy, DeleteRequest, Field, Latency, MatchQuery, NewBudget, NewExpense,
    RECENT_EXPENSES_LIMIT, Store, StoreConfig,
};

/// Manage budgets and expenses stored in a local database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: PathBuf,

    /// The ID of the signed in user.
    #[arg(long, short)]
    user: Option<String>,

    /// The longest simulated delay for each operation, in milliseconds.
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Delete a budget's expenses when the budget is deleted.
    #[arg(long)]
    cascade: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a budget.
    AddBudget {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: f64,
    },
    /// Create an expense against a budget.
    AddExpense {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        budget_id: String,
    },
    /// List every record in a category ("budgets" or "expenses").
    List { category: String },
    /// List the records in a category whose field equals a value.
    Find {
        category: String,
        key: String,
        value: String,
    },
    /// Delete a record.
    Delete { category: String, id: String },
    /// Show how much has been spent against each budget.
    Overview,
    /// Show the most recent expenses.
    Recent {
        #[arg(long, default_value_t = RECENT_EXPENSES_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();
    let config = StoreConfig {
        db_path: Some(args.db_path),
        latency: Latency::up_to_millis(args.latency_ms),
        delete_policy: if args.cascade {
            DeletePolicy::Cascade
        } else {
            DeletePolicy::Orphan
        },
    };
    let store = Store::open(&config)?;
    let user_id = args.user;

    match args.command {
        Command::AddBudget { name, amount } => {
            let budget = store
                .create_budget(NewBudget {
                    name,
                    amount: Some(amount),
                    user_id,
                })
                .await?;
            print_json(&budget)?;
        }
        Command::AddExpense {
            name,
            amount,
            budget_id,
        } => {
            let expense = store
                .create_expense(NewExpense {
                    name,
                    amount: Some(amount),
                    budget_id,
                    user_id,
                })
                .await?;
            print_json(&expense)?;
        }
        Command::List { category } => {
            let records = store
                .fetch_all(Category::from_str(&category)?, user_id.as_deref())
                .await?;
            print_json(&records)?;
        }
        Command::Find {
            category,
            key,
            value,
        } => {
            let records = store
                .find_matching(MatchQuery {
                    category: Category::from_str(&category)?,
                    key: Field::from_str(&key)?,
                    value,
                    user_id,
                })
                .await?;
            print_json(&records)?;
        }
        Command::Delete { category, id } => {
            store
                .delete_record(DeleteRequest {
                    category: Category::from_str(&category)?,
                    id,
                    user_id,
                })
                .await?;
            println!("Deleted.");
        }
        Command::Overview => {
            let overviews = store.budget_overviews(user_id.as_deref()).await?;
            print_json(&overviews)?;
        }
        Command::Recent { limit } => {
            let expenses = store.recent_expenses(user_id.as_deref(), limit).await?;
            print_json(&expenses)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

/// Log to stderr so that stdout only contains command output.
///
/// The level defaults to `info` and can be changed with `RUST_LOG`.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).init();
}
