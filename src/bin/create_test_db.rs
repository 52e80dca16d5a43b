use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use budget_store::{DeletePolicy, Latency, NewBudget, NewExpense, Store, StoreConfig};

/// A utility for creating a test database for budget_store.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The user that will own the test records.
    #[arg(long, short, default_value = "test")]
    user: String,
}

/// Create and populate a database for manual testing.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let store = Store::open(&StoreConfig {
        db_path: Some(output_path.to_path_buf()),
        latency: Latency::None,
        delete_policy: DeletePolicy::Orphan,
    })?;

    println!("Creating test budgets and expenses for {}...", args.user);

    let budgets = [("Groceries", 300.0), ("Rent", 1200.0), ("Fun", 80.0)];
    let expenses = [
        ("Groceries", "Milk", 4.0),
        ("Groceries", "Bread", 3.5),
        ("Groceries", "Vegetables", 22.8),
        ("Rent", "Weekly rent", 300.0),
        ("Fun", "Cinema", 18.0),
    ];

    for (budget_name, amount) in budgets {
        let budget = store
            .create_budget(NewBudget {
                name: budget_name.to_owned(),
                amount: Some(amount),
                user_id: Some(args.user.clone()),
            })
            .await?;

        for (_, name, amount) in expenses
            .iter()
            .filter(|(owner, _, _)| *owner == budget_name)
        {
            store
                .create_expense(NewExpense {
                    name: (*name).to_owned(),
                    amount: Some(*amount),
                    budget_id: budget.id.to_string(),
                    user_id: Some(args.user.clone()),
                })
                .await?;
        }
    }

    println!("Success!");

    Ok(())
}
