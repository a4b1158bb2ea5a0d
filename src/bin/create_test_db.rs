use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use finance_tracker::initialize_db;

/// A utility for creating a test database for the finance tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Sample transactions as (days before today, amount, description, category).
const SAMPLE_TRANSACTIONS: [(i64, f64, &str, &str); 10] = [
    (0, 12.5, "Coffee and bagel", "food"),
    (1, 45.0, "Weekly groceries", "food"),
    (3, 2.8, "Bus fare", "transport"),
    (5, 15.99, "Movie ticket", "entertainment"),
    (8, 89.95, "Running shoes", "shopping"),
    (12, 120.0, "Electricity bill", "utilities"),
    (20, 35.0, "Pharmacy", "healthcare"),
    (33, 60.0, "Online course", "education"),
    (40, 200.0, "Transfer to savings", "savings"),
    (45, 68.4, "Dinner with friends", "food"),
];

/// Sample budgets for the current month as (category, amount).
const SAMPLE_BUDGETS: [(&str, f64); 4] = [
    ("food", 100.0),
    ("transport", 50.0),
    ("entertainment", 10.0),
    ("utilities", 150.0),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
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
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let now = OffsetDateTime::now_utc();
    let today = now.date();

    println!("Creating test transactions...");

    for (days_ago, amount, description, category) in SAMPLE_TRANSACTIONS {
        let date = today - Duration::days(days_ago);

        conn.execute(
            "INSERT INTO \"transaction\" (id, amount, description, date, category, created_at) \
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                Uuid::new_v4().to_string(),
                amount,
                description,
                date.to_string(),
                category,
                now,
            ),
        )?;
    }

    println!("Creating test budgets...");

    let month = format!("{:04}-{:02}", today.year(), u8::from(today.month()));

    for (category, amount) in SAMPLE_BUDGETS {
        conn.execute(
            "INSERT INTO budget (id, category, amount, month, created_at) \
            VALUES (?1, ?2, ?3, ?4, ?5)",
            (Uuid::new_v4().to_string(), category, amount, &month, now),
        )?;
    }

    println!("Success!");

    Ok(())
}
