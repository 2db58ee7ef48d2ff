//! # Seed Data Generator
//!
//! Populates the database with sample orders for development.
//!
//! ## Usage
//! ```bash
//! # Generate 25 orders (default)
//! cargo run -p zaiqa-db --bin seed
//!
//! # Generate a custom amount
//! cargo run -p zaiqa-db --bin seed -- --count 100
//!
//! # Specify database path
//! cargo run -p zaiqa-db --bin seed -- --db ./data/zaiqa.db
//! ```
//!
//! Orders are generated deterministically from the catalog: every run of
//! the same count produces the same spread of restaurants, menu items,
//! quantities and payment types. A sales report is printed at the end.

use std::env;

use tracing_subscriber::EnvFilter;

use zaiqa_core::{OrderDraft, MENU_ITEMS, RESTAURANTS};
use zaiqa_db::{Database, DbConfig};

/// Sample customers for generated orders.
const CUSTOMERS: &[(&str, &str)] = &[
    ("Asha", "12 Elm Street"),
    ("Ravi", "48 Banjara Hills"),
    ("Meera", "7 Jubilee Hills"),
    ("Farhan", "221 Charminar Road"),
    ("Lakshmi", "3 Necklace Road"),
    ("Imran", "90 Begumpet"),
    ("Divya", "15 Gachibowli"),
    ("Arjun", "56 Secunderabad"),
];

/// Payment types cycled across generated orders.
const PAYMENT_TYPES: &[&str] = &["cash", "card", "online"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut db_path = String::from("./zaiqa_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Zaiqa Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of orders to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: ./zaiqa_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Zaiqa Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!("Orders:   {}", count);
    println!();

    // Connect to database
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("Connected to database, migrations applied");

    let existing = db.orders().count().await?;
    if existing > 0 {
        println!("Database already has {} orders", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate orders
    println!();
    println!("Generating orders...");

    let repo = db.orders();
    let mut generated = 0;

    for seed in 0..count {
        let order = generate_order(seed);

        if let Err(e) = repo.insert(&order).await {
            eprintln!("Failed to insert order {}: {}", seed, e);
            continue;
        }

        generated += 1;
    }

    println!("Generated {} orders", generated);

    // Print the sales report
    println!();
    println!("Sales report (total quantity per restaurant):");
    for row in repo.aggregate_quantity_by_restaurant().await? {
        println!("  {:<32} {}", row.restaurant, row.total_quantity);
    }

    println!();
    println!("Seed complete!");

    Ok(())
}

/// Generates a single order deterministically from its index.
fn generate_order(seed: usize) -> OrderDraft {
    let (customer, address) = CUSTOMERS[seed % CUSTOMERS.len()];
    let restaurant = RESTAURANTS[(seed * 3) % RESTAURANTS.len()];
    let item = &MENU_ITEMS[(seed * 7) % MENU_ITEMS.len()];
    let quantity = 1 + ((seed * 17) % 4) as i64;
    let payment_type = PAYMENT_TYPES[seed % PAYMENT_TYPES.len()];

    OrderDraft {
        customer_name: customer.to_string(),
        address: address.to_string(),
        restaurant: restaurant.to_string(),
        menu_item: item.name.to_string(),
        quantity,
        unit_price: item.price,
        payment_type: payment_type.to_string(),
    }
}
