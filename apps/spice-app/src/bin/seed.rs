//! # Store Seeder
//!
//! Writes the built-in collections and the default admin account into a
//! store file, so a fresh install has something to show.
//!
//! ## Usage
//! ```bash
//! # Seed ./spice_dev.db (default)
//! cargo run -p spice-app --bin seed
//!
//! # Specify database path
//! cargo run -p spice-app --bin seed -- --db ./data/spice.db
//!
//! # Drop every collection first
//! cargo run -p spice-app --bin seed -- --reset
//! ```
//!
//! Collections that already exist are left untouched unless `--reset` is
//! given.

use std::env;

use spice_app::auth::DEFAULT_ADMIN_EMAIL;
use spice_app::bootstrap::seed_defaults;
use spice_app::init_tracing;
use spice_store::{CollectionKey, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./spice_dev.db");
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Spice & Soul Store Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./spice_dev.db)");
                println!("      --reset        Remove every collection before seeding");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Spice & Soul Store Seeder");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if reset {
        let mut removed = 0;
        for key in CollectionKey::ALL {
            if db.collections().remove(key).await? {
                removed += 1;
            }
        }
        println!("✓ Removed {} collections", removed);
    }

    let written = seed_defaults(&db).await?;

    println!();
    if written.is_empty() {
        println!("⚠ Every collection already exists");
        println!("  Nothing written. Use --reset to start over.");
    } else {
        for key in &written {
            println!("  Wrote {}", key);
        }
        if written.contains(&CollectionKey::Users) {
            println!("  Default admin login: {}", DEFAULT_ADMIN_EMAIL);
        }
    }

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}
