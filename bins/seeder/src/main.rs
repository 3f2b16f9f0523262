//! Database seeder for Palm development and testing.
//!
//! Fills each empty ledger table with a handful of sample rows so the
//! dashboard has something to draw. Tables that already hold rows are left
//! alone. Run the migrator first.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use palm_core::sample;
use palm_db::LedgerRepository;
use palm_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = palm_db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    let repo = LedgerRepository::new(db);

    let ledgers = sample::ledgers().context("Failed to build sample rows")?;
    for (dataset, table) in ledgers {
        let name = dataset.table_name();
        if repo.count(dataset).await? > 0 {
            println!("  {name} already has rows, skipping...");
            continue;
        }
        let inserted = repo
            .insert(dataset, &table)
            .await
            .with_context(|| format!("Failed to seed {name}"))?;
        println!("  {name}: {inserted} rows");
    }

    println!("Seeding complete!");
    Ok(())
}
