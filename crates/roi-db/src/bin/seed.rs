//! # Seed Scenarios
//!
//! Populates the store with sample scenarios for local development.
//!
//! ## Usage
//! ```bash
//! # Seed ./scenarios.db
//! cargo run -p roi-db --bin seed
//!
//! # Specify database path
//! cargo run -p roi-db --bin seed -- --db ./data/scenarios.db
//! ```
//!
//! Names that already exist are skipped, so running it twice is harmless.

use roi_core::BusinessInputs;
use roi_db::{Database, DbConfig, DbError};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Sample scenarios: (name, volume, hours, wage, error %, error cost, horizon, cost, staff)
const SAMPLES: &[(&str, f64, f64, f64, f64, f64, f64, Option<f64>, Option<f64>)] = &[
    ("Reference Mid-Market", 1000.0, 0.5, 25.0, 2.0, 50.0, 12.0, Some(50000.0), Some(4.0)),
    ("Small Team", 200.0, 0.25, 22.0, 1.5, 30.0, 12.0, Some(15000.0), Some(1.0)),
    ("High Volume Enterprise", 20000.0, 0.15, 35.0, 3.0, 80.0, 36.0, Some(250000.0), Some(25.0)),
    ("Default Implementation Cost", 1500.0, 0.4, 28.0, 2.5, 45.0, 24.0, None, None),
    ("Free Pilot", 500.0, 0.3, 24.0, 1.0, 40.0, 6.0, Some(0.0), Some(2.0)),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./scenarios.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("ROI Scenario Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./scenarios.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.scenarios();

    let mut created = 0;
    for &(name, volume, hours, wage, rate, cost, horizon, implementation, staff) in SAMPLES {
        let inputs = BusinessInputs {
            monthly_invoice_volume: volume,
            avg_hours_per_invoice: hours,
            hourly_wage: wage,
            error_rate_manual: rate,
            error_cost: cost,
            time_horizon_months: horizon,
            one_time_implementation_cost: implementation,
            num_ap_staff: staff,
        };

        match repo.create(name, &inputs.to_record()).await {
            Ok(scenario) => {
                info!(
                    name = %scenario.name,
                    roi = %scenario.results.roi_percentage,
                    "Seeded scenario"
                );
                created += 1;
            }
            Err(DbError::UniqueViolation { value, .. }) => {
                warn!(name = %value, "Scenario already exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        created,
        total = repo.count().await?,
        path = %db_path,
        "Seed complete"
    );

    db.close().await;
    Ok(())
}
