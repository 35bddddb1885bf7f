use std::sync::Arc;

use chrono::NaiveDate;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tidysched_board::BoardController;
use tidysched_client::{ClientConfig, HttpBookingClient};
use tidysched_core::grid::SlotAvailability;
use tidysched_core::models::slot::SLOT_LABELS;

/// Load one day's assignment board and print a text snapshot. The widget
/// layer embedding the board drives the same controller; this binary is the
/// wiring reference and a quick operator sanity check.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Backend connection
    let config = ClientConfig::from_env()?;
    let api = Arc::new(HttpBookingClient::new(&config)?);

    // Board date: first argument, or today
    let date = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")?,
        None => chrono::Local::now().date_naive(),
    };

    info!("Loading assignment board for {}", date);
    let mut board = BoardController::new(api, date);
    board.load().await;

    render(&board);

    Ok(())
}

fn render(board: &BoardController) {
    println!("Assignment board for {}", board.selected_date());
    println!();

    match board.grid() {
        Some(grid) => {
            print!("{:<24}", "Cleaner");
            for label in SLOT_LABELS {
                print!("{:<16}", label);
            }
            println!();

            for (cleaner_id, name) in grid.cleaners() {
                print!("{:<24}", name);
                for label in SLOT_LABELS {
                    let marker = match grid.cell(*cleaner_id, label) {
                        Some(cell) => {
                            let state = match cell.availability {
                                SlotAvailability::Available => "free",
                                SlotAvailability::Unavailable => "off",
                                SlotAvailability::Unknown => "?",
                            };
                            if cell.jobs.is_empty() {
                                state.to_string()
                            } else {
                                format!("{} +{} job(s)", state, cell.jobs.len())
                            }
                        }
                        None => "?".to_string(),
                    };
                    print!("{:<16}", marker);
                }
                println!();
            }
        }
        None => println!("No board data loaded."),
    }

    println!();
    println!("Unassigned jobs: {}", board.unassigned_jobs().len());
    for job in board.unassigned_jobs() {
        println!(
            "  {} - {} ({}, {:.1}h, ${:.2})",
            job.scheduled_date, job.address, job.house_size, job.estimated_hours, job.total
        );
    }

    for notice in board.notices() {
        println!("{}", notice);
    }
}
