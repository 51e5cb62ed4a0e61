//! Card Collection Exporter
//!
//! Connects to a MongoDB deployment, downloads every document from the
//! configured card collection, and writes them to a local JSON file with
//! summary statistics.
//!
//! # Usage
//!
//! ```bash
//! # Export with the configured defaults
//! cardex mongodb://localhost:27017
//!
//! # Override the target collection and output file
//! cardex --collection CardsForGame -o empire_cards.json
//! ```

use tracing::Level;

use cardex::cli::CliInterface;
use cardex::connection::ConnectionManager;
use cardex::error::Result;
use cardex::exporter::{ExportOptions, ExportOutcome, Exporter, MongoCardSource};

/// Application entry point
#[tokio::main]
async fn main() {
    // Every failure funnels into one printed line. The process keeps its
    // normal exit status either way; automation watches the output.
    if let Err(e) = run().await {
        println!("Error: {}", e);
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or run the export
///
/// # Returns
/// * `Result<()>` - Success or error
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    // Handle subcommands (version, config)
    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.print_banner();

    run_export(&cli).await
}

/// Run the export against the configured deployment
///
/// Acquires the connection, hands off to the exporter, and releases the
/// connection on every path once it has been acquired.
async fn run_export(cli: &CliInterface) -> Result<()> {
    let config = cli.config();

    let mut conn_manager =
        ConnectionManager::new(cli.get_connection_uri(), config.connection.clone());
    conn_manager.connect().await?;

    if !cli.args().quiet {
        println!("Connected to database: {}", config.export.database);
        println!("Accessing collection: {}", config.export.collection);
    }

    let outcome = export(&conn_manager, cli).await;

    // Released whether the export succeeded or not.
    conn_manager.disconnect().await;

    let outcome = outcome?;
    if config.display.show_timing && !outcome.skipped_empty {
        println!();
        println!(
            "Export completed in {} ms ({} bytes written)",
            outcome.elapsed_ms, outcome.file_size_bytes
        );
    }

    Ok(())
}

/// Build and run the exporter over the live connection
async fn export(conn_manager: &ConnectionManager, cli: &CliInterface) -> Result<ExportOutcome> {
    let config = cli.config();

    let database = conn_manager.database(&config.export.database)?;
    let source = MongoCardSource::new(&database, &config.export.collection);

    let options = ExportOptions {
        output_file: config.export.output_file.clone(),
        color_output: config.display.color_output,
        show_progress: !cli.args().quiet,
    };

    Exporter::new(source, options).run().await
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
