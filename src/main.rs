use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payauth::application::engine::PaymentEngine;
use payauth::config::StoreConfig;
use payauth::infrastructure::factory::build_account_store;
use payauth::interfaces::csv::account_reader::AccountReader;
use payauth::interfaces::csv::account_writer::AccountWriter;
use payauth::interfaces::csv::payment_reader::PaymentReader;
use payauth::interfaces::csv::result_writer::ResultWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment requests CSV file
    payments: PathBuf,

    /// Accounts CSV file loaded into the store before any payment is made
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Account store to use. "Backup" selects the backup store, anything else the primary one.
    #[arg(long, env = "DATA_STORE_TYPE")]
    data_store_type: Option<String>,

    /// Database directory for the backup store
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Write the final account state as CSV to this file
    #[arg(long)]
    accounts_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = StoreConfig::new(cli.data_store_type.as_deref(), cli.db_path);
    let store = build_account_store(&config).into_diagnostic()?;

    if let Some(path) = cli.accounts {
        let file = File::open(path).into_diagnostic()?;
        for account in AccountReader::new(file).accounts() {
            match account {
                Ok(account) => store.put(account).await.into_diagnostic()?,
                Err(e) => warn!("Error reading account: {e}"),
            }
        }
    }

    let engine = PaymentEngine::new(store);

    let file = File::open(cli.payments).into_diagnostic()?;
    let stdout = io::stdout();
    let mut results = ResultWriter::new(stdout.lock());
    for request in PaymentReader::new(file).requests() {
        match request {
            Ok(request) => {
                let result = engine.make_payment(&request).await.into_diagnostic()?;
                results.write_result(&request, result).into_diagnostic()?;
            }
            Err(e) => warn!("Error reading payment request: {e}"),
        }
    }
    results.flush().into_diagnostic()?;

    if let Some(path) = cli.accounts_out {
        let accounts = engine.accounts().await.into_diagnostic()?;
        let file = File::create(path).into_diagnostic()?;
        AccountWriter::new(file)
            .write_accounts(accounts)
            .into_diagnostic()?;
    }

    Ok(())
}
