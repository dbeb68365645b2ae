use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use partition_core::{
    config::DEFAULT_SETTINGS_FILE, load_settings_from, validate_partition_key, PartitionAlert,
    PartitionDialog, PartitionDialogSession, RejectReason, SubmissionController, SubmitReport,
};
use shared::partition::PARTITION_KEY_FORBIDDEN_SUBSTRINGS;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "partitions", about = "Add keys to dynamic partitions definitions")]
struct Cli {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[arg(long)]
    graphql_url: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    repository: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a key against the forbidden substrings without contacting the server.
    Check { name: String },
    /// Add a key to a dynamic partitions definition.
    Create {
        name: String,
        #[arg(long)]
        partitions_def: Option<String>,
    },
    /// Print the substrings partition keys may not contain.
    Rules,
}

/// Stands in for the dialog: keeps the selection and prints alerts.
#[derive(Default)]
struct ConsoleDialog {
    selection: Mutex<Vec<String>>,
}

#[async_trait]
impl PartitionDialog for ConsoleDialog {
    async fn append_selection(&self, partition_key: &str) {
        let mut selection = self.selection.lock().await;
        selection.push(partition_key.to_string());
        println!("selected partitions: {}", selection.join(", "));
    }

    async fn request_close(&self) {
        tracing::debug!("dialog close requested");
    }

    async fn show_alert(&self, alert: &PartitionAlert) {
        eprintln!("{alert}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Rules => {
            for entry in PARTITION_KEY_FORBIDDEN_SUBSTRINGS {
                println!("{}", entry.readable);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { name } => {
            let result = validate_partition_key(&name);
            match result.tooltip() {
                None => {
                    println!("valid: {name:?}");
                    Ok(ExitCode::SUCCESS)
                }
                Some(tooltip) => {
                    println!("invalid: {name:?}");
                    println!("{tooltip}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Create {
            name,
            partitions_def,
        } => {
            let mut settings = load_settings_from(&cli.config)?;
            if let Some(v) = cli.graphql_url {
                settings.graphql_url = v;
            }
            if let Some(v) = cli.location {
                settings.repository_location_name = v;
            }
            if let Some(v) = cli.repository {
                settings.repository_name = v;
            }
            let partitions_def = partitions_def.or_else(|| settings.partitions_def_name.clone());

            let controller = Arc::new(SubmissionController::new(
                settings.partition_creator()?,
                Arc::new(ConsoleDialog::default()),
            ));
            let mut session =
                PartitionDialogSession::new(controller, settings.selector(), partitions_def);
            session.set_candidate(name);

            let code = match session.on_submit().await {
                SubmitReport::Created { partition_key } => {
                    println!("created partition {partition_key:?}");
                    ExitCode::SUCCESS
                }
                SubmitReport::Alerted(_) => ExitCode::FAILURE,
                SubmitReport::Rejected(RejectReason::EmptyName) => {
                    eprintln!("partition name is empty");
                    ExitCode::FAILURE
                }
                SubmitReport::Rejected(RejectReason::InvalidName(result)) => {
                    eprintln!("{}", result.tooltip().unwrap_or_default());
                    ExitCode::FAILURE
                }
                SubmitReport::Rejected(RejectReason::InFlight) => ExitCode::FAILURE,
            };
            Ok(code)
        }
    }
}
