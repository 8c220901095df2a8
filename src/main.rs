use clap::Parser;
use migprep::backup::{BackupConfig, DEFAULT_MAX_DEPTH};
use migprep::logger::initialize_logger;
use migprep::run_backup;
use migprep::utils::expand_tilde;
use std::process::ExitCode;
use tokio::signal;
use tracing::{error, info};

const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prepare files for home migration", long_about = None)]
struct CliArgs {
    /// Source directory to back up (use ~ for home)
    source: String,
    /// Destination backup directory
    destination: String,
    #[arg(long, env = "MIGPREP_DRY_RUN", help = "Show what would be copied without copying")]
    dry_run: bool,
    #[arg(short = 'v', long, help = "Verbose output")]
    verbose: bool,
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, help = "Deepest directory level to descend into")]
    max_depth: usize,
    #[arg(long, help = "Do not write backup_info.json at the destination")]
    no_info: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger(cli_args.verbose);

    let config = match build_config(&cli_args) {
        Ok(config) => config,
        Err(e) => {
            error!("Backup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let dry_run = config.dry_run;

    let backup = tokio::task::spawn_blocking(move || run_backup(config));

    tokio::select! {
        joined = backup => match joined {
            Ok(Ok(_)) => {
                if dry_run {
                    info!("Dry run completed - use without --dry-run to perform actual backup");
                }
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!("Backup failed: {}", e);
                ExitCode::FAILURE
            }
            Err(e) => {
                error!("Backup task panicked: {}", e);
                ExitCode::FAILURE
            }
        },
        _ = signal::ctrl_c() => {
            info!("Backup interrupted by user");
            // The walk runs on a blocking thread that cannot be cancelled.
            std::process::exit(EXIT_INTERRUPTED);
        }
    }
}

fn build_config(args: &CliArgs) -> Result<BackupConfig, migprep::BackupError> {
    Ok(BackupConfig {
        source_dir: expand_tilde(&args.source)?,
        backup_dir: expand_tilde(&args.destination)?,
        dry_run: args.dry_run,
        max_depth: args.max_depth,
        write_info: !args.no_info,
    })
}
