use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::time::Instant;

use ftp_deploy::ci::{CiEnvironment, Credentials};
use ftp_deploy::config;
use ftp_deploy::deploy::{self, Decision};
use ftp_deploy::ftp::FtpTransfer;
use ftp_deploy::{source, ui};

#[derive(clap::Parser)]
#[command(
    name = "ftp-deploy",
    about = "Upload CI build output to an FTP server, gated by environment guards"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Override the build output directory")]
    source: Option<String>,

    #[arg(long, help = "Preview what would be uploaded without connecting")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("ftp-deploy {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Evaluate the guard chain; a skip is a successful outcome
    let ci = CiEnvironment::from_env();
    let (channel, destination) = match deploy::decide(&config, &ci) {
        Decision::Skip(reason) => {
            ui::display_skip(&reason);
            return Ok(());
        }
        Decision::Proceed {
            channel,
            destination,
        } => (channel, destination),
    };

    let source_dir = args.source.unwrap_or_else(|| config.source.dir.clone());
    let source_root = Path::new(&source_dir);

    ui::display_status(&format!(
        "Deploying {} build from {}/ to {}",
        channel, source_dir, destination
    ));

    if args.dry_run {
        let files = match source::collect(source_root) {
            Ok(files) => files,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };

        for file in &files {
            ui::display_status(&format!(
                "Would upload {}/{}",
                destination.trim_end_matches('/'),
                file.remote_suffix()
            ));
        }
        ui::display_success(&format!(
            "Dry run: {} files would be uploaded to {}",
            files.len(),
            destination
        ));
        return Ok(());
    }

    // Credentials are only read once the guards have passed
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let client = FtpTransfer::new(
        credentials,
        config.transfer.port,
        config.transfer.parallelism,
    );

    let started = Instant::now();
    match deploy::run(source_root, &destination, &client) {
        Ok(summary) => {
            ui::display_success(&format!(
                "{} in {:.1}s",
                ui::summary_line(&destination, &summary),
                started.elapsed().as_secs_f64()
            ));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Deploy failed: {}", e));
            std::process::exit(1);
        }
    }
}
