mod commands;

use clap::{Parser, Subcommand};
use cloud_inventory_core::InventoryError;
use colored::Colorize;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cloud-inventory")]
#[command(about = "Application for querying cloud resources", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show EC2 instance information
    Ec2(commands::ec2::Ec2Args),
}

fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "cloud_inventory=debug,cloud_inventory_core=debug,cloud_inventory_aws=debug"
    } else {
        "off"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    // stdout carries the rendered inventory only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// The one-line error report. `colored` only looks at stdout, so the caller
/// decides whether stderr gets colour.
fn error_line(e: &InventoryError, color: bool) -> String {
    let label = format!("{}:", e.label());
    if color {
        format!("{} {}", label.red().bold(), e.message())
    } else {
        format!("{} {}", label, e.message())
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Ec2(args) => commands::ec2::handle(args).await,
    };

    if let Err(e) = result {
        eprintln!("{}", error_line(&e, std::io::stderr().is_terminal()));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_without_color() {
        let err = InventoryError::Region("Unsupported region 'mars-1'".to_string());
        assert_eq!(
            error_line(&err, false),
            "RegionError: Unsupported region 'mars-1'"
        );
    }

    #[test]
    fn test_error_line_with_color_keeps_message() {
        colored::control::set_override(true);
        let err = InventoryError::RateLimit("Rate limit exceeded. Try again soon.".to_string());
        let line = error_line(&err, true);
        colored::control::unset_override();

        assert!(line.starts_with("\x1b["), "{:?}", line);
        assert!(line.contains("RateLimitError:"));
        assert!(line.ends_with(" Rate limit exceeded. Try again soon."));
    }
}
