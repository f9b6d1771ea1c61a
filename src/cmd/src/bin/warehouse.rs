use clap::Parser;
use clap::Subcommand;
use cmd::command::generate;
use cmd::command::generate::Generate;
use cmd::command::report;
use cmd::command::report::Report;
use cmd::config;
use cmd::error::Result;
use common::config::LogLevel;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Rebuild schema dw and load it with synthetic data
    Generate(Generate),
    /// Run the analytical reports and export them as CSV
    Report(Report),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let cfg = match &args.command {
        Commands::Generate(cmd) => {
            config::load(cmd.config.as_deref(), cmd.overrides(args.log_level))?
        }
        Commands::Report(cmd) => {
            config::load(cmd.config.as_deref(), cmd.overrides(args.log_level))?
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.log.level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let version = env!("CARGO_PKG_VERSION");
    info!("warehouse v{version}");

    match &args.command {
        Commands::Generate(_) => generate::run(&cfg)?,
        Commands::Report(_) => report::run(&cfg)?,
    }

    Ok(())
}
