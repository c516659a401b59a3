use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use dbscript::config;
use dbscript::report::summary_table;

#[derive(Parser)]
#[command(
    name = "dbscript",
    version,
    about = "Generate database user provisioning scripts from a request workbook",
    long_about = r#"Reads the `request`, `schema` and `env` sheets of the given workbook and
writes `generated_dbscript_<YYYYMMDD-HHMM>.xlsx` to the current directory
(or DBSCRIPT_OUTPUT_DIR) with `create user` and per-instance `grant` scripts.

Example:
    dbscript ./db_request.xlsx
"#
)]
struct Cli {
    /// Request workbook (.xlsx)
    input: PathBuf,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    config::load_env_file(None);

    let output_dir = config::get_output_dir();
    let generated_at = chrono::Local::now().naive_local();

    match dbscript::run(&cli.input, &output_dir, generated_at) {
        Ok(summary) => {
            println!("\n{}", summary_table(&summary.records));
            let warned = summary.records.iter().filter(|r| !r.warnings.is_empty()).count();
            if warned > 0 {
                println!(
                    "{}",
                    yansi::Paint::new(format!("{warned} row(s) produced warnings")).yellow()
                );
            }
            println!(
                "{} {}",
                yansi::Paint::new("Generated output file:").green(),
                summary.output_path.display()
            );
        }
        Err(e) => {
            tracing::error!(%e, "Script generation failed");
            eprintln!("{}: {}", yansi::Paint::new("Error").red(), e);
            process::exit(1);
        }
    }
}
