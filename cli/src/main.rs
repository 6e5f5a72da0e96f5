//! Command line client for the phenomizer phenotype-similarity service.

mod output;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use phenomizer_core::{Credentials, HpoTermId, PhenomizerClient};
use tracing::info;

/// CLI parser based on clap.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Query the phenomizer service with HPO terms",
    long_about = "Give HPO terms either on the form 'HP:0001623' or '0001623'.\n\
                  If -p is not used, a password prompt will appear instead."
)]
struct Cli {
    /// HPO terms to query with.
    #[arg(value_name = "HPO_TERM")]
    hpo_terms: Vec<String>,

    /// Username for the phenomizer service.
    #[arg(short, long)]
    username: Option<String>,

    /// Password for the phenomizer service; prompted for when omitted.
    #[arg(short, long)]
    password: Option<String>,

    /// Check whether the given term(s) exist instead of printing results.
    #[arg(short, long)]
    check_terms: bool,

    /// Write the output to this file instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Highest p-value to include in the output.
    #[arg(long, default_value_t = 1.0)]
    p_value_limit: f64,

    /// Print each result as one JSON object per line.
    #[arg(long)]
    to_json: bool,

    /// Verbosity of the program
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Build a tracing subscriber according to the verbosity flags.
    let collector = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(match cli.verbose.log_level() {
            Some(level) => match level {
                log::Level::Error => tracing::Level::ERROR,
                log::Level::Warn => tracing::Level::WARN,
                log::Level::Info => tracing::Level::INFO,
                log::Level::Debug => tracing::Level::DEBUG,
                log::Level::Trace => tracing::Level::TRACE,
            },
            None => tracing::Level::INFO,
        })
        .compact()
        .finish();

    tracing::subscriber::with_default(collector, || run(&cli))
}

fn run(cli: &Cli) -> Result<(), anyhow::Error> {
    if cli.hpo_terms.is_empty() {
        anyhow::bail!("please specify at least one HPO term");
    }
    let username = cli
        .username
        .clone()
        .ok_or_else(|| anyhow::anyhow!("please specify a username with -u/--username"))?;
    let password = match &cli.password {
        Some(password) => password.clone(),
        None => rpassword::prompt_password("password: ")?,
    };
    let credentials = Credentials { username, password };

    let terms = cli
        .hpo_terms
        .iter()
        .map(|t| t.parse::<HpoTermId>())
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "HPO terms used: {}",
        terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    );

    let client = PhenomizerClient::default();

    if cli.check_terms {
        for term in &terms {
            if client.term_exists(&credentials, *term)? {
                info!("HPO term {term} does exist");
            } else {
                info!("HPO term {term} does not exist");
            }
        }
        return Ok(());
    }

    let records = client.query(&credentials, &terms)?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writeln!(writer, "{}", output::FILE_HEADER)?;
            Box::new(writer)
        }
        None => Box::new(io::stdout()),
    };

    for record in records {
        let record = record?;
        if !output::passes_limit(&record, cli.p_value_limit) {
            continue;
        }
        let line = if cli.to_json {
            output::json_line(&record)?
        } else {
            output::tab_line(&record)
        };
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    Ok(())
}
