#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use covbadge_core::config::{DEFAULT_ENDPOINT, DEFAULT_LABEL, DEFAULT_OUTPUT};
use covbadge_core::{BadgeConfig, BadgeOutcome, DEFAULT_THRESHOLD};
use std::borrow::Cow;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "covbadge", version, about = "Fetch a coverage badge SVG")]
struct Cli {
    /// Coverage percentage, e.g. 92.5% or 40
    #[arg(allow_hyphen_values = true)]
    coverage: String,

    /// Badge service base URL
    #[arg(long, env = "COVBADGE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Badge label text
    #[arg(long, env = "COVBADGE_LABEL", default_value = DEFAULT_LABEL)]
    label: String,

    /// Values at or below this render red
    #[arg(
        long,
        env = "COVBADGE_THRESHOLD",
        default_value_t = DEFAULT_THRESHOLD,
        allow_negative_numbers = true
    )]
    threshold: f64,

    /// Output file
    #[arg(long, env = "COVBADGE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = "COVBADGE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Output format: text or json
    #[arg(long, env = "COVBADGE_OUTPUT_FORMAT")]
    output_format: Option<String>,
}

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Silent on success, `Error` + description on failure
    Text,
    /// Outcome as a JSON object on success
    Json,
}

impl OutputFormat {
    fn detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock());
}

/// Diagnostics go to stderr so stdout carries only the report
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Filter empty string from Option (env vars may produce "" for empty values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn build_config(cli: &Cli) -> BadgeConfig<'_> {
    BadgeConfig {
        endpoint: Cow::Borrowed(cli.endpoint.as_str()),
        label: Cow::Borrowed(cli.label.as_str()),
        threshold: cli.threshold,
        output: cli.output.clone(),
        timeout: cli.timeout_secs.map(Duration::from_secs),
        ..Default::default()
    }
}

/// Every failure is reported on `w`; the process exits normally either way.
fn run<W: Write>(cli: Cli, w: &mut W) {
    let output_format = OutputFormat::detect(clean_opt(&cli.output_format));
    let config = build_config(&cli);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build();
    let rt = match rt {
        Ok(rt) => rt,
        Err(e) => {
            write_error(w, &format!("failed to create runtime: {e}"));
            return;
        }
    };

    match rt.block_on(covbadge_core::request_badge(&cli.coverage, &config)) {
        Ok(outcome) => {
            tracing::info!(url = %outcome.url, bytes = outcome.bytes, "badge saved");
            write_outcome(w, &outcome, output_format);
        }
        Err(e) => write_error(w, &e.to_string()),
    }
}

/// Report a failure as `Error` followed by its description
fn write_error<W: Write>(w: &mut W, description: &str) {
    let _ = writeln!(w, "Error");
    let _ = writeln!(w, "{description}");
}

fn write_outcome<W: Write>(w: &mut W, outcome: &BadgeOutcome, format: OutputFormat) {
    match format {
        OutputFormat::Text => {}
        OutputFormat::Json => {
            let _ = serde_json::to_writer(&mut *w, outcome);
            let _ = writeln!(w);
        }
    }
}
