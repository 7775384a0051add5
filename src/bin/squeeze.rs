//! Command-line front end for the squeezer library.
//!
//! Exit codes: `0` success, `2` usage (handled by `clap`), `3` input error,
//! `4` parse/budget error, `5` timeout, `6` internal.

use std::io::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use squeezer::{squeeze_with_config, Error, Options, ResultJson, RunConfig, SourceType};

const EXIT_USAGE: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_PARSE: i32 = 4;
const EXIT_INTERNAL: i32 = 6;

/// Deterministic, budget-aware prose compression.
#[derive(Debug, Parser)]
#[command(name = "squeeze", version = squeezer::ENGINE_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to the input file.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Path to write compressed output. Defaults to stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Aggressiveness 0..9, or -1 to derive from --profile.
    #[arg(long, default_value_t = -1, global = true)]
    aggr: i8,

    /// Shorthand default for aggressiveness: local -> 6, api -> 4.
    #[arg(long, default_value = "", global = true)]
    profile: String,

    /// Token budget. 0 means unbounded.
    #[arg(long = "max-tokens", default_value_t = 0, global = true)]
    max_tokens: usize,

    /// Soft memory ceiling in MiB.
    #[arg(long = "max-memory-mb", default_value_t = 1024, global = true)]
    max_memory_mb: i64,

    /// Emit Result JSON instead of the compressed body.
    #[arg(long, global = true)]
    json: bool,

    /// Source format, or auto to sniff from the file extension.
    #[arg(long, default_value = "auto", global = true)]
    source: String,

    /// Suppress warnings and stack traces on stderr.
    #[arg(long, global = true)]
    quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print byte/token counts without writing the compressed body anywhere.
    Stats,
    /// Run the pipeline `runs` times and report timing/determinism.
    Bench {
        #[arg(long, default_value_t = 5)]
        runs: u32,
        #[arg(long, default_value_t = 1)]
        warmup: u32,
    },
    /// Print per-stage elapsed time from one invocation.
    Profile,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code_for(err: &Error) -> i32 {
    match err {
        Error::InputOversize { .. } | Error::Io(_) => EXIT_INPUT,
        Error::InvalidOptions(_) | Error::BudgetTooSmall | Error::BudgetUnsatisfiable | Error::Decode(_) => {
            EXIT_PARSE
        }
        Error::Internal(_) => EXIT_INTERNAL,
    }
}

fn resolve_source(cli: &Cli, path: &std::path::Path) -> (SourceType, Vec<String>) {
    if cli.source == "auto" {
        let (kind, warning) = squeezer::ingest::detect_source_type(path);
        (kind, warning.into_iter().collect())
    } else {
        match SourceType::parse(&cli.source) {
            Some(kind) => (kind, Vec::new()),
            None => (
                SourceType::Text,
                vec![format!("unknown --source value {:?}; assuming text", cli.source)],
            ),
        }
    }
}

/// Marks an error as a usage error (exit code 2) rather than an input,
/// parse, or internal error.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct UsageError(String);

fn read_input(cli: &Cli) -> anyhow::Result<(Vec<u8>, SourceType, Vec<String>)> {
    let path = cli
        .input
        .as_ref()
        .ok_or_else(|| UsageError("--input is required".to_owned()))?;
    let bytes = squeezer::ingest::read_file_limited(path)?;
    let (source_type, mut warnings) = resolve_source(cli, path);
    let doc = squeezer::ingest::decode(&bytes, source_type)?;
    warnings.extend(doc.warnings);
    Ok((doc.text, doc.source_type, warnings))
}

fn options_from(cli: &Cli) -> Options {
    Options {
        aggressiveness: cli.aggr,
        max_tokens: cli.max_tokens,
        profile: cli.profile.clone(),
    }
}

fn run_config_from(cli: &Cli) -> RunConfig {
    RunConfig {
        max_memory_mb: cli.max_memory_mb,
    }
}

fn run_compress(cli: &Cli) -> anyhow::Result<()> {
    let (input, source_type, ingest_warnings) = read_input(cli)?;
    let options = options_from(cli);
    let mut result = squeeze_with_config(&input, &options, &run_config_from(cli))?;
    result.source_type = source_type;
    let mut combined_warnings = ingest_warnings;
    combined_warnings.extend(result.warnings.clone());
    result.warnings = combined_warnings;

    if cli.json {
        let json = ResultJson::from(&result);
        println!("{}", serde_json::to_string(&json)?);
    } else if let Some(out_path) = &cli.out {
        std::fs::write(out_path, &result.text)?;
    } else {
        std::io::stdout().write_all(&result.text)?;
    }

    if !cli.quiet {
        for warning in &result.warnings {
            eprintln!("warning: {warning}");
        }
    }
    Ok(())
}

fn run_stats(cli: &Cli) -> anyhow::Result<()> {
    let (input, source_type, _warnings) = read_input(cli)?;
    let options = options_from(cli);
    let mut result = squeeze_with_config(&input, &options, &run_config_from(cli))?;
    result.source_type = source_type;

    if cli.json {
        let json = ResultJson::from(&result);
        println!("{}", serde_json::to_string(&json)?);
    } else {
        println!("bytes_in: {}", result.bytes_in);
        println!("bytes_out: {}", result.bytes_out);
        println!("tokens_in_approx: {}", result.tokens_in_approx);
        println!("tokens_out_approx: {}", result.tokens_out_approx);
        println!("reduction_pct: {:.2}", result.reduction_pct);
    }
    Ok(())
}

fn run_profile(cli: &Cli) -> anyhow::Result<()> {
    let (input, _source_type, _warnings) = read_input(cli)?;
    let options = options_from(cli);
    let result = squeeze_with_config(&input, &options, &run_config_from(cli))?;
    let m = &result.stage_metrics;
    println!("stage               ms");
    println!("chunk_split      {:>8.3}", m.chunk_split_ms);
    println!("compress         {:>8.3}", m.compress_ms);
    println!("registry         {:>8.3}", m.registry_ms);
    println!("budget_truncate  {:>8.3}", m.budget_truncate_ms);
    println!("heading_repair   {:>8.3}", m.heading_repair_ms);
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn percentile(sorted_ms: &[f64], pct: f64) -> f64 {
    if sorted_ms.is_empty() {
        return 0.0;
    }
    let idx = ((sorted_ms.len() - 1) as f64 * pct).round() as usize;
    sorted_ms[idx.min(sorted_ms.len() - 1)]
}

fn run_bench(cli: &Cli, runs: u32, warmup: u32) -> anyhow::Result<()> {
    let (input, _source_type, _warnings) = read_input(cli)?;
    let options = options_from(cli);
    let run_config = run_config_from(cli);

    for _ in 0..warmup {
        let _ = squeeze_with_config(&input, &options, &run_config);
    }

    let mut durations_ms = Vec::with_capacity(runs as usize);
    let mut digests = Vec::with_capacity(runs as usize);
    let mut run_entries = Vec::with_capacity(runs as usize);
    let mut bytes_out_last = 0u64;
    let mut tokens_out_last = 0u64;

    for run in 0..runs {
        let start = Instant::now();
        let result = squeeze_with_config(&input, &options, &run_config)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        let digest = sha256_hex(&result.text);
        durations_ms.push(elapsed_ms);
        digests.push(digest.clone());
        bytes_out_last = result.bytes_out;
        tokens_out_last = result.tokens_out_approx;
        run_entries.push(serde_json::json!({
            "run": run,
            "duration_ms": elapsed_ms,
            "sha256": digest,
            "bytes_out": result.bytes_out,
            "tokens_out_approx": result.tokens_out_approx,
        }));
    }

    let mut sorted = durations_ms.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let min_ms = sorted.first().copied().unwrap_or(0.0);
    let median_ms = percentile(&sorted, 0.5);
    let p95_ms = percentile(&sorted, 0.95);
    let deterministic = digests.windows(2).all(|w| w[0] == w[1]);

    let report = serde_json::json!({
        "schema_version": "1",
        "suite": "squeeze-bench",
        "runs": runs,
        "warmup": warmup,
        "cases": [{
            "file": cli.input.as_ref().map(|p| p.display().to_string()),
            "aggressiveness": cli.aggr,
            "runs": run_entries,
            "min_ms": min_ms,
            "median_ms": median_ms,
            "p95_ms": p95_ms,
            "deterministic": deterministic,
            "bytes_out": bytes_out_last,
            "tokens_out_approx": tokens_out_last,
        }],
    });
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let outcome = match &cli.command {
        None => run_compress(&cli),
        Some(Command::Stats) => run_stats(&cli),
        Some(Command::Bench { runs, warmup }) => run_bench(&cli, *runs, *warmup),
        Some(Command::Profile) => run_profile(&cli),
    };

    if let Err(err) = outcome {
        let code = if err.downcast_ref::<UsageError>().is_some() {
            EXIT_USAGE
        } else {
            err.downcast_ref::<Error>().map_or(EXIT_INPUT, exit_code_for)
        };
        if !cli.quiet {
            eprintln!("error: {err}");
            if std::env::var("CSQ_DEBUG").as_deref() == Ok("1") {
                eprintln!("{err:?}");
            }
        }
        std::process::exit(code);
    }
}
