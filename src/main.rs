use chrono::Utc;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use travel_bloom::config::{AppConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SEARCH_DELAY_MS};
use travel_bloom::view::{self, render_text};
use travel_bloom::{SearchError, SearchResult, SearchSession};

/// TravelBloom: destination search over a static travel catalog
///
/// Finds cities, temples and beaches matching a keyword and shows each
/// destination's current local time.
///
/// Examples:
///   travelbloom beach
///   travelbloom --catalog data/travel_recommendation_api.json japan
///   travelbloom --json temples
///   travelbloom --interactive
///   travelbloom --serve --port 8080
#[derive(Parser)]
#[command(name = "travelbloom", version, about, long_about = None)]
struct Cli {
    /// Search query (one-shot mode). Example: travelbloom "bora bora"
    #[arg(index = 1)]
    query: Option<String>,

    /// Catalog file path or http(s) URL.
    #[arg(long, env = "TRAVELBLOOM_CATALOG")]
    catalog: Option<String>,

    /// Print result cards as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Read queries from stdin, one per line.
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Run the web widget and JSON API.
    #[arg(long)]
    serve: bool,

    #[arg(long, env = "TRAVELBLOOM_HOST", default_value = DEFAULT_HOST)]
    host: String,

    #[arg(long, env = "TRAVELBLOOM_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Pause before showing results in server/interactive mode (0 disables).
    #[arg(long, env = "TRAVELBLOOM_DELAY_MS", default_value_t = DEFAULT_SEARCH_DELAY_MS)]
    delay_ms: u64,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "TRAVELBLOOM_LOG_LEVEL")]
    log_level: Option<String>,
}

fn init_logging(cli: &Cli) {
    let default_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| if cli.serve { "info".into() } else { "warn".into() });
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = AppConfig {
        host: cli.host.clone(),
        port: cli.port,
        search_delay: Duration::from_millis(cli.delay_ms),
        ..AppConfig::default()
    }
    .with_catalog(cli.catalog.as_deref());

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                eprintln!("Error: cannot start runtime: {}", e);
                return ExitCode::FAILURE;
            }
        };
        return match runtime.block_on(travel_bloom::server::start(config)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Server error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    // ── Load catalog ────────────────────────────────────────────

    let mut session = SearchSession::new();
    if let Err(e) = session.load(&config.catalog) {
        // Keep going: searches will report "not ready"
        eprintln!("  {}", e.user_message());
        eprintln!("  ({})", e);
    }

    if cli.interactive {
        return run_interactive(&mut session, config.search_delay);
    }

    let Some(query) = cli.query.as_deref() else {
        eprintln!("Error: No search query given.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  travelbloom beach");
        eprintln!("  travelbloom --interactive");
        eprintln!("  travelbloom --serve");
        return ExitCode::FAILURE;
    };

    match run_query(&mut session, query, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("  {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run_query(session: &mut SearchSession, raw: &str, json: bool) -> Result<(), SearchError> {
    let results = session.search(raw)?;
    print_results(raw, &results, json);
    Ok(())
}

fn print_results(raw: &str, results: &[SearchResult], json: bool) {
    let cards = view::cards(results, Utc::now());
    let shown = raw.trim().to_lowercase();

    // Cards to stderr, JSON to stdout
    eprint!("{}", render_text(&shown, &cards));
    if json {
        match serde_json::to_string_pretty(&cards) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: cannot encode results: {}", e),
        }
    }
}

fn run_interactive(session: &mut SearchSession, delay: Duration) -> ExitCode {
    let stdin = io::stdin();
    eprint!("search> ");
    let _ = io::stderr().flush();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let outcome = session.begin(&line).and_then(|query| {
            if !delay.is_zero() {
                eprintln!("  Searching amazing destinations...");
                std::thread::sleep(delay);
            }
            session.complete(&query)
        });
        match outcome {
            Ok(results) => print_results(&line, &results, false),
            Err(e) => eprintln!("  {}", e.user_message()),
        }
        eprint!("search> ");
        let _ = io::stderr().flush();
    }
    eprintln!();
    ExitCode::SUCCESS
}
