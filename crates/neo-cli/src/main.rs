//! NEO CLI: search near-Earth object close approaches
//!
//! Commands: search, stats, completions

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use neo_index::RecordStore;
use neo_query::{build, format_results, write_csv_file, OutputFormat, RawQuery, SearchEngine};

#[derive(Parser)]
#[command(name = "neo")]
#[command(version)]
#[command(about = "Search near-Earth object close approaches")]
struct Cli {
    /// CSV file of close-approach records
    #[arg(long, global = true, default_value = "data/neo_data.csv")]
    data: PathBuf,

    /// Log query steps to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Find bodies or approaches by date, with optional filters
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Summarize the loaded records
    Stats,
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Maximum number of results
    #[arg(short = 'n', long)]
    number: Option<usize>,

    /// Exact close-approach date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<String>,

    /// First date of an inclusive range (YYYY-MM-DD)
    #[arg(short, long)]
    start_date: Option<String>,

    /// Last date of an inclusive range (YYYY-MM-DD)
    #[arg(short, long)]
    end_date: Option<String>,

    /// Entity kind to return: Body or Event
    #[arg(long)]
    return_object: Option<String>,

    /// Filter as field:operator:value, e.g. distance:<:1000 (repeatable)
    #[arg(short, long)]
    filter: Vec<String>,

    /// Saved query (.json, .yaml or .toml); flags override its values
    #[arg(long)]
    query_file: Option<PathBuf>,

    /// Output format: display, csv_file or json
    #[arg(short, long, default_value = "display")]
    output: OutputFormat,

    /// Destination for csv_file output
    #[arg(long, default_value = "neo_output.csv")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search(args) => search(&cli.data, args),
        Commands::Stats => stats(&cli.data),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "neo", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn load_store(data: &Path) -> anyhow::Result<RecordStore> {
    neo_index::load_path(data).with_context(|| format!("loading records from {}", data.display()))
}

fn load_query_file(path: &Path) -> anyhow::Result<RawQuery> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading query file {}", path.display()))?;
    let raw: RawQuery = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&text)?,
        Some("toml") => toml::from_str(&text)?,
        _ => serde_json::from_str(&text)?,
    };
    tracing::debug!(path = %path.display(), ?raw, "loaded query file");
    Ok(raw)
}

fn search(data: &Path, args: SearchArgs) -> anyhow::Result<()> {
    let flags = RawQuery {
        number: args.number,
        date: args.date,
        start_date: args.start_date,
        end_date: args.end_date,
        return_object: args.return_object,
        filter: args.filter,
    };
    let raw = match &args.query_file {
        Some(path) => load_query_file(path)?.merge(flags),
        None => flags,
    };

    // Compile before loading so a bad request fails fast.
    let selector = build(&raw)?;
    let store = load_store(data)?;
    let result = SearchEngine::new(&store).get_objects(&selector)?;

    match args.output {
        OutputFormat::CsvFile => {
            write_csv_file(&result, &args.out)?;
            println!(
                "Wrote {} {} record(s) to {}",
                result.len(),
                result.kind(),
                args.out.display()
            );
        }
        format => println!("{}", format_results(&result, format)?),
    }
    Ok(())
}

fn stats(data: &Path) -> anyhow::Result<()> {
    let store = load_store(data)?;
    println!("Bodies:     {}", store.len());
    println!("Approaches: {}", store.approach_count());
    println!("Dates:      {}", store.date_count());
    if let Some((first, last)) = store.date_span() {
        println!("Date span:  {first} .. {last}");
    }
    Ok(())
}
