//! Key-Paper — must-read papers for a research topic.
//! Entry point for the report binary.

mod config;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, ValueEnum};
use keypaper_common::{KeyPaperError, SandboxClient};
use keypaper_ingestion::models::{SearchParams, SearchScope, YearPreset};
use keypaper_ingestion::sources::openalex::OpenAlexClient;
use keypaper_ingestion::{run_search, SearchCache};
use keypaper_kg::{compute_centrality, CoauthorGraph};
use keypaper_ranker::{export_file_name, journal_distribution, must_read, write_csv};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scope {
    Title,
    Abstract,
    Concept,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    #[value(name = "5y")]
    Last5,
    #[value(name = "10y")]
    Last10,
    #[value(name = "15y")]
    Last15,
}

impl From<Preset> for YearPreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Last5  => YearPreset::Last5,
            Preset::Last10 => YearPreset::Last10,
            Preset::Last15 => YearPreset::Last15,
        }
    }
}

/// Find the most cited papers for a keyword on OpenAlex.
#[derive(Debug, Parser)]
#[command(name = "keypaper", version)]
struct Args {
    /// Search query. Wrap exact phrases in quotes; AND / OR are supported.
    query: String,

    /// First publication year (inclusive)
    #[arg(long)]
    from: Option<i32>,

    /// Last publication year (inclusive)
    #[arg(long)]
    to: Option<i32>,

    /// Quick window ending this year; overrides --from/--to
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Fields to search, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    scope: Option<Vec<Scope>>,

    #[arg(long)]
    max_results: Option<usize>,

    /// Write the full result table as CSV (default file name from the query)
    #[arg(long, num_args = 0..=1)]
    csv: Option<Option<PathBuf>>,
}

fn search_params(args: &Args, config: &config::Config, current_year: i32) -> SearchParams {
    let (default_from, default_to) = config.search.default_range(current_year);
    let (year_from, year_to) = match args.preset {
        Some(p) => YearPreset::from(p).range(current_year),
        None => (args.from.unwrap_or(default_from), args.to.unwrap_or(default_to)),
    };

    let scope = match &args.scope {
        Some(fields) => SearchScope {
            title: fields.iter().any(|f| matches!(f, Scope::Title)),
            abstract_text: fields.iter().any(|f| matches!(f, Scope::Abstract)),
            concept_tag: fields.iter().any(|f| matches!(f, Scope::Concept)),
        },
        None => config.search.scope(),
    };

    SearchParams::new(args.query.clone(), year_from, year_to)
        .with_scope(scope)
        .with_max_results(args.max_results.unwrap_or(config.search.max_results))
}

/// Sandbox client that also admits the configured works API host.
fn sandbox_client(openalex: &config::OpenAlexConfig) -> anyhow::Result<SandboxClient> {
    let mut client = SandboxClient::with_timeout(openalex.timeout())?;
    let base = Url::parse(&openalex.base_url)
        .with_context(|| format!("invalid openalex.base_url: {}", openalex.base_url))?;
    let host = base
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("openalex.base_url has no host: {}", openalex.base_url))?;
    if !client.is_allowed(base.as_str()) {
        info!(host, "Allowing configured OpenAlex host");
        client.allow_domain(host);
    }
    Ok(client)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("keypaper=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::load()?;
    let params = search_params(&args, &config, chrono::Utc::now().year());

    let client = OpenAlexClient::from_client(sandbox_client(&config.openalex)?)
        .with_base_url(config.openalex.base_url.clone())
        .with_mailto(config.openalex.mailto.clone())
        .with_page_delay(config.openalex.page_delay());
    let mut cache = SearchCache::new(config.cache.capacity, config.cache.ttl());

    info!(query = %params.query, from = params.year_from, to = params.year_to, "Searching OpenAlex");
    let outcome = match run_search(&client, &mut cache, &params).await {
        Ok(o) => o,
        Err(e) if e.is_rejected_input() => {
            match e {
                KeyPaperError::EmptyQuery => println!("Please enter a search query."),
                other => println!("{other}"),
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(msg) = &outcome.error {
        warn!("{msg}");
        println!("{msg}");
        return Ok(());
    }
    if outcome.is_empty() {
        println!("No results found. Try a different query.");
        return Ok(());
    }

    let top = must_read(&outcome.records, config.report.top_papers);
    let graph = CoauthorGraph::from_records(&outcome.records);
    let centrality = compute_centrality(&graph, config.report.top_authors);
    let journals = journal_distribution(&outcome.records, config.report.top_journals);

    let text = report::Report {
        params: &params,
        outcome: &outcome,
        must_read: &top,
        centrality: &centrality,
        journals: &journals,
    }
    .render();
    print!("{text}");

    if let Some(path) = &args.csv {
        let path = path.clone().unwrap_or_else(|| PathBuf::from(export_file_name(&params.query)));
        write_csv(&outcome.records, &path)?;
        println!("\nSaved {} papers to {}", outcome.records.len(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["keypaper", "team science"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_default_params_from_config() {
        let p = search_params(&args(&[]), &config::Config::default(), 2026);
        assert_eq!((p.year_from, p.year_to), (2016, 2026));
        assert_eq!(p.max_results, 500);
        assert_eq!(p.scope, SearchScope::default());
    }

    #[test]
    fn test_preset_overrides_years() {
        let p = search_params(&args(&["--from", "2001", "--preset", "5y"]), &config::Config::default(), 2026);
        assert_eq!((p.year_from, p.year_to), (2021, 2026));
    }

    #[test]
    fn test_scope_list() {
        let p = search_params(&args(&["--scope", "title"]), &config::Config::default(), 2026);
        assert_eq!(p.scope, SearchScope { title: true, abstract_text: false, concept_tag: false });
        let p = search_params(&args(&["--scope", "abstract,concept"]), &config::Config::default(), 2026);
        assert!(p.scope.abstract_text && p.scope.concept_tag && !p.scope.title);
    }

    #[test]
    fn test_default_base_url_needs_no_extra_host() {
        let client = sandbox_client(&config::OpenAlexConfig::default()).unwrap();
        assert!(client.is_allowed("https://api.openalex.org/works"));
        assert!(!client.is_allowed("https://openalex-mirror.example.org/works"));
    }

    #[test]
    fn test_mirror_base_url_is_allowed() {
        let config = config::Config::from_toml_str(
            "[openalex]\nbase_url = \"https://openalex-mirror.example.org/\"\n",
        )
        .unwrap();
        let client = sandbox_client(&config.openalex).unwrap();
        assert!(client.is_allowed("https://openalex-mirror.example.org/works"));
        assert!(client.get("https://openalex-mirror.example.org/works").is_ok());
        assert!(!client.is_allowed("https://other.example.org/works"));
    }

    #[test]
    fn test_base_url_without_host_rejected() {
        let mut openalex = config::OpenAlexConfig::default();
        openalex.base_url = "not a url".into();
        assert!(sandbox_client(&openalex).is_err());
    }

    #[test]
    fn test_csv_flag_without_path() {
        assert!(matches!(args(&["--csv"]).csv, Some(None)));
        assert!(args(&[]).csv.is_none());
    }
}
