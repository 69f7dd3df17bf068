// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use issue_keywords::utils::logging::{format_info, format_success, format_warning};
use issue_keywords::{
    Config, IssueLoader, KeywordMatcher, ProgressTracker, PublishOptions, RelevanceExtractor,
    ResultAggregator, TextLayout, TextReportWriter, Validator, publish,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "issue_keywords")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Keyword relevance extraction for issue tracker datasets", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every issue for a keyword or phrase (case-insensitive)
    Keyword {
        /// Word or phrase to search for
        #[arg(short, long, env = "ISSUE_KEYWORDS_KEYWORD")]
        keyword: Option<String>,

        /// Issue json file or directory, overrides the configured path
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Results text file, overrides the configured path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also export the report as json
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,

        #[arg(long)]
        no_chart: bool,
    },

    /// Check configuration and that the issue dataset loads
    Verify {
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    issue_keywords::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Keyword {
            keyword,
            input,
            output,
            json,
            pretty,
            no_chart,
        } => {
            let options = KeywordOptions {
                keyword,
                input,
                output,
                json,
                pretty,
                show_chart: config.output.show_chart && !no_chart,
                colored: cli.color,
            };
            cmd_keyword(&config, options).await?;
        }
        Commands::Verify { input } => {
            cmd_verify(&config, input).await?;
        }
    }

    Ok(())
}

struct KeywordOptions {
    keyword: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
    pretty: bool,
    show_chart: bool,
    colored: bool,
}

async fn cmd_keyword(config: &Config, options: KeywordOptions) -> Result<()> {
    let keyword = Validator::validate_keyword(
        options
            .keyword
            .as_deref()
            .or(config.analysis.keyword.as_deref()),
    )?;
    let matcher = KeywordMatcher::new(&keyword)?;

    let start_time = Instant::now();
    let input = options.input.unwrap_or_else(|| config.data.issues_path.clone());
    let issues = IssueLoader::new(&input)
        .load()
        .await
        .context("Failed to load issues")?;

    println!("\nLoaded {} issues from the dataset.", issues.len());
    println!("\nSearching for keyword: '{}' (case-insensitive)", keyword);

    let aggregator = ResultAggregator::new(RelevanceExtractor::from_config(&config.analysis));
    let tracker = ProgressTracker::with_color(issues.len(), options.colored);
    let report = aggregator.aggregate_with_progress(&issues, &matcher, &tracker);

    let stats = tracker.get_stats();
    info!(
        "Scanned {} issues in {:.2}s ({:.1}% matched, {:.1} occurrences per match, {} fallback snippets)",
        stats.issues_scanned,
        stats.duration_secs,
        stats.match_rate(),
        stats.occurrences_per_match(),
        stats.fallback_snippets
    );

    let mut sinks = PublishOptions::from_config(&config.output);
    if let Some(output) = options.output {
        sinks.results_path = output;
    }
    if let Some(json) = options.json {
        sinks.json_path = Some(json);
    }
    sinks.pretty = options.pretty;
    sinks.show_chart = options.show_chart;

    let Some(published) = publish(&report, &sinks)
        .await
        .context("Failed to publish report")?
    else {
        println!("\nNo issues found that match the given keyword.");
        println!("No chart will be displayed.\n");
        return Ok(());
    };

    println!(
        "Found {} issue(s) containing '{}':\n",
        report.matched_count(),
        keyword
    );
    print!("{}", TextReportWriter::render(&report, TextLayout::Console));
    println!(
        "{}",
        format_success(&format!(
            "Results saved to '{}'",
            published.results_path.display()
        ))
    );
    println!("\n{}\n", TextReportWriter::summary_line(&report));

    if let Some(exported) = &published.json_path {
        println!(
            "{}",
            format_success(&format!("Report exported to '{}'", exported.display()))
        );
    }

    if let Some(chart) = &published.chart {
        println!("{}", chart);
    }

    info!(
        "Keyword analysis complete in {:.2}s (fingerprint {})",
        start_time.elapsed().as_secs_f64(),
        report.fingerprint()
    );

    Ok(())
}

async fn cmd_verify(config: &Config, input: Option<PathBuf>) -> Result<()> {
    info!("Verifying configuration and dataset");

    let input = input.unwrap_or_else(|| config.data.issues_path.clone());
    Validator::validate_input_path(&input)?;

    let loader = IssueLoader::new(&input);
    let issues = loader.load().await.context("Failed to load issues")?;

    if issues.is_empty() {
        println!(
            "{}",
            format_warning(&format!("No issues found in {}", loader.root().display()))
        );
        return Ok(());
    }

    let untitled = issues.iter().filter(|i| i.title().is_empty()).count();
    println!(
        "{}",
        format_success(&format!(
            "Loaded {} issues from {}",
            issues.len(),
            loader.root().display()
        ))
    );
    if untitled > 0 {
        println!(
            "{}",
            format_info(&format!("{} issues have no title", untitled))
        );
    }

    match config.analysis.keyword.as_deref() {
        Some(keyword) => println!(
            "{}",
            format_info(&format!("Configured keyword: '{}'", keyword.trim()))
        ),
        None => println!(
            "{}",
            format_info("No keyword configured; pass --keyword to the keyword command")
        ),
    }

    Ok(())
}
