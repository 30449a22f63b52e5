use clap::Parser;
use readnext_core::QueryAttribute;
use readnext_ingest::load_catalog;
use readnext_query::{catalog_stats, format_recommendations, language_distribution, recommend};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Content-based book recommendations from a CSV catalog
#[derive(Parser, Debug)]
#[command(name = "readnext")]
#[command(about = "A content-based book recommender", long_about = None)]
struct Args {
    /// Path to the catalog CSV file
    catalog: PathBuf,

    /// Free-text query to recommend against (e.g. an author name)
    #[arg(short, long)]
    query: Option<String>,

    /// Attribute the query matches on: title, authors or language_code
    #[arg(short, long, default_value = "authors")]
    attribute: String,

    /// Number of recommendations to return
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Print catalog summary statistics
    #[arg(long)]
    stats: bool,

    /// Print the language distribution
    #[arg(long)]
    languages: bool,

    /// Emit results as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = load_catalog(&args.catalog)?;
    info!(records = catalog.len(), "catalog ready");

    if args.stats {
        let stats = catalog_stats(&catalog);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("Total books:          {}", stats.total_books);
            println!("Unique authors:       {}", stats.unique_authors);
            println!("Average rating:       {:.2}", stats.average_rating);
            if let Some(pages) = stats.average_pages {
                println!("Average pages:        {:.0}", pages);
            }
            if let Some((from, to)) = stats.publication_years {
                println!("Publication years:    {from} to {to}");
            }
            println!("Total ratings:        {}", stats.total_ratings);
        }
    }

    if args.languages {
        let distribution = language_distribution(&catalog);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&distribution)?);
        } else {
            for (code, count) in distribution {
                println!("{code:>8}  {count}");
            }
        }
    }

    if let Some(query) = &args.query {
        let attribute: QueryAttribute = args.attribute.parse()?;
        let recommendations = recommend(&catalog, query, attribute, args.count);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        } else if recommendations.is_empty() {
            println!("No recommendations for {:?} on {}", query, attribute);
        } else {
            print!("{}", format_recommendations(&recommendations));
        }
    }

    Ok(())
}
