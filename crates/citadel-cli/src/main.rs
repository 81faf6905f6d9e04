//! Citadel CLI
//!
//! Thin wrapper around citadel-core for browsing characters in a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # First page, sorted by name
//! citadel list
//!
//! # Three pages of dead humans, sorted by origin, in German
//! citadel list --pages 3 --status dead --species human --sort origin --lang de
//!
//! # Raw summary of a single page
//! citadel page 7
//!
//! # Print the GraphQL request without sending it
//! citadel query --page 2
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use citadel_core::logging::LoggingBuilder;
use citadel_core::query::GraphQlRequest;
use citadel_core::{
    Character, CharacterStatus, Feed, FeedStatus, FilterState, GalleryConfig, GraphQlClient,
    Language, Messages, SortKey,
};

/// Citadel - Rick and Morty character browser
#[derive(Parser)]
#[command(name = "citadel")]
#[command(version = "0.1.0")]
#[command(about = "Citadel - browse Rick and Morty characters")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// GraphQL endpoint (default: https://rickandmortyapi.com/graphql)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch pages and print the filtered, sorted characters
    List {
        /// Number of pages to load (stops early when the server runs out)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// Keep only this status: alive, dead or unknown
        #[arg(long)]
        status: Option<String>,

        /// Keep only species containing this text (case-insensitive)
        #[arg(long)]
        species: Option<String>,

        /// Sort key: name or origin
        #[arg(long, default_value = "name")]
        sort: String,

        /// Output language: en or de
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// Fetch a single page and print its cursor info
    Page {
        /// Page number
        number: u32,
    },

    /// Print the GraphQL request body without sending it
    Query {
        /// Page number to put in the variables
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
}

/// Parse a status filter value into the form the API uses
fn parse_status(s: &str) -> Result<String> {
    match s.to_lowercase().as_str() {
        "" | "all" => Ok(String::new()),
        "alive" => Ok(CharacterStatus::Alive.wire_value().to_string()),
        "dead" => Ok(CharacterStatus::Dead.wire_value().to_string()),
        "unknown" => Ok(CharacterStatus::Unknown.wire_value().to_string()),
        _ => anyhow::bail!(
            "Invalid status '{}'. Must be one of: alive, dead, unknown",
            s
        ),
    }
}

fn build_config(endpoint: Option<String>, language: Language) -> Result<GalleryConfig> {
    let config = GalleryConfig::default().with_language(language);
    Ok(match endpoint {
        Some(endpoint) => config.with_endpoint(endpoint)?,
        None => config,
    })
}

fn print_card(character: &Character, t: &Messages) {
    println!("  {}", t.or_unnamed(character.name.as_deref()));
    println!("    {}: {}", t.label_status, t.or_unknown(character.status.as_deref()));
    println!("    {}: {}", t.label_species, t.or_unknown(character.species.as_deref()));
    println!("    {}: {}", t.label_gender, t.or_unknown(character.gender.as_deref()));
    println!("    {}: {}", t.label_origin, t.or_unknown(character.origin_name()));
    if let Some(ref image) = character.image {
        println!("    {}", image);
    }
}

async fn list(
    config: &GalleryConfig,
    pages: u32,
    filter: &FilterState,
) -> Result<()> {
    let t = config.language().messages();
    let client = GraphQlClient::from_config(config);
    let mut feed = Feed::new();

    eprintln!("{}", t.loading_initial);
    if let Some(request) = feed.begin_initial() {
        feed.load(&client, request).await;
    }

    if let FeedStatus::Failed(err) = feed.status() {
        anyhow::bail!("{}", t.error_loading(Some(err.message())));
    }

    while feed.pages_loaded() < pages {
        let Some(request) = feed.request_next() else {
            break;
        };
        eprintln!("{}", t.loading_more);
        feed.load(&client, request).await;
        if feed.fetch_more_error().is_some() {
            break;
        }
    }

    let derived = feed.derive(filter);

    println!("{}", t.title);
    println!();

    if feed.fetch_more_error().is_some() {
        eprintln!("{}", t.error_fetching_more);
    }

    if derived.is_empty() {
        println!("{}", t.no_characters_found);
        return Ok(());
    }

    for character in &derived {
        print_card(character, t);
        println!();
    }

    println!("({}/{})", derived.len(), feed.characters().len());
    if !feed.has_more() {
        println!("{}", t.end_message);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingBuilder::new().verbosity(cli.verbose).init();

    match cli.command {
        Commands::List {
            pages,
            status,
            species,
            sort,
            lang,
        } => {
            let language: Language = lang.parse()?;
            let filter = FilterState::new()
                .with_status(parse_status(status.as_deref().unwrap_or(""))?)
                .with_species(species.unwrap_or_default())
                .sorted_by(sort.parse::<SortKey>()?);
            let config = build_config(cli.endpoint, language)?;

            tracing::info!(endpoint = config.endpoint(), pages, ?filter, "Listing characters");
            list(&config, pages, &filter).await?;
        }

        Commands::Page { number } => {
            let config = build_config(cli.endpoint, Language::default())?;
            let client = GraphQlClient::from_config(&config);
            let page = client.characters(number).await?;

            let results = page.results.unwrap_or_default();
            println!("Page {}", number);
            println!("  Count: {}", page.info.count);
            println!("  Pages: {}", page.info.pages);
            println!(
                "  Next: {}",
                page.info.next.map_or("none".to_string(), |n| n.to_string())
            );
            println!(
                "  Prev: {}",
                page.info.prev.map_or("none".to_string(), |n| n.to_string())
            );
            println!("  Results: {}", results.len());
            for character in results {
                println!(
                    "    {} {}",
                    character.id,
                    character.name.as_deref().unwrap_or("-")
                );
            }
        }

        Commands::Query { page } => {
            let body = serde_json::to_string_pretty(&GraphQlRequest::characters(page))?;
            println!("{}", body);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("ALIVE").unwrap(), "Alive");
        assert_eq!(parse_status("unknown").unwrap(), "unknown");
        assert_eq!(parse_status("all").unwrap(), "");
        assert!(parse_status("zombie").is_err());
    }

    #[test]
    fn test_build_config_rejects_bad_endpoint() {
        assert!(build_config(Some("localhost".into()), Language::En).is_err());
        let config = build_config(None, Language::De).unwrap();
        assert_eq!(config.language(), Language::De);
    }
}
