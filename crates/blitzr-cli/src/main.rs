// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use blitzr::{
    ArtistOptions, BlitzrClient, Ident, LabelOptions, ReleaseQuery, SearchQuery,
};
use blitzr_config::AppConfig;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "blitzr", about = "Query the Blitzr music metadata API", version)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up an artist by slug or uuid.
    Artist {
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        slug: Option<String>,
    },
    /// Page through an artist's discography.
    Discography {
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        /// Page size for each fetch.
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Look up a release by slug or uuid.
    Release {
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        slug: Option<String>,
    },
    /// Look up a label by slug or uuid.
    Label {
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        slug: Option<String>,
    },
    /// Look up a track by uuid.
    Track { uuid: String },
    /// Look up a tag by slug.
    Tag { slug: String },
    /// Search artists by name.
    SearchArtists {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Enable predictive search on partial queries.
        #[arg(long)]
        autocomplete: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = blitzr_config::load(cli.config.as_deref())?;
    init_tracing(&config.telemetry.log_level);

    let client = build_client(&config)?;
    debug!(target: "cli", "client configured");

    match cli.command {
        Command::Artist { uuid, slug } => {
            let artist = client
                .artist(ident(uuid, slug)?, ArtistOptions::new())
                .await?;
            print_json(&artist)?;
        }
        Command::Discography { uuid, slug, limit } => {
            let mut releases = client
                .artist_releases(ident(uuid, slug)?, ReleaseQuery::new())
                .limit(limit);
            while let Some(release) = releases.try_next().await? {
                match release.year {
                    Some(year) => println!("{year}  {}", release.name),
                    None => println!("      {}", release.name),
                }
            }
        }
        Command::Release { uuid, slug } => {
            let release = client.release(ident(uuid, slug)?).await?;
            print_json(&release)?;
        }
        Command::Label { uuid, slug } => {
            let label = client.label(ident(uuid, slug)?, LabelOptions::new()).await?;
            print_json(&label)?;
        }
        Command::Track { uuid } => {
            let track = client.track(&uuid).await?;
            print_json(&track)?;
        }
        Command::Tag { slug } => {
            let tag = client.tag(&slug).await?;
            print_json(&tag)?;
        }
        Command::SearchArtists {
            query,
            limit,
            autocomplete,
        } => {
            let mut results = client
                .search_artists(SearchQuery::new(query).autocomplete(autocomplete))
                .limit(limit);
            println!("{} matches", results.total().await?);
            if let Some(page) = results.next_page().await? {
                for artist in page {
                    println!("{}", artist.name);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let fmt_layer = fmt::layer().with_target(true).with_level(true);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn build_client(config: &AppConfig) -> Result<BlitzrClient> {
    let key = config
        .api
        .key
        .as_deref()
        .context("no API key configured (set BLITZR_API__KEY or api.key in the config file)")?;

    let mut builder = BlitzrClient::builder()
        .api_key(key)
        .timeout(Duration::from_secs(config.api.timeout_secs));
    if let Some(base_url) = &config.api.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(interval_ms) = config.api.rate_limit_ms {
        builder = builder.rate_limit_interval(Duration::from_millis(interval_ms));
    }

    Ok(builder.build()?)
}

fn ident(uuid: Option<String>, slug: Option<String>) -> Result<Ident> {
    match (uuid, slug) {
        (Some(uuid), None) => Ok(Ident::uuid(uuid)),
        (None, Some(slug)) => Ok(Ident::slug(slug)),
        _ => bail!("exactly one of --uuid or --slug is required"),
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ident_requires_exactly_one() {
        assert!(ident(None, None).is_err());
        assert!(ident(Some("AR1".into()), Some("eminem".into())).is_err());
        assert_eq!(
            ident(None, Some("eminem".into())).unwrap(),
            Ident::slug("eminem")
        );
        assert_eq!(ident(Some("AR1".into()), None).unwrap(), Ident::uuid("AR1"));
    }

    #[test]
    fn test_build_client_requires_key() {
        let config = AppConfig::default();
        assert!(build_client(&config).is_err());

        let mut config = AppConfig::default();
        config.api.key = Some("k".into());
        assert!(build_client(&config).is_ok());
    }
}
