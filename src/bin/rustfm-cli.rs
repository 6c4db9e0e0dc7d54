use clap::{Parser, Subcommand};
use rustfm::{Collection, Config, LastfmApi, Record};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rustfm-cli")]
#[command(about = "CLI for rustfm - Last.fm API client", long_about = None)]
struct Cli {
    /// Last.fm API key (can also be set via LASTFM_API_KEY env var)
    #[arg(long, env = "LASTFM_API_KEY", required_unless_present = "config")]
    api_key: Option<String>,

    /// Last.fm shared secret, needed for auth commands
    #[arg(long, env = "LASTFM_API_SECRET")]
    api_secret: Option<String>,

    /// JSON configuration file, used instead of the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tag metadata
    TagInfo {
        name: String,

        /// Wiki language (ISO 639)
        #[arg(long)]
        lang: Option<String>,
    },
    /// List the top global tags
    TopTags {
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long)]
        page: Option<u32>,
    },
    /// List tags similar to a tag
    SimilarTags { name: String },
    /// List the top artists for a tag
    TagTopArtists {
        name: String,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long)]
        page: Option<u32>,
    },
    /// List the top artists in a country
    GeoTopArtists {
        country: String,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long)]
        page: Option<u32>,
    },
    /// List the top tracks in a country
    GeoTopTracks {
        country: String,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long)]
        page: Option<u32>,
    },
    /// List artists similar to an artist
    SimilarArtists {
        artist: String,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Start the web auth flow: print a token and its authorization URL
    AuthUrl,
    /// Exchange an authorized token for a session key
    Session { token: String },
}

fn print_list<T: Record>(list: &Collection<T>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&Value::Object(list.to_dict()))?);
    eprintln!(
        "page {}/{} ({} total)",
        list.page(),
        list.total_pages(),
        list.total()
    );
    Ok(())
}

fn print_one<T: Record>(record: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{}",
        serde_json::to_string_pretty(&Value::Object(record.to_dict()))?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match (&cli.config, &cli.api_key) {
        (Some(path), _) => Config::from_file(path)?,
        (None, Some(key)) => {
            let config = Config::new(key.clone());
            match &cli.api_secret {
                Some(secret) => config.with_secret(secret.clone()),
                None => config,
            }
        }
        (None, None) => return Err("an API key or a config file is required".into()),
    };
    let api = LastfmApi::new(config)?;

    match cli.command {
        Commands::TagInfo { name, lang } => {
            print_one(&api.tag_info(&name, lang.as_deref()).await?)?;
        }
        Commands::TopTags { limit, page } => {
            print_list(&api.top_tags(limit, page).await?)?;
        }
        Commands::SimilarTags { name } => {
            print_list(&api.similar_tags(&name).await?)?;
        }
        Commands::TagTopArtists { name, limit, page } => {
            print_list(&api.tag_top_artists(&name, limit, page).await?)?;
        }
        Commands::GeoTopArtists {
            country,
            limit,
            page,
        } => {
            print_list(&api.geo_top_artists(&country, limit, page).await?)?;
        }
        Commands::GeoTopTracks {
            country,
            limit,
            page,
        } => {
            print_list(&api.geo_top_tracks(&country, limit, page).await?)?;
        }
        Commands::SimilarArtists { artist, limit } => {
            print_list(&api.similar_artists(&artist, limit).await?)?;
        }
        Commands::AuthUrl => {
            let token = api.token().await?;
            println!("Token: {}", token);
            println!("Authorize at: {}", api.auth_url(&token)?);
        }
        Commands::Session { token } => {
            let session = api.session(&token).await?;
            println!("Session for {}: {}", session.name, session.key);
        }
    }

    Ok(())
}
