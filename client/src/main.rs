//! Client entry point
//!
//! Drives the three page flows from the command line: profile entry
//! (main page), recommendations (result page), and aggregate history
//! (stats page).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use client::{
    ApiClient, ClientError, ClientResult, FileSessionStorage, NullSessionStorage, Page,
    ProfileStore, Router, SessionStorage,
};
use shared::{RecommendationRequest, Sex, UserProfile};

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Liquor recommendation client")]
struct Args {
    /// Base path of the recommendation API
    #[arg(long, default_value = "http://127.0.0.1:8080/api")]
    api_url: String,

    /// Directory holding the session storage slots
    #[arg(long)]
    session_dir: Option<PathBuf>,

    /// Run without durable session storage (memory-only)
    #[arg(long)]
    no_session: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the stored user profile (main page)
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Fetch ranked recommendations for the stored profile (result page)
    Recommend {
        /// Drinks consumed per typical sitting
        #[arg(long)]
        drink_count: u32,

        /// Free-text preference query
        #[arg(long)]
        query: String,

        /// Follow up each recommendation with its food pairing
        #[arg(long)]
        with_pairings: bool,
    },

    /// Show aggregate recommendation history (stats page)
    Stats,
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    /// Store a new profile, replacing any prior one
    Set {
        #[arg(long)]
        age: u32,

        #[arg(long, value_parser = parse_sex)]
        sex: Sex,

        /// Consent to the privacy policy
        #[arg(long)]
        agree: bool,
    },

    /// Print the stored profile
    Show,

    /// Remove the stored profile
    Clear,
}

fn parse_sex(value: &str) -> Result<Sex, String> {
    match value {
        "male" => Ok(Sex::Male),
        "female" => Ok(Sex::Female),
        other => Err(format!("expected 'male' or 'female', got '{other}'")),
    }
}

#[tokio::main]
async fn main() -> ClientResult<()> {
    let args = Args::parse();

    shared::logging::init_tracing_with_level(Some(&args.log_level));

    // Inject the storage capability instead of probing the host at runtime
    let storage: Arc<dyn SessionStorage> = if args.no_session {
        Arc::new(NullSessionStorage)
    } else {
        let session_dir = args
            .session_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("liquor-client"));
        Arc::new(FileSessionStorage::new(session_dir))
    };

    let mut profile_store = ProfileStore::new(storage);
    match profile_store.load().await {
        Ok(Some(_)) => tracing::debug!("Restored profile from session storage"),
        Ok(None) => {}
        // A corrupt slot is recovered locally: start without a profile
        Err(e) => tracing::warn!("Ignoring stored profile: {e}"),
    }

    let mut router = Router::new();
    let api = ApiClient::new(&args.api_url);

    match args.command {
        Command::Profile { action } => {
            router.navigate(Page::Main.path())?;
            run_profile(&mut profile_store, action).await
        }
        Command::Recommend {
            drink_count,
            query,
            with_pairings,
        } => {
            router.navigate(Page::Result.path())?;
            run_recommend(&profile_store, &api, drink_count, query, with_pairings).await
        }
        Command::Stats => {
            router.navigate(Page::Stats.path())?;
            run_stats(&api).await
        }
    }
}

async fn run_profile(store: &mut ProfileStore, action: ProfileAction) -> ClientResult<()> {
    match action {
        ProfileAction::Set { age, sex, agree } => {
            store
                .set(UserProfile {
                    age,
                    sex,
                    is_privacy_agreed: agree,
                })
                .await?;

            if store.is_complete() {
                println!("Profile stored.");
            } else {
                println!("Profile stored, but incomplete: recommendations need a non-zero age and privacy consent.");
            }
        }
        ProfileAction::Show => match store.get() {
            Some(profile) => {
                println!("age: {}", profile.age);
                println!("sex: {}", profile.sex);
                println!("privacy agreed: {}", profile.is_privacy_agreed);
                println!("complete: {}", store.is_complete());
            }
            None => println!("No profile stored."),
        },
        ProfileAction::Clear => {
            store.clear().await?;
            println!("Profile cleared.");
        }
    }

    Ok(())
}

async fn run_recommend(
    store: &ProfileStore,
    api: &ApiClient,
    drink_count: u32,
    query: String,
    with_pairings: bool,
) -> ClientResult<()> {
    let Some(profile) = store.get() else {
        return Err(ClientError::ProfileIncomplete);
    };
    if !store.is_complete() {
        return Err(ClientError::ProfileIncomplete);
    }

    let request = RecommendationRequest {
        age: profile.age,
        sex: profile.sex,
        drink_count,
        user_query: query,
    };

    let recommendations = api.fetch_recommendations(&request).await?;
    if recommendations.is_empty() {
        println!("No recommendations returned.");
        return Ok(());
    }

    // Ranking order comes from the server; print it as received
    for (rank, rec) in recommendations.iter().enumerate() {
        println!("{}. {}: {}", rank + 1, rec.liquor_name, rec.reason);

        if with_pairings {
            // Pairings are looked up only after the recommendation call
            // has completed; the API itself enforces no ordering
            let pairing = api.fetch_pairing(rec.id).await?;
            println!("   pairs with: {}", pairing.food_name);
        }
    }

    Ok(())
}

async fn run_stats(api: &ApiClient) -> ClientResult<()> {
    let records = api.fetch_history().await?;
    if records.is_empty() {
        println!("No recommendation history yet.");
        return Ok(());
    }

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for record in &records {
        *counts.entry(record.liquor_name.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("{} recommendations recorded", records.len());
    for (liquor, count) in ranked {
        println!("{count:>5}  {liquor}");
    }

    Ok(())
}
