use std::path::PathBuf;

use clap::Parser;
use mycoguide::db::Db;
use mycoguide::models::CatalogSeed;
use mycoguide::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL.
    #[arg(long, env, default_value = "sqlite://mycoguide.db")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// JSON catalog seed, imported when the catalog is empty.
    #[arg(long, env)]
    seed_file: Option<PathBuf>,

    /// Mark cookies as Secure (enable behind TLS).
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,mycoguide=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if let Some(path) = &args.seed_file {
        if db.catalog_is_empty().await? {
            let raw = std::fs::read_to_string(path)?;
            let seed: CatalogSeed = serde_json::from_str(&raw)?;
            db.load_catalog(&seed).await?;
        } else {
            tracing::info!("catalog already loaded, skipping seed import");
        }
        db.repair_answer_flags().await?;
    }

    let app = mycoguide::router(AppState {
        db,
        secure_cookies: args.secure_cookies,
    });

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
