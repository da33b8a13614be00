use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use triviaziggle::{
    config::{self, SiteConfig},
    session::registry::spawn_sweeper,
    store::{ContentStore, DirSource},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the JSON fixtures.
    #[arg(long, env, default_value = "data")]
    data_dir: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Absolute origin used for canonical links and the sitemap.
    #[arg(long, env, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env, default_value = config::DEFAULT_SITE_NAME)]
    site_name: String,

    /// Seconds a quiz session may go untouched before it is dropped.
    #[arg(
        long,
        env,
        default_value_t = config::DEFAULT_SESSION_IDLE_SECS,
        value_parser = clap::value_parser!(u64).range(2..)
    )]
    session_idle_secs: u64,

    /// Mark cookies `Secure`; enable behind HTTPS.
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,triviaziggle=debug,tower_http=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let store = ContentStore::load(&DirSource::new(&args.data_dir))
        .wrap_err_with(|| format!("could not load content from {}", args.data_dir))?;

    let mut site = SiteConfig::new(&args.base_url, &args.site_name);
    site.secure_cookies = args.secure_cookies;
    site.session_idle = Duration::from_secs(args.session_idle_secs);

    let state = AppState::new(store, site);
    spawn_sweeper(state.sessions.clone(), state.site.session_idle);

    let app = triviaziggle::router(state);
    let listener = tokio::net::TcpListener::bind(&args.address)
        .await
        .wrap_err_with(|| format!("could not bind {}", args.address))?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
