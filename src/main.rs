use anyhow::{Context, Result};
use axum::http::HeaderValue;
use bloglist_api::{
    application::{
        ports::{ClockPort, PasswordHasherPort, TokenManagerPort},
        services::{ApplicationServices, ServiceOptions},
    },
    config::AppConfig,
    domain::{
        account::{AccountRepository, UsernameMatching},
        post::{PostReadRepository, PostWriteRepository},
    },
    infrastructure::{
        database,
        repositories::{
            InMemoryAccountRepository, InMemoryPostRepository, PostgresAccountRepository,
            PostgresPostRepository,
        },
        security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
        time::SystemClock,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

struct Repositories {
    accounts: Arc<dyn AccountRepository>,
    post_write: Arc<dyn PostWriteRepository>,
    post_read: Arc<dyn PostReadRepository>,
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let matching = UsernameMatching::from_flag(config.username_case_insensitive());
    let repos = open_repositories(&config, matching).await?;

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<TokenManagerPort> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    if config.token_ttl().is_none() {
        tracing::warn!("TOKEN_TTL_SECONDS not set; issued tokens never expire");
    }

    let services = Arc::new(ApplicationServices::new(
        repos.accounts,
        repos.post_write,
        repos.post_read,
        password_hasher,
        token_manager,
        clock,
        ServiceOptions {
            owner_gated_updates: config.require_owner_for_update(),
        },
    ));

    let allowed_origins = config
        .allowed_origins()
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let app = build_router(HttpState { services }, &allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_repositories(config: &AppConfig, matching: UsernameMatching) -> Result<Repositories> {
    let Some(database_url) = config.database_url() else {
        tracing::warn!("DATABASE_URL not set; using the in-memory store");
        let posts = Arc::new(InMemoryPostRepository::new());
        return Ok(Repositories {
            accounts: Arc::new(InMemoryAccountRepository::new(matching)),
            post_write: posts.clone(),
            post_read: posts,
        });
    };

    let pool = database::init_pool(database_url)
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let posts = Arc::new(PostgresPostRepository::new(pool.clone()));
    Ok(Repositories {
        accounts: Arc::new(PostgresAccountRepository::new(pool, matching)),
        post_write: posts.clone(),
        post_read: posts,
    })
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
