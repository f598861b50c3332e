use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use auth::{
    AuthConfig, AuthService, CredentialHasher, RateLimiter, SessionStore, UserRepository,
    authorization, demo,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting authentication core");

    let config = AuthConfig::from_env();
    let service = AuthService::new(
        UserRepository::new(),
        RateLimiter::new(config.rate_limiter.clone()),
        CredentialHasher::new(),
        config,
    );
    let session_store = SessionStore::new();
    let catalog = common::demo_catalog();

    demo::seed_demo_users(&service).await?;
    info!("Demo accounts seeded");

    // Smoke flow: sign in as the demo admin and resolve its hospital scope
    let admin = service
        .sign_in(demo::DEMO_ADMIN_EMAIL, demo::DEMO_ADMIN_PASSWORD)
        .await?;
    session_store.save_session(&admin).await?;

    let accessible = authorization::accessible_hospitals(&admin, &catalog);
    info!(
        "Signed in {} ({}) with access to {} hospitals",
        admin.name,
        admin.role,
        accessible.len()
    );

    info!("Authentication core initialized successfully");
    Ok(())
}
