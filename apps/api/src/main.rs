use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use ecore_roles_api::api::{create_router, AppState};
use ecore_roles_api::config::AppConfig;
use ecore_roles_api::domain::repositories::{MembershipRepository, RoleRepository};
use ecore_roles_api::infrastructure::directory::HttpDirectoryClient;
use ecore_roles_api::infrastructure::repositories::{
    InMemoryMembershipRepository, InMemoryRoleRepository, PostgresMembershipRepository,
    PostgresRoleRepository,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ecore_roles_api=debug,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Select storage backend
    let (role_repository, membership_repository): (
        Arc<dyn RoleRepository>,
        Arc<dyn MembershipRepository>,
    ) = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("Database connected successfully");
            let roles: Arc<dyn RoleRepository> = Arc::new(PostgresRoleRepository::new(pool.clone()));
            let memberships: Arc<dyn MembershipRepository> =
                Arc::new(PostgresMembershipRepository::new(pool));
            (roles, memberships)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            let roles: Arc<dyn RoleRepository> = Arc::new(InMemoryRoleRepository::with_default_roles());
            let memberships: Arc<dyn MembershipRepository> =
                Arc::new(InMemoryMembershipRepository::new());
            (roles, memberships)
        }
    };

    // External user and team directory
    let directory = Arc::new(
        HttpDirectoryClient::with_timeout(&config.directory_base_url, config.directory_timeout)
            .expect("Failed to build directory client"),
    );
    tracing::info!(base_url = %config.directory_base_url, "Using external directory");

    let state = AppState::new(
        role_repository,
        membership_repository,
        directory.clone(),
        directory,
    );
    let app = create_router(state);

    // Start server
    let addr = config.bind_address().expect("Invalid bind address");
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
