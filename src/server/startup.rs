use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the configured port on all interfaces and serve the application until shutdown
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router::app(AppState::from(db))).await?;

    Ok(())
}
