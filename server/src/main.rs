use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{app, telemetry, Config, MemoryStore, SqliteStore, StoreKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format)?;

    let router = match config.store {
        StoreKind::Memory => {
            tracing::warn!("using in-memory store, todos are lost on exit");
            app(MemoryStore::new())
        }
        StoreKind::Sqlite => {
            let store = SqliteStore::connect(&config.database_url, config.max_connections)
                .await
                .with_context(|| format!("opening {}", config.database_url))?;
            app(store)
        }
    };

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "listening");

    todo_server::run(listener, router, todo_server::shutdown_signal()).await?;
    Ok(())
}
