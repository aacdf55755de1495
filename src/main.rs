use centraline_service::api;
use centraline_service::store::RecordStore;
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_BIND: &str = "0.0.0.0:5000";
const DEFAULT_DATA_PATH: &str = "dati_centraline.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;
    let mut data_path = DEFAULT_DATA_PATH.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" if i + 1 < args.len() => {
                data_path = args[i + 1].clone();
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data <path>]", args[0]);
                eprintln!("Defaults: --bind {} --data {}", DEFAULT_BIND, DEFAULT_DATA_PATH);
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    // Load failure is tolerated: the store comes up empty and every query
    // answers not-found until the next restart.
    let store = Arc::new(RecordStore::load(&data_path));
    tracing::info!("Record store ready with {} records", store.len());

    let app = api::router(store);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");
    axum::serve(listener, app).await?;

    Ok(())
}
