mod config;
mod flow;

use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), flow::Error> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "flow.json".to_string());

    flow::Flow::from_file(&PathBuf::from(path)).await?.run().await
}
