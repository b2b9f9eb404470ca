use impact_server::frameworks::server;

#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    if let Err(error) = server::run_with_config().await {
        tracing::error!(%error, "server exited with error");
    }
}
