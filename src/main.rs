use jamrelay::{
    config, error, info, management::TokenManager, server, server::AppState,
    store::PlaylistStore, success, warning,
};

#[tokio::main]
async fn main() {
    config::load_env();

    info!("Starting playlist relay");

    let store = match PlaylistStore::connect(&config::mongodb_uri(), &config::mongodb_database())
        .await
    {
        Ok(store) => store,
        Err(e) => error!("Failed to connect to document store: {}", e),
    };

    let tokens = TokenManager::new();
    match tokens.acquire().await {
        Ok(()) => success!("Spotify access token acquired"),
        Err(e) => warning!(
            "Failed to acquire Spotify access token, search stays unavailable: {}",
            e
        ),
    }

    info!("Server listening on {}", config::server_addr());
    server::start_api_server(AppState { tokens, store }).await;
}
