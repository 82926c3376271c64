// GeekedIn demo client - drives the client core against a running backend

use geekedin_client::api::ApiClient;
use geekedin_client::config::Config;
use geekedin_client::filter::FilterState;
use geekedin_client::session::SessionStore;
use geekedin_client::store::{ConnectionGraph, EventBoard, ForumBoard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    let api = ApiClient::new(&config.api)?;

    // Session is read once at startup; protected pages check it on mount.
    let session = SessionStore::load(&config.storage.session_path);

    match session.require_session() {
        Ok(user) => {
            let username = user.username.clone();
            println!("Logged in as {}", username);

            let mut events = EventBoard::new(api.clone());
            let mut forums = ForumBoard::new(api.clone());
            let mut connections = ConnectionGraph::new(api.clone());

            events.load().await;
            forums.load(&username).await;
            connections.load(&username).await;

            println!("Recommended events:   {}", events.events().len());
            println!("Recommended posts:    {}", forums.posts().len());
            println!("Friend suggestions:   {}", connections.recommendations().len());
            println!("Current connections:  {}", connections.friends().len());

            let filters = FilterState::default();
            println!(
                "Events visible with no filters: {}",
                events.filtered(&filters).len()
            );
        }
        Err(_) => {
            // Not logged in: show the landing-page samples instead.
            println!("Not logged in; fetching landing-page samples");
            let sample_events = api.random_events().await;
            let sample_profiles = api.random_profiles().await;
            println!("Sample events:   {}", sample_events.len());
            println!("Sample profiles: {}", sample_profiles.len());
        }
    }

    Ok(())
}
