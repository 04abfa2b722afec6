//! Notes client entry point.
//!
//! Reads the store URL from the environment and hands control to the
//! interactive shell. All remote work is async on a single thread; the
//! shell stays responsive because network calls suspend only their caller.

use notes_client::config;
use notes_client::shell;
use notes_client::store::HttpNoteStore;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let api_url = config::api_url();
    log::info!("Using note store at {}", api_url);

    let store = HttpNoteStore::new(&api_url);

    if let Err(e) = shell::run(&store).await {
        log::error!("Shell terminated with I/O error: {}", e);
        std::process::exit(1);
    }
}
