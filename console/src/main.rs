//! Headless console runner.
//!
//! Restores the persisted session, probes the server and navigates to the
//! path given on the command line (default `/`), then prints where the
//! navigation landed and the menu state for it.
//!
//! ```text
//! skynet-console /account/users/42/edit
//! skynet-console --sign-out
//! ```
//!
//! `--sign-out` clears the persisted session before navigating to `/`.

use std::sync::Arc;

use console::core::service::Navigator;
use console::debug::{logger, LogConfig};
use console::menu::Menu;
use console::router::routes::HOME_PATH;
use console::router::{NavigationGuard, RouteTable, Router};
use console::services::api::{system, user, ApiClient, ReqwestTransport};
use console::services::headless::{LogNotifier, LogPage};
use console::session::{FileStorage, SessionStore};
use console::{ConsoleConfig, Result};

#[tokio::main]
async fn main() {
    let _log_guard = logger::init(&LogConfig::from_env());

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Console failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ConsoleConfig::from_env()?;
    tracing::info!(api = %config.api_base_url, "Starting console");

    let storage = Arc::new(FileStorage::open(&config.state_file)?);
    tracing::debug!(state_file = %storage.path().display(), "Session storage ready");
    let session = SessionStore::hydrate(storage);

    let page = Arc::new(LogPage::default());
    let guard = NavigationGuard::new(session.clone(), page.clone(), config.app_name.clone());
    let router = Arc::new(Router::new(RouteTable::skynet(), guard));

    let transport = Arc::new(ReqwestTransport::new(&config.api_base_url, config.api_timeout)?);
    let client = ApiClient::new(transport, session.clone(), router.clone(), Arc::new(LogNotifier));

    let mut target = std::env::args().nth(1).unwrap_or_else(|| HOME_PATH.to_string());
    if target == "--sign-out" {
        user::sign_out(&client);
        target = HOME_PATH.to_string();
    }

    match system::try_check_state(&client).await {
        Ok(state) if state.fresh => {
            tracing::info!("Server not initialised yet");
            router.push("/init");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "State probe failed, continuing offline"),
    }

    let location = router.navigate(&target)?;

    let menu = Menu::skynet();
    let name = session.read().name.unwrap_or_else(|| "-".to_string());

    println!("user:   {}", name);
    println!("route:  {}", location.full_path);
    println!("title:  {}", page.title());
    println!("active: {}", menu.active_key(&location.path).unwrap_or("-"));
    println!("trail:  {}", menu.trail_keys(&location.path).join(" > "));

    Ok(())
}
