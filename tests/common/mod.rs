//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use cocktails::api::{
    CatalogClient, Cocktail, HttpCatalogClient, SearchError, SearchOutcome, TimeoutConfig,
};
use cocktails::search::{SearchController, SearchState};
use cocktails::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Handle;
use tokio::sync::{oneshot, watch};
use url::Url;

pub const TWO_MARGARITAS: &str = r#"{"drinks":[
    {"idDrink":"1","strDrink":"Margarita","strDrinkThumb":"u1","strInstructions":"Shake."},
    {"idDrink":"2","strDrink":"Blue Margarita","strDrinkThumb":"u2","strInstructions":"Blend."}
]}"#;

pub const NO_DRINKS: &str = r#"{"drinks": null}"#;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn cocktail(id: &str, name: &str, instructions: &str) -> Cocktail {
    Cocktail {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: format!("https://example.test/{}.jpg", id),
        instructions: instructions.to_string(),
    }
}

pub fn http_client(base_url: &str, request_timeout: Duration) -> HttpCatalogClient {
    HttpCatalogClient::new(
        Url::parse(base_url).unwrap(),
        TimeoutConfig {
            request: request_timeout,
            connect: Duration::from_secs(2),
        },
    )
    .unwrap()
}

pub fn http_controller(base_url: &str, request_timeout: Duration) -> SearchController {
    SearchController::new(Arc::new(http_client(base_url, request_timeout)))
}

/// Wait until the controller publishes a settled state.
pub async fn settled(rx: &mut watch::Receiver<SearchState>) -> SearchState {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|state| !state.loading))
        .await
        .expect("search did not settle")
        .expect("controller dropped")
        .clone()
}

// -- Fake clients -------------------------------------------------------------

type Response = Result<SearchOutcome, SearchError>;

/// Client whose answers are released by the test, one gate per query.
/// Queries without a gate resolve to `NoResults` immediately.
#[derive(Default)]
pub struct GatedClient {
    gates: Mutex<HashMap<String, oneshot::Receiver<Response>>>,
    calls: Mutex<Vec<String>>,
}

impl GatedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gate(&self, query: &str) -> oneshot::Sender<Response> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(query.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CatalogClient for GatedClient {
    async fn search(&self, query: &str) -> Response {
        self.calls.lock().push(query.to_string());
        let gate = self.gates.lock().remove(query);
        match gate {
            Some(rx) => rx.await.unwrap_or(Ok(SearchOutcome::NoResults)),
            None => Ok(SearchOutcome::NoResults),
        }
    }
}

/// Client that always answers with the same list.
pub struct FixedClient(pub Vec<Cocktail>);

#[async_trait]
impl CatalogClient for FixedClient {
    async fn search(&self, _query: &str) -> Response {
        Ok(SearchOutcome::Found(self.0.clone()))
    }
}

// -- App helpers --------------------------------------------------------------

pub fn make_app(client: Arc<dyn CatalogClient>) -> (App, Arc<SearchController>) {
    let controller = Arc::new(SearchController::new(client));
    let app = App::new(Arc::clone(&controller), Handle::current());
    (app, controller)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        cocktails::ui::input::handle_key(app, press_key(KeyCode::Char(ch)));
    }
}
