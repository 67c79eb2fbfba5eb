//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const SESSION_TOKEN_KEY: &str = "draftsmith.session_token";
pub(crate) const BACKEND_KEY: &str = "draftsmith.backend";

/// Which backend the client should talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BackendChoice {
    /// REST calls against the generation backend.
    Http,
    /// Seeded in-memory fixtures, no network.
    Fixture,
}

pub(crate) fn load_backend_choice() -> BackendChoice {
    if let Ok(value) = LocalStorage::get::<String>(BACKEND_KEY) {
        return match value.as_str() {
            "http" => BackendChoice::Http,
            "fixture" => BackendChoice::Fixture,
            _ => default_backend_choice(),
        };
    }
    default_backend_choice()
}

fn default_backend_choice() -> BackendChoice {
    if is_local_host() {
        BackendChoice::Fixture
    } else {
        BackendChoice::Http
    }
}

pub(crate) fn load_session_token() -> Option<String> {
    let value = LocalStorage::get::<String>(SESSION_TOKEN_KEY).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

pub(crate) fn persist_backend_choice(choice: BackendChoice) {
    let value = match choice {
        BackendChoice::Http => "http",
        BackendChoice::Fixture => "fixture",
    };
    if let Err(err) = LocalStorage::set(BACKEND_KEY, value) {
        console::error!("storage operation failed", BACKEND_KEY, err.to_string());
    }
}

fn is_local_host() -> bool {
    let host = window()
        .location()
        .hostname()
        .unwrap_or_else(|_| String::new())
        .to_ascii_lowercase();
    host.is_empty()
        || host == "localhost"
        || host == "127.0.0.1"
        || host == "::1"
        || host.starts_with("127.")
        || host.ends_with(".local")
}

pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("7070"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:7070".to_string()
}
