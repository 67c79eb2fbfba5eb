//! Shared API client context for the views.

use crate::app::preferences::{BackendChoice, api_base_url, load_session_token};
use crate::services::api::{ApiClient, HttpClient};
use crate::services::fixtures::FixtureStore;
use std::rc::Rc;

/// Singleton client handed to every page through context.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// The active backend client.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Build the client for the chosen backend.
    pub(crate) fn for_backend(choice: BackendChoice) -> Self {
        let client = match choice {
            BackendChoice::Http => {
                ApiClient::Http(HttpClient::new(api_base_url(), load_session_token()))
            }
            BackendChoice::Fixture => ApiClient::Fixture(Rc::new(FixtureStore::seeded())),
        };
        Self {
            client: Rc::new(client),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
