//! App root: router, shared store context, and the backend client.
//!
//! # Design
//! - The client is built once per backend choice and handed down via
//!   context; switching backends swaps the client and the views reload.
//! - Toasts live in the shared store so any page can push them.

use crate::app::api::ApiCtx;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
use crate::features::articles::view::{ArticleDetailPage, ArticlesPage};
use crate::features::images::view::ImagesPage;
use crate::features::plans::view::PlansPage;
use crate::features::scripts::view::ScriptsPage;
use crate::models::dismiss_toast;
use preferences::{BackendChoice, load_backend_choice, persist_backend_choice};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

#[function_component(DraftsmithApp)]
pub fn draftsmith_app() -> Html {
    let backend = use_state(load_backend_choice);
    let api_ctx = {
        let backend = *backend;
        use_memo(move |_| ApiCtx::for_backend(backend), backend)
    };
    let toasts = use_selector(|store: &AppStore| store.toasts.entries.clone());
    let dispatch = Dispatch::<AppStore>::new();

    let on_toggle_backend = {
        let backend = backend.clone();
        Callback::from(move |()| {
            let next = match *backend {
                BackendChoice::Http => BackendChoice::Fixture,
                BackendChoice::Fixture => BackendChoice::Http,
            };
            persist_backend_choice(next);
            backend.set(next);
        })
    };

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| dismiss_toast(&mut store.toasts, id));
        })
    };

    // Remount the page tree on backend switch so every list reloads.
    let backend_key = match *backend {
        BackendChoice::Http => "http",
        BackendChoice::Fixture => "fixture",
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Content key={backend_key} backend={*backend} on_toggle_backend={on_toggle_backend} />
            </BrowserRouter>
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    backend: BackendChoice,
    on_toggle_backend: Callback<()>,
}

// Separate component so `use_route` runs inside the router.
#[function_component(Content)]
fn content(props: &ContentProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Articles);
    html! {
        <AppShell
            active={current_route}
            backend={props.backend}
            on_toggle_backend={props.on_toggle_backend.clone()}
        >
            <Switch<Route> render={|route| match route {
                Route::Home => html! { <Redirect<Route> to={Route::Articles} /> },
                Route::Articles => html! { <ArticlesPage /> },
                Route::ArticleDetail { id } => html! { <ArticleDetailPage id={id} /> },
                Route::Images => html! { <ImagesPage /> },
                Route::Plans => html! { <PlansPage /> },
                Route::Scripts => html! { <ScriptsPage /> },
                Route::NotFound => html! {
                    <div class="placeholder">
                        <h2>{"Not found"}</h2>
                        <p class="muted">{"Use the navigation to return to a supported view."}</p>
                    </div>
                },
            }} />
        </AppShell>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DraftsmithApp>::with_root(root).render();
    } else {
        yew::Renderer::<DraftsmithApp>::new().render();
    }
}
