//! Routing definitions for the Draftsmith UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/articles")]
    Articles,
    #[at("/articles/:id")]
    ArticleDetail { id: String },
    #[at("/images")]
    Images,
    #[at("/plans")]
    Plans,
    #[at("/scripts")]
    Scripts,
    #[not_found]
    #[at("/404")]
    NotFound,
}
