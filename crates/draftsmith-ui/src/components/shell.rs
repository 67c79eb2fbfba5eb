//! App chrome: brand header plus primary navigation.

use crate::app::Route;
use crate::app::preferences::BackendChoice;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
    pub backend: BackendChoice,
    pub on_toggle_backend: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="brand">
                    <strong>{"Draftsmith"}</strong>
                    <span class="muted">{"Content studio"}</span>
                </div>
                <nav>
                    {nav_item(Route::Articles, "Articles", &props.active)}
                    {nav_item(Route::Images, "Product images", &props.active)}
                    {nav_item(Route::Plans, "Marketing plans", &props.active)}
                    {nav_item(Route::Scripts, "Video scripts", &props.active)}
                </nav>
                <div class="sidebar-footer">
                    <small>{"Backend"}</small>
                    <button class="ghost" onclick={props.on_toggle_backend.clone()}>
                        {match props.backend {
                            BackendChoice::Http => "Live",
                            BackendChoice::Fixture => "Demo data",
                        }}
                    </button>
                </div>
            </aside>
            <main class="content">
                { for props.children.iter() }
            </main>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let is_active = *active == route
        || matches!(
            (active, &route),
            (Route::ArticleDetail { .. }, Route::Articles)
        );
    html! {
        <Link<Route> to={route} classes={classes!("nav-item", is_active.then_some("active"))}>
            {label}
        </Link<Route>>
    }
}
