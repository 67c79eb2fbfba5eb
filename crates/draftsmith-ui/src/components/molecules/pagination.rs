//! Token-based pagination control.
//!
//! # Design
//! - Token computation is pure and lives in the lists module; this component
//!   only renders the result.
//! - Renders nothing at zero pages; ellipsis tokens are non-interactive.

use crate::features::lists::pagination::{PageToken, page_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub current: usize,
    pub total_pages: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let tokens = page_tokens(props.current, props.total_pages);
    if tokens.is_empty() {
        return html! {};
    }
    let current = props.current;
    let total = props.total_pages;

    let go_prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if current > 1 {
                on_change.emit(current - 1);
            }
        })
    };
    let go_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if current < total {
                on_change.emit(current + 1);
            }
        })
    };

    html! {
        <nav class={classes!("pagination", props.class.clone())} aria-label="Pagination">
            <button class="page-nav" disabled={current <= 1} onclick={go_prev}>{"«"}</button>
            {for tokens.into_iter().map(|token| match token {
                PageToken::Page(page) => {
                    let on_change = props.on_change.clone();
                    html! {
                        <button
                            class={classes!("page", (page == current).then_some("active"))}
                            aria-current={(page == current).then_some("page")}
                            onclick={Callback::from(move |_| on_change.emit(page))}>
                            {page}
                        </button>
                    }
                }
                PageToken::Ellipsis => html! {
                    <span class="ellipsis" aria-hidden="true">{"…"}</span>
                },
            })}
            <button class="page-nav" disabled={current >= total} onclick={go_next}>{"»"}</button>
        </nav>
    }
}
