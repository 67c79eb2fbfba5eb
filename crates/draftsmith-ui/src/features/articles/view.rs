//! Article list and detail pages.
//!
//! # Design
//! - All list behavior comes from the shared controller hook; this file only
//!   supplies markup, the filter toolbar, and the generation form.
//! - Form fields stay raw strings; validation runs on submit and errors
//!   render inline, never as toasts.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, SearchInput, StatusBadge};
use crate::components::molecules::{ConfirmModal, Pagination};
use crate::core::store::AppStore;
use crate::features::articles::logic::build_article_input;
use crate::features::articles::state::{ArticleFilters, STATUS_OPTIONS};
use crate::features::lists::actions::{ActionEffect, ListAction, effect_of, target_of};
use crate::features::lists::hooks::{ListLens, use_list_controller};
use crate::features::lists::pagination::total_pages;
use crate::features::lists::state::{ListRecord, ListState};
use crate::services::error::ApiError;
use crate::services::resource::{ApiResource, Articles};
use draftsmith_api_models::{ArticleDetail, ArticleSummary};
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

fn read_slice(store: &AppStore) -> &ListState<ArticleSummary, ArticleFilters> {
    &store.articles
}

fn write_slice(store: &mut AppStore) -> &mut ListState<ArticleSummary, ArticleFilters> {
    &mut store.articles
}

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

#[function_component(ArticlesPage)]
pub(crate) fn articles_page() -> Html {
    let Some(api_ctx) = use_context::<ApiCtx>() else {
        return html! { <p class="error">{"Missing API context."}</p> };
    };
    let navigator = use_navigator();
    let ctrl = use_list_controller::<Articles>(
        api_ctx.client.clone(),
        ListLens {
            read: read_slice,
            write: write_slice,
        },
    );

    let topic = use_state(String::new);
    let keywords = use_state(String::new);
    let tone = use_state(String::new);
    let word_count = use_state(String::new);
    let form_error = use_state(|| None as Option<String>);

    let on_submit = {
        let topic = topic.clone();
        let keywords = keywords.clone();
        let tone = tone.clone();
        let word_count = word_count.clone();
        let form_error = form_error.clone();
        let on_generate = ctrl.on_generate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match build_article_input(&topic, &keywords, &tone, &word_count) {
                Ok(input) => {
                    form_error.set(None);
                    topic.set(String::new());
                    keywords.set(String::new());
                    word_count.set(String::new());
                    on_generate.emit(input);
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let on_search = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |search: String| {
            on_set_filters.emit(ArticleFilters {
                search,
                ..filters.clone()
            });
        })
    };

    let on_status = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_set_filters.emit(ArticleFilters {
                    status: select.value(),
                    ..filters.clone()
                });
            }
        })
    };

    let on_category = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(category) = input_value(&event) {
                on_set_filters.emit(ArticleFilters {
                    category,
                    ..filters.clone()
                });
            }
        })
    };

    // Gestures route through the classifier so each action resolves to
    // exactly one effect; this view binds navigation and delete intent.
    let on_action = {
        let rows = ctrl.state.rows.clone();
        let navigator = navigator.clone();
        let on_request_delete = ctrl.on_request_delete.clone();
        Callback::from(move |action: ListAction| {
            let id = target_of(action);
            match effect_of(action) {
                ActionEffect::Navigation => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::ArticleDetail { id: id.to_string() });
                    }
                }
                ActionEffect::IntentOnly => {
                    if let Some(row) = rows.iter().find(|row| row.id == id) {
                        on_request_delete.emit(row.clone());
                    }
                }
                ActionEffect::BackendCall | ActionEffect::AssetDownload => {}
            }
        })
    };

    let pages = total_pages(ctrl.state.total_items, Articles::page_size());
    let delete_title = ctrl
        .intent
        .target()
        .map(|target| target.title().to_string())
        .unwrap_or_default();

    html! {
        <section class="page articles">
            <header class="page-header">
                <h2>{"Articles"}</h2>
            </header>

            <form class="generate-form" onsubmit={on_submit}>
                <input
                    placeholder="Topic"
                    value={(*topic).clone()}
                    oninput={oninput_state(&topic)}
                />
                <input
                    placeholder="Keywords (comma separated)"
                    value={(*keywords).clone()}
                    oninput={oninput_state(&keywords)}
                />
                <input
                    placeholder="Tone (default neutral)"
                    value={(*tone).clone()}
                    oninput={oninput_state(&tone)}
                />
                <input
                    placeholder="Word count"
                    inputmode="numeric"
                    value={(*word_count).clone()}
                    oninput={oninput_state(&word_count)}
                />
                <button type="submit" disabled={ctrl.generating}>
                    {if ctrl.generating { "Submitting…" } else { "Generate article" }}
                </button>
                {form_error.as_ref().map(|message| html! {
                    <p class="field-error">{message.clone()}</p>
                }).unwrap_or_default()}
            </form>

            <div class="toolbar">
                <SearchInput
                    value={ctrl.state.filters.search.clone()}
                    placeholder="Search titles"
                    on_search={on_search}
                />
                <input
                    placeholder="Category"
                    value={ctrl.state.filters.category.clone()}
                    oninput={on_category}
                />
                <select onchange={on_status}>
                    <option value="" selected={ctrl.state.filters.status.is_empty()}>
                        {"Any status"}
                    </option>
                    {for STATUS_OPTIONS.iter().map(|status| html! {
                        <option
                            value={*status}
                            selected={ctrl.state.filters.status == *status}>
                            {*status}
                        </option>
                    })}
                </select>
            </div>

            {if ctrl.state.loading && ctrl.state.rows.is_empty() {
                html! { <p class="muted">{"Loading…"}</p> }
            } else if ctrl.state.rows.is_empty() {
                html! {
                    <EmptyState
                        title="No articles yet"
                        description="Submit a topic above to queue your first draft." />
                }
            } else {
                html! {
                    <table class="record-table">
                        <thead>
                            <tr>
                                <th>{"Title"}</th>
                                <th>{"Category"}</th>
                                <th>{"Status"}</th>
                                <th>{"Created"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for ctrl.state.rows.iter().map(|row| article_row(
                                row,
                                on_action.clone(),
                            ))}
                        </tbody>
                    </table>
                }
            }}

            <Pagination
                current={ctrl.state.current_page}
                total_pages={pages}
                on_change={ctrl.on_set_page.clone()}
            />

            <ConfirmModal
                open={ctrl.intent.is_open()}
                busy={ctrl.intent.is_busy()}
                title="Delete article"
                body={format!("Delete \"{delete_title}\"? This cannot be undone.")}
                on_cancel={ctrl.on_cancel_delete.clone()}
                on_confirm={ctrl.on_confirm_delete.clone()}
            />
        </section>
    }
}

fn oninput_state(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(value) = input_value(&event) {
            state.set(value);
        }
    })
}

fn article_row(row: &ArticleSummary, on_action: Callback<ListAction>) -> Html {
    let id = row.id;
    let on_view = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(ListAction::View(id)))
    };
    let on_delete = Callback::from(move |_| on_action.emit(ListAction::Delete(id)));
    html! {
        <tr key={row.id.to_string()}>
            <td>{row.title.clone()}</td>
            <td>{row.category.clone()}</td>
            <td><StatusBadge status={row.status.clone()} /></td>
            <td>{row.created_at.format("%Y-%m-%d").to_string()}</td>
            <td class="row-actions">
                <button class="ghost" onclick={on_view}>{"View"}</button>
                <button class="ghost danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ArticleDetailProps {
    pub id: String,
}

#[function_component(ArticleDetailPage)]
pub(crate) fn article_detail_page(props: &ArticleDetailProps) -> Html {
    let Some(api_ctx) = use_context::<ApiCtx>() else {
        return html! { <p class="error">{"Missing API context."}</p> };
    };
    let detail = use_state(|| None as Option<Result<ArticleDetail, ApiError>>);

    {
        let detail = detail.clone();
        let client = api_ctx.client;
        use_effect_with_deps(
            move |id: &String| {
                match Uuid::parse_str(id) {
                    Ok(id) => {
                        yew::platform::spawn_local(async move {
                            detail.set(Some(client.get::<Articles>(id).await));
                        });
                    }
                    Err(_) => detail.set(Some(Err(ApiError::NotFound))),
                }
                || ()
            },
            props.id.clone(),
        );
    }

    match detail.as_ref() {
        None => html! { <p class="muted">{"Loading…"}</p> },
        Some(Err(err)) => html! {
            <EmptyState title="Article unavailable" description={err.user_message()} />
        },
        Some(Ok(article)) => html! {
            <article class="detail">
                <header>
                    <h2>{article.title.clone()}</h2>
                    <StatusBadge status={article.status.clone()} />
                </header>
                <p class="muted">
                    {format!("{} · {}", article.category, article.created_at.format("%Y-%m-%d"))}
                </p>
                {if article.keywords.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="keywords">
                            {for article.keywords.iter().map(|k| html! { <li>{k.clone()}</li> })}
                        </ul>
                    }
                }}
                <pre class="body">{article.body.clone()}</pre>
            </article>
        },
    }
}
