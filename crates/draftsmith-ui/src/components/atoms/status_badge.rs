//! Job status badge for list rows.

use draftsmith_api_models::JobStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatusBadgeProps {
    pub status: JobStatus,
}

#[function_component(StatusBadge)]
pub(crate) fn status_badge(props: &StatusBadgeProps) -> Html {
    let tone = match props.status {
        JobStatus::Draft => "neutral",
        JobStatus::Queued | JobStatus::Processing { .. } => "info",
        JobStatus::Completed { .. } => "success",
        JobStatus::Failed { .. } => "error",
    };
    let detail = match &props.status {
        JobStatus::Failed { reason } => Some(AttrValue::from(reason.clone())),
        _ => None,
    };
    html! {
        <span class={classes!("badge", tone)} title={detail}>
            {props.status.label()}
        </span>
    }
}
