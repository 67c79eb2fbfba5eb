//! Destructive-action confirmation dialog.
//!
//! # Design
//! - Cancel and backdrop clicks discard the intent without side effects.
//! - The confirm control disables while the request is in flight.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub body: AttrValue,
    #[prop_or(AttrValue::from("Delete"))]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub on_confirm: Callback<()>,
}

#[function_component(ConfirmModal)]
pub(crate) fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3>{props.title.clone()}</h3>
                <p>{props.body.clone()}</p>
                <div class="modal-actions">
                    <button class="ghost" onclick={on_cancel.clone()} disabled={props.busy}>
                        {"Cancel"}
                    </button>
                    <button class="danger" onclick={on_confirm} disabled={props.busy}>
                        {if props.busy { AttrValue::from("Working…") } else { props.confirm_label.clone() }}
                    </button>
                </div>
            </div>
            <button class="modal-backdrop" onclick={on_cancel} aria-label="Close dialog"></button>
        </div>
    }
}
