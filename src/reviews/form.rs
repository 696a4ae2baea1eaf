use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew::AppHandle;

use crate::dom::Page;
use crate::reviews::api::submit_review;
use crate::reviews::models::{star_line, ReviewDraft, MAX_RATING};

const SUBMIT_FAILED: &str = "Não foi possível enviar sua avaliação. Tente novamente mais tarde.";

#[derive(Clone, PartialEq)]
enum FormStatus {
    Sent(String),
    Error(String),
}

fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[function_component(ReviewForm)]
pub fn review_form() -> Html {
    let draft = use_state(ReviewDraft::default);
    let status = use_state(|| None::<FormStatus>);
    let is_sending = use_state(|| false);

    let edit = |apply: fn(&mut ReviewDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            apply(&mut next, event_value(&e));
            draft.set(next);
        })
    };
    let on_text = |apply: fn(&mut ReviewDraft, String)| {
        let edit = edit(apply);
        Callback::from(move |e: InputEvent| edit.emit(e.into()))
    };

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        let is_sending = is_sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }
            let submission = match draft.to_submission() {
                Ok(submission) => submission,
                Err(invalid) => {
                    status.set(Some(FormStatus::Error(invalid.to_string())));
                    return;
                }
            };

            is_sending.set(true);
            status.set(None);
            let draft = draft.clone();
            let status = status.clone();
            let is_sending = is_sending.clone();
            spawn_local(async move {
                match submit_review(&submission).await {
                    Ok(response) if response.success => {
                        info!("Review for {} submitted", submission.establishment_name);
                        draft.set(ReviewDraft::default());
                        status.set(Some(FormStatus::Sent(response.message)));
                    }
                    Ok(response) => {
                        warn!("Review rejected: {}", response.message);
                        status.set(Some(FormStatus::Error(response.message)));
                    }
                    Err(err) => {
                        warn!("Review submission failed: {}", err);
                        status.set(Some(FormStatus::Error(SUBMIT_FAILED.to_string())));
                    }
                }
                is_sending.set(false);
            });
        })
    };

    let rating: u8 = draft.rating.parse().unwrap_or(MAX_RATING as u8);

    html! {
        <form class="review-form" {onsubmit}>
            <label class="review-form-field">
                {"Estabelecimento"}
                <input type="text" value={draft.establishment_name.clone()}
                    oninput={on_text(|d, v| d.establishment_name = v)} />
            </label>
            <label class="review-form-field">
                {"Endereço"}
                <input type="text" value={draft.address.clone()}
                    oninput={on_text(|d, v| d.address = v)} />
            </label>
            <label class="review-form-field">
                {"Avaliação"}
                <select onchange={edit(|d, v| d.rating = v)}>
                    { for (1..=MAX_RATING as u8).rev().map(|stars| html! {
                        <option value={stars.to_string()} selected={stars == rating}>
                            { star_line(stars as i32) }
                        </option>
                    }) }
                </select>
            </label>
            <label class="review-form-field">
                {"Lista"}
                <select onchange={edit(|d, v| d.is_positive = v == "positive")}>
                    <option value="positive" selected={draft.is_positive}>{"Positiva"}</option>
                    <option value="negative" selected={!draft.is_positive}>{"Negativa"}</option>
                </select>
            </label>
            <label class="review-form-field">
                {"Sua experiência"}
                <textarea value={draft.review_text.clone()}
                    oninput={on_text(|d, v| d.review_text = v)} />
            </label>
            <label class="review-form-field">
                {"Seu nome"}
                <input type="text" value={draft.reviewer_name.clone()}
                    oninput={on_text(|d, v| d.reviewer_name = v)} />
            </label>
            <label class="review-form-field">
                {"Seu e-mail"}
                <input type="email" value={draft.reviewer_email.clone()}
                    oninput={on_text(|d, v| d.reviewer_email = v)} />
            </label>
            {
                match &*status {
                    Some(FormStatus::Sent(message)) => html! {
                        <p class="review-form-success">{ message }</p>
                    },
                    Some(FormStatus::Error(message)) => html! {
                        <p class="review-form-error">{ message }</p>
                    },
                    None => html! {},
                }
            }
            <button type="submit" class="review-form-submit" disabled={*is_sending}>
                { if *is_sending { "Enviando..." } else { "Enviar avaliação" } }
            </button>
        </form>
    }
}

/// Mounts the submission form into `#review-form` when the page has one.
pub fn mount_review_form(page: &Page) -> Option<AppHandle<ReviewForm>> {
    let root = page.by_id("review-form")?;
    root.set_inner_html("");
    Some(yew::Renderer::<ReviewForm>::with_root(root).render())
}
