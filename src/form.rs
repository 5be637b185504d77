use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::model::{self, FormValues};
use crate::submit::{self, SubmitOutcome, SubmitPhase, WebhookConfig};
use crate::validate::{validate, FieldState, FieldStates};

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_TEXT: &str = "Expense recorded. Thank you!";
pub const ERROR_TITLE: &str = "Error";

/// Visibility of one acknowledgment overlay. Each modal is dismissed by its
/// own close button and nothing else.
#[derive(Clone, Copy, PartialEq)]
pub enum ModalState {
    Hidden,
    Shown,
}

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub config: WebhookConfig,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let values = use_state(FormValues::default);
    let fields = use_state(FieldStates::default);
    let phase = use_state(SubmitPhase::default);
    let success_modal = use_state(|| ModalState::Hidden);
    let error_modal = use_state(|| ModalState::Hidden);
    let error_text = use_state(|| "");

    let on_pharmacy_input = {
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*values).clone();
            next.pharmacy_number = input.value();
            values.set(next);
        })
    };

    // Switching category immediately re-derives the comment placeholder and
    // drops any stale comment error; full validation waits for submit.
    let on_category_change = {
        let values = values.clone();
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*values).clone();
            next.category = select.value();
            values.set(next);
            fields.set(fields.without_comment_error());
        })
    };

    let on_comment_input = {
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*values).clone();
            next.comment = input.value();
            values.set(next);
        })
    };

    let on_amount_input = {
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*values).clone();
            next.amount = input.value();
            values.set(next);
        })
    };

    let on_submit = {
        let values = values.clone();
        let fields = fields.clone();
        let phase = phase.clone();
        let success_modal = success_modal.clone();
        let error_modal = error_modal.clone();
        let error_text = error_text.clone();
        let config = props.config.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let checked = validate(&values);
            let ok = checked.all_valid();
            fields.set(checked);
            if !ok {
                return;
            }

            let submission = match values.to_submission() {
                Some(submission) => submission,
                None => return,
            };

            phase.set(SubmitPhase::Submitting);

            let values = values.clone();
            let fields = fields.clone();
            let phase = phase.clone();
            let success_modal = success_modal.clone();
            let error_modal = error_modal.clone();
            let error_text = error_text.clone();
            let config = config.clone();

            spawn_local(async move {
                let result = submit::deliver(&config, &submission).await;
                if let Err(err) = &result {
                    error!(format!("expense submission failed: {err}"));
                }

                let outcome = SubmitOutcome::of(&result);
                if outcome.clears_form() {
                    values.set(FormValues::default());
                    fields.set(FieldStates::default());
                    success_modal.set(ModalState::Shown);
                } else if let Some(msg) = outcome.error_message() {
                    error_text.set(msg);
                    error_modal.set(ModalState::Shown);
                }

                // Button comes back regardless of outcome.
                phase.set(SubmitPhase::Idle);
            });
        })
    };

    let on_close_success = {
        let success_modal = success_modal.clone();
        Callback::from(move |_| success_modal.set(ModalState::Hidden))
    };

    let on_close_error = {
        let error_modal = error_modal.clone();
        Callback::from(move |_| error_modal.set(ModalState::Hidden))
    };

    let comment_required = model::comment_required(&values.category);

    html! {
        <div class="form-card">
            <h1 class="form-title">{"Expense record"}</h1>

            <form id="expense-form" onsubmit={on_submit} novalidate=true>
                <div class="form-group">
                    <label for="pharmacy-number">{"Pharmacy number"}</label>
                    <input
                        id="pharmacy-number"
                        type="text"
                        class={input_class(&fields.pharmacy_number)}
                        placeholder="e.g. 12"
                        value={values.pharmacy_number.clone()}
                        oninput={on_pharmacy_input}
                    />
                    { field_error("pharmacy-number", &fields.pharmacy_number) }
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        class={input_class(&fields.category)}
                        onchange={on_category_change}
                    >
                        <option value="" selected={values.category.is_empty()} disabled=true>
                            {"Select a category"}
                        </option>
                        { for model::CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={values.category == *category}>
                                { *category }
                            </option>
                        }) }
                    </select>
                    { field_error("category", &fields.category) }
                </div>

                <div class="form-group">
                    <label for="comment">
                        {"Comment"}
                        {
                            if comment_required {
                                html! {}
                            } else {
                                html! { <span class="optional-label">{" (optional)"}</span> }
                            }
                        }
                    </label>
                    <input
                        id="comment"
                        type="text"
                        class={input_class(&fields.comment)}
                        placeholder={model::comment_placeholder(&values.category)}
                        value={values.comment.clone()}
                        oninput={on_comment_input}
                    />
                    { field_error("comment", &fields.comment) }
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        id="amount"
                        type="number"
                        inputmode="decimal"
                        step="0.01"
                        class={input_class(&fields.amount)}
                        placeholder="0.00"
                        value={values.amount.clone()}
                        oninput={on_amount_input}
                    />
                    { field_error("amount", &fields.amount) }
                </div>

                <button type="submit" class="submit-btn" disabled={phase.is_submitting()}>
                    {
                        if phase.is_submitting() {
                            html! { <span class="loader-spinner"></span> }
                        } else {
                            html! { <span class="btn-text">{"Submit expense"}</span> }
                        }
                    }
                </button>
            </form>

            {
                match *success_modal {
                    ModalState::Shown => html! {
                        <div id="success-modal" class="modal-overlay">
                            <div class="modal">
                                <h2 class="modal-title">{ SUCCESS_TITLE }</h2>
                                <p class="modal-text">{ SUCCESS_TEXT }</p>
                                <button id="modal-close-btn" class="modal-close" onclick={on_close_success}>
                                    {"Close"}
                                </button>
                            </div>
                        </div>
                    },
                    ModalState::Hidden => html! {},
                }
            }

            {
                match *error_modal {
                    ModalState::Shown => html! {
                        <div id="error-modal" class="modal-overlay">
                            <div class="modal">
                                <h2 class="modal-title">{ ERROR_TITLE }</h2>
                                <p id="error-modal-text" class="modal-text">{ *error_text }</p>
                                <button id="error-modal-close-btn" class="modal-close" onclick={on_close_error}>
                                    {"Close"}
                                </button>
                            </div>
                        </div>
                    },
                    ModalState::Hidden => html! {},
                }
            }
        </div>
    }
}

fn input_class(state: &FieldState) -> Classes {
    classes!("form-input", state.is_invalid().then_some("error"))
}

fn field_error(field_id: &'static str, state: &FieldState) -> Html {
    match state.message() {
        Some(msg) => html! {
            <span id={format!("error-{field_id}")} class="form-error visible">{ msg }</span>
        },
        None => html! {
            <span id={format!("error-{field_id}")} class="form-error"></span>
        },
    }
}
