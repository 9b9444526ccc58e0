//! Predictor form bound to the dashboard state.

use super::card::Card;
use super::error_display::ErrorDisplay;
use crate::state::AppState;
use aqua_core::prediction::InputField;
use aqua_core::state::Action;
use dioxus::prelude::*;

/// Labelled text input for one form field.
#[component]
fn FieldInput(field: InputField, value: String) -> Element {
    let mut state = use_context::<AppState>();
    let id = field.id();
    let label = field.label();
    let placeholder = field.placeholder();

    let on_input = move |evt: Event<FormData>| {
        state.dispatch(Action::EditField(field, evt.value()));
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            label {
                r#for: "{id}",
                style: "font-size: 14px; font-weight: 500;",
                "{label}"
            }
            input {
                id: "{id}",
                placeholder: "{placeholder}",
                value: "{value}",
                style: "padding: 8px 10px; border: 1px solid #D1D5DB; border-radius: 6px; font-size: 14px;",
                oninput: on_input,
            }
        }
    }
}

/// Two-column measurement inputs, a location input and the submit button.
///
/// The button is disabled and relabelled while a prediction is pending.
#[component]
pub fn PredictorForm() -> Element {
    let mut state = use_context::<AppState>();
    let dashboard = state.dashboard.read().clone();
    let busy = dashboard.is_busy();
    let notices: Vec<String> = dashboard
        .form
        .parameter_errors()
        .iter()
        .map(|e| e.to_string())
        .collect();
    let rows: Vec<[(InputField, String); 2]> = InputField::MEASUREMENTS
        .chunks(2)
        .map(|pair| {
            [
                (pair[0], dashboard.form.get(pair[0]).to_string()),
                (pair[1], dashboard.form.get(pair[1]).to_string()),
            ]
        })
        .collect();
    let location = dashboard.form.location.clone();
    let button_label = if busy { "Analyzing..." } else { "Predict Water Quality" };
    let button_style = if busy {
        "width: 100%; padding: 10px; border: none; border-radius: 6px; background: #6EE7B7; color: #FFFFFF; font-weight: 600; cursor: not-allowed;"
    } else {
        "width: 100%; padding: 10px; border: none; border-radius: 6px; background: #059669; color: #FFFFFF; font-weight: 600; cursor: pointer;"
    };

    let on_predict = move |_| {
        state.dispatch(Action::SubmitPrediction);
    };

    rsx! {
        Card {
            title: "Water Quality Prediction".to_string(),
            description: "Enter water parameters for AI analysis".to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                for [(left, left_value), (right, right_value)] in rows.into_iter() {
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                        FieldInput { field: left, value: left_value }
                        FieldInput { field: right, value: right_value }
                    }
                }
                FieldInput { field: InputField::Location, value: location }
                ErrorDisplay { messages: notices }
                button {
                    style: "{button_style}",
                    disabled: busy,
                    onclick: on_predict,
                    "{button_label}"
                }
            }
        }
    }
}
