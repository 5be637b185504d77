mod form;
mod model;
mod submit;
mod validate;

use yew::prelude::*;

use form::ExpenseForm;
use submit::WebhookConfig;

/// Intake endpoint for expense records. Swapped out per deployment; the rest
/// of the app only sees the `WebhookConfig` built from it.
const WEBHOOK_URL: &str = "https://hooks.luckypharma.example/webhook/expense-intake";

#[function_component(App)]
fn app() -> Html {
    let config = WebhookConfig::new(WEBHOOK_URL);
    html! { <ExpenseForm {config} /> }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
