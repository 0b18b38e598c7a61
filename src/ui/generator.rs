/// Main page of the plus-address generator

use patternfly_yew::prelude::{Alert, AlertType, Button, ButtonVariant};
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::GeneratorConfig;
use crate::state::{GeneratorAction, GeneratorState};
use crate::ui::components::{AppFooter, AppHeader, CounterControl, HistoryList, LatestResult};

// Import JS bridge functions
#[wasm_bindgen(module = "/generator.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sleep(ms: u32) -> Result<(), JsValue>;
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: GeneratorConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_reducer(move || GeneratorState::new(&config))
    };

    // Combined field: "ahmed" or "ahmed@gmail.com"
    let on_username_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(GeneratorAction::UsernameInput(input.value()));
            }
        })
    };

    let on_domain_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(GeneratorAction::DomainInput(input.value()));
            }
        })
    };

    let on_increment = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GeneratorAction::IncrementCounter))
    };

    let on_decrement = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GeneratorAction::DecrementCounter))
    };

    let on_generate = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(GeneratorAction::Generate {
                id: Uuid::new_v4().to_string(),
                timestamp: js_sys::Date::now(),
            });
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GeneratorAction::Reset))
    };

    let on_clear_history = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GeneratorAction::ClearHistory))
    };

    // Copy handler: the token is taken at click time so the latest click wins
    let on_copy = {
        let state = state.clone();
        let feedback_ms = props.config.copy_feedback_ms;

        Callback::from(move |entry_id: String| {
            let Some(email) = state.copy_text(&entry_id).map(str::to_string) else {
                log::warn!("No history entry {} to copy", entry_id);
                return;
            };

            let token = Uuid::new_v4();
            state.dispatch(GeneratorAction::CopyRequested { token });

            let dispatcher = state.dispatcher();
            spawn_local(async move {
                if let Err(e) = copy_with_feedback(&email, entry_id, token, feedback_ms, dispatcher).await {
                    log::warn!("{}", e);
                }
            });
        })
    };

    let copied_id = state.copied_id().map(str::to_string);

    html! {
        <div class="page">
            <AppHeader />

            <main class="main-content">
                <div class="input-card">
                    <div class="field-grid">
                        <div class="field">
                            <label class="field-label">{"البريد الأساسي (اسم المستخدم)"}</label>
                            <input
                                type="text"
                                dir="ltr"
                                placeholder="مثال: ahmed أو ahmed@gmail.com"
                                value={state.username.clone()}
                                oninput={on_username_input}
                                class="field-input"
                            />
                        </div>
                        <div class="field">
                            <label class="field-label">{"النطاق (Domain)"}</label>
                            <input
                                type="text"
                                dir="ltr"
                                placeholder="مثال: gmail.com"
                                value={state.domain.clone()}
                                oninput={on_domain_input}
                                class="field-input"
                            />
                        </div>
                    </div>

                    <CounterControl
                        counter={state.counter}
                        on_increment={on_increment}
                        on_decrement={on_decrement}
                    />

                    if let Some(err) = state.error {
                        <Alert r#type={AlertType::Danger} title={err.to_string()} inline={true}>
                        </Alert>
                    }

                    <div class="actions">
                        <Button onclick={on_generate} variant={ButtonVariant::Primary} block={true}>
                            {"➕ توليد العنوان التالي"}
                        </Button>
                        <Button onclick={on_reset} variant={ButtonVariant::Secondary}>
                            {"🔄 تصفير"}
                        </Button>
                    </div>
                </div>

                if let Some(latest) = state.history.latest() {
                    <LatestResult
                        entry={latest.clone()}
                        copied={state.is_copied(&latest.id)}
                        on_copy={on_copy.clone()}
                    />
                }

                if !state.history.is_empty() {
                    <HistoryList
                        history={state.history.clone()}
                        copied_id={copied_id}
                        time_locale={props.config.time_locale.clone()}
                        on_copy={on_copy}
                        on_clear={on_clear_history}
                    />
                }
            </main>

            <AppFooter />
        </div>
    }
}

// Helper functions

async fn copy_with_feedback(
    email: &str,
    entry_id: String,
    token: Uuid,
    feedback_ms: u32,
    dispatcher: UseReducerDispatcher<GeneratorState>,
) -> Result<(), String> {
    writeClipboard(email)
        .await
        .map_err(|e| format!("Failed to copy {}: {:?}", email, e))?;

    log::debug!("Copied {} to clipboard", email);

    dispatcher.dispatch(GeneratorAction::CopyConfirmed { entry_id, token });

    let slept = sleep(feedback_ms).await;
    dispatcher.dispatch(GeneratorAction::CopyExpired { token });

    slept.map_err(|e| format!("Copy feedback timer failed: {:?}", e))
}
