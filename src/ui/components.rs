/// Reusable UI components

use js_sys::Date;
use patternfly_yew::prelude::{Button, ButtonVariant};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::email_data::GeneratedEmail;
use crate::history::History;

/// Locale-aware time of day for a millisecond timestamp
pub fn format_time(timestamp: f64, locale: &str) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp));
    String::from(date.to_locale_time_string(locale))
}

#[function_component(AppHeader)]
pub fn app_header() -> Html {
    html! {
        <header class="app-header">
            <h1 class="app-title">{"مولد البريد الذكي"}</h1>
            <p class="app-tagline">{"أداة التسلسل التلقائي للعناوين"}</p>
            <span class="app-badge">{"يدعم Gmail, Outlook, ProtonMail"}</span>
        </header>
    }
}

#[function_component(AppFooter)]
pub fn app_footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="app-footer">
            <p>{format!("© {} مولد البريد الإلكتروني الذكي. جميع الحقوق محفوظة.", year)}</p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterControlProps {
    pub counter: u32,
    pub on_increment: Callback<MouseEvent>,
    pub on_decrement: Callback<MouseEvent>,
}

#[function_component(CounterControl)]
pub fn counter_control(props: &CounterControlProps) -> Html {
    html! {
        <div class="counter-control">
            <span class="counter-label">{"رقم التسلسل الحالي:"}</span>
            <div class="counter-buttons">
                <Button onclick={props.on_decrement.clone()} variant={ButtonVariant::Secondary}>
                    {"-"}
                </Button>
                <span class="counter-value">{props.counter}</span>
                <Button onclick={props.on_increment.clone()} variant={ButtonVariant::Secondary}>
                    {"+"}
                </Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LatestResultProps {
    pub entry: GeneratedEmail,
    pub copied: bool,
    /// Receives the entry id
    pub on_copy: Callback<String>,
}

#[function_component(LatestResult)]
pub fn latest_result(props: &LatestResultProps) -> Html {
    let entry = &props.entry;
    let onclick = props.on_copy.reform({
        let id = entry.id.clone();
        move |_: MouseEvent| id.clone()
    });

    html! {
        <div class="latest-result">
            <span class="latest-badge">{"تم التوليد بنجاح"}</span>
            <div class="latest-email" dir="ltr">{&entry.full_email}</div>
            <Button
                onclick={onclick}
                variant={if props.copied { ButtonVariant::Primary } else { ButtonVariant::Secondary }}
            >
                {if props.copied { "✓ تم النسخ!" } else { "📋 نسخ البريد" }}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub history: History,
    #[prop_or_default]
    pub copied_id: Option<String>,
    pub time_locale: String,
    pub on_copy: Callback<String>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <div class="history-card">
            <div class="history-header">
                <h3 class="history-title">{"السجل السابق"}</h3>
                <Button onclick={props.on_clear.clone()} variant={ButtonVariant::Danger}>
                    {"🗑️ مسح السجل"}
                </Button>
            </div>
            <div class="history-list">
                {for props.history.iter().map(|entry| {
                    let is_copied = props.copied_id.as_deref() == Some(entry.id.as_str());
                    let onclick = props.on_copy.reform({
                        let id = entry.id.clone();
                        move |_: MouseEvent| id.clone()
                    });

                    html! {
                        <div key={entry.id.clone()} class="history-item">
                            <div class="history-content">
                                <span class="history-email" dir="ltr">{&entry.full_email}</span>
                                <span class="history-time">
                                    {format_time(entry.timestamp, &props.time_locale)}
                                </span>
                            </div>
                            <Button onclick={onclick} variant={ButtonVariant::Plain}>
                                {if is_copied { "✓" } else { "📋" }}
                            </Button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
