use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, hint: Option<String>) -> Element {
    rsx! {
        div {
            class: "kpi-card",
            p { class: "kpi-label", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(hint) = hint {
                p { class: "kpi-hint", "{hint}" }
            }
        }
    }
}
