use dioxus::prelude::*;

use crate::domain::{NivelEstoque, StatusEncomenda};
use crate::ui::theme;

/// Order status pill, colored by the CSS status variables so the daltonico
/// palette applies automatically.
#[component]
pub fn StatusBadge(status: StatusEncomenda) -> Element {
    rsx! {
        span {
            class: "{theme::status_badge_class(status)}",
            "{status.label()}"
        }
    }
}

/// Stock health pill for an ingredient.
#[component]
pub fn NivelBadge(nivel: NivelEstoque) -> Element {
    rsx! {
        span {
            class: "{theme::nivel_badge_class(nivel)}",
            "{theme::nivel_label(nivel)}"
        }
    }
}
