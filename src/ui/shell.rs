use dioxus::prelude::*;

use crate::app::{persist_theme_prefs, Route};
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::{APP_NAME, APP_VERSION};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let settings = state.with(|s| s.theme);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let mut state_mut = state;

    let root_class = theme::root_class(&settings);
    let dark_label = if settings.is_dark { "☀️" } else { "🌙" };
    let dark_title = if settings.is_dark {
        "Tema claro"
    } else {
        "Tema escuro"
    };
    let daltonico_title = if settings.is_daltonico {
        "Desativar modo daltônico"
    } else {
        "Ativar modo daltônico"
    };
    let daltonico_class = if settings.is_daltonico {
        "icon-btn active"
    } else {
        "icon-btn"
    };

    rsx! {
        div {
            class: "{root_class}",
            "data-daltonico": theme::daltonico_attr(&settings),
            header {
                class: "app-header",
                h1 { class: "app-title", title: "v{APP_VERSION}", "🧁 {APP_NAME}" }
                div {
                    class: "row-actions",
                    button {
                        class: "{daltonico_class}",
                        title: "{daltonico_title}",
                        onclick: move |_| {
                            state_mut.with_mut(|s| s.theme.is_daltonico = !s.theme.is_daltonico);
                            persist_theme_prefs(&state_mut);
                        },
                        "👁"
                    }
                    button {
                        class: "icon-btn",
                        title: "{dark_title}",
                        onclick: move |_| {
                            state_mut.with_mut(|s| s.theme.is_dark = !s.theme.is_dark);
                            persist_theme_prefs(&state_mut);
                        },
                        "{dark_label}"
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            nav { class: "app-nav",
                NavTab { active: matches!(current_route, Route::Dashboard {}), onclick: move |_| { nav.push(Route::Dashboard {}); }, label: "🏠 Início" }
                NavTab { active: matches!(current_route, Route::Insumos {}), onclick: move |_| { nav.push(Route::Insumos {}); }, label: "🥚 Insumos" }
                NavTab { active: matches!(current_route, Route::Catalogo {}), onclick: move |_| { nav.push(Route::Catalogo {}); }, label: "🍰 Catálogo" }
                NavTab { active: matches!(current_route, Route::Encomendas {}), onclick: move |_| { nav.push(Route::Encomendas {}); }, label: "📋 Encomendas" }
                NavTab { active: matches!(current_route, Route::Relatorios {}), onclick: move |_| { nav.push(Route::Relatorios {}); }, label: "📊 Relatórios" }
            }
        }
    }
}

#[component]
fn NavTab(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-tab active" } else { "nav-tab" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
