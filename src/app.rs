use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::api::{ConfeitariaClient, FiltroEncomendas},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CatalogoPage, DashboardPage, EncomendasPage, InsumosPage, RelatoriosPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_prefs, save_persisted_prefs},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/insumos")]
    Insumos {},
    #[route("/catalogo")]
    Catalogo {},
    #[route("/encomendas")]
    Encomendas {},
    #[route("/relatorios")]
    Relatorios {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_prefs() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Encomenda filter shared with the page; changing it refetches.
    let filtro_encomendas = use_signal(FiltroEncomendas::default);
    use_context_provider(|| filtro_encomendas.clone());

    let _catalogo = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        move || async move { fetch_catalogo(state.clone(), toasts.clone()).await }
    });

    let _insumos = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        move || async move { fetch_insumos(state.clone(), toasts.clone()).await }
    });

    let _encomendas = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let filtro_encomendas = filtro_encomendas.clone();
        move || async move {
            fetch_encomendas(state.clone(), toasts.clone(), filtro_encomendas.clone()).await
        }
    });

    let _balanco = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        move || async move { fetch_balanco(state.clone(), toasts.clone()).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::icon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_theme_prefs(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_prefs(&snapshot) {
        println!("Failed to persist theme prefs: {err}");
    }
}

async fn fetch_catalogo(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let Ok(client) = ConfeitariaClient::new() else {
        push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
        return;
    };
    match client.listar_catalogo().await {
        Ok(itens) => {
            println!("Loaded {} catalog items.", itens.len());
            state.with_mut(|st| st.catalogo = itens);
        }
        Err(err) => {
            println!("Failed to load catalog: {err}");
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Erro ao carregar o catálogo: {err}"),
            );
        }
    }
}

async fn fetch_insumos(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let Ok(client) = ConfeitariaClient::new() else {
        push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
        return;
    };
    match client.listar_insumos().await {
        Ok(insumos) => {
            println!("Loaded {} insumos.", insumos.len());
            state.with_mut(|st| st.insumos = insumos);
        }
        Err(err) => {
            println!("Failed to load insumos: {err}");
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Erro ao carregar insumos: {err}"),
            );
        }
    }
}

async fn fetch_encomendas(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    filtro: Signal<FiltroEncomendas>,
) {
    // Reading the signal here re-runs this resource on every filter change.
    let filtro = filtro();
    let Ok(client) = ConfeitariaClient::new() else {
        push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
        return;
    };
    match client.listar_encomendas(&filtro).await {
        Ok(encomendas) => {
            println!("Loaded {} encomendas.", encomendas.len());
            state.with_mut(|st| st.encomendas = encomendas);
        }
        Err(err) => {
            println!("Failed to load encomendas: {err}");
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Erro ao carregar encomendas: {err}"),
            );
        }
    }
}

async fn fetch_balanco(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let Ok(client) = ConfeitariaClient::new() else {
        push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
        return;
    };
    match client.balanco().await {
        Ok(balanco) => {
            state.with_mut(|st| st.balanco = Some(balanco));
        }
        Err(err) => {
            println!("Failed to load balanco: {err}");
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Erro ao carregar o balanço: {err}"),
            );
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Insumos() -> Element {
    rsx! { Shell { InsumosPage {} } }
}

#[component]
pub fn Catalogo() -> Element {
    rsx! { Shell { CatalogoPage {} } }
}

#[component]
pub fn Encomendas() -> Element {
    rsx! { Shell { EncomendasPage {} } }
}

#[component]
pub fn Relatorios() -> Element {
    rsx! { Shell { RelatoriosPage {} } }
}
