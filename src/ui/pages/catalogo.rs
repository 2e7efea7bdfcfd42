use dioxus::prelude::*;

use crate::{
    domain::{avaliar_item, preco_lookup, AppState},
    infra::api::{ConfeitariaClient, NovoItemCatalogo},
    ui::components::{
        catalogo_table::{CatalogoRow, CatalogoTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn CatalogoPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut busca = use_signal(String::new);
    let mut dialog_novo = use_signal(|| false);
    let detalhe = use_signal(|| None::<String>);

    let mut form_nome = use_signal(String::new);
    let mut form_categoria = use_signal(String::new);
    let mut form_preco = use_signal(String::new);
    let mut form_custo = use_signal(String::new);
    let mut form_tempo = use_signal(String::new);
    let mut form_descricao = use_signal(String::new);

    let precos = state.with(|st| preco_lookup(&st.insumos));

    let filtro = busca().trim().to_lowercase();
    let rows: Vec<CatalogoRow> = state.with(|st| {
        st.catalogo
            .iter()
            .filter(|item| {
                filtro.is_empty()
                    || item.nome.to_lowercase().contains(&filtro)
                    || item
                        .categoria
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&filtro))
            })
            .map(|item| {
                let avaliacao = avaliar_item(item, &precos);
                CatalogoRow {
                    id: item.id.clone(),
                    nome: item.nome.clone(),
                    categoria: item.categoria.clone(),
                    preco: item.preco,
                    custo: avaliacao.custo,
                    margem: avaliacao.margem,
                    tempo_preparo: item.tempo_preparo,
                }
            })
            .collect()
    });

    let detalhe_item = detalhe().and_then(|id| {
        state.with(|st| st.catalogo.iter().find(|item| item.id == id).cloned())
    });

    let on_criar = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let nome = form_nome().trim().to_string();
            if nome.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Informe o nome do produto.");
                return;
            }
            let Ok(preco) = form_preco().trim().parse::<f64>() else {
                push_toast(toasts.clone(), ToastKind::Warning, "Informe um preço de venda válido.");
                return;
            };
            let payload = NovoItemCatalogo {
                nome,
                categoria: {
                    let c = form_categoria().trim().to_string();
                    (!c.is_empty()).then_some(c)
                },
                preco_venda: preco,
                custo_producao: form_custo().trim().parse().unwrap_or(0.0),
                descricao: {
                    let d = form_descricao().trim().to_string();
                    (!d.is_empty()).then_some(d)
                },
                tempo_preparo: form_tempo().trim().parse().ok(),
            };

            let mut state = state.clone();
            let toasts = toasts.clone();
            let mut dialog_novo = dialog_novo.clone();
            let mut form_nome = form_nome.clone();
            let mut form_categoria = form_categoria.clone();
            let mut form_preco = form_preco.clone();
            let mut form_custo = form_custo.clone();
            let mut form_tempo = form_tempo.clone();
            let mut form_descricao = form_descricao.clone();
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client.criar_catalogo(&payload).await {
                    Ok(item) => {
                        let nome = item.nome.clone();
                        state.with_mut(|st| st.catalogo.push(item));
                        dialog_novo.set(false);
                        form_nome.set(String::new());
                        form_categoria.set(String::new());
                        form_preco.set(String::new());
                        form_custo.set(String::new());
                        form_tempo.set(String::new());
                        form_descricao.set(String::new());
                        push_toast(
                            toasts.clone(),
                            ToastKind::Success,
                            format!("Produto {nome} adicionado ao catálogo."),
                        );
                    }
                    Err(err) => {
                        println!("Failed to create catalog item: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao cadastrar produto: {err}"),
                        );
                    }
                }
            });
        }
    };

    let on_view = {
        let mut detalhe = detalhe.clone();
        move |id: String| detalhe.set(Some(id))
    };

    let on_remove = {
        let state = state.clone();
        let toasts = toasts.clone();
        let detalhe = detalhe.clone();
        move |id: String| {
            let mut state = state.clone();
            let toasts = toasts.clone();
            let mut detalhe = detalhe.clone();
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client.remover_catalogo(&id).await {
                    Ok(()) => {
                        state.with_mut(|st| st.catalogo.retain(|item| item.id != id));
                        if detalhe().as_ref() == Some(&id) {
                            detalhe.set(None);
                        }
                        push_toast(toasts.clone(), ToastKind::Info, "Produto removido do catálogo.");
                    }
                    Err(err) => {
                        println!("Failed to remove catalog item {id}: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao remover produto: {err}"),
                        );
                    }
                }
            });
        }
    };

    rsx! {
        section {
            class: "toolbar",
            input {
                class: "input",
                value: busca(),
                oninput: move |evt| busca.set(evt.value().to_string()),
                placeholder: "Buscar por nome ou categoria...",
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| dialog_novo.set(true),
                "+ Novo produto"
            }
        }

        CatalogoTable { rows, on_view, on_remove }

        if dialog_novo() {
            div {
                class: "dialog-backdrop",
                div {
                    class: "dialog",
                    h2 { class: "dialog-title", "Novo produto" }
                    form {
                        onsubmit: on_criar,
                        div { class: "field",
                            label { class: "field-label", "Nome" }
                            input {
                                class: "input",
                                value: form_nome(),
                                oninput: move |evt| form_nome.set(evt.value().to_string()),
                                placeholder: "Bolo de cenoura",
                            }
                        }
                        div { class: "field-row",
                            div { class: "field",
                                label { class: "field-label", "Categoria" }
                                input {
                                    class: "input",
                                    value: form_categoria(),
                                    oninput: move |evt| form_categoria.set(evt.value().to_string()),
                                    placeholder: "Bolos",
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Tempo de preparo (min)" }
                                input {
                                    class: "input",
                                    inputmode: "numeric",
                                    value: form_tempo(),
                                    oninput: move |evt| form_tempo.set(evt.value().to_string()),
                                    placeholder: "90",
                                }
                            }
                        }
                        div { class: "field-row",
                            div { class: "field",
                                label { class: "field-label", "Preço de venda (R$)" }
                                input {
                                    class: "input",
                                    inputmode: "decimal",
                                    value: form_preco(),
                                    oninput: move |evt| form_preco.set(evt.value().to_string()),
                                    placeholder: "45.00",
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Custo de produção (R$)" }
                                input {
                                    class: "input",
                                    inputmode: "decimal",
                                    value: form_custo(),
                                    oninput: move |evt| form_custo.set(evt.value().to_string()),
                                    placeholder: "0.00",
                                }
                            }
                        }
                        div { class: "field",
                            label { class: "field-label", "Descrição" }
                            textarea {
                                class: "textarea",
                                value: form_descricao(),
                                oninput: move |evt| form_descricao.set(evt.value().to_string()),
                                placeholder: "Opcional",
                            }
                        }
                        div { class: "row-actions",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| dialog_novo.set(false),
                                "Cancelar"
                            }
                            button { class: "btn btn-primary", r#type: "submit", "Salvar" }
                        }
                    }
                }
            }
        }

        if let Some(item) = detalhe_item {
            {
                let avaliacao = avaliar_item(&item, &precos);
                let categoria = item.categoria.clone().unwrap_or_else(|| "Sem categoria".to_string());
                rsx! {
                    div {
                        class: "dialog-backdrop",
                        div {
                            class: "dialog",
                            h2 { class: "dialog-title", "{item.nome}" }
                            p { class: "muted", "{categoria}" }
                            if let Some(descricao) = item.descricao.clone() {
                                p { "{descricao}" }
                            }
                            div {
                                class: "resumo-box",
                                div { class: "linha",
                                    span { "Preço de venda" }
                                    span { class: "valor", {format!("R$ {:.2}", item.preco)} }
                                }
                                div { class: "linha",
                                    span { "Custo de produção" }
                                    span { {format!("R$ {:.2}", avaliacao.custo)} }
                                }
                                div { class: "linha",
                                    span { "Margem de lucro" }
                                    span { class: "valor", {format!("{:.1}%", avaliacao.margem)} }
                                }
                            }
                            h3 { class: "card-title", "Receita" }
                            if item.receita.is_empty() {
                                p { class: "empty", "Nenhum insumo vinculado a este produto." }
                            }
                            ul {
                                for linha in item.receita.clone() {
                                    li {
                                        class: "linha",
                                        span { "{linha.insumo_nome}" }
                                        span { class: "muted", {format!("{} {}", linha.quantidade, linha.unidade.sigla())} }
                                    }
                                }
                            }
                            div { class: "row-actions",
                                button {
                                    class: "btn btn-ghost",
                                    onclick: {
                                        let mut detalhe = detalhe.clone();
                                        move |_| detalhe.set(None)
                                    },
                                    "Fechar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
