use dioxus::prelude::*;

use crate::{
    domain::{AppState, Unidade},
    infra::api::{ConfeitariaClient, NovoInsumo},
    ui::components::{
        insumo_table::{InsumoRow, InsumoTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn InsumosPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut busca = use_signal(String::new);
    let mut dialog_novo = use_signal(|| false);
    // Id of the insumo currently being adjusted, if any.
    let ajuste_alvo = use_signal(|| None::<String>);
    let mut ajuste_input = use_signal(String::new);

    let mut form_nome = use_signal(String::new);
    let mut form_categoria = use_signal(String::new);
    let mut form_unidade = use_signal(|| Unidade::Und);
    let mut form_estoque = use_signal(String::new);
    let mut form_valor = use_signal(String::new);
    let mut form_minimo = use_signal(String::new);

    let filtro = busca().trim().to_lowercase();
    let rows: Vec<InsumoRow> = state.with(|st| {
        st.insumos
            .iter()
            .filter(|i| {
                filtro.is_empty()
                    || i.nome.to_lowercase().contains(&filtro)
                    || i.categoria.to_lowercase().contains(&filtro)
            })
            .map(|i| InsumoRow {
                id: i.id.clone(),
                nome: i.nome.clone(),
                categoria: i.categoria.clone(),
                quantidade: i.quantidade,
                sigla: i.unidade.sigla(),
                valor_unitario: i.valor_unitario,
                estoque_minimo: i.estoque_minimo,
                nivel: i.nivel_estoque(),
            })
            .collect()
    });

    let alvo_nome = ajuste_alvo().and_then(|id| {
        state.with(|st| {
            st.insumos
                .iter()
                .find(|i| i.id == id)
                .map(|i| (i.nome.clone(), i.unidade.sigla()))
        })
    });

    let on_criar = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let nome = form_nome().trim().to_string();
            if nome.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Informe o nome do insumo.");
                return;
            }
            let payload = NovoInsumo {
                nome,
                unidade: form_unidade(),
                estoque_inicial: form_estoque().trim().parse().ok(),
                categoria: {
                    let c = form_categoria().trim().to_string();
                    (!c.is_empty()).then_some(c)
                },
                valor_unitario: form_valor().trim().parse().ok(),
                estoque_minimo: form_minimo().trim().parse().ok(),
            };

            let mut state = state.clone();
            let toasts = toasts.clone();
            let mut dialog_novo = dialog_novo.clone();
            let mut form_nome = form_nome.clone();
            let mut form_categoria = form_categoria.clone();
            let mut form_estoque = form_estoque.clone();
            let mut form_valor = form_valor.clone();
            let mut form_minimo = form_minimo.clone();
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client.criar_insumo(&payload).await {
                    Ok(insumo) => {
                        let nome = insumo.nome.clone();
                        state.with_mut(|st| st.insumos.push(insumo));
                        dialog_novo.set(false);
                        form_nome.set(String::new());
                        form_categoria.set(String::new());
                        form_estoque.set(String::new());
                        form_valor.set(String::new());
                        form_minimo.set(String::new());
                        push_toast(
                            toasts.clone(),
                            ToastKind::Success,
                            format!("Insumo {nome} cadastrado."),
                        );
                    }
                    Err(err) => {
                        println!("Failed to create insumo: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao cadastrar insumo: {err}"),
                        );
                    }
                }
            });
        }
    };

    let on_ajustar = {
        let state = state.clone();
        let toasts = toasts.clone();
        let ajuste_alvo = ajuste_alvo.clone();
        let ajuste_input = ajuste_input.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(id) = ajuste_alvo() else { return };
            let delta = match ajuste_input().trim().parse::<f64>() {
                Ok(v) if v != 0.0 => v,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Warning,
                        "Informe um ajuste diferente de zero (positivo repõe, negativo consome).",
                    );
                    return;
                }
            };

            let mut state = state.clone();
            let toasts = toasts.clone();
            let mut ajuste_alvo = ajuste_alvo.clone();
            let mut ajuste_input = ajuste_input.clone();
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client.ajustar_estoque(&id, delta).await {
                    Ok(estoque) => {
                        state.with_mut(|st| {
                            if let Some(insumo) = st.insumos.iter_mut().find(|i| i.id == id) {
                                insumo.quantidade = estoque;
                            }
                        });
                        ajuste_alvo.set(None);
                        ajuste_input.set(String::new());
                        push_toast(
                            toasts.clone(),
                            ToastKind::Success,
                            format!("Estoque atualizado para {estoque}."),
                        );
                    }
                    Err(err) => {
                        println!("Failed to adjust stock for {id}: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao ajustar estoque: {err}"),
                        );
                    }
                }
            });
        }
    };

    let on_adjust_open = {
        let mut ajuste_alvo = ajuste_alvo.clone();
        let mut ajuste_input = ajuste_input.clone();
        move |id: String| {
            ajuste_input.set(String::new());
            ajuste_alvo.set(Some(id));
        }
    };

    let on_remove = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            let mut state = state.clone();
            let toasts = toasts.clone();
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client.remover_insumo(&id).await {
                    Ok(()) => {
                        state.with_mut(|st| st.insumos.retain(|i| i.id != id));
                        push_toast(toasts.clone(), ToastKind::Info, "Insumo removido.");
                    }
                    Err(err) => {
                        println!("Failed to remove insumo {id}: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao remover insumo: {err}"),
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
                "+ Novo insumo"
            }
        }

        InsumoTable { rows, on_adjust: on_adjust_open, on_remove }

        if dialog_novo() {
            div {
                class: "dialog-backdrop",
                div {
                    class: "dialog",
                    h2 { class: "dialog-title", "Novo insumo" }
                    form {
                        onsubmit: on_criar,
                        div { class: "field",
                            label { class: "field-label", "Nome" }
                            input {
                                class: "input",
                                value: form_nome(),
                                oninput: move |evt| form_nome.set(evt.value().to_string()),
                                placeholder: "Farinha de trigo",
                            }
                        }
                        div { class: "field-row",
                            div { class: "field",
                                label { class: "field-label", "Categoria" }
                                input {
                                    class: "input",
                                    value: form_categoria(),
                                    oninput: move |evt| form_categoria.set(evt.value().to_string()),
                                    placeholder: "Secos",
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Unidade" }
                                select {
                                    class: "select",
                                    onchange: move |evt| form_unidade.set(Unidade::parse(&evt.value())),
                                    for unidade in Unidade::TODAS {
                                        option {
                                            value: "{unidade}",
                                            selected: form_unidade() == unidade,
                                            "{unidade.sigla()}"
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "field-row",
                            div { class: "field",
                                label { class: "field-label", "Estoque inicial" }
                                input {
                                    class: "input",
                                    inputmode: "decimal",
                                    value: form_estoque(),
                                    oninput: move |evt| form_estoque.set(evt.value().to_string()),
                                    placeholder: "0",
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Estoque mínimo" }
                                input {
                                    class: "input",
                                    inputmode: "decimal",
                                    value: form_minimo(),
                                    oninput: move |evt| form_minimo.set(evt.value().to_string()),
                                    placeholder: "0",
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Valor unitário (R$)" }
                                input {
                                    class: "input",
                                    inputmode: "decimal",
                                    value: form_valor(),
                                    oninput: move |evt| form_valor.set(evt.value().to_string()),
                                    placeholder: "0.00",
                                }
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

        if let Some((nome, sigla)) = alvo_nome {
            div {
                class: "dialog-backdrop",
                div {
                    class: "dialog",
                    h2 { class: "dialog-title", "Ajustar estoque · {nome}" }
                    form {
                        onsubmit: on_ajustar,
                        div { class: "field",
                            label { class: "field-label", "Ajuste ({sigla})" }
                            input {
                                class: "input",
                                inputmode: "decimal",
                                value: ajuste_input(),
                                oninput: move |evt| ajuste_input.set(evt.value().to_string()),
                                placeholder: "ex.: 5 ou -2.5",
                            }
                        }
                        div { class: "row-actions",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: {
                                    let mut ajuste_alvo = ajuste_alvo.clone();
                                    move |_| ajuste_alvo.set(None)
                                },
                                "Cancelar"
                            }
                            button { class: "btn btn-primary", r#type: "submit", "Aplicar" }
                        }
                    }
                }
            }
        }
    }
}
