use dioxus::prelude::*;
use time::{format_description::FormatItem, macros::format_description, Date};

use crate::{
    domain::{AppState, ItemEncomenda, StatusEncomenda},
    infra::api::{ConfeitariaClient, FiltroEncomendas, NovaEncomenda, NovoItemEncomenda},
    ui::components::{
        encomenda_table::{EncomendaRow, EncomendaTable},
        status_badge::StatusBadge,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

const DATA_ISO: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

const MESES: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Case-insensitive search over customer name and order id, so a partial
/// id like "001" finds the order too.
fn corresponde_busca(cliente: &str, id: &str, filtro: &str) -> bool {
    filtro.is_empty()
        || cliente.to_lowercase().contains(filtro)
        || id.to_lowercase().contains(filtro)
}

/// Renders an ISO `YYYY-MM-DD` date as `12 de mar`. Unparseable input is
/// shown as-is so a backend quirk never hides the row.
fn formatar_data(iso: &str) -> String {
    match Date::parse(iso, DATA_ISO) {
        Ok(data) => format!(
            "{} de {}",
            data.day(),
            MESES[data.month() as usize - 1]
        ),
        Err(_) => iso.to_string(),
    }
}

#[component]
pub fn EncomendasPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Shared with the app-level fetcher; changing it refetches from the API.
    let filtro_request = use_context::<Signal<FiltroEncomendas>>();

    let mut busca = use_signal(String::new);
    let mut dialog_nova = use_signal(|| false);
    let detalhe = use_signal(|| None::<String>);

    let mut form_cliente = use_signal(String::new);
    let mut form_telefone = use_signal(String::new);
    let mut form_data = use_signal(String::new);
    let mut form_horario = use_signal(String::new);
    let mut form_observacoes = use_signal(String::new);
    let mut form_produto = use_signal(String::new);
    let mut form_quantidade = use_signal(|| "1".to_string());
    let form_itens = use_signal(Vec::<ItemEncomenda>::new);

    let catalogo = state.with(|st| st.catalogo.clone());

    let filtro = busca().trim().to_lowercase();
    let status_ativo = filtro_request().status;
    let rows: Vec<EncomendaRow> = state.with(|st| {
        st.encomendas
            .iter()
            .filter(|e| corresponde_busca(&e.cliente, &e.id, &filtro))
            .map(|e| EncomendaRow {
                id: e.id.clone(),
                cliente: e.cliente.clone(),
                entrega: if e.horario_entrega.is_empty() {
                    formatar_data(&e.data_entrega)
                } else {
                    format!("{} · {}", formatar_data(&e.data_entrega), e.horario_entrega)
                },
                itens: e.itens.len(),
                valor_total: e.valor_total,
                status: e.status,
            })
            .collect()
    });

    let detalhe_encomenda = detalhe().and_then(|id| {
        state.with(|st| st.encomendas.iter().find(|e| e.id == id).cloned())
    });

    let total_previsto: f64 = form_itens
        .with(|itens| itens.iter().map(|i| i.preco_unitario * i.quantidade as f64).sum());

    let on_add_item = {
        let toasts = toasts.clone();
        let catalogo = catalogo.clone();
        let mut form_itens = form_itens.clone();
        move |_| {
            let id = form_produto();
            let Some(produto) = catalogo.iter().find(|p| p.id == id) else {
                push_toast(toasts.clone(), ToastKind::Warning, "Escolha um produto do catálogo.");
                return;
            };
            let quantidade = match form_quantidade().trim().parse::<u32>() {
                Ok(q) if q > 0 => q,
                _ => {
                    push_toast(toasts.clone(), ToastKind::Warning, "Informe uma quantidade maior que zero.");
                    return;
                }
            };
            form_itens.with_mut(|itens| {
                if let Some(existente) = itens.iter_mut().find(|i| i.catalogo_id == produto.id) {
                    existente.quantidade += quantidade;
                } else {
                    itens.push(ItemEncomenda {
                        catalogo_id: produto.id.clone(),
                        produto_nome: produto.nome.clone(),
                        quantidade,
                        preco_unitario: produto.preco,
                    });
                }
            });
            form_quantidade.set("1".to_string());
        }
    };

    let on_criar = {
        let toasts = toasts.clone();
        let state = state.clone();
        let form_itens = form_itens.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let cliente = form_cliente().trim().to_string();
            if cliente.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Informe o nome do cliente.");
                return;
            }
            let data_entrega = form_data().trim().to_string();
            if data_entrega.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Informe a data de entrega.");
                return;
            }
            if form_itens.with(|itens| itens.is_empty()) {
                push_toast(toasts.clone(), ToastKind::Warning, "Adicione ao menos um item.");
                return;
            }
            let payload = NovaEncomenda {
                cliente,
                telefone: form_telefone().trim().to_string(),
                data_entrega,
                horario_entrega: form_horario().trim().to_string(),
                observacoes: form_observacoes().trim().to_string(),
                itens: form_itens.with(|itens| {
                    itens
                        .iter()
                        .map(|i| NovoItemEncomenda {
                            produto: i.catalogo_id.clone(),
                            quantidade: i.quantidade,
                        })
                        .collect()
                }),
            };

            let mut state = state.clone();
            let toasts = toasts.clone();
            let mut dialog_nova = dialog_nova.clone();
            let mut form_cliente = form_cliente.clone();
            let mut form_telefone = form_telefone.clone();
            let mut form_data = form_data.clone();
            let mut form_horario = form_horario.clone();
            let mut form_observacoes = form_observacoes.clone();
            let mut form_itens = form_itens.clone();
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client.criar_encomenda(&payload).await {
                    Ok(encomenda) => {
                        let cliente = encomenda.cliente.clone();
                        state.with_mut(|st| st.encomendas.push(encomenda));
                        dialog_nova.set(false);
                        form_cliente.set(String::new());
                        form_telefone.set(String::new());
                        form_data.set(String::new());
                        form_horario.set(String::new());
                        form_observacoes.set(String::new());
                        form_itens.set(Vec::new());
                        push_toast(
                            toasts.clone(),
                            ToastKind::Success,
                            format!("Encomenda de {cliente} registrada."),
                        );
                    }
                    Err(err) => {
                        println!("Failed to create encomenda: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao registrar encomenda: {err}"),
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

    let on_advance = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            let Some(proximo) = state.with(|st| {
                st.encomendas
                    .iter()
                    .find(|e| e.id == id)
                    .and_then(|e| e.status.avancar())
            }) else {
                return;
            };

            let mut state = state.clone();
            let toasts = toasts.clone();
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client.atualizar_status(&id, proximo).await {
                    Ok(confirmado) => {
                        state.with_mut(|st| st.definir_status(&id, confirmado));
                        push_toast(
                            toasts.clone(),
                            ToastKind::Success,
                            format!("Encomenda agora está {}.", confirmado.label()),
                        );
                    }
                    Err(err) => {
                        println!("Failed to update status for {id}: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao atualizar status: {err}"),
                        );
                    }
                }
            });
        }
    };

    // Cancelamento é apenas local: o backend não expõe essa transição.
    let on_cancel = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            let mut state = state.clone();
            let cancelada = state.with(|st| {
                st.encomendas
                    .iter()
                    .find(|e| e.id == id)
                    .and_then(|e| e.status.cancelar())
            });
            if let Some(status) = cancelada {
                state.with_mut(|st| st.definir_status(&id, status));
                push_toast(toasts.clone(), ToastKind::Info, "Encomenda cancelada.");
            }
        }
    };

    let chips: Vec<(Option<StatusEncomenda>, &'static str)> = vec![
        (None, "Todas"),
        (Some(StatusEncomenda::Pendente), "Pendentes"),
        (Some(StatusEncomenda::EmProducao), "Em produção"),
        (Some(StatusEncomenda::Pronta), "Prontas"),
        (Some(StatusEncomenda::Entregue), "Entregues"),
        (Some(StatusEncomenda::Cancelada), "Canceladas"),
    ];

    rsx! {
        section {
            class: "toolbar",
            input {
                class: "input",
                value: busca(),
                oninput: move |evt| busca.set(evt.value().to_string()),
                placeholder: "Buscar por cliente...",
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| dialog_nova.set(true),
                "+ Nova encomenda"
            }
        }

        div {
            class: "chip-row",
            for (valor, label) in chips {
                ChipFiltro {
                    active: status_ativo == valor,
                    label,
                    onclick: {
                        let mut filtro_request = filtro_request.clone();
                        move |_| {
                            filtro_request.set(FiltroEncomendas {
                                status: valor,
                                ..Default::default()
                            })
                        }
                    },
                }
            }
        }

        EncomendaTable { rows, on_view, on_advance, on_cancel }

        if dialog_nova() {
            div {
                class: "dialog-backdrop",
                div {
                    class: "dialog",
                    h2 { class: "dialog-title", "Nova encomenda" }
                    form {
                        onsubmit: on_criar,
                        div { class: "field-row",
                            div { class: "field",
                                label { class: "field-label", "Cliente" }
                                input {
                                    class: "input",
                                    value: form_cliente(),
                                    oninput: move |evt| form_cliente.set(evt.value().to_string()),
                                    placeholder: "Maria Silva",
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Telefone" }
                                input {
                                    class: "input",
                                    value: form_telefone(),
                                    oninput: move |evt| form_telefone.set(evt.value().to_string()),
                                    placeholder: "(11) 99999-0000",
                                }
                            }
                        }
                        div { class: "field-row",
                            div { class: "field",
                                label { class: "field-label", "Data de entrega" }
                                input {
                                    class: "input",
                                    r#type: "date",
                                    value: form_data(),
                                    oninput: move |evt| form_data.set(evt.value().to_string()),
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Horário" }
                                input {
                                    class: "input",
                                    r#type: "time",
                                    value: form_horario(),
                                    oninput: move |evt| form_horario.set(evt.value().to_string()),
                                }
                            }
                        }
                        div { class: "field-row",
                            div { class: "field",
                                label { class: "field-label", "Produto" }
                                select {
                                    class: "select",
                                    onchange: move |evt| form_produto.set(evt.value().to_string()),
                                    option { value: "", selected: form_produto().is_empty(), "Selecione..." }
                                    for produto in catalogo.iter() {
                                        option {
                                            value: produto.id.clone(),
                                            selected: form_produto() == produto.id,
                                            {format!("{} (R$ {:.2})", produto.nome, produto.preco)}
                                        }
                                    }
                                }
                            }
                            div { class: "field",
                                label { class: "field-label", "Qtd." }
                                input {
                                    class: "input",
                                    inputmode: "numeric",
                                    value: form_quantidade(),
                                    oninput: move |evt| form_quantidade.set(evt.value().to_string()),
                                }
                            }
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: on_add_item,
                                "+ Item"
                            }
                        }
                        if form_itens.with(|itens| !itens.is_empty()) {
                            div {
                                class: "resumo-box",
                                for item in form_itens() {
                                    div { class: "linha",
                                        span { {format!("{}x {}", item.quantidade, item.produto_nome)} }
                                        span { class: "valor", {format!("R$ {:.2}", item.preco_unitario * item.quantidade as f64)} }
                                    }
                                }
                                div { class: "linha",
                                    span { "Total previsto" }
                                    span { class: "valor", {format!("R$ {total_previsto:.2}")} }
                                }
                            }
                        }
                        div { class: "field",
                            label { class: "field-label", "Observações" }
                            textarea {
                                class: "textarea",
                                value: form_observacoes(),
                                oninput: move |evt| form_observacoes.set(evt.value().to_string()),
                                placeholder: "Sem lactose, entrega na portaria...",
                            }
                        }
                        div { class: "row-actions",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| dialog_nova.set(false),
                                "Cancelar"
                            }
                            button { class: "btn btn-primary", r#type: "submit", "Registrar" }
                        }
                    }
                }
            }
        }

        if let Some(encomenda) = detalhe_encomenda {
            div {
                class: "dialog-backdrop",
                div {
                    class: "dialog",
                    h2 { class: "dialog-title", "Encomenda · {encomenda.cliente}" }
                    div { class: "linha",
                        StatusBadge { status: encomenda.status }
                        span { class: "muted", {format!("{} {}", formatar_data(&encomenda.data_entrega), encomenda.horario_entrega)} }
                    }
                    if !encomenda.telefone.is_empty() {
                        p { class: "muted", "📞 {encomenda.telefone}" }
                    }
                    div {
                        class: "resumo-box",
                        for item in encomenda.itens.clone() {
                            div { class: "linha",
                                span { {format!("{}x {}", item.quantidade, item.produto_nome)} }
                                span { {format!("R$ {:.2}", item.preco_unitario * item.quantidade as f64)} }
                            }
                        }
                        div { class: "linha",
                            span { "Total" }
                            span { class: "valor", {format!("R$ {:.2}", encomenda.valor_total)} }
                        }
                    }
                    if !encomenda.observacoes.is_empty() {
                        p { "{encomenda.observacoes}" }
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

#[component]
fn ChipFiltro(active: bool, label: &'static str, onclick: EventHandler<()>) -> Element {
    let class = if active { "chip active" } else { "chip" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{corresponde_busca, formatar_data};

    #[test]
    fn data_iso_vira_dia_e_mes_abreviado() {
        assert_eq!(formatar_data("2026-03-12"), "12 de mar");
    }

    #[test]
    fn data_invalida_permanece_como_veio() {
        assert_eq!(formatar_data("amanhã"), "amanhã");
    }

    #[test]
    fn busca_encontra_por_cliente_ou_por_id() {
        assert!(corresponde_busca("Maria Silva", "#001", "maria"));
        assert!(corresponde_busca("Maria Silva", "#001", "001"));
        assert!(!corresponde_busca("Maria Silva", "#001", "joão"));
    }

    #[test]
    fn busca_vazia_mantem_todas_as_linhas() {
        assert!(corresponde_busca("Maria Silva", "#001", ""));
    }
}
