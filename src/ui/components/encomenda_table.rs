use dioxus::prelude::*;

use crate::domain::StatusEncomenda;
use crate::ui::components::status_badge::StatusBadge;

#[derive(Clone, PartialEq)]
pub struct EncomendaRow {
    pub id: String,
    pub cliente: String,
    pub entrega: String,
    pub itens: usize,
    pub valor_total: f64,
    pub status: StatusEncomenda,
}

#[component]
pub fn EncomendaTable(
    rows: Vec<EncomendaRow>,
    on_view: EventHandler<String>,
    on_advance: EventHandler<String>,
    on_cancel: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "table-wrap",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Cliente" }
                        th { "Entrega" }
                        th { "Itens" }
                        th { "Total" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for row in rows {
                        EncomendaRowView {
                            row,
                            on_view: on_view.clone(),
                            on_advance: on_advance.clone(),
                            on_cancel: on_cancel.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "empty",
                                colspan: "6",
                                "Nenhuma encomenda encontrada."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EncomendaRowViewProps {
    row: EncomendaRow,
    on_view: EventHandler<String>,
    on_advance: EventHandler<String>,
    on_cancel: EventHandler<String>,
}

#[component]
fn EncomendaRowView(props: EncomendaRowViewProps) -> Element {
    let row = props.row;
    let view_id = row.id.clone();
    let advance_id = row.id.clone();
    let cancel_id = row.id.clone();
    let acao = row.status.acao_avancar();
    let pode_cancelar = row.status.pode_cancelar();
    rsx! {
        tr {
            td { "{row.cliente}" }
            td { class: "muted", "{row.entrega}" }
            td { "{row.itens}" }
            td { class: "valor", {format!("R$ {:.2}", row.valor_total)} }
            td { StatusBadge { status: row.status } }
            td {
                div {
                    class: "row-actions",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| props.on_view.call(view_id.clone()),
                        "Detalhes"
                    }
                    if let Some(label) = acao {
                        button {
                            class: "btn btn-sucesso",
                            onclick: move |_| props.on_advance.call(advance_id.clone()),
                            "{label}"
                        }
                    }
                    if pode_cancelar {
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| props.on_cancel.call(cancel_id.clone()),
                            "Cancelar"
                        }
                    }
                }
            }
        }
    }
}
