use dioxus::prelude::*;

use crate::domain::NivelEstoque;
use crate::ui::components::status_badge::NivelBadge;

#[derive(Clone, PartialEq)]
pub struct InsumoRow {
    pub id: String,
    pub nome: String,
    pub categoria: String,
    pub quantidade: f64,
    pub sigla: &'static str,
    pub valor_unitario: f64,
    pub estoque_minimo: f64,
    pub nivel: NivelEstoque,
}

#[component]
pub fn InsumoTable(
    rows: Vec<InsumoRow>,
    on_adjust: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "table-wrap",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Insumo" }
                        th { "Categoria" }
                        th { "Estoque" }
                        th { "Mínimo" }
                        th { "Valor unit." }
                        th { "Nível" }
                        th {}
                    }
                }
                tbody {
                    for row in rows {
                        InsumoRowView {
                            row,
                            on_adjust: on_adjust.clone(),
                            on_remove: on_remove.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "empty",
                                colspan: "7",
                                "Nenhum insumo cadastrado."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct InsumoRowViewProps {
    row: InsumoRow,
    on_adjust: EventHandler<String>,
    on_remove: EventHandler<String>,
}

#[component]
fn InsumoRowView(props: InsumoRowViewProps) -> Element {
    let row = props.row;
    let adjust_id = row.id.clone();
    let remove_id = row.id.clone();
    rsx! {
        tr {
            td { "{row.nome}" }
            td { class: "muted", "{row.categoria}" }
            td { {format!("{} {}", formatar_quantidade(row.quantidade), row.sigla)} }
            td { class: "muted", {format!("{} {}", formatar_quantidade(row.estoque_minimo), row.sigla)} }
            td { {format!("R$ {:.2}", row.valor_unitario)} }
            td { NivelBadge { nivel: row.nivel } }
            td {
                div {
                    class: "row-actions",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| props.on_adjust.call(adjust_id.clone()),
                        "Ajustar"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| props.on_remove.call(remove_id.clone()),
                        "Remover"
                    }
                }
            }
        }
    }
}

fn formatar_quantidade(valor: f64) -> String {
    if valor.fract() == 0.0 {
        format!("{}", valor as i64)
    } else {
        format!("{valor:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::formatar_quantidade;

    #[test]
    fn quantidade_inteira_sem_casas() {
        assert_eq!(formatar_quantidade(12.0), "12");
    }

    #[test]
    fn quantidade_fracionada_com_duas_casas() {
        assert_eq!(formatar_quantidade(1.5), "1.50");
    }
}
