use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CatalogoRow {
    pub id: String,
    pub nome: String,
    pub categoria: Option<String>,
    pub preco: f64,
    pub custo: f64,
    pub margem: f64,
    pub tempo_preparo: Option<u32>,
}

#[component]
pub fn CatalogoTable(
    rows: Vec<CatalogoRow>,
    on_view: EventHandler<String>,
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
                        th { "Produto" }
                        th { "Categoria" }
                        th { "Preço" }
                        th { "Custo" }
                        th { "Margem" }
                        th { "Tempo" }
                        th {}
                    }
                }
                tbody {
                    for row in rows {
                        CatalogoRowView {
                            row,
                            on_view: on_view.clone(),
                            on_remove: on_remove.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "empty",
                                colspan: "7",
                                "Nenhum item no catálogo."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CatalogoRowViewProps {
    row: CatalogoRow,
    on_view: EventHandler<String>,
    on_remove: EventHandler<String>,
}

#[component]
fn CatalogoRowView(props: CatalogoRowViewProps) -> Element {
    let row = props.row;
    let view_id = row.id.clone();
    let remove_id = row.id.clone();
    let categoria = row.categoria.clone().unwrap_or_else(|| "—".to_string());
    let tempo = row
        .tempo_preparo
        .map(|min| format!("{min}min"))
        .unwrap_or_else(|| "—".to_string());
    rsx! {
        tr {
            td { "{row.nome}" }
            td { class: "muted", "{categoria}" }
            td { {format!("R$ {:.2}", row.preco)} }
            td { {format!("R$ {:.2}", row.custo)} }
            td { class: "valor", {format!("{:.1}%", row.margem)} }
            td { class: "muted", "{tempo}" }
            td {
                div {
                    class: "row-actions",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| props.on_view.call(view_id.clone()),
                        "Receita"
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
