use dioxus::prelude::*;

use crate::{
    domain::{AppState, NivelEstoque},
    ui::components::{kpi_card::KpiCard, status_badge::StatusBadge},
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let balanco = state.with(|st| st.balanco.clone());
    let ativas = state.with(|st| st.encomendas_ativas());
    let catalogo_total = state.with(|st| st.catalogo.len());
    let em_falta: Vec<_> = state.with(|st| {
        st.insumos_em_falta()
            .iter()
            .map(|i| (i.nome.clone(), i.nivel_estoque(), i.quantidade, i.unidade.sigla()))
            .collect()
    });
    let recentes: Vec<_> = state.with(|st| {
        st.encomendas
            .iter()
            .rev()
            .take(5)
            .map(|e| (e.cliente.clone(), e.data_entrega.clone(), e.valor_total, e.status))
            .collect()
    });

    let receita = balanco
        .as_ref()
        .map(|b| format!("R$ {:.2}", b.receita_total))
        .unwrap_or_else(|| "—".to_string());
    let pedidos_hoje = balanco
        .as_ref()
        .map(|b| b.pedidos_hoje.to_string())
        .unwrap_or_else(|| "—".to_string());
    let top_produtos = balanco.map(|b| b.top_produtos).unwrap_or_default();

    rsx! {
        section {
            class: "kpi-grid",
            KpiCard {
                title: "Receita total".to_string(),
                value: receita,
                hint: Some("Somatório das encomendas entregues".to_string()),
            }
            KpiCard {
                title: "Pedidos hoje".to_string(),
                value: pedidos_hoje,
                hint: None,
            }
            KpiCard {
                title: "Encomendas ativas".to_string(),
                value: ativas.to_string(),
                hint: Some("Pendentes, em produção ou prontas".to_string()),
            }
            KpiCard {
                title: "Produtos no catálogo".to_string(),
                value: catalogo_total.to_string(),
                hint: None,
            }
        }

        if !em_falta.is_empty() {
            section {
                class: "card",
                h2 { class: "card-title", "⚠️ Estoque em falta" }
                ul {
                    for (nome, nivel, quantidade, sigla) in em_falta {
                        li {
                            class: "linha",
                            span { "{nome}" }
                            span {
                                class: if nivel == NivelEstoque::Esgotado { "muted badge badge-critico" } else { "muted badge badge-baixo" },
                                {format!("{quantidade} {sigla} restantes")}
                            }
                        }
                    }
                }
            }
        }

        if !top_produtos.is_empty() {
            section {
                class: "card",
                h2 { class: "card-title", "Mais vendidos" }
                ul {
                    for produto in top_produtos {
                        li {
                            class: "linha",
                            span { "{produto.nome}" }
                            span { class: "muted", {format!("{} un.", produto.quantidade_vendida)} }
                            span { class: "valor", {format!("R$ {:.2}", produto.receita_gerada)} }
                        }
                    }
                }
            }
        }

        section {
            class: "card",
            h2 { class: "card-title", "Encomendas recentes" }
            if recentes.is_empty() {
                p { class: "empty", "Nenhuma encomenda registrada." }
            }
            ul {
                for (cliente, entrega, valor, status) in recentes {
                    li {
                        class: "linha",
                        span { "{cliente}" }
                        span { class: "muted", "{entrega}" }
                        span { class: "valor", {format!("R$ {valor:.2}")} }
                        StatusBadge { status }
                    }
                }
            }
        }
    }
}
