use dioxus::prelude::*;

use crate::{
    domain::{Relatorio, TipoRelatorio},
    infra::api::ConfeitariaClient,
    ui::components::{
        kpi_card::KpiCard,
        status_badge::NivelBadge,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn RelatoriosPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut tipo = use_signal(|| TipoRelatorio::Vendas);
    let mut inicio = use_signal(String::new);
    let mut fim = use_signal(String::new);
    let relatorio = use_signal(|| None::<Relatorio>);
    let mut gerando = use_signal(|| false);

    let gerar = {
        let toasts = toasts.clone();
        let relatorio = relatorio.clone();
        move |salvar: bool| {
            let periodo_inicio = inicio().trim().to_string();
            let periodo_fim = fim().trim().to_string();
            if periodo_inicio.is_empty() || periodo_fim.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Informe o período do relatório.");
                return;
            }

            let tipo = tipo();
            let toasts = toasts.clone();
            let mut relatorio = relatorio.clone();
            let mut gerando = gerando.clone();
            gerando.set(true);
            spawn(async move {
                let Ok(client) = ConfeitariaClient::new() else {
                    gerando.set(false);
                    push_toast(toasts.clone(), ToastKind::Error, "Falha ao iniciar o cliente da API.");
                    return;
                };
                match client
                    .gerar_relatorio(tipo, &periodo_inicio, &periodo_fim, salvar)
                    .await
                {
                    Ok(dados) => {
                        relatorio.set(Some(dados));
                        if salvar {
                            push_toast(
                                toasts.clone(),
                                ToastKind::Success,
                                "Relatório salvo no servidor.",
                            );
                        }
                    }
                    Err(err) => {
                        println!("Failed to generate report: {err}");
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Erro ao gerar relatório: {err}"),
                        );
                    }
                }
                gerando.set(false);
            });
        }
    };

    let on_gerar = {
        let gerar = gerar.clone();
        move |_| gerar(false)
    };
    let on_exportar = {
        let gerar = gerar.clone();
        move |_| gerar(true)
    };

    let dados = relatorio();
    let tipo_ativo = tipo();

    rsx! {
        section {
            class: "toolbar",
            select {
                class: "select",
                onchange: move |evt| tipo.set(parse_tipo(&evt.value())),
                for opcao in TipoRelatorio::TODOS {
                    option {
                        value: opcao.query_name(),
                        selected: tipo_ativo == opcao,
                        "{opcao.label()}"
                    }
                }
            }
            input {
                class: "input",
                r#type: "date",
                value: inicio(),
                oninput: move |evt| inicio.set(evt.value().to_string()),
            }
            input {
                class: "input",
                r#type: "date",
                value: fim(),
                oninput: move |evt| fim.set(evt.value().to_string()),
            }
            button {
                class: "btn btn-primary",
                disabled: gerando(),
                onclick: on_gerar,
                if gerando() { "Gerando..." } else { "Gerar relatório" }
            }
            button {
                class: "btn btn-ghost",
                disabled: gerando() || dados.is_none(),
                onclick: on_exportar,
                "Exportar"
            }
        }

        if let Some(ref dados) = dados {
            if tipo_ativo == TipoRelatorio::Vendas {
                section {
                    class: "kpi-grid",
                    KpiCard {
                        title: "Receita".to_string(),
                        value: format!("R$ {:.2}", dados.receita_total),
                        hint: None,
                    }
                    KpiCard {
                        title: "Custos".to_string(),
                        value: format!("R$ {:.2}", dados.custos),
                        hint: None,
                    }
                    KpiCard {
                        title: "Lucro".to_string(),
                        value: format!("R$ {:.2}", dados.lucro()),
                        hint: Some("Receita menos custos no período".to_string()),
                    }
                    KpiCard {
                        title: "Ticket médio".to_string(),
                        value: format!("R$ {:.2}", dados.ticket_medio),
                        hint: Some(format!(
                            "{} encomendas, {} concluídas",
                            dados.encomendas_total, dados.encomendas_concluidas
                        )),
                    }
                }
            }

            if tipo_ativo == TipoRelatorio::Produtos && !dados.produtos.is_empty() {
                section {
                    class: "card",
                    h2 { class: "card-title", "Produtos mais vendidos" }
                    {
                        let maior = dados
                            .produtos
                            .iter()
                            .map(|p| p.receita_gerada)
                            .fold(0.0_f64, f64::max)
                            .max(1.0);
                        rsx! {
                            ul {
                                for produto in dados.produtos.clone() {
                                    li {
                                        class: "linha",
                                        span { "{produto.nome}" }
                                        span { class: "muted", {format!("{} un.", produto.quantidade_vendida)} }
                                        div {
                                            class: "barra",
                                            div {
                                                style: format!(
                                                    "width: {:.0}%",
                                                    produto.receita_gerada / maior * 100.0
                                                ),
                                            }
                                        }
                                        span { class: "valor", {format!("R$ {:.2}", produto.receita_gerada)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if tipo_ativo == TipoRelatorio::Estoque && !dados.estoque.is_empty() {
                section {
                    class: "card",
                    h2 { class: "card-title", "Estoque por categoria" }
                    ul {
                        for linha in dados.estoque.clone() {
                            li {
                                class: "linha",
                                span { "{linha.categoria}" }
                                span { class: "muted", {format!("{} itens", linha.qtd_itens)} }
                                span { class: "valor", {format!("R$ {:.2}", linha.valor_total)} }
                                NivelBadge { nivel: linha.nivel }
                            }
                        }
                    }
                }
            }
        } else {
            section {
                class: "card",
                p { class: "empty", "Escolha o tipo e o período e gere um relatório." }
            }
        }
    }
}

fn parse_tipo(raw: &str) -> TipoRelatorio {
    TipoRelatorio::TODOS
        .into_iter()
        .find(|t| t.query_name() == raw)
        .unwrap_or(TipoRelatorio::Vendas)
}

#[cfg(test)]
mod tests {
    use super::parse_tipo;
    use crate::domain::TipoRelatorio;

    #[test]
    fn parse_tipo_reconhece_os_tres_tipos() {
        assert_eq!(parse_tipo("vendas"), TipoRelatorio::Vendas);
        assert_eq!(parse_tipo("produtos"), TipoRelatorio::Produtos);
        assert_eq!(parse_tipo("estoque"), TipoRelatorio::Estoque);
    }

    #[test]
    fn parse_tipo_desconhecido_cai_em_vendas() {
        assert_eq!(parse_tipo("financeiro"), TipoRelatorio::Vendas);
    }
}
