//! Thin asynchronous client for the confectionery REST API.
//!
//! One method per endpoint, wire DTOs kept separate from the domain
//! entities. Failures bubble up to the caller; the UI keeps whatever data
//! it already had and shows a toast.

use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    Balanco, Encomenda, EstoqueCategoria, Insumo, ItemCatalogo, ItemEncomenda, NivelEstoque,
    Relatorio, StatusEncomenda, TipoRelatorio, TopProduto, Unidade,
};

const DEFAULT_BASE_URL: &str = "http://localhost:3000/";
const BASE_URL_ENV: &str = "CONFEITARIA_API_URL";
const USER_AGENT: &str = "gestao-confeitaria/0.1.0";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ConfeitariaClient {
    http: Client,
    base_url: Url,
}

impl ConfeitariaClient {
    /// Builds a client against `CONFEITARIA_API_URL`, falling back to the
    /// local development backend.
    pub fn new() -> Result<Self, ApiError> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    // --- Catálogo -------------------------------------------------------

    pub async fn listar_catalogo(&self) -> Result<Vec<ItemCatalogo>, ApiError> {
        let url = self.url("catalogo")?;
        let data: Vec<CatalogoDto> = self.fetch_json(self.http.get(url)).await?;
        Ok(data.into_iter().map(ItemCatalogo::from).collect())
    }

    pub async fn criar_catalogo(&self, payload: &NovoItemCatalogo) -> Result<ItemCatalogo, ApiError> {
        let url = self.url("catalogo")?;
        let data: CatalogoDto = self.fetch_json(self.http.post(url).json(payload)).await?;
        Ok(ItemCatalogo::from(data))
    }

    pub async fn remover_catalogo(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("catalogo/{id}"))?;
        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }

    // --- Insumos --------------------------------------------------------

    pub async fn listar_insumos(&self) -> Result<Vec<Insumo>, ApiError> {
        let url = self.url("insumos")?;
        let data: Vec<InsumoDto> = self.fetch_json(self.http.get(url)).await?;
        Ok(data.into_iter().map(Insumo::from).collect())
    }

    pub async fn criar_insumo(&self, payload: &NovoInsumo) -> Result<Insumo, ApiError> {
        let url = self.url("insumos")?;
        let data: InsumoDto = self.fetch_json(self.http.post(url).json(payload)).await?;
        Ok(Insumo::from(data))
    }

    /// Applies a signed stock delta and returns the resulting absolute
    /// stock as reported by the backend.
    pub async fn ajustar_estoque(&self, id: &str, quantidade: f64) -> Result<f64, ApiError> {
        let url = self.url(&format!("insumos/{id}/estoque"))?;
        let body = AjusteEstoque { quantidade };
        let data: EstoqueDto = self.fetch_json(self.http.patch(url).json(&body)).await?;
        Ok(data.estoque)
    }

    pub async fn remover_insumo(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("insumos/{id}"))?;
        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }

    // --- Encomendas -----------------------------------------------------

    pub async fn listar_encomendas(
        &self,
        filtro: &FiltroEncomendas,
    ) -> Result<Vec<Encomenda>, ApiError> {
        let mut url = self.url("encomendas")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(page) = filtro.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(limit) = filtro.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(status) = filtro.status {
                pairs.append_pair("status", status.wire_name());
            }
        }
        let data: Vec<EncomendaDto> = self.fetch_json(self.http.get(url)).await?;
        Ok(data.into_iter().map(Encomenda::from).collect())
    }

    pub async fn criar_encomenda(&self, payload: &NovaEncomenda) -> Result<Encomenda, ApiError> {
        let url = self.url("encomendas")?;
        let data: EncomendaDto = self.fetch_json(self.http.post(url).json(payload)).await?;
        Ok(Encomenda::from(data))
    }

    /// Persists a status change remotely. The caller only mutates its local
    /// copy after this returns the confirmed status.
    pub async fn atualizar_status(
        &self,
        id: &str,
        status: StatusEncomenda,
    ) -> Result<StatusEncomenda, ApiError> {
        let url = self.url(&format!("encomendas/{id}/status"))?;
        let body = AtualizaStatus {
            status: status.wire_name(),
        };
        let data: StatusDto = self.fetch_json(self.http.put(url).json(&body)).await?;
        Ok(StatusEncomenda::parse(&data.status))
    }

    // --- Relatórios -----------------------------------------------------

    pub async fn balanco(&self) -> Result<Balanco, ApiError> {
        let url = self.url("balanco")?;
        let data: BalancoDto = self.fetch_json(self.http.get(url)).await?;
        Ok(Balanco::from(data))
    }

    pub async fn gerar_relatorio(
        &self,
        tipo: TipoRelatorio,
        inicio: &str,
        fim: &str,
        salvar: bool,
    ) -> Result<Relatorio, ApiError> {
        let mut url = self.url("relatorios/gerar")?;
        url.query_pairs_mut()
            .append_pair("tipo", tipo.query_name())
            .append_pair("inicio", inicio)
            .append_pair("fim", fim)
            .append_pair("salvar", if salvar { "true" } else { "false" });
        let data: RelatorioDto = self.fetch_json(self.http.get(url)).await?;
        Ok(Relatorio::from(data))
    }

    async fn fetch_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

/// Optional paging and status filter for `GET /encomendas`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FiltroEncomendas {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<StatusEncomenda>,
}

// --- Request payloads ---------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoItemCatalogo {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    pub preco_venda: f64,
    pub custo_producao: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_preparo: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoInsumo {
    pub nome: String,
    pub unidade: Unidade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estoque_inicial: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_unitario: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estoque_minimo: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaEncomenda {
    pub cliente: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub telefone: String,
    pub data_entrega: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub horario_entrega: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub observacoes: String,
    pub itens: Vec<NovoItemEncomenda>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoItemEncomenda {
    pub produto: String,
    pub quantidade: u32,
}

#[derive(Debug, Serialize)]
struct AjusteEstoque {
    quantidade: f64,
}

#[derive(Debug, Serialize)]
struct AtualizaStatus {
    status: &'static str,
}

// --- Response DTOs ------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CatalogoDto {
    #[serde(rename = "_id")]
    id: String,
    nome: String,
    #[serde(default)]
    categoria: Option<String>,
    #[serde(default, rename = "precoVenda")]
    preco_venda: Option<f64>,
    #[serde(default, rename = "custoProducao")]
    custo_producao: Option<f64>,
    #[serde(default)]
    descricao: Option<String>,
    #[serde(default, rename = "tempoPreparo")]
    tempo_preparo: Option<u32>,
    #[serde(default)]
    receita: Vec<ReceitaDto>,
}

#[derive(Debug, Deserialize)]
struct ReceitaDto {
    #[serde(rename = "insumoId")]
    insumo_id: String,
    #[serde(default, rename = "insumoNome")]
    insumo_nome: Option<String>,
    #[serde(default)]
    quantidade: f64,
    #[serde(default)]
    unidade: Option<String>,
}

impl From<CatalogoDto> for ItemCatalogo {
    fn from(dto: CatalogoDto) -> Self {
        Self {
            id: dto.id,
            nome: dto.nome,
            descricao: dto.descricao,
            preco: dto.preco_venda.unwrap_or(0.0),
            tempo_preparo: dto.tempo_preparo,
            categoria: dto.categoria,
            custo_producao: dto.custo_producao,
            receita: dto
                .receita
                .into_iter()
                .map(|linha| crate::domain::ReceitaLinha {
                    insumo_id: linha.insumo_id,
                    insumo_nome: linha.insumo_nome.unwrap_or_default(),
                    quantidade: linha.quantidade,
                    unidade: Unidade::parse(linha.unidade.as_deref().unwrap_or("und")),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InsumoDto {
    #[serde(rename = "_id")]
    id: String,
    nome: String,
    #[serde(default)]
    unidade: Option<String>,
    #[serde(default)]
    estoque: f64,
    #[serde(default)]
    categoria: Option<String>,
    #[serde(default, rename = "valorUnitario")]
    valor_unitario: f64,
    #[serde(default, rename = "estoqueMinimo")]
    estoque_minimo: f64,
}

impl From<InsumoDto> for Insumo {
    fn from(dto: InsumoDto) -> Self {
        Self {
            id: dto.id,
            nome: dto.nome,
            quantidade: dto.estoque,
            unidade: Unidade::parse(dto.unidade.as_deref().unwrap_or("und")),
            valor_unitario: dto.valor_unitario,
            estoque_minimo: dto.estoque_minimo,
            categoria: dto.categoria.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EstoqueDto {
    #[serde(rename = "_id")]
    #[allow(dead_code)]
    id: String,
    estoque: f64,
}

#[derive(Debug, Deserialize)]
struct StatusDto {
    #[serde(rename = "_id")]
    #[allow(dead_code)]
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct EncomendaDto {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default, deserialize_with = "cliente_nome")]
    cliente: Option<String>,
    #[serde(default)]
    telefone: Option<String>,
    #[serde(default, rename = "dataEntrega")]
    data_entrega: Option<String>,
    #[serde(default, rename = "horarioEntrega")]
    horario_entrega: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    itens: Vec<ItemEncomendaDto>,
    #[serde(default)]
    observacoes: Option<String>,
    #[serde(default, rename = "valorTotal")]
    valor_total: f64,
    #[serde(default, rename = "createdAt")]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemEncomendaDto {
    produto: String,
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    quantidade: u32,
    #[serde(default, rename = "precoUnitarioSnapshot")]
    preco_unitario_snapshot: f64,
}

impl From<EncomendaDto> for Encomenda {
    fn from(dto: EncomendaDto) -> Self {
        // Documents created before the delivery-date field existed only
        // carry `createdAt`; its date part is the best available fallback.
        let data_entrega = dto
            .data_entrega
            .or_else(|| {
                dto.created_at
                    .as_deref()
                    .map(|raw| raw.chars().take(10).collect())
            })
            .unwrap_or_default();
        Self {
            id: dto.id,
            cliente: dto.cliente.unwrap_or_default(),
            telefone: dto.telefone.unwrap_or_default(),
            data_entrega,
            horario_entrega: dto.horario_entrega.unwrap_or_default(),
            status: StatusEncomenda::parse(dto.status.as_deref().unwrap_or("pendente")),
            itens: dto
                .itens
                .into_iter()
                .map(|item| ItemEncomenda {
                    catalogo_id: item.produto,
                    produto_nome: item.nome.unwrap_or_default(),
                    quantidade: item.quantidade,
                    preco_unitario: item.preco_unitario_snapshot,
                })
                .collect(),
            observacoes: dto.observacoes.unwrap_or_default(),
            valor_total: dto.valor_total,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BalancoDto {
    #[serde(default, rename = "receitaTotal")]
    receita_total: f64,
    #[serde(default, rename = "pedidosHoje")]
    pedidos_hoje: u32,
    #[serde(default, rename = "topProdutos")]
    top_produtos: Vec<TopProdutoDto>,
}

#[derive(Debug, Deserialize)]
struct TopProdutoDto {
    #[serde(rename = "produtoId")]
    produto_id: String,
    nome: String,
    #[serde(default, rename = "quantidadeVendida")]
    quantidade_vendida: u32,
    #[serde(default, rename = "receitaGerada")]
    receita_gerada: f64,
}

impl From<BalancoDto> for Balanco {
    fn from(dto: BalancoDto) -> Self {
        Self {
            receita_total: dto.receita_total,
            pedidos_hoje: dto.pedidos_hoje,
            top_produtos: dto.top_produtos.into_iter().map(TopProduto::from).collect(),
        }
    }
}

impl From<TopProdutoDto> for TopProduto {
    fn from(dto: TopProdutoDto) -> Self {
        Self {
            produto_id: dto.produto_id,
            nome: dto.nome,
            quantidade_vendida: dto.quantidade_vendida,
            receita_gerada: dto.receita_gerada,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelatorioDto {
    #[serde(default, rename = "receitaTotal", alias = "totalVendas")]
    receita_total: f64,
    #[serde(default)]
    custos: f64,
    #[serde(default, rename = "encomendasTotal")]
    encomendas_total: u32,
    #[serde(default, rename = "encomendasConcluidas")]
    encomendas_concluidas: u32,
    #[serde(default, rename = "ticketMedio")]
    ticket_medio: f64,
    #[serde(default, alias = "topProdutos")]
    produtos: Vec<TopProdutoDto>,
    #[serde(default)]
    estoque: Vec<EstoqueCategoriaDto>,
}

#[derive(Debug, Deserialize)]
struct EstoqueCategoriaDto {
    categoria: String,
    #[serde(default, rename = "qtdItens")]
    qtd_itens: u32,
    #[serde(default, rename = "valorTotal")]
    valor_total: f64,
    #[serde(default)]
    status: Option<String>,
}

impl From<RelatorioDto> for Relatorio {
    fn from(dto: RelatorioDto) -> Self {
        Self {
            receita_total: dto.receita_total,
            custos: dto.custos,
            encomendas_total: dto.encomendas_total,
            encomendas_concluidas: dto.encomendas_concluidas,
            ticket_medio: dto.ticket_medio,
            produtos: dto.produtos.into_iter().map(TopProduto::from).collect(),
            estoque: dto
                .estoque
                .into_iter()
                .map(|linha| EstoqueCategoria {
                    categoria: linha.categoria,
                    qtd_itens: linha.qtd_itens,
                    valor_total: linha.valor_total,
                    nivel: match linha.status.as_deref() {
                        Some("critico") => NivelEstoque::Esgotado,
                        Some("baixo") => NivelEstoque::Baixo,
                        _ => NivelEstoque::Ok,
                    },
                })
                .collect(),
        }
    }
}

/// Older documents store `cliente` as a plain string, newer ones as an
/// embedded object with a `nome` field. Accept both.
fn cliente_nome<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ClienteCampo {
        Nome(String),
        Objeto {
            #[serde(default)]
            nome: Option<String>,
        },
    }

    let raw = Option::<ClienteCampo>::deserialize(deserializer)?;
    Ok(raw.and_then(|campo| match campo {
        ClienteCampo::Nome(nome) => Some(nome),
        ClienteCampo::Objeto { nome } => nome,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encomenda_aceita_cliente_como_texto_ou_objeto() {
        let texto: EncomendaDto = serde_json::from_value(serde_json::json!({
            "_id": "e1",
            "cliente": "Maria Silva",
        }))
        .unwrap();
        assert_eq!(texto.cliente.as_deref(), Some("Maria Silva"));

        let objeto: EncomendaDto = serde_json::from_value(serde_json::json!({
            "_id": "e2",
            "cliente": { "nome": "João Santos" },
        }))
        .unwrap();
        assert_eq!(objeto.cliente.as_deref(), Some("João Santos"));
    }

    #[test]
    fn encomenda_sem_data_de_entrega_usa_a_data_de_criacao() {
        let dto: EncomendaDto = serde_json::from_value(serde_json::json!({
            "_id": "e3",
            "cliente": "Ana Costa",
            "createdAt": "2026-08-12T15:04:05.000Z",
        }))
        .unwrap();
        let encomenda = Encomenda::from(dto);
        assert_eq!(encomenda.data_entrega, "2026-08-12");
        assert_eq!(encomenda.status, StatusEncomenda::Pendente);
    }

    #[test]
    fn item_de_catalogo_mapeia_campos_do_fio() {
        let dto: CatalogoDto = serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "nome": "Bolo de Chocolate",
            "precoVenda": 120.0,
            "receita": [
                { "insumoId": "a", "insumoNome": "Farinha", "quantidade": 0.5, "unidade": "kg" }
            ],
        }))
        .unwrap();
        let item = ItemCatalogo::from(dto);
        assert_eq!(item.preco, 120.0);
        assert_eq!(item.custo_producao, None);
        assert_eq!(item.receita.len(), 1);
        assert_eq!(item.receita[0].unidade, Unidade::Kg);
    }

    #[test]
    fn status_desconhecido_do_backend_vira_pendente() {
        let dto: EncomendaDto = serde_json::from_value(serde_json::json!({
            "_id": "e4",
            "status": "arquivada",
        }))
        .unwrap();
        assert_eq!(Encomenda::from(dto).status, StatusEncomenda::Pendente);
    }
}
