use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit of measure for ingredients. Closed set, matching the backend strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unidade {
    Kg,
    G,
    L,
    Ml,
    #[default]
    Und,
}

impl Unidade {
    pub const TODAS: [Unidade; 5] = [
        Unidade::Kg,
        Unidade::G,
        Unidade::L,
        Unidade::Ml,
        Unidade::Und,
    ];

    pub fn sigla(&self) -> &'static str {
        match self {
            Unidade::Kg => "kg",
            Unidade::G => "g",
            Unidade::L => "l",
            Unidade::Ml => "ml",
            Unidade::Und => "und",
        }
    }

    pub fn parse(raw: &str) -> Unidade {
        match raw.trim().to_ascii_lowercase().as_str() {
            "kg" => Unidade::Kg,
            "g" => Unidade::G,
            "l" => Unidade::L,
            "ml" => Unidade::Ml,
            _ => Unidade::Und,
        }
    }
}

impl fmt::Display for Unidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sigla())
    }
}

/// Identifier assigned by the backend to every persisted document.
pub type InsumoId = String;

/// Raw ingredient / stock item.
#[derive(Clone, Debug, PartialEq)]
pub struct Insumo {
    pub id: InsumoId,
    pub nome: String,
    /// Current stock quantity. Adjustments apply a signed delta and the
    /// backend does not reject negative results.
    pub quantidade: f64,
    pub unidade: Unidade,
    pub valor_unitario: f64,
    pub estoque_minimo: f64,
    pub categoria: String,
}

/// Stock health derived from quantity vs. minimum threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NivelEstoque {
    Esgotado,
    Baixo,
    Ok,
}

impl Insumo {
    pub fn nivel_estoque(&self) -> NivelEstoque {
        if self.quantidade == 0.0 {
            NivelEstoque::Esgotado
        } else if self.quantidade <= self.estoque_minimo {
            NivelEstoque::Baixo
        } else {
            NivelEstoque::Ok
        }
    }
}

/// One line of a product recipe. Owned by exactly one `ItemCatalogo`; the
/// ingredient itself is referenced by id only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceitaLinha {
    pub insumo_id: InsumoId,
    pub insumo_nome: String,
    pub quantidade: f64,
    pub unidade: Unidade,
}

/// Sellable product definition with its recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemCatalogo {
    pub id: String,
    pub nome: String,
    pub descricao: Option<String>,
    /// Sale price (mapped from `precoVenda` on the wire).
    pub preco: f64,
    pub tempo_preparo: Option<u32>,
    pub categoria: Option<String>,
    /// Precomputed production cost. When present it is authoritative and
    /// the recipe-based computation is skipped.
    pub custo_producao: Option<f64>,
    pub receita: Vec<ReceitaLinha>,
}

/// Line item inside an order. `preco_unitario` is a snapshot taken at
/// order-creation time and stays frozen when catalog prices change.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemEncomenda {
    pub catalogo_id: String,
    pub produto_nome: String,
    pub quantidade: u32,
    pub preco_unitario: f64,
}

/// Customer order.
#[derive(Clone, Debug, PartialEq)]
pub struct Encomenda {
    pub id: String,
    pub cliente: String,
    pub telefone: String,
    /// ISO date (`YYYY-MM-DD`).
    pub data_entrega: String,
    pub horario_entrega: String,
    pub status: super::lifecycle::StatusEncomenda,
    pub itens: Vec<ItemEncomenda>,
    pub observacoes: String,
    pub valor_total: f64,
}

/// Aggregate figures from `GET /balanco`, consumed read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Balanco {
    pub receita_total: f64,
    pub pedidos_hoje: u32,
    pub top_produtos: Vec<TopProduto>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopProduto {
    pub produto_id: String,
    pub nome: String,
    pub quantidade_vendida: u32,
    pub receita_gerada: f64,
}

/// Report flavor accepted by `GET /relatorios/gerar`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TipoRelatorio {
    #[default]
    Vendas,
    Produtos,
    Estoque,
}

impl TipoRelatorio {
    pub const TODOS: [TipoRelatorio; 3] = [
        TipoRelatorio::Vendas,
        TipoRelatorio::Produtos,
        TipoRelatorio::Estoque,
    ];

    pub fn query_name(&self) -> &'static str {
        match self {
            TipoRelatorio::Vendas => "vendas",
            TipoRelatorio::Produtos => "produtos",
            TipoRelatorio::Estoque => "estoque",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoRelatorio::Vendas => "Vendas",
            TipoRelatorio::Produtos => "Produtos",
            TipoRelatorio::Estoque => "Estoque",
        }
    }
}

/// Payload of a generated report. The backend fills only the sections that
/// match the requested `tipo`; everything is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relatorio {
    pub receita_total: f64,
    pub custos: f64,
    pub encomendas_total: u32,
    pub encomendas_concluidas: u32,
    pub ticket_medio: f64,
    pub produtos: Vec<TopProduto>,
    pub estoque: Vec<EstoqueCategoria>,
}

impl Relatorio {
    pub fn lucro(&self) -> f64 {
        self.receita_total - self.custos
    }
}

/// Per-category stock summary inside an `estoque` report.
#[derive(Clone, Debug, PartialEq)]
pub struct EstoqueCategoria {
    pub categoria: String,
    pub qtd_itens: u32,
    pub valor_total: f64,
    pub nivel: NivelEstoque,
}
