//! Domain logic for the confectionery: entities, costing and order lifecycle.

pub mod app_state;
pub mod costing;
pub mod entities;
pub mod lifecycle;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedPrefs, ThemeSettings};
#[allow(unused_imports)]
pub use costing::{avaliar_item, custo_producao, margem_lucro, preco_lookup, CustoMargem, PrecoLookup};
#[allow(unused_imports)]
pub use entities::{
    Balanco, Encomenda, EstoqueCategoria, Insumo, InsumoId, ItemCatalogo, ItemEncomenda,
    NivelEstoque, ReceitaLinha, Relatorio, TipoRelatorio, TopProduto, Unidade,
};
#[allow(unused_imports)]
pub use lifecycle::StatusEncomenda;
