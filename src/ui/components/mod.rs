pub mod catalogo_table;
pub mod encomenda_table;
pub mod insumo_table;
pub mod kpi_card;
pub mod status_badge;
pub mod toast;
