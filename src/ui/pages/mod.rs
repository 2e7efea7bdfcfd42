pub mod catalogo;
pub mod dashboard;
pub mod encomendas;
pub mod insumos;
pub mod relatorios;

pub use catalogo::CatalogoPage;
pub use dashboard::DashboardPage;
pub use encomendas::EncomendasPage;
pub use insumos::InsumosPage;
pub use relatorios::RelatoriosPage;
