use serde::{Deserialize, Serialize};

use super::entities::{Balanco, Encomenda, Insumo, ItemCatalogo, NivelEstoque};
use super::lifecycle::StatusEncomenda;

/// Theme and accessibility preferences. Handed to consumers through Dioxus
/// context; nothing reads it from ambient globals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub is_dark: bool,
    pub is_daltonico: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub insumos: Vec<Insumo>,
    pub catalogo: Vec<ItemCatalogo>,
    pub encomendas: Vec<Encomenda>,
    pub balanco: Option<Balanco>,
    pub theme: ThemeSettings,
}

impl AppState {
    pub fn encomendas_ativas(&self) -> usize {
        self.encomendas
            .iter()
            .filter(|encomenda| !encomenda.status.terminal())
            .count()
    }

    pub fn insumos_em_falta(&self) -> Vec<&Insumo> {
        self.insumos
            .iter()
            .filter(|insumo| insumo.nivel_estoque() != NivelEstoque::Ok)
            .collect()
    }

    pub fn encomenda_mut(&mut self, id: &str) -> Option<&mut Encomenda> {
        self.encomendas.iter_mut().find(|e| e.id == id)
    }

    /// Applies a confirmed status change. Terminal states never move again,
    /// even if a stale confirmation arrives late.
    pub fn definir_status(&mut self, id: &str, status: StatusEncomenda) {
        if let Some(encomenda) = self.encomenda_mut(id) {
            if encomenda.status.pode_definir(status) {
                encomenda.status = status;
            }
        }
    }

    pub fn apply_persisted(&mut self, persisted: PersistedPrefs) {
        self.theme = persisted.theme;
    }

    pub fn to_persisted(&self) -> PersistedPrefs {
        PersistedPrefs { theme: self.theme }
    }
}

/// The only thing persisted locally. Business data is remote-owned and
/// rehydrated from the list endpoints at startup.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedPrefs {
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Unidade;

    fn encomenda(id: &str, status: StatusEncomenda) -> Encomenda {
        Encomenda {
            id: id.to_string(),
            cliente: "Maria Silva".to_string(),
            telefone: String::new(),
            data_entrega: "2026-09-01".to_string(),
            horario_entrega: "14:00".to_string(),
            status,
            itens: Vec::new(),
            observacoes: String::new(),
            valor_total: 0.0,
        }
    }

    #[test]
    fn encomendas_ativas_ignora_terminais() {
        let mut state = AppState::default();
        state.encomendas = vec![
            encomenda("1", StatusEncomenda::Pendente),
            encomenda("2", StatusEncomenda::Entregue),
            encomenda("3", StatusEncomenda::Cancelada),
            encomenda("4", StatusEncomenda::Pronta),
        ];
        assert_eq!(state.encomendas_ativas(), 2);
    }

    #[test]
    fn insumos_em_falta_usa_o_nivel_de_estoque() {
        let mut state = AppState::default();
        state.insumos = vec![
            Insumo {
                id: "a".to_string(),
                nome: "Farinha de Trigo".to_string(),
                quantidade: 0.0,
                unidade: Unidade::Kg,
                valor_unitario: 5.5,
                estoque_minimo: 2.0,
                categoria: "Farinha".to_string(),
            },
            Insumo {
                id: "b".to_string(),
                nome: "Açúcar".to_string(),
                quantidade: 10.0,
                unidade: Unidade::Kg,
                valor_unitario: 4.2,
                estoque_minimo: 2.0,
                categoria: "Açúcar".to_string(),
            },
        ];
        let em_falta = state.insumos_em_falta();
        assert_eq!(em_falta.len(), 1);
        assert_eq!(em_falta[0].id, "a");
    }

    #[test]
    fn definir_status_nao_sai_de_estado_terminal() {
        let mut state = AppState::default();
        state.encomendas = vec![encomenda("1", StatusEncomenda::Entregue)];
        state.definir_status("1", StatusEncomenda::Pendente);
        assert_eq!(state.encomendas[0].status, StatusEncomenda::Entregue);

        state.encomendas = vec![encomenda("2", StatusEncomenda::Pronta)];
        state.definir_status("2", StatusEncomenda::Entregue);
        assert_eq!(state.encomendas[0].status, StatusEncomenda::Entregue);
    }

    #[test]
    fn preferencias_fazem_ida_e_volta() {
        let mut state = AppState::default();
        state.theme = ThemeSettings {
            is_dark: true,
            is_daltonico: false,
        };
        let mut restaurado = AppState::default();
        restaurado.apply_persisted(state.to_persisted());
        assert_eq!(restaurado.theme, state.theme);
    }
}
