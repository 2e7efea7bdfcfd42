//! Order status state machine.
//!
//! Forward chain: `pendente -> em_producao -> pronta -> entregue`, with an
//! absorbing `cancelada` state reachable from every non-terminal status.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEncomenda {
    #[default]
    Pendente,
    EmProducao,
    Pronta,
    Entregue,
    Cancelada,
}

impl StatusEncomenda {
    pub const TODOS: [StatusEncomenda; 5] = [
        StatusEncomenda::Pendente,
        StatusEncomenda::EmProducao,
        StatusEncomenda::Pronta,
        StatusEncomenda::Entregue,
        StatusEncomenda::Cancelada,
    ];

    /// Wire representation used by `PUT /encomendas/{id}/status` and the
    /// `status` list filter.
    pub fn wire_name(&self) -> &'static str {
        match self {
            StatusEncomenda::Pendente => "pendente",
            StatusEncomenda::EmProducao => "em_producao",
            StatusEncomenda::Pronta => "pronta",
            StatusEncomenda::Entregue => "entregue",
            StatusEncomenda::Cancelada => "cancelada",
        }
    }

    pub fn parse(raw: &str) -> StatusEncomenda {
        match raw {
            "em_producao" => StatusEncomenda::EmProducao,
            "pronta" => StatusEncomenda::Pronta,
            "entregue" => StatusEncomenda::Entregue,
            "cancelada" => StatusEncomenda::Cancelada,
            _ => StatusEncomenda::Pendente,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusEncomenda::Pendente => "Pendente",
            StatusEncomenda::EmProducao => "Em Produção",
            StatusEncomenda::Pronta => "Pronta",
            StatusEncomenda::Entregue => "Entregue",
            StatusEncomenda::Cancelada => "Cancelada",
        }
    }

    /// `entregue` and `cancelada` accept no further transitions.
    pub fn terminal(&self) -> bool {
        matches!(self, StatusEncomenda::Entregue | StatusEncomenda::Cancelada)
    }

    /// Next status in the forward chain, or `None` from a terminal state.
    pub fn avancar(&self) -> Option<StatusEncomenda> {
        match self {
            StatusEncomenda::Pendente => Some(StatusEncomenda::EmProducao),
            StatusEncomenda::EmProducao => Some(StatusEncomenda::Pronta),
            StatusEncomenda::Pronta => Some(StatusEncomenda::Entregue),
            StatusEncomenda::Entregue | StatusEncomenda::Cancelada => None,
        }
    }

    /// Label of the forward action offered by the UI for this status.
    pub fn acao_avancar(&self) -> Option<&'static str> {
        match self {
            StatusEncomenda::Pendente => Some("Iniciar Produção"),
            StatusEncomenda::EmProducao => Some("Marcar como Pronta"),
            StatusEncomenda::Pronta => Some("Marcar como Entregue"),
            StatusEncomenda::Entregue | StatusEncomenda::Cancelada => None,
        }
    }

    pub fn pode_cancelar(&self) -> bool {
        !self.terminal()
    }

    /// Cancels unless already delivered or cancelled.
    pub fn cancelar(&self) -> Option<StatusEncomenda> {
        if self.pode_cancelar() {
            Some(StatusEncomenda::Cancelada)
        } else {
            None
        }
    }

    /// Administrative override. Validity beyond the terminal guard belongs
    /// to the backend; the client only refuses to leave a terminal state.
    pub fn pode_definir(&self, _novo: StatusEncomenda) -> bool {
        !self.terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::StatusEncomenda::*;

    #[test]
    fn cadeia_direta_completa() {
        assert_eq!(Pendente.avancar(), Some(EmProducao));
        assert_eq!(EmProducao.avancar(), Some(Pronta));
        assert_eq!(Pronta.avancar(), Some(Entregue));
    }

    #[test]
    fn estados_terminais_nao_avancam() {
        assert_eq!(Entregue.avancar(), None);
        assert_eq!(Cancelada.avancar(), None);
    }

    #[test]
    fn cancelamento_permitido_apenas_fora_dos_terminais() {
        assert_eq!(Pendente.cancelar(), Some(Cancelada));
        assert_eq!(EmProducao.cancelar(), Some(Cancelada));
        assert_eq!(Pronta.cancelar(), Some(Cancelada));
        assert_eq!(Entregue.cancelar(), None);
        assert_eq!(Cancelada.cancelar(), None);
    }

    #[test]
    fn override_rejeitado_a_partir_de_terminal() {
        assert!(Pendente.pode_definir(Entregue));
        assert!(!Entregue.pode_definir(Pendente));
        assert!(!Cancelada.pode_definir(EmProducao));
    }

    #[test]
    fn nomes_de_fio_fazem_ida_e_volta() {
        for status in super::StatusEncomenda::TODOS {
            assert_eq!(super::StatusEncomenda::parse(status.wire_name()), status);
        }
    }

    #[test]
    fn valor_desconhecido_cai_em_pendente() {
        assert_eq!(super::StatusEncomenda::parse("rascunho"), Pendente);
    }
}
