//! Class helpers shared across pages. The palette itself lives in
//! `assets/main.css`; the root class/attribute pair selected here is what
//! flips dark mode and the color-blind-safe status hues.

use crate::domain::{NivelEstoque, StatusEncomenda, ThemeSettings};

/// Class list for the document root.
pub fn root_class(theme: &ThemeSettings) -> &'static str {
    if theme.is_dark {
        "app dark"
    } else {
        "app"
    }
}

/// Value for the `data-daltonico` root attribute; absent when disabled.
pub fn daltonico_attr(theme: &ThemeSettings) -> Option<&'static str> {
    theme.is_daltonico.then_some("true")
}

pub fn status_badge_class(status: StatusEncomenda) -> &'static str {
    match status {
        StatusEncomenda::Pendente => "badge badge-pendente",
        StatusEncomenda::EmProducao => "badge badge-em-producao",
        StatusEncomenda::Pronta => "badge badge-pronta",
        StatusEncomenda::Entregue => "badge badge-entregue",
        StatusEncomenda::Cancelada => "badge badge-cancelada",
    }
}

pub fn nivel_badge_class(nivel: NivelEstoque) -> &'static str {
    match nivel {
        NivelEstoque::Ok => "badge badge-ok",
        NivelEstoque::Baixo => "badge badge-baixo",
        NivelEstoque::Esgotado => "badge badge-critico",
    }
}

pub fn nivel_label(nivel: NivelEstoque) -> &'static str {
    match nivel {
        NivelEstoque::Ok => "OK",
        NivelEstoque::Baixo => "Baixo",
        NivelEstoque::Esgotado => "Esgotado",
    }
}
