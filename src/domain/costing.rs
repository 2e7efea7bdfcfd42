//! Production cost and profit margin for catalog items.

use std::collections::HashMap;

use super::entities::{Insumo, InsumoId, ItemCatalogo};

/// Ingredient-id to unit-price lookup used by the cost computation.
pub type PrecoLookup = HashMap<InsumoId, f64>;

/// Builds the price lookup from the currently loaded ingredients.
pub fn preco_lookup(insumos: &[Insumo]) -> PrecoLookup {
    insumos
        .iter()
        .map(|insumo| (insumo.id.clone(), insumo.valor_unitario))
        .collect()
}

/// Production cost of one unit of `item`.
///
/// A precomputed `custo_producao` is authoritative and returned unchanged.
/// Otherwise the cost is the sum of `unit price x quantity` over the recipe
/// lines; an ingredient id missing from the lookup contributes zero. An
/// empty recipe with no precomputed cost yields 0.
pub fn custo_producao(item: &ItemCatalogo, precos: &PrecoLookup) -> f64 {
    if let Some(custo) = item.custo_producao {
        return custo;
    }

    item.receita
        .iter()
        .map(|linha| precos.get(&linha.insumo_id).copied().unwrap_or(0.0) * linha.quantidade)
        .sum()
}

/// Profit margin as a percentage, rounded to one decimal place.
///
/// A sale price of zero would divide by zero and a negative price is
/// malformed input; both clamp to 0.0 instead of producing a non-finite
/// value.
pub fn margem_lucro(preco: f64, custo: f64) -> f64 {
    if preco <= 0.0 {
        return 0.0;
    }
    let bruta = (preco - custo) / preco * 100.0;
    (bruta * 10.0).round() / 10.0
}

/// Cost and margin of a catalog item, as shown on the catalog cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CustoMargem {
    pub custo: f64,
    pub margem: f64,
}

pub fn avaliar_item(item: &ItemCatalogo, precos: &PrecoLookup) -> CustoMargem {
    let custo = custo_producao(item, precos);
    CustoMargem {
        custo,
        margem: margem_lucro(item.preco, custo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ReceitaLinha, Unidade};

    fn item(preco: f64, custo: Option<f64>, receita: Vec<ReceitaLinha>) -> ItemCatalogo {
        ItemCatalogo {
            id: "cat-1".to_string(),
            nome: "Bolo de Chocolate".to_string(),
            descricao: None,
            preco,
            tempo_preparo: None,
            categoria: Some("Bolos".to_string()),
            custo_producao: custo,
            receita,
        }
    }

    fn linha(insumo_id: &str, quantidade: f64) -> ReceitaLinha {
        ReceitaLinha {
            insumo_id: insumo_id.to_string(),
            insumo_nome: insumo_id.to_string(),
            quantidade,
            unidade: Unidade::Kg,
        }
    }

    fn precos(pares: &[(&str, f64)]) -> PrecoLookup {
        pares
            .iter()
            .map(|(id, preco)| (id.to_string(), *preco))
            .collect()
    }

    #[test]
    fn custo_soma_preco_vezes_quantidade() {
        let lookup = precos(&[("a", 5.5), ("b", 4.2)]);
        let item = item(10.0, None, vec![linha("a", 2.0), linha("b", 0.5)]);
        assert_eq!(custo_producao(&item, &lookup), 5.5 * 2.0 + 4.2 * 0.5);
    }

    #[test]
    fn custo_independe_da_ordem_das_linhas() {
        let lookup = precos(&[("a", 5.5), ("b", 4.2), ("c", 28.0)]);
        let direto = item(0.0, None, vec![linha("a", 1.0), linha("b", 2.0), linha("c", 0.25)]);
        let invertido = item(0.0, None, vec![linha("c", 0.25), linha("b", 2.0), linha("a", 1.0)]);
        assert_eq!(
            custo_producao(&direto, &lookup),
            custo_producao(&invertido, &lookup)
        );
    }

    #[test]
    fn custo_precomputado_vence_mesmo_com_receita() {
        let lookup = precos(&[("a", 5.5)]);
        let item = item(10.0, Some(3.75), vec![linha("a", 100.0)]);
        assert_eq!(custo_producao(&item, &lookup), 3.75);
    }

    #[test]
    fn insumo_desconhecido_contribui_zero() {
        let lookup = precos(&[("a", 5.5)]);
        let item = item(10.0, None, vec![linha("a", 1.0), linha("x", 99.0)]);
        assert_eq!(custo_producao(&item, &lookup), 5.5);
    }

    #[test]
    fn receita_vazia_sem_custo_precomputado_vale_zero() {
        let item = item(10.0, None, Vec::new());
        assert_eq!(custo_producao(&item, &PrecoLookup::new()), 0.0);
    }

    #[test]
    fn margem_arredonda_para_uma_casa() {
        assert_eq!(margem_lucro(120.0, 40.0), 66.7);
    }

    #[test]
    fn margem_zero_quando_preco_igual_ao_custo() {
        assert_eq!(margem_lucro(100.0, 100.0), 0.0);
    }

    #[test]
    fn margem_com_preco_zero_nao_propaga_divisao_por_zero() {
        let margem = margem_lucro(0.0, 35.0);
        assert!(margem.is_finite());
        assert_eq!(margem, 0.0);
    }

    #[test]
    fn margem_com_preco_negativo_fica_em_zero() {
        assert_eq!(margem_lucro(-10.0, 5.0), 0.0);
    }

    #[test]
    fn item_com_receita_unica_e_preco_de_venda() {
        let lookup = precos(&[("a", 5.5)]);
        let item = item(10.0, None, vec![linha("a", 0.5)]);
        let avaliacao = avaliar_item(&item, &lookup);
        assert_eq!(avaliacao.custo, 2.75);
        assert_eq!(avaliacao.margem, 72.5);
    }

    #[test]
    fn lookup_construido_a_partir_dos_insumos() {
        let insumos = vec![Insumo {
            id: "a".to_string(),
            nome: "Farinha de Trigo".to_string(),
            quantidade: 12.0,
            unidade: Unidade::Kg,
            valor_unitario: 5.5,
            estoque_minimo: 2.0,
            categoria: "Farinha".to_string(),
        }];
        let lookup = preco_lookup(&insumos);
        assert_eq!(lookup.get("a"), Some(&5.5));
    }
}
