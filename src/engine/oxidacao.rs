// ==========================================
// Dashboard de Ímãs Eólicos - Totais de oxidação
// ==========================================
// Somas sobre as contagens de severidade dos ciclos, usadas pelos
// cartões de resumo e pelo gráfico de pizza.
// ==========================================

use serde::Serialize;

use crate::engine::projecao::CicloView;
use crate::i18n;

// ==========================================
// Cores fixas de exibição
// ==========================================
pub mod cores {
    pub const BAIXA: &str = "#22c55e";
    pub const MEDIA: &str = "#f59e0b";
    pub const ALTA: &str = "#ef4444";
    pub const PRIMARIA: &str = "#3b82f6";
}

// ==========================================
// FatiaOxidacao - fatia do gráfico de pizza
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FatiaOxidacao {
    pub nome: String,
    pub valor: i64,
    pub cor: &'static str,
}

// ==========================================
// Operações
// ==========================================

/// Soma baixa + média + alta de todos os registros de ciclo.
pub fn total_oxidacao(ciclos: &[CicloView]) -> i64 {
    ciclos
        .iter()
        .map(|c| c.oxidacao_baixa as i64 + c.oxidacao_media as i64 + c.oxidacao_alta as i64)
        .sum()
}

/// Distribuição de oxidação por nível, com as cores fixas de exibição.
pub fn distribuicao_oxidacao(ciclos: &[CicloView]) -> [FatiaOxidacao; 3] {
    let baixa: i64 = ciclos.iter().map(|c| c.oxidacao_baixa as i64).sum();
    let media: i64 = ciclos.iter().map(|c| c.oxidacao_media as i64).sum();
    let alta: i64 = ciclos.iter().map(|c| c.oxidacao_alta as i64).sum();

    [
        FatiaOxidacao {
            nome: i18n::t("oxidacao.baixa"),
            valor: baixa,
            cor: cores::BAIXA,
        },
        FatiaOxidacao {
            nome: i18n::t("oxidacao.media"),
            valor: media,
            cor: cores::MEDIA,
        },
        FatiaOxidacao {
            nome: i18n::t("oxidacao.alta"),
            valor: alta,
            cor: cores::ALTA,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ciclo(baixa: i32, media: i32, alta: i32) -> CicloView {
        CicloView {
            ciclo: "Primeiro".to_string(),
            imas_trocados: 0.0,
            maquinas_paradas: 0,
            dias_parada_medio: 0.0,
            oxidacao_baixa: baixa,
            oxidacao_media: media,
            oxidacao_alta: alta,
        }
    }

    #[test]
    fn test_total_e_soma_elemento_a_elemento() {
        let ciclos = vec![ciclo(5, 3, 1), ciclo(2, 0, 4)];
        assert_eq!(total_oxidacao(&ciclos), 15);
    }

    #[test]
    fn test_total_de_lista_vazia_e_zero() {
        assert_eq!(total_oxidacao(&[]), 0);
    }

    #[test]
    fn test_distribuicao_com_cores_fixas() {
        let ciclos = vec![ciclo(5, 3, 1), ciclo(2, 0, 4)];
        let fatias = distribuicao_oxidacao(&ciclos);

        assert_eq!(fatias[0].valor, 7);
        assert_eq!(fatias[1].valor, 3);
        assert_eq!(fatias[2].valor, 5);
        assert_eq!(fatias[0].cor, "#22c55e");
        assert_eq!(fatias[1].cor, "#f59e0b");
        assert_eq!(fatias[2].cor, "#ef4444");
    }
}
