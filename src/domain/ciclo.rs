// ==========================================
// Dashboard de Ímãs Eólicos - Entidades por ciclo
// ==========================================
// Registros consolidados por ciclo de inspeção: trocas de ímãs,
// paradas e contagens de severidade de oxidação.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Ciclo - registro consolidado por ciclo de inspeção
// ==========================================
// Uma linha por ciclo. A ordem de exibição NÃO é a ordem de inserção:
// usa a ordem fixa de CicloInspecao (ver domain::types).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ciclo {
    pub rotulo: String,            // rótulo completo ("Primeiro Ciclo")
    pub maquinas_paradas: i32,     // máquinas paradas no ciclo
    pub imas_trocados: f64,        // ímãs substituídos
    pub dias_parada_medio: f64,    // média de dias parados

    // ===== Severidade de oxidação (contagens por nível) =====
    pub oxidacao_baixa: i32,
    pub oxidacao_media: i32,
    pub oxidacao_alta: i32,
}

impl Ciclo {
    /// Total de registros com oxidação no ciclo.
    pub fn total_oxidacao(&self) -> i64 {
        self.oxidacao_baixa as i64 + self.oxidacao_media as i64 + self.oxidacao_alta as i64
    }
}

// ==========================================
// OxidacaoCiclo - análise de oxidação por ciclo
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OxidacaoCiclo {
    pub ciclo: String,
    pub baixa: i32,
    pub media: i32,
    pub alta: i32,
    pub total_registros: i32,
    pub total: i32,             // baixa + media + alta, já consolidado na origem
    pub percentual: f64,        // % de registros com oxidação
}

// ==========================================
// VariacaoCiclo - comparação de oxidação entre ciclos
// ==========================================
// Série "variacao_entre_ciclos" do bloco oxidacao_temporal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariacaoCiclo {
    pub ciclo: String,
    pub baixa: i32,
    pub media: i32,
    pub alta: i32,
    pub troca_spindle: i32,
    pub total_registros: i32,
    pub total: i32,

    // ===== Percentuais pré-calculados na origem =====
    pub percentual_oxidacao: f64,
    pub percentual_baixa: f64,
    pub percentual_media: f64,
    pub percentual_alta: f64,
}
