// ==========================================
// Dashboard de Ímãs Eólicos - Entidade Turbina
// ==========================================

use crate::domain::types::NivelRiscoTurbina;
use serde::{Deserialize, Serialize};

// ==========================================
// Turbina - métricas consolidadas por aerogerador
// ==========================================
// MTBF/MTTR e nível de risco são pré-calculados na origem e apenas
// transportados; esta camada nunca os deriva.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turbina {
    pub tag: String,                    // identificador ("N/A" quando ausente)
    pub total_imas_trocados: f64,
    pub total_inspecoes: i32,
    pub primeira_inspecao: String,      // "YYYY-MM-DD" ou "N/A"
    pub ultima_inspecao: String,
    pub dias_parada_acumulados: f64,

    // ===== Confiabilidade (pré-calculada) =====
    pub mtbf_dias: f64,
    pub mttr_dias: f64,

    // ===== Classificação de risco (pré-calculada) =====
    pub nivel_risco: NivelRiscoTurbina,
    pub rotulo_risco: String,           // rótulo original do documento
}
