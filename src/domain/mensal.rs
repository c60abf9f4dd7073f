// ==========================================
// Dashboard de Ímãs Eólicos - Evolução mensal
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// EvolucaoMensal - consolidação por mês
// ==========================================
// A sequência de entrada já vem em ordem cronológica; nenhuma
// reordenação é aplicada aqui ou nas visões.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolucaoMensal {
    pub mes_ano: String,            // ex.: "2023-05"
    pub imas_trocados: f64,
    pub turbinas_unicas: i32,
    pub dias_parada_total: f64,
}
