// ==========================================
// Dashboard de Ímãs Eólicos - Máquinas paradas
// ==========================================
// Eventos individuais de parada e o resumo de contagens por ciclo
// (segundo documento do contrato de entrada).
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Formato de data usado nos documentos de parada (padrão brasileiro).
pub const FORMATO_DATA_PARADA: &str = "%d/%m/%Y";

// ==========================================
// MaquinaParada - evento de parada
// ==========================================
// Lista sem ordem garantida. Datas ausentes chegam como "N/A" no
// documento e ficam como None aqui; as visões exibem "N/A" de volta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaquinaParada {
    pub data_parada: Option<NaiveDate>,
    pub turbina: String,
    pub data_retorno: Option<NaiveDate>,
    pub dias_parada: i32,
    pub ciclo: String,
    pub status: String,
}

impl MaquinaParada {
    /// Data de parada formatada para exibição (dd/mm/aaaa ou "N/A").
    pub fn data_parada_exibicao(&self) -> String {
        formatar_data(self.data_parada)
    }

    /// Data de retorno formatada para exibição (dd/mm/aaaa ou "N/A").
    pub fn data_retorno_exibicao(&self) -> String {
        formatar_data(self.data_retorno)
    }
}

fn formatar_data(data: Option<NaiveDate>) -> String {
    match data {
        Some(d) => d.format(FORMATO_DATA_PARADA).to_string(),
        None => "N/A".to_string(),
    }
}

// ==========================================
// ResumoParadas - contagens por ciclo
// ==========================================
// Chaves fixas do documento (resumo_por_ciclo).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumoParadas {
    pub primeiro_ciclo: i32,
    pub segundo_ciclo: i32,
    pub terceiro_ciclo: i32,
    pub troca_spindle: i32,
    pub total_geral: i32,
}
