// ==========================================
// Dashboard de Ímãs Eólicos - Resumo geral
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ResumoGeral - agregados do complexo eólico
// ==========================================
// Singleton do documento de entrada. A ausência desta seção é o
// único defeito estrutural que invalida a carga inteira.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumoGeral {
    pub total_imas_trocados: f64,
    pub total_turbinas: i32,
    pub total_criticidade: i32,
    pub total_maquinas_paradas: i32,
    pub total_carreiras: i32,

    // ===== Oxidação (última inspeção de cada turbina) =====
    pub total_oxidacao_baixa: i32,
    pub total_oxidacao_media: i32,
    pub total_oxidacao_alta: i32,
    pub total_oxidacao: i32,

    // ===== Metadados =====
    pub periodo_analise: String,           // ex.: "2021-03 a 2024-11"
    pub data_ultima_atualizacao: String,   // carimbada pelo produtor dos dados
    pub total_registros: i32,
    pub observacao_oxidacao: String,
}
