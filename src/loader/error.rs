// ==========================================
// Dashboard de Ímãs Eólicos - Erros da camada de carga
// ==========================================
// Ferramenta: macro derive do thiserror
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// Erros da fronteira de carga dos documentos.
///
/// Somente defeitos estruturais do documento chegam aqui; campos
/// ausentes dentro de registros válidos são tratados por defaults na
/// normalização e nunca viram erro.
#[derive(Error, Debug)]
pub enum CargaError {
    // ===== Erros de arquivo =====
    #[error("arquivo não encontrado: {0}")]
    ArquivoNaoEncontrado(PathBuf),

    #[error("falha de leitura do arquivo: {0}")]
    FalhaDeLeitura(String),

    // ===== Erros de estrutura do documento =====
    #[error("JSON inválido: {0}")]
    JsonInvalido(String),

    #[error("documento estruturalmente inválido: seção 'resumo' ausente")]
    ResumoAusente,

    // ===== Erros genéricos =====
    #[error("erro interno: {0}")]
    Interno(String),

    #[error(transparent)]
    Outro(#[from] anyhow::Error),
}

impl From<std::io::Error> for CargaError {
    fn from(err: std::io::Error) -> Self {
        CargaError::FalhaDeLeitura(err.to_string())
    }
}

impl From<serde_json::Error> for CargaError {
    fn from(err: serde_json::Error) -> Self {
        CargaError::JsonInvalido(err.to_string())
    }
}

/// Alias de Result para a camada de carga.
pub type CargaResult<T> = Result<T, CargaError>;
