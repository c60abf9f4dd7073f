// ==========================================
// Dashboard de Ímãs Eólicos - Erros da camada de API
// ==========================================
// Converte erros das camadas inferiores em mensagens com causa
// explícita para a camada de apresentação.
// ==========================================

use crate::loader::error::CargaError;
use thiserror::Error;

/// Erros expostos à camada de apresentação.
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Estado da aplicação =====
    #[error("dataset ainda não carregado; aguarde a carga ou acione a atualização")]
    DatasetNaoCarregado,

    #[error("carga já em andamento")]
    CargaEmAndamento,

    // ===== Falha de carga (estado de erro visível ao usuário) =====
    #[error("falha na carga dos dados: {0}")]
    Carga(#[from] CargaError),

    // ===== Erros genéricos =====
    #[error("entrada inválida: {0}")]
    EntradaInvalida(String),

    #[error(transparent)]
    Outro(#[from] anyhow::Error),
}

/// Alias de Result para a camada de API.
pub type ApiResult<T> = Result<T, ApiError>;
