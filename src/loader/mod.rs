// ==========================================
// Dashboard de Ímãs Eólicos - Camada de carga
// ==========================================
// Responsabilidade: fronteira dos documentos de entrada.
// - contrato: espelho fiel das chaves JSON (tudo Option)
// - normalizacao: defaults aplicados uma única vez
// - fonte: porta assíncrona de carga (arquivo / memória)
// ==========================================

pub mod contrato;
pub mod error;
pub mod fonte;
pub mod normalizacao;

pub use error::{CargaError, CargaResult};
pub use fonte::{FonteArquivo, FonteDados, FonteMemoria};
pub use normalizacao::normalizar_dataset;
