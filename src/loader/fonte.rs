// ==========================================
// Dashboard de Ímãs Eólicos - Fonte de dados
// ==========================================
// Porta assíncrona de carga do dataset. A carga resolve exatamente
// uma vez por entrada no portão; cancelar é descartar o future.
// ==========================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Dataset;
use crate::loader::contrato::{DocumentoDashboard, DocumentoParadas};
use crate::loader::error::{CargaError, CargaResult};
use crate::loader::normalizacao::normalizar_dataset;

// ==========================================
// FonteDados - porta de carga
// ==========================================

/// Origem do dataset consolidado do dashboard.
// TODO: trocar a FonteArquivo por uma fonte HTTP quando existir um
// serviço de dados; a assinatura assíncrona já comporta a troca.
#[async_trait]
pub trait FonteDados: Send + Sync {
    async fn carregar(&self) -> CargaResult<Dataset>;
}

// ==========================================
// FonteArquivo - documentos JSON em disco
// ==========================================

/// Fonte baseada nos dois arquivos JSON fixos do contrato de entrada.
///
/// O atraso simulado reproduz a latência de carga do produto original
/// e mantém o fluxo de estados Carregando → Pronto observável.
pub struct FonteArquivo {
    caminho_dashboard: PathBuf,
    caminho_paradas: PathBuf,
    atraso: Duration,
}

impl FonteArquivo {
    pub fn nova(
        caminho_dashboard: impl Into<PathBuf>,
        caminho_paradas: impl Into<PathBuf>,
        atraso: Duration,
    ) -> Self {
        Self {
            caminho_dashboard: caminho_dashboard.into(),
            caminho_paradas: caminho_paradas.into(),
            atraso,
        }
    }

    async fn ler_arquivo(caminho: &Path) -> CargaResult<String> {
        if !caminho.exists() {
            return Err(CargaError::ArquivoNaoEncontrado(caminho.to_path_buf()));
        }
        Ok(tokio::fs::read_to_string(caminho).await?)
    }
}

#[async_trait]
impl FonteDados for FonteArquivo {
    async fn carregar(&self) -> CargaResult<Dataset> {
        if !self.atraso.is_zero() {
            tokio::time::sleep(self.atraso).await;
        }

        tracing::debug!(
            dashboard = %self.caminho_dashboard.display(),
            paradas = %self.caminho_paradas.display(),
            "lendo documentos de entrada"
        );

        let texto_dashboard = Self::ler_arquivo(&self.caminho_dashboard).await?;
        let texto_paradas = Self::ler_arquivo(&self.caminho_paradas).await?;

        let dashboard: DocumentoDashboard = serde_json::from_str(&texto_dashboard)?;
        let paradas: DocumentoParadas = serde_json::from_str(&texto_paradas)?;

        let dataset = normalizar_dataset(dashboard, paradas)?;

        tracing::info!(
            ciclos = dataset.ciclos.len(),
            turbinas = dataset.turbinas.len(),
            carreiras = dataset.carreiras.len(),
            paradas = dataset.maquinas_paradas.len(),
            "dataset carregado e normalizado"
        );

        Ok(dataset)
    }
}

// ==========================================
// FonteMemoria - dataset já montado
// ==========================================

/// Fonte que devolve um dataset pronto; usada em testes e demonstrações.
pub struct FonteMemoria {
    dataset: Dataset,
}

impl FonteMemoria {
    pub fn nova(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl FonteDados for FonteMemoria {
    async fn carregar(&self) -> CargaResult<Dataset> {
        Ok(self.dataset.clone())
    }
}
