// ==========================================
// Dashboard de Ímãs Eólicos - Configuração
// ==========================================
// Resolução: variável de ambiente → diretório de dados do usuário →
// fallback ./assets. Sem persistência própria: a configuração é
// resolvida na inicialização e fica imutável pela sessão.
// ==========================================

use std::path::PathBuf;
use std::time::Duration;

use crate::engine::TAMANHO_BLOCO_PADRAO;

/// Nome dos arquivos fixos do contrato de entrada.
pub const ARQUIVO_DASHBOARD: &str = "dashboard_data.json";
pub const ARQUIVO_PARADAS: &str = "maquinas_paradas.json";

/// Atraso simulado de carga padrão (milissegundos).
const ATRASO_CARGA_PADRAO_MS: u64 = 800;

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub caminho_dashboard: PathBuf,
    pub caminho_paradas: PathBuf,
    pub atraso_carga: Duration,
    pub tamanho_bloco_heatmap: usize,
}

impl AppConfig {
    /// Resolve a configuração do ambiente.
    ///
    /// # Variáveis de ambiente
    /// - `DASHBOARD_IMAS_DADOS`: caminho do documento principal
    /// - `DASHBOARD_IMAS_PARADAS`: caminho do documento de paradas
    /// - `DASHBOARD_IMAS_ATRASO_MS`: atraso simulado de carga
    /// - `DASHBOARD_IMAS_BLOCO`: carreiras por bloco do heatmap
    pub fn carregar() -> Self {
        let caminho_dashboard = caminho_do_documento("DASHBOARD_IMAS_DADOS", ARQUIVO_DASHBOARD);
        let caminho_paradas = caminho_do_documento("DASHBOARD_IMAS_PARADAS", ARQUIVO_PARADAS);

        let atraso_ms = std::env::var("DASHBOARD_IMAS_ATRASO_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(ATRASO_CARGA_PADRAO_MS);

        let tamanho_bloco = std::env::var("DASHBOARD_IMAS_BLOCO")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(TAMANHO_BLOCO_PADRAO);

        Self {
            caminho_dashboard,
            caminho_paradas,
            atraso_carga: Duration::from_millis(atraso_ms),
            tamanho_bloco_heatmap: tamanho_bloco,
        }
    }
}

/// Resolve o caminho de um documento de entrada.
///
/// Ordem: variável de ambiente explícita; depois o diretório de dados
/// do usuário (subpasta própria, separada em desenvolvimento para não
/// poluir os dados de produção); por fim ./assets no diretório atual.
fn caminho_do_documento(variavel: &str, arquivo: &str) -> PathBuf {
    if let Ok(caminho) = std::env::var(variavel) {
        let aparado = caminho.trim();
        if !aparado.is_empty() {
            return PathBuf::from(aparado);
        }
    }

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        let pasta = data_dir.join("dashboard-imas-eolicos-dev");

        #[cfg(not(debug_assertions))]
        let pasta = data_dir.join("dashboard-imas-eolicos");

        let candidato = pasta.join(arquivo);
        if candidato.exists() {
            return candidato;
        }
    }

    PathBuf::from("./assets").join(arquivo)
}
