// ==========================================
// Dashboard de Análise de Ímãs Eólicos - Entrada principal
// ==========================================
// Consumidor headless da camada de agregação: carrega os documentos
// pelo portão assíncrono e emite a carga útil de cada aba como JSON
// na saída padrão. A renderização em si fica fora deste núcleo.
// ==========================================

use std::process::ExitCode;
use std::sync::Arc;

use dashboard_imas_eolicos::app::{AppState, EstadoCarga};
use dashboard_imas_eolicos::config::AppConfig;
use dashboard_imas_eolicos::domain::types::Aba;
use dashboard_imas_eolicos::loader::FonteArquivo;
use dashboard_imas_eolicos::{i18n, logging};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    i18n::set_locale("pt-BR");

    tracing::info!("==================================================");
    tracing::info!("{}", i18n::t("app.titulo"));
    tracing::info!("Versão do sistema: {}", dashboard_imas_eolicos::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::carregar();
    tracing::info!(
        dashboard = %config.caminho_dashboard.display(),
        paradas = %config.caminho_paradas.display(),
        "documentos de entrada"
    );

    let fonte = Arc::new(FonteArquivo::nova(
        config.caminho_dashboard.clone(),
        config.caminho_paradas.clone(),
        config.atraso_carga,
    ));

    let mut state = AppState::com_tamanho_de_bloco(fonte, config.tamanho_bloco_heatmap);

    if let Err(erro) = state.carregar().await {
        // Estado de erro visível ao usuário; a recarga é manual.
        tracing::error!(%erro, "{}", i18n::t("carga.falha"));
        return ExitCode::FAILURE;
    }

    if let Some(carimbo) = state.ultima_atualizacao() {
        tracing::info!("última atualização: {}", carimbo.format("%d/%m/%Y %H:%M:%S"));
    }

    match emitir_visoes(&state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(erro) => {
            tracing::error!(%erro, "falha ao emitir as visões");
            ExitCode::FAILURE
        }
    }
}

/// Serializa a carga útil de cada aba para a saída padrão.
fn emitir_visoes(state: &AppState) -> anyhow::Result<()> {
    debug_assert_eq!(*state.estado(), EstadoCarga::Pronto);

    for aba in Aba::todas() {
        let visao = state.consultar(aba)?;
        println!("{}", serde_json::to_string_pretty(&visao)?);
    }

    Ok(())
}
