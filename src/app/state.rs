// ==========================================
// Dashboard de Ímãs Eólicos - Estado da aplicação
// ==========================================
// Responsabilidade: único dono do estado mutável do produto — portão
// de carga, aba ativa, modal e carimbo de atualização. Tudo que as
// visões consomem passa por aqui; não há globals ambientes.
// ==========================================

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::api::dto::AbaView;
use crate::api::error::{ApiError, ApiResult};
use crate::api::DashboardApi;
use crate::domain::types::Aba;
use crate::engine::TAMANHO_BLOCO_PADRAO;
use crate::loader::FonteDados;

// ==========================================
// EstadoCarga - portão de carga único
// ==========================================
// Transição: Carregando → Pronto | Erro. A atualização manual
// reentra no mesmo portão.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstadoCarga {
    Carregando,
    Pronto,
    Erro(String),
}

// ==========================================
// AppState
// ==========================================

/// Estado da aplicação, repassado (nunca ambiente) à apresentação.
pub struct AppState {
    fonte: Arc<dyn FonteDados>,
    estado: EstadoCarga,
    dashboard: Option<DashboardApi>,

    // ===== Estado de interface =====
    aba_ativa: Aba,
    modal_paradas_aberto: bool,
    ultima_atualizacao: Option<NaiveDateTime>,

    tamanho_bloco_heatmap: usize,
}

impl AppState {
    /// Cria o estado inicial (em carga) sobre a fonte de dados.
    pub fn nova(fonte: Arc<dyn FonteDados>) -> Self {
        Self::com_tamanho_de_bloco(fonte, TAMANHO_BLOCO_PADRAO)
    }

    pub fn com_tamanho_de_bloco(fonte: Arc<dyn FonteDados>, tamanho_bloco: usize) -> Self {
        Self {
            fonte,
            estado: EstadoCarga::Carregando,
            dashboard: None,
            aba_ativa: Aba::VisaoGeral,
            modal_paradas_aberto: false,
            ultima_atualizacao: None,
            tamanho_bloco_heatmap: tamanho_bloco,
        }
    }

    // ==========================================
    // Portão de carga
    // ==========================================

    /// Entra no portão de carga: resolve uma única vez em Pronto ou
    /// Erro. Em caso de erro, o estado fica visível para a
    /// apresentação oferecer a recarga manual (nada é re-tentado
    /// automaticamente).
    pub async fn carregar(&mut self) -> ApiResult<()> {
        self.estado = EstadoCarga::Carregando;
        tracing::info!("iniciando carga do dataset");

        match self.fonte.carregar().await {
            Ok(dataset) => {
                self.dashboard = Some(DashboardApi::com_tamanho_de_bloco(
                    Arc::new(dataset),
                    self.tamanho_bloco_heatmap,
                ));
                self.estado = EstadoCarga::Pronto;
                self.ultima_atualizacao = Some(Local::now().naive_local());
                tracing::info!("carga concluída");
                Ok(())
            }
            Err(erro) => {
                tracing::error!(%erro, "falha na carga do dataset");
                self.estado = EstadoCarga::Erro(erro.to_string());
                self.dashboard = None;
                Err(ApiError::Carga(erro))
            }
        }
    }

    /// Atualização manual: reentra no mesmo portão contra a mesma
    /// fonte fixa (os dados não mudam) e recarimba a última
    /// atualização.
    pub async fn atualizar(&mut self) -> ApiResult<()> {
        tracing::info!("atualização manual acionada");
        self.carregar().await
    }

    // ==========================================
    // Consultas
    // ==========================================

    /// Carga útil da aba pedida; recomputada a cada chamada.
    pub fn consultar(&self, aba: Aba) -> ApiResult<AbaView> {
        match (&self.estado, &self.dashboard) {
            (EstadoCarga::Pronto, Some(dashboard)) => Ok(dashboard.visao(aba)),
            _ => Err(ApiError::DatasetNaoCarregado),
        }
    }

    /// Carga útil da aba ativa.
    pub fn consultar_aba_ativa(&self) -> ApiResult<AbaView> {
        self.consultar(self.aba_ativa)
    }

    // ==========================================
    // Estado de interface
    // ==========================================

    pub fn selecionar_aba(&mut self, aba: Aba) {
        self.aba_ativa = aba;
    }

    pub fn abrir_modal_paradas(&mut self) {
        self.modal_paradas_aberto = true;
    }

    pub fn fechar_modal_paradas(&mut self) {
        self.modal_paradas_aberto = false;
    }

    // ==========================================
    // Leitura
    // ==========================================

    pub fn estado(&self) -> &EstadoCarga {
        &self.estado
    }

    pub fn aba_ativa(&self) -> Aba {
        self.aba_ativa
    }

    pub fn modal_paradas_aberto(&self) -> bool {
        self.modal_paradas_aberto
    }

    pub fn ultima_atualizacao(&self) -> Option<NaiveDateTime> {
        self.ultima_atualizacao
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dataset;
    use crate::loader::error::{CargaError, CargaResult};
    use crate::loader::FonteMemoria;
    use async_trait::async_trait;

    struct FonteFalha;

    #[async_trait]
    impl FonteDados for FonteFalha {
        async fn carregar(&self) -> CargaResult<Dataset> {
            Err(CargaError::ResumoAusente)
        }
    }

    #[tokio::test]
    async fn test_portao_de_carga_pronto() {
        let fonte = Arc::new(FonteMemoria::nova(Dataset::default()));
        let mut state = AppState::nova(fonte);

        assert_eq!(*state.estado(), EstadoCarga::Carregando);
        assert!(state.ultima_atualizacao().is_none());

        state.carregar().await.expect("carga deveria concluir");
        assert_eq!(*state.estado(), EstadoCarga::Pronto);
        assert!(state.ultima_atualizacao().is_some());
    }

    #[tokio::test]
    async fn test_portao_de_carga_erro() {
        let mut state = AppState::nova(Arc::new(FonteFalha));

        let resultado = state.carregar().await;
        assert!(resultado.is_err());
        assert!(matches!(state.estado(), EstadoCarga::Erro(_)));

        // Sem dataset, consultar devolve o erro de não carregado.
        assert!(matches!(
            state.consultar(Aba::VisaoGeral),
            Err(ApiError::DatasetNaoCarregado)
        ));
    }

    #[tokio::test]
    async fn test_atualizar_recarimba_sem_alterar_dados() {
        let fonte = Arc::new(FonteMemoria::nova(Dataset::default()));
        let mut state = AppState::nova(fonte);

        state.carregar().await.expect("carga deveria concluir");
        let primeiro_carimbo = state.ultima_atualizacao().expect("carimbo ausente");
        let visao_antes = state.consultar(Aba::Ciclos).expect("consulta falhou");

        state.atualizar().await.expect("atualização deveria concluir");
        let segundo_carimbo = state.ultima_atualizacao().expect("carimbo ausente");
        let visao_depois = state.consultar(Aba::Ciclos).expect("consulta falhou");

        assert!(segundo_carimbo >= primeiro_carimbo);
        assert_eq!(visao_antes, visao_depois);
    }

    #[tokio::test]
    async fn test_estado_de_interface() {
        let fonte = Arc::new(FonteMemoria::nova(Dataset::default()));
        let mut state = AppState::nova(fonte);

        assert_eq!(state.aba_ativa(), Aba::VisaoGeral);
        state.selecionar_aba(Aba::Carreiras);
        assert_eq!(state.aba_ativa(), Aba::Carreiras);

        assert!(!state.modal_paradas_aberto());
        state.abrir_modal_paradas();
        assert!(state.modal_paradas_aberto());
        state.fechar_modal_paradas();
        assert!(!state.modal_paradas_aberto());
    }
}
