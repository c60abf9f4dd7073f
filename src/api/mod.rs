// ==========================================
// Dashboard de Ímãs Eólicos - Camada de API
// ==========================================
// Responsabilidade: interface de consulta consumida pela camada de
// apresentação. Entrega estruturas de dados planas; só aceita da
// apresentação o seletor de aba e o gatilho de recomputar.
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;

pub use dashboard_api::{
    DashboardApi, TOP_CARREIRAS_IMAS, TOP_CARREIRAS_TURBINAS, TOP_TURBINAS,
};
pub use dto::{
    AbaView, BarraCiclo, CarreirasView, CartoesResumo, CiclosView, OxidacaoAbaView, ParadasView,
    SerieGrafico, TemporalView, TurbinasView, VisaoGeralView,
};
pub use error::{ApiError, ApiResult};
