// ==========================================
// Dashboard de Análise de Ímãs Eólicos - Biblioteca núcleo
// ==========================================
// Camada de agregação do dashboard: carrega os documentos JSON do
// contrato de entrada e deriva as projeções prontas para exibição
// (listas top-N, séries empilhadas, blocos de heatmap, classificações
// de risco). Apresentação, gráficos e exportação ficam fora daqui.
// ==========================================

// Inicializa o sistema de internacionalização
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de carga - fronteira dos documentos de entrada
pub mod loader;

// Camada de agregação - projeções puras
pub mod engine;

// Camada de API - visões consumidas pela apresentação
pub mod api;

// Camada de aplicação - estado e portão de carga
pub mod app;

// Camada de configuração
pub mod config;

// Sistema de logs
pub mod logging;

// Internacionalização
pub mod i18n;

// ==========================================
// Reexporta os tipos centrais
// ==========================================

// Tipos do domínio
pub use domain::types::{Aba, CicloInspecao, NivelIntensidade, NivelRiscoTurbina};

// Entidades do domínio
pub use domain::{
    Carreira, Ciclo, Dataset, EvolucaoMensal, MaquinaParada, OxidacaoCiclo, ResumoGeral,
    ResumoParadas, Turbina, VariacaoCiclo,
};

// Agregação
pub use engine::{
    blocos_criticos, calcular_blocos, classificar_intensidade, distribuicao_oxidacao,
    projetar_carreiras, projetar_ciclos, projetar_mensal, projetar_oxidacao, projetar_paradas,
    projetar_turbinas, top_n_por, total_oxidacao, BlocoHeatmap,
};

// Carga
pub use loader::{CargaError, FonteArquivo, FonteDados, FonteMemoria};

// API
pub use api::{ApiError, DashboardApi, SerieGrafico};

// Aplicação
pub use app::{AppState, EstadoCarga};

// ==========================================
// Constantes do sistema
// ==========================================

// Versão do sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "Dashboard de Análise de Ímãs Eólicos";

// ==========================================
// Verificação de compilação
// ==========================================
