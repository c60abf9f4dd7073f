// ==========================================
// Dashboard de Ímãs Eólicos - Camada de aplicação
// ==========================================

pub mod state;

pub use state::{AppState, EstadoCarga};
