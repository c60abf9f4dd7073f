// ==========================================
// Dashboard de Ímãs Eólicos - Camada de domínio
// ==========================================
// Responsabilidade: entidades tipadas e enumerações fixas.
// Restrição: sem I/O, sem lógica de agregação.
// ==========================================

pub mod carreira;
pub mod ciclo;
pub mod dataset;
pub mod mensal;
pub mod parada;
pub mod resumo;
pub mod turbina;
pub mod types;

// Reexporta os tipos centrais
pub use carreira::Carreira;
pub use ciclo::{Ciclo, OxidacaoCiclo, VariacaoCiclo};
pub use dataset::Dataset;
pub use mensal::EvolucaoMensal;
pub use parada::{MaquinaParada, ResumoParadas, FORMATO_DATA_PARADA};
pub use resumo::ResumoGeral;
pub use turbina::Turbina;
pub use types::{Aba, CicloInspecao, NivelIntensidade, NivelRiscoTurbina};
