// ==========================================
// Dashboard de Ímãs Eólicos - Entidade Carreira
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Carreira - posição física de troca de ímãs
// ==========================================
// A média de ímãs por turbina fica como Option: o heatmap precisa
// distinguir "ausente" de "zero" para descartar blocos sem nenhum
// membro válido. As visões projetadas aplicam o default 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carreira {
    pub rotulo: String,                          // ex.: "C-07"
    pub total_imas_trocados: f64,
    pub turbinas_afetadas: i32,
    pub total_intervencoes: i32,
    pub media_imas_por_turbina: Option<f64>,
}

impl Carreira {
    /// Membro válido para o heatmap: possui média informada.
    pub fn media_valida(&self) -> bool {
        self.media_imas_por_turbina.is_some()
    }
}
