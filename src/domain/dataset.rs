// ==========================================
// Dashboard de Ímãs Eólicos - Dataset consolidado
// ==========================================
// O conjunto completo de dados do dashboard, já normalizado.
// Imutável após a carga: nenhuma entidade é criada, alterada ou
// destruída fora da fronteira do loader.
// ==========================================

use crate::domain::carreira::Carreira;
use crate::domain::ciclo::{Ciclo, OxidacaoCiclo, VariacaoCiclo};
use crate::domain::mensal::EvolucaoMensal;
use crate::domain::parada::{MaquinaParada, ResumoParadas};
use crate::domain::resumo::ResumoGeral;
use crate::domain::turbina::Turbina;
use serde::{Deserialize, Serialize};

/// Dataset completo do dashboard (ambos os documentos de entrada).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub resumo: ResumoGeral,
    pub ciclos: Vec<Ciclo>,
    pub oxidacao: Vec<OxidacaoCiclo>,
    pub variacao_entre_ciclos: Vec<VariacaoCiclo>,
    pub turbinas: Vec<Turbina>,
    pub carreiras: Vec<Carreira>,
    pub mensal: Vec<EvolucaoMensal>,
    pub maquinas_paradas: Vec<MaquinaParada>,
    pub resumo_paradas: ResumoParadas,
}
