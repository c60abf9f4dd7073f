// ==========================================
// Dashboard de Ímãs Eólicos - Tipos do domínio
// ==========================================
// Enumerações fixas do produto: ciclos de inspeção,
// níveis de intensidade/risco e o seletor de abas.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Ciclo de Inspeção (Inspection Cycle)
// ==========================================
// Ordem fixa de exibição: Primeiro < Segundo < Terceiro < Quarto
// < Troca de Spindle < Geral < Não Especificado.
// Rótulos desconhecidos ordenam depois de todos os reconhecidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CicloInspecao {
    Primeiro,
    Segundo,
    Terceiro,
    Quarto,
    TrocaSpindle,
    Geral,
    NaoEspecificado,
}

impl CicloInspecao {
    /// Posição na ordem fixa de exibição (1 = primeiro).
    pub fn ordem(&self) -> u8 {
        match self {
            CicloInspecao::Primeiro => 1,
            CicloInspecao::Segundo => 2,
            CicloInspecao::Terceiro => 3,
            CicloInspecao::Quarto => 4,
            CicloInspecao::TrocaSpindle => 5,
            CicloInspecao::Geral => 6,
            CicloInspecao::NaoEspecificado => 7,
        }
    }

    /// Posição de ordenação para um rótulo arbitrário.
    ///
    /// Rótulos não reconhecidos recebem uma posição após todos os
    /// reconhecidos (bucket "pega-tudo" intencional; o loader registra
    /// um aviso por carga para tornar erros de digitação visíveis).
    pub fn ordem_do_rotulo(rotulo: &str) -> u8 {
        match Self::do_rotulo(rotulo) {
            Some(ciclo) => ciclo.ordem(),
            None => u8::MAX,
        }
    }

    /// Interpreta um rótulo de ciclo, com ou sem o sufixo " Ciclo".
    ///
    /// Aceita tanto "Primeiro Ciclo" (forma do documento) quanto
    /// "Primeiro" (forma abreviada usada nos gráficos).
    pub fn do_rotulo(rotulo: &str) -> Option<Self> {
        let base = rotulo.trim();
        let base = base.strip_suffix(" Ciclo").unwrap_or(base);
        match base {
            "Primeiro" => Some(CicloInspecao::Primeiro),
            "Segundo" => Some(CicloInspecao::Segundo),
            "Terceiro" => Some(CicloInspecao::Terceiro),
            "Quarto" => Some(CicloInspecao::Quarto),
            "Troca de Spindle" => Some(CicloInspecao::TrocaSpindle),
            "Geral" => Some(CicloInspecao::Geral),
            "Não Especificado" => Some(CicloInspecao::NaoEspecificado),
            _ => None,
        }
    }

    /// Rótulo completo, como aparece nos documentos de entrada.
    pub fn rotulo(&self) -> &'static str {
        match self {
            CicloInspecao::Primeiro => "Primeiro Ciclo",
            CicloInspecao::Segundo => "Segundo Ciclo",
            CicloInspecao::Terceiro => "Terceiro Ciclo",
            CicloInspecao::Quarto => "Quarto Ciclo",
            CicloInspecao::TrocaSpindle => "Troca de Spindle",
            CicloInspecao::Geral => "Geral",
            CicloInspecao::NaoEspecificado => "Não Especificado",
        }
    }
}

impl fmt::Display for CicloInspecao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rotulo())
    }
}

// ==========================================
// Nível de Intensidade (Heatmap)
// ==========================================
// Limiares estritos: >8 Crítico, >4 Alto, >2 Médio, senão Baixo.
// O valor exatamente no limiar pertence ao balde inferior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NivelIntensidade {
    Baixo,
    Medio,
    Alto,
    Critico,
}

impl NivelIntensidade {
    /// Cor de exibição associada (paleta fixa do heatmap).
    pub fn cor(&self) -> &'static str {
        match self {
            NivelIntensidade::Baixo => "#22c55e",
            NivelIntensidade::Medio => "#eab308",
            NivelIntensidade::Alto => "#f97316",
            NivelIntensidade::Critico => "#ef4444",
        }
    }
}

impl fmt::Display for NivelIntensidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NivelIntensidade::Baixo => write!(f, "BAIXO"),
            NivelIntensidade::Medio => write!(f, "MEDIO"),
            NivelIntensidade::Alto => write!(f, "ALTO"),
            NivelIntensidade::Critico => write!(f, "CRITICO"),
        }
    }
}

// ==========================================
// Nível de Risco da Turbina
// ==========================================
// Campo pré-calculado na origem (nunca derivado aqui); o documento
// carrega rótulos como "🟥 ALTO RISCO". A interpretação é por
// substring para tolerar emoji e variação de acento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NivelRiscoTurbina {
    BaixoRisco,
    MedioRisco,
    AltoRisco,
}

impl NivelRiscoTurbina {
    /// Interpreta o rótulo vindo do documento.
    ///
    /// Campo ausente ou não reconhecido cai no sentinela BaixoRisco.
    pub fn do_rotulo(rotulo: &str) -> Self {
        let maiusculo = rotulo.to_uppercase();
        if maiusculo.contains("ALTO") {
            NivelRiscoTurbina::AltoRisco
        } else if maiusculo.contains("MÉDIO") || maiusculo.contains("MEDIO") {
            NivelRiscoTurbina::MedioRisco
        } else {
            NivelRiscoTurbina::BaixoRisco
        }
    }
}

impl Default for NivelRiscoTurbina {
    fn default() -> Self {
        NivelRiscoTurbina::BaixoRisco
    }
}

impl fmt::Display for NivelRiscoTurbina {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NivelRiscoTurbina::BaixoRisco => write!(f, "BAIXO RISCO"),
            NivelRiscoTurbina::MedioRisco => write!(f, "MÉDIO RISCO"),
            NivelRiscoTurbina::AltoRisco => write!(f, "ALTO RISCO"),
        }
    }
}

// ==========================================
// Aba (View Selector)
// ==========================================
// Conjunto fechado de visões do dashboard; a camada de apresentação
// só envia este seletor e o gatilho de recomputar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aba {
    VisaoGeral,
    Ciclos,
    Oxidacao,
    Turbinas,
    Carreiras,
    Temporal,
    Paradas,
}

impl Aba {
    /// Todas as abas, na ordem de exibição.
    pub fn todas() -> [Aba; 7] {
        [
            Aba::VisaoGeral,
            Aba::Ciclos,
            Aba::Oxidacao,
            Aba::Turbinas,
            Aba::Carreiras,
            Aba::Temporal,
            Aba::Paradas,
        ]
    }
}

impl fmt::Display for Aba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aba::VisaoGeral => write!(f, "VISAO_GERAL"),
            Aba::Ciclos => write!(f, "CICLOS"),
            Aba::Oxidacao => write!(f, "OXIDACAO"),
            Aba::Turbinas => write!(f, "TURBINAS"),
            Aba::Carreiras => write!(f, "CARREIRAS"),
            Aba::Temporal => write!(f, "TEMPORAL"),
            Aba::Paradas => write!(f, "PARADAS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordem_dos_ciclos() {
        assert!(CicloInspecao::Primeiro.ordem() < CicloInspecao::Segundo.ordem());
        assert!(CicloInspecao::Quarto.ordem() < CicloInspecao::TrocaSpindle.ordem());
        assert!(CicloInspecao::Geral.ordem() < CicloInspecao::NaoEspecificado.ordem());
    }

    #[test]
    fn test_rotulo_com_e_sem_sufixo() {
        assert_eq!(
            CicloInspecao::do_rotulo("Primeiro Ciclo"),
            Some(CicloInspecao::Primeiro)
        );
        assert_eq!(
            CicloInspecao::do_rotulo("Primeiro"),
            Some(CicloInspecao::Primeiro)
        );
        assert_eq!(
            CicloInspecao::do_rotulo("Troca de Spindle"),
            Some(CicloInspecao::TrocaSpindle)
        );
    }

    #[test]
    fn test_rotulo_desconhecido_ordena_por_ultimo() {
        assert_eq!(CicloInspecao::ordem_do_rotulo("Ciclo X"), u8::MAX);
        assert!(
            CicloInspecao::ordem_do_rotulo("Não Especificado")
                < CicloInspecao::ordem_do_rotulo("Ciclo X")
        );
    }

    #[test]
    fn test_risco_por_substring() {
        assert_eq!(
            NivelRiscoTurbina::do_rotulo("🟥 ALTO RISCO"),
            NivelRiscoTurbina::AltoRisco
        );
        assert_eq!(
            NivelRiscoTurbina::do_rotulo("🟨 MÉDIO RISCO"),
            NivelRiscoTurbina::MedioRisco
        );
        assert_eq!(
            NivelRiscoTurbina::do_rotulo("medio risco"),
            NivelRiscoTurbina::MedioRisco
        );
        // Sentinela para valores não reconhecidos
        assert_eq!(
            NivelRiscoTurbina::do_rotulo(""),
            NivelRiscoTurbina::BaixoRisco
        );
    }
}
