// ==========================================
// Dashboard de Ímãs Eólicos - DTOs das visões
// ==========================================
// Estruturas de dados planas entregues à camada de apresentação.
// Toda série/tabela cujo conjunto de apoio pode ficar vazio é
// embrulhada em SerieGrafico, com o estado "sem dados" explícito
// (estado normal, não erro).
// ==========================================

use serde::Serialize;

use crate::domain::{ResumoGeral, ResumoParadas};
use crate::engine::{
    BlocoCritico, BlocoHeatmap, CarreiraView, CicloView, FatiaOxidacao, MensalView, OxidacaoView,
    ParadaView, TurbinaView, VariacaoCicloView,
};

// ==========================================
// SerieGrafico - série com estado vazio explícito
// ==========================================

/// Série de um gráfico ou tabela.
///
/// Uma sequência de apoio vazia vira `SemDados` — a apresentação
/// renderiza o aviso de "sem dados" em vez de um gráfico vazio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "estado", content = "itens")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SerieGrafico<T> {
    SemDados,
    Dados(Vec<T>),
}

impl<T> SerieGrafico<T> {
    /// Embrulha a sequência, mapeando vazio para `SemDados`.
    pub fn de(itens: Vec<T>) -> Self {
        if itens.is_empty() {
            SerieGrafico::SemDados
        } else {
            SerieGrafico::Dados(itens)
        }
    }

    pub fn tem_dados(&self) -> bool {
        matches!(self, SerieGrafico::Dados(_))
    }

    /// Itens da série (vazio quando `SemDados`).
    pub fn itens(&self) -> &[T] {
        match self {
            SerieGrafico::SemDados => &[],
            SerieGrafico::Dados(itens) => itens,
        }
    }
}

// ==========================================
// Visão geral
// ==========================================

/// Valores dos cartões de resumo do topo do dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartoesResumo {
    pub total_turbinas: i32,
    pub total_imas_trocados: f64,
    pub total_oxidacao: i64,          // recomputado sobre os ciclos
    pub maquinas_paradas: i32,
    pub total_carreiras: i32,
    pub periodo_analise: String,
    pub data_ultima_atualizacao: String,
}

/// Barra do gráfico de ímãs trocados por ciclo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarraCiclo {
    pub ciclo: String,
    pub imas: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisaoGeralView {
    pub cartoes: CartoesResumo,
    pub imas_por_ciclo: SerieGrafico<BarraCiclo>,
    pub oxidacao_por_ciclo: SerieGrafico<CicloView>,
    pub distribuicao_oxidacao: SerieGrafico<FatiaOxidacao>,
    pub resumo: ResumoGeral,
}

// ==========================================
// Demais abas
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CiclosView {
    pub tabela: SerieGrafico<CicloView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OxidacaoAbaView {
    pub por_ciclo: SerieGrafico<OxidacaoView>,
    pub variacao_entre_ciclos: SerieGrafico<VariacaoCicloView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurbinasView {
    pub top_imas: SerieGrafico<TurbinaView>,
    pub top_dias_parada: SerieGrafico<TurbinaView>,
    pub todas: SerieGrafico<TurbinaView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarreirasView {
    pub top_imas: SerieGrafico<CarreiraView>,
    pub top_turbinas_afetadas: SerieGrafico<CarreiraView>,
    pub blocos: SerieGrafico<BlocoHeatmap>,
    pub blocos_criticos: Vec<BlocoCritico>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalView {
    pub mensal: SerieGrafico<MensalView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParadasView {
    pub eventos: SerieGrafico<ParadaView>,
    pub resumo: ResumoParadas,
}

// ==========================================
// AbaView - carga útil por seletor de aba
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "aba", content = "dados")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbaView {
    VisaoGeral(VisaoGeralView),
    Ciclos(CiclosView),
    Oxidacao(OxidacaoAbaView),
    Turbinas(TurbinasView),
    Carreiras(CarreirasView),
    Temporal(TemporalView),
    Paradas(ParadasView),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serie_vazia_vira_sem_dados() {
        let serie: SerieGrafico<i32> = SerieGrafico::de(Vec::new());
        assert!(!serie.tem_dados());
        assert!(serie.itens().is_empty());
    }

    #[test]
    fn test_serie_com_itens() {
        let serie = SerieGrafico::de(vec![1, 2]);
        assert!(serie.tem_dados());
        assert_eq!(serie.itens(), &[1, 2]);
    }
}
