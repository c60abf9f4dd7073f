// ==========================================
// Dashboard de Ímãs Eólicos - API do dashboard
// ==========================================
// Responsabilidade: montar a carga útil de cada aba a partir do
// dataset imutável, delegando os cálculos à camada de agregação.
// Cada chamada recomputa a visão (gatilho "recompute now" da
// apresentação); não há cache.
// ==========================================

use std::sync::Arc;

use crate::api::dto::{
    AbaView, BarraCiclo, CarreirasView, CartoesResumo, CiclosView, OxidacaoAbaView, ParadasView,
    SerieGrafico, TemporalView, TurbinasView, VisaoGeralView,
};
use crate::domain::types::Aba;
use crate::domain::Dataset;
use crate::engine;

// ===== Tamanhos de recorte das listas "top" =====
pub const TOP_TURBINAS: usize = 10;
pub const TOP_CARREIRAS_IMAS: usize = 15;
pub const TOP_CARREIRAS_TURBINAS: usize = 10;

// ==========================================
// DashboardApi
// ==========================================

/// API de consulta das visões do dashboard.
///
/// Mantém apenas uma referência ao dataset imutável; todas as
/// operações são funções puras sobre ele.
pub struct DashboardApi {
    dataset: Arc<Dataset>,
    tamanho_bloco_heatmap: usize,
}

impl DashboardApi {
    pub fn nova(dataset: Arc<Dataset>) -> Self {
        Self::com_tamanho_de_bloco(dataset, engine::TAMANHO_BLOCO_PADRAO)
    }

    pub fn com_tamanho_de_bloco(dataset: Arc<Dataset>, tamanho_bloco_heatmap: usize) -> Self {
        Self {
            dataset,
            tamanho_bloco_heatmap,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Despacha para a carga útil da aba selecionada.
    pub fn visao(&self, aba: Aba) -> AbaView {
        match aba {
            Aba::VisaoGeral => AbaView::VisaoGeral(self.visao_geral()),
            Aba::Ciclos => AbaView::Ciclos(self.ciclos()),
            Aba::Oxidacao => AbaView::Oxidacao(self.oxidacao()),
            Aba::Turbinas => AbaView::Turbinas(self.turbinas()),
            Aba::Carreiras => AbaView::Carreiras(self.carreiras()),
            Aba::Temporal => AbaView::Temporal(self.temporal()),
            Aba::Paradas => AbaView::Paradas(self.paradas()),
        }
    }

    // ==========================================
    // Visões por aba
    // ==========================================

    /// Cartões de resumo + séries agregadas da página inicial.
    pub fn visao_geral(&self) -> VisaoGeralView {
        let ciclos = engine::projetar_ciclos(&self.dataset.ciclos);
        let resumo = &self.dataset.resumo;

        let cartoes = CartoesResumo {
            total_turbinas: resumo.total_turbinas,
            total_imas_trocados: resumo.total_imas_trocados,
            // Recomputado sobre os ciclos, como no gráfico de pizza.
            total_oxidacao: engine::total_oxidacao(&ciclos),
            maquinas_paradas: resumo.total_maquinas_paradas,
            total_carreiras: resumo.total_carreiras,
            periodo_analise: resumo.periodo_analise.clone(),
            data_ultima_atualizacao: resumo.data_ultima_atualizacao.clone(),
        };

        let imas_por_ciclo: Vec<BarraCiclo> = ciclos
            .iter()
            .map(|c| BarraCiclo {
                ciclo: c.ciclo.clone(),
                imas: c.imas_trocados,
            })
            .collect();

        let distribuicao = if ciclos.is_empty() {
            SerieGrafico::SemDados
        } else {
            SerieGrafico::Dados(engine::distribuicao_oxidacao(&ciclos).to_vec())
        };

        VisaoGeralView {
            cartoes,
            imas_por_ciclo: SerieGrafico::de(imas_por_ciclo),
            oxidacao_por_ciclo: SerieGrafico::de(ciclos),
            distribuicao_oxidacao: distribuicao,
            resumo: resumo.clone(),
        }
    }

    /// Tabela detalhada por ciclo, na ordem fixa de exibição.
    pub fn ciclos(&self) -> CiclosView {
        CiclosView {
            tabela: SerieGrafico::de(engine::projetar_ciclos(&self.dataset.ciclos)),
        }
    }

    pub fn oxidacao(&self) -> OxidacaoAbaView {
        OxidacaoAbaView {
            por_ciclo: SerieGrafico::de(engine::projetar_oxidacao(&self.dataset.oxidacao)),
            variacao_entre_ciclos: SerieGrafico::de(engine::projetar_variacao(
                &self.dataset.variacao_entre_ciclos,
            )),
        }
    }

    /// Rankings de turbinas: top-10 por ímãs e top-10 por dias parados.
    pub fn turbinas(&self) -> TurbinasView {
        let todas = engine::projetar_turbinas(&self.dataset.turbinas);

        let top_imas = engine::top_n_por(&todas, TOP_TURBINAS, |t| t.total_imas_trocados);
        let top_dias_parada =
            engine::top_n_por(&todas, TOP_TURBINAS, |t| t.dias_parada_acumulados);

        TurbinasView {
            top_imas: SerieGrafico::de(top_imas),
            top_dias_parada: SerieGrafico::de(top_dias_parada),
            todas: SerieGrafico::de(todas),
        }
    }

    /// Rankings de carreiras + mapa de calor por blocos.
    pub fn carreiras(&self) -> CarreirasView {
        let vistas = engine::projetar_carreiras(&self.dataset.carreiras);

        let top_imas =
            engine::top_n_por(&vistas, TOP_CARREIRAS_IMAS, |c| c.total_imas_trocados);
        let top_turbinas = engine::top_n_por(&vistas, TOP_CARREIRAS_TURBINAS, |c| {
            c.turbinas_afetadas as f64
        });

        let blocos = engine::calcular_blocos(&self.dataset.carreiras, self.tamanho_bloco_heatmap);
        let blocos_criticos = engine::blocos_criticos(&blocos);

        CarreirasView {
            top_imas: SerieGrafico::de(top_imas),
            top_turbinas_afetadas: SerieGrafico::de(top_turbinas),
            blocos: SerieGrafico::de(blocos),
            blocos_criticos,
        }
    }

    /// Evolução mensal, na ordem cronológica de entrada.
    pub fn temporal(&self) -> TemporalView {
        TemporalView {
            mensal: SerieGrafico::de(engine::projetar_mensal(&self.dataset.mensal)),
        }
    }

    pub fn paradas(&self) -> ParadasView {
        ParadasView {
            eventos: SerieGrafico::de(engine::projetar_paradas(&self.dataset.maquinas_paradas)),
            resumo: self.dataset.resumo_paradas.clone(),
        }
    }
}
