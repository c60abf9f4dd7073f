// ==========================================
// Dashboard de Ímãs Eólicos - Camada de agregação
// ==========================================
// Responsabilidade: funções puras que derivam as formas de exibição
// a partir do dataset normalizado. Sem estado, sem cache: cada visão
// é recomputada sob demanda (o volume de dados é pequeno e fixo).
// ==========================================

pub mod heatmap;
pub mod oxidacao;
pub mod projecao;
pub mod ranking;

// Reexporta as operações centrais
pub use heatmap::{
    blocos_criticos, calcular_blocos, classificar_intensidade, BlocoCritico, BlocoHeatmap,
    SituacaoBloco, TAMANHO_BLOCO_PADRAO,
};
pub use oxidacao::{distribuicao_oxidacao, total_oxidacao, FatiaOxidacao};
pub use projecao::{
    projetar_carreiras, projetar_ciclos, projetar_mensal, projetar_oxidacao, projetar_paradas,
    projetar_turbinas, projetar_variacao, rotulo_curto, CarreiraView, CicloView, MensalView,
    OxidacaoView, ParadaView, TurbinaView, VariacaoCicloView,
};
pub use ranking::top_n_por;
