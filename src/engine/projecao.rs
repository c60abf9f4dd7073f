// ==========================================
// Dashboard de Ímãs Eólicos - Projeções por entidade
// ==========================================
// Funções puras que transformam as entidades do domínio nas formas
// exatas que cada visão consome. Os defaults já foram aplicados na
// fronteira de carga; aqui só há renomeação, recorte de rótulo e a
// ordenação fixa dos ciclos.
// ==========================================

use serde::Serialize;

use crate::domain::types::{CicloInspecao, NivelRiscoTurbina};
use crate::domain::{
    Carreira, Ciclo, EvolucaoMensal, MaquinaParada, OxidacaoCiclo, Turbina, VariacaoCiclo,
};

// ==========================================
// Formas de visão
// ==========================================

/// Linha da tabela/séries por ciclo, já na ordem fixa de exibição.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CicloView {
    pub ciclo: String,             // rótulo sem o sufixo " Ciclo"
    pub imas_trocados: f64,
    pub maquinas_paradas: i32,
    pub dias_parada_medio: f64,
    pub oxidacao_baixa: i32,
    pub oxidacao_media: i32,
    pub oxidacao_alta: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurbinaView {
    pub turbina: String,
    pub total_imas_trocados: f64,
    pub total_inspecoes: i32,
    pub primeira_inspecao: String,
    pub ultima_inspecao: String,
    pub dias_parada_acumulados: f64,
    pub mtbf_dias: f64,
    pub mttr_dias: f64,
    pub nivel_risco: NivelRiscoTurbina,
    pub rotulo_risco: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarreiraView {
    pub carreira: String,
    pub total_imas_trocados: f64,
    pub turbinas_afetadas: i32,
    pub total_intervencoes: i32,
    pub media_imas_por_turbina: f64,   // 0 quando a média não foi informada
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MensalView {
    pub mes_ano: String,
    pub imas_trocados: f64,
    pub turbinas_unicas: i32,
    pub dias_parada_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OxidacaoView {
    pub ciclo: String,
    pub baixa: i32,
    pub media: i32,
    pub alta: i32,
    pub total_registros: i32,
    pub total: i32,
    pub percentual: f64,
}

/// Linha da tabela de máquinas paradas, com datas já formatadas
/// (dd/mm/aaaa ou "N/A").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParadaView {
    pub data_parada: String,
    pub turbina: String,
    pub data_retorno: String,
    pub dias_parada: i32,
    pub ciclo: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariacaoCicloView {
    pub ciclo: String,
    pub baixa: i32,
    pub media: i32,
    pub alta: i32,
    pub troca_spindle: i32,
    pub percentual_oxidacao: f64,
}

// ==========================================
// Projeções
// ==========================================

/// Projeta os ciclos na ordem fixa de exibição.
///
/// A ordenação usa a tabela fixa de CicloInspecao e é estável:
/// registros com a mesma posição (inclusive os não reconhecidos, que
/// vão todos para o final) mantêm a ordem de entrada.
pub fn projetar_ciclos(ciclos: &[Ciclo]) -> Vec<CicloView> {
    let mut ordenados: Vec<&Ciclo> = ciclos.iter().collect();
    ordenados.sort_by_key(|c| CicloInspecao::ordem_do_rotulo(&c.rotulo));

    ordenados
        .into_iter()
        .map(|c| CicloView {
            ciclo: rotulo_curto(&c.rotulo),
            imas_trocados: c.imas_trocados,
            maquinas_paradas: c.maquinas_paradas,
            dias_parada_medio: c.dias_parada_medio,
            oxidacao_baixa: c.oxidacao_baixa,
            oxidacao_media: c.oxidacao_media,
            oxidacao_alta: c.oxidacao_alta,
        })
        .collect()
}

/// Projeção um-para-um das turbinas; a ordenação fica a cargo de cada
/// visão consumidora (top-10 por ímãs, top-10 por dias de parada).
pub fn projetar_turbinas(turbinas: &[Turbina]) -> Vec<TurbinaView> {
    turbinas
        .iter()
        .map(|t| TurbinaView {
            turbina: t.tag.clone(),
            total_imas_trocados: t.total_imas_trocados,
            total_inspecoes: t.total_inspecoes,
            primeira_inspecao: t.primeira_inspecao.clone(),
            ultima_inspecao: t.ultima_inspecao.clone(),
            dias_parada_acumulados: t.dias_parada_acumulados,
            mtbf_dias: t.mtbf_dias,
            mttr_dias: t.mttr_dias,
            nivel_risco: t.nivel_risco,
            rotulo_risco: t.rotulo_risco.clone(),
        })
        .collect()
}

/// Projeção um-para-um das carreiras; média ausente vira 0 na visão.
pub fn projetar_carreiras(carreiras: &[Carreira]) -> Vec<CarreiraView> {
    carreiras
        .iter()
        .map(|c| CarreiraView {
            carreira: c.rotulo.clone(),
            total_imas_trocados: c.total_imas_trocados,
            turbinas_afetadas: c.turbinas_afetadas,
            total_intervencoes: c.total_intervencoes,
            media_imas_por_turbina: c.media_imas_por_turbina.unwrap_or(0.0),
        })
        .collect()
}

/// Preserva a ordem de entrada (assumida cronológica).
pub fn projetar_mensal(meses: &[EvolucaoMensal]) -> Vec<MensalView> {
    meses
        .iter()
        .map(|m| MensalView {
            mes_ano: m.mes_ano.clone(),
            imas_trocados: m.imas_trocados,
            turbinas_unicas: m.turbinas_unicas,
            dias_parada_total: m.dias_parada_total,
        })
        .collect()
}

/// Projeção um-para-um, sem reordenação.
pub fn projetar_oxidacao(registros: &[OxidacaoCiclo]) -> Vec<OxidacaoView> {
    registros
        .iter()
        .map(|o| OxidacaoView {
            ciclo: o.ciclo.clone(),
            baixa: o.baixa,
            media: o.media,
            alta: o.alta,
            total_registros: o.total_registros,
            total: o.total,
            percentual: o.percentual,
        })
        .collect()
}

/// Projeção um-para-um dos eventos de parada (lista sem ordem
/// garantida; nenhuma reordenação é aplicada).
pub fn projetar_paradas(paradas: &[MaquinaParada]) -> Vec<ParadaView> {
    paradas
        .iter()
        .map(|p| ParadaView {
            data_parada: p.data_parada_exibicao(),
            turbina: p.turbina.clone(),
            data_retorno: p.data_retorno_exibicao(),
            dias_parada: p.dias_parada,
            ciclo: p.ciclo.clone(),
            status: p.status.clone(),
        })
        .collect()
}

pub fn projetar_variacao(variacoes: &[VariacaoCiclo]) -> Vec<VariacaoCicloView> {
    variacoes
        .iter()
        .map(|v| VariacaoCicloView {
            ciclo: rotulo_curto(&v.ciclo),
            baixa: v.baixa,
            media: v.media,
            alta: v.alta,
            troca_spindle: v.troca_spindle,
            percentual_oxidacao: v.percentual_oxidacao,
        })
        .collect()
}

/// Remove a primeira ocorrência do sufixo " Ciclo" do rótulo
/// ("Primeiro Ciclo" → "Primeiro"; "Troca de Spindle" fica intacto).
pub fn rotulo_curto(rotulo: &str) -> String {
    rotulo.replacen(" Ciclo", "", 1)
}
