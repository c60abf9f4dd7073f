// ==========================================
// Dashboard de Ímãs Eólicos - Normalização dos documentos
// ==========================================
// Uma função de default por entidade, aplicada uma única vez na
// fronteira de carga. Regra do produto: campo numérico ausente vira
// 0, tag ausente vira "N/A", risco ausente vira o sentinela de baixo
// risco. Nenhuma visão derivada volta a tratar ausência de campo.
// ==========================================

use chrono::NaiveDate;

use crate::domain::parada::FORMATO_DATA_PARADA;
use crate::domain::types::{CicloInspecao, NivelRiscoTurbina};
use crate::domain::{
    Carreira, Ciclo, Dataset, EvolucaoMensal, MaquinaParada, OxidacaoCiclo, ResumoGeral,
    ResumoParadas, Turbina, VariacaoCiclo,
};
use crate::loader::contrato::{
    CarreiraBruta, CicloBruto, DocumentoDashboard, DocumentoParadas, MensalBruto, OxidacaoBruta,
    ParadaBruta, ResumoBruto, ResumoParadasBruto, TurbinaBruta, VariacaoCicloBruta,
};
use crate::loader::error::{CargaError, CargaResult};

// ==========================================
// Consolidação dos dois documentos
// ==========================================

/// Valida a estrutura dos documentos e monta o Dataset normalizado.
///
/// # Erros
/// - `CargaError::ResumoAusente` quando o documento principal não traz
///   a seção `resumo` (único defeito estrutural em nível de documento).
pub fn normalizar_dataset(
    dashboard: DocumentoDashboard,
    paradas: DocumentoParadas,
) -> CargaResult<Dataset> {
    let resumo_bruto = dashboard.resumo.ok_or(CargaError::ResumoAusente)?;

    let ciclos: Vec<Ciclo> = dashboard.ciclos.into_iter().map(normalizar_ciclo).collect();
    avisar_rotulos_desconhecidos(&ciclos);

    let variacao_entre_ciclos = dashboard
        .oxidacao_temporal
        .map(|t| t.variacao_entre_ciclos)
        .unwrap_or_default()
        .into_iter()
        .map(normalizar_variacao)
        .collect();

    Ok(Dataset {
        resumo: normalizar_resumo(resumo_bruto),
        ciclos,
        oxidacao: dashboard
            .oxidacao
            .into_iter()
            .map(normalizar_oxidacao)
            .collect(),
        variacao_entre_ciclos,
        turbinas: dashboard
            .turbinas
            .into_iter()
            .map(normalizar_turbina)
            .collect(),
        carreiras: dashboard
            .carreiras
            .into_iter()
            .map(normalizar_carreira)
            .collect(),
        mensal: dashboard.mensal.into_iter().map(normalizar_mensal).collect(),
        maquinas_paradas: paradas
            .maquinas_paradas
            .into_iter()
            .map(normalizar_parada)
            .collect(),
        resumo_paradas: normalizar_resumo_paradas(paradas.resumo_por_ciclo),
    })
}

// Rótulos de ciclo fora da tabela fixa caem no bucket "pega-tudo" e
// ordenam por último; o aviso torna erros de digitação do produtor
// visíveis sem derrubar a carga.
fn avisar_rotulos_desconhecidos(ciclos: &[Ciclo]) {
    let desconhecidos: Vec<&str> = ciclos
        .iter()
        .filter(|c| CicloInspecao::do_rotulo(&c.rotulo).is_none())
        .map(|c| c.rotulo.as_str())
        .collect();

    if !desconhecidos.is_empty() {
        tracing::warn!(
            rotulos = ?desconhecidos,
            "ciclos com rótulo não reconhecido; ordenarão após os ciclos conhecidos"
        );
    }
}

// ==========================================
// Defaults por entidade
// ==========================================

pub fn normalizar_resumo(bruto: ResumoBruto) -> ResumoGeral {
    ResumoGeral {
        total_imas_trocados: bruto.total_imas_trocados.unwrap_or(0.0),
        total_turbinas: bruto.total_turbinas.unwrap_or(0),
        total_criticidade: bruto.total_criticidade.unwrap_or(0),
        total_maquinas_paradas: bruto.total_maquinas_paradas.unwrap_or(0),
        total_carreiras: bruto.total_carreiras.unwrap_or(0),
        total_oxidacao_baixa: bruto.total_oxidacao_baixa.unwrap_or(0),
        total_oxidacao_media: bruto.total_oxidacao_media.unwrap_or(0),
        total_oxidacao_alta: bruto.total_oxidacao_alta.unwrap_or(0),
        total_oxidacao: bruto.total_oxidacao.unwrap_or(0),
        periodo_analise: bruto.periodo_analise.unwrap_or_default(),
        data_ultima_atualizacao: bruto.data_ultima_atualizacao.unwrap_or_default(),
        total_registros: bruto.total_registros.unwrap_or(0),
        observacao_oxidacao: bruto.observacao_oxidacao.unwrap_or_default(),
    }
}

pub fn normalizar_ciclo(bruto: CicloBruto) -> Ciclo {
    Ciclo {
        rotulo: bruto.ciclo.unwrap_or_default(),
        maquinas_paradas: bruto.maquinas_paradas.unwrap_or(0),
        imas_trocados: bruto.imas_trocados.unwrap_or(0.0),
        dias_parada_medio: bruto.dias_parada_medio.unwrap_or(0.0),
        oxidacao_baixa: bruto.criticidade_baixa.unwrap_or(0),
        oxidacao_media: bruto.criticidade_media.unwrap_or(0),
        oxidacao_alta: bruto.criticidade_alta.unwrap_or(0),
    }
}

pub fn normalizar_oxidacao(bruto: OxidacaoBruta) -> OxidacaoCiclo {
    OxidacaoCiclo {
        ciclo: bruto.ciclo_inspecao.unwrap_or_default(),
        baixa: bruto.oxidacao_baixa.unwrap_or(0),
        media: bruto.oxidacao_media.unwrap_or(0),
        alta: bruto.oxidacao_alta.unwrap_or(0),
        total_registros: bruto.total_registros.unwrap_or(0),
        total: bruto.total_oxidacao.unwrap_or(0),
        percentual: bruto.percentual_com_oxidacao.unwrap_or(0.0),
    }
}

pub fn normalizar_variacao(bruto: VariacaoCicloBruta) -> VariacaoCiclo {
    VariacaoCiclo {
        ciclo: bruto.ciclo.unwrap_or_default(),
        baixa: bruto.oxidacao_baixa.unwrap_or(0),
        media: bruto.oxidacao_media.unwrap_or(0),
        alta: bruto.oxidacao_alta.unwrap_or(0),
        troca_spindle: bruto.troca_spindle.unwrap_or(0),
        total_registros: bruto.total_registros.unwrap_or(0),
        total: bruto.total_oxidacao.unwrap_or(0),
        percentual_oxidacao: bruto.percentual_oxidacao.unwrap_or(0.0),
        percentual_baixa: bruto.percentual_baixa.unwrap_or(0.0),
        percentual_media: bruto.percentual_media.unwrap_or(0.0),
        percentual_alta: bruto.percentual_alta.unwrap_or(0.0),
    }
}

pub fn normalizar_turbina(bruto: TurbinaBruta) -> Turbina {
    let rotulo_risco = bruto.nivel_risco.unwrap_or_default();

    Turbina {
        tag: bruto.turbina.unwrap_or_else(|| "N/A".to_string()),
        total_imas_trocados: bruto.total_imas_trocados.unwrap_or(0.0),
        total_inspecoes: bruto.total_inspecoes.unwrap_or(0),
        primeira_inspecao: bruto.primeira_inspecao.unwrap_or_else(|| "N/A".to_string()),
        ultima_inspecao: bruto.ultima_inspecao.unwrap_or_else(|| "N/A".to_string()),
        dias_parada_acumulados: bruto.dias_parada_acumulados.unwrap_or(0.0),
        mtbf_dias: bruto.mtbf_dias.unwrap_or(0.0),
        mttr_dias: bruto.mttr_dias.unwrap_or(0.0),
        nivel_risco: NivelRiscoTurbina::do_rotulo(&rotulo_risco),
        rotulo_risco,
    }
}

pub fn normalizar_carreira(bruto: CarreiraBruta) -> Carreira {
    Carreira {
        rotulo: bruto.carreira.unwrap_or_default(),
        total_imas_trocados: bruto.total_imas_trocados.unwrap_or(0.0),
        turbinas_afetadas: bruto.turbinas_afetadas.unwrap_or(0),
        total_intervencoes: bruto.total_intervencoes.unwrap_or(0),
        // Mantida como Option: o heatmap precisa saber se a média foi
        // informada para descartar blocos sem membro válido.
        media_imas_por_turbina: bruto.media_imas_por_turbina,
    }
}

pub fn normalizar_mensal(bruto: MensalBruto) -> EvolucaoMensal {
    EvolucaoMensal {
        mes_ano: bruto.mes_ano.unwrap_or_default(),
        imas_trocados: bruto.imas_trocados.unwrap_or(0.0),
        turbinas_unicas: bruto.turbinas_unicas.unwrap_or(0),
        dias_parada_total: bruto.dias_parada_total.unwrap_or(0.0),
    }
}

pub fn normalizar_parada(bruto: ParadaBruta) -> MaquinaParada {
    MaquinaParada {
        data_parada: interpretar_data(bruto.data_parada.as_deref()),
        turbina: bruto.tag_turbina.unwrap_or_else(|| "N/A".to_string()),
        data_retorno: interpretar_data(bruto.data_retorno.as_deref()),
        dias_parada: bruto.dias_parada.unwrap_or(0),
        ciclo: bruto.ciclo.unwrap_or_default(),
        status: bruto.status.unwrap_or_else(|| "Não Informado".to_string()),
    }
}

pub fn normalizar_resumo_paradas(bruto: Option<ResumoParadasBruto>) -> ResumoParadas {
    match bruto {
        Some(b) => ResumoParadas {
            primeiro_ciclo: b.primeiro_ciclo.unwrap_or(0),
            segundo_ciclo: b.segundo_ciclo.unwrap_or(0),
            terceiro_ciclo: b.terceiro_ciclo.unwrap_or(0),
            troca_spindle: b.troca_spindle.unwrap_or(0),
            total_geral: b.total_geral.unwrap_or(0),
        },
        None => ResumoParadas::default(),
    }
}

// Datas chegam como "dd/mm/aaaa" ou "N/A"; qualquer valor não
// interpretável é tratado como ausente.
fn interpretar_data(valor: Option<&str>) -> Option<NaiveDate> {
    let texto = valor?.trim();
    if texto.is_empty() || texto.eq_ignore_ascii_case("N/A") {
        return None;
    }
    NaiveDate::parse_from_str(texto, FORMATO_DATA_PARADA).ok()
}
