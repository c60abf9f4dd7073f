// ==========================================
// Dashboard de Ímãs Eólicos - Contrato dos documentos de entrada
// ==========================================
// Structs brutas, espelho fiel das chaves dos dois arquivos JSON
// produzidos pelo pipeline de análise (dashboard_data.json e
// maquinas_paradas.json). As chaves são nomes de domínio em
// português e devem casar exatamente.
//
// Todos os campos internos são Option: a ausência de um campo em um
// registro válido nunca é erro (os defaults são aplicados uma única
// vez, na normalização).
// ==========================================

use serde::Deserialize;

// ==========================================
// Documento principal (dashboard_data.json)
// ==========================================
#[derive(Debug, Deserialize)]
pub struct DocumentoDashboard {
    // Obrigatório: a ausência invalida a carga inteira (ver normalização).
    pub resumo: Option<ResumoBruto>,

    #[serde(default)]
    pub ciclos: Vec<CicloBruto>,

    #[serde(default)]
    pub oxidacao: Vec<OxidacaoBruta>,

    #[serde(default)]
    pub turbinas: Vec<TurbinaBruta>,

    #[serde(default)]
    pub carreiras: Vec<CarreiraBruta>,

    #[serde(default)]
    pub mensal: Vec<MensalBruto>,

    pub oxidacao_temporal: Option<OxidacaoTemporalBruta>,
}

#[derive(Debug, Deserialize)]
pub struct ResumoBruto {
    pub total_imas_trocados: Option<f64>,
    pub total_turbinas: Option<i32>,
    pub total_criticidade: Option<i32>,
    pub total_maquinas_paradas: Option<i32>,
    pub total_carreiras: Option<i32>,
    pub total_oxidacao_baixa: Option<i32>,
    pub total_oxidacao_media: Option<i32>,
    pub total_oxidacao_alta: Option<i32>,
    pub total_oxidacao: Option<i32>,
    pub periodo_analise: Option<String>,
    pub data_ultima_atualizacao: Option<String>,
    pub total_registros: Option<i32>,
    pub observacao_oxidacao: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CicloBruto {
    #[serde(rename = "Ciclo")]
    pub ciclo: Option<String>,

    #[serde(rename = "Maquinas_Paradas")]
    pub maquinas_paradas: Option<i32>,

    #[serde(rename = "Imas_Trocados")]
    pub imas_trocados: Option<f64>,

    #[serde(rename = "Criticidade_Baixa")]
    pub criticidade_baixa: Option<i32>,

    #[serde(rename = "Criticidade_Media")]
    pub criticidade_media: Option<i32>,

    #[serde(rename = "Criticidade_Alta")]
    pub criticidade_alta: Option<i32>,

    #[serde(rename = "Dias_Parada_Medio")]
    pub dias_parada_medio: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OxidacaoBruta {
    #[serde(rename = "Ciclo_Inspecao")]
    pub ciclo_inspecao: Option<String>,

    #[serde(rename = "Oxidacao_Baixa")]
    pub oxidacao_baixa: Option<i32>,

    #[serde(rename = "Oxidacao_Media")]
    pub oxidacao_media: Option<i32>,

    #[serde(rename = "Oxidacao_Alta")]
    pub oxidacao_alta: Option<i32>,

    #[serde(rename = "Total_Registros")]
    pub total_registros: Option<i32>,

    #[serde(rename = "Total_Oxidacao")]
    pub total_oxidacao: Option<i32>,

    #[serde(rename = "Percentual_Com_Oxidacao")]
    pub percentual_com_oxidacao: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TurbinaBruta {
    #[serde(rename = "Turbina")]
    pub turbina: Option<String>,

    #[serde(rename = "Total_Imas_Trocados")]
    pub total_imas_trocados: Option<f64>,

    #[serde(rename = "Primeira_Inspecao")]
    pub primeira_inspecao: Option<String>,

    #[serde(rename = "Ultima_Inspecao")]
    pub ultima_inspecao: Option<String>,

    #[serde(rename = "Total_Inspecoes")]
    pub total_inspecoes: Option<i32>,

    #[serde(rename = "Dias_Parada_Acumulados")]
    pub dias_parada_acumulados: Option<f64>,

    #[serde(rename = "MTBF_Dias")]
    pub mtbf_dias: Option<f64>,

    #[serde(rename = "MTTR_Dias")]
    pub mttr_dias: Option<f64>,

    #[serde(rename = "Nivel_Risco")]
    pub nivel_risco: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CarreiraBruta {
    #[serde(rename = "Carreira")]
    pub carreira: Option<String>,

    #[serde(rename = "Total_Imas_Trocados")]
    pub total_imas_trocados: Option<f64>,

    #[serde(rename = "Turbinas_Afetadas")]
    pub turbinas_afetadas: Option<i32>,

    #[serde(rename = "Total_Intervencoes")]
    pub total_intervencoes: Option<i32>,

    #[serde(rename = "Media_Imas_Por_Turbina")]
    pub media_imas_por_turbina: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MensalBruto {
    #[serde(rename = "Mes_Ano")]
    pub mes_ano: Option<String>,

    #[serde(rename = "Imas_Trocados")]
    pub imas_trocados: Option<f64>,

    #[serde(rename = "Turbinas_Unicas")]
    pub turbinas_unicas: Option<i32>,

    #[serde(rename = "Dias_Parada_Total")]
    pub dias_parada_total: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OxidacaoTemporalBruta {
    // A série temporal_por_mes existe na saída do produtor mas nenhuma
    // visão a consome; é aceita e ignorada.
    #[serde(default)]
    pub variacao_entre_ciclos: Vec<VariacaoCicloBruta>,
}

#[derive(Debug, Deserialize)]
pub struct VariacaoCicloBruta {
    #[serde(rename = "Ciclo")]
    pub ciclo: Option<String>,

    #[serde(rename = "Oxidacao_Baixa")]
    pub oxidacao_baixa: Option<i32>,

    #[serde(rename = "Oxidacao_Media")]
    pub oxidacao_media: Option<i32>,

    #[serde(rename = "Oxidacao_Alta")]
    pub oxidacao_alta: Option<i32>,

    #[serde(rename = "Troca_Spindle")]
    pub troca_spindle: Option<i32>,

    #[serde(rename = "Total_Registros")]
    pub total_registros: Option<i32>,

    #[serde(rename = "Total_Oxidacao")]
    pub total_oxidacao: Option<i32>,

    #[serde(rename = "Percentual_Oxidacao")]
    pub percentual_oxidacao: Option<f64>,

    #[serde(rename = "Percentual_Baixa")]
    pub percentual_baixa: Option<f64>,

    #[serde(rename = "Percentual_Media")]
    pub percentual_media: Option<f64>,

    #[serde(rename = "Percentual_Alta")]
    pub percentual_alta: Option<f64>,
}

// ==========================================
// Documento de paradas (maquinas_paradas.json)
// ==========================================
#[derive(Debug, Deserialize)]
pub struct DocumentoParadas {
    #[serde(default)]
    pub maquinas_paradas: Vec<ParadaBruta>,

    pub resumo_por_ciclo: Option<ResumoParadasBruto>,
}

#[derive(Debug, Deserialize)]
pub struct ParadaBruta {
    #[serde(rename = "Data da Parada")]
    pub data_parada: Option<String>,

    #[serde(rename = "Tag da Turbina")]
    pub tag_turbina: Option<String>,

    #[serde(rename = "Data de Retorno")]
    pub data_retorno: Option<String>,

    #[serde(rename = "Dias Parada")]
    pub dias_parada: Option<i32>,

    #[serde(rename = "Ciclo")]
    pub ciclo: Option<String>,

    #[serde(rename = "Status")]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResumoParadasBruto {
    pub primeiro_ciclo: Option<i32>,
    pub segundo_ciclo: Option<i32>,
    pub terceiro_ciclo: Option<i32>,
    pub troca_spindle: Option<i32>,
    pub total_geral: Option<i32>,
}
