// ==========================================
// Construtores de dados de teste
// ==========================================
// Builders de entidades normalizadas e documentos JSON no formato
// exato do contrato de entrada (chaves em português).
// ==========================================

#![allow(dead_code)]

use dashboard_imas_eolicos::domain::{
    Carreira, Ciclo, Dataset, EvolucaoMensal, MaquinaParada, ResumoGeral, Turbina,
};
use std::fs;
use std::path::{Path, PathBuf};

// ==========================================
// Builder do Dataset normalizado
// ==========================================

pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn novo() -> Self {
        Self {
            dataset: Dataset {
                resumo: ResumoGeral {
                    total_turbinas: 47,
                    periodo_analise: "2021-03 a 2024-11".to_string(),
                    ..ResumoGeral::default()
                },
                ..Dataset::default()
            },
        }
    }

    pub fn com_ciclo(mut self, rotulo: &str, imas: f64, baixa: i32, media: i32, alta: i32) -> Self {
        self.dataset.ciclos.push(Ciclo {
            rotulo: rotulo.to_string(),
            maquinas_paradas: 0,
            imas_trocados: imas,
            dias_parada_medio: 0.0,
            oxidacao_baixa: baixa,
            oxidacao_media: media,
            oxidacao_alta: alta,
        });
        self
    }

    pub fn com_turbina(mut self, tag: &str, imas: f64, dias_parada: f64) -> Self {
        self.dataset.turbinas.push(Turbina {
            tag: tag.to_string(),
            total_imas_trocados: imas,
            total_inspecoes: 1,
            primeira_inspecao: "2021-03-01".to_string(),
            ultima_inspecao: "2024-11-01".to_string(),
            dias_parada_acumulados: dias_parada,
            mtbf_dias: 0.0,
            mttr_dias: 0.0,
            nivel_risco: Default::default(),
            rotulo_risco: String::new(),
        });
        self
    }

    pub fn com_carreira(mut self, rotulo: &str, imas: f64, afetadas: i32, media: Option<f64>) -> Self {
        self.dataset.carreiras.push(Carreira {
            rotulo: rotulo.to_string(),
            total_imas_trocados: imas,
            turbinas_afetadas: afetadas,
            total_intervencoes: afetadas,
            media_imas_por_turbina: media,
        });
        self
    }

    pub fn com_mes(mut self, mes_ano: &str, imas: f64) -> Self {
        self.dataset.mensal.push(EvolucaoMensal {
            mes_ano: mes_ano.to_string(),
            imas_trocados: imas,
            turbinas_unicas: 1,
            dias_parada_total: 0.0,
        });
        self
    }

    pub fn com_parada(mut self, turbina: &str, ciclo: &str, dias: i32) -> Self {
        self.dataset.maquinas_paradas.push(MaquinaParada {
            data_parada: None,
            turbina: turbina.to_string(),
            data_retorno: None,
            dias_parada: dias,
            ciclo: ciclo.to_string(),
            status: "Fora de Operação".to_string(),
        });
        self
    }

    pub fn construir(self) -> Dataset {
        self.dataset
    }
}

// ==========================================
// Documentos JSON no formato do contrato
// ==========================================

/// Documento principal mínimo e válido, com as chaves exatas do
/// produtor de dados.
pub fn documento_dashboard_completo() -> String {
    r#"{
        "resumo": {
            "total_imas_trocados": 119.0,
            "total_turbinas": 47,
            "total_criticidade": 30,
            "total_maquinas_paradas": 4,
            "total_carreiras": 23,
            "total_oxidacao_baixa": 12,
            "total_oxidacao_media": 7,
            "total_oxidacao_alta": 3,
            "total_oxidacao": 22,
            "periodo_analise": "2021-03 a 2024-11",
            "data_ultima_atualizacao": "2024-11-20 08:30:00",
            "total_registros": 180,
            "observacao_oxidacao": "Baseado na última inspeção de cada turbina"
        },
        "ciclos": [
            {
                "Ciclo": "Segundo Ciclo",
                "Maquinas_Paradas": 1,
                "Imas_Trocados": 38.0,
                "Criticidade_Baixa": 5,
                "Criticidade_Media": 3,
                "Criticidade_Alta": 1,
                "Dias_Parada_Medio": 12.5
            },
            {
                "Ciclo": "Primeiro Ciclo",
                "Imas_Trocados": 55.0
            }
        ],
        "oxidacao": [
            {
                "Ciclo_Inspecao": "Primeiro Ciclo",
                "Oxidacao_Baixa": 8,
                "Oxidacao_Media": 4,
                "Oxidacao_Alta": 2,
                "Total_Registros": 47,
                "Total_Oxidacao": 14,
                "Percentual_Com_Oxidacao": 29.79
            }
        ],
        "turbinas": [
            {
                "Turbina": "AEG-07",
                "Total_Imas_Trocados": 21.0,
                "Primeira_Inspecao": "2021-04-12",
                "Ultima_Inspecao": "2024-10-02",
                "Total_Inspecoes": 6,
                "Dias_Parada_Acumulados": 145.0,
                "MTBF_Dias": 63.2,
                "MTTR_Dias": 6.9,
                "Nivel_Risco": "🟥 ALTO RISCO"
            },
            {
                "Total_Imas_Trocados": 2.0
            }
        ],
        "carreiras": [
            {
                "Carreira": "C-07",
                "Total_Imas_Trocados": 18.0,
                "Turbinas_Afetadas": 5,
                "Total_Intervencoes": 7,
                "Media_Imas_Por_Turbina": 3.6
            },
            {
                "Carreira": "C-12",
                "Total_Imas_Trocados": 9.0,
                "Turbinas_Afetadas": 4,
                "Total_Intervencoes": 4
            }
        ],
        "mensal": [
            {
                "Mes_Ano": "2021-03",
                "Imas_Trocados": 4.0,
                "Turbinas_Unicas": 2,
                "Dias_Parada_Total": 31.0
            },
            {
                "Mes_Ano": "2021-04",
                "Imas_Trocados": 7.0,
                "Turbinas_Unicas": 3,
                "Dias_Parada_Total": 12.0
            }
        ],
        "oxidacao_temporal": {
            "temporal_por_mes": [],
            "variacao_entre_ciclos": [
                {
                    "Ciclo": "Primeiro Ciclo",
                    "Oxidacao_Baixa": 8,
                    "Oxidacao_Media": 4,
                    "Oxidacao_Alta": 2,
                    "Troca_Spindle": 1,
                    "Total_Registros": 47,
                    "Total_Oxidacao": 15,
                    "Percentual_Oxidacao": 31.91,
                    "Percentual_Baixa": 17.02,
                    "Percentual_Media": 8.51,
                    "Percentual_Alta": 4.26
                }
            ]
        }
    }"#
    .to_string()
}

/// Documento de paradas com as chaves de domínio exatas
/// ("Data da Parada", "Tag da Turbina", ...).
pub fn documento_paradas_completo() -> String {
    r#"{
        "maquinas_paradas": [
            {
                "Data da Parada": "15/03/2023",
                "Tag da Turbina": "AEG-21",
                "Data de Retorno": "13/07/2023",
                "Dias Parada": 120,
                "Ciclo": "Primeiro Ciclo",
                "Status": "Fora de Operação"
            },
            {
                "Data da Parada": "N/A",
                "Tag da Turbina": "AEG-03",
                "Data de Retorno": "N/A",
                "Dias Parada": 0,
                "Ciclo": "Segundo Ciclo",
                "Status": "Fora de Operação"
            }
        ],
        "resumo_por_ciclo": {
            "primeiro_ciclo": 1,
            "segundo_ciclo": 1,
            "terceiro_ciclo": 0,
            "troca_spindle": 0,
            "total_geral": 2
        }
    }"#
    .to_string()
}

/// Documento de paradas vazio (estado normal de "sem dados").
pub fn documento_paradas_vazio() -> String {
    r#"{ "maquinas_paradas": [] }"#.to_string()
}

/// Grava os dois documentos em um diretório e devolve os caminhos.
pub fn gravar_documentos(dir: &Path, dashboard: &str, paradas: &str) -> (PathBuf, PathBuf) {
    let caminho_dashboard = dir.join("dashboard_data.json");
    let caminho_paradas = dir.join("maquinas_paradas.json");
    fs::write(&caminho_dashboard, dashboard).expect("falha ao gravar documento principal");
    fs::write(&caminho_paradas, paradas).expect("falha ao gravar documento de paradas");
    (caminho_dashboard, caminho_paradas)
}
