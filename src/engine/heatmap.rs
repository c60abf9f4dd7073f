// ==========================================
// Dashboard de Ímãs Eólicos - Heatmap de carreiras
// ==========================================
// Agrupa a sequência de carreiras em blocos contíguos de tamanho
// fixo e resume cada bloco por intensidade média e total de ímãs.
// ==========================================

use serde::Serialize;

use crate::domain::types::NivelIntensidade;
use crate::domain::Carreira;

/// Tamanho padrão do bloco (carreiras por célula do mapa de calor).
pub const TAMANHO_BLOCO_PADRAO: usize = 10;

// ==========================================
// BlocoHeatmap - célula resumida do mapa de calor
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlocoHeatmap {
    pub primeira_carreira: String,     // rótulo do primeiro membro do bloco
    pub ultima_carreira: String,       // rótulo do último membro do bloco
    pub carreiras: Vec<String>,        // todos os membros, na ordem
    pub intensidade: f64,              // média de media_imas_por_turbina (membros válidos)
    pub total_imas: f64,               // soma de ímãs (membros válidos)
    pub nivel: NivelIntensidade,
}

// ==========================================
// Operações
// ==========================================

/// Particiona as carreiras em blocos contíguos e resume cada um.
///
/// Membro válido é o que tem a média informada. Blocos sem nenhum
/// membro válido são descartados do resultado, não emitidos com
/// intensidade 0. O último bloco pode ser menor que `tamanho_bloco`.
pub fn calcular_blocos(carreiras: &[Carreira], tamanho_bloco: usize) -> Vec<BlocoHeatmap> {
    if tamanho_bloco == 0 {
        tracing::warn!("tamanho de bloco 0 para o heatmap; nenhum bloco gerado");
        return Vec::new();
    }

    carreiras
        .chunks(tamanho_bloco)
        .filter_map(resumir_bloco)
        .collect()
}

fn resumir_bloco(grupo: &[Carreira]) -> Option<BlocoHeatmap> {
    let validos: Vec<&Carreira> = grupo.iter().filter(|c| c.media_valida()).collect();
    if validos.is_empty() {
        return None;
    }

    let soma_medias: f64 = validos
        .iter()
        .filter_map(|c| c.media_imas_por_turbina)
        .sum();
    let intensidade = soma_medias / validos.len() as f64;
    let total_imas: f64 = validos.iter().map(|c| c.total_imas_trocados).sum();

    // Primeiro/último rótulo consideram o bloco inteiro, não só os
    // membros válidos: a célula representa a faixa física completa.
    let primeira = grupo.first()?.rotulo.clone();
    let ultima = grupo.last()?.rotulo.clone();

    Some(BlocoHeatmap {
        primeira_carreira: primeira,
        ultima_carreira: ultima,
        carreiras: grupo.iter().map(|c| c.rotulo.clone()).collect(),
        intensidade,
        total_imas,
        nivel: classificar_intensidade(intensidade),
    })
}

/// Classifica a intensidade média de um bloco.
///
/// Limiares estritos (valor exatamente no limiar fica no balde
/// inferior): >8 Crítico, >4 Alto, >2 Médio, senão Baixo.
pub fn classificar_intensidade(valor: f64) -> NivelIntensidade {
    if valor > 8.0 {
        NivelIntensidade::Critico
    } else if valor > 4.0 {
        NivelIntensidade::Alto
    } else if valor > 2.0 {
        NivelIntensidade::Medio
    } else {
        NivelIntensidade::Baixo
    }
}

// ==========================================
// Blocos críticos
// ==========================================

/// Situação de um bloco acima do limiar de atenção.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SituacaoBloco {
    Alerta,   // intensidade > 4
    Critico,  // intensidade > 8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlocoCritico {
    pub primeira_carreira: String,
    pub ultima_carreira: String,
    pub intensidade: f64,
    pub situacao: SituacaoBloco,
}

/// Relatório de blocos com intensidade acima de 4 (ALERTA) e acima
/// de 8 (CRÍTICO), na ordem dos blocos.
pub fn blocos_criticos(blocos: &[BlocoHeatmap]) -> Vec<BlocoCritico> {
    blocos
        .iter()
        .filter(|b| b.intensidade > 4.0)
        .map(|b| BlocoCritico {
            primeira_carreira: b.primeira_carreira.clone(),
            ultima_carreira: b.ultima_carreira.clone(),
            intensidade: b.intensidade,
            situacao: if b.intensidade > 8.0 {
                SituacaoBloco::Critico
            } else {
                SituacaoBloco::Alerta
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carreira(rotulo: &str, imas: f64, media: Option<f64>) -> Carreira {
        Carreira {
            rotulo: rotulo.to_string(),
            total_imas_trocados: imas,
            turbinas_afetadas: 1,
            total_intervencoes: 1,
            media_imas_por_turbina: media,
        }
    }

    #[test]
    fn test_limiares_estritos() {
        assert_eq!(classificar_intensidade(8.1), NivelIntensidade::Critico);
        assert_eq!(classificar_intensidade(8.0), NivelIntensidade::Alto);
        assert_eq!(classificar_intensidade(4.0), NivelIntensidade::Medio);
        assert_eq!(classificar_intensidade(2.0), NivelIntensidade::Baixo);
        assert_eq!(classificar_intensidade(0.0), NivelIntensidade::Baixo);
    }

    #[test]
    fn test_particao_23_carreiras_em_3_blocos() {
        let carreiras: Vec<Carreira> = (1..=23)
            .map(|i| carreira(&format!("C-{:02}", i), 2.0, Some(1.0)))
            .collect();

        let blocos = calcular_blocos(&carreiras, TAMANHO_BLOCO_PADRAO);
        assert_eq!(blocos.len(), 3);
        assert_eq!(blocos[0].carreiras.len(), 10);
        assert_eq!(blocos[1].carreiras.len(), 10);
        assert_eq!(blocos[2].carreiras.len(), 3);
        assert_eq!(blocos[2].primeira_carreira, "C-21");
        assert_eq!(blocos[2].ultima_carreira, "C-23");
    }

    #[test]
    fn test_bloco_sem_membro_valido_e_descartado() {
        // Segundo bloco inteiro sem média informada: some do resultado.
        let mut carreiras: Vec<Carreira> = (1..=3)
            .map(|i| carreira(&format!("C-{:02}", i), 4.0, Some(2.0)))
            .collect();
        carreiras.extend((4..=6).map(|i| carreira(&format!("C-{:02}", i), 4.0, None)));

        let blocos = calcular_blocos(&carreiras, 3);
        assert_eq!(blocos.len(), 1);
        assert_eq!(blocos[0].primeira_carreira, "C-01");
    }

    #[test]
    fn test_media_e_soma_somente_dos_validos() {
        let carreiras = vec![
            carreira("C-01", 10.0, Some(6.0)),
            carreira("C-02", 99.0, None),
            carreira("C-03", 2.0, Some(2.0)),
        ];

        let blocos = calcular_blocos(&carreiras, 3);
        assert_eq!(blocos.len(), 1);
        // Média sobre os 2 válidos; a carreira sem média não dilui.
        assert_eq!(blocos[0].intensidade, 4.0);
        assert_eq!(blocos[0].total_imas, 12.0);
        // Faixa física cobre o bloco inteiro.
        assert_eq!(blocos[0].ultima_carreira, "C-03");
        assert_eq!(blocos[0].carreiras.len(), 3);
    }

    #[test]
    fn test_relatorio_de_blocos_criticos() {
        let carreiras = vec![
            carreira("C-01", 1.0, Some(9.0)),
            carreira("C-02", 1.0, Some(5.0)),
            carreira("C-03", 1.0, Some(1.0)),
        ];

        let blocos = calcular_blocos(&carreiras, 1);
        let criticos = blocos_criticos(&blocos);
        assert_eq!(criticos.len(), 2);
        assert_eq!(criticos[0].situacao, SituacaoBloco::Critico);
        assert_eq!(criticos[1].situacao, SituacaoBloco::Alerta);
    }
}
