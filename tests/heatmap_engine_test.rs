// ==========================================
// Testes de integração - heatmap de carreiras
// ==========================================
// Escopo:
// 1. Partição em blocos contíguos (último bloco menor)
// 2. Descarte de blocos sem membro válido
// 3. Limiares estritos de classificação
// 4. Relatório de blocos críticos
// ==========================================

mod helpers;

use dashboard_imas_eolicos::domain::types::NivelIntensidade;
use dashboard_imas_eolicos::engine::{
    blocos_criticos, calcular_blocos, classificar_intensidade, SituacaoBloco,
    TAMANHO_BLOCO_PADRAO,
};
use helpers::dados_teste::DatasetBuilder;

#[test]
fn test_23_carreiras_formam_3_blocos() {
    let mut builder = DatasetBuilder::novo();
    for i in 1..=23 {
        builder = builder.com_carreira(&format!("C-{:02}", i), 2.0, 1, Some(1.5));
    }
    let dataset = builder.construir();

    let blocos = calcular_blocos(&dataset.carreiras, TAMANHO_BLOCO_PADRAO);

    assert_eq!(blocos.len(), 3);
    assert_eq!(blocos[0].carreiras.len(), 10);
    assert_eq!(blocos[1].carreiras.len(), 10);
    assert_eq!(blocos[2].carreiras.len(), 3);
    assert_eq!(blocos[0].primeira_carreira, "C-01");
    assert_eq!(blocos[0].ultima_carreira, "C-10");
    assert_eq!(blocos[2].primeira_carreira, "C-21");
    assert_eq!(blocos[2].ultima_carreira, "C-23");
}

#[test]
fn test_bloco_inteiro_sem_media_e_omitido() {
    // 20 carreiras: o segundo bloco de 10 não tem média em nenhum membro.
    let mut builder = DatasetBuilder::novo();
    for i in 1..=10 {
        builder = builder.com_carreira(&format!("C-{:02}", i), 2.0, 1, Some(3.0));
    }
    for i in 11..=20 {
        builder = builder.com_carreira(&format!("C-{:02}", i), 2.0, 1, None);
    }
    let dataset = builder.construir();

    let blocos = calcular_blocos(&dataset.carreiras, TAMANHO_BLOCO_PADRAO);

    // Omitido do resultado, não emitido com intensidade 0.
    assert_eq!(blocos.len(), 1);
    assert_eq!(blocos[0].primeira_carreira, "C-01");
    assert_eq!(blocos[0].intensidade, 3.0);
}

#[test]
fn test_intensidade_ignora_membros_sem_media() {
    let dataset = DatasetBuilder::novo()
        .com_carreira("C-01", 10.0, 2, Some(6.0))
        .com_carreira("C-02", 50.0, 1, None)
        .com_carreira("C-03", 2.0, 1, Some(2.0))
        .construir();

    let blocos = calcular_blocos(&dataset.carreiras, 3);
    assert_eq!(blocos.len(), 1);
    assert_eq!(blocos[0].intensidade, 4.0);
    assert_eq!(blocos[0].total_imas, 12.0);
    assert_eq!(blocos[0].nivel, NivelIntensidade::Medio);
}

#[test]
fn test_limiares_estritos_de_classificacao() {
    assert_eq!(classificar_intensidade(8.1), NivelIntensidade::Critico);
    assert_eq!(classificar_intensidade(8.0), NivelIntensidade::Alto);
    assert_eq!(classificar_intensidade(4.0), NivelIntensidade::Medio);
    assert_eq!(classificar_intensidade(2.0), NivelIntensidade::Baixo);
}

#[test]
fn test_relatorio_de_blocos_criticos() {
    let dataset = DatasetBuilder::novo()
        .com_carreira("C-01", 5.0, 1, Some(9.5))
        .com_carreira("C-02", 5.0, 1, Some(4.5))
        .com_carreira("C-03", 5.0, 1, Some(1.0))
        .construir();

    let blocos = calcular_blocos(&dataset.carreiras, 1);
    let criticos = blocos_criticos(&blocos);

    assert_eq!(criticos.len(), 2);
    assert_eq!(criticos[0].primeira_carreira, "C-01");
    assert_eq!(criticos[0].situacao, SituacaoBloco::Critico);
    assert_eq!(criticos[1].primeira_carreira, "C-02");
    assert_eq!(criticos[1].situacao, SituacaoBloco::Alerta);
}

#[test]
fn test_sem_carreiras_sem_blocos() {
    let dataset = DatasetBuilder::novo().construir();
    assert!(calcular_blocos(&dataset.carreiras, TAMANHO_BLOCO_PADRAO).is_empty());
}
