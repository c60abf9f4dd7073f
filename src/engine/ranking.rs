// ==========================================
// Dashboard de Ímãs Eólicos - Seleção top-N
// ==========================================
// Ordenação determinística usada por todas as listas "top" do
// dashboard: decrescente pelo campo escolhido, estável (empates
// preservam a ordem de entrada), truncada em N.
// ==========================================

/// Seleciona os N maiores itens segundo a chave, em ordem decrescente.
///
/// A ordenação é estável: itens com chave igual mantêm a posição
/// relativa original, o que torna o recorte determinístico.
pub fn top_n_por<T, F>(itens: &[T], n: usize, chave: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut ordenados: Vec<T> = itens.to_vec();
    // sort_by é estável; comparar (b, a) inverte para decrescente sem
    // perturbar empates.
    ordenados.sort_by(|a, b| chave(b).total_cmp(&chave(a)));
    ordenados.truncate(n);
    ordenados
}
