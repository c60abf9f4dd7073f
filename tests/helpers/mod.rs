// ==========================================
// Utilitários compartilhados dos testes de integração
// ==========================================

pub mod dados_teste;
