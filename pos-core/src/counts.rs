//! # Tabelas de Frequência e de Log-Probabilidade
//!
//! O treinamento do HMM acontece em duas etapas sobre estas tabelas:
//!
//! 1. **Contagem**: cada observação incrementa uma célula de uma
//!    [`CountTable`] (transições tag anterior para tag atual, emissões tag
//!    para palavra). Cada linha mantém um total explícito, sempre igual à
//!    soma das suas células.
//! 2. **Normalização**: [`CountTable::to_log_probs`] converte cada célula
//!    em `ln(contagem / total da linha)`, produzindo uma [`LogProbTable`]
//!    imutável usada pelo decodificador.
//!
//! As probabilidades ficam em **log-space** para evitar underflow numérico
//! ao somar muitos termos pequenos:
//! $$ \log(A \cdot B) = \log(A) + \log(B) $$
//!
//! As linhas e as células usam `BTreeMap`: a iteração em ordem
//! lexicográfica é o que torna o desempate do Viterbi determinístico.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Uma linha de contagens: as células e o total corrente.
///
/// O total é um campo próprio, fora do espaço de chaves das células, então
/// nenhuma tag ou palavra real pode colidir com ele.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow {
    total: u32,
    counts: BTreeMap<String, u32>,
}

impl CountRow {
    fn increment(&mut self, key: &str) {
        self.total += 1;
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Soma de todas as células da linha.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Contagem de uma célula (0 se nunca observada).
    pub fn count(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

/// Tabela de contagens: estado de origem para linha de contagens.
///
/// Uma linha só passa a existir quando recebe a primeira observação, então
/// toda linha presente tem total maior que zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTable {
    rows: BTreeMap<String, CountRow>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra uma observação: incrementa a célula `key` da linha `row` e
    /// o total da linha.
    pub fn increment(&mut self, row: &str, key: &str) {
        self.rows.entry(row.to_string()).or_default().increment(key);
    }

    pub fn row(&self, row: &str) -> Option<&CountRow> {
        self.rows.get(row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converte as contagens em log-probabilidades por linha.
    ///
    /// Cada célula vira `ln(contagem / total da linha)`. A conversão é pura
    /// e total: como toda linha existente tem total positivo, nunca ocorre
    /// divisão por zero nem `ln(0)`. Converter a mesma tabela duas vezes
    /// produz resultados idênticos.
    pub fn to_log_probs(&self) -> LogProbTable {
        let mut rows = BTreeMap::new();
        for (state, row) in &self.rows {
            let total = f64::from(row.total);
            let entries = row
                .counts
                .iter()
                .map(|(key, &count)| (key.clone(), (f64::from(count) / total).ln()))
                .collect();
            rows.insert(state.clone(), entries);
        }
        LogProbTable { rows }
    }
}

/// Tabela de log-probabilidades derivada de uma [`CountTable`].
///
/// Mesma estrutura de chaves, sem o total: depois da normalização ele é
/// redundante (a exponenciação de qualquer linha soma 1). Construída uma
/// única vez e somente lida a partir daí, pode ser compartilhada entre
/// decodificações concorrentes sem qualquer trava.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogProbTable {
    rows: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LogProbTable {
    /// Linha de um estado, com as células em ordem lexicográfica.
    pub fn row(&self, state: &str) -> Option<&BTreeMap<String, f64>> {
        self.rows.get(state)
    }

    /// Log-probabilidade de uma célula, se observada no treino.
    pub fn score(&self, state: &str, key: &str) -> Option<f64> {
        self.rows.get(state).and_then(|row| row.get(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
