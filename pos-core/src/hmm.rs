//! # Modelo HMM para Etiquetagem Morfossintática
//!
//! HMM clássico de bigramas onde:
//! - **Estados Ocultos**: classes gramaticais (art, n, v, ...)
//! - **Observações**: palavras da sentença
//!
//! O modelo aprende por contagem supervisionada:
//! 1. Probabilidade de Transição: $P(tag_i \mid tag_{i-1})$
//! 2. Probabilidade de Emissão: $P(palavra_i \mid tag_i)$
//!
//! O início de sentença é o pseudo-estado `"#"`: ele aparece apenas como
//! origem de transições, nunca emite palavra e nunca sai na etiquetagem.
//! Não há linha separada de probabilidades iniciais; a linha `"#"` da
//! tabela de transições cumpre esse papel.
//!
//! A decodificação é feita pelo algoritmo de Viterbi ([`crate::viterbi`]),
//! maximizando a soma das log-probabilidades ao longo da sentença.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::counts::{CountTable, LogProbTable};
use crate::error::{Result, TaggerError};
use crate::tokenizer::{normalize_line, TaggedSentence};
use crate::viterbi::viterbi_decode;

/// Pseudo-estado que antecede a primeira tag de cada sentença.
pub const START_TAG: &str = "#";

/// Modelo HMM treinado: as duas tabelas de log-probabilidade.
///
/// Depois de [`HmmModel::train`] o modelo é somente leitura. Vários modelos
/// treinados em corpora diferentes coexistem sem estado global, o que a
/// validação cruzada ([`crate::crossval`]) explora treinando um modelo por
/// partição.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HmmModel {
    transitions: LogProbTable,
    emissions: LogProbTable,
}

impl HmmModel {
    /// Treina o modelo a partir de dois corpora alinhados linha a linha:
    /// um com as sequências de tags e outro com as sentenças.
    ///
    /// Para cada sentença, um cursor de "tag anterior" começa em `"#"`; em
    /// cada posição registra-se uma emissão (tag atual gera palavra atual)
    /// e uma transição (tag anterior seguida pela tag atual), e o cursor
    /// avança. Ao final, as contagens são normalizadas em log-space.
    ///
    /// # Erros
    /// - [`TaggerError::MisalignedCorpora`] se os corpora não têm a mesma
    ///   quantidade de linhas.
    /// - [`TaggerError::TokenCountMismatch`] se alguma sentença tem
    ///   quantidades diferentes de tags e palavras. O treino falha cedo em
    ///   vez de truncar em silêncio: corpus desalinhado é corpus corrompido.
    pub fn train(tag_lines: &[String], word_lines: &[String]) -> Result<Self> {
        let (transition_counts, emission_counts) = count_tables(tag_lines, word_lines)?;

        debug!(
            sentencas = tag_lines.len(),
            estados = emission_counts.len(),
            "modelo HMM treinado"
        );

        Ok(Self {
            transitions: transition_counts.to_log_probs(),
            emissions: emission_counts.to_log_probs(),
        })
    }

    /// Etiqueta uma sentença crua, retornando uma tag por palavra.
    ///
    /// A sentença passa pela mesma normalização do treino antes de qualquer
    /// consulta às tabelas.
    pub fn predict(&self, line: &str) -> Vec<String> {
        let words = normalize_line(line);
        viterbi_decode(self, &words).tags
    }

    /// Etiqueta uma sentença crua e devolve palavras e tags pareadas,
    /// prontas para exibição ou serialização.
    pub fn tag_line(&self, line: &str) -> TaggedSentence {
        let words = normalize_line(line);
        let tags = viterbi_decode(self, &words).tags;
        TaggedSentence { words, tags }
    }

    /// Tabela de transições: tag anterior (ou `"#"`) para próxima tag.
    pub fn transitions(&self) -> &LogProbTable {
        &self.transitions
    }

    /// Tabela de emissões: tag para palavra observada.
    pub fn emissions(&self) -> &LogProbTable {
        &self.emissions
    }
}

/// Constrói as duas tabelas de frequência a partir dos corpora alinhados:
/// transições (tag anterior para tag atual, com `"#"` antes da primeira) e
/// emissões (tag para palavra). É a etapa de contagem do treinamento,
/// exposta separadamente para inspeção e teste.
pub fn count_tables(
    tag_lines: &[String],
    word_lines: &[String],
) -> Result<(CountTable, CountTable)> {
    if tag_lines.len() != word_lines.len() {
        return Err(TaggerError::MisalignedCorpora {
            tag_lines: tag_lines.len(),
            word_lines: word_lines.len(),
        });
    }

    let mut transition_counts = CountTable::new();
    let mut emission_counts = CountTable::new();

    for (index, (tag_line, word_line)) in tag_lines.iter().zip(word_lines).enumerate() {
        let tags = normalize_line(tag_line);
        let words = normalize_line(word_line);
        if tags.len() != words.len() {
            return Err(TaggerError::TokenCountMismatch {
                line: index + 1,
                tags: tags.len(),
                words: words.len(),
            });
        }

        let mut prev = START_TAG;
        for (tag, word) in tags.iter().zip(&words) {
            emission_counts.increment(tag, word);
            transition_counts.increment(prev, tag);
            prev = tag;
        }
    }

    Ok((transition_counts, emission_counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_count_tables_single_sentence() {
        let (transitions, emissions) =
            count_tables(&lines(&["n v"]), &lines(&["cachorro corre"])).unwrap();

        let start_row = transitions.row(START_TAG).unwrap();
        assert_eq!(start_row.count("n"), 1);
        assert_eq!(start_row.total(), 1);
        let n_row = transitions.row("n").unwrap();
        assert_eq!(n_row.count("v"), 1);
        assert_eq!(n_row.total(), 1);
        assert!(transitions.row("v").is_none());

        assert_eq!(emissions.row("n").unwrap().count("cachorro"), 1);
        assert_eq!(emissions.row("v").unwrap().count("corre"), 1);
        assert!(emissions.row(START_TAG).is_none());
    }

    #[test]
    fn test_train_counts_single_sentence() {
        let model = HmmModel::train(&lines(&["n v"]), &lines(&["cachorro corre"])).unwrap();

        // transições: # -> n e n -> v, cada uma com probabilidade 1
        assert_eq!(model.transitions().score(START_TAG, "n"), Some(0.0));
        assert_eq!(model.transitions().score("n", "v"), Some(0.0));
        assert!(model.transitions().row("v").is_none());

        // emissões: n -> cachorro, v -> corre
        assert_eq!(model.emissions().score("n", "cachorro"), Some(0.0));
        assert_eq!(model.emissions().score("v", "corre"), Some(0.0));
        assert_eq!(model.emissions().score("n", "corre"), None);

        // "#" nunca emite
        assert!(model.emissions().row(START_TAG).is_none());
    }

    #[test]
    fn test_train_normalizes_case_and_whitespace() {
        let model =
            HmmModel::train(&lines(&["N  V "]), &lines(&[" Cachorro  Corre"])).unwrap();
        assert_eq!(model.emissions().score("n", "cachorro"), Some(0.0));
        assert_eq!(model.predict("CACHORRO CORRE"), vec!["n", "v"]);
    }

    #[test]
    fn test_train_accumulates_across_sentences() {
        let model = HmmModel::train(
            &lines(&["art n v", "art n v"]),
            &lines(&["o gato dorme", "a casa caiu"]),
        )
        .unwrap();

        // # -> art observado duas vezes em duas sentenças: probabilidade 1
        assert_eq!(model.transitions().score(START_TAG, "art"), Some(0.0));
        // art emitiu "o" uma vez em duas observações: ln(1/2)
        let score = model.emissions().score("art", "o").unwrap();
        assert!((score - 0.5_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_train_rejects_misaligned_corpora() {
        let err = HmmModel::train(&lines(&["n v", "n"]), &lines(&["gato dorme"])).unwrap_err();
        assert_eq!(
            err,
            TaggerError::MisalignedCorpora {
                tag_lines: 2,
                word_lines: 1
            }
        );
    }

    #[test]
    fn test_train_rejects_token_count_mismatch() {
        let err = HmmModel::train(
            &lines(&["n v", "n v adj"]),
            &lines(&["gato dorme", "gato dorme"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TaggerError::TokenCountMismatch {
                line: 2,
                tags: 3,
                words: 2
            }
        );
    }

    #[test]
    fn test_empty_training_yields_empty_predictions() {
        let model = HmmModel::train(&[], &[]).unwrap();
        assert!(model.transitions().is_empty());
        assert!(model.predict("qualquer sentença aqui").is_empty());
    }

    #[test]
    fn test_tag_line_pairs_words_and_tags() {
        let model = HmmModel::train(&lines(&["n v"]), &lines(&["cachorro corre"])).unwrap();
        let tagged = model.tag_line("Cachorro corre");
        assert_eq!(tagged.to_string(), "cachorro/n corre/v");
    }
}
