//! # Validação Cruzada Particionada
//!
//! Divide um único corpus etiquetado em k partições, treina um modelo com
//! k-1 delas e avalia na partição restante, repetindo para cada partição.
//! Cada sentença é avaliada exatamente uma vez, por um modelo que nunca a
//! viu no treino.
//!
//! A atribuição às partições é round-robin pela posição da sentença
//! (`índice % k`), o que torna o relatório reprodutível de ponta a ponta.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accuracy::{evaluate_corpus, Scoreboard};
use crate::error::{Result, TaggerError};
use crate::hmm::HmmModel;

/// Resultado de uma partição: índice e placar da avaliação held-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldReport {
    pub fold: usize,
    pub scoreboard: Scoreboard,
}

/// Executa validação cruzada com `folds` partições sobre um corpus
/// etiquetado alinhado linha a linha.
///
/// # Erros
/// - [`TaggerError::InvalidFoldCount`] para menos de 2 partições ou menos
///   sentenças que partições.
/// - [`TaggerError::MisalignedCorpora`] se os corpora não casam, além dos
///   erros de treinamento de cada modelo parcial.
pub fn cross_validate(
    tag_lines: &[String],
    word_lines: &[String],
    folds: usize,
) -> Result<Vec<FoldReport>> {
    if tag_lines.len() != word_lines.len() {
        return Err(TaggerError::MisalignedCorpora {
            tag_lines: tag_lines.len(),
            word_lines: word_lines.len(),
        });
    }
    if folds < 2 || tag_lines.len() < folds {
        return Err(TaggerError::InvalidFoldCount { folds });
    }

    let mut reports = Vec::with_capacity(folds);
    for fold in 0..folds {
        let mut train_tags = Vec::new();
        let mut train_words = Vec::new();
        let mut held_tags = Vec::new();
        let mut held_words = Vec::new();

        for (index, (tag_line, word_line)) in tag_lines.iter().zip(word_lines).enumerate() {
            if index % folds == fold {
                held_tags.push(tag_line.clone());
                held_words.push(word_line.clone());
            } else {
                train_tags.push(tag_line.clone());
                train_words.push(word_line.clone());
            }
        }

        let model = HmmModel::train(&train_tags, &train_words)?;
        let scoreboard = evaluate_corpus(&model, &held_words, &held_tags);
        debug!(fold, %scoreboard, "partição avaliada");
        reports.push(FoldReport { fold, scoreboard });
    }

    Ok(reports)
}

/// Soma os placares de todas as partições em um placar único.
pub fn aggregate(reports: &[FoldReport]) -> Scoreboard {
    let mut board = Scoreboard::new();
    for report in reports {
        board.merge(report.scoreboard);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus;

    #[test]
    fn test_every_sentence_scored_exactly_once() {
        let (tag_lines, word_lines) = corpus::paired_lines(&corpus::get_corpus());
        let token_total: usize = tag_lines
            .iter()
            .map(|line| line.split(' ').count())
            .sum();

        let reports = cross_validate(&tag_lines, &word_lines, 5).unwrap();
        assert_eq!(reports.len(), 5);

        let board = aggregate(&reports);
        // toda sentença held-out gera uma previsão de tamanho completo,
        // mesmo com palavras nunca vistas no treino da partição
        assert_eq!(board.total, token_total);
        assert!(board.correct > 0);
    }

    #[test]
    fn test_rejects_too_few_folds() {
        let (tag_lines, word_lines) = corpus::paired_lines(&corpus::get_corpus());
        let err = cross_validate(&tag_lines, &word_lines, 1).unwrap_err();
        assert_eq!(err, TaggerError::InvalidFoldCount { folds: 1 });
    }

    #[test]
    fn test_rejects_more_folds_than_sentences() {
        let (tag_lines, word_lines) = corpus::paired_lines(&corpus::get_corpus());
        let folds = tag_lines.len() + 1;
        let err = cross_validate(&tag_lines, &word_lines, folds).unwrap_err();
        assert_eq!(err, TaggerError::InvalidFoldCount { folds });
    }

    #[test]
    fn test_rejects_misaligned_corpus() {
        let tag_lines = vec!["n v".to_string()];
        let err = cross_validate(&tag_lines, &[], 2).unwrap_err();
        assert!(matches!(err, TaggerError::MisalignedCorpora { .. }));
    }
}
