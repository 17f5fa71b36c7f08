//! # Avaliação de Acurácia
//!
//! Compara sequências de tags previstas com gabaritos, tag a tag, e
//! acumula os totais em um [`Scoreboard`]. A avaliação em lote decodifica
//! as sentenças de teste em paralelo: as tabelas do modelo são somente
//! leitura depois do treino, então podem ser compartilhadas entre threads
//! sem trava.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::hmm::HmmModel;
use crate::tokenizer::normalize_line;

/// Compara uma previsão com o gabarito e retorna `(corretas, total)`.
///
/// Sequências de tamanhos diferentes não são comparáveis: o caso é
/// registrado em log e a sentença contribui `(0, 0)` para as somas, sem
/// interromper a avaliação do restante do corpus.
pub fn evaluate(predicted: &[String], gold: &[String]) -> (usize, usize) {
    if predicted.len() != gold.len() {
        warn!(
            previstas = predicted.len(),
            gabarito = gold.len(),
            "sequências de tamanhos diferentes; sentença ignorada na avaliação"
        );
        return (0, 0);
    }
    let correct = predicted
        .iter()
        .zip(gold)
        .filter(|(predicted_tag, gold_tag)| predicted_tag == gold_tag)
        .count();
    (correct, predicted.len())
}

/// Acumulador de acertos sobre um conjunto de sentenças.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub correct: usize,
    pub total: usize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Avalia um par previsão/gabarito e soma o resultado.
    pub fn record(&mut self, predicted: &[String], gold: &[String]) {
        let (correct, total) = evaluate(predicted, gold);
        self.correct += correct;
        self.total += total;
    }

    pub fn merge(&mut self, other: Scoreboard) {
        self.correct += other.correct;
        self.total += other.total;
    }

    /// Fração de tags corretas (0.0 quando nada foi avaliado).
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} tags corretas ({:.2}%)",
            self.correct,
            self.total,
            self.accuracy() * 100.0
        )
    }
}

/// Avalia o modelo sobre um corpus de teste etiquetado.
///
/// As sentenças são decodificadas em paralelo e os resultados somados em um
/// único [`Scoreboard`]. Arquivos de teste com quantidades de linhas
/// diferentes são avaliados em passo casado até a menor, com aviso em log;
/// corpus de teste é insumo de medição, não de treino, então a avaliação
/// longa não aborta.
pub fn evaluate_corpus(
    model: &HmmModel,
    word_lines: &[String],
    tag_lines: &[String],
) -> Scoreboard {
    if word_lines.len() != tag_lines.len() {
        warn!(
            sentencas = word_lines.len(),
            gabaritos = tag_lines.len(),
            "arquivos de teste com quantidades de linhas diferentes"
        );
    }

    word_lines
        .par_iter()
        .zip(tag_lines.par_iter())
        .map(|(word_line, tag_line)| {
            let predicted = model.predict(word_line);
            let gold = normalize_line(tag_line);
            let (correct, total) = evaluate(&predicted, &gold);
            Scoreboard { correct, total }
        })
        .reduce(Scoreboard::default, |mut acc, sentence| {
            acc.merge(sentence);
            acc
        })
}
