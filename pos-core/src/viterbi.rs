//! # Algoritmo de Viterbi: Decodificação da Sequência de Tags
//!
//! O Viterbi é um método de **programação dinâmica** que encontra a
//! sequência de tags mais provável de forma eficiente.
//!
//! ## Intuição
//!
//! Com T tags possíveis, uma busca exaustiva sobre N palavras custaria
//! `O(T^N)`. O Viterbi explora que a **melhor sequência até a palavra i
//! terminando na tag t** depende apenas da **melhor sequência até a
//! palavra i-1 terminando em alguma tag anterior**, reduzindo para
//! `O(N × T²)`.
//!
//! ## Algoritmo
//!
//! ```text
//! Inicialização: fronteira = { "#": 0.0 }
//!
//! Recursão:      score(t') = max_t [ fronteira(t) + transição(t, t') ] + emissão(t', palavra_i)
//!
//! Backtracking:  reconstrói o caminho ótimo de trás para frente até "#"
//! ```
//!
//! A fronteira é esparsa: só carrega tags alcançáveis por transições
//! observadas no treino, não o conjunto completo de tags. Palavras nunca
//! vistas sob uma tag recebem a penalidade fixa
//! [`UNSEEN_EMISSION_SCORE`] em vez de probabilidade zero.
//!
//! ## Desempate
//!
//! Tags de origem e destinos de transição são percorridos em ordem
//! lexicográfica (os mapas são `BTreeMap`), e um caminho só substitui
//! outro com comparação estritamente maior. Em caso de empate vence a
//! primeira tag de origem na ordem, e o resultado é idêntico a cada
//! chamada.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hmm::{HmmModel, START_TAG};

/// Penalidade fixa, em log-space, para palavra nunca vista sob uma tag.
///
/// Negativa o bastante para ser dominada por qualquer caminho com emissões
/// observadas, mas finita: somada ao longo de uma sentença longa continua
/// longe de underflow e nunca vira NaN.
pub const UNSEEN_EMISSION_SCORE: f64 = -100.0;

/// Resultado da decodificação de uma sentença.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViterbiResult {
    /// Sequência de tags mais provável, uma por palavra.
    pub tags: Vec<String>,
    /// Log-probabilidade acumulada (não normalizada) do melhor caminho.
    pub score: f64,
}

/// Executa o Viterbi sobre uma sentença já normalizada.
///
/// Retorna exatamente uma tag por palavra. Um modelo sem dados de treino
/// (sem linha `"#"` nas transições) produz resultado vazio; este é o único
/// caso legítimo de fronteira vazia, qualquer outro é violação de
/// invariante interna e aborta em builds de debug.
pub fn viterbi_decode(model: &HmmModel, words: &[String]) -> ViterbiResult {
    if words.is_empty() {
        return ViterbiResult::default();
    }

    // fronteira[tag] = melhor score acumulado terminando em tag na posição atual
    let mut frontier: BTreeMap<String, f64> = BTreeMap::new();
    frontier.insert(START_TAG.to_string(), 0.0);
    // backpointers[i][tag] = tag anterior que gerou o melhor score de tag na posição i
    let mut backpointers: Vec<BTreeMap<String, String>> = Vec::with_capacity(words.len());

    for word in words {
        let mut next_frontier: BTreeMap<String, f64> = BTreeMap::new();
        let mut pointers: BTreeMap<String, String> = BTreeMap::new();

        for (state, &score) in &frontier {
            // estado sem transições de saída não contribui sucessores
            let Some(row) = model.transitions().row(state) else {
                continue;
            };
            for (next, &transition_score) in row {
                let emission_score = model
                    .emissions()
                    .score(next, word)
                    .unwrap_or(UNSEEN_EMISSION_SCORE);
                let candidate = score + transition_score + emission_score;
                let improves = next_frontier
                    .get(next)
                    .map_or(true, |&best| candidate > best);
                if improves {
                    next_frontier.insert(next.clone(), candidate);
                    pointers.insert(next.clone(), state.clone());
                }
            }
        }

        if next_frontier.is_empty() {
            debug_assert!(
                model.transitions().row(START_TAG).is_none(),
                "fronteira vazia no meio da sentença"
            );
            return ViterbiResult::default();
        }

        frontier = next_frontier;
        backpointers.push(pointers);
    }

    // terminação: melhor score global na última fronteira
    let mut best: Option<(&String, f64)> = None;
    for (tag, &score) in &frontier {
        if best.map_or(true, |(_, current)| score > current) {
            best = Some((tag, score));
        }
    }
    let (terminus, score) = best.expect("fronteira final não vazia");
    let mut state = terminus.clone();

    // backtracking: segue a cadeia de backpointers até "#" (exclusivo)
    let mut tags = vec![String::new(); words.len()];
    for position in (0..words.len()).rev() {
        let previous = backpointers[position]
            .get(&state)
            .expect("todo estado da fronteira tem backpointer")
            .clone();
        tags[position] = state;
        state = previous;
    }
    debug_assert_eq!(state, START_TAG);

    ViterbiResult { tags, score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::HmmModel;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_decodes_training_sentence() {
        let model = HmmModel::train(&lines(&["n v"]), &lines(&["cachorro corre"])).unwrap();
        let result = viterbi_decode(&model, &words(&["cachorro", "corre"]));
        assert_eq!(result.tags, vec!["n", "v"]);
        // caminho inteiro com probabilidade 1: score ln(1) + ln(1) + ... = 0
        assert!(result.score.abs() < 1e-12);
    }

    #[test]
    fn test_returns_one_tag_per_word() {
        let model = HmmModel::train(
            &lines(&["art n v", "art n v adv"]),
            &lines(&["o gato dorme", "a chuva caiu ontem"]),
        )
        .unwrap();

        for sentence in [
            words(&["o", "gato", "dorme"]),
            words(&["a", "chuva", "caiu", "ontem"]),
            words(&["o", "gato", "caiu", "ontem"]),
        ] {
            let result = viterbi_decode(&model, &sentence);
            assert_eq!(result.tags.len(), sentence.len());
        }
    }

    #[test]
    fn test_unseen_word_still_yields_full_sequence() {
        let model = HmmModel::train(&lines(&["n v"]), &lines(&["cachorro corre"])).unwrap();
        let result = viterbi_decode(&model, &words(&["cachorro", "late"]));
        // "late" nunca foi vista: recebe a penalidade, mas a sequência sai completa
        assert_eq!(result.tags, vec!["n", "v"]);
        assert!((result.score - UNSEEN_EMISSION_SCORE).abs() < 1e-9);
    }

    #[test]
    fn test_word_unseen_under_every_tag() {
        let model = HmmModel::train(&lines(&["n v"]), &lines(&["cachorro corre"])).unwrap();
        let result = viterbi_decode(&model, &words(&["xyz", "abc"]));
        assert_eq!(result.tags.len(), 2);
        assert!((result.score - 2.0 * UNSEEN_EMISSION_SCORE).abs() < 1e-9);
    }

    #[test]
    fn test_transitions_disambiguate_repeated_word() {
        // "a" aparece como artigo (antes de substantivo) e preposição
        // (depois de numeral); o contexto decide a tag
        let model = HmmModel::train(
            &lines(&["art n v num prep num", "art n v", "art n v"]),
            &lines(&[
                "o time venceu três a um",
                "a casa caiu",
                "a chuva passou",
            ]),
        )
        .unwrap();

        let result = viterbi_decode(
            &model,
            &words(&["o", "time", "venceu", "três", "a", "um"]),
        );
        assert_eq!(result.tags, vec!["art", "n", "v", "num", "prep", "num"]);

        let result = viterbi_decode(&model, &words(&["a", "casa", "caiu"]));
        assert_eq!(result.tags[0], "art");
    }

    #[test]
    fn test_tie_breaks_to_lexicographically_first_tag() {
        // mesmo score exato para as tags "x" e "y": vence a primeira na
        // ordem lexicográfica
        let model = HmmModel::train(&lines(&["x", "y"]), &lines(&["casa", "casa"])).unwrap();
        let result = viterbi_decode(&model, &words(&["casa"]));
        assert_eq!(result.tags, vec!["x"]);
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let model = HmmModel::train(
            &lines(&["art n v", "art n adj"]),
            &lines(&["o gato dorme", "o gato preto"]),
        )
        .unwrap();
        let sentence = words(&["o", "gato", "desconhecido"]);

        let first = viterbi_decode(&model, &sentence);
        for _ in 0..10 {
            assert_eq!(viterbi_decode(&model, &sentence), first);
        }
    }

    #[test]
    fn test_empty_sentence_and_empty_model() {
        let trained = HmmModel::train(&lines(&["n"]), &lines(&["sol"])).unwrap();
        assert!(viterbi_decode(&trained, &[]).tags.is_empty());

        let untrained = HmmModel::train(&[], &[]).unwrap();
        let result = viterbi_decode(&untrained, &words(&["sol"]));
        assert!(result.tags.is_empty());
    }
}
