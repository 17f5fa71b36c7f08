//! # Normalização de Sentenças
//!
//! Todo texto que entra no sistema (linhas de treinamento, sentenças a
//! etiquetar e gabaritos de avaliação) passa pela mesma normalização:
//! separação por espaço simples, remoção de espaços nas bordas e conversão
//! para minúsculas. Como treino e consulta compartilham esta função, uma
//! palavra vista no treino sempre é encontrada na tabela de emissões.

use serde::{Deserialize, Serialize};

/// Normaliza uma linha de texto em tokens consultáveis no modelo.
///
/// Divide em espaços simples, apara e converte cada token para minúsculas.
/// Fragmentos vazios (gerados por espaços repetidos) são descartados, de
/// modo que linhas de tags e de palavras com o mesmo conteúdo produzem
/// sempre a mesma contagem de tokens.
///
/// # Exemplo
/// ```rust
/// use pos_core::tokenizer::normalize_line;
///
/// let tokens = normalize_line("  O Cachorro  corre ");
/// assert_eq!(tokens, vec!["o", "cachorro", "corre"]);
/// ```
pub fn normalize_line(line: &str) -> Vec<String> {
    line.split(' ')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Uma sentença etiquetada: palavras normalizadas pareadas com as classes
/// gramaticais previstas, uma por palavra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSentence {
    pub words: Vec<String>,
    pub tags: Vec<String>,
}

impl std::fmt::Display for TaggedSentence {
    /// Formato `palavra/classe`, no estilo clássico de corpora etiquetados.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (word, tag) in self.words.iter().zip(&self.tags) {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{word}/{tag}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(
            normalize_line("O Cachorro Corre ."),
            vec!["o", "cachorro", "corre", "."]
        );
    }

    #[test]
    fn test_normalize_drops_empty_fragments() {
        // espaços repetidos não viram tokens vazios
        assert_eq!(normalize_line("  cão   late  "), vec!["cão", "late"]);
        assert!(normalize_line("   ").is_empty());
        assert!(normalize_line("").is_empty());
    }

    #[test]
    fn test_normalize_handles_accented_uppercase() {
        assert_eq!(normalize_line("Água É Vida"), vec!["água", "é", "vida"]);
    }

    #[test]
    fn test_tagged_sentence_display() {
        let tagged = TaggedSentence {
            words: vec!["o".into(), "cachorro".into(), "corre".into()],
            tags: vec!["art".into(), "n".into(), "v".into()],
        };
        assert_eq!(tagged.to_string(), "o/art cachorro/n corre/v");
    }

    #[test]
    fn test_tagged_sentence_json_shape() {
        let tagged = TaggedSentence {
            words: vec!["sol".into()],
            tags: vec!["n".into()],
        };
        let json = serde_json::to_value(&tagged).unwrap();
        assert_eq!(json["words"][0], "sol");
        assert_eq!(json["tags"][0], "n");
    }
}
