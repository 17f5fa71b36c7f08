//! Erros do etiquetador.
//!
//! Todas as operações do crate são determinísticas e puras: não há nada
//! transitório para repetir. Os erros abaixo indicam entrada de treinamento
//! malformada ou configuração inválida, nunca falha de decodificação.

use thiserror::Error;

/// Erros que podem ocorrer ao treinar ou validar um modelo.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaggerError {
    /// Os dois corpora de treinamento não formam um par casado: cada linha
    /// de tags deve corresponder a uma linha de sentença.
    #[error("corpora de treinamento desalinhados: {tag_lines} linhas de tags para {word_lines} linhas de sentenças")]
    MisalignedCorpora { tag_lines: usize, word_lines: usize },

    /// Uma sentença do corpus tem quantidade de tags diferente da
    /// quantidade de palavras. A linha é 1-indexada.
    #[error("sentença {line}: {tags} tags para {words} palavras")]
    TokenCountMismatch {
        line: usize,
        tags: usize,
        words: usize,
    },

    /// Configuração inválida da validação cruzada: são necessárias pelo
    /// menos 2 partições e pelo menos uma sentença por partição.
    #[error("número de partições inválido para o corpus: {folds}")]
    InvalidFoldCount { folds: usize },
}

/// Alias de `Result` para as operações do etiquetador.
pub type Result<T> = std::result::Result<T, TaggerError>;
