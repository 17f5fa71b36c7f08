//! # pos-core: Etiquetagem Morfossintática em Português Brasileiro
//!
//! Este crate implementa um etiquetador de classes gramaticais (POS tagger)
//! baseado em um Modelo Oculto de Markov (HMM) de bigramas, treinado por
//! contagem supervisionada e decodificado pelo algoritmo de Viterbi. Ele foi
//! projetado para ser didático e modular: cada etapa do sistema é um módulo
//! independente e testável.
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui e é transformado passo a passo:
//!
//! 1. **Normalização** ([`tokenizer`]): linhas viram tokens minúsculos,
//!    divididos por espaço simples.
//! 2. **Contagem** ([`counts`]): transições (tag anterior para tag atual) e
//!    emissões (tag para palavra) acumuladas em tabelas de frequência com
//!    total explícito por linha.
//! 3. **Normalização Probabilística** ([`counts`]): cada linha vira
//!    log-probabilidades `ln(contagem / total)`.
//! 4. **Decodificação** ([`viterbi`]): programação dinâmica sobre a
//!    fronteira de tags alcançáveis, com backpointers para reconstruir a
//!    melhor sequência.
//! 5. **Avaliação** ([`accuracy`] e [`crossval`]): acurácia contra
//!    gabaritos e validação cruzada particionada.
//!
//! O módulo [`hmm`] amarra as etapas 1 a 4 no tipo [`HmmModel`]; o módulo
//! [`corpus`] traz um corpus anotado embutido para treino e demonstração.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pos_core::{corpus, HmmModel};
//!
//! // 1. Treina com o corpus embutido (ou com qualquer par de corpora
//! //    alinhados linha a linha)
//! let (tag_lines, word_lines) = corpus::paired_lines(&corpus::get_corpus());
//! let model = HmmModel::train(&tag_lines, &word_lines).expect("corpus embutido alinhado");
//!
//! // 2. Etiqueta uma sentença, uma classe gramatical por palavra
//! let tags = model.predict("O cachorro corre no parque .");
//! assert_eq!(tags.len(), 6);
//! ```
//!
//! Depois de treinado, o modelo é somente leitura: pode ser compartilhado
//! entre threads e usado por avaliações em lote em paralelo.

pub mod accuracy;
pub mod corpus;
pub mod counts;
pub mod crossval;
pub mod error;
pub mod hmm;
pub mod tokenizer;
pub mod viterbi;

pub use accuracy::{evaluate, evaluate_corpus, Scoreboard};
pub use crossval::{aggregate, cross_validate, FoldReport};
pub use error::{Result, TaggerError};
pub use hmm::{count_tables, HmmModel, START_TAG};
pub use tokenizer::{normalize_line, TaggedSentence};
pub use viterbi::{viterbi_decode, ViterbiResult, UNSEEN_EMISSION_SCORE};
