//! # Corpus em Português Brasileiro com Anotações Morfossintáticas
//!
//! Corpus de sentenças anotadas manualmente, uma classe gramatical por
//! palavra, cobrindo domínios temáticos variados. Serve de material de
//! treinamento embutido para demonstração e testes: a biblioteca funciona
//! sem nenhum arquivo externo.
//!
//! ## Tagset
//!
//! | Tag   | Classe               | Exemplos                |
//! |-------|----------------------|-------------------------|
//! | art   | Artigo               | o, a, um, duas          |
//! | n     | Substantivo comum    | cachorro, vacina, lei   |
//! | nprop | Substantivo próprio  | Pedro                   |
//! | adj   | Adjetivo             | novo, forte, básica     |
//! | num   | Numeral              | dois, três, 1822        |
//! | pron  | Pronome              | ela, eles               |
//! | v     | Verbo                | corre, venceu, explicou |
//! | adv   | Advérbio             | ontem, rapidamente      |
//! | prep  | Preposição           | de, com, em, por        |
//! | conj  | Conjunção            | e, mas                  |
//! | pont  | Pontuação            | . ,                     |
//!
//! A pontuação é token próprio nas sentenças (separada por espaço), pois a
//! normalização divide apenas em espaços simples.

/// Uma sentença anotada: cada palavra pareada com sua classe gramatical.
pub struct AnnotatedSentence {
    /// O texto completo da sentença, já com pontuação separada por espaço.
    pub text: &'static str,
    /// Domínio temático (utilizado para inspeção e demonstração).
    pub domain: &'static str,
    /// Pares (palavra, classe gramatical).
    /// Exemplo: `[("O", "art"), ("cachorro", "n"), ("corre", "v")]`
    pub annotations: &'static [(&'static str, &'static str)],
}

/// Retorna o corpus anotado completo.
pub fn get_corpus() -> Vec<AnnotatedSentence> {
    vec![
        // ===== SAÚDE =====
        AnnotatedSentence {
            text: "A vacina chegou ao posto de saúde ontem .",
            domain: "saúde",
            annotations: &[
                ("A", "art"), ("vacina", "n"), ("chegou", "v"), ("ao", "prep"),
                ("posto", "n"), ("de", "prep"), ("saúde", "n"), ("ontem", "adv"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "O médico examinou o paciente com calma .",
            domain: "saúde",
            annotations: &[
                ("O", "art"), ("médico", "n"), ("examinou", "v"), ("o", "art"),
                ("paciente", "n"), ("com", "prep"), ("calma", "n"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "Dois hospitais novos abriram na capital .",
            domain: "saúde",
            annotations: &[
                ("Dois", "num"), ("hospitais", "n"), ("novos", "adj"), ("abriram", "v"),
                ("na", "prep"), ("capital", "n"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "A enfermeira preparou a sala , e o médico chegou .",
            domain: "saúde",
            annotations: &[
                ("A", "art"), ("enfermeira", "n"), ("preparou", "v"), ("a", "art"),
                ("sala", "n"), (",", "pont"), ("e", "conj"), ("o", "art"),
                ("médico", "n"), ("chegou", "v"), (".", "pont"),
            ],
        },

        // ===== HISTÓRIA =====
        AnnotatedSentence {
            text: "Dom Pedro proclamou a independência em 1822 .",
            domain: "história",
            annotations: &[
                ("Dom", "nprop"), ("Pedro", "nprop"), ("proclamou", "v"), ("a", "art"),
                ("independência", "n"), ("em", "prep"), ("1822", "num"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "A princesa assinou a lei em maio .",
            domain: "história",
            annotations: &[
                ("A", "art"), ("princesa", "n"), ("assinou", "v"), ("a", "art"),
                ("lei", "n"), ("em", "prep"), ("maio", "n"), (".", "pont"),
            ],
        },

        // ===== ECONOMIA =====
        AnnotatedSentence {
            text: "O banco central manteve a taxa básica ontem .",
            domain: "economia",
            annotations: &[
                ("O", "art"), ("banco", "n"), ("central", "adj"), ("manteve", "v"),
                ("a", "art"), ("taxa", "n"), ("básica", "adj"), ("ontem", "adv"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "A empresa anunciou um lucro recorde neste trimestre .",
            domain: "economia",
            annotations: &[
                ("A", "art"), ("empresa", "n"), ("anunciou", "v"), ("um", "art"),
                ("lucro", "n"), ("recorde", "adj"), ("neste", "prep"), ("trimestre", "n"), (".", "pont"),
            ],
        },

        // ===== ESPORTES =====
        AnnotatedSentence {
            text: "O time venceu o clássico por três a um .",
            domain: "esportes",
            annotations: &[
                ("O", "art"), ("time", "n"), ("venceu", "v"), ("o", "art"),
                ("clássico", "n"), ("por", "prep"), ("três", "num"), ("a", "prep"),
                ("um", "num"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "Ela correu a maratona , mas perdeu o pódio .",
            domain: "esportes",
            annotations: &[
                ("Ela", "pron"), ("correu", "v"), ("a", "art"), ("maratona", "n"),
                (",", "pont"), ("mas", "conj"), ("perdeu", "v"), ("o", "art"),
                ("pódio", "n"), (".", "pont"),
            ],
        },

        // ===== CULTURA =====
        AnnotatedSentence {
            text: "O escritor publicou um romance novo .",
            domain: "cultura",
            annotations: &[
                ("O", "art"), ("escritor", "n"), ("publicou", "v"), ("um", "art"),
                ("romance", "n"), ("novo", "adj"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "A banda tocou duas músicas no festival .",
            domain: "cultura",
            annotations: &[
                ("A", "art"), ("banda", "n"), ("tocou", "v"), ("duas", "num"),
                ("músicas", "n"), ("no", "prep"), ("festival", "n"), (".", "pont"),
            ],
        },

        // ===== MEIO AMBIENTE =====
        AnnotatedSentence {
            text: "A chuva forte alagou o centro da cidade .",
            domain: "meio ambiente",
            annotations: &[
                ("A", "art"), ("chuva", "n"), ("forte", "adj"), ("alagou", "v"),
                ("o", "art"), ("centro", "n"), ("da", "prep"), ("cidade", "n"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "O rio subiu rapidamente depois da tempestade .",
            domain: "meio ambiente",
            annotations: &[
                ("O", "art"), ("rio", "n"), ("subiu", "v"), ("rapidamente", "adv"),
                ("depois", "adv"), ("da", "prep"), ("tempestade", "n"), (".", "pont"),
            ],
        },

        // ===== TECNOLOGIA =====
        AnnotatedSentence {
            text: "O satélite enviou imagens novas da floresta .",
            domain: "tecnologia",
            annotations: &[
                ("O", "art"), ("satélite", "n"), ("enviou", "v"), ("imagens", "n"),
                ("novas", "adj"), ("da", "prep"), ("floresta", "n"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "Eles testaram o sistema e aprovaram a mudança .",
            domain: "tecnologia",
            annotations: &[
                ("Eles", "pron"), ("testaram", "v"), ("o", "art"), ("sistema", "n"),
                ("e", "conj"), ("aprovaram", "v"), ("a", "art"), ("mudança", "n"), (".", "pont"),
            ],
        },

        // ===== EDUCAÇÃO =====
        AnnotatedSentence {
            text: "A professora explicou a lição com exemplos claros .",
            domain: "educação",
            annotations: &[
                ("A", "art"), ("professora", "n"), ("explicou", "v"), ("a", "art"),
                ("lição", "n"), ("com", "prep"), ("exemplos", "n"), ("claros", "adj"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "O aluno leu o livro e escreveu um resumo curto .",
            domain: "educação",
            annotations: &[
                ("O", "art"), ("aluno", "n"), ("leu", "v"), ("o", "art"),
                ("livro", "n"), ("e", "conj"), ("escreveu", "v"), ("um", "art"),
                ("resumo", "n"), ("curto", "adj"), (".", "pont"),
            ],
        },

        // ===== DESAMBIGUAÇÃO =====
        AnnotatedSentence {
            text: "A casa nova custa caro .",
            domain: "desambiguação",
            annotations: &[
                ("A", "art"), ("casa", "n"), ("nova", "adj"), ("custa", "v"),
                ("caro", "adv"), (".", "pont"),
            ],
        },
        AnnotatedSentence {
            text: "Ele viu a menina com o telescópio ontem .",
            domain: "desambiguação",
            annotations: &[
                ("Ele", "pron"), ("viu", "v"), ("a", "art"), ("menina", "n"),
                ("com", "prep"), ("o", "art"), ("telescópio", "n"), ("ontem", "adv"), (".", "pont"),
            ],
        },
    ]
}

/// Converte o corpus anotado nos dois corpora alinhados que o treinamento
/// consome: uma linha de tags e uma linha de palavras por sentença.
pub fn paired_lines(corpus: &[AnnotatedSentence]) -> (Vec<String>, Vec<String>) {
    let tag_lines = corpus
        .iter()
        .map(|sentence| {
            sentence
                .annotations
                .iter()
                .map(|(_, tag)| *tag)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let word_lines = corpus
        .iter()
        .map(|sentence| {
            sentence
                .annotations
                .iter()
                .map(|(word, _)| *word)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    (tag_lines, word_lines)
}

/// Sentenças de demonstração para o front end interativo. Misturam
/// vocabulário do corpus com palavras nunca vistas no treino.
pub fn demo_sentences() -> Vec<&'static str> {
    vec![
        "O cachorro corre no parque .",
        "A médica examinou o resultado ontem .",
        "Eles venceram o campeonato em maio .",
        "A chuva alagou a cidade , e o rio subiu .",
    ]
}
