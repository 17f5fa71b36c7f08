//! Front ends de console do etiquetador: REPL interativo, avaliação em
//! lote contra arquivos de teste e validação cruzada particionada. Todos
//! são camadas finas sobre o mesmo par `predict`/`evaluate` do `pos-core`;
//! nenhuma lógica de modelo vive aqui.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pos_core::accuracy::evaluate_corpus;
use pos_core::corpus;
use pos_core::crossval::{aggregate, cross_validate};
use pos_core::HmmModel;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pos-cli",
    about = "Etiquetador morfossintático (POS) via HMM e algoritmo de Viterbi",
    version
)]
struct Cli {
    /// Emite resultados em JSON em vez de texto simples
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Console interativo: lê sentenças e imprime palavra/classe
    Repl {
        /// Arquivo com uma sequência de tags por linha
        #[arg(long)]
        train_tags: Option<PathBuf>,
        /// Arquivo com a sentença correspondente a cada linha de tags
        #[arg(long)]
        train_sentences: Option<PathBuf>,
    },
    /// Treina com um corpus e avalia a acurácia contra um corpus de teste
    Eval {
        #[arg(long)]
        train_tags: PathBuf,
        #[arg(long)]
        train_sentences: PathBuf,
        #[arg(long)]
        test_tags: PathBuf,
        #[arg(long)]
        test_sentences: PathBuf,
    },
    /// Validação cruzada particionada sobre um único corpus etiquetado
    Crossval {
        #[arg(long)]
        tags: Option<PathBuf>,
        #[arg(long)]
        sentences: Option<PathBuf>,
        /// Número de partições
        #[arg(long, default_value_t = 5)]
        folds: usize,
    },
    /// Etiqueta as sentenças de demonstração do corpus embutido
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    match cli.command {
        Command::Repl {
            train_tags,
            train_sentences,
        } => {
            let model = load_model(train_tags.as_deref(), train_sentences.as_deref())?;
            run_repl(&model, cli.json)
        }
        Command::Eval {
            train_tags,
            train_sentences,
            test_tags,
            test_sentences,
        } => {
            let model = load_model(Some(train_tags.as_path()), Some(train_sentences.as_path()))?;
            let board = evaluate_corpus(
                &model,
                &read_lines(&test_sentences)?,
                &read_lines(&test_tags)?,
            );
            if cli.json {
                println!("{}", serde_json::to_string(&board)?);
            } else {
                println!("{board}");
            }
            Ok(())
        }
        Command::Crossval {
            tags,
            sentences,
            folds,
        } => {
            let (tag_lines, word_lines) = load_corpus(tags.as_deref(), sentences.as_deref())?;
            let reports = cross_validate(&tag_lines, &word_lines, folds)?;
            if cli.json {
                println!("{}", serde_json::to_string(&reports)?);
            } else {
                for report in &reports {
                    println!("partição {}: {}", report.fold, report.scoreboard);
                }
                println!("agregado: {}", aggregate(&reports));
            }
            Ok(())
        }
        Command::Demo => {
            let model = load_model(None, None)?;
            for sentence in corpus::demo_sentences() {
                let tagged = model.tag_line(sentence);
                if cli.json {
                    println!("{}", serde_json::to_string(&tagged)?);
                } else {
                    println!("{tagged}");
                }
            }
            Ok(())
        }
    }
}

/// Lê um arquivo de corpus como vetor de linhas.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("falha ao ler {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Carrega os dois corpora alinhados, dos arquivos informados ou do corpus
/// embutido quando nenhum arquivo é passado.
fn load_corpus(
    tags: Option<&Path>,
    sentences: Option<&Path>,
) -> Result<(Vec<String>, Vec<String>)> {
    match (tags, sentences) {
        (Some(tags), Some(sentences)) => Ok((read_lines(tags)?, read_lines(sentences)?)),
        (None, None) => {
            info!("sem corpus externo; usando o corpus embutido");
            Ok(corpus::paired_lines(&corpus::get_corpus()))
        }
        _ => bail!("as opções de tags e de sentenças devem ser informadas juntas"),
    }
}

fn load_model(tags: Option<&Path>, sentences: Option<&Path>) -> Result<HmmModel> {
    let (tag_lines, word_lines) = load_corpus(tags, sentences)?;
    Ok(HmmModel::train(&tag_lines, &word_lines)?)
}

/// Loop interativo no estilo clássico: uma sentença por linha, `QUIT` para
/// encerrar (fim de entrada também encerra).
fn run_repl(model: &HmmModel, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        println!("Digite a sentença a ser etiquetada. Digite 'QUIT' para sair");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let sentence = line.trim();
        if sentence == "QUIT" {
            break;
        }
        if sentence.is_empty() {
            continue;
        }

        let tagged = model.tag_line(sentence);
        if json {
            println!("{}", serde_json::to_string(&tagged)?);
        } else {
            println!("{tagged}");
        }
    }
    Ok(())
}
