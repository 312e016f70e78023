//! Frasario CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use frasario_foundation::Difficulty;
use frasario_grammar::conjugation::conjugate_for;
use frasario_grammar::{
    Number, Person, SUBJECTS, SentenceGenerator, classify, conjugate, resolve_articles,
    suggest_category,
};
use frasario_runtime::{PracticeSession, SentenceResponse, VocabularyStore, init_logging};

#[derive(Parser)]
#[command(
    name = "frasario",
    about = "Italian sentence drills from your own vocabulary",
    version
)]
struct Cli {
    /// Vocabulary file (.csv or .json)
    #[arg(long, short = 'f', global = true, default_value = "vocabulary.csv")]
    vocab: PathBuf,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Only use entries in this category
    #[arg(long, global = true)]
    category: Option<String>,

    /// Only use entries at this difficulty (1-3)
    #[arg(long, global = true, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Relabel uncategorised entries before filtering
    #[arg(long, global = true)]
    auto_categorize: bool,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print generated sentences
    Generate {
        /// Number of sentences
        #[arg(long, short = 'n', default_value = "5")]
        count: usize,
    },

    /// Start an interactive translation drill
    Practice,

    /// Suggest categories for vocabulary entries
    Categorize {
        /// Include entries that already have a category
        #[arg(long)]
        all: bool,
    },

    /// Show gender, sound class and articles for words
    Classify {
        /// Words to classify
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Conjugate essere, avere, andare or volere in the present tense
    Conjugate {
        /// Verb infinitive
        lemma: String,

        /// Only this person (1-3)
        #[arg(long, short, value_parser = parse_person)]
        person: Option<Person>,

        /// Plural form of --person
        #[arg(long, requires = "person")]
        plural: bool,
    },
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    let level: u8 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    Difficulty::new(level).map_err(|e| e.to_string())
}

fn parse_person(s: &str) -> Result<Person, String> {
    s.parse::<u8>()
        .ok()
        .and_then(Person::from_ordinal)
        .ok_or_else(|| format!("person must be 1, 2 or 3, got {s}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Classify { words } => {
            classify_words(words, cli.format)?;
            return Ok(());
        }
        Command::Categorize { all } => {
            let store = VocabularyStore::load(&cli.vocab)?;
            categorize(&store, *all, cli.format)?;
            return Ok(());
        }
        Command::Conjugate {
            lemma,
            person,
            plural,
        } => {
            conjugate_verb(lemma, *person, *plural, cli.format)?;
            return Ok(());
        }
        Command::Generate { .. } | Command::Practice => {}
    }

    let store = load_filtered(&cli)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match cli.command {
        Command::Generate { count } => {
            let generator = SentenceGenerator::new();
            let mut responses = Vec::with_capacity(count);
            for _ in 0..count {
                let sentence = generator.generate(store.entries(), &mut rng)?;
                responses.push(SentenceResponse::from_sentence(&sentence, store.entries()));
            }
            print_responses(&responses, cli.format)?;
        }
        Command::Practice => {
            PracticeSession::new(store, rng)?.run()?;
        }
        Command::Classify { .. } | Command::Categorize { .. } | Command::Conjugate { .. } => {}
    }

    Ok(())
}

fn load_filtered(cli: &Cli) -> Result<VocabularyStore, Box<dyn std::error::Error>> {
    let mut store = VocabularyStore::load(&cli.vocab)?;
    if cli.auto_categorize {
        let changed = store.auto_categorize();
        info!("auto-categorised {changed} entries");
    }
    Ok(store.filter(cli.category.as_deref(), cli.difficulty))
}

fn print_responses(
    responses: &[SentenceResponse],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(responses)?),
        OutputFormat::Plain => {
            for r in responses {
                println!("{}", r.source);
                println!("    {}", r.words);
            }
        }
    }
    Ok(())
}

fn categorize(
    store: &VocabularyStore,
    all: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<_> = store
        .entries()
        .iter()
        .filter(|e| all || e.in_category(frasario_foundation::DEFAULT_CATEGORY))
        .map(|e| (e, suggest_category(&e.source_term)))
        .collect();

    match format {
        OutputFormat::Json => {
            let value: Vec<_> = rows
                .iter()
                .map(|(e, suggested)| {
                    json!({
                        "source": e.source_term,
                        "category": e.category,
                        "suggested": suggested,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            for (e, suggested) in rows {
                println!("{:<24} {:<12} -> {suggested}", e.source_term, e.category);
            }
        }
    }
    Ok(())
}

fn classify_words(words: &[String], format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let value: Vec<_> = words
                .iter()
                .map(|w| {
                    let profile = classify(w);
                    json!({
                        "word": w,
                        "profile": profile,
                        "articles": resolve_articles(profile),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            for w in words {
                let profile = classify(w);
                let articles = resolve_articles(profile);
                println!(
                    "{w}: {:?} {:?} {:?}  {}  {}",
                    profile.gender,
                    profile.number,
                    profile.sound,
                    articles.with_definite(w),
                    articles.with_indefinite(w)
                );
            }
        }
    }
    Ok(())
}

fn conjugate_verb(
    lemma: &str,
    person: Option<Person>,
    plural: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(person) = person {
        let number = if plural {
            Number::Plural
        } else {
            Number::Singular
        };
        let form = conjugate(lemma, person, number)?;
        match format {
            OutputFormat::Json => println!("{}", json!({ "lemma": lemma, "form": form })),
            OutputFormat::Plain => println!("{form}"),
        }
        return Ok(());
    }

    let forms = SUBJECTS
        .iter()
        .map(|s| Ok((s.pronoun, conjugate_for(lemma, *s)?)))
        .collect::<frasario_foundation::Result<Vec<_>>>()?;
    match format {
        OutputFormat::Json => {
            let value: Vec<_> = forms
                .iter()
                .map(|(pronoun, form)| json!({ "subject": pronoun, "form": form }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            for (pronoun, form) in forms {
                println!("{pronoun:<5} {form}");
            }
        }
    }
    Ok(())
}
