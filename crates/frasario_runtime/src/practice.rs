//! Interactive practice session.
//!
//! Shows one generated sentence at a time, reads the learner's attempt, then
//! reveals the word-by-word gloss and the pattern used.

use log::debug;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use frasario_foundation::Result;
use frasario_grammar::SentenceGenerator;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::response::SentenceResponse;
use crate::store::VocabularyStore;

/// Counters for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PracticeStats {
    /// Sentences shown
    pub shown: usize,
    /// Sentences the learner attempted
    pub answered: usize,
    /// Sentences skipped with `:skip` or Ctrl+C
    pub skipped: usize,
}

/// What the learner did with one sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Typed an attempt
    Answered(String),
    /// Skipped it
    Skipped,
    /// Ended the session
    Quit,
}

/// The practice loop.
pub struct PracticeSession<E: LineEditor = RustylineEditor, R: RngCore = ChaCha8Rng> {
    editor: E,
    store: VocabularyStore,
    generator: SentenceGenerator,
    rng: R,
    prompt: String,
    stats: PracticeStats,
}

impl<R: RngCore> PracticeSession<RustylineEditor, R> {
    /// Creates a session reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(store: VocabularyStore, rng: R) -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, store, rng))
    }
}

impl<E: LineEditor, R: RngCore> PracticeSession<E, R> {
    /// Creates a session with the given editor.
    pub fn with_editor(editor: E, store: VocabularyStore, rng: R) -> Self {
        Self {
            editor,
            store,
            generator: SentenceGenerator::new(),
            rng,
            prompt: "> ".to_string(),
            stats: PracticeStats::default(),
        }
    }

    /// Replaces the sentence generator.
    #[must_use]
    pub fn with_generator(mut self, generator: SentenceGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the counters so far.
    #[must_use]
    pub const fn stats(&self) -> PracticeStats {
        self.stats
    }

    /// Runs rounds until the learner quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `EmptyVocabulary` if the store has nothing to build sentences
    /// from, or an error if reading input fails.
    pub fn run(&mut self) -> Result<PracticeStats> {
        println!("Translate each sentence. Commands: :skip, :quit, :help (Ctrl+D to exit)");

        while self.round()? != RoundOutcome::Quit {}

        println!(
            "\n{} shown, {} answered, {} skipped",
            self.stats.shown, self.stats.answered, self.stats.skipped
        );
        Ok(self.stats)
    }

    /// Plays one sentence.
    ///
    /// # Errors
    ///
    /// Returns `EmptyVocabulary` if the store has nothing to build sentences
    /// from, or an error if reading input fails.
    pub fn round(&mut self) -> Result<RoundOutcome> {
        let sentence = self.generator.generate(self.store.entries(), &mut self.rng)?;
        let response = SentenceResponse::from_sentence(&sentence, self.store.entries());
        self.stats.shown += 1;

        println!("\n{}", response.source);

        let outcome = self.read_answer()?;
        debug!("{} -> {outcome:?}", response.pattern);

        match &outcome {
            RoundOutcome::Answered(_) => self.stats.answered += 1,
            RoundOutcome::Skipped => self.stats.skipped += 1,
            RoundOutcome::Quit => return Ok(outcome),
        }

        println!("  words:   {}", response.words);
        println!("  gloss:   {}", response.translation);
        println!("  pattern: {}", response.pattern);
        Ok(outcome)
    }

    fn read_answer(&mut self) -> Result<RoundOutcome> {
        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => return Ok(RoundOutcome::Skipped),
                ReadResult::Eof => return Ok(RoundOutcome::Quit),
            };

            let trimmed = line.trim();
            match trimmed {
                ":quit" | ":q" => return Ok(RoundOutcome::Quit),
                ":skip" | ":s" | "" => return Ok(RoundOutcome::Skipped),
                ":help" | ":h" => print_help(),
                cmd if cmd.starts_with(':') => println!("unknown command {cmd}; try :help"),
                answer => {
                    self.editor.add_history(&line);
                    return Ok(RoundOutcome::Answered(answer.to_string()));
                }
            }
        }
    }
}

fn print_help() {
    println!("  :skip  reveal the answer without attempting");
    println!("  :quit  end the session");
    println!("  Type your translation and press Enter to see the gloss.");
}
