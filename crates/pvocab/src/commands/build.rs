use std::cell::RefCell;

use parsevocab::{
    CorpusVocabulary,
    corpus::{OracleParseTransitionsReader, ParserTrainingCorpus},
    vocab::io::load_vocab_path_into,
};

use crate::{
    input_output::VocabOutputArgs,
    logging::{LogArgs, Report},
};

/// Args for the build command.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Training oracle-transition files.
    #[arg(required = true)]
    files: Vec<String>,

    /// Dev oracle-transition files; their words are looked up, not added, unless `--spelling`.
    #[arg(long)]
    dev: Vec<String>,

    /// Add dev words to the vocabulary, for character-level spelling, instead of mapping them to UNK.
    #[arg(long)]
    spelling: bool,

    /// A saved vocabulary to start from.
    #[arg(long)]
    init: Option<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: VocabOutputArgs,
}

impl BuildArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(Report::Logged)?;

        let mut vocab = CorpusVocabulary::new();
        if let Some(path) = &self.init {
            load_vocab_path_into(path, &mut vocab)?;
        }
        let vocab = RefCell::new(vocab);

        log::info!("Reading training files:");
        for (idx, path) in self.files.iter().enumerate() {
            let corpus = ParserTrainingCorpus::new(&vocab, path, true)?;
            log::info!(
                "{idx}: {path}: {} sentences, {} actions, {} singletons",
                corpus.sentences().len(),
                corpus.correct_act_sent().iter().map(Vec::len).sum::<usize>(),
                corpus.singletons().len()
            );
        }

        if !self.dev.is_empty() {
            log::info!("Reading dev files:");
        }
        let dev_reader = OracleParseTransitionsReader::new(false).with_spelling(self.spelling);
        for (idx, path) in self.dev.iter().enumerate() {
            let corpus = ParserTrainingCorpus::with_reader(&vocab, &dev_reader, path)?;
            let oov: usize = corpus
                .sentences()
                .iter()
                .map(|s| s.unk_surface_forms.len())
                .sum();
            log::info!(
                "{idx}: {path}: {} sentences, {oov} unknown tokens",
                corpus.sentences().len()
            );
        }

        let vocab = vocab.into_inner();
        log::info!(
            "Vocabulary: {} words, {} tags, {} chars, {} actions",
            vocab.count_words(),
            vocab.count_pos(),
            vocab.count_chars(),
            vocab.count_actions()
        );

        self.output.write_vocab(&vocab)
    }
}
