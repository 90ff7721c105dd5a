//! # Training Corpora

use std::{
    collections::{BTreeMap, BTreeSet},
    io::BufRead,
    path::Path,
};

use crate::corpus::{Corpus, CorpusReader, OracleParseTransitionsReader, Sentence, SharedVocabulary};
use crate::errors::{PVResult, ParseVocabError};
use crate::types::{ActionId, WordId};

/// A corpus with the oracle action sequence of each sentence.
#[derive(Debug, Clone)]
pub struct TrainingCorpus<'v> {
    corpus: Corpus<'v>,
    correct_act_sent: Vec<Vec<ActionId>>,
    use_spelling: bool,
}

impl<'v> TrainingCorpus<'v> {
    pub(crate) fn empty(vocab: &'v SharedVocabulary) -> Self {
        Self {
            corpus: Corpus::empty(vocab),
            correct_act_sent: Vec::new(),
            use_spelling: false,
        }
    }

    /// Build a training corpus by reading `path` with `reader`.
    pub fn with_reader<R, P>(
        vocab: &'v SharedVocabulary,
        reader: &R,
        path: P,
    ) -> PVResult<Self>
    where
        R: CorpusReader<Self>,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut corpus = Self::empty(vocab);
        reader.read_sentences(path, &mut corpus)?;
        corpus.check_parallel(&path.display().to_string())?;
        Ok(corpus)
    }

    /// Build a training corpus by reading a line reader with `reader`.
    pub fn from_buf_reader<R, B>(
        vocab: &'v SharedVocabulary,
        reader: &R,
        buf: B,
        source_name: &str,
    ) -> PVResult<Self>
    where
        R: CorpusReader<Self>,
        B: BufRead,
    {
        let mut corpus = Self::empty(vocab);
        reader.read_buf(buf, source_name, &mut corpus)?;
        corpus.check_parallel(source_name)?;
        Ok(corpus)
    }

    fn check_parallel(
        &self,
        source_name: &str,
    ) -> PVResult<()> {
        if self.correct_act_sent.len() != self.corpus.sentences().len() {
            return Err(ParseVocabError::format(
                source_name,
                0,
                format!(
                    "{} action sequences for {} sentences",
                    self.correct_act_sent.len(),
                    self.corpus.sentences().len()
                ),
            ));
        }
        Ok(())
    }

    /// Does the model consult character-level spellings for this corpus?
    ///
    /// Set by the reader, from [`OracleParseTransitionsReader::with_spelling`].
    pub fn use_spelling(&self) -> bool {
        self.use_spelling
    }

    /// The underlying corpus.
    pub fn corpus(&self) -> &Corpus<'v> {
        &self.corpus
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &'v SharedVocabulary {
        self.corpus.vocab()
    }

    /// The sentences, in file order.
    pub fn sentences(&self) -> &[Sentence] {
        self.corpus.sentences()
    }

    /// The oracle action sequences; parallel to [`Self::sentences`].
    pub fn correct_act_sent(&self) -> &[Vec<ActionId>] {
        &self.correct_act_sent
    }

    pub(crate) fn set_use_spelling(
        &mut self,
        use_spelling: bool,
    ) {
        self.use_spelling = use_spelling;
    }

    pub(crate) fn corpus_mut(&mut self) -> &mut Corpus<'v> {
        &mut self.corpus
    }

    pub(crate) fn correct_act_sent_mut(&mut self) -> &mut Vec<Vec<ActionId>> {
        &mut self.correct_act_sent
    }
}

/// A parser training corpus, with its singleton training words.
#[derive(Debug, Clone)]
pub struct ParserTrainingCorpus<'v> {
    training: TrainingCorpus<'v>,
    singletons: BTreeSet<WordId>,
}

impl<'v> ParserTrainingCorpus<'v> {
    /// Read an oracle-transition file.
    ///
    /// ## Arguments
    /// * `vocab` - the shared vocabulary.
    /// * `path` - the oracle file.
    /// * `is_training` - is this the training split (as opposed to dev/test)?
    pub fn new<P: AsRef<Path>>(
        vocab: &'v SharedVocabulary,
        path: P,
        is_training: bool,
    ) -> PVResult<Self> {
        Self::with_reader(vocab, &OracleParseTransitionsReader::new(is_training), path)
    }

    /// Read a file with a configured reader.
    ///
    /// ```rust,no_run
    /// use std::cell::RefCell;
    ///
    /// use parsevocab::corpus::{OracleParseTransitionsReader, ParserTrainingCorpus};
    /// use parsevocab::vocab::CorpusVocabulary;
    ///
    /// fn example() -> parsevocab::PVResult<()> {
    ///     let vocab = RefCell::new(CorpusVocabulary::new());
    ///     let reader = OracleParseTransitionsReader::new(false).with_spelling(true);
    ///     let dev = ParserTrainingCorpus::with_reader(&vocab, &reader, "dev.oracle")?;
    ///     assert!(dev.training().use_spelling());
    ///     Ok(())
    /// }
    /// ```
    pub fn with_reader<R, P>(
        vocab: &'v SharedVocabulary,
        reader: &R,
        path: P,
    ) -> PVResult<Self>
    where
        R: CorpusReader<TrainingCorpus<'v>>,
        P: AsRef<Path>,
    {
        let training = TrainingCorpus::with_reader(vocab, reader, path)?;
        Ok(Self::from_training(training))
    }

    /// Read oracle transitions from a line reader.
    pub fn from_buf_reader<B: BufRead>(
        vocab: &'v SharedVocabulary,
        buf: B,
        source_name: &str,
        is_training: bool,
    ) -> PVResult<Self> {
        let reader = OracleParseTransitionsReader::new(is_training);
        Self::with_buf_reader(vocab, &reader, buf, source_name)
    }

    /// Read oracle transitions from a line reader, with a configured reader.
    pub fn with_buf_reader<R, B>(
        vocab: &'v SharedVocabulary,
        reader: &R,
        buf: B,
        source_name: &str,
    ) -> PVResult<Self>
    where
        R: CorpusReader<TrainingCorpus<'v>>,
        B: BufRead,
    {
        let training = TrainingCorpus::from_buf_reader(vocab, reader, buf, source_name)?;
        Ok(Self::from_training(training))
    }

    fn from_training(training: TrainingCorpus<'v>) -> Self {
        let mut corpus = Self {
            training,
            singletons: BTreeSet::new(),
        };
        corpus.count_singletons();
        corpus
    }

    /// Recompute the singleton set.
    ///
    /// Singletons are training words occurring exactly once in the corpus.
    pub fn count_singletons(&mut self) {
        let mut counts: BTreeMap<WordId, usize> = BTreeMap::new();
        for sentence in self.training.sentences() {
            for &word in sentence.words.values() {
                *counts.entry(word).or_default() += 1;
            }
        }

        let vocab = self.training.vocab().borrow();
        self.singletons = counts
            .into_iter()
            .filter(|&(word, count)| count == 1 && vocab.is_training_word(word))
            .map(|(word, _)| word)
            .collect();

        log::debug!(
            "{} singletons among {} distinct words",
            self.singletons.len(),
            vocab.count_words()
        );
    }

    /// The singleton training words.
    pub fn singletons(&self) -> &BTreeSet<WordId> {
        &self.singletons
    }

    /// The underlying training corpus.
    pub fn training(&self) -> &TrainingCorpus<'v> {
        &self.training
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &'v SharedVocabulary {
        self.training.vocab()
    }

    /// The sentences, in file order.
    pub fn sentences(&self) -> &[Sentence] {
        self.training.sentences()
    }

    /// The oracle action sequences; parallel to [`Self::sentences`].
    pub fn correct_act_sent(&self) -> &[Vec<ActionId>] {
        self.training.correct_act_sent()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::vocab::CorpusVocabulary;

    const ORACLE: &str = "\
the/DET dog/NOUN saw/VERB the/DET cat/NOUN
SHIFT
SHIFT
LEFT-ARC(det)

the/DET cat/NOUN ran/VERB
SHIFT
";

    #[test]
    fn test_singletons() {
        let vocab = RefCell::new(CorpusVocabulary::new());
        let corpus =
            ParserTrainingCorpus::from_buf_reader(&vocab, ORACLE.as_bytes(), "mem", true).unwrap();

        let vocab = vocab.borrow();
        let the = vocab.get_word("the");
        let dog = vocab.get_word("dog");
        let saw = vocab.get_word("saw");
        let cat = vocab.get_word("cat");
        let ran = vocab.get_word("ran");

        let singletons = corpus.singletons();
        assert!(singletons.contains(&dog));
        assert!(singletons.contains(&saw));
        assert!(singletons.contains(&ran));
        assert!(!singletons.contains(&the));
        assert!(!singletons.contains(&cat));
        assert_eq!(singletons.len(), 3);
    }

    #[test]
    fn test_singletons_exclude_non_training_words() {
        let vocab = RefCell::new(CorpusVocabulary::new());
        vocab.borrow_mut().get_or_add_word("saw", false);

        // Dev reads never mark words as training words.
        let dev =
            ParserTrainingCorpus::from_buf_reader(&vocab, ORACLE.as_bytes(), "mem", false).unwrap();
        assert!(dev.singletons().is_empty());
        assert_eq!(dev.sentences().len(), 2);
    }

    #[test]
    fn test_singleton_counts_by_id() {
        let vocab = RefCell::new(CorpusVocabulary::new());
        {
            let mut vocab = vocab.borrow_mut();
            for word in ["w2", "w3", "w4", "w5", "w6", "w7"] {
                vocab.get_or_add_word(word, true);
            }
        }
        let mut corpus = ParserTrainingCorpus::from_training(TrainingCorpus::empty(&vocab));

        let mut sentence = Sentence::default();
        sentence.words.insert(0, 3);
        sentence.words.insert(1, 7);
        sentence.words.insert(2, 3);
        let mut other = Sentence::default();
        other.words.insert(0, 3);
        corpus.training.corpus_mut().push_sentence(sentence);
        corpus.training.corpus_mut().push_sentence(other);

        corpus.count_singletons();
        assert!(corpus.singletons().contains(&7));
        assert!(!corpus.singletons().contains(&3));
    }

    #[test]
    fn test_spelling_flag() {
        let vocab = RefCell::new(CorpusVocabulary::new());
        let train =
            ParserTrainingCorpus::from_buf_reader(&vocab, ORACLE.as_bytes(), "mem", true).unwrap();
        assert!(!train.training().use_spelling());

        let reader = OracleParseTransitionsReader::new(false).with_spelling(true);
        let dev = ParserTrainingCorpus::with_buf_reader(
            &vocab,
            &reader,
            "the/DET yak/NOUN\nSHIFT\n".as_bytes(),
            "dev",
        )
        .unwrap();
        assert!(dev.training().use_spelling());

        // Spelled dev words are in the vocabulary, but never singletons.
        let yak = vocab.borrow().get_word("yak");
        assert_eq!(dev.sentences()[0].words[&1], yak);
        assert!(!vocab.borrow().is_training_word(yak));
        assert!(!dev.singletons().contains(&yak));
        assert!(dev.singletons().contains(&vocab.borrow().get_word("the")));
    }
}
