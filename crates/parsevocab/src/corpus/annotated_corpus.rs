//! # Annotated Corpus

use std::{io::BufRead, path::Path};

use crate::corpus::{CorpusReader, Sentence, SharedVocabulary};
use crate::errors::PVResult;

/// An ordered list of sentences, in file order.
#[derive(Debug, Clone)]
pub struct Corpus<'v> {
    sentences: Vec<Sentence>,
    vocab: &'v SharedVocabulary,
}

impl<'v> Corpus<'v> {
    /// An empty corpus, for a reader to populate.
    pub(crate) fn empty(vocab: &'v SharedVocabulary) -> Self {
        Self {
            sentences: Vec::new(),
            vocab,
        }
    }

    /// Build a corpus by reading `path` with `reader`.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary to resolve, and grow, ids against.
    /// * `reader` - the format strategy.
    /// * `path` - the file to read.
    pub fn new<R, P>(
        vocab: &'v SharedVocabulary,
        reader: &R,
        path: P,
    ) -> PVResult<Self>
    where
        R: CorpusReader<Self>,
        P: AsRef<Path>,
    {
        let mut corpus = Self::empty(vocab);
        reader.read_sentences(path.as_ref(), &mut corpus)?;
        Ok(corpus)
    }

    /// Build a corpus by reading a line reader with `reader`.
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
        Ok(corpus)
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &'v SharedVocabulary {
        self.vocab
    }

    /// The sentences, in file order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Append a sentence; for use by readers.
    pub fn push_sentence(
        &mut self,
        sentence: Sentence,
    ) {
        self.sentences.push(sentence);
    }
}
