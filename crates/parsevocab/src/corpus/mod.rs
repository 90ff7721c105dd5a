//! # Corpora
//!
//! A [`Corpus`] is an ordered list of [`Sentence`]s, built once by a
//! [`CorpusReader`] against a [`SharedVocabulary`] which it does not own.
//!
//! Training corpora additionally record the oracle action sequence of each
//! sentence:
//! * [`TrainingCorpus`] - sentences plus ``correct_act_sent``,
//! * [`ParserTrainingCorpus`] - a [`TrainingCorpus`] plus its singleton words.
//!
//! ## Building a Training and a Dev Corpus
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//!
//! use parsevocab::{corpus::ParserTrainingCorpus, vocab::CorpusVocabulary};
//!
//! fn example() -> parsevocab::PVResult<()> {
//!     let vocab = RefCell::new(CorpusVocabulary::new());
//!     let train = ParserTrainingCorpus::new(&vocab, "train.oracle", true)?;
//!     let dev = ParserTrainingCorpus::new(&vocab, "dev.oracle", false)?;
//!
//!     println!(
//!         "{} train / {} dev sentences; {} words",
//!         train.sentences().len(),
//!         dev.sentences().len(),
//!         vocab.borrow().count_words()
//!     );
//!     Ok(())
//! }
//! ```

use std::{
    cell::RefCell,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::PVResult;
use crate::vocab::CorpusVocabulary;

pub mod annotated_corpus;
pub mod readers;
pub mod sentence;
pub mod training_corpus;

#[doc(inline)]
pub use annotated_corpus::Corpus;
#[doc(inline)]
pub use readers::{ConllUCorpusReader, OracleParseTransitionsReader, OracleTransitionsRecorder, TagColumn};
#[doc(inline)]
pub use sentence::{Sentence, SentenceMap, SentenceUnkMap};
#[doc(inline)]
pub use training_corpus::{ParserTrainingCorpus, TrainingCorpus};

/// A vocabulary shared, and grown, by the corpora built against it.
///
/// The vocabulary must outlive every corpus referencing it.
pub type SharedVocabulary = RefCell<CorpusVocabulary>;

/// A strategy which parses an external file into a corpus of type `C`.
///
/// A failing read may have grown the vocabulary; the corpus under
/// construction is discarded by its constructor.
pub trait CorpusReader<C> {
    /// Read sentences from a line reader into `corpus`.
    ///
    /// ## Arguments
    /// * `reader` - the line reader.
    /// * `source_name` - the label used in error messages.
    /// * `corpus` - the corpus to populate.
    fn read_buf<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
        corpus: &mut C,
    ) -> PVResult<()>;

    /// Read sentences from a file into `corpus`.
    fn read_sentences(
        &self,
        path: &Path,
        corpus: &mut C,
    ) -> PVResult<()> {
        let reader = BufReader::new(File::open(path)?);
        self.read_buf(reader, &path.display().to_string(), corpus)
    }
}
