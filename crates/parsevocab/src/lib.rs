//! # `parsevocab` Parser Corpus Bookkeeping
//!
//! The vocabulary-and-corpus layer of a transition-based dependency parser
//! trainer.
//!
//! See:
//! * [`vocab`] for the word / tag / char / action tables, OOV tracking, and
//!   versioned persistence.
//! * [`corpus`] for sentences, corpora, reader strategies, and oracle
//!   action recording.
//!
//! ## Crate Features
//!
#![doc = document_features::document_features!()]
//!
//! ## Training and Evaluation Corpora
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//!
//! use parsevocab::corpus::{ConllUCorpusReader, Corpus, ParserTrainingCorpus};
//! use parsevocab::vocab::{CorpusVocabulary, io::save_vocab_path};
//!
//! fn example() -> parsevocab::PVResult<()> {
//!     let vocab = RefCell::new(CorpusVocabulary::new());
//!
//!     let train = ParserTrainingCorpus::new(&vocab, "train.oracle", true)?;
//!     println!("{} singletons", train.singletons().len());
//!
//!     let test = Corpus::new(&vocab, &ConllUCorpusReader::default(), "test.conllu")?;
//!     println!("{} test sentences", test.sentences().len());
//!
//!     save_vocab_path(&vocab.borrow(), "vocab.json")
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod types;
pub mod utility;
pub mod vocab;

#[doc(inline)]
pub use errors::{PVResult, ParseVocabError};
#[doc(inline)]
pub use types::{ActionId, CharId, PosId, ROOT_TOKEN_ID, TokenIndex, WordId};
#[doc(inline)]
pub use vocab::CorpusVocabulary;
