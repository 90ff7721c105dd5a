//! # Vocabulary
//!
//! This module provides the [`CorpusVocabulary`] and its io mechanisms.
//!
//! ## Tables
//!
//! * words - ``{ String <-> WordId }``, with reserved [`BAD0`] (0) and [`UNK`] (1),
//!   and a per-word training flag for OOV tracking.
//! * part-of-speech tags - ``{ String <-> PosId }``.
//! * characters - ``{ String <-> CharId }``, with reserved [`BAD0`] (0).
//! * actions - the ordered action alphabet, and the derived ``action -> arc label`` table.
pub mod arc_labels;
pub mod corpus_vocab;
pub mod io;
pub mod string_table;

#[doc(inline)]
pub use arc_labels::{NO_ARC_LABEL, derive_arc_label};
#[doc(inline)]
pub use corpus_vocab::{BAD0, BAD0_WORD_ID, CorpusVocabulary, ROOT, UNK, UNK_WORD_ID};
#[doc(inline)]
pub use string_table::StringTable;
