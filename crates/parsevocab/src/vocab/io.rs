//! # Vocabulary IO
//!
//! A [`CorpusVocabulary`] is persisted as a [`VocabularyRecord`]: the ordered
//! ``id -> string`` lists, the training flags, and the action alphabet.
//! Reverse maps and arc labels are rebuilt on load.
//!
//! ## Saving and Reloading
//!
//! ```rust,no_run
//! use parsevocab::vocab::{
//!     CorpusVocabulary,
//!     io::{load_vocab_path_into, save_vocab_path},
//! };
//!
//! fn example() -> parsevocab::PVResult<()> {
//!     let mut vocab = CorpusVocabulary::new();
//!     vocab.get_or_add_word("dog", true);
//!     save_vocab_path(&vocab, "vocab.json")?;
//!
//!     // Fine-tuning: the pretrained vocabulary replaces the current one.
//!     let summary = load_vocab_path_into("vocab.json", &mut vocab)?;
//!     assert_eq!(summary.lost_words(), 0);
//!     Ok(())
//! }
//! ```

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::errors::{PVResult, ParseVocabError};
use crate::vocab::arc_labels::derive_arc_label;
use crate::vocab::corpus_vocab::{BAD0, CorpusVocabulary, UNK};
use crate::vocab::string_table::StringTable;

/// The schema version written by [`encode`].
pub const VOCAB_SCHEMA_VERSION: u32 = 1;

/// The persisted form of a [`CorpusVocabulary`].
///
/// Field order is schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    /// Schema version.
    pub version: u32,

    /// ``id -> word``.
    pub int_to_words: Vec<String>,

    /// ``id -> tag``.
    pub int_to_pos: Vec<String>,

    /// ``id -> char``.
    pub int_to_chars: Vec<String>,

    /// ``id -> is training word``; parallel to `int_to_words`.
    pub int_to_training_word: Vec<bool>,

    /// The ordered action alphabet.
    pub actions: Vec<String>,
}

/// What a [`decode`] replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Word count of the vocabulary before the load.
    pub previous_words: usize,

    /// Word count of the loaded vocabulary.
    pub loaded_words: usize,
}

impl LoadSummary {
    /// The number of words the load dropped; non-zero when the model shrank.
    pub fn lost_words(&self) -> usize {
        self.previous_words.saturating_sub(self.loaded_words)
    }
}

/// Capture the persisted lists of `vocab`.
pub fn encode(vocab: &CorpusVocabulary) -> VocabularyRecord {
    VocabularyRecord {
        version: VOCAB_SCHEMA_VERSION,
        int_to_words: vocab.words().to_vec(),
        int_to_pos: vocab.pos_tags().to_vec(),
        int_to_chars: vocab.chars().to_vec(),
        int_to_training_word: vocab.training_words().to_vec(),
        actions: vocab.actions().to_vec(),
    }
}

fn check_reserved(
    name: &str,
    list: &[String],
    reserved: &[&str],
) -> PVResult<()> {
    for (idx, &expected) in reserved.iter().enumerate() {
        match list.get(idx) {
            Some(found) if found == expected => {}
            found => {
                return Err(ParseVocabError::Deserialize(format!(
                    "{name} table entry {idx} is {found:?}, expected {expected:?}"
                )));
            }
        }
    }
    Ok(())
}

/// Replace `vocab` wholesale with the contents of `record`.
///
/// The record is validated, and the reverse maps and arc labels rebuilt,
/// before `vocab` is touched; on error `vocab` is unchanged.
///
/// A record holding fewer words than `vocab` held is logged as a warning,
/// and still loaded.
///
/// ## Returns
/// A [`LoadSummary`]; or [`ParseVocabError::Deserialize`] if the record is
/// inconsistent.
pub fn decode(
    record: VocabularyRecord,
    vocab: &mut CorpusVocabulary,
) -> PVResult<LoadSummary> {
    if record.version != VOCAB_SCHEMA_VERSION {
        return Err(ParseVocabError::Deserialize(format!(
            "unsupported vocabulary schema version {}",
            record.version
        )));
    }
    if record.int_to_training_word.len() != record.int_to_words.len() {
        return Err(ParseVocabError::Deserialize(format!(
            "{} training flags for {} words",
            record.int_to_training_word.len(),
            record.int_to_words.len()
        )));
    }
    check_reserved("word", &record.int_to_words, &[BAD0, UNK])?;
    check_reserved("char", &record.int_to_chars, &[BAD0])?;

    let previous_words = vocab.count_words();

    let words = StringTable::from_list("word", record.int_to_words)?;
    let pos = StringTable::from_list("pos", record.int_to_pos)?;
    let chars = StringTable::from_list("char", record.int_to_chars)?;
    let actions = StringTable::from_list("action", record.actions)?;
    let arc_labels = actions
        .entries()
        .iter()
        .map(|action| derive_arc_label(action))
        .collect();

    *vocab = CorpusVocabulary {
        words,
        training_words: record.int_to_training_word,
        pos,
        chars,
        actions,
        arc_labels,
    };

    let summary = LoadSummary {
        previous_words,
        loaded_words: vocab.count_words(),
    };
    if summary.lost_words() > 0 {
        log::warn!(
            "lost {} words when loading vocabulary ({} -> {})",
            summary.lost_words(),
            summary.previous_words,
            summary.loaded_words
        );
    }

    Ok(summary)
}

/// Write `vocab` as JSON to a [`Write`] writer.
pub fn write_vocab<W: Write>(
    vocab: &CorpusVocabulary,
    writer: &mut W,
) -> PVResult<()> {
    serde_json::to_writer(&mut *writer, &encode(vocab))?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON vocabulary from a [`Read`] reader, over `vocab`.
///
/// See [`decode`].
pub fn read_vocab_into<R: Read>(
    reader: R,
    vocab: &mut CorpusVocabulary,
) -> PVResult<LoadSummary> {
    let record: VocabularyRecord = serde_json::from_reader(reader)
        .map_err(|e| ParseVocabError::Deserialize(e.to_string()))?;
    decode(record, vocab)
}

/// Save `vocab` to a JSON file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<P: AsRef<Path>>(
    vocab: &CorpusVocabulary,
    path: P,
) -> PVResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)
}

/// Load a JSON vocabulary file over an existing `vocab`.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
/// * `vocab` - the vocabulary to replace.
pub fn load_vocab_path_into<P: AsRef<Path>>(
    path: P,
    vocab: &mut CorpusVocabulary,
) -> PVResult<LoadSummary> {
    let path = path.as_ref();
    log::info!("Loading vocabulary from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let summary = read_vocab_into(reader, vocab)?;
    log::info!(
        "Loaded {} words, {} tags, {} chars, {} actions",
        vocab.count_words(),
        vocab.count_pos(),
        vocab.count_chars(),
        vocab.count_actions()
    );
    Ok(summary)
}

/// Load a JSON vocabulary file.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> PVResult<CorpusVocabulary> {
    let mut vocab = CorpusVocabulary::new();
    load_vocab_path_into(path, &mut vocab)?;
    Ok(vocab)
}
