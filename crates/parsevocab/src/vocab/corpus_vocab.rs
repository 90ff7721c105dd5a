//! # Corpus Vocabulary
//!
//! Word, part-of-speech, character and action tables shared by every corpus
//! built for one parser model.

use crate::types::{ActionId, CharId, PosId, WordId};
use crate::utility::utf8_chars;
use crate::vocab::arc_labels::derive_arc_label;
use crate::vocab::string_table::StringTable;

/// The padding / invalid entry; word id 0 and char id 0.
pub const BAD0: &str = "<BAD0>";

/// The unknown-word entry; word id 1.
pub const UNK: &str = "<UNK>";

/// Surface form and tag of the synthetic root token.
pub const ROOT: &str = "ROOT";

/// The word id of [`BAD0`].
pub const BAD0_WORD_ID: WordId = 0;

/// The word id of [`UNK`].
pub const UNK_WORD_ID: WordId = 1;

/// Bidirectional vocabulary tables with OOV tracking.
///
/// Every table grows monotonically; ids, once assigned, are stable until a
/// persisted vocabulary is loaded over this one (see [`crate::vocab::io`]).
///
/// The ``word -> is training word`` flags have one entry per word; the
/// ``action -> arc label`` table has one entry per action and is always
/// derived from the action names.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusVocabulary {
    pub(crate) words: StringTable,
    pub(crate) training_words: Vec<bool>,
    pub(crate) pos: StringTable,
    pub(crate) chars: StringTable,
    pub(crate) actions: StringTable,
    pub(crate) arc_labels: Vec<String>,
}

impl Default for CorpusVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusVocabulary {
    /// Create a vocabulary holding only the reserved entries.
    pub fn new() -> Self {
        let mut words = StringTable::default();
        words.get_or_add(BAD0);
        words.get_or_add(UNK);

        let mut chars = StringTable::default();
        chars.get_or_add(BAD0);

        Self {
            words,
            training_words: vec![true, true],
            pos: StringTable::default(),
            chars,
            actions: StringTable::default(),
            arc_labels: Vec::new(),
        }
    }

    /// Copy everything except the action alphabet.
    ///
    /// For reusing a vocabulary in another task with different actions.
    pub fn without_actions(&self) -> Self {
        Self {
            words: self.words.clone(),
            training_words: self.training_words.clone(),
            pos: self.pos.clone(),
            chars: self.chars.clone(),
            actions: StringTable::default(),
            arc_labels: Vec::new(),
        }
    }

    /// The number of words, reserved entries included.
    pub fn count_words(&self) -> usize {
        self.words.len()
    }

    /// The number of part-of-speech tags.
    pub fn count_pos(&self) -> usize {
        self.pos.len()
    }

    /// The number of characters, the padding entry included.
    pub fn count_chars(&self) -> usize {
        self.chars.len()
    }

    /// The number of actions.
    pub fn count_actions(&self) -> usize {
        self.actions.len()
    }

    /// Look up a word; unknown words map to [`UNK_WORD_ID`].
    pub fn get_word(
        &self,
        word: &str,
    ) -> WordId {
        self.words.get(word).unwrap_or(UNK_WORD_ID)
    }

    /// Look up a word, adding it if unseen.
    ///
    /// The training flag of the word is OR-ed with `mark_as_training`;
    /// once a word is a training word, it stays one.
    pub fn get_or_add_word(
        &mut self,
        word: &str,
        mark_as_training: bool,
    ) -> WordId {
        let (id, inserted) = self.words.get_or_add(word);
        if inserted {
            self.training_words.push(mark_as_training);
        } else {
            self.training_words[id as usize] |= mark_as_training;
        }
        id
    }

    /// Add a training word, also registering each of its characters.
    pub(crate) fn add_training_word_with_chars(
        &mut self,
        word: &str,
    ) -> WordId {
        let was_training = self
            .words
            .get(word)
            .is_some_and(|id| self.is_training_word(id));
        let id = self.get_or_add_word(word, true);
        if !was_training {
            for ch in utf8_chars(word) {
                self.get_or_add_char(ch);
            }
        }
        id
    }

    /// Look up a part-of-speech tag.
    ///
    /// ## Returns
    /// The tag id; or `None` for an unseen tag. There is no UNK fallback.
    pub fn get_pos(
        &self,
        pos: &str,
    ) -> Option<PosId> {
        self.pos.get(pos)
    }

    /// Look up a part-of-speech tag, adding it if unseen.
    pub fn get_or_add_pos(
        &mut self,
        pos: &str,
    ) -> PosId {
        self.pos.get_or_add(pos).0
    }

    /// Look up a character.
    pub fn get_char(
        &self,
        ch: &str,
    ) -> Option<CharId> {
        self.chars.get(ch)
    }

    /// Look up a character, adding it if unseen.
    pub fn get_or_add_char(
        &mut self,
        ch: &str,
    ) -> CharId {
        self.chars.get_or_add(ch).0
    }

    /// Look up an action.
    pub fn get_action(
        &self,
        action: &str,
    ) -> Option<ActionId> {
        self.actions.get(action)
    }

    /// Look up an action, adding it (and its derived arc label) if unseen.
    pub fn get_or_add_action(
        &mut self,
        action: &str,
    ) -> ActionId {
        let (id, inserted) = self.actions.get_or_add(action);
        if inserted {
            self.arc_labels.push(derive_arc_label(action));
        }
        id
    }

    /// The word for `id`.
    pub fn word_str(
        &self,
        id: WordId,
    ) -> Option<&str> {
        self.words.get_str(id)
    }

    /// The part-of-speech tag for `id`.
    pub fn pos_str(
        &self,
        id: PosId,
    ) -> Option<&str> {
        self.pos.get_str(id)
    }

    /// The character for `id`.
    pub fn char_str(
        &self,
        id: CharId,
    ) -> Option<&str> {
        self.chars.get_str(id)
    }

    /// The action name for `id`.
    pub fn action_str(
        &self,
        id: ActionId,
    ) -> Option<&str> {
        self.actions.get_str(id)
    }

    /// The arc label for action `id`.
    pub fn arc_label(
        &self,
        id: ActionId,
    ) -> Option<&str> {
        self.arc_labels.get(id as usize).map(String::as_str)
    }

    /// Was word `id` ever added as a training word?
    pub fn is_training_word(
        &self,
        id: WordId,
    ) -> bool {
        self.training_words.get(id as usize).copied().unwrap_or(false)
    }

    /// The ``id -> word`` list.
    pub fn words(&self) -> &[String] {
        self.words.entries()
    }

    /// The ``id -> is training word`` list.
    pub fn training_words(&self) -> &[bool] {
        &self.training_words
    }

    /// The ``id -> tag`` list.
    pub fn pos_tags(&self) -> &[String] {
        self.pos.entries()
    }

    /// The ``id -> char`` list.
    pub fn chars(&self) -> &[String] {
        self.chars.entries()
    }

    /// The ordered action alphabet.
    pub fn actions(&self) -> &[String] {
        self.actions.entries()
    }

    /// The ``action id -> arc label`` list.
    pub fn arc_labels(&self) -> &[String] {
        &self.arc_labels
    }
}
