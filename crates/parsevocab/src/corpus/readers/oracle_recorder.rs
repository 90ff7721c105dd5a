//! # Oracle Transition Recording
//!
//! The primitives an oracle-transition reader calls, per parsed record, to
//! grow the vocabulary and populate a [`TrainingCorpus`].

use crate::corpus::{Sentence, TrainingCorpus};
use crate::types::{ActionId, TokenIndex, WordId};
use crate::vocab::UNK_WORD_ID;

/// Records words, actions and sentences into a [`TrainingCorpus`].
///
/// While a sentence is being read, ``correct_act_sent`` may hold one more
/// sequence than the corpus holds sentences: the open sequence of the
/// sentence in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleTransitionsRecorder {
    is_training: bool,
    use_spelling: bool,
}

impl OracleTransitionsRecorder {
    /// Create a recorder, with spelling off.
    ///
    /// ## Arguments
    /// * `is_training` - is this the training split (as opposed to dev/test)?
    pub fn new(is_training: bool) -> Self {
        Self {
            is_training,
            use_spelling: false,
        }
    }

    /// Set whether the model consults character-level spellings.
    pub fn with_spelling(
        self,
        use_spelling: bool,
    ) -> Self {
        Self {
            use_spelling,
            ..self
        }
    }

    /// Is this the training split?
    pub fn is_training(&self) -> bool {
        self.is_training
    }

    /// Does the model consult character-level spellings?
    pub fn use_spelling(&self) -> bool {
        self.use_spelling
    }

    /// Record one token into the sentence in progress.
    ///
    /// Word resolution depends on the split:
    /// * training - added as a training word; new training words also
    ///   register their characters.
    /// * other, with spelling - added as a non-training word, so the model
    ///   can still spell it out; never UNK.
    /// * other - looked up only; a word resolving to UNK has its surface
    ///   form recorded.
    ///
    /// ## Returns
    /// The resolved word id.
    pub fn record_word(
        &self,
        word: &str,
        pos: &str,
        token_index: TokenIndex,
        corpus: &TrainingCorpus<'_>,
        sentence: &mut Sentence,
    ) -> WordId {
        let mut vocab = corpus.vocab().borrow_mut();

        let pos_id = vocab.get_or_add_pos(pos);
        let word_id = if self.is_training {
            vocab.add_training_word_with_chars(word)
        } else if self.use_spelling {
            vocab.get_or_add_word(word, false)
        } else {
            vocab.get_word(word)
        };

        if word_id == UNK_WORD_ID {
            sentence
                .unk_surface_forms
                .insert(token_index, word.to_string());
        }
        sentence.words.insert(token_index, word_id);
        sentence.poses.insert(token_index, pos_id);

        word_id
    }

    /// Append an action to the action sequence of the sentence in progress.
    pub fn record_action(
        &self,
        action: &str,
        corpus: &mut TrainingCorpus<'_>,
    ) -> ActionId {
        let action_id = corpus.vocab().borrow_mut().get_or_add_action(action);

        let sentence_count = corpus.sentences().len();
        let sequences = corpus.correct_act_sent_mut();
        if sequences.len() == sentence_count {
            sequences.push(Vec::new());
        }
        if let Some(open) = sequences.last_mut() {
            open.push(action_id);
        }

        action_id
    }

    /// Commit the sentence in progress, and its action sequence.
    ///
    /// `sentence` is left empty, for the next record.
    ///
    /// ## Arguments
    /// * `corpus` - the corpus being populated.
    /// * `sentence` - the sentence in progress.
    /// * `is_final` - is this the end-of-input flush? A final flush of an
    ///   empty sentence commits nothing, and drops any dangling actions.
    ///
    /// ## Returns
    /// Whether a sentence was committed.
    pub fn record_sentence(
        &self,
        corpus: &mut TrainingCorpus<'_>,
        sentence: &mut Sentence,
        is_final: bool,
    ) -> bool {
        let sentence_count = corpus.sentences().len();

        if is_final && sentence.is_empty() {
            corpus.correct_act_sent_mut().truncate(sentence_count);
            return false;
        }

        corpus.corpus_mut().push_sentence(std::mem::take(sentence));
        let sequences = corpus.correct_act_sent_mut();
        if sequences.len() == sentence_count {
            sequences.push(Vec::new());
        }
        true
    }
}
