//! # Oracle Parse Transitions Reader
//!
//! Records are separated by blank lines; lines starting with ``# `` are comments.
//! The first line of a record lists its tokens as ``form/TAG``, split at the
//! last ``/``; every following line is one oracle action:
//!
//! ```text
//! # sent_id = 1
//! A/DET dog/NOUN runs/VERB ROOT/ROOT
//! SHIFT
//! SHIFT
//! LEFT-ARC(det)
//! SHIFT
//! LEFT-ARC(nsubj)
//! SHIFT
//! LEFT-ARC(root)
//! ```
//!
//! Tokens are indexed 0, 1, 2, ... in order; the ``ROOT/ROOT`` token is
//! stored under [`ROOT_TOKEN_ID`].

use std::io::BufRead;

use crate::corpus::readers::{is_comment, read_line};
use crate::corpus::{CorpusReader, OracleTransitionsRecorder, Sentence, TrainingCorpus};
use crate::errors::{PVResult, ParseVocabError};
use crate::types::{ROOT_TOKEN_ID, TokenIndex};
use crate::vocab::ROOT;

/// Reads oracle-transition files into a [`TrainingCorpus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleParseTransitionsReader {
    recorder: OracleTransitionsRecorder,
}

impl OracleParseTransitionsReader {
    /// Create a reader.
    ///
    /// ## Arguments
    /// * `is_training` - is this the training split (as opposed to dev/test)?
    pub fn new(is_training: bool) -> Self {
        Self {
            recorder: OracleTransitionsRecorder::new(is_training),
        }
    }

    /// Set whether the model consults character-level spellings.
    ///
    /// With spelling on, dev/test words are added to the vocabulary (as
    /// non-training words) instead of resolving to UNK.
    pub fn with_spelling(
        self,
        use_spelling: bool,
    ) -> Self {
        Self {
            recorder: self.recorder.with_spelling(use_spelling),
        }
    }

    fn read_tokens(
        &self,
        line: &str,
        source_name: &str,
        line_no: usize,
        corpus: &TrainingCorpus<'_>,
        sentence: &mut Sentence,
    ) -> PVResult<()> {
        let mut next_index: TokenIndex = 0;
        for token in line.split_whitespace() {
            let (form, tag) = match token.rsplit_once('/') {
                Some((form, tag)) if !form.is_empty() && !tag.is_empty() => (form, tag),
                _ => {
                    return Err(ParseVocabError::format(
                        source_name,
                        line_no,
                        format!("malformed token {token:?}, expected form/TAG"),
                    ));
                }
            };

            let index = if form == ROOT && tag == ROOT {
                if sentence.has_root() {
                    return Err(ParseVocabError::format(
                        source_name,
                        line_no,
                        format!("duplicate root token in {line:?}"),
                    ));
                }
                ROOT_TOKEN_ID
            } else {
                let index = next_index;
                next_index += 1;
                index
            };

            self.recorder
                .record_word(form, tag, index, corpus, sentence);
        }
        Ok(())
    }
}

impl CorpusReader<TrainingCorpus<'_>> for OracleParseTransitionsReader {
    fn read_buf<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
        corpus: &mut TrainingCorpus<'_>,
    ) -> PVResult<()> {
        log::info!(
            "Loading {} corpus from {source_name}...",
            if self.recorder.is_training() {
                "training"
            } else {
                "dev"
            }
        );

        corpus.set_use_spelling(self.recorder.use_spelling());

        let mut sentence = Sentence::default();
        let mut in_record = false;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = read_line(line, source_name, line_no)?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                if in_record {
                    self.recorder
                        .record_sentence(corpus, &mut sentence, false);
                    in_record = false;
                }
                continue;
            }
            if is_comment(line) {
                continue;
            }

            if !in_record {
                in_record = true;
                self.read_tokens(line, source_name, line_no, corpus, &mut sentence)?;
                continue;
            }

            let action = line.trim();
            if action.contains(char::is_whitespace) {
                return Err(ParseVocabError::format(
                    source_name,
                    line_no,
                    format!("malformed action {action:?}"),
                ));
            }
            self.recorder.record_action(action, corpus);
        }

        if in_record {
            self.recorder
                .record_sentence(corpus, &mut sentence, true);
        }

        log::info!(
            "Loaded {} sentences from {source_name}",
            corpus.sentences().len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::vocab::{CorpusVocabulary, UNK_WORD_ID};

    fn read(
        vocab: &RefCell<CorpusVocabulary>,
        text: &str,
        is_training: bool,
    ) -> PVResult<usize> {
        let reader = OracleParseTransitionsReader::new(is_training);
        let corpus = TrainingCorpus::from_buf_reader(vocab, &reader, text.as_bytes(), "mem")?;
        Ok(corpus.sentences().len())
    }

    #[test]
    fn test_records_and_comments() {
        let text = "\
# first

the/DET cat/NOUN ROOT/ROOT\r
SHIFT\r
LEFT-ARC(det)\r


# second
a/DET 1/2/NUM
SHIFT
";
        let vocab = RefCell::new(CorpusVocabulary::new());
        let reader = OracleParseTransitionsReader::new(true);
        let corpus = TrainingCorpus::from_buf_reader(&vocab, &reader, text.as_bytes(), "mem").unwrap();

        assert_eq!(corpus.sentences().len(), 2);
        assert_eq!(corpus.correct_act_sent().len(), 2);

        let first = &corpus.sentences()[0];
        assert_eq!(first.size(), 3);
        assert!(first.has_root());
        assert_eq!(first.words.keys().copied().collect::<Vec<_>>(), vec![0, 1, ROOT_TOKEN_ID]);

        let vocab = vocab.borrow();
        let second = &corpus.sentences()[1];
        assert_eq!(second.words[&1], vocab.get_word("1/2"));
        assert_eq!(second.poses[&1], vocab.get_pos("NUM").unwrap());
        assert_eq!(vocab.actions(), &["SHIFT", "LEFT-ARC(det)"].map(String::from));
    }

    #[test]
    fn test_dev_split_records_unknown_words() {
        let vocab = RefCell::new(CorpusVocabulary::new());
        read(&vocab, "the/DET cat/NOUN\nSHIFT\n", true).unwrap();

        let reader = OracleParseTransitionsReader::new(false);
        let dev = TrainingCorpus::from_buf_reader(
            &vocab,
            &reader,
            "the/DET gnu/NOUN\nSHIFT\nSWAP\n".as_bytes(),
            "dev",
        )
        .unwrap();

        let sentence = &dev.sentences()[0];
        assert_eq!(sentence.words[&1], UNK_WORD_ID);
        assert_eq!(sentence.unk_surface_forms.len(), 1);
        assert_eq!(sentence.unk_surface_forms[&1], "gnu");

        let vocab = vocab.borrow();
        assert_eq!(vocab.count_words(), 4);
        assert_eq!(vocab.count_actions(), 2);
    }

    #[test]
    fn test_dev_split_with_spelling() {
        let vocab = RefCell::new(CorpusVocabulary::new());

        let plain = TrainingCorpus::from_buf_reader(
            &vocab,
            &OracleParseTransitionsReader::new(false),
            "gnu/NN\nSHIFT\n".as_bytes(),
            "dev",
        )
        .unwrap();
        assert!(!plain.use_spelling());
        assert_eq!(plain.sentences()[0].words[&0], UNK_WORD_ID);
        assert_eq!(plain.sentences()[0].unk_surface_forms[&0], "gnu");
        assert_eq!(vocab.borrow().count_words(), 2);

        let spelled = TrainingCorpus::from_buf_reader(
            &vocab,
            &OracleParseTransitionsReader::new(false).with_spelling(true),
            "gnu/NN\nSHIFT\n".as_bytes(),
            "dev",
        )
        .unwrap();
        assert!(spelled.use_spelling());

        let vocab = vocab.borrow();
        let gnu = vocab.get_word("gnu");
        assert_ne!(gnu, UNK_WORD_ID);
        assert!(!vocab.is_training_word(gnu));
        assert_eq!(spelled.sentences()[0].words[&0], gnu);
        assert!(spelled.sentences()[0].unk_surface_forms.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_located() {
        let vocab = RefCell::new(CorpusVocabulary::new());
        let reader = OracleParseTransitionsReader::new(true);
        let text: &[u8] = b"a/DET\nSHIFT\n\nb/DET \xff/NN\nSHIFT\n";

        match TrainingCorpus::from_buf_reader(&vocab, &reader, text, "train.oracle") {
            Err(ParseVocabError::Format {
                source_name, line, ..
            }) => {
                assert_eq!(source_name, "train.oracle");
                assert_eq!(line, 4);
            }
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_token_is_not_a_comment() {
        assert!(is_comment("# sent_id = 3"));
        assert!(is_comment("#"));
        assert!(!is_comment("#/# 5/CD"));

        let vocab = RefCell::new(CorpusVocabulary::new());
        assert_eq!(read(&vocab, "#/# 5/CD\nSHIFT\n", true).unwrap(), 1);
        assert_eq!(vocab.borrow().get_word("#"), 2);
    }

    #[test]
    fn test_format_violations() {
        let vocab = RefCell::new(CorpusVocabulary::new());

        for (text, bad_line) in [
            ("the/DET cat\nSHIFT\n", 1),
            ("the/DET /NOUN\n", 1),
            ("the/\n", 1),
            ("a/DET\nSHIFT\n\nthe/DET cat/NOUN\nLEFT ARC\n", 5),
            ("ROOT/ROOT a/DET ROOT/ROOT\n", 1),
        ] {
            match read(&vocab, text, true) {
                Err(ParseVocabError::Format { line, message, .. }) => {
                    assert_eq!(line, bad_line, "{message}");
                }
                other => panic!("expected a format error for {text:?}, got {other:?}"),
            }
        }
    }
}
