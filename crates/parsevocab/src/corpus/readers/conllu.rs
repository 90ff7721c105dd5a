//! # ``CoNLL-U`` Corpus Reader
//!
//! Reads plain annotated sentences for parsing; heads and relations are
//! not consulted. Words are only looked up, never added.

use std::io::BufRead;

use crate::corpus::readers::{is_comment, read_line};
use crate::corpus::{Corpus, CorpusReader, Sentence};
use crate::errors::{PVResult, ParseVocabError};
use crate::types::{ROOT_TOKEN_ID, TokenIndex};
use crate::vocab::{CorpusVocabulary, ROOT, UNK_WORD_ID};

const CONLLU_COLUMNS: usize = 10;

/// Which ``CoNLL-U`` column supplies the part-of-speech tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagColumn {
    /// Universal POS tags (column 4).
    #[default]
    Upos,

    /// Language-specific POS tags (column 5).
    Xpos,
}

impl TagColumn {
    fn index(self) -> usize {
        match self {
            TagColumn::Upos => 3,
            TagColumn::Xpos => 4,
        }
    }
}

/// Reads ``CoNLL-U`` files into a [`Corpus`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConllUCorpusReader {
    tag_column: TagColumn,
}

impl ConllUCorpusReader {
    /// Select the tag column.
    pub fn with_tag_column(
        self,
        tag_column: TagColumn,
    ) -> Self {
        Self { tag_column }
    }

    fn record_token(
        vocab: &mut CorpusVocabulary,
        sentence: &mut Sentence,
        index: TokenIndex,
        form: &str,
        tag: &str,
    ) {
        let word_id = vocab.get_word(form);
        if word_id == UNK_WORD_ID {
            sentence.unk_surface_forms.insert(index, form.to_string());
        }
        sentence.words.insert(index, word_id);
        sentence.poses.insert(index, vocab.get_or_add_pos(tag));
    }

    fn finish_sentence(
        corpus: &mut Corpus<'_>,
        sentence: &mut Sentence,
    ) {
        if sentence.is_empty() {
            return;
        }
        Self::record_token(
            &mut corpus.vocab().borrow_mut(),
            sentence,
            ROOT_TOKEN_ID,
            ROOT,
            ROOT,
        );
        corpus.push_sentence(std::mem::take(sentence));
    }
}

impl CorpusReader<Corpus<'_>> for ConllUCorpusReader {
    fn read_buf<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
        corpus: &mut Corpus<'_>,
    ) -> PVResult<()> {
        log::info!("Loading CoNLL-U corpus from {source_name}...");

        let mut sentence = Sentence::default();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = read_line(line, source_name, line_no)?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                Self::finish_sentence(corpus, &mut sentence);
                continue;
            }
            if is_comment(line) {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != CONLLU_COLUMNS {
                return Err(ParseVocabError::format(
                    source_name,
                    line_no,
                    format!(
                        "expected {CONLLU_COLUMNS} tab-separated columns, found {}: {line:?}",
                        fields.len()
                    ),
                ));
            }

            let id = fields[0];
            // Multiword token ranges and empty nodes.
            if id.contains(['-', '.']) {
                continue;
            }
            let index = match id.parse::<TokenIndex>() {
                Ok(id) if id > 0 => id - 1,
                _ => {
                    return Err(ParseVocabError::format(
                        source_name,
                        line_no,
                        format!("invalid token id {id:?}"),
                    ));
                }
            };
            if sentence.words.contains_key(&index) {
                return Err(ParseVocabError::format(
                    source_name,
                    line_no,
                    format!("duplicate token id {id:?}"),
                ));
            }

            Self::record_token(
                &mut corpus.vocab().borrow_mut(),
                &mut sentence,
                index,
                fields[1],
                fields[self.tag_column.index()],
            );
        }
        Self::finish_sentence(corpus, &mut sentence);

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

    const SAMPLE: &str = "\
# sent_id = 1
# text = The dog's bone.
1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_
2-3\tdog's\t_\t_\t_\t_\t_\t_\t_\t_
2\tdog\tdog\tNOUN\tNN\t_\t4\tnmod:poss\t_\t_
3\t's\t's\tPART\tPOS\t_\t2\tcase\t_\t_
4\tbone\tbone\tNOUN\tNN\t_\t0\troot\t_\t_
4.1\tbone\tbone\tNOUN\tNN\t_\t_\t_\t_\t_
5\t.\t.\tPUNCT\t.\t_\t4\tpunct\t_\t_

1\tYes\tyes\tINTJ\tUH\t_\t0\troot\t_\t_
";

    fn trained_vocab() -> RefCell<CorpusVocabulary> {
        let mut vocab = CorpusVocabulary::new();
        for word in ["The", "dog", "bone", ".", ROOT] {
            vocab.get_or_add_word(word, true);
        }
        RefCell::new(vocab)
    }

    #[test]
    fn test_read_conllu() {
        let vocab = trained_vocab();
        let corpus = Corpus::from_buf_reader(
            &vocab,
            &ConllUCorpusReader::default(),
            SAMPLE.as_bytes(),
            "mem",
        )
        .unwrap();

        assert_eq!(corpus.sentences().len(), 2);

        let first = &corpus.sentences()[0];
        assert_eq!(first.size(), 6);
        assert_eq!(first.words.keys().last(), Some(&ROOT_TOKEN_ID));
        assert_eq!(first.words[&ROOT_TOKEN_ID], vocab.borrow().get_word(ROOT));
        assert_eq!(first.words[&2], UNK_WORD_ID);
        assert_eq!(first.unk_surface_forms.keys().collect::<Vec<_>>(), vec![&2]);

        let second = &corpus.sentences()[1];
        assert_eq!(second.size(), 2);
        assert_eq!(second.unk_surface_forms[&0], "Yes");

        let vocab = vocab.borrow();
        assert_eq!(vocab.count_words(), 7);
        assert_eq!(
            vocab.pos_tags(),
            &["DET", "NOUN", "PART", "PUNCT", "ROOT", "INTJ"].map(String::from)
        );
    }

    #[test]
    fn test_read_xpos() {
        let vocab = trained_vocab();
        let reader = ConllUCorpusReader::default().with_tag_column(TagColumn::Xpos);
        Corpus::from_buf_reader(&vocab, &reader, SAMPLE.as_bytes(), "mem").unwrap();

        assert_eq!(vocab.borrow().get_pos("NN"), Some(1));
        assert_eq!(vocab.borrow().get_pos("NOUN"), None);
    }

    #[test]
    fn test_format_violations() {
        let vocab = trained_vocab();
        let reader = ConllUCorpusReader::default();

        for (text, bad_line) in [
            ("1\tThe\tthe\tDET\n", 1),
            ("# c\n1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\nx\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n", 3),
            ("0\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n", 1),
            ("1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n1\tdog\tdog\tNOUN\tNN\t_\t0\troot\t_\t_\n", 2),
        ] {
            match Corpus::from_buf_reader(&vocab, &reader, text.as_bytes(), "mem") {
                Err(ParseVocabError::Format { line, .. }) => assert_eq!(line, bad_line),
                other => panic!("expected a format error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_utf8_is_located() {
        let vocab = trained_vocab();
        let text: &[u8] = b"1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n2\t\xc3\tx\tNOUN\tNN\t_\t0\troot\t_\t_\n";

        match Corpus::from_buf_reader(&vocab, &ConllUCorpusReader::default(), text, "test.conllu") {
            Err(ParseVocabError::Format {
                source_name, line, ..
            }) => {
                assert_eq!(source_name, "test.conllu");
                assert_eq!(line, 2);
            }
            other => panic!("expected a format error, got {other:?}"),
        }
    }
}
