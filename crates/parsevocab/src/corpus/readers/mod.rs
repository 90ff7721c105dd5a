//! # Corpus Readers
//!
//! [`crate::corpus::CorpusReader`] strategies:
//! * [`ConllUCorpusReader`] - ``CoNLL-U`` files into a [`crate::corpus::Corpus`].
//! * [`OracleParseTransitionsReader`] - oracle-transition files into a
//!   [`crate::corpus::TrainingCorpus`], via an [`OracleTransitionsRecorder`].

use std::io;

use crate::errors::{PVResult, ParseVocabError};

mod conllu;
mod oracle_parse;
mod oracle_recorder;

#[doc(inline)]
pub use conllu::{ConllUCorpusReader, TagColumn};
#[doc(inline)]
pub use oracle_parse::OracleParseTransitionsReader;
#[doc(inline)]
pub use oracle_recorder::OracleTransitionsRecorder;

/// ``#`` alone, or followed by whitespace; ``#/#`` is a token.
pub(crate) fn is_comment(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Unwrap one ``lines()`` item; undecodable text becomes a located format error.
pub(crate) fn read_line(
    line: io::Result<String>,
    source_name: &str,
    line_no: usize,
) -> PVResult<String> {
    line.map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => {
            ParseVocabError::format(source_name, line_no, "invalid UTF-8")
        }
        _ => err.into(),
    })
}
