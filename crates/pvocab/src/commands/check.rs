use std::cell::RefCell;

use parsevocab::{
    corpus::{ConllUCorpusReader, Corpus, TagColumn},
    utility::truncate_utf8,
    vocab::io::load_vocab_path,
};

use crate::logging::{LogArgs, Report};

/// Byte width of the surface form column in the unknown-word listing.
const SURFACE_FORM_WIDTH: usize = 32;

/// ``CoNLL-U`` tag columns.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TagColumnArg {
    /// Universal POS tags.
    Upos,

    /// Language-specific POS tags.
    Xpos,
}

impl From<TagColumnArg> for TagColumn {
    fn from(arg: TagColumnArg) -> Self {
        match arg {
            TagColumnArg::Upos => TagColumn::Upos,
            TagColumnArg::Xpos => TagColumn::Xpos,
        }
    }
}

/// A surface form cut to [`SURFACE_FORM_WIDTH`] bytes, marked when cut.
fn shown_form(form: &str) -> String {
    let shown = truncate_utf8(form, SURFACE_FORM_WIDTH);
    if shown.len() < form.len() {
        format!("{shown}...")
    } else {
        shown.to_string()
    }
}

/// Args for the check command.
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// The saved vocabulary.
    vocab: String,

    /// The ``CoNLL-U`` file.
    file: String,

    /// Which column holds the tags.
    #[arg(long, default_value = "upos")]
    tag_column: TagColumnArg,

    /// Also list every unknown token, as sentence, index and surface form.
    #[arg(long)]
    unknown: bool,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl CheckArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(Report::Printed)?;

        let vocab = RefCell::new(load_vocab_path(&self.vocab)?);
        let reader = ConllUCorpusReader::default().with_tag_column(self.tag_column.into());
        let corpus = Corpus::new(&vocab, &reader, &self.file)?;

        let tokens: usize = corpus.sentences().iter().map(|s| s.size()).sum();
        let oov: usize = corpus
            .sentences()
            .iter()
            .map(|s| s.unk_surface_forms.len())
            .sum();

        println!("sentences: {}", corpus.sentences().len());
        println!("tokens:    {tokens} (root included)");
        println!("unknown:   {oov}");

        if self.unknown {
            for (sent_idx, sentence) in corpus.sentences().iter().enumerate() {
                for (token_idx, form) in &sentence.unk_surface_forms {
                    println!("{sent_idx}\t{token_idx}\t{}", shown_form(form));
                }
            }
        }

        let known_tags = vocab.borrow().count_pos();
        log::debug!("{known_tags} tags after reading {}", self.file);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_form() {
        assert_eq!(shown_form("gnu"), "gnu");

        let long = "日".repeat(20);
        let shown = shown_form(&long);
        assert_eq!(shown, format!("{}...", "日".repeat(10)));
    }
}
