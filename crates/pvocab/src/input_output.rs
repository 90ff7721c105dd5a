use std::{
    fs::File,
    io::{BufWriter, Write},
};

use parsevocab::{CorpusVocabulary, vocab::io::write_vocab};

/// Where a built vocabulary is written.
#[derive(clap::Args, Debug)]
pub struct VocabOutputArgs {
    /// Vocabulary JSON file; stdout if absent or "-".
    #[arg(long)]
    output: Option<String>,
}

impl VocabOutputArgs {
    /// The output file, or `None` for stdout.
    fn path(&self) -> Option<&str> {
        self.output.as_deref().filter(|&path| path != "-")
    }

    /// Write `vocab` to the selected output.
    pub fn write_vocab(
        &self,
        vocab: &CorpusVocabulary,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer: Box<dyn Write> = match self.path() {
            Some(path) => {
                log::info!("Writing vocabulary to {path}");
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        };
        write_vocab(vocab, &mut writer)?;
        Ok(())
    }
}
