use parsevocab::vocab::io::load_vocab_path;

use crate::logging::{LogArgs, Report};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// The saved vocabulary.
    vocab: String,

    /// Also list the actions and their arc labels.
    #[arg(long)]
    actions: bool,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl InspectArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(Report::Printed)?;

        let vocab = load_vocab_path(&self.vocab)?;
        let training = vocab.training_words().iter().filter(|&&t| t).count();

        println!("words:   {} ({training} training)", vocab.count_words());
        println!("tags:    {}", vocab.count_pos());
        println!("chars:   {}", vocab.count_chars());
        println!("actions: {}", vocab.count_actions());

        if self.actions {
            for (id, (action, label)) in vocab
                .actions()
                .iter()
                .zip(vocab.arc_labels())
                .enumerate()
            {
                println!("{id}\t{action}\t{label}");
            }
        }

        Ok(())
    }
}
