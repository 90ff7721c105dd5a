use stderrlog::LogLevelNum;

/// The modules whose records reach stderr.
const LOGGED_MODULES: [&str; 2] = ["pvocab", "parsevocab"];

/// The level a subcommand logs at without `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// The subcommand's results are only logged; corpus and vocabulary counts at info.
    Logged,

    /// The subcommand prints its results to stdout; only warnings are logged.
    Printed,
}

impl Report {
    fn base_level(self) -> u8 {
        match self {
            Report::Logged => 3,
            Report::Printed => 2,
        }
    }
}

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages; vocabulary shrink warnings included.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log more than the subcommand does by default (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl LogArgs {
    fn level(
        &self,
        report: Report,
    ) -> LogLevelNum {
        match report.base_level().saturating_add(self.verbose) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger for a subcommand.
    pub fn setup_logging(
        &self,
        report: Report,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level(report))
            .modules(LOGGED_MODULES)
            .show_module_names(self.verbose > 0)
            .init()?;

        Ok(())
    }
}
