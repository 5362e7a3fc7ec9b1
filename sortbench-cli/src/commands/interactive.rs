use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use sortbench::{Bencher, FixedWorkload, Suite, Workload};

use crate::config::{self, Profile, DEFAULT_PROFILE};

const RULE: &str = "------------------------------------------------";
const FAREWELL: &str = "Thank you for using the Algorithm Comparator!";

/// Generate a list and compare every algorithm on it, after confirmation
#[derive(Parser)]
pub struct InteractiveArgs {
    #[arg(long, default_value = DEFAULT_PROFILE)]
    /// Benchmarking profile
    pub profile: String,
    /// Path to the profiles file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed the generated list
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for InteractiveArgs {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_owned(),
            config: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Run,
    Quit,
}

/// Accepts `r`/`run` and `q`/`quit`, ignoring case and surrounding whitespace.
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_lowercase().as_str() {
        "r" | "run" => Some(Choice::Run),
        "q" | "quit" => Some(Choice::Quit),
        _ => None,
    }
}

/// Asks until a valid choice is entered. End of input counts as quit.
pub fn ask(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<Choice> {
    loop {
        write!(output, "Type in R to run the comparator, or Q to quit: ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(Choice::Quit);
        }
        if let Some(choice) = parse_choice(&line) {
            return Ok(choice);
        }
        writeln!(output, "That was not a valid input. Please try again.")?;
        writeln!(output)?;
    }
}

/// One comparator session: show the list, ask, and report every algorithm.
pub fn session(
    profile: &Profile,
    workload: &mut dyn Workload,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Choice> {
    writeln!(output)?;
    writeln!(output, "Welcome to the Sorting Algorithm Comparator.")?;
    let list = workload.generate();
    let mut sorted = list.clone();
    sorted.sort();
    writeln!(output, "Your list is: {:?}", list)?;
    writeln!(output, "The sorted list is: {:?}", sorted)?;
    writeln!(output)?;

    if ask(input, output)? == Choice::Quit {
        writeln!(output, "{FAREWELL}")?;
        return Ok(Choice::Quit);
    }

    writeln!(output, "{RULE}")?;
    let suite = Suite::new(Bencher::new(profile.iterations).policy(profile.policy))
        .algorithms(profile.algorithms.iter().copied())
        .sharing(profile.sharing());
    let mut list = FixedWorkload(list);
    for entry in suite.run(&mut list) {
        match entry.result {
            Ok(result) => writeln!(output, "{}: {:.3} s", entry.algorithm, result.normalized())?,
            Err(e) => writeln!(output, "{}: failed ({})", entry.algorithm, e)?,
        }
        writeln!(output, "{RULE}")?;
    }
    writeln!(output, "{FAREWELL}")?;
    writeln!(output)?;
    Ok(Choice::Run)
}

impl InteractiveArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = config::load(self.config.as_deref())?;
        let mut profile = config.profile(&self.profile)?;
        if self.seed.is_some() {
            profile.workload.seed = self.seed;
        }
        let mut workload = profile.workload.build()?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        session(&profile, &mut workload, &mut stdin.lock(), &mut stdout.lock())?;
        Ok(())
    }
}
