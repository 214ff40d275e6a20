//! Stencil CLI
//!
//! Usage:
//!   stencil [OPTIONS] <FILE> <OUT>
//!
//! Options:
//!   -i, --interactive        Prompt for the value of each unset variable
//!   -t, --template VAR VAL   Value for one template variable (repeatable)
//!       --values <FILE>      TOML file of variable values
//!   -v, --verbose            Verbosity level (-v for verbose, -vv for debug)
//!   -q, --quiet              Show no information at all
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};

use stencil::{quotes, template, Error, Logger, StdinPrompt, ValuesFile};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Replaces the ${name} variables of a template file with the provided values")]
struct Cli {
    /// Template file
    file: PathBuf,

    /// Output file
    out: PathBuf,

    /// Prompt for the value of each unset template variable
    #[arg(short, long)]
    interactive: bool,

    /// Value for one template variable
    #[arg(short, long, num_args = 2, value_names = ["VAR", "VAL"], action = ArgAction::Append)]
    template: Vec<String>,

    /// TOML file of variable values (overridden by -t)
    #[arg(long, value_name = "FILE")]
    values: Option<PathBuf>,

    /// Verbosity level (-v for verbose, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Show no information at all
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// The repeated `-t VAR VAL` occurrences as ordered pairs
    fn explicit_pairs(&self) -> Vec<(String, String)> {
        self.template
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }
}

fn main() {
    let cli = Cli::parse();
    let logger = Logger::new(cli.verbose, cli.quiet);

    // Interrupts (typically at an interactive prompt) get a graceful
    // notice instead of a stack trace.
    if let Err(err) = ctrlc::set_handler(move || {
        logger.info("Terminating...");
        process::exit(130);
    }) {
        logger.debug(&format!("could not install interrupt handler: {}", err));
    }

    logger.info(quotes::random_quote());

    if let Err(err) = run(&cli, &logger) {
        logger.error(&err.to_string());
        process::exit(1);
    }
}

fn run(cli: &Cli, logger: &Logger) -> Result<(), Error> {
    let text = fs::read_to_string(&cli.file).map_err(|source| Error::Read {
        path: cli.file.clone(),
        source,
    })?;

    let mut vars = template::discover(&text);
    logger.debug(&format!(
        "discovered {} template variable(s) in {}",
        vars.len(),
        cli.file.display()
    ));

    if let Some(path) = &cli.values {
        let file = ValuesFile::from_file(path)?;
        for name in template::apply_explicit(&mut vars, &file.pairs()) {
            logger.warning(&format!(
                "the provided variable ({}) is not a template variable",
                name
            ));
        }
    }

    for name in template::apply_explicit(&mut vars, &cli.explicit_pairs()) {
        logger.warning(&format!(
            "the provided variable ({}) is not a template variable",
            name
        ));
    }

    if cli.interactive {
        let mut source = StdinPrompt;
        template::apply_interactive(&mut vars, &mut source).map_err(Error::Prompt)?;
    }

    template::validate(&vars)?;

    let output = template::substitute(&text, &vars);
    fs::write(&cli.out, output).map_err(|source| Error::Write {
        path: cli.out.clone(),
        source,
    })?;
    logger.debug(&format!("wrote {}", cli.out.display()));

    Ok(())
}
