use anyhow::Result;
use caseconv::cli::output::{write_conversions, write_guesses, OutputFormat, TextOptions};
use caseconv::{cli, Config, Converter, Style};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal};

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Unjumble identifiers into camel, snake or kebab case", long_about = None)]
struct Cli {
    /// Identifiers to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style: camel, snake or kebab (case-insensitive)
    #[arg(short, long, env = "CASECONV_STYLE")]
    style: Option<String>,

    /// Treat inputs as written strictly in this style instead of a mix
    #[arg(short, long, value_name = "STYLE")]
    from: Option<String>,

    /// Print the guessed style of each input instead of converting it
    #[arg(long)]
    guess: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Print each input next to its result
    #[arg(long)]
    show_input: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    // Style names are validated before any input is read
    let style = cli.style.as_deref().map(Style::from_name).transpose()?;
    let from = cli.from.as_deref().map(Style::from_name).transpose()?;

    let config = Config::load(style, from)?;
    log::debug!("resolved config: {:?}", config);

    let inputs = if cli.inputs.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("No inputs specified. Use --help for usage information.");
        }
        cli::read_inputs(stdin.lock())?
    } else {
        cli.inputs
    };

    let converter = Converter::new(&config);
    let options = TextOptions {
        colored: !cli.no_color && cli.format == OutputFormat::Text && io::stdout().is_terminal(),
        show_input: cli.show_input,
    };
    let mut stdout = io::stdout().lock();

    if cli.guess {
        let guesses = converter.guess_all(&inputs);
        write_guesses(&mut stdout, &guesses, options, cli.format)?;
    } else {
        let conversions = converter.convert_all(&inputs);
        write_conversions(&mut stdout, &conversions, options, cli.format)?;
    }

    Ok(())
}
