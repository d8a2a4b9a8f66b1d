//! Wordle Freq CLI
//!
//! Interactive command-line interface for the letter-frequency assistant.

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use wordle_freq::logging::init_tracing;
use wordle_freq::{Config, DuplicatePolicy, Solver, SolverError, WordStore};

const HELP_TEXT: &str = "\
Commands:
  guess                 then enter \"<word> <feedback>\" on the next line
  guess <word> <fb>     apply a round inline, e.g. guess crane gybbb
  top [n]               show the n best candidates
  letters [n]           show the n most frequent letters
  remaining             list every remaining candidate
  reset                 start over with the full word list
  help                  show this text
  exit                  quit

Feedback is five letters: b = black, y = yellow, g = green.
If a repeated letter is both black and yellow/green, mark the black copy as
yellow (or start with --duplicates tallied).";

#[derive(Parser)]
#[command(
    name = "wordle-freq",
    about = "Narrow a Wordle word list and rank guesses by letter frequency"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Word list, one word per line
    #[arg(short, long)]
    dictionary: Option<PathBuf>,
    /// Number of ranked words to show
    #[arg(short, long)]
    words: Option<NonZeroUsize>,
    /// Number of letters to show in the frequency listing
    #[arg(short, long)]
    letters: Option<NonZeroUsize>,
    /// How black feedback on a repeated letter is treated
    #[arg(long, value_enum)]
    duplicates: Option<DuplicatePolicy>,
    /// Log every elimination pass to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags override the config file. Zero limits are rejected by clap
    /// while parsing, and the file is validated when loaded.
    fn into_config(self) -> Result<Config, SolverError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(dictionary) = self.dictionary {
            config.dictionary = dictionary;
        }
        if let Some(words) = self.words {
            config.max_words = words.get();
        }
        if let Some(letters) = self.letters {
            config.max_letters = letters.get();
        }
        if let Some(duplicates) = self.duplicates {
            config.duplicates = duplicates;
        }
        Ok(config)
    }
}

fn print_top_words(solver: &Solver, n: usize) {
    println!("Top words:");
    for (i, scored) in solver.top_words(n).iter().enumerate() {
        println!("{:>4}. {} {:.4}", i + 1, scored.word, scored.score);
    }
}

fn print_top_letters(solver: &Solver, n: usize) {
    println!("Top letters by frequency:");
    for entry in solver.top_letters(n) {
        println!("  {}: {:.4}", entry.letter, entry.frequency);
    }
}

fn print_overview(solver: &Solver, config: &Config) {
    println!(
        "Candidates: {} (duplicate letters: {:?})",
        solver.remaining_count(),
        solver.policy()
    );
    print_top_words(solver, config.max_words);
    print_top_letters(solver, config.max_letters);
    println!();
}

fn apply_round(solver: &mut Solver, config: &Config, line: &str) {
    match solver.apply_line(line) {
        Ok(summary) => {
            println!(
                "Eliminated {} words ({} → {})",
                summary.eliminated(),
                summary.before,
                summary.after
            );
            if summary.after == 0 {
                println!("No words match this feedback. Use 'reset' to start over.");
            } else {
                print_overview(solver, config);
            }
        }
        Err(e) => println!("Rejected: {e}"),
    }
}

fn read_line(stdin: &io::Stdin) -> io::Result<Option<String>> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn run_interactive(mut solver: Solver, config: &Config) -> io::Result<()> {
    println!("Wordle Freq");
    print_overview(&solver, config);
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = read_line(&stdin)? else {
            break;
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "exit" | "quit" | "q" => break,
            "help" | "h" | "?" => println!("{HELP_TEXT}"),
            "guess" | "g" if parts.len() > 1 => {
                apply_round(&mut solver, config, &parts[1..].join(" "));
            }
            "guess" | "g" => {
                println!("Enter \"<word> <feedback>\" using b, y, g for each letter.");
                print!("guess> ");
                stdout.flush()?;
                let Some(line) = read_line(&stdin)? else {
                    break;
                };
                apply_round(&mut solver, config, &line);
            }
            "top" | "t" => {
                let n = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(config.max_words);
                print_top_words(&solver, n);
            }
            "letters" | "l" => {
                let n = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(config.max_letters);
                print_top_letters(&solver, n);
            }
            "remaining" | "r" => {
                println!("Remaining candidates: {}", solver.remaining_count());
                for (i, word) in solver.candidates().iter().enumerate() {
                    if i > 0 && i % 10 == 0 {
                        println!();
                    }
                    print!("{:>8}", word);
                }
                println!();
            }
            "reset" => {
                solver.reset();
                println!("Reset to the full list.");
                print_overview(&solver, config);
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type 'help' for available commands.");
            }
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let store = match WordStore::load(&config.dictionary) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let solver = Solver::new(store, config.duplicates);
    if let Err(e) = run_interactive(solver, &config) {
        eprintln!("I/O error: {e}");
        process::exit(1);
    }
}
