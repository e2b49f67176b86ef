//! Command-line front end for cpc-translate
//!
//! Usage:
//!   cpc to-language `<formula>` [-p `<meaning>`] [-q `<meaning>`] [-r `<meaning>`] [--tree]
//!   cpc to-logic `<sentence>` [--latex]
use clap::{Parser, Subcommand};
use cpc_translate::tree::{Atom, Formula};
use cpc_translate::{match_sentence, parse, to_display_notation, to_sentence, Mapping, Template};
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use std::process::ExitCode;

/// Translate between propositional formulas over P, Q, R and simple Portuguese sentences
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a formula into a Portuguese sentence
    ToLanguage {
        /// The formula, e.g. "(P ∧ Q) → R" or "(P ^ Q) -> R"
        formula: String,
        /// What P means; blank means the letter itself
        #[arg(short = 'p', long = "p-means", default_value = "chover")]
        p: String,
        /// What Q means; blank means the letter itself
        #[arg(short = 'q', long = "q-means", default_value = "a grama ficará molhada")]
        q: String,
        /// What R means; blank means the letter itself
        #[arg(short = 'r', long = "r-means", default_value = "a aula será cancelada")]
        r: String,
        /// Also print the formula with explicit grouping and the meanings of its atoms
        #[arg(long, default_value_t = false)]
        tree: bool,
    },
    /// Find the formula behind a simple Portuguese sentence
    ToLogic {
        /// The sentence, e.g. "Se chover, então a grama ficará molhada."
        sentence: String,
        /// Also print the formula as LaTeX
        #[arg(long, default_value_t = false)]
        latex: bool,
    },
}

fn init_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("warn")?.log_to_stderr().start()
}

/// One `atom = meaning` line per atom the formula uses
fn meaning_lines(formula: &Formula, mapping: &Mapping) -> Vec<String> {
    formula
        .atoms()
        .into_iter()
        .map(|atom| format!("{} = {}", atom, mapping.meaning(atom)))
        .collect()
}

fn to_language(formula: &str, mapping: &Mapping, tree: bool) -> ExitCode {
    match parse(formula) {
        Ok(formula) => {
            if tree {
                println!("{}", formula);
                for line in meaning_lines(&formula, mapping) {
                    println!("{}", line);
                }
            }
            println!("{}", to_sentence(&formula, mapping));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!(
                "hint: use only P, Q, R, parentheses and the connectives ¬ ∧ ∨ → ↔ \
                 (or ~ ^ v -> <->)"
            );
            ExitCode::FAILURE
        }
    }
}

fn to_logic(sentence: &str, latex: bool) -> ExitCode {
    match match_sentence(sentence) {
        Some(found) => {
            println!("{}", found.formula());
            if latex {
                println!("{}", to_display_notation(found.formula()));
            }
            for (atom, phrase) in found.mapping.iter() {
                println!("{} = {}", atom, phrase);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: the sentence doesn't fit any known template, try one of:");
            for template in Template::ALL {
                eprintln!("  {}", template.example());
            }
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _logger = match init_logging() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging disabled: {}", err);
            None
        }
    };
    match args.command {
        Command::ToLanguage {
            formula,
            p,
            q,
            r,
            tree,
        } => {
            let mapping = Mapping::with_defaults([(Atom::P, p), (Atom::Q, q), (Atom::R, r)]);
            to_language(&formula, &mapping, tree)
        }
        Command::ToLogic { sentence, latex } => to_logic(&sentence, latex),
    }
}

#[cfg(test)]
mod tests {
    use super::meaning_lines;
    use cpc_translate::tree::Atom;
    use cpc_translate::{parse, Mapping};

    #[test]
    fn only_used_atoms_are_described() {
        let mapping = Mapping::with_defaults([(Atom::P, "chover"), (Atom::Q, "ventar"), (Atom::R, "")]);
        let formula = parse("R -> ~P").unwrap();
        assert_eq!(meaning_lines(&formula, &mapping), ["P = chover", "R = R"]);

        let formula = parse("Q & Q").unwrap();
        assert_eq!(meaning_lines(&formula, &mapping), ["Q = ventar"]);
    }
}
