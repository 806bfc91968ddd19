mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use concord::{Checker, DictionarySynthesizer, Sentence, load_rules_file, uk};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let sentence = match read_sentence(&config) {
        Ok(sentence) => sentence,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut rules = uk::rules();
    if let Some(path) = &config.rules {
        match load_rules_file(path) {
            Ok(extra) => rules.extend(extra),
            Err(err) => {
                eprintln!("error: cannot load rules from {}: {err}", path.display());
                std::process::exit(1);
            }
        }
    }

    let synthesizer = match &config.dictionary {
        Some(path) => match DictionarySynthesizer::from_file(path) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                eprintln!("error: cannot load dictionary from {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => DictionarySynthesizer::new(),
    };

    let checker = Checker::new(rules, uk::inflections().clone(), Box::new(synthesizer));
    let details = checker.check_verbose(&sentence);
    debug_report::print_run(&details, config.color);
}

struct CliConfig {
    input: Option<PathBuf>,
    rules: Option<PathBuf>,
    dictionary: Option<PathBuf>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<PathBuf> = None;
    let mut rules: Option<PathBuf> = None;
    let mut dictionary: Option<PathBuf> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("concord {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--rules" => {
                let value = args.next().ok_or_else(|| "error: --rules expects a path".to_string())?;
                rules = Some(PathBuf::from(value));
            }
            "--dictionary" => {
                let value = args.next().ok_or_else(|| "error: --dictionary expects a path".to_string())?;
                dictionary = Some(PathBuf::from(value));
            }
            _ if arg.starts_with("--rules=") => {
                rules = Some(PathBuf::from(arg.trim_start_matches("--rules=")));
            }
            _ if arg.starts_with("--dictionary=") => {
                dictionary = Some(PathBuf::from(arg.trim_start_matches("--dictionary=")));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if input.is_some() {
                    return Err("error: sentence file provided multiple times".to_string());
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(CliConfig { input, rules, dictionary, color })
}

fn read_sentence(config: &CliConfig) -> Result<Sentence, String> {
    let json = match &config.input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("error: cannot read {}: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buffer
        }
    };

    if json.trim().is_empty() {
        return Err(format!("error: no sentence provided\n\n{}", help_text()));
    }

    serde_json::from_str(&json).map_err(|err| format!("error: malformed sentence JSON: {err}"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "concord {version}

Dependency-based agreement checker CLI.

Reads one analyzed sentence as JSON (tokens with posTag, dependency,
index and parentIndex fields), runs the rule set against it and prints
a per-rule report.

Usage:
  concord [OPTIONS] [sentence.json]

Options:
  --rules <path>        Extra rule file (JSON) loaded on top of the
                        built-in Ukrainian rules.
  --dictionary <path>   Synthesizer dictionary (JSON) used to realize
                        suggestions. Without it, matches carry no
                        suggested forms.
  --color               Force ANSI color output.
  --no-color            Disable ANSI color output.
  -h, --help            Show this help message.
  -V, --version         Print version information.

When no sentence file is given, the sentence JSON is read from stdin.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or malformed input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
