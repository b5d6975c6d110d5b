//! Lexigram CLI entry point.

use lexigram_runtime::{Repl, Session, init_logging, run_batch};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    vocabulary: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    prompt: Option<String>,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--prompt" => {
                i += 1;
                if i >= args.len() {
                    return Err("--prompt requires a value".into());
                }
                config.prompt = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.vocabulary.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("lexigram {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut sources = Vec::with_capacity(config.vocabulary.len());
    for path in &config.vocabulary {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        info!(path = %path.display(), "loaded vocabulary");
        sources.push(text);
    }
    let session = Session::english_with(&sources)?;

    if config.batch_mode {
        let failures = run_batch(&session, io::stdin().lock())?;
        return Ok(if failures == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut repl = Repl::new(session)?;
    if let Some(prompt) = config.prompt {
        repl = repl.with_prompt(prompt);
    }
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mLexigram\x1b[0m - English CNF grammar and lexicon explorer

\x1b[1mUSAGE:\x1b[0m
    lexigram [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Vocabulary files merged after the bundled tables

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Read commands from stdin and exit (no REPL)
    --prompt TEXT      Use TEXT as the REPL prompt

\x1b[1mENVIRONMENT:\x1b[0m
    LEXIGRAM_LOG       Log filter, e.g. debug or lexigram_lexicon=trace

\x1b[1mEXAMPLES:\x1b[0m
    lexigram                          Start interactive REPL
    lexigram slang.lex                Merge slang.lex, then start REPL
    echo 'pair NP VP' | lexigram -b   Answer one query and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    lookup WORD          Every reading of WORD
    pos WORD             Parts of speech WORD can take
    features WORD [POS]  First reading of WORD, optionally for POS
    subcat LEMMA         Complement frames of a verb
    lhs SYMBOL           Rules rewriting SYMBOL
    pair LEFT RIGHT      Binary rules with right side LEFT RIGHT
    lexical SYMBOL       Unary rules over SYMBOL
    start SYMBOL         Whether SYMBOL is the start symbol
    stats                Grammar and lexicon sizes
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
