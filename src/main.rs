use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use exprcalc::{
    config::{Config, DEFAULT_MAX_DEPTH},
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::evaluate,
    format_tokens,
    lexer::lexer::tokenize,
    parse_source, render_error,
};

/// Evaluates arithmetic expressions: numbers, `+ - * / ^`, negation and parentheses.
#[derive(Parser, Debug)]
#[command(name = "exprcalc", version, about, long_about = None)]
struct Cli {
    /// Expression to evaluate once. Without it an interactive prompt is started.
    expression: Option<String>,

    /// Print the scanned tokens before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed tree in prefix notation before evaluating.
    #[arg(short, long)]
    ast: bool,

    /// Drop unrecognised characters and ignore trailing tokens.
    #[arg(short, long)]
    lenient: bool,

    /// Maximum nesting depth of an expression.
    #[arg(long, env = "EXPRCALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Cli {
    fn config(&self) -> Config {
        let config = if self.lenient {
            Config::lenient()
        } else {
            Config::default()
        };

        config.with_max_depth(self.max_depth)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();

    match &cli.expression {
        Some(expression) => {
            if !run_expression(&cli, &config, expression) {
                std::process::exit(1);
            }
            Ok(())
        }
        None => run_prompt(&cli, &config),
    }
}

fn run_prompt(cli: &Cli, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Enter Your Mathematical Expression (or 'exit' to quit):");

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if input.is_empty() {
            println!("Please enter an expression.");
        } else {
            run_expression(cli, config, input);
        }

        println!("\nEnter another expression (or 'exit' to quit):");
        stdout.flush()?;
    }

    Ok(())
}

/// Evaluates one expression and reports the outcome, returning whether it succeeded.
fn run_expression(cli: &Cli, config: &Config, input: &str) -> bool {
    if cli.tokens {
        println!("Tokens: {}", format_tokens(&tokenize(input, config)));
    }

    let result = parse_source(input, config).and_then(|ast| {
        if cli.ast {
            println!("Tree: {}", ast);
        }
        evaluate(&ast)
    });

    match result {
        Ok(value) => {
            println!("Result: {:?}", value);
            true
        }
        Err(error) => {
            report_error(&error, input);
            false
        }
    }
}

fn report_error(error: &Error, input: &str) {
    eprint!("{}", render_error(error, input));
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("Hint: {}", tip);
    }
}
