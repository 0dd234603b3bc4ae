use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use pratt::{
    format_error,
    lexer::lexer::{tokenize, DEFAULT_SOURCE_NAME},
    parser::parser::parse,
};
use tracing_subscriber::EnvFilter;

/// Parse an arithmetic expression and print its tree.
#[derive(Parser, Debug)]
#[command(name = "pratt", version)]
struct Cli {
    /// Expression to parse; read from --file or stdin when omitted
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<String>,

    /// Read the expression from a file
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Print the full tree structure instead of the parenthesized rendering
    #[arg(long)]
    tree: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (source, file_name) = match read_source(&cli) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), "tokenized");

    let parse_start = Instant::now();
    let expr = match parse(tokens, Rc::new(file_name.clone())) {
        Ok(expr) => expr,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(elapsed = ?parse_start.elapsed(), total = ?start.elapsed(), "parsed");

    if cli.tree {
        println!("{:#?}", expr);
    } else {
        println!("{}", expr);
    }

    ExitCode::SUCCESS
}

/// Returns the expression source and the name to report it under.
fn read_source(cli: &Cli) -> io::Result<(String, String)> {
    if let Some(path) = &cli.file {
        let contents = fs::read_to_string(path)?;
        return Ok((contents.trim_end().to_string(), path.display().to_string()));
    }

    if !cli.expression.is_empty() {
        return Ok((cli.expression.join(" "), String::from(DEFAULT_SOURCE_NAME)));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok((buffer.trim_end().to_string(), String::from(DEFAULT_SOURCE_NAME)))
}
