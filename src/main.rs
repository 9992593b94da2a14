use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use reckon::{
    Error, Session,
    interpreter::{lexer::scan, parser::core::parse},
};

/// reckon evaluates arithmetic expressions, variables and user-defined
/// functions.
///
/// With no script it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to treat `contents` as the path of a script file.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed statements instead of evaluating them.
    #[arg(short, long)]
    ast: bool,

    /// The script to run. Omit it to start the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl(args.ast) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let mut session = Session::new();
    if let Err(e) = execute(&mut session, &script, args.ast) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Reads lines from stdin until end of input, evaluating each one in a single
/// session. Errors are reported and the prompt carries on.
fn repl(ast: bool) -> io::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        if let Err(e) = execute(&mut session, &line, ast) {
            eprintln!("{e}");
        }
    }
}

/// Runs one chunk of source, printing the result of the last statement, or
/// every parsed statement when `ast` is set.
fn execute(session: &mut Session, source: &str, ast: bool) -> Result<(), Error> {
    if ast {
        for statement in parse(&scan(source)?)? {
            println!("{statement}");
        }
        return Ok(());
    }

    if let Some(value) = session.run(source)? {
        println!("{value}");
    }
    Ok(())
}
