use minilex::{Scanner, TokenKind};
use std::{
    env,
    io::{self, Write},
};

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => run_prompt(),
        2 => run_file(args[1].as_str()),
        _ => {
            writeln!(stdout, "Usage: minilex [script]").expect("Something went wrong");
            std::process::exit(64);
        },
    };

    match result {
        Err(e) => {
            writeln!(stderr, "{}", e).expect("Something went wrong");
            std::process::exit(65);
        },
        Ok(()) => return,
    }
}

fn run_file(path: &str) -> io::Result<()> {
    let contents = std::fs::read_to_string(path)?;
    run(contents.as_str());
    Ok(())
}

fn run_prompt() -> io::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        run(buffer.as_str());
    }

    Ok(())
}

fn run(source: &str) {
    let mut scanner = Scanner::new(source);
    loop {
        let token = scanner.next_token();
        if token.kind == TokenKind::EndOfInput {
            break;
        }
        println!("{}", token);
    }
}
