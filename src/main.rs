// kaleido: interactive expression evaluator

use std::io::{self, BufRead, Write};

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, EnvFilter};

use kaleido::repl::{self, Config, Session};

#[derive(ClapParser, Debug)]
#[command(name = "kaleido", version, about = "Interactive expression evaluator")]
struct Args {
    /// Evaluate this line and exit instead of starting the REPL
    expression: Option<String>,

    /// Print the parsed syntax tree before each result
    #[arg(long)]
    show_ast: bool,

    /// Print parse timing for each statement
    #[arg(long)]
    debug_info: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            show_ast: self.show_ast,
            debug_info: self.debug_info,
            color: !self.no_color,
        }
    }
}

fn init_logging() {
    // KALEIDO_LOG takes priority over RUST_LOG; default to warnings only
    let filter = EnvFilter::try_from_env("KALEIDO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_line<W: Write>(session: &mut Session, line: &str, out: &mut W, config: &Config) -> io::Result<()> {
    for outcome in session.process_line(line) {
        repl::render(out, &outcome, config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let config = args.config();
    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(expr) = &args.expression {
        run_line(&mut session, expr, &mut out, &config)?;
        return Ok(());
    }

    repl::render_banner(&mut out, &config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        repl::render_prompt(&mut out, &config)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // Ctrl+D
            writeln!(out)?;
            break;
        }

        run_line(&mut session, &line, &mut out, &config)?;
    }

    Ok(())
}
