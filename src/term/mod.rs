extern crate ansi_term;
extern crate ctrlc;
use crate::error;
use crate::lang::{compile, Error};
use crate::mach::{Output, Program, Runtime, TokenReader};
use ansi_term::Style;
use clap::{ArgAction, Parser};
use std::io::{Stdout, Write};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing::{debug, warn, Level};

/// Run a BASIC program from a file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    path: PathBuf,

    /// Seed for random() so a run can be repeated.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the parsed program instead of running it.
    #[arg(long)]
    ast: bool,

    /// More logging on stderr; repeat for more.
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

pub fn main() {
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
    if let Err(error) = main_run(&args) {
        eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
        std::process::exit(1);
    }
}

fn main_run(args: &Args) -> Result<(), Error> {
    let source = match std::fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(e) => {
            return Err(error!(DeviceIoError;
                format!("{}: {}", args.path.display(), e)))
        }
    };
    let statements = compile(&source)?;
    debug!(path = %args.path.display(), statements = statements.len(), "parsed");
    if args.ast {
        let mut console = Console::new();
        for statement in &statements {
            console.print(&format!("{}\n", statement))?;
        }
        return Ok(());
    }
    let stdin = std::io::stdin();
    let input = TokenReader::new(stdin.lock());
    let mut runtime = Runtime::new(Program::new(statements), input, Console::new());
    if let Some(seed) = args.seed {
        runtime.seed(seed);
    }
    let interrupted = runtime.interrupt_flag();
    if let Err(e) = ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst)) {
        warn!("Ctrl-C will not stop the program: {}", e);
    }
    runtime.run()
}

/// Standard output, flushed after every write so a prompt shows up before
/// INPUT waits.
struct Console {
    stdout: Stdout,
}

impl Console {
    fn new() -> Console {
        Console {
            stdout: std::io::stdout(),
        }
    }
}

impl Output for Console {
    fn print(&mut self, text: &str) -> Result<(), Error> {
        let mut out = self.stdout.lock();
        match out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            Ok(()) => Ok(()),
            Err(e) => Err(error!(DeviceIoError; e.to_string())),
        }
    }
}
