use waitpath::args::{self, Parsed};
use waitpath::wait::{wait_all, Outcome, PathWait};
use waitpath::{logging, signals};

const EXIT_OK: i32 = 0;
const EXIT_TIMEOUT: i32 = 1;
const EXIT_INTERRUPTED: i32 = 2;
const EXIT_USAGE: i32 = 3;

fn main() {
    std::process::exit(run());
}

// The sole owner of process-exit semantics; everything below it returns.
fn run() -> i32 {
    logging::init();

    let config = match args::parse(std::env::args().skip(1)) {
        Ok(Parsed::Config(config)) => config,
        Ok(Parsed::Help) => {
            print!("{}", args::HELP);
            return EXIT_OK;
        }
        Err(err) => {
            eprintln!("waitpath: {err}");
            eprintln!("{}", args::SYNOPSIS);
            return EXIT_USAGE;
        }
    };
    tracing::debug!("parsed {:?}", config);

    let interrupted = signals::install();
    let waits: Vec<PathWait> = config
        .paths
        .iter()
        .map(|path| PathWait::new(path, config.wait_for_deletion))
        .collect();

    match wait_all(&waits, config.timeout, &interrupted) {
        Outcome::Satisfied => EXIT_OK,
        Outcome::TimedOut => EXIT_TIMEOUT,
        Outcome::Interrupted => EXIT_INTERRUPTED,
    }
}
