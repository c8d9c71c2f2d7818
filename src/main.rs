extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;

pub mod extractor;

use clap::{Arg, ArgMatches, App};
use term_grid::{Grid, GridOptions, Direction, Filling, Cell};

use std::path::Path;

use extractor::{ExtractError, MnemonicSet, OutputOrder};

const DEFAULT_INPUT: &str = "pokemon.hex";
const DEFAULT_OUTPUT: &str = "instructions.txt";

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    let ipath = Path::new(args.value_of("INPUT").unwrap_or(DEFAULT_INPUT));
    let opath = Path::new(args.value_of("output").unwrap_or(DEFAULT_OUTPUT));
    let order = if args.is_present("sort") {
        OutputOrder::Lexicographic
    } else {
        OutputOrder::default()
    };

    debug!("Arguments:\n\tVerbosity: {}\n\tOrder: {:?}\n\tOutfile: {}\n\tInfile: {}",
        verbosity_filter(args.occurrences_of("verbose")),
        order,
        opath.display(),
        ipath.display()
    );

    match run(ipath, opath, order) {
        Ok(set) => {
            if args.is_present("print-debug") {
                print_debug(&set, order);
            }
        },
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        },
    }
}

/// Reads `ipath` in full, then writes its mnemonics to `opath`.
/// `opath` is not touched if the input cannot be read.
fn run(ipath: &Path, opath: &Path, order: OutputOrder) -> Result<MnemonicSet, ExtractError> {
    let set = extractor::extract(ipath)?;
    extractor::write_output(opath, &set, order)?;
    Ok(set)
}

fn print_debug(set: &MnemonicSet, order: OutputOrder) {
    let mut grid = Grid::new(GridOptions {
        filling:     Filling::Spaces(1),
        direction:   Direction::LeftToRight,
    });

    for entry in set.ordered(order) {
        grid.add(Cell::from(entry.mnemonic.clone()));
        grid.add(Cell::from(format!("x{}", entry.occurrences)));
        grid.add(Cell::from(format!("line {}", entry.first_line)));
    }

    println!("{}", grid.fit_into_columns(3));
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("INPUT")
            .help("Sets the instruction listing to read (default: pokemon.hex)")
            .required(false)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .help("write mnemonics to an outfile (default: instructions.txt)"))
        .arg(Arg::with_name("sort")
            .short("s")
            .long("sort")
            .takes_value(false)
            .help("write mnemonics in lexicographic instead of first-seen order"))
        .arg(Arg::with_name("print-debug")
            .short("d")
            .long("print-debug")
            .takes_value(false)
            .help("prints each mnemonic with its occurrence count and first line to STDOUT"))
        .get_matches()
}

fn verbosity_filter(verbosity: u64) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(verbosity_filter(verbosity))
        .chain(std::io::stdout())
        .apply().ok();
}
