use std::env;
use std::process;

use fretboard::playback::LogSink;
use fretboard::{display_list, play_at, Fretboard, FretboardConfig, Highlights};

const USAGE: &str = "\
Usage: fretboard [options] <root> [chord or scale name]
       fretboard [--config <file.yaml>] --list

Options:
  --config <file>   Load settings from a YAML file
  --json            Print the highlight result as JSON
  --render          Print the draw instructions as JSON
  --click <x> <y>   Resolve a click on the rendered board and print the note
  --list            List the available chords and scales";

enum Output {
    Table,
    Json,
    Render,
}

struct Args {
    config_path: Option<String>,
    output: Output,
    click: Option<(f64, f64)>,
    list: bool,
    positional: Vec<String>,
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn parse_coordinate(value: Option<String>) -> f64 {
    match value.as_deref().map(str::parse::<f64>) {
        Some(Ok(v)) => v,
        _ => usage_error("--click needs two numeric coordinates"),
    }
}

fn parse_args() -> Args {
    let mut args = Args {
        config_path: None,
        output: Output::Table,
        click: None,
        list: false,
        positional: Vec::new(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => args.config_path = Some(path),
                None => usage_error("--config needs a file path"),
            },
            "--json" => args.output = Output::Json,
            "--render" => args.output = Output::Render,
            "--click" => {
                let x = parse_coordinate(iter.next());
                let y = parse_coordinate(iter.next());
                args.click = Some((x, y));
            }
            "--list" => args.list = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            _ => args.positional.push(arg),
        }
    }

    args
}

fn print_list(board: &Fretboard) {
    for category in board.catalog().categories() {
        println!("{}", category.name);
        for entry in &category.entries {
            println!("    {:<32} {:?}", entry.name, entry.intervals.offsets());
        }
    }
}

fn print_table(highlights: &Highlights) {
    println!("{}", highlights.title());
    for p in &highlights.positions {
        println!(
            "string {}  fret {:>2}  {:<2}{}  {}  {} nm",
            p.string + 1,
            p.fret,
            p.pitch_class,
            p.octave,
            p.color,
            p.wavelength_nm
        );
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("serialization failed: {}", e);
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    let args = parse_args();

    let config = match &args.config_path {
        Some(path) => match FretboardConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load config '{}': {}", path, e);
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => FretboardConfig::default(),
    };
    let board = Fretboard::from_config(&config);

    if args.list {
        print_list(&board);
        return;
    }

    let Some((root, rest)) = args.positional.split_first() else {
        usage_error("Please select a base note");
    };
    let chord = rest.join(" ");
    let chord = (!chord.is_empty()).then_some(chord.as_str());

    let highlights = match board.highlights(root, chord) {
        Ok(highlights) => highlights,
        Err(e) => {
            log::error!("query '{}' failed: {}", root, e);
            eprintln!("Error drawing notes: {}", e);
            process::exit(1);
        }
    };

    if let Some((x, y)) = args.click {
        match play_at(&highlights, &config.layout, x, y, config.note_duration, &mut LogSink) {
            Some(request) => println!("{}", to_json(&request)),
            None => {
                eprintln!("No note at ({}, {})", x, y);
                process::exit(2);
            }
        }
        return;
    }

    match args.output {
        Output::Table => print_table(&highlights),
        Output::Json => println!("{}", to_json(&highlights)),
        Output::Render => {
            let commands = display_list(
                &config.layout,
                board.tuning(),
                board.frets(),
                &highlights.positions,
            );
            println!("{}", to_json(&commands));
        }
    }
}
