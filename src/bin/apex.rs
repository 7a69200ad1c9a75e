//! Apex CLI.
//!
//! Reads an Apex document from standard input and writes JSON to standard
//! output. Errors serialize as a JSON array on standard error, painted red
//! when stderr is a terminal. Exit code 0 on success, 1 on any error.

use clap::{Arg, ArgAction, Command};
use std::io::{self, Read, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use apex::api::{process, OutputFormat, ProcessArgs};
use apex::error::Error;
use apex::resolve::FsResolver;

fn main() {
    let matches = Command::new("apex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Apex IDL parser, validator, and semantic model emitter")
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format: model (default), ast, tokens")
                .default_value("model"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print JSON output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Directory imports are resolved against")
                .default_value("."),
        )
        .get_matches();

    let format = match matches
        .get_one::<String>("format")
        .expect("format has a default")
        .parse::<OutputFormat>()
    {
        Ok(format) => format,
        Err(message) => {
            write_errors(&[Error::new(message)]);
            std::process::exit(1);
        }
    };

    let mut content = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut content) {
        write_errors(&[Error::new(format!("failed to read stdin: {}", err))]);
        std::process::exit(1);
    }

    let root = matches
        .get_one::<String>("root")
        .expect("root has a default");
    let resolver = FsResolver::new(root);

    let args = ProcessArgs {
        content,
        source_name: String::new(),
        format,
        pretty: matches.get_flag("pretty"),
    };

    match process(&args, Some(&resolver)) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            write_errors(&err.errors());
            std::process::exit(1);
        }
    }
}

fn write_errors(errors: &[Error]) {
    let json = serde_json::to_string(errors).unwrap_or_else(|_| String::from("[]"));
    let choice = if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = writeln!(&mut stderr, "{}", json);
    let _ = stderr.reset();
}
