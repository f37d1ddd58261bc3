use clap::Parser;
use log::{error, info, log_enabled, Level};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tag_cloud::{generate_tag_cloud_file, Error};

/// Generate an HTML tag cloud of the most frequent words in a text file.
///
/// Any argument left out is asked for on the terminal.
#[derive(Parser, Debug)]
#[command(name = "tag-cloud-cli", version)]
struct Cli {
    /// Text file to count word occurrences in (`.gz` files are decompressed)
    source: Option<PathBuf>,

    /// HTML file to write the tag cloud to
    destination: Option<PathBuf>,

    /// Maximum number of words to include in the tag cloud
    #[arg(allow_hyphen_values = true)]
    max_tags: Option<String>,

    /// Also write the complete ranked word frequency list as CSV
    #[arg(long, value_name = "PATH")]
    frequencies_csv: Option<PathBuf>,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let source = match cli.source {
        Some(source) => source,
        None => PathBuf::from(prompt(
            &mut input,
            "Please enter the name of a text file to count word occurrences: ",
        )?),
    };

    let destination = match cli.destination {
        Some(destination) => destination,
        None => PathBuf::from(prompt(&mut input, "Please enter the name of the output file: ")?),
    };

    let max_tags = match cli.max_tags {
        Some(max_tags) => max_tags,
        None => prompt(
            &mut input,
            "Please enter the maximum number of words to be included in the generated tag cloud: ",
        )?,
    };
    let max_tags = parse_max_tags(&max_tags)?;

    let summary = generate_tag_cloud_file(
        &source,
        &destination,
        max_tags,
        cli.frequencies_csv.as_deref(),
    )?;

    info!(
        "{} of {} distinct words selected (counts {}..={})",
        summary.selected_words, summary.distinct_words, summary.min_count, summary.max_count
    );

    Ok(())
}

/// Prints `message` and reads one trimmed line of the answer.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String, Error> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(Error::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no answer given on standard input",
        )));
    }

    Ok(answer.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn parse_max_tags(value: &str) -> Result<usize, Error> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidTagCount(value.trim().to_string()))
}

fn report_error(e: &Error) {
    error!("{}", e);

    if !log_enabled!(Level::Error) {
        eprintln!("{}", e);
    }
}
