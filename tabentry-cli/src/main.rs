use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr, eyre};

use tabentry::{
    ColumnFormat, DEFAULT_COLUMN_WIDTH, DEFAULT_OUTPUT_FILE, DEFAULT_TITLE, DataEntryUI, FieldSet,
    Overflow, UiOptions, parse_labels,
};

mod logging;

const LABEL_PROMPT: &str = "Enter column labels separated by commas: ";

#[derive(Debug, Parser)]
#[command(
    name = "tabentry",
    version,
    about = "Enter rows in a terminal form and append them, tab-aligned, to a text file"
)]
struct Cli {
    /// File that receives one tab-separated row per save
    #[arg(long = "output-file", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// Comma-separated column labels; prompts on stdin when omitted
    #[arg(long = "labels", value_name = "LIST")]
    labels: Option<String>,

    /// Width every column is padded to
    #[arg(
        long = "column-width",
        value_name = "N",
        default_value_t = DEFAULT_COLUMN_WIDTH,
        value_parser = parse_width
    )]
    column_width: usize,

    /// Keep values longer than the column width instead of cutting them
    #[arg(long = "no-truncate")]
    no_truncate: bool,

    /// How long a status message stays visible
    #[arg(long = "status-timeout-ms", value_name = "MS", default_value_t = 3000)]
    status_timeout_ms: u64,

    /// Terminal window title
    #[arg(long = "title", value_name = "TEXT", default_value = DEFAULT_TITLE)]
    title: String,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long = "log-dir", value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.log_dir.as_deref())?;

    let fields = match cli.labels.as_deref() {
        Some(list) => parse_labels(list),
        None => {
            let stdin = io::stdin();
            read_labels(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    let ui = DataEntryUI::new(fields)
        .with_output_file(&cli.output_file)
        .with_options(ui_options(&cli));
    let summary = ui.run().map_err(Report::msg)?;

    println!(
        "saved {} row(s) to {}",
        summary.rows_saved,
        summary.output_path.display()
    );
    Ok(())
}

fn ui_options(cli: &Cli) -> UiOptions {
    let overflow = if cli.no_truncate {
        Overflow::Extend
    } else {
        Overflow::Truncate
    };
    UiOptions::default()
        .with_title(cli.title.clone())
        .with_column_format(ColumnFormat::new(cli.column_width).with_overflow(overflow))
        .with_status_timeout(Duration::from_millis(cli.status_timeout_ms))
}

/// Prompt for the label line. Only the line terminator is stripped.
fn read_labels(input: &mut impl BufRead, output: &mut impl Write) -> Result<FieldSet> {
    output
        .write_all(LABEL_PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .wrap_err("failed to write label prompt")?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .wrap_err("failed to read column labels")?;
    if read == 0 {
        return Err(eyre!("no column labels provided (end of input)"));
    }
    Ok(parse_labels(&line))
}

fn parse_width(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("column width must be at least 1".to_string()),
        Ok(width) => Ok(width),
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_then_parses_label_line() {
        let mut input = Cursor::new("ID,Name,Age\n");
        let mut output = Vec::new();
        let fields = read_labels(&mut input, &mut output).unwrap();
        assert_eq!(fields.labels(), vec!["ID", "Name", "Age"]);
        assert_eq!(String::from_utf8(output).unwrap(), LABEL_PROMPT);
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(read_labels(&mut input, &mut output).is_err());
    }

    #[test]
    fn blank_line_yields_one_unnamed_column() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        let fields = read_labels(&mut input, &mut output).unwrap();
        assert_eq!(fields.labels(), vec![""]);
    }

    #[test]
    fn defaults_match_documented_behaviour() {
        let cli = Cli::parse_from(["tabentry"]);
        assert_eq!(cli.output_file, PathBuf::from("data.txt"));
        assert_eq!(cli.column_width, 15);
        let options = ui_options(&cli);
        assert_eq!(options.status_timeout, Duration::from_millis(3000));
        assert_eq!(options.column_format.overflow, Overflow::Truncate);
        assert_eq!(options.title, "Data Entry GUI");
    }

    #[test]
    fn rejects_zero_column_width() {
        assert!(Cli::try_parse_from(["tabentry", "--column-width", "0"]).is_err());
    }

    #[test]
    fn no_truncate_switches_overflow() {
        let cli = Cli::parse_from(["tabentry", "--no-truncate", "--labels", "a,b"]);
        assert_eq!(ui_options(&cli).column_format.overflow, Overflow::Extend);

        let cli = Cli::parse_from(["tabentry", "--column-width", "20"]);
        assert_eq!(ui_options(&cli).column_format, ColumnFormat::new(20));
        assert_eq!(cli.labels.as_deref(), Some("a,b"));
    }
}
