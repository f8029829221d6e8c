use clap::{ArgAction, Parser};

use crate::core::{
    chart::{SortDirection, SortOption},
    constants::{DEFAULT_MAX_LABEL_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_PRECISION},
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "barchart",
    version,
    disable_version_flag = true,
    about = "Bar charts from line-based data, for terminals, Mermaid and Chart.js",
    after_help = "Input lines look like `<value> <label>`; the value may carry currency \
                  symbols and thousands separators, and the separator may be any of \
                  space, tab, `,`, `;`, `:`, `|` or `#`.\n\n\
                  Example: du -s * | barchart --sort value --desc"
)]
pub struct Cli {
    /// Count occurrences of each line instead of parsing values
    #[arg(short, long)]
    pub count: bool,

    /// Maximum chart row length
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Maximum label length; longer labels are cut in the middle
    #[arg(short = 'L', long = "label-length", default_value_t = DEFAULT_MAX_LABEL_LENGTH)]
    pub max_label_length: usize,

    /// Use the terminal width as maximum row length
    #[arg(short = 'F', long)]
    pub fit: bool,

    /// Decimal digits kept in values
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    pub precision: u32,

    /// Scale bars logarithmically
    #[arg(short = 'S', long)]
    pub scale: bool,

    /// Create a Mermaid XY chart
    #[arg(short, long, conflicts_with = "chartjs")]
    pub mermaid: bool,

    /// Create a Chart.js configuration
    #[arg(short = 'C', long)]
    pub chartjs: bool,

    /// Chart title (Mermaid, Chart.js)
    #[arg(short = 'T', long, default_value = "")]
    pub title: String,

    /// Read data from file (`-` for stdin)
    #[arg(short, long = "in", value_name = "FILE")]
    pub input: Option<String>,

    /// Write chart to file (`-` for stdout)
    #[arg(short, long = "out", value_name = "FILE")]
    pub output: Option<String>,

    /// Chart sorting option
    #[arg(short, long, value_enum, default_value_t = SortOption::None)]
    pub sort: SortOption,

    /// Sort in descending order
    #[arg(short, long)]
    pub desc: bool,

    /// Symbol used for drawing bars (first character)
    #[arg(short, long)]
    pub tick: Option<String>,

    /// Display version information and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: (),
}

impl Cli {
    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// Custom tick, if one was given.
    #[must_use]
    pub fn tick(&self) -> Option<char> {
        self.tick.as_deref().and_then(|t| t.chars().next())
    }

    /// `None` means stdin.
    #[must_use]
    pub fn input_path(&self) -> Option<&str> {
        stdio_or_path(self.input.as_deref())
    }

    /// `None` means stdout.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        stdio_or_path(self.output.as_deref())
    }
}

fn stdio_or_path(p: Option<&str>) -> Option<&str> {
    p.filter(|p| !p.is_empty() && *p != "-")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("barchart").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(cli.max_label_length, DEFAULT_MAX_LABEL_LENGTH);
        assert_eq!(cli.precision, DEFAULT_PRECISION);
        assert_eq!(cli.sort, SortOption::None);
        assert_eq!(cli.sort_direction(), SortDirection::Ascending);
        assert_eq!(cli.tick(), None);
        assert_eq!(cli.input_path(), None);
        assert_eq!(cli.output_path(), None);
    }

    #[test]
    fn short_flags() {
        let cli = parse(&[
            "-c", "-l", "40", "-L", "10", "-p", "0", "-S", "-s", "labelnum", "-d", "-t", "#x",
            "-i", "data.txt", "-o", "-",
        ]);
        assert!(cli.count);
        assert!(cli.scale);
        assert_eq!(cli.max_length, 40);
        assert_eq!(cli.max_label_length, 10);
        assert_eq!(cli.precision, 0);
        assert_eq!(cli.sort, SortOption::ByLabelNumeric);
        assert_eq!(cli.sort_direction(), SortDirection::Descending);
        assert_eq!(cli.tick(), Some('#'));
        assert_eq!(cli.input_path(), Some("data.txt"));
        assert_eq!(cli.output_path(), None);
    }

    #[test]
    fn sort_names() {
        assert_eq!(parse(&["--sort", "label"]).sort, SortOption::ByLabel);
        assert_eq!(parse(&["--sort", "value"]).sort, SortOption::ByValue);
        assert!(Cli::try_parse_from(["barchart", "--sort", "random"]).is_err());
    }

    #[test]
    fn output_formats_are_exclusive() {
        assert!(Cli::try_parse_from(["barchart", "-m", "-C"]).is_err());
        assert!(parse(&["-m", "-T", "Title"]).mermaid);
    }
}
