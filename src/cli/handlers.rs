use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
    time::Instant,
};

use tracing::{debug, warn};

use crate::{
    core::{
        chart::Chart,
        config::TerminalConfig,
        error::{ConfigError, Error},
        parse::parse_line,
        terminal::row_length,
    },
    render::{ChartJsRenderer, MermaidRenderer, Render, Renderer, TerminalRenderer},
};

use super::parse::Cli;

/// Line counts from one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ingest {
    /// Lines that reached the chart.
    pub accepted: usize,
    /// Blank and comment lines.
    pub ignored: usize,
    /// Lines that could not be parsed.
    pub skipped: usize,
}

/// Feed every line of `reader` into `chart`.
///
/// Lines are trimmed; blank lines and `#` comments are ignored. In `count`
/// mode each line is a label whose value is its number of occurrences.
/// Otherwise lines are parsed as `<value><sep><label>` and later lines
/// overwrite earlier ones with the same label. Unparsable lines are logged
/// and skipped. Invalid UTF-8 is replaced with `U+FFFD` rather than ending
/// the read.
pub fn ingest<R: BufRead>(mut reader: R, chart: &Chart, count: bool) -> io::Result<Ingest> {
    let mut stats = Ingest::default();
    let mut buf = Vec::with_capacity(256);
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            stats.ignored += 1;
            continue;
        }

        if count {
            chart.add(line, 1.0);
            stats.accepted += 1;
            continue;
        }

        match parse_line(line) {
            Ok((value, label)) => {
                chart.set(label, value);
                stats.accepted += 1;
            }
            Err(error) => {
                warn!(%error, line_no, line, "skipping unparsable line");
                stats.skipped += 1;
            }
        }
    }
    Ok(stats)
}

/// Pick and configure the renderer requested on the command line.
pub fn renderer(cli: &Cli) -> Result<Renderer, ConfigError> {
    if cli.mermaid {
        return Ok(MermaidRenderer::new().title(&cli.title).into());
    }
    if cli.chartjs {
        return Ok(ChartJsRenderer::new().title(&cli.title).into());
    }

    let config = TerminalConfig::builder()
        .max_length(row_length(cli.max_length, cli.fit))
        .max_label_length(cli.max_label_length)
        .scale(cli.scale)
        .tick_opt(cli.tick())
        .build()?;
    Ok(TerminalRenderer::new(config).into())
}

fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>, Error> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(Error::OpenInput)?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Missing parent directories are created.
fn open_output(path: Option<&str>) -> Result<Box<dyn Write>, Error> {
    match path {
        None => Ok(Box::new(io::stdout().lock())),
        Some(p) => {
            if let Some(dir) = Path::new(p).parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(Error::OpenOutput)?;
            }
            let file = File::create(p).map_err(Error::OpenOutput)?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Read, aggregate, sort once, render once.
pub fn chart(cli: &Cli) -> Result<(), Error> {
    let chart = Chart::new(cli.sort, cli.sort_direction(), cli.precision);

    let t_ingest = Instant::now();
    let stats = ingest(open_input(cli.input_path())?, &chart, cli.count).map_err(Error::ReadInput)?;
    debug!(
        accepted = stats.accepted,
        ignored = stats.ignored,
        skipped = stats.skipped,
        labels = chart.len(),
        elapsed_us = t_ingest.elapsed().as_micros(),
        "input aggregated"
    );

    let renderer = renderer(cli)?;
    let mut out = open_output(cli.output_path())?;
    let written = renderer.render(&chart, &mut out)?;
    out.flush().map_err(|e| Error::Render(e.into()))?;
    debug!(format = renderer.name(), bytes = written, "chart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;
    use crate::core::chart::{SortDirection, SortOption};

    #[test]
    fn ingest_parses_and_skips() {
        let chart = Chart::default();
        let input = "# comment\n\n10 apples\nnot-a-line\n  4,pears  \n7 apples\n";
        let stats = ingest(Cursor::new(input), &chart, false).unwrap();

        assert_eq!(
            stats,
            Ingest {
                accepted: 3,
                ignored: 2,
                skipped: 1
            }
        );
        assert_eq!(chart.labels(), ["apples", "pears"]);
        assert_eq!(chart.value("apples"), Ok(7.0));
    }

    #[test]
    fn ingest_survives_invalid_utf8() {
        let chart = Chart::default();
        let input: &[u8] = b"1 good\n2 caf\xE9\r\n3 later\n";
        let stats = ingest(input, &chart, false).unwrap();

        assert_eq!(stats.accepted, 3);
        assert_eq!(chart.labels(), ["good", "caf\u{FFFD}", "later"]);
        assert_eq!(chart.value("later"), Ok(3.0));
    }

    #[test]
    fn ingest_counts_occurrences() {
        let chart = Chart::new(SortOption::ByValue, SortDirection::Descending, 0);
        let input = "GET /\nPOST /login\nGET /\n  GET /  \n";
        ingest(Cursor::new(input), &chart, true).unwrap();

        assert_eq!(chart.labels(), ["GET /", "POST /login"]);
        assert_eq!(chart.value("GET /"), Ok(3.0));
    }

    #[test]
    fn renderer_follows_flags() {
        let cli = Cli::parse_from(["barchart", "--mermaid"]);
        assert!(matches!(renderer(&cli), Ok(Renderer::Mermaid(_))));

        let cli = Cli::parse_from(["barchart", "-C", "-T", "x"]);
        assert!(matches!(renderer(&cli), Ok(Renderer::ChartJs(_))));

        let cli = Cli::parse_from(["barchart", "-t", "*", "-l", "30"]);
        match renderer(&cli) {
            Ok(Renderer::Terminal(r)) => {
                assert_eq!(r.config().tick, '*');
                assert_eq!(r.config().max_length, 30);
            }
            other => panic!("unexpected renderer {other:?}"),
        }
    }

    #[test]
    fn zero_length_is_a_config_error() {
        let cli = Cli::parse_from(["barchart", "--length", "0"]);
        assert_eq!(
            renderer(&cli).unwrap_err(),
            ConfigError::NotPositive("maximum length")
        );
    }

    #[test]
    fn file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.txt");
        let output = dir.path().join("nested/out/chart.mmd");
        fs::write(&input, "1 One\n2 Two\n").unwrap();

        let cli = Cli::parse_from([
            "barchart",
            "-m",
            "-T",
            "T",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        chart(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "xychart-beta\n  title \"T\"\n  x-axis [\"One\", \"Two\"]\n  bar [1, 2]\n"
        );
    }

    #[test]
    fn missing_input_file() {
        let cli = Cli::parse_from(["barchart", "-i", "/definitely/not/here.txt"]);
        assert!(matches!(chart(&cli), Err(Error::OpenInput(_))));
    }
}
