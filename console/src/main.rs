use anyhow::{Context, Result};
use clap::Parser;
use search_core::{Document, SearchServer, MAX_RESULT_DOCUMENT_COUNT};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "search-console")]
#[command(about = "Index documents from stdin and print the best matches for a query", long_about = None)]
struct Cli {
    /// Maximum number of documents to print
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
    /// Print one JSON object per result instead of the brace format
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), cli.max_results, cli.json)
}

/// Input: stop words, document count, one document per line, then the query.
fn run<R: BufRead, W: Write>(input: R, mut out: W, max_results: usize, json: bool) -> Result<()> {
    let mut lines = input.lines();
    let mut read_line = move || -> Result<String> { Ok(lines.next().transpose()?.unwrap_or_default()) };

    let mut server = SearchServer::with_max_results(max_results);
    server.set_stop_words(&read_line()?);

    let count_line = read_line()?;
    let document_count = parse_count(&count_line).with_context(|| format!("invalid document count {count_line:?}"))?;
    for document_id in 0..document_count {
        server.add_document(document_id, &read_line()?);
    }
    tracing::info!(document_count, "documents indexed");

    let query = read_line()?;
    for doc in server.find_top_documents(&query) {
        if json {
            writeln!(out, "{}", serde_json::to_string(&doc)?)?;
        } else {
            writeln!(out, "{}", format_document(&doc))?;
        }
    }
    Ok(())
}

/// Leading integer of the line; whatever follows it is ignored.
fn parse_count(line: &str) -> Result<i32> {
    let trimmed = line.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-'))))
        .map_or(trimmed.len(), |(i, _)| i);
    let count: i32 = trimmed[..end].parse()?;
    Ok(count.max(0))
}

fn format_document(doc: &Document) -> String {
    format!("{{ document_id = {}, relevance = {} }}", doc.id, format_relevance(doc.relevance))
}

/// Six significant digits, trailing zeros dropped, exponent form outside
/// `1e-4 ..= 1e6`, the way a default-configured C++ stream prints a double.
fn format_relevance(value: f64) -> String {
    const PRECISION: i32 = 6;
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}
