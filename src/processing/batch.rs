//! Batch driver: CSV of product names in, enriched CSV of results out.

use std::fs;
use std::path::Path;

use futures::future;
use thiserror::Error;

use crate::domain::outcome::MatchResult;
use crate::fetch::PageFetcher;
use crate::processing::MatchPipeline;

const OUTPUT_HEADER: &str = "Product Name,Matched Product,Sell Price (GBP),URL,Scraped At (UTC)\n";

const NAME_COLUMN: &str = "Product Name";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read or write a batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("input must contain a '{NAME_COLUMN}' column")]
    MissingNameColumn,
}

/// Row counts for a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub matched: usize,
}

/// Runs every product name from `input_path` through `pipeline` and writes
/// one output row per input row. A single query never aborts the batch:
/// unmatched names get empty result fields.
pub async fn run<F: PageFetcher>(
    pipeline: &MatchPipeline<F>,
    input_path: &Path,
    output_path: &Path,
) -> Result<BatchSummary, BatchError> {
    let input = fs::read_to_string(input_path)?;
    let names = product_names(&input)?;
    log::info!("Processing {} product name(s)", names.len());

    let tasks = names
        .iter()
        .map(|name| async move { (name.as_str(), pipeline.process(name).await) });
    let results = future::join_all(tasks).await;

    let mut out = String::from(OUTPUT_HEADER);
    let mut matched = 0usize;
    for (name, result) in &results {
        if result.is_match() {
            matched += 1;
        }
        out.push_str(&result_row(name, result));
    }
    fs::write(output_path, out)?;

    Ok(BatchSummary {
        total: results.len(),
        matched,
    })
}

/// Product names from the input CSV.
///
/// When the header row carries a `Product Name` column, that column is read
/// from every data row, wherever it sits among other columns. A file whose
/// header has several columns but none named `Product Name` is rejected.
/// Headerless single-column files are taken as a plain list of names.
fn product_names(input: &str) -> Result<Vec<String>, BatchError> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());
    let Some(header) = lines.next() else {
        return Ok(vec![]);
    };

    let header_fields = split_csv_row(header);
    let column = header_fields
        .iter()
        .position(|field| field.trim() == NAME_COLUMN);

    match column {
        Some(column) => Ok(lines
            .filter_map(|line| split_csv_row(line).into_iter().nth(column))
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect()),
        None if header_fields.len() == 1 => Ok(std::iter::once(header)
            .chain(lines)
            .map(|line| split_csv_row(line).remove(0).trim().to_string())
            .filter(|field| !field.is_empty())
            .collect()),
        None => Err(BatchError::MissingNameColumn),
    }
}

/// Splits one CSV row into fields, honoring quoted fields with embedded
/// commas and doubled quotes.
fn split_csv_row(line: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            }
            '"' if field.is_empty() => quoted = true,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn result_row(name: &str, result: &MatchResult) -> String {
    match result {
        MatchResult::Matched {
            title,
            price,
            url,
            scraped_at,
        } => format!(
            "{},{},{price:.2},{},{}\n",
            csv_field(name),
            csv_field(title),
            csv_field(url),
            scraped_at.format("%Y-%m-%d %H:%M:%S"),
        ),
        MatchResult::NoMatch => format!("{},,,,\n", csv_field(name)),
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
