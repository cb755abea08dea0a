use crate::record::Record;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load the happiness dataset from a CSV file
///
/// This function reads a CSV file and converts its data rows to `Record`s.
/// The header row drives the column mapping, so column order in the file is
/// not significant; column names must match the dataset schema exactly.
///
/// # Arguments
/// * `filepath` - Path to the CSV file to load
///
/// # Returns
/// * `Result<Vec<Record>, Box<dyn Error>>` - The parsed records or an error
///
/// # Examples
/// ```no_run
/// use happiness_chart::dataset::load_records;
///
/// match load_records("data/2019-happiness-report.csv") {
///     Ok(records) => println!("Loaded {} countries", records.len()),
///     Err(e) => eprintln!("Error loading CSV: {}", e),
/// }
/// ```
pub fn load_records(filepath: impl AsRef<Path>) -> Result<Vec<Record>, Box<dyn Error>> {
    let file = File::open(&filepath)?;
    let reader = BufReader::new(file);
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

    parse_records(lines.iter().map(|l| l.as_str()))
}

/// Parse the happiness dataset from CSV content already in memory
///
/// The first line is the header row; every following non-empty line is a
/// data row. Rows that cannot be mapped to a record (no country cell) are
/// skipped with a warning rather than failing the whole dataset.
///
/// # Arguments
/// * `lines` - Iterator over the CSV lines, header first
///
/// # Returns
/// * `Result<Vec<Record>, Box<dyn Error>>` - The parsed records or an error
pub fn parse_records<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Record>, Box<dyn Error>> {
    let mut lines = lines.into_iter();

    let header = match lines.next() {
        Some(line) => parse_csv_row(line)?,
        None => return Err("CSV file is empty".into()),
    };
    let columns = ColumnMap::from_header(&header)?;

    let mut records = Vec::new();
    for (i, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_csv_row(line)?;
        match columns.record_from_row(&fields) {
            Some(record) => records.push(record),
            // Data row without a country cell; line numbers are 1-based and
            // the header is line 1.
            None => log::warn!("skipping malformed CSV row {}", i + 2),
        }
    }

    Ok(records)
}

/// Maps dataset column names to their positions in the header row.
///
/// Only `Country or region` is required; any other column missing from the
/// header yields `None` for that field in every record.
struct ColumnMap {
    country: usize,
    overall_rank: Option<usize>,
    score: Option<usize>,
    gdp_per_capita: Option<usize>,
    social_support: Option<usize>,
    healthy_life_expectancy: Option<usize>,
    freedom_to_make_life_choices: Option<usize>,
    generosity: Option<usize>,
    perceptions_of_corruption: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Result<Self, Box<dyn Error>> {
        let position = |name: &str| header.iter().position(|h| h.trim() == name);

        let country = position("Country or region")
            .ok_or("CSV header is missing the 'Country or region' column")?;

        Ok(Self {
            country,
            overall_rank: position("Overall rank"),
            score: position("Score"),
            gdp_per_capita: position("GDP per capita"),
            social_support: position("Social support"),
            healthy_life_expectancy: position("Healthy life expectancy"),
            freedom_to_make_life_choices: position("Freedom to make life choices"),
            generosity: position("Generosity"),
            perceptions_of_corruption: position("Perceptions of corruption"),
        })
    }

    /// Convert one data row to a record, or `None` when the row has no
    /// country cell.
    fn record_from_row(&self, fields: &[String]) -> Option<Record> {
        let country = fields.get(self.country)?.trim();
        if country.is_empty() {
            return None;
        }

        Some(Record {
            country: country.to_string(),
            overall_rank: parse_u32(fields, self.overall_rank),
            score: parse_f64(fields, self.score),
            gdp_per_capita: parse_f64(fields, self.gdp_per_capita),
            social_support: parse_f64(fields, self.social_support),
            healthy_life_expectancy: parse_f64(fields, self.healthy_life_expectancy),
            freedom_to_make_life_choices: parse_f64(fields, self.freedom_to_make_life_choices),
            generosity: parse_f64(fields, self.generosity),
            perceptions_of_corruption: parse_f64(fields, self.perceptions_of_corruption),
        })
    }
}

// Numeric coercion: non-numeric, missing, and non-finite cells all become
// None, which serializes to JSON null.
fn parse_f64(fields: &[String], index: Option<usize>) -> Option<f64> {
    let raw = fields.get(index?)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

fn parse_u32(fields: &[String], index: Option<usize>) -> Option<u32> {
    let raw = fields.get(index?)?;
    raw.trim().parse::<u32>().ok()
}

// Parse a CSV row into a vector of strings
fn parse_csv_row(line: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut result = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if let Some(&next) = chars.peek() {
                    if next == '"' && in_quotes {
                        // Double quote inside quoted field - add a single quote
                        current_field.push('"');
                        chars.next();
                    } else {
                        // Toggle quote state
                        in_quotes = !in_quotes;
                    }
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                // End of field
                result.push(current_field);
                current_field = String::new();
            }
            _ => {
                current_field.push(c);
            }
        }
    }

    // Add the last field
    result.push(current_field);

    Ok(result)
}
