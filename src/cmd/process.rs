//! Process command - batch person records from a JSON file

use crate::assessment::assess;
use crate::cmd::read_persons;
use crate::letter::{format_chf, write_letter};
use clap::Args;
use log::warn;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ProcessCommand {
    /// JSON file containing person records (or "-" for stdin)
    #[arg(short, long)]
    file: PathBuf,

    /// Directory the letters are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Output the summary as JSON instead of a formatted table
    #[arg(long)]
    json: bool,

    /// Open each letter after writing it
    #[arg(long)]
    open: bool,
}

/// Row for the per-person summary table
#[derive(Debug, Clone, Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Gross")]
    gross: String,
    #[tabled(rename = "Deductions")]
    deductions: String,
    #[tabled(rename = "Net Salary")]
    net_salary: String,
    #[tabled(rename = "Rate %")]
    percentage: String,
    #[tabled(rename = "Tax (CHF)")]
    tax: String,
    #[tabled(rename = "Letter")]
    letter: String,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct ProcessSummary {
    record_count: usize,
    skipped_count: usize,
    letters: Vec<SummaryRow>,
}

impl ProcessCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let persons = read_persons(&self.file)?;
        std::fs::create_dir_all(&self.output_dir)?;

        let record_count = persons.len();
        let mut rows = Vec::new();
        let mut skipped_count = 0;

        for (index, person) in persons.iter().enumerate() {
            let valid = match person.validate() {
                Ok(valid) => valid,
                Err(err) => {
                    warn!("skipping record {}: {}", index + 1, err);
                    skipped_count += 1;
                    continue;
                }
            };

            let assessment = assess(valid);
            let path = write_letter(&assessment, &self.output_dir)?;
            if self.open {
                opener::open(&path)?;
            }

            rows.push(SummaryRow {
                name: format!(
                    "{} {}",
                    assessment.person.first_name, assessment.person.last_name
                ),
                gross: format_chf(assessment.person.gross_salary),
                deductions: format_chf(assessment.total_deductions),
                net_salary: format_chf(assessment.net_salary),
                percentage: format!("{:.1}", assessment.tax.percentage),
                tax: format_chf(assessment.tax.tax),
                letter: path.display().to_string(),
            });
        }

        if self.json {
            let summary = ProcessSummary {
                record_count,
                skipped_count,
                letters: rows,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            self.print_table(&rows, skipped_count);
        }
        Ok(())
    }

    fn print_table(&self, rows: &[SummaryRow], skipped_count: usize) {
        if rows.is_empty() {
            println!("No valid person records found");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!("{} letter(s) written, {} record(s) skipped", rows.len(), skipped_count);
    }
}
