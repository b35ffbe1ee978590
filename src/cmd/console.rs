//! Console command - interactive collection of tax information

use crate::assessment::assess;
use crate::letter::write_letter;
use crate::person::{validate_address, validate_amount, validate_name, Person, Sex, ValidPerson};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ConsoleCommand {
    /// Directory the letters are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

impl ConsoleCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stdout();
        run(&mut reader, &mut writer, &self.output_dir)
    }
}

fn run<R, W>(reader: &mut R, writer: &mut W, output_dir: &Path) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Welcome to Tax Data Processor")?;
    loop {
        let person = collect_person(reader, writer)?;
        let assessment = assess(person);
        let path = write_letter(&assessment, output_dir)?;
        writeln!(
            writer,
            "Tax: CHF {:.2} at {:.1}% - letter written to {}",
            assessment.tax.tax,
            assessment.tax.percentage,
            path.display()
        )?;
        if !ask_yes_no(reader, writer, "Do you want to add another record? (y/n): ")? {
            writeln!(writer, "Thank you. Exiting.")?;
            return Ok(());
        }
    }
}

/// Prompt for every field with validation, re-asking on bad input
fn collect_person<R, W>(reader: &mut R, writer: &mut W) -> anyhow::Result<ValidPerson>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "=== Enter Tax Information ===")?;

    let first_name = prompt(reader, writer, "Enter first name: ", |s| {
        validate_name("first_name", s)
    })?;
    let last_name = prompt(reader, writer, "Enter last name: ", |s| {
        validate_name("last_name", s)
    })?;
    let sex = prompt(reader, writer, "Enter sex (male/female): ", |s| {
        Sex::parse(s).map(|_| s.to_string())
    })?;
    let address = prompt(reader, writer, "Enter address: ", validate_address)?;
    let gross_salary = prompt_amount(reader, writer, "Enter gross salary: ", "gross_salary")?;
    let social_deduction =
        prompt_amount(reader, writer, "Enter social deduction: ", "social_deduction")?;
    let expenses = prompt_amount(reader, writer, "Enter expenses: ", "expenses")?;

    let person = Person {
        first_name,
        last_name,
        sex,
        address,
        gross_salary,
        social_deduction,
        expenses,
    };
    Ok(person.validate()?)
}

fn prompt<R, W, T, E, F>(reader: &mut R, writer: &mut W, label: &str, parse: F) -> anyhow::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    loop {
        write!(writer, "{}", label)?;
        writer.flush()?;
        let line = read_line(reader)?;
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(writer, "Error: {}", err)?,
        }
    }
}

fn prompt_amount<R, W>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    field: &'static str,
) -> anyhow::Result<f64>
where
    R: BufRead,
    W: Write,
{
    prompt(reader, writer, label, |s| {
        let value: f64 = s
            .parse()
            .map_err(|_| "enter a numeric value".to_string())?;
        validate_amount(field, value).map_err(|e| e.to_string())?;
        Ok::<f64, String>(value)
    })
}

fn ask_yes_no<R, W>(reader: &mut R, writer: &mut W, label: &str) -> anyhow::Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(writer, "{}", label)?;
        writer.flush()?;
        let line = read_line(reader)?;
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(writer, "Please enter 'y' or 'n'.")?,
        }
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("input closed before the record was complete");
    }
    Ok(line)
}
