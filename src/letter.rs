//! Notification letter rendering
//!
//! Generates a self-contained HTML letter per person, modelled on the paper
//! notification sent by the Zurich cantonal tax office.

use crate::assessment::Assessment;
use crate::person::Sex;
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};

const AUTHORITY_LINES: &[&str] = &["Steueramt Zürich", "Bändliweg 21", "Postfach", "8090 Zürich"];

/// Unique letter filename: `<first>_<last>_<millis>_tax_letter.html`
pub fn letter_filename(first_name: &str, last_name: &str) -> String {
    format!(
        "{}_{}_{}_tax_letter.html",
        first_name,
        last_name,
        Utc::now().timestamp_millis()
    )
}

/// Render and write the letter, returning the path written
pub fn write_letter(assessment: &Assessment, output_dir: &Path) -> std::io::Result<PathBuf> {
    let file_name = letter_filename(&assessment.person.first_name, &assessment.person.last_name);
    let path = output_dir.join(file_name);
    std::fs::write(&path, generate(assessment))?;
    Ok(path)
}

/// Generate the letter HTML content
pub fn generate(assessment: &Assessment) -> String {
    let person = &assessment.person;
    let salutation = match person.sex {
        Sex::Male => format!("Dear Mr. {}", person.last_name),
        Sex::Female => format!("Dear Ms. {}", person.last_name),
    };
    let authority_block = AUTHORITY_LINES
        .iter()
        .map(|line| format!("            <div>{}</div>", line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Tax Notification - {first_name} {last_name}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="page">
        <div class="authority">
{authority_block}
        </div>
        <div class="recipient">
            <div>{first_name} {last_name}</div>
            <div>{address}</div>
        </div>
        <p class="date">Zürich, {date}</p>
        <p>{salutation}</p>
        <p>We are writing to inform you that your tax has been calculated as follows:</p>
        <table class="financials">
            <tr><td>Gross Income:</td><td class="amount">CHF {gross}</td></tr>
            <tr><td>Deductible:</td><td class="amount">CHF {deductible}</td></tr>
            <tr><td>Net Salary:</td><td class="amount">CHF {net}</td></tr>
            <tr><td>Tax Percentage:</td><td class="amount">{percentage:.2}%</td></tr>
            <tr class="total"><td>Tax to be Paid:</td><td class="amount">CHF {tax}</td></tr>
        </table>
        <p>If you have any questions regarding this calculation, please do not hesitate to contact us.</p>
        <p>Best Regards,<br>Tax Authorities of canton Zürich</p>
    </div>
</body>
</html>"##,
        css = CSS,
        authority_block = authority_block,
        first_name = person.first_name,
        last_name = person.last_name,
        address = person.address,
        date = Local::now().format("%-d %B %Y"),
        salutation = salutation,
        gross = format_chf(person.gross_salary),
        deductible = format_chf(assessment.total_deductions),
        net = format_chf(assessment.net_salary),
        percentage = assessment.tax.percentage,
        tax = format_chf(assessment.tax.tax),
    )
}

/// Thousands-separated amount with two decimal places, e.g. 86'000.00
pub fn format_chf(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.2}", amount.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((&rounded, "00"));
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(c);
    }
    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

const CSS: &str = r#"
body {
    font-family: Georgia, 'Times New Roman', serif;
    background: #f3f4f6;
    color: #111827;
    line-height: 1.6;
}

.page {
    max-width: 700px;
    margin: 2rem auto;
    background: white;
    padding: 3rem 4rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.authority {
    text-align: right;
    font-size: 0.875rem;
    color: #374151;
    margin-bottom: 2rem;
}

.recipient {
    margin-bottom: 2rem;
}

.date {
    text-align: right;
    margin-bottom: 2rem;
}

.financials {
    margin: 1.5rem 0 1.5rem 2rem;
    border-collapse: collapse;
}

.financials td {
    padding: 0.25rem 1rem 0.25rem 0;
}

.financials .amount {
    text-align: right;
    font-variant-numeric: tabular-nums;
}

.financials .total td {
    font-weight: bold;
    border-top: 1px solid #111827;
}
"#;
