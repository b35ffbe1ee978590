pub mod console;
pub mod process;
pub mod schema;

use crate::person::Person;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read person records (JSON array) from a file, or stdin with "-"
pub fn read_persons(path: &Path) -> anyhow::Result<Vec<Person>> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Vec<Person>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let persons = serde_json::from_reader(reader)?;
    Ok(persons)
}

fn read_from_stdin() -> anyhow::Result<Vec<Person>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let persons = serde_json::from_slice(&buffer)?;
    Ok(persons)
}
