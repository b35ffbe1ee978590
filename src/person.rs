//! Person record model, validation and display formatting

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;
use thiserror::Error;

/// Unicode letters with internal spaces, apostrophes or hyphens
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}]+(?:[ '\-][\p{L}]+)*$").expect("valid regex"));

/// Swiss postal shape: street name, house number, 4-digit zip, city
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}]+(?:[ '\-.][\p{L}]+)*\s+\d+[A-Za-z]?\s+\d{4}\s+[\p{L}]+(?:[ '\-][\p{L}]+)*$")
        .expect("valid regex")
});

/// A raw person record as supplied by the caller (console or JSON file)
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Person {
    /// First name (letters, spaces, apostrophes, hyphens)
    pub first_name: String,
    /// Last name (letters, spaces, apostrophes, hyphens)
    pub last_name: String,
    /// male, female, m, f, man or woman
    pub sex: String,
    /// Swiss format: street name, house number, 4-digit zip, city
    pub address: String,
    /// Gross yearly salary (CHF)
    pub gross_salary: f64,
    /// Social security deduction (CHF)
    pub social_deduction: f64,
    /// Deductible expenses (CHF)
    pub expenses: f64,
}

/// Why a person record was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPerson {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} contains digits or special characters: {value}")]
    BadName { field: &'static str, value: String },
    #[error("address is not in Swiss format (Street Number Zip City): {0}")]
    BadAddress(String),
    #[error("sex must be one of male, female, man, woman, m, f: {0}")]
    BadSex(String),
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: String },
}

/// Normalized sex designation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn parse(s: &str) -> Result<Sex, InvalidPerson> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Ok(Sex::Male),
            "female" | "f" | "woman" => Ok(Sex::Female),
            other => Err(InvalidPerson::BadSex(other.to_string())),
        }
    }

    /// Single-letter code used in the letter salutation
    pub fn code(&self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
        }
    }
}

/// A person record that passed validation, with normalized fields
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPerson {
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    pub address: String,
    pub gross_salary: f64,
    pub social_deduction: f64,
    pub expenses: f64,
}

impl Person {
    /// Validate every field and normalize names and sex
    pub fn validate(&self) -> Result<ValidPerson, InvalidPerson> {
        let first_name = validate_name("first_name", &self.first_name)?;
        let last_name = validate_name("last_name", &self.last_name)?;
        let sex = Sex::parse(&self.sex)?;
        let address = validate_address(&self.address)?;
        validate_amount("gross_salary", self.gross_salary)?;
        validate_amount("social_deduction", self.social_deduction)?;
        validate_amount("expenses", self.expenses)?;

        Ok(ValidPerson {
            first_name: capitalize(&first_name),
            last_name: capitalize(&last_name),
            sex,
            address,
            gross_salary: self.gross_salary,
            social_deduction: self.social_deduction,
            expenses: self.expenses,
        })
    }
}

pub fn validate_name(field: &'static str, value: &str) -> Result<String, InvalidPerson> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InvalidPerson::Empty(field));
    }
    if !NAME_RE.is_match(value) {
        return Err(InvalidPerson::BadName {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

pub fn validate_address(value: &str) -> Result<String, InvalidPerson> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InvalidPerson::Empty("address"));
    }
    if !ADDRESS_RE.is_match(value) {
        return Err(InvalidPerson::BadAddress(value.to_string()));
    }
    Ok(value.to_string())
}

pub fn validate_amount(field: &'static str, value: f64) -> Result<(), InvalidPerson> {
    if !value.is_finite() || value < 0.0 {
        return Err(InvalidPerson::NegativeAmount {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Uppercase the first character, lowercase the rest
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person {
            first_name: "hans".to_string(),
            last_name: "MÜLLER".to_string(),
            sex: "man".to_string(),
            address: "Bahnhofstrasse 12 8001 Zürich".to_string(),
            gross_salary: 95_000.0,
            social_deduction: 6_000.0,
            expenses: 3_000.0,
        }
    }

    #[test]
    fn valid_record_is_normalized() {
        let valid = person().validate().unwrap();
        assert_eq!(valid.first_name, "Hans");
        assert_eq!(valid.last_name, "Müller");
        assert_eq!(valid.sex, Sex::Male);
    }

    #[test]
    fn accented_and_hyphenated_names_pass() {
        let mut p = person();
        p.first_name = "Anne-Sophie".to_string();
        p.last_name = "d'Arcy".to_string();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn names_with_digits_fail() {
        let mut p = person();
        p.first_name = "H4ns".to_string();
        assert!(matches!(
            p.validate(),
            Err(InvalidPerson::BadName { field: "first_name", .. })
        ));
    }

    #[test]
    fn empty_name_fails() {
        let mut p = person();
        p.last_name = "   ".to_string();
        assert_eq!(p.validate(), Err(InvalidPerson::Empty("last_name")));
    }

    #[test]
    fn sex_variants_normalize() {
        assert_eq!(Sex::parse("WOMAN").unwrap(), Sex::Female);
        assert_eq!(Sex::parse("f").unwrap(), Sex::Female);
        assert_eq!(Sex::parse("Male").unwrap(), Sex::Male);
        assert!(Sex::parse("other").is_err());
    }

    #[test]
    fn multi_word_street_names_pass() {
        let mut p = person();
        p.address = "General Weberstrasse 5a 8004 Zürich".to_string();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn address_without_zip_fails() {
        let mut p = person();
        p.address = "Bahnhofstrasse 12 Zürich".to_string();
        assert!(matches!(p.validate(), Err(InvalidPerson::BadAddress(_))));
    }

    #[test]
    fn negative_salary_fails() {
        let mut p = person();
        p.gross_salary = -1.0;
        assert!(matches!(
            p.validate(),
            Err(InvalidPerson::NegativeAmount { field: "gross_salary", .. })
        ));
    }

    #[test]
    fn capitalize_handles_unicode() {
        assert_eq!(capitalize("émile"), "Émile");
        assert_eq!(capitalize("MÜLLER"), "Müller");
        assert_eq!(capitalize(""), "");
    }
}
