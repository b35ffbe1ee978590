//! Ties a validated person record to the tax engine

use crate::person::ValidPerson;
use crate::tax::{calculate_tax, TaxResult};

/// Everything the letter and the summary output need for one person
#[derive(Debug, Clone)]
pub struct Assessment {
    pub person: ValidPerson,
    pub total_deductions: f64,
    pub net_salary: f64,
    pub tax: TaxResult,
}

/// Compute net salary and run the bracket engine
pub fn assess(person: ValidPerson) -> Assessment {
    let total_deductions = person.social_deduction + person.expenses;
    let net_salary = person.gross_salary - total_deductions;
    let tax = calculate_tax(net_salary);
    Assessment {
        person,
        total_deductions,
        net_salary,
        tax,
    }
}
