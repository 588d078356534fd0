//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, the fixed [`Department`]
//! enumeration, and the command payloads used to create ([`NewEmployee`])
//! and patch ([`EmployeePatch`]) employees.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

use super::payroll::check_amount;

/// The departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    /// Software development.
    Development,
    /// Human resources.
    #[serde(rename = "HR")]
    Hr,
    /// Quality assurance.
    #[serde(rename = "QA")]
    Qa,
    /// Sales.
    Sales,
    /// Marketing.
    Marketing,
    /// Product and UI design.
    Design,
    /// IT and infrastructure.
    #[serde(rename = "IT")]
    It,
    /// Finance and accounting.
    Finance,
    /// Customer support.
    Support,
}

impl Department {
    /// Every department, in the order they are offered to users.
    pub const ALL: [Department; 9] = [
        Department::Development,
        Department::Hr,
        Department::Qa,
        Department::Sales,
        Department::Marketing,
        Department::Design,
        Department::It,
        Department::Finance,
        Department::Support,
    ];

    /// Returns the display label, which is also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Department::Development => "Development",
            Department::Hr => "HR",
            Department::Qa => "QA",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Design => "Design",
            Department::It => "IT",
            Department::Finance => "Finance",
            Department::Support => "Support",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = StoreError;

    /// Parses a department label.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_records::models::Department;
    ///
    /// assert_eq!("QA".parse::<Department>().unwrap(), Department::Qa);
    /// assert!("Legal".parse::<Department>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| StoreError::invalid("department", format!("unknown department '{s}'")))
    }
}

/// An employee record owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, assigned by the store and never changed.
    pub employee_id: u32,
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: Department,
    /// Monthly base salary.
    pub salary: Decimal,
    /// Contact email address.
    pub contact: String,
    /// Free-text employment history.
    #[serde(default)]
    pub employment_history: String,
}

/// The fields needed to create an employee; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: Department,
    /// Monthly base salary.
    pub salary: Decimal,
    /// Contact email address.
    pub contact: String,
    /// Free-text employment history.
    #[serde(default)]
    pub employment_history: String,
}

impl NewEmployee {
    /// Checks the fields a store boundary can reject.
    pub fn validate(&self) -> StoreResult<()> {
        validate_name(&self.name)?;
        validate_salary(self.salary)?;
        validate_contact(&self.contact)
    }

    /// Attaches an id, producing the stored record.
    pub fn into_employee(self, employee_id: u32) -> Employee {
        Employee {
            employee_id,
            name: self.name,
            position: self.position,
            department: self.department,
            salary: self.salary,
            contact: self.contact,
            employment_history: self.employment_history,
        }
    }
}

/// A partial update to an employee. Unset fields are left untouched.
///
/// Carries no id field: ids are stable once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeePatch {
    /// New name.
    pub name: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New department.
    pub department: Option<Department>,
    /// New salary.
    pub salary: Option<Decimal>,
    /// New contact address.
    pub contact: Option<String>,
    /// New employment history.
    pub employment_history: Option<String>,
}

impl EmployeePatch {
    /// Checks every field that is set.
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(salary) = self.salary {
            validate_salary(salary)?;
        }
        if let Some(contact) = &self.contact {
            validate_contact(contact)?;
        }
        Ok(())
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the set fields into `employee`.
    pub fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(contact) = self.contact {
            employee.contact = contact;
        }
        if let Some(history) = self.employment_history {
            employee.employment_history = history;
        }
    }
}

impl Employee {
    /// Checks an already-identified record, used when taking over seed data.
    pub fn validate(&self) -> StoreResult<()> {
        if self.employee_id == 0 {
            return Err(StoreError::invalid("employee_id", "must be at least 1"));
        }
        validate_name(&self.name)?;
        validate_salary(self.salary)?;
        validate_contact(&self.contact)
    }
}

fn validate_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::invalid("name", "must not be empty"));
    }
    Ok(())
}

fn validate_salary(salary: Decimal) -> StoreResult<()> {
    check_amount("salary", salary)
}

/// Accepts `local@domain.tld` shapes: one `@`, no whitespace, a dot in the domain.
fn validate_contact(contact: &str) -> StoreResult<()> {
    let shaped = match contact.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !contact.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !shaped {
        return Err(StoreError::invalid(
            "contact",
            format!("'{contact}' is not an email address"),
        ));
    }
    Ok(())
}
