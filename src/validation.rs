// src/validation.rs
//! Required-field checks run before a profile entry is stored

use serde::Serialize;
use std::fmt;

use crate::types::profile::{EducationEntry, Skill, WorkEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every failed field of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn for_field(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if is_blank(value) {
            self.errors.push(FieldError { field, message });
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&messages.join("; "))
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for WorkEntry {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("title", &self.title, "Job title is required");
        errors.require("company", &self.company, "Company name is required");
        errors.require("startDate", &self.start_date, "Start date is required");
        errors.into_result()
    }
}

impl Validate for EducationEntry {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require(
            "school",
            &self.school,
            "School/institution name is required",
        );
        errors.require("degree", &self.degree, "Degree or certificate is required");
        errors.require("startDate", &self.start_date, "Start date is required");
        errors.into_result()
    }
}

impl Validate for Skill {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("name", &self.name, "Skill name is required");
        errors.into_result()
    }
}
