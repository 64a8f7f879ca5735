// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const IDENT_MAX_LEN: usize = 64;
pub const SHEET_NAME_MAX_LEN: usize = 64;

pub fn parse_indent_number(input: &str) -> Result<IndentNumber, ValidationError> {
    IndentNumber::parse(input)
}

pub fn parse_username(input: &str) -> Result<Username, ValidationError> {
    Username::parse(input)
}

pub fn parse_step_code(input: &str) -> Result<StepCode, ValidationError> {
    StepCode::parse(input)
}

pub fn parse_sheet_name(input: &str) -> Result<SheetName, ValidationError> {
    SheetName::parse(input)
}

/// Business key of a candidate across the joining workflow sheets, e.g. `IND-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct IndentNumber(String);

impl IndentNumber {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("indent number must not be empty".to_string()));
        }
        if s.len() > IDENT_MAX_LEN {
            return Err(ValidationError(format!(
                "indent number exceeds max length {IDENT_MAX_LEN}"
            )));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '/')
        {
            return Err(ValidationError(
                "indent number must match [A-Za-z0-9-_/]+".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for IndentNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login name of a dashboard user account; the stable key for user mutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Username(String);

impl Username {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("username must not be empty".to_string()));
        }
        if s.len() > IDENT_MAX_LEN {
            return Err(ValidationError(format!(
                "username exceeds max length {IDENT_MAX_LEN}"
            )));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(ValidationError(
                "username must not contain whitespace".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow stage tag stamped on every composed write, e.g. `J-1`, `CT-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct StepCode(String);

impl StepCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("step code must not be empty".to_string()));
        }
        let Some((prefix, number)) = s.split_once('-') else {
            return Err(ValidationError(
                "step code must look like PREFIX-N, e.g. J-1".to_string(),
            ));
        };
        if prefix.is_empty()
            || prefix.len() > 4
            || !prefix.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ValidationError(
                "step code prefix must be 1-4 uppercase letters".to_string(),
            ));
        }
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError(
                "step code suffix must be numeric".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StepCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a tabular range in the backing service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct SheetName(String);

impl SheetName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("sheet name must not be empty".to_string()));
        }
        if s.len() > SHEET_NAME_MAX_LEN {
            return Err(ValidationError(format!(
                "sheet name exceeds max length {SHEET_NAME_MAX_LEN}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SheetName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
