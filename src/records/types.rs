use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a student within the store.
///
/// Data files in the wild carry roll numbers either as JSON numbers or as
/// strings (`"12B"`), so both are accepted and written back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RollNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollNumber::Number(n) => write!(f, "{}", n),
            RollNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single student as stored in the data file and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub class: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: RollNumber,
}

impl StudentRecord {
    pub fn new(name: &str, class: &str, roll_number: RollNumber) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            roll_number,
        }
    }
}
