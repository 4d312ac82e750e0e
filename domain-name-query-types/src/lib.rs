use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QType {
    A,
    Ns,
}

impl QType {
    pub fn code(&self) -> u16 {
        match self {
            QType::A => 1,
            QType::Ns => 2,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(QType::A),
            2 => Some(QType::Ns),
            _ => None,
        }
    }
}

impl fmt::Display for QType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            QType::A => "A",
            QType::Ns => "NS",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(QType::A),
            "ns" => Ok(QType::Ns),
            other => Err(format!("unsupported query type: '{}'", other)),
        }
    }
}

// Only the Internet class is ever queried.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QClass {
    In,
}

impl QClass {
    pub fn code(&self) -> u16 {
        match self {
            QClass::In => 1,
        }
    }
}

impl fmt::Display for QClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QClass::In => write!(f, "IN"),
        }
    }
}

pub type Name = String;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NameQuery {
    pub name: Name,
    pub q_type: QType,
}

impl NameQuery {
    /// A fully qualified `example.com.` is stored as `example.com`; the wire
    /// encoding adds the root terminator itself.
    pub fn new(name_str: &str, q_type: QType) -> Self {
        let name_str = name_str.strip_suffix('.').unwrap_or(name_str);

        Self {
            name: Name::from(name_str),
            q_type,
        }
    }

    pub fn a_record(name_str: &str) -> Self {
        Self::new(name_str, QType::A)
    }

    pub fn ns_record(name_str: &str) -> Self {
        Self::new(name_str, QType::Ns)
    }
}
