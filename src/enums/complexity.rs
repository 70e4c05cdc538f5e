use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl Complexity {
    pub fn from_score(score: usize) -> Self {
        match score {
            0..=4 => Complexity::Simple,
            5..=14 => Complexity::Moderate,
            15..=29 => Complexity::Complex,
            _ => Complexity::VeryComplex,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Complex => "Complex",
            Complexity::VeryComplex => "Very Complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
