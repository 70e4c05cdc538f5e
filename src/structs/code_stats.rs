use serde::Serialize;
use crate::enums::complexity::Complexity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeStats {
    pub lines: usize,
    pub chars: usize,
    pub complexity: Complexity,
    pub functions: usize,
}
