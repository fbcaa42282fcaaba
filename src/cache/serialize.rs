use serde::{Deserialize, Serialize};

use crate::Word;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineData {
    pub valid: bool,
    pub dirty: bool,
    pub data: Vec<Word>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheData {
    pub num_lines: usize,
    pub line_size: usize,
    pub cycle_count: u64,
    pub lines: Vec<LineData>,
}

impl super::Cache {
    // Read-only view of every line, for display and dumps.
    pub fn snapshot(&self) -> Vec<LineData> {
        self.lines
            .iter()
            .map(|line| LineData {
                valid: line.valid,
                dirty: line.dirty,
                data: line.data.clone(),
            })
            .collect()
    }

    pub fn save_state(&self) -> CacheData {
        CacheData {
            num_lines: self.num_lines,
            line_size: self.line_size,
            cycle_count: self.cycle_count,
            lines: self.snapshot(),
        }
    }
}
