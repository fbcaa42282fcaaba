use serde::{Deserialize, Serialize};

use crate::Word;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RamData {
    pub size: usize,
    pub cells: Vec<Word>,
}

impl super::Ram {
    pub fn save_state(&self) -> RamData {
        RamData {
            size: self.cells.len(),
            cells: self.cells.clone(),
        }
    }
}
