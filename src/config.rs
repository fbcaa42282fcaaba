use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_RAM_SIZE: usize = 32;
pub const DEFAULT_NUM_LINES: usize = 16;
pub const DEFAULT_LINE_SIZE: usize = 4;

/// Sizes of the simulated hierarchy. Every field has to be non-zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Geometry {
    pub ram_size: usize,
    pub num_lines: usize,
    pub line_size: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            ram_size: DEFAULT_RAM_SIZE,
            num_lines: DEFAULT_NUM_LINES,
            line_size: DEFAULT_LINE_SIZE,
        }
    }
}

impl Geometry {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("ram_size", self.ram_size),
            ("num_lines", self.num_lines),
            ("line_size", self.line_size),
        ];
        match fields.into_iter().find(|&(_, v)| v == 0) {
            Some((name, _)) => Err(ConfigError::ZeroDimension { name }),
            None => Ok(()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = File::open(path)?;
        let geometry: Geometry = serde_json::from_reader(BufReader::new(f))?;
        geometry.validate()?;
        Ok(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_the_classic_layout() {
        let g = Geometry::default();
        assert_eq!((g.ram_size, g.num_lines, g.line_size), (32, 16, 4));
        assert!(g.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let g = Geometry { line_size: 0, ..Geometry::default() };
        assert!(matches!(g.validate(), Err(ConfigError::ZeroDimension { name: "line_size" })));
        let g = Geometry { ram_size: 0, ..Geometry::default() };
        assert!(matches!(g.validate(), Err(ConfigError::ZeroDimension { name: "ram_size" })));
    }

    #[test]
    fn loads_partial_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"ram_size": 64, "num_lines": 8}}"#).unwrap();
        let g = Geometry::load(f.path()).unwrap();
        assert_eq!(g, Geometry { ram_size: 64, num_lines: 8, line_size: 4 });
    }

    #[test]
    fn bad_json_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "ram_size = 64").unwrap();
        assert!(matches!(Geometry::load(f.path()), Err(ConfigError::Json(_))));
    }
}
