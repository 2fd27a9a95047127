//! CSV body loader.
//!
//! Reads initial body states from a plain comma-separated file, one body
//! per row: `x,y,vx,vy,mass` with an optional trailing `name` column.
//! Lines starting with `#` and blank lines are skipped. The loader only
//! produces [`BodyInit`] records; all physical validation happens when
//! the system is built.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::simulation::states::{BodyInit, NVec2};

fn parse_field(line: usize, field: &str, label: &str) -> Result<f64, ConfigError> {
    field.trim().parse::<f64>().map_err(|_| ConfigError::MalformedRow {
        line,
        reason: format!("cannot parse {label} from {:?}", field.trim()),
    })
}

/// Parse CSV body rows from a string. Line numbers in errors are 1-based.
pub fn parse_bodies_csv(contents: &str) -> Result<Vec<BodyInit>, ConfigError> {
    let mut inits = Vec::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() != 5 && fields.len() != 6 {
            return Err(ConfigError::MalformedRow {
                line,
                reason: format!("expected 5 or 6 fields (x,y,vx,vy,mass[,name]), got {}", fields.len()),
            });
        }

        let x = parse_field(line, fields[0], "x")?;
        let y = parse_field(line, fields[1], "y")?;
        let vx = parse_field(line, fields[2], "vx")?;
        let vy = parse_field(line, fields[3], "vy")?;
        let m = parse_field(line, fields[4], "mass")?;

        let name = fields
            .get(5)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        inits.push(BodyInit {
            x: NVec2::new(x, y),
            v: NVec2::new(vx, vy),
            m,
            name,
        });
    }

    Ok(inits)
}

/// Load initial body states from a CSV file on disk.
pub fn load_bodies_csv(path: &Path) -> Result<Vec<BodyInit>, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_bodies_csv(&contents)
}
