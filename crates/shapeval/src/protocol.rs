//! The shape protocol: which record fields make a valid 2D shape
//!
//! Construction of a [`Shape2D`] never consults these rules. They are a
//! policy the evaluator applies when it wants to know that a shape's
//! fields are usable:
//!
//! - `dist` (required): the signed distance function
//! - `bbox` (optional): `[[xmin, ymin], [xmax, ymax]]`
//! - `colour` (optional): the colour function

use crate::error::type_name;
use crate::value::{Record, Shape2D, Tag, Value};
use crate::{Error, Result};

/// Field holding the signed distance function
pub const DIST: &str = "dist";

/// Field holding the bounding box
pub const BBOX: &str = "bbox";

/// Field holding the colour function
pub const COLOUR: &str = "colour";

/// Check a record against the 2D shape protocol.
pub fn check_shape2d(record: &Record) -> Result<()> {
    match record.get(DIST) {
        Some(value) => require_function(DIST, value)?,
        None => {
            return Err(Error::MissingField {
                field: DIST.to_string(),
            })
        }
    }

    if let Some(value) = record.get(BBOX) {
        if read_bbox(value).is_none() {
            return Err(Error::InvalidField {
                field: BBOX.to_string(),
                expected: "[[xmin, ymin], [xmax, ymax]]".to_string(),
                got: value.to_string(),
            });
        }
    }

    if let Some(value) = record.get(COLOUR) {
        require_function(COLOUR, value)?;
    }

    Ok(())
}

/// The bounding box of a shape, if it carries a well-formed one.
pub fn bbox(shape: &Shape2D) -> Option<[[f64; 2]; 2]> {
    shape.record().get(BBOX).and_then(read_bbox)
}

fn require_function(field: &str, value: &Value) -> Result<()> {
    if value.tag() == Tag::Function {
        Ok(())
    } else {
        Err(Error::InvalidField {
            field: field.to_string(),
            expected: Tag::Function.name().to_string(),
            got: type_name(value).to_string(),
        })
    }
}

fn read_bbox(value: &Value) -> Option<[[f64; 2]; 2]> {
    match value.as_list()? {
        [lo, hi] => Some([read_point(lo)?, read_point(hi)?]),
        _ => None,
    }
}

fn read_point(value: &Value) -> Option<[f64; 2]> {
    match value.as_list()? {
        [x, y] => Some([x.as_f64()?, y.as_f64()?]),
        _ => None,
    }
}
