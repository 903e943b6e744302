//! OpenFOAM dictionary reader.
//!
//! Reads files such as `0/U`, `system/controlDict` or
//! `constant/transportProperties` into a nested [`FoamDict`]. The reader only
//! checks grammar; keyword meaning is left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use foamcase::foam_dict::read_dictionary;
//!
//! let u = read_dictionary("cavity/0/U")?;
//! let inlet = u.lookup(&["boundaryField", "inlet", "type"]);
//! # Ok::<(), foamcase::FoamCaseError>(())
//! ```

pub mod lexer;
pub mod parser;
pub mod value;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

pub use value::{Entries, FoamDict, FoamValue};

/// Keyword of the header block every OpenFOAM file starts with.
pub const HEADER_KEYWORD: &str = "FoamFile";

/// Parse dictionary text.
///
/// A top-level `FoamFile` sub-dictionary is moved into
/// [`FoamDict::header`]; everything else lands in [`FoamDict::body`].
pub fn parse_dictionary(text: &str) -> Result<FoamDict> {
    let tokens = lexer::tokenize(text)?;
    let mut body = parser::Parser::new(&tokens).parse_entries(false)?;

    let header = match body.remove(HEADER_KEYWORD) {
        Some(FoamValue::Dict(header)) => Some(header),
        Some(other) => {
            body.insert(HEADER_KEYWORD.to_string(), other);
            None
        }
        None => None,
    };

    Ok(FoamDict { header, body })
}

/// Read and parse a dictionary file.
///
/// IO errors and grammar errors are returned as they occur, without extra
/// wrapping.
pub fn read_dictionary(path: impl AsRef<Path>) -> Result<FoamDict> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let dict = parse_dictionary(&text)?;
    debug!("parsed {} ({} top-level entries)", path.display(), dict.body.len());
    Ok(dict)
}

/// Write `dict` in OpenFOAM syntax, replacing any existing file.
pub fn write_dictionary(path: impl AsRef<Path>, dict: &FoamDict) -> Result<()> {
    fs::write(path, dict.to_string())?;
    Ok(())
}
