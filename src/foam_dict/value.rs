//! In-memory form of an OpenFOAM dictionary.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Entries of one dictionary level, keyed by keyword.
pub type Entries = BTreeMap<String, FoamValue>;

/// A dictionary entry value.
///
/// Serializes untagged, so JSON output mirrors the file's hierarchy:
/// words become strings, sub-dictionaries objects, lists arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FoamValue {
    Word(String),
    Dict(Entries),
    List(Vec<FoamValue>),
}

impl FoamValue {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w.as_str()),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Entries> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FoamValue]> {
        match self {
            Self::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for FoamValue {
    fn from(word: &str) -> Self {
        Self::Word(word.to_string())
    }
}

/// A parsed dictionary file: the optional `FoamFile` header and the content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoamDict {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Entries>,
    pub body: Entries,
}

impl FoamDict {
    pub fn get(&self, key: &str) -> Option<&FoamValue> {
        self.body.get(key)
    }

    /// Follow nested dictionaries, e.g. `["boundaryField", "inlet", "type"]`.
    pub fn lookup(&self, path: &[&str]) -> Option<&FoamValue> {
        let (first, rest) = path.split_first()?;
        let mut value = self.body.get(*first)?;
        for key in rest {
            value = value.as_dict()?.get(*key)?;
        }
        Some(value)
    }
}

const INDENT: &str = "    ";

fn is_directive(key: &str) -> bool {
    key.starts_with('#')
}

/// Each occurrence of a directive; repeated ones are held as a list.
fn occurrences(value: &FoamValue) -> &[FoamValue] {
    match value {
        FoamValue::List(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &Entries, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    for (key, value) in entries {
        match value {
            _ if is_directive(key) => {
                for item in occurrences(value) {
                    match item {
                        FoamValue::Word(w) if w.is_empty() => writeln!(f, "{pad}{key}")?,
                        _ => writeln!(f, "{pad}{key} {item}")?,
                    }
                }
            }
            FoamValue::Dict(inner) => {
                writeln!(f, "{pad}{key}")?;
                writeln!(f, "{pad}{{")?;
                write_entries(f, inner, depth + 1)?;
                writeln!(f, "{pad}}}")?;
            }
            FoamValue::Word(w) if w.is_empty() => writeln!(f, "{pad}{key};")?,
            other => writeln!(f, "{pad}{key} {other};")?,
        }
    }
    Ok(())
}

/// Inline form, used for list items and entry values.
///
/// Words are written as they are. A word holding several tokens, such as
/// `uniform (3 0 0)`, reads back as a single word only when it is an entry
/// value; as a list item it reads back as separate items.
impl fmt::Display for FoamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => f.write_str(w),
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
            Self::Dict(entries) => {
                f.write_str("{")?;
                for (key, value) in entries {
                    if is_directive(key) {
                        for item in occurrences(value) {
                            write!(f, " {} {};", key, item)?;
                        }
                        continue;
                    }
                    match value {
                        Self::Word(w) if w.is_empty() => write!(f, " {};", key)?,
                        _ => write!(f, " {} {};", key, value)?,
                    }
                }
                f.write_str(" }")
            }
        }
    }
}

/// OpenFOAM file syntax: header block, then one entry per line.
impl fmt::Display for FoamDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            writeln!(f, "FoamFile")?;
            writeln!(f, "{{")?;
            write_entries(f, header, 1)?;
            writeln!(f, "}}")?;
            writeln!(f)?;
        }
        write_entries(f, &self.body, 0)
    }
}
