// SPDX-License-Identifier: PMPL-1.0-or-later

//! Group file storage
//!
//! Group files are JSON arrays of records. They are written back
//! tab-indented, with non-ASCII text left unescaped, original key order
//! and a trailing newline, so that a run which changes nothing rewrites
//! the file byte-for-byte.

use crate::groups::Group;
use crate::types::ItemRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub fn group_path(directory: &Path, group: &Group) -> PathBuf {
    directory.join(&group.file_name)
}

/// Load the records of a group. `Ok(None)` when the group file does not
/// exist; any other read or parse failure is an error.
pub fn load_group(directory: &Path, group: &Group) -> Result<Option<Vec<ItemRecord>>> {
    let path = group_path(directory, group);
    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };
    let records = parse_records(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(records))
}

pub fn parse_records(data: &str) -> Result<Vec<ItemRecord>> {
    Ok(serde_json::from_str(data)?)
}

/// Serialize records the way group files are stored.
pub fn to_group_json(records: &[ItemRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

/// Write a whole group back to its file.
pub fn save_group(directory: &Path, group: &Group, records: &[ItemRecord]) -> Result<PathBuf> {
    let path = group_path(directory, group);
    let content = to_group_json(records)?;
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
