//! JNLP descriptor generator.
//!
//! This module provides:
//! - [`jnlp_xml`] – Serialize a [`Bundle`] into JNLP XML through a streaming
//!   [`XmlWriter`](crate::writer::XmlWriter).
//! - Output plumbing on [`Bundle`]: [`Bundle::write`],
//!   [`Bundle::write_to_file`] and [`Bundle::write_to`].

pub mod jnlp_xml;

use std::io::{BufWriter, Write};

use camino::Utf8Path;

use crate::bundle::Bundle;
use crate::error::{Error, Result};
use crate::writer::XmlWriter;

impl Bundle {
    /// Preconditions checked before any output is produced. Per-element
    /// required-attribute checks happen during the traversal and can leave
    /// a partial document behind; these cannot.
    fn check_preconditions(&self) -> Result<()> {
        if self.informations.is_empty() {
            return Err(Error::Validation(
                "information element not found".to_string(),
            ));
        }
        if self.descriptor.is_none() {
            return Err(Error::Validation("unspecified bundle type".to_string()));
        }
        Ok(())
    }

    /// Serialize the bundle to the destination configured with
    /// [`set_out`](Bundle::set_out).
    pub fn write(&self) -> Result<()> {
        if self.informations.is_empty() {
            return Err(Error::Validation(
                "information element not found".to_string(),
            ));
        }
        let out = self
            .out
            .clone()
            .ok_or_else(|| Error::Validation("unspecified output file".to_string()))?;
        self.write_to_file(out)
    }

    /// Serialize the bundle to a file. The file is only created once the
    /// serialization preconditions hold, so a bundle that fails them never
    /// truncates an existing descriptor. A mid-stream validation failure
    /// still leaves a partial file behind; its content must be treated as
    /// invalid. The file handle is released on every exit path.
    pub fn write_to_file(&self, path: impl AsRef<Utf8Path>) -> Result<()> {
        self.check_preconditions()?;
        let file = std::fs::File::create(path.as_ref().as_std_path())?;
        self.write_to(BufWriter::new(file))
    }

    /// Serialize the bundle to any byte sink in one pass.
    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = XmlWriter::new(out);
        jnlp_xml::write_bundle(self, &mut writer)
    }
}
