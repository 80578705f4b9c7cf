//! Minimal streaming XML writer.
//!
//! [`XmlWriter`] emits a document as a flat stream of events over any
//! [`io::Write`]: `start_document`, `start_element`, `add_element`
//! (self-closing), `characters`, `end_element`, `end_document`. It tracks
//! the open-element stack so unbalanced output is caught at the call site
//! instead of producing a malformed document.
//!
//! Output is compact (no indentation); element and attribute order is
//! exactly the call order, which keeps generated documents deterministic.

use std::io::Write;

use crate::error::{Error, Result};

/// Escape text content for XML: `&`, `<`, `>`, `"` and `'`.
pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an attribute value. Like [`xml_escape`] but also encodes newlines
/// as `&#xA;` and carriage returns as `&#xD;` so values survive attribute
/// whitespace normalization.
pub(crate) fn xml_escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Streaming XML writer over an [`io::Write`] destination.
pub struct XmlWriter<W: Write> {
    out: W,
    open: Vec<String>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        XmlWriter {
            out,
            open: Vec::new(),
        }
    }

    /// Write the XML declaration. Call once, before any element.
    pub fn start_document(&mut self) -> Result<()> {
        self.out
            .write_all(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
        Ok(())
    }

    fn write_tag(&mut self, name: &str, attrs: &[(&str, String)], self_closing: bool) -> Result<()> {
        let mut tag = String::with_capacity(name.len() + 2);
        tag.push('<');
        tag.push_str(name);
        for (attr_name, attr_value) in attrs {
            tag.push(' ');
            tag.push_str(attr_name);
            tag.push_str("=\"");
            tag.push_str(&xml_escape_attr(attr_value));
            tag.push('"');
        }
        tag.push_str(if self_closing { "/>" } else { ">" });
        self.out.write_all(tag.as_bytes())?;
        Ok(())
    }

    /// Open an element with the given attributes, in order.
    pub fn start_element(&mut self, name: &str, attrs: &[(&str, String)]) -> Result<()> {
        self.write_tag(name, attrs, false)?;
        self.open.push(name.to_string());
        Ok(())
    }

    /// Write a self-closing element with the given attributes.
    pub fn add_element(&mut self, name: &str, attrs: &[(&str, String)]) -> Result<()> {
        self.write_tag(name, attrs, true)
    }

    /// Write escaped character data inside the currently open element.
    pub fn characters(&mut self, text: &str) -> Result<()> {
        if self.open.is_empty() {
            return Err(Error::Validation(
                "character data outside of any element".to_string(),
            ));
        }
        self.out.write_all(xml_escape(text).as_bytes())?;
        Ok(())
    }

    /// Close the most recently opened element.
    pub fn end_element(&mut self) -> Result<()> {
        let name = self.open.pop().ok_or_else(|| {
            Error::Validation("end_element with no open element".to_string())
        })?;
        self.out.write_all(format!("</{name}>").as_bytes())?;
        Ok(())
    }

    /// Finish the document: every element must be closed. Flushes the
    /// destination so a following close cannot lose buffered output.
    pub fn end_document(&mut self) -> Result<()> {
        if let Some(name) = self.open.last() {
            return Err(Error::Validation(format!(
                "document ended with <{name}> still open"
            )));
        }
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
