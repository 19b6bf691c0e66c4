use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::InvoiceError;

pub type MarkupResult = Result<String, InvoiceError>;

fn markup_io(e: std::io::Error) -> InvoiceError {
    InvoiceError::Render(format!("markup write error: {e}"))
}

/// Thin wrapper over `quick_xml::Writer` for emitting an HTML fragment.
///
/// Text and attribute values are always escaped.
pub struct MarkupWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    pub fn into_string(self) -> MarkupResult {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| InvoiceError::Render(format!("markup UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, InvoiceError> {
        self.start_element_with_attrs(name, &[])
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, InvoiceError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(markup_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, InvoiceError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(markup_io)?;
        Ok(self)
    }

    /// Self-closing element such as `<br/>`.
    pub fn empty_element(&mut self, name: &str) -> Result<&mut Self, InvoiceError> {
        self.writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(markup_io)?;
        Ok(self)
    }

    pub fn text(&mut self, text: &str) -> Result<&mut Self, InvoiceError> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(markup_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, InvoiceError> {
        self.text_element_with_attrs(name, text, &[])
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, InvoiceError> {
        self.start_element_with_attrs(name, attrs)?;
        self.text(text)?;
        self.end_element(name)
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}
