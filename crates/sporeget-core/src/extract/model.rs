//! Structured extraction from well-formed XML documents.
//!
//! Streaming reads over adventure model documents, REST listing pages and
//! the thumbnail-count documents. Callers are expected to have stripped the
//! known-unsafe elements first (see [`crate::extract::feed`]); a parse
//! failure here is a genuine shape error.

use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

fn xml_err(err: impl std::fmt::Display) -> Error {
    Error::UnexpectedDocument(format!("XML parse error: {err}"))
}

fn reader_for(xml: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader
}

/// Counts elements with the given local name anywhere in the document.
///
/// This is the paginator's page-size probe: a listing page is exhausted
/// when it carries fewer matching elements than the page size.
pub fn count_elements(xml: &str, tag: &str) -> Result<usize> {
    let mut reader = reader_for(xml);
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                if e.local_name().as_ref() == tag.as_bytes() {
                    count += 1;
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            Ok(_) => {},
        }
        buf.clear();
    }
    Ok(count)
}

/// Text content of every `<asset>` element.
///
/// Adventure model documents reference their child creations as
/// identifier-bearing `<asset>` leaves.
pub fn asset_references(xml: &str) -> Result<Vec<String>> {
    let mut reader = reader_for(xml);
    let mut buf = Vec::new();
    let mut out = Vec::new();
    let mut current: Option<String> = None;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"asset" {
                    current = Some(String::new());
                }
            },
            Ok(Event::Text(e)) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&e.unescape().map_err(xml_err)?);
                }
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"asset" {
                    if let Some(text) = current.take() {
                        let text = text.trim().to_string();
                        if !text.is_empty() {
                            out.push(text);
                        }
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            Ok(_) => {},
        }
        buf.clear();
    }
    Ok(out)
}

/// `id` attribute of every `<asset>` element.
///
/// The thumbnail listing document carries the asset id as an attribute
/// rather than a child element.
pub fn asset_id_attributes(xml: &str) -> Result<Vec<String>> {
    let mut reader = reader_for(xml);
    let mut buf = Vec::new();
    let mut out = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                if e.local_name().as_ref() == b"asset" {
                    if let Some(attr) = e.try_get_attribute("id").map_err(xml_err)? {
                        out.push(attr.unescape_value().map_err(xml_err)?.into_owned());
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            Ok(_) => {},
        }
        buf.clear();
    }
    Ok(out)
}

/// Text of the first direct `<id>` child of every element with the given
/// local name.
///
/// REST listing pages nest the identifier as a child element
/// (`<asset><id>…</id>…</asset>`); only the first direct child counts, so
/// ids of nested structures (authors, comments) are not picked up.
pub fn child_id_texts(xml: &str, parent: &str) -> Result<Vec<String>> {
    let mut reader = reader_for(xml);
    let mut buf = Vec::new();
    let mut out = Vec::new();

    // Depth inside the current parent element; 0 means outside.
    let mut depth = 0usize;
    let mut taken = false;
    let mut capturing = false;
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                if depth == 0 {
                    if name.as_ref() == parent.as_bytes() {
                        depth = 1;
                        taken = false;
                    }
                } else {
                    if depth == 1 && name.as_ref() == b"id" && !taken {
                        capturing = true;
                        current.clear();
                    }
                    depth += 1;
                }
            },
            Ok(Event::Text(e)) => {
                if capturing {
                    current.push_str(&e.unescape().map_err(xml_err)?);
                }
            },
            Ok(Event::End(e)) => {
                if depth > 0 {
                    depth -= 1;
                    if capturing && e.local_name().as_ref() == b"id" {
                        out.push(current.trim().to_string());
                        capturing = false;
                        taken = true;
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            Ok(_) => {},
        }
        buf.clear();
    }
    Ok(out)
}

/// Value of the named attribute on the document's root element.
pub fn root_attribute(xml: &str, name: &str) -> Result<Option<String>> {
    let mut reader = reader_for(xml);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                return match e.try_get_attribute(name).map_err(xml_err)? {
                    Some(attr) => Ok(Some(attr.unescape_value().map_err(xml_err)?.into_owned())),
                    None => Ok(None),
                };
            },
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(xml_err(e)),
            Ok(_) => {},
        }
        buf.clear();
    }
}

/// Trimmed text of the first element with the given local name, if any.
pub fn element_text(xml: &str, tag: &str) -> Result<Option<String>> {
    let mut reader = reader_for(xml);
    let mut buf = Vec::new();
    let mut capturing = false;
    let mut current = String::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if !capturing && e.local_name().as_ref() == tag.as_bytes() {
                    capturing = true;
                }
            },
            Ok(Event::Text(e)) => {
                if capturing {
                    current.push_str(&e.unescape().map_err(xml_err)?);
                }
            },
            Ok(Event::End(e)) => {
                if capturing && e.local_name().as_ref() == tag.as_bytes() {
                    return Ok(Some(current.trim().to_string()));
                }
            },
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(xml_err(e)),
            Ok(_) => {},
        }
        buf.clear();
    }
}
