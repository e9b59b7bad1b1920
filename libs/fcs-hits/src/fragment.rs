//! Merge of one highlight fragment into the streaming record output.
//!
//! A cleaned fragment is untrusted, partially structured markup: escaped
//! text plus at most one literal hit span. It is wrapped in a synthetic
//! root, pulled through a reader and re-emitted with two rewrite rules:
//! elements named exactly `Hit` move into the hits namespace, and
//! whitespace-only text is dropped. Any parse failure aborts the record;
//! partial emission would corrupt the outer stream.

use crate::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

const WRAPPER: &str = "fragment-root";
const HIT_LOCAL: &str = "Hit";
const HIT_QUALIFIED: &str = "hits:Hit";

pub(crate) fn write_fragment<W: Write>(writer: &mut Writer<W>, fragment: &str) -> Result<()> {
    let wrapped = format!("<{WRAPPER}>{fragment}</{WRAPPER}>");
    let mut reader = Reader::from_str(&wrapped);

    loop {
        match reader.read_event()? {
            Event::Start(start) => write_start(writer, &start)?,
            Event::Empty(start) => {
                write_start(writer, &start)?;
                write_end(writer, start.name().as_ref())?;
            }
            Event::End(end) => write_end(writer, end.name().as_ref())?,
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() {
                    writer.write_event(Event::Text(BytesText::new(&text)))?;
                }
            }
            Event::Eof => break,
            // Declarations, comments and processing instructions carry no
            // hit content and are not forwarded.
            _ => {}
        }
    }
    Ok(())
}

fn write_start<W: Write>(writer: &mut Writer<W>, start: &BytesStart<'_>) -> Result<()> {
    let raw_name = start.name();
    let name = std::str::from_utf8(raw_name.as_ref())?;
    if name == WRAPPER {
        return Ok(());
    }

    let mut out = if name == HIT_LOCAL {
        BytesStart::new(HIT_QUALIFIED)
    } else {
        BytesStart::new(name)
    };
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?;
        let value = attribute.unescape_value()?;
        out.push_attribute((key, value.as_ref()));
    }

    writer.write_event(Event::Start(out))?;
    Ok(())
}

fn write_end<W: Write>(writer: &mut Writer<W>, raw_name: &[u8]) -> Result<()> {
    let name = std::str::from_utf8(raw_name)?;
    if name == WRAPPER {
        return Ok(());
    }
    let mapped = if name == HIT_LOCAL { HIT_QUALIFIED } else { name };
    writer.write_event(Event::End(BytesEnd::new(mapped)))?;
    Ok(())
}
