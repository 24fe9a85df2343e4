//! KML XML encoding

use super::types::{Document, Feature, Folder, NetworkLink, Placemark};
use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// KML 2.2 namespace
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Encode a feature tree as a complete KML document
pub fn to_kml_string(feature: &Feature) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut root = BytesStart::new("kml");
    root.push_attribute(("xmlns", KML_NAMESPACE));
    writer.write_event(Event::Start(root))?;
    write_feature(&mut writer, feature)?;
    writer.write_event(Event::End(BytesEnd::new("kml")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| Error::Other(format!("KML output is not UTF-8: {e}")))
}

fn write_feature<W: std::io::Write>(writer: &mut Writer<W>, feature: &Feature) -> Result<()> {
    match feature {
        Feature::Document(doc) => write_document(writer, doc),
        Feature::Folder(folder) => write_folder(writer, folder),
        Feature::Placemark(placemark) => write_placemark(writer, placemark),
        Feature::NetworkLink(link) => write_network_link(writer, link),
    }
}

fn write_document<W: std::io::Write>(writer: &mut Writer<W>, doc: &Document) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Document")))?;
    write_text_element(writer, "name", doc.name.as_deref())?;
    for child in &doc.features {
        write_feature(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Document")))?;
    Ok(())
}

fn write_folder<W: std::io::Write>(writer: &mut Writer<W>, folder: &Folder) -> Result<()> {
    writer.write_event(Event::Start(start_with_id("Folder", folder.id.as_deref())))?;
    write_text_element(writer, "name", folder.name.as_deref())?;
    write_text_element(writer, "description", folder.description.as_deref())?;
    for child in &folder.features {
        write_feature(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Folder")))?;
    Ok(())
}

fn write_placemark<W: std::io::Write>(writer: &mut Writer<W>, placemark: &Placemark) -> Result<()> {
    writer.write_event(Event::Start(start_with_id(
        "Placemark",
        placemark.id.as_deref(),
    )))?;
    write_text_element(writer, "name", placemark.name.as_deref())?;
    write_text_element(writer, "description", placemark.description.as_deref())?;
    writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
    Ok(())
}

fn write_network_link<W: std::io::Write>(writer: &mut Writer<W>, link: &NetworkLink) -> Result<()> {
    writer.write_event(Event::Start(start_with_id(
        "NetworkLink",
        link.id.as_deref(),
    )))?;
    write_text_element(writer, "name", link.name.as_deref())?;
    write_text_element(writer, "description", link.description.as_deref())?;
    if let Some(target) = &link.link {
        writer.write_event(Event::Start(BytesStart::new("Link")))?;
        write_text_element(writer, "href", Some(target.href.as_str()))?;
        writer.write_event(Event::End(BytesEnd::new("Link")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("NetworkLink")))?;
    Ok(())
}

fn start_with_id<'a>(tag: &'a str, id: Option<&'a str>) -> BytesStart<'a> {
    let mut start = BytesStart::new(tag);
    if let Some(id) = id {
        start.push_attribute(("id", id));
    }
    start
}

/// Write `<tag>text</tag>`; absent values are omitted entirely
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: Option<&str>,
) -> Result<()> {
    let Some(text) = text else {
        return Ok(());
    };
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
