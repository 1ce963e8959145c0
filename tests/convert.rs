//! End-to-end conversion tests on DOCX packages built in memory.

use std::io::{Cursor, Write};

use docx2wiki::{bytes_to_wiki, parse_bytes, to_wiki, Error, RenderOptions};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const NAMESPACES: &str = concat!(
    r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture""#,
);

fn package(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default();
    for (name, data) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
    buffer
}

fn docx_with_document(document_xml: &str) -> Vec<u8> {
    package(&[
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("word/document.xml", document_xml.as_bytes()),
    ])
}

fn docx(body: &str) -> Vec<u8> {
    docx_with_document(&format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document {NAMESPACES}><w:body>{body}</w:body></w:document>"#
    ))
}

fn convert(body: &str) -> String {
    bytes_to_wiki(&docx(body), &RenderOptions::default()).unwrap()
}

#[test]
fn test_empty_body() {
    assert_eq!(convert(""), "");
}

#[test]
fn test_paragraphs_headings_and_lists() {
    let body = r#"
<w:p><w:pPr><w:pStyle w:val="1"/></w:pPr><w:r><w:t>Overview</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Plain </w:t></w:r><w:r><w:t>text</w:t></w:r></w:p>
<w:p><w:pPr><w:pStyle w:val="ListParagraph"/><w:numPr><w:ilvl w:val="0"/><w:numId w:val="4"/></w:numPr></w:pPr><w:r><w:t>One</w:t></w:r></w:p>
<w:p><w:pPr><w:pStyle w:val="ListParagraph"/><w:numPr><w:ilvl w:val="2"/><w:numId w:val="4"/></w:numPr></w:pPr><w:r><w:t>Three deep</w:t></w:r></w:p>
<w:sectPr><w:pgSz w:w="12240" w:h="15840"/></w:sectPr>"#;

    assert_eq!(
        convert(body),
        "h1. Overview\nPlain text\n* One\n*** Three deep\n"
    );
}

#[test]
fn test_table() {
    let body = r#"
<w:tbl>
  <w:tblPr><w:tblStyle w:val="TableGrid"/></w:tblPr>
  <w:tblGrid><w:gridCol w:w="4000"/><w:gridCol w:w="4000"/></w:tblGrid>
  <w:tr>
    <w:tc><w:tcPr><w:tcW w:w="4000" w:type="dxa"/></w:tcPr><w:p><w:r><w:t>A</w:t></w:r></w:p></w:tc>
    <w:tc><w:p><w:r><w:t>B</w:t></w:r></w:p></w:tc>
  </w:tr>
  <w:tr>
    <w:tc><w:p><w:r><w:t>C</w:t></w:r></w:p></w:tc>
    <w:tc><w:p/></w:tc>
  </w:tr>
  <w:tr>
    <w:tc><w:p><w:r><w:t>X</w:t></w:r></w:p><w:p><w:r><w:t>Y</w:t></w:r></w:p></w:tc>
    <w:tc><w:p><w:r><w:t>D</w:t></w:r></w:p></w:tc>
  </w:tr>
</w:tbl>"#;

    assert_eq!(convert(body), "|A|B|\n|C| |\n|X\\\\\nY|D|\n");
}

#[test]
fn test_inline_picture() {
    let body = r#"
<w:p>
  <w:r><w:t xml:space="preserve">Figure: </w:t></w:r>
  <w:r><w:drawing><wp:inline><wp:docPr id="1" name="Picture 1"/>
    <a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">
      <pic:pic><pic:nvPicPr><pic:cNvPr id="0" name="diagram.png"/><pic:cNvPicPr/></pic:nvPicPr></pic:pic>
    </a:graphicData></a:graphic>
  </wp:inline></w:drawing></w:r>
</w:p>"#;

    assert_eq!(convert(body), "Figure: !diagram.png!\n");

    let options = RenderOptions::new().with_pictures(false);
    assert_eq!(bytes_to_wiki(&docx(body), &options).unwrap(), "Figure: \n");
}

#[test]
fn test_escaped_characters_are_unescaped_not_reescaped() {
    let body = r#"<w:p><w:r><w:t>a &lt; b &amp;&amp; c | d</w:t></w:r></w:p>"#;
    assert_eq!(convert(body), "a < b && c | d\n");
}

#[test]
fn test_invalid_list_level_fails_conversion() {
    let body = r#"
<w:p><w:r><w:t>fine</w:t></w:r></w:p>
<w:p><w:pPr><w:numPr><w:ilvl w:val="abc"/></w:numPr></w:pPr><w:r><w:t>Item</w:t></w:r></w:p>"#;

    let err = bytes_to_wiki(&docx(body), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidListLevel { value } if value == "abc"));
}

#[test]
fn test_malformed_attribute_fails_conversion() {
    let body = r#"<w:p><w:pPr><w:pStyle w:val="2" broken/></w:pPr><w:r><w:t>T</w:t></w:r></w:p>"#;
    let err = bytes_to_wiki(&docx(body), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::XmlParse(_)));

    let body = r#"<w:p><w:pPr><w:pStyle w:val="2" w:val="3"/></w:pPr><w:r><w:t>T</w:t></w:r></w:p>"#;
    let err = bytes_to_wiki(&docx(body), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::XmlParse(_)));
}

#[test]
fn test_missing_body() {
    let data = docx_with_document(&format!(r#"<w:document {NAMESPACES}/>"#));

    let tree = parse_bytes(&data).unwrap();
    assert_eq!(
        docx2wiki::render::to_wiki(&tree, &RenderOptions::default()).unwrap(),
        None
    );

    let err = bytes_to_wiki(&data, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingBody));
}

#[test]
fn test_missing_document_part() {
    let data = package(&[("[Content_Types].xml", CONTENT_TYPES.as_bytes())]);
    let err = bytes_to_wiki(&data, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingComponent(part) if part == "word/document.xml"));
}

#[test]
fn test_spreadsheet_rejected() {
    let types = r#"<Types><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;
    let data = package(&[
        ("[Content_Types].xml", types.as_bytes()),
        ("xl/workbook.xml", &b"<workbook/>"[..]),
    ]);
    let err = bytes_to_wiki(&data, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn test_utf16_document_part() {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-16"?><w:document {NAMESPACES}><w:body><w:p><w:r><w:t>Grüße</w:t></w:r></w:p></w:body></w:document>"#
    );
    let mut bytes = vec![0xFF, 0xFE];
    for unit in xml.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let data = package(&[
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("word/document.xml", bytes.as_slice()),
    ]);

    assert_eq!(
        bytes_to_wiki(&data, &RenderOptions::default()).unwrap(),
        "Grüße\n"
    );
}

#[test]
fn test_convert_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.docx");
    std::fs::write(
        &path,
        docx(r#"<w:p><w:pPr><w:pStyle w:val="3"/></w:pPr><w:r><w:t>From disk</w:t></w:r></w:p>"#),
    )
    .unwrap();

    assert_eq!(to_wiki(&path).unwrap(), "h3. From disk\n");
}
