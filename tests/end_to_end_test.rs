//! End-to-end tests running both pipelines on the same input file.

use std::fs;
use std::io::{Cursor, Read};

use mdword::{to_docx, to_text_bundle, ParagraphKind};

const GUIDE: &str = "# Guide\n\nHello **world**.\n";

#[test]
fn test_both_pipelines_on_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("guide.md");
    fs::write(&input, GUIDE).unwrap();

    let docx = to_docx(&input).unwrap();
    assert_eq!(docx, dir.path().join("guide.docx"));

    let outputs = to_text_bundle(&input).unwrap();
    let text = fs::read_to_string(&outputs[1]).unwrap();
    let body = text.split("\n\n").skip(2).collect::<Vec<_>>().join("\n\n");
    assert!(body.contains("Guide"));
    assert!(body.contains("Hello world."));
    assert!(!body.contains('#'));
    assert!(!body.contains('*'));

    let bytes = fs::read(&docx).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    assert!(xml.contains(r#"<w:pStyle w:val="CustomH1"/>"#));
    assert!(xml.contains(
        r#"<w:r><w:t xml:space="preserve">Hello </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">world</w:t></w:r><w:r><w:t xml:space="preserve">.</w:t></w:r>"#
    ));
}

#[test]
fn test_rich_structure_of_minimal_guide() {
    let document = mdword::Mdword::new().parse_str(GUIDE).document();
    let kinds: Vec<_> = document.paragraphs().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![ParagraphKind::Heading1, ParagraphKind::Normal]);
    assert_eq!(document.page_break_count(), 0);
}
