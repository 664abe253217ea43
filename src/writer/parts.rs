//! Package parts of a WordprocessingML document other than the body.

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::model::{inches_to_twips, pt_to_half_points, pt_to_twips, StyleDefinition, StyleSheet};

pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const NS_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(crate) const NS_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// Paragraph style ids of the two list styles.
pub(crate) const LIST_BULLET_STYLE: &str = "ListBullet";
pub(crate) const LIST_NUMBER_STYLE: &str = "ListNumber";

/// `w:numId` values defined in the numbering part.
pub(crate) const BULLET_NUM_ID: u32 = 1;
pub(crate) const DECIMAL_NUM_ID: u32 = 2;

/// Relationship ids below this are taken by styles and numbering.
pub(crate) const FIRST_HYPERLINK_REL: usize = 3;

/// Escape text for element content and attribute values.
pub(crate) fn xml_escape(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_forbidden_char) {
        let cleaned: String = text.chars().filter(|c| !is_forbidden_char(*c)).collect();
        Cow::Owned(quick_xml::escape::escape(&cleaned).into_owned())
    } else {
        quick_xml::escape::escape(text)
    }
}

/// Control characters XML 1.0 cannot carry at all.
fn is_forbidden_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
}

pub(crate) fn content_types() -> String {
    format!(
        r#"{XML_DECLARATION}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#
    )
}

pub(crate) fn package_rels() -> String {
    format!(
        r#"{XML_DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

/// Relationships of the document part: styles, numbering, then one
/// external target per hyperlink URL, in order of first use.
pub(crate) fn document_rels(hyperlinks: &[String]) -> String {
    let mut xml = format!(
        r#"{XML_DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
"#
    );
    for (i, url) in hyperlinks.iter().enumerate() {
        let _ = writeln!(
            xml,
            r#"<Relationship Id="rId{}" Type="{REL_HYPERLINK}" Target="{}" TargetMode="External"/>"#,
            i + FIRST_HYPERLINK_REL,
            xml_escape(url)
        );
    }
    xml.push_str("</Relationships>");
    xml
}

/// The styles part: Normal, the five custom paragraph styles and the two list styles.
pub(crate) fn styles(sheet: &StyleSheet) -> String {
    let mut xml = String::with_capacity(4096);
    let _ = write!(
        xml,
        r#"{XML_DECLARATION}
<w:styles xmlns:w="{NS_MAIN}">
<w:docDefaults><w:rPrDefault><w:rPr>{fonts}<w:sz w:val="{size}"/><w:szCs w:val="{size}"/><w:lang w:val="en-US"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults>
<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>
<w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont"><w:name w:val="Default Paragraph Font"/><w:uiPriority w:val="1"/><w:semiHidden/></w:style>
"#,
        fonts = run_fonts(&sheet.body_font),
        size = pt_to_half_points(sheet.body_size_pt),
    );

    for style in sheet.paragraph_styles() {
        push_paragraph_style(&mut xml, style);
    }

    for (id, name, num_id) in [
        (LIST_BULLET_STYLE, "List Bullet", BULLET_NUM_ID),
        (LIST_NUMBER_STYLE, "List Number", DECIMAL_NUM_ID),
    ] {
        let _ = writeln!(
            xml,
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{name}"/><w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:numId w:val="{num_id}"/></w:numPr><w:contextualSpacing/></w:pPr></w:style>"#
        );
    }

    xml.push_str("</w:styles>");
    xml
}

fn push_paragraph_style(xml: &mut String, style: &StyleDefinition) {
    let _ = write!(
        xml,
        r#"<w:style w:type="paragraph" w:customStyle="1" w:styleId="{}"><w:name w:val="{}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr>"#,
        xml_escape(&style.id),
        xml_escape(&style.name)
    );
    let _ = write!(
        xml,
        r#"<w:spacing w:before="{}" w:after="{}"/>"#,
        pt_to_twips(style.space_before_pt),
        pt_to_twips(style.space_after_pt)
    );
    if style.left_indent_in > 0.0 {
        let _ = write!(xml, r#"<w:ind w:left="{}"/>"#, inches_to_twips(style.left_indent_in));
    }
    let _ = write!(xml, r#"<w:jc w:val="{}"/></w:pPr><w:rPr>"#, style.alignment.as_ooxml());
    xml.push_str(&run_fonts(&style.font));
    if style.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    let size = pt_to_half_points(style.size_pt);
    let _ = writeln!(
        xml,
        r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr></w:style>"#
    );
}

/// `w:rFonts` naming one font for every script slot.
pub(crate) fn run_fonts(font: &str) -> String {
    let font = xml_escape(font);
    format!(r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/>"#)
}

/// The numbering part: one bullet list and one decimal list definition.
pub(crate) fn numbering() -> String {
    format!(
        r#"{XML_DECLARATION}
<w:numbering xmlns:w="{NS_MAIN}">
<w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum>
<w:abstractNum w:abstractNumId="1"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum>
<w:num w:numId="{BULLET_NUM_ID}"><w:abstractNumId w:val="0"/></w:num>
<w:num w:numId="{DECIMAL_NUM_ID}"><w:abstractNumId w:val="1"/></w:num>
</w:numbering>"#
    )
}

/// Core properties: title, creator and timestamps.
pub(crate) fn core_properties(title: Option<&str>, creator: &str, created: DateTime<Utc>) -> String {
    let stamp = created.format("%Y-%m-%dT%H:%M:%SZ");
    let title = title
        .map(|t| format!("<dc:title>{}</dc:title>", xml_escape(t)))
        .unwrap_or_default();
    format!(
        r#"{XML_DECLARATION}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">{title}<dc:creator>{creator}</dc:creator><dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified></cp:coreProperties>"#,
        creator = xml_escape(creator),
    )
}

pub(crate) fn app_properties(application: &str) -> String {
    format!(
        r#"{XML_DECLARATION}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>{}</Application></Properties>"#,
        xml_escape(application)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(xml_escape("plain"), "plain");
        assert_eq!(xml_escape("bell\u{7}"), "bell");
    }

    #[test]
    fn test_styles_contain_custom_definitions() {
        let xml = styles(&StyleSheet::default());
        assert!(xml.contains(r#"w:styleId="CustomTitle""#));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(r#"w:styleId="CustomCode""#));
        assert!(xml.contains(r#"<w:ind w:left="720"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="48"/>"#));
        assert!(xml.contains(r#"w:styleId="ListBullet""#));
    }

    #[test]
    fn test_document_rels_numbering() {
        let xml = document_rels(&["https://a.example/?x=1&y=2".to_string()]);
        assert!(xml.contains(r#"Id="rId3""#));
        assert!(xml.contains("x=1&amp;y=2"));
        assert!(xml.contains(r#"TargetMode="External""#));
    }

    #[test]
    fn test_core_properties_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        let xml = core_properties(Some("Guide"), "mdword", at);
        assert!(xml.contains("<dc:title>Guide</dc:title>"));
        assert!(xml.contains("2024-03-05T14:07:00Z"));
    }
}
