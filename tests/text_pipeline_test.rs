//! Integration tests for the RTF and formatted text outputs.

use std::fs;

use chrono::{FixedOffset, TimeZone};
use mdword::render::{
    strip_markdown, to_rtf, to_text_at, word_instructions, RtfOptions, TextOptions,
};

const GUIDE: &str = "\
# Deploy

## Bước 1

Chạy `npm ci` rồi **build**.

```bash
npm run build
```


### Ghi chú

*Lưu ý* quan trọng.
";

#[test]
fn test_formatted_text_banner_and_body() {
    let at = FixedOffset::east_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 12, 1, 8, 30, 0)
        .unwrap();
    let text = to_text_at(GUIDE, &TextOptions::default(), &at);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "=".repeat(80));
    assert_eq!(lines[1].trim(), "🚀 HƯỚNG DẪN DEPLOY THEME EDITOR LÊN VPS");
    assert_eq!(lines[1].chars().count(), 80);
    assert_eq!(lines[2], "=".repeat(80));
    assert_eq!(lines[4], "📅 Tạo ngày: 01/12/2024 08:30");

    let body = lines[6..].join("\n");
    assert!(body.starts_with("Deploy\n\nBước 1"));
    assert!(body.contains("Chạy npm ci rồi build."));
    assert!(body.contains("npm run build"));
    assert!(body.contains("Lưu ý quan trọng."));
    assert!(!body.contains('`'));
    assert!(!body.contains('#'));
    assert!(!body.contains('*'));
    assert!(!body.contains("\n\n\n"));
}

#[test]
fn test_stripping_is_idempotent() {
    let once = strip_markdown(GUIDE);
    assert_eq!(strip_markdown(&once), once);
}

#[test]
fn test_rtf_document() {
    let rtf = to_rtf(GUIDE, &RtfOptions::default());

    assert!(rtf.starts_with(r"{\rtf1\ansi\deff0 {\fonttbl {\f0 Times New Roman;}"));
    assert!(rtf.ends_with('}'));
    assert!(rtf.contains(r"\fs36\b Deploy\b0\fs24\par"));
    assert!(rtf.contains(r"\f1\fs20 npm run build \f0\fs24\par"));
    assert!(rtf.contains(r"\f1 npm ci \f0"));
    assert!(rtf.contains(r"\b build \b0"));
    assert!(rtf.is_ascii());
}

#[test]
fn test_rtf_without_escaping_keeps_unicode() {
    let rtf = to_rtf(GUIDE, &RtfOptions::default().with_escaping(false));
    assert!(rtf.contains("Bước 1"));
}

#[test]
fn test_bundle_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("GUIDE.md");
    fs::write(&input, GUIDE).unwrap();

    let outputs = mdword::to_text_bundle(&input).unwrap();
    assert_eq!(outputs.len(), 3);

    let txt = fs::read_to_string(dir.path().join("GUIDE_FORMATTED.txt")).unwrap();
    assert!(txt.contains("📅 Tạo ngày:"));

    let instructions =
        fs::read_to_string(dir.path().join("WORD_CREATION_INSTRUCTIONS.txt")).unwrap();
    assert_eq!(instructions, word_instructions("GUIDE_FORMATTED.txt"));

    let rtf = fs::read_to_string(dir.path().join("GUIDE.rtf")).unwrap();
    assert!(rtf.starts_with(r"{\rtf1"));
}

#[test]
fn test_bundle_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let result = mdword::to_text_bundle(dir.path().join("missing.md"));

    assert!(matches!(result, Err(mdword::Error::InputNotFound(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
