//! Static instructions for building the DOCX by hand in Word.

/// Default file name for the instructions.
pub const INSTRUCTIONS_FILE_NAME: &str = "WORD_CREATION_INSTRUCTIONS.txt";

/// Manual Word-creation steps, referencing the formatted text file.
pub fn word_instructions(formatted_txt_name: &str) -> String {
    format!(
        r#"
📝 HƯỚNG DẪN TẠO DOCX THỦ CÔNG

1. Mở Microsoft Word
2. Tạo document mới
3. Copy nội dung từ file {formatted_txt_name}
4. Áp dụng formatting:
   - Title: Font 24pt, Bold, Center
   - Headings: Font 18pt, Bold
   - Sub-headings: Font 14pt, Bold
   - Code: Font Consolas 10pt, Background Gray
   - Normal text: Font 12pt

5. Thêm page breaks trước các section chính
6. Save as DOCX format

✅ Hoàn thành!
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_reference_text_file() {
        let text = word_instructions("VPS_DEPLOYMENT_GUIDE_FORMATTED.txt");
        assert!(text.contains("Copy nội dung từ file VPS_DEPLOYMENT_GUIDE_FORMATTED.txt"));
        assert!(text.contains("Font Consolas 10pt"));
        assert!(text.trim_end().ends_with("✅ Hoàn thành!"));
    }
}
