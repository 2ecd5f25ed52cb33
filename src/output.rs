//! Output path derivation.

/// Derive the output text file path.
///
/// An explicit path wins. Otherwise the input path's `.pdf` or `.PDF`
/// suffix is replaced with `.txt`; any other name gets `.txt` appended
/// unchanged. Only those two exact spellings count, and only when the
/// path is longer than the suffix itself.
pub fn resolve_output_path(input: &str, explicit: Option<&str>) -> String {
    if let Some(path) = explicit {
        return path.to_string();
    }
    let stem = if input.len() > 4 && (input.ends_with(".pdf") || input.ends_with(".PDF")) {
        &input[..input.len() - 4]
    } else {
        input
    };
    format!("{}.txt", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(
            resolve_output_path("report.pdf", Some("elsewhere.txt")),
            "elsewhere.txt"
        );
    }

    #[test]
    fn test_pdf_suffix_is_replaced() {
        assert_eq!(resolve_output_path("report.pdf", None), "report.txt");
        assert_eq!(resolve_output_path("report.PDF", None), "report.txt");
    }

    #[test]
    fn test_mixed_case_suffix_is_kept() {
        assert_eq!(resolve_output_path("report.Pdf", None), "report.Pdf.txt");
        assert_eq!(resolve_output_path("report.pDF", None), "report.pDF.txt");
    }

    #[test]
    fn test_other_names_get_txt_appended() {
        assert_eq!(resolve_output_path("report", None), "report.txt");
        assert_eq!(resolve_output_path("report.ps", None), "report.ps.txt");
    }

    #[test]
    fn test_bare_suffix_is_not_stripped() {
        assert_eq!(resolve_output_path(".pdf", None), ".pdf.txt");
        assert_eq!(resolve_output_path(".PDF", None), ".PDF.txt");
    }

    #[test]
    fn test_directories_are_preserved() {
        assert_eq!(
            resolve_output_path("/tmp/docs/report.pdf", None),
            "/tmp/docs/report.txt"
        );
    }

    #[test]
    fn test_non_ascii_path() {
        assert_eq!(resolve_output_path("отчёт.pdf", None), "отчёт.txt");
    }
}
