use lopdf::Document as PdfDocument;

use crate::app::error::Result;

/// Extract the text of every page of a PDF, in document order, with
/// whitespace runs collapsed to single spaces.
///
/// Extraction fidelity is best-effort and format-dependent; a page the
/// library cannot decode fails the whole call.
pub fn extract_pages(path: &str) -> Result<Vec<String>> {
    let doc = PdfDocument::load(path)?;
    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let mut pages = Vec::with_capacity(page_numbers.len());
    for page_number in page_numbers {
        let raw = doc.extract_text(&[page_number])?;
        pages.push(collapse_whitespace(&raw));
    }
    Ok(pages)
}

/// Collapse every run of whitespace (spaces, newlines, tabs) to a single
/// space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("Hello   World"), "Hello World");
        assert_eq!(collapse_whitespace("  a \n b\t\tc \n"), "a b c");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    /// Build a PDF where each element of `texts` becomes one page.
    fn build_pdf(texts: &[&str]) -> PdfDocument {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_extracts_pages_in_order_with_collapsed_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two_pages.pdf");
        let mut doc = build_pdf(&["Hello   World", "Second Page"]);
        doc.save(&path).unwrap();

        let pages = extract_pages(path.to_str().unwrap()).unwrap();
        assert_eq!(pages, vec!["Hello World".to_string(), "Second Page".to_string()]);

        // Pages are inserted back-to-back with no separator.
        assert_eq!(pages.concat(), "Hello WorldSecond Page");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(extract_pages("/no/such/file.pdf").is_err());
    }
}
