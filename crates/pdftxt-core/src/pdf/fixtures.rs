//! In-process PDF builders for tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per entry.
///
/// Each line of a `Some` entry becomes its own text object. `None` gives a
/// page with an empty content stream, like a scan without a text layer.
pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
    save(build_document(pages))
}

/// Build a PDF like [`pdf_with_pages`] whose trailer declares RC4 (V1/R2)
/// encryption with keys no password matches.
pub fn encrypted_pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
    let mut doc = build_document(pages);
    doc.trailer.set(
        "Encrypt",
        dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "Length" => 40,
            "O" => Object::string_literal(vec![0x4fu8; 32]),
            "U" => Object::string_literal(vec![0x55u8; 32]),
            "P" => -4,
        },
    );
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x01u8; 16]),
            Object::string_literal(vec![0x01u8; 16]),
        ],
    );
    save(doc)
}

fn build_document(pages: &[Option<&str>]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for text in pages.iter().copied() {
        let content = page_content(text.unwrap_or_default());
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode fixture content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
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
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut data = Vec::new();
    doc.save_to(&mut data).expect("serialize fixture PDF");
    data
}

fn page_content(text: &str) -> Content {
    let mut operations = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let y = 720 - 16 * i as i64;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new("Td", vec![72.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_page_count() {
        let data = pdf_with_pages(&[Some("a"), None, Some("c")]);
        let doc = Document::load_mem(&data).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_encrypted_fixture_declares_encryption() {
        let data = encrypted_pdf_with_pages(&[Some("secret")]);
        let text = String::from_utf8_lossy(&data);
        assert!(text.contains("/Encrypt"));
        assert!(text.contains("/Standard"));
    }
}
