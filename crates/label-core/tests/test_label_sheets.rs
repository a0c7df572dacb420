use label_core::{GenerateOutcome, LabelConfig, LabelSession, ProductType};

/// Theory rows: id 0, name 2, address 3, phones 8 and 9
fn theory_csv(rows: usize) -> String {
    (1..=rows)
        .map(|i| {
            format!(
                "S-{i},2024,Student {i},\"No {i}, Temple Road, Maharagama, Colombo\",a,b,c,d,07700000{i:02},\n"
            )
        })
        .collect()
}

fn page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes)
        .expect("Generated PDF should parse")
        .get_pages()
        .len()
}

#[test]
fn test_seventeen_labels_need_two_pages() {
    let mut session = LabelSession::default();
    session.upload("students.csv", theory_csv(20).as_bytes()).unwrap();
    session.select_ids((1..=17).map(|i| format!("S-{}", i)).collect());

    let document = session
        .generate()
        .unwrap()
        .into_document()
        .expect("Selection should produce a document");

    assert_eq!(document.label_count, 17);
    assert_eq!(document.page_count, 2);
    assert_eq!(page_count(&document.bytes), 2);
}

#[test]
fn test_full_page_stays_on_one_page() {
    let mut session = LabelSession::default();
    session.upload("students.csv", theory_csv(16).as_bytes()).unwrap();
    session.select_ids(session.available_ids().unwrap());

    let document = session.generate().unwrap().into_document().unwrap();
    assert_eq!(page_count(&document.bytes), 1);
}

#[test]
fn test_id_list_upload_drives_selection() {
    let mut session = LabelSession::default();
    session.upload("students.csv", theory_csv(5).as_bytes()).unwrap();
    session
        .select_ids_from_text("ids.txt", "\u{feff}S-3\r\nS-1\r\n\r\nS-99\r\n".as_bytes())
        .unwrap();

    let previews = session.label_previews().unwrap();
    let names: Vec<&str> = previews.iter().filter_map(|l| l.heading()).collect();
    assert_eq!(names, vec!["Student 3", "Student 1"]);

    let outcome = session.generate().unwrap();
    assert_eq!(outcome.message(), "Found 2 matching records.");
}

#[test]
fn test_unknown_ids_give_no_document() {
    let mut session = LabelSession::default();
    session.upload("students.csv", theory_csv(3).as_bytes()).unwrap();
    session.select_ids(vec!["S-404".to_string()]);

    let outcome = session.generate().unwrap();
    assert!(matches!(outcome, GenerateOutcome::NoMatches));
    assert!(outcome.document().is_none());
}

#[test]
fn test_unsupported_upload_reports_file() {
    let mut session = LabelSession::default();
    let err = session.upload("students.pdf", b"%PDF-1.4").unwrap_err();
    assert!(err.to_string().starts_with("Error reading file students.pdf"));
    assert!(session.table().is_none());
}

#[test]
fn test_paper_labels_keep_accented_text() {
    let mut session = LabelSession::with_product_type(LabelConfig::default(), ProductType::Paper);
    session
        .upload(
            "paper.csv",
            "7,x,Café Books,\"D’Silva Mawatha, Négombo\",a,b,c,0771111111,0112222222\n42,x,Stationers,Galle,a,b,c,,\n"
                .as_bytes(),
        )
        .unwrap();
    session.select_ids(vec!["7".to_string()]);

    let document = session.generate().unwrap().into_document().unwrap();
    let text = lopdf::Document::load_mem(&document.bytes)
        .unwrap()
        .extract_text(&[1])
        .unwrap();

    assert!(text.contains("Café Books"), "extracted: {:?}", text);
    assert!(text.contains("D’Silva Mawatha, Négombo"), "extracted: {:?}", text);
    assert!(text.contains("P - 0007"), "extracted: {:?}", text);
    assert!(!text.contains("Stationers"));
}
