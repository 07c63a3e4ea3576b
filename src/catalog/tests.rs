use super::*;
use std::io::Write;

fn category(name: &str, keywords: &[&str]) -> Category {
    Category::new(name, keywords.iter().copied(), format!("{name} description"))
        .expect("valid category")
}

#[test]
fn test_builtin_catalog_shape() {
    let catalog = CategoryCatalog::builtin();

    assert_eq!(catalog.len(), 8);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.default_category(), "Ocean Blue");
    assert_eq!(
        catalog.names().collect::<Vec<_>>(),
        vec![
            "Ruby Red",
            "Ocean Blue",
            "Sunlight Yellow",
            "Forest Green",
            "Amber Gold",
            "Lavender Purple",
            "Coral Pink",
            "Earth Brown",
        ]
    );
}

#[test]
fn test_builtin_catalog_passes_validation() {
    let builtin = CategoryCatalog::builtin();
    let rebuilt = CategoryCatalog::new(
        builtin.categories().to_vec(),
        Some(builtin.default_category().to_string()),
    )
    .expect("builtin catalog must satisfy its own invariants");

    assert_eq!(rebuilt.categories(), builtin.categories());
}

#[test]
fn test_sorted_names_are_ascending() {
    let catalog = CategoryCatalog::builtin();

    assert_eq!(
        catalog.sorted_names(),
        vec![
            "Amber Gold",
            "Coral Pink",
            "Earth Brown",
            "Forest Green",
            "Lavender Purple",
            "Ocean Blue",
            "Ruby Red",
            "Sunlight Yellow",
        ]
    );
    assert_eq!(catalog.sorted_indices()[0], 4);
}

#[test]
fn test_lookup_and_description() {
    let catalog = CategoryCatalog::builtin();

    assert_eq!(catalog.description("Ruby Red"), Some("The Passionate Driver"));
    assert_eq!(catalog.position("Earth Brown"), Some(7));
    assert!(catalog.contains("Coral Pink"));
    assert!(catalog.get("Neon Green").is_none());
}

#[test]
fn test_representative_text_joins_keywords() {
    let c = category("Test", &["alpha", "beta", "gamma"]);
    assert_eq!(c.representative_text(), "alpha beta gamma");
}

#[test]
fn test_category_rejects_no_keywords() {
    let err = Category::new("Empty", Vec::<String>::new(), "").unwrap_err();
    assert!(matches!(err, CatalogError::NoKeywords { .. }));
}

#[test]
fn test_category_rejects_uppercase_keyword() {
    let err = Category::new("Loud", ["Shout"], "").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidKeyword {
            reason: "keyword is not lowercase",
            ..
        }
    ));
}

#[test]
fn test_category_rejects_padded_keyword() {
    let err = Category::new("Padded", [" calm"], "").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidKeyword { .. }));
}

#[test]
fn test_category_rejects_duplicate_keyword() {
    let err = Category::new("Twice", ["calm", "calm"], "").unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateKeyword { .. }));
}

#[test]
fn test_category_rejects_empty_name() {
    let err = Category::new("  ", ["calm"], "").unwrap_err();
    assert!(matches!(err, CatalogError::EmptyName));
}

#[test]
fn test_catalog_rejects_empty() {
    let err = CategoryCatalog::new(vec![], None).unwrap_err();
    assert!(matches!(err, CatalogError::Empty));
}

#[test]
fn test_catalog_rejects_duplicate_names() {
    let err = CategoryCatalog::new(
        vec![category("Same", &["a"]), category("Same", &["b"])],
        None,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCategory { .. }));
}

#[test]
fn test_catalog_default_falls_back_to_first() {
    let catalog =
        CategoryCatalog::new(vec![category("First", &["a"]), category("Second", &["b"])], None)
            .unwrap();
    assert_eq!(catalog.default_category(), "First");
}

#[test]
fn test_catalog_rejects_unknown_default() {
    let err = CategoryCatalog::new(vec![category("Only", &["a"])], Some("Missing".to_string()))
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnknownDefault { name } if name == "Missing"));
}

#[test]
fn test_from_json_str() {
    let json = r#"{
        "default_category": "Calm",
        "categories": [
            {"name": "Bold", "keywords": ["lead", "win"], "description": "Leader"},
            {"name": "Calm", "keywords": ["peace"], "description": "Quiet"}
        ]
    }"#;

    let catalog = CategoryCatalog::from_json_str(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.default_category(), "Calm");
    assert_eq!(catalog.get("Bold").unwrap().keywords(), ["lead", "win"]);
}

#[test]
fn test_from_json_str_validates() {
    let json = r#"{"categories": [{"name": "Bad", "keywords": ["UPPER"], "description": ""}]}"#;
    let err = CategoryCatalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidKeyword { .. }));
}

#[test]
fn test_from_json_str_parse_error() {
    let err = CategoryCatalog::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"categories": [{{"name": "Solo", "keywords": ["alone"], "description": "d"}}]}}"#
    )
    .unwrap();

    let catalog = CategoryCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.default_category(), "Solo");
}

#[test]
fn test_load_missing_file() {
    let err = CategoryCatalog::load("/definitely/not/here/catalog.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_catalog_serializes_in_declaration_order() {
    let catalog = CategoryCatalog::builtin();
    let json = serde_json::to_value(&catalog).unwrap();

    assert_eq!(json["default_category"], "Ocean Blue");
    assert_eq!(json["categories"][0]["name"], "Ruby Red");
    assert!(json.get("sorted_indices").is_none());

    let reparsed = CategoryCatalog::from_json_str(&json.to_string()).unwrap();
    assert_eq!(reparsed.categories(), catalog.categories());
}
