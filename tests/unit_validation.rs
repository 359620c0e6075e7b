use lernwerk::modules::audit::model::effective_retention_days;
use lernwerk::modules::courses::model::{CATEGORIES, normalize_category};
use validator::Validate;

#[test]
fn test_category_case_insensitive_normalization() {
    assert_eq!(normalize_category("mathematik").unwrap(), "Mathematik");
    assert_eq!(normalize_category("DEUTSCH").unwrap(), "Deutsch");
    assert_eq!(normalize_category("Geografie").unwrap(), "Geografie");
}

#[test]
fn test_category_rejection_names_the_value() {
    let err = normalize_category("Sport").unwrap_err();
    assert!(err.error.to_string().contains("Sport"));
}

#[test]
fn test_every_canonical_category_accepts_itself() {
    for category in CATEGORIES {
        assert_eq!(normalize_category(category).unwrap(), category);
        assert_eq!(
            normalize_category(&category.to_lowercase()).unwrap(),
            category
        );
    }
}

#[test]
fn test_retention_clamp_bounds() {
    assert_eq!(effective_retention_days(Some(-5)), 1);
    assert_eq!(effective_retention_days(Some(10000)), 365);
    assert_eq!(effective_retention_days(None), 90);
    assert_eq!(effective_retention_days(Some(42)), 42);
}

#[test]
fn test_register_dto_requires_fields() {
    use lernwerk::modules::auth::model::RegisterRequestDto;

    let dto = RegisterRequestDto {
        username: "alice".to_string(),
        name: "Alice".to_string(),
        password: "secret123".to_string(),
        email: None,
        desired_role: None,
    };
    assert!(dto.validate().is_ok());

    let empty_username = RegisterRequestDto {
        username: "".to_string(),
        name: "Alice".to_string(),
        password: "secret123".to_string(),
        email: None,
        desired_role: None,
    };
    assert!(empty_username.validate().is_err());

    let bad_email = RegisterRequestDto {
        username: "alice".to_string(),
        name: "Alice".to_string(),
        password: "secret123".to_string(),
        email: Some("not-an-email".to_string()),
        desired_role: None,
    };
    assert!(bad_email.validate().is_err());
}

#[test]
fn test_create_course_dto_deserializes_with_defaults() {
    use lernwerk::modules::courses::model::CreateCourseDto;

    let json = r#"{"title":"Brüche","description":"Einführung","category":"mathematik"}"#;
    let dto: CreateCourseDto = serde_json::from_str(json).unwrap();
    assert_eq!(dto.title, "Brüche");
    assert!(dto.tags.is_empty());
    assert!(dto.author.is_none());
    assert!(dto.progression_mode.is_none());
}
