use lernwerk::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_and_verify_password() {
    let hashed = hash_password("secret123").unwrap();
    assert_ne!(hashed, "secret123");
    assert!(verify_password("secret123", &hashed).unwrap());
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hashed = hash_password("secret123").unwrap();
    assert!(!verify_password("wrong-password", &hashed).unwrap());
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("secret123").unwrap();
    let second = hash_password("secret123").unwrap();
    assert_ne!(first, second);
}
