use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_valid_package_names() {
    assert_eq!(validate_package_name("firefox").unwrap(), "firefox");
    assert_eq!(validate_package_name("  python3.12 ").unwrap(), "python3.12");
    assert!(validate_package_name("org.gimp.GIMP").is_ok());
    assert!(validate_package_name("libc6:i386").is_ok());
    assert!(validate_package_name("vim=2:9.0.1378-2").is_ok());
}

#[test]
fn test_blank_names_rejected() {
    assert!(validate_package_name("").is_err());
    assert!(validate_package_name("   ").is_err());
    assert!(validate_package_name("\t\n").is_err());
}

#[test]
fn test_nul_byte_rejected() {
    assert!(validate_package_name("foo\0bar").is_err());
}

#[test]
fn test_empty_list_rejected() {
    let err = validate_package_names(&[]).unwrap_err();
    assert!(err.to_string().contains("No packages specified"));
}

#[test]
fn test_one_blank_entry_rejects_list() {
    assert!(validate_package_names(&names(&["vim", " "])).is_err());
    assert_eq!(
        validate_package_names(&names(&[" vim", "git "])).unwrap(),
        vec!["vim", "git"]
    );
}
