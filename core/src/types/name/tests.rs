use super::*;

#[test]
fn name_normal_usage() {
    let name_str = "rifles";
    let name = Name::try_from(name_str).unwrap();
    assert_eq!(name.as_str(), name_str);
}

#[test]
fn name_trims_surrounding_whitespace() {
    let name = Name::try_from("  rifles  ").unwrap();
    assert_eq!(name.as_str(), "rifles");
}

#[test]
fn name_rejects_empty_string() {
    let result = Name::try_from("");
    assert!(result.is_err());
}

#[test]
fn name_rejects_whitespace_only_string() {
    let result = Name::try_from("   ");
    assert!(result.is_err());
}

#[test]
fn name_rejects_too_long_string() {
    let long_string = "a".repeat(MAX_NAME_LENGTH + 1);
    let result = Name::try_from(long_string.as_str());
    assert!(result.is_err());
}

#[test]
fn name_accepts_max_length_string() {
    let max_string = "a".repeat(MAX_NAME_LENGTH);
    let result = Name::try_from(max_string.as_str());
    assert!(result.is_ok());
}

#[test]
fn name_orders_like_inner_string() {
    let mut names = vec![
        Name::try_from("smgs").unwrap(),
        Name::try_from("pistols").unwrap(),
        Name::try_from("rifles").unwrap(),
    ];
    names.sort();

    let sorted: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
    assert_eq!(sorted, vec!["pistols", "rifles", "smgs"]);
}
