use super::*;

#[test]
fn owner_count_label_pluralizes() {
    assert_eq!(owner_count_label(0), "0 registered owners");
    assert_eq!(owner_count_label(1), "1 registered owner");
    assert_eq!(owner_count_label(12), "12 registered owners");
}
