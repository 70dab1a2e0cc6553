use super::*;

#[test]
fn default_button_is_primary_medium() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default()), "btn btn--primary btn--md");
}

#[test]
fn button_class_covers_variants_and_sizes() {
    assert_eq!(button_class(ButtonVariant::Danger, ButtonSize::Sm), "btn btn--danger btn--sm");
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Lg), "btn btn--ghost btn--lg");
    assert_eq!(button_class(ButtonVariant::Secondary, ButtonSize::Md), "btn btn--secondary btn--md");
}

#[test]
fn block_link_class_adds_block_modifier() {
    assert_eq!(block_link_class(ButtonVariant::Secondary, ButtonSize::Lg), "btn btn--secondary btn--lg btn--block");
}
