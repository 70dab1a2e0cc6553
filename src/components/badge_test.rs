use super::*;

#[test]
fn badge_class_maps_status_variants() {
    assert_eq!(badge_class(BadgeVariant::Scheduled, BadgeSize::Md), "badge badge--scheduled badge--md");
    assert_eq!(badge_class(BadgeVariant::Done, BadgeSize::Sm), "badge badge--done badge--sm");
}

#[test]
fn badge_defaults() {
    assert_eq!(badge_class(BadgeVariant::default(), BadgeSize::default()), "badge badge--default badge--md");
}
