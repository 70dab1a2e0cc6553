use super::*;

fn service(id: i64, name: &str, price: f64) -> Service {
    Service { id, name: name.to_owned(), price }
}

#[test]
fn toggle_adds_then_removes() {
    let mut selected = vec![];
    toggle_selection(&mut selected, 3);
    toggle_selection(&mut selected, 1);
    assert_eq!(selected, vec![3, 1]);
    toggle_selection(&mut selected, 3);
    assert_eq!(selected, vec![1]);
}

#[test]
fn summary_uses_placeholder_when_empty() {
    assert_eq!(summary_text(0, "Choose services..."), "Choose services...");
    assert_eq!(summary_text(2, "Choose services..."), "2 selected");
}

#[test]
fn selected_options_follow_selection_order_and_skip_unknown() {
    let options = vec![service(1, "Checkup", 45.0), service(2, "Vaccine", 30.0)];
    let picked = selected_options(&options, &[2, 9, 1]);
    assert_eq!(picked.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);
}
