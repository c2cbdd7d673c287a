use glass_cards::{
    AnimationKind, Card, CardAdapter, CardLayout, CardScrollAdapter, MutableCardAdapter,
    Reconciliation,
};
use glass_testing::FrameDriver;

use crate::card_scroll_view::CardScrollView;

fn card(text: &str) -> Card {
    Card::new(CardLayout::Columns).text(text)
}

fn bound_view(driver: &FrameDriver, texts: &[&str]) -> CardScrollView<MutableCardAdapter<()>> {
    let mut adapter = MutableCardAdapter::new();
    adapter.seed(texts.iter().map(|text| (card(text), ())));
    let view = CardScrollView::new(driver.handle());
    view.set_adapter(adapter);
    view.activate();
    view
}

fn shown_text<A: CardScrollAdapter + 'static>(view: &CardScrollView<A>) -> Option<String> {
    view.current_view().and_then(|card| card.text)
}

fn notifications<A: CardScrollAdapter + 'static>(view: &CardScrollView<A>) -> u64 {
    view.with_adapter(|adapter| adapter.notifications())
        .unwrap_or_default()
}

#[test]
fn set_adapter_notifies_once_and_selects_first_card() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C"]);

    assert_eq!(notifications(&view), 1);
    assert_eq!(view.count(), 3);
    assert_eq!(view.selected_position(), Some(0));
    assert_eq!(shown_text(&view).as_deref(), Some("A"));
    assert!(!view.is_animating());
}

#[test]
fn insertion_notifies_at_start_and_scrolls_to_new_card() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C"]);

    view.with_adapter_mut(|adapter| {
        adapter.insert_card_without_notification(1, card("X"), ());
    });
    assert_eq!(notifications(&view), 1);

    view.animate(1, AnimationKind::Insertion);
    assert_eq!(notifications(&view), 2);
    assert_eq!(view.count(), 4);
    assert!(view.is_animating());
    assert_eq!(view.tap(), None);
    assert_eq!(
        view.with_adapter(|adapter| adapter.reconciliation()),
        Some(Reconciliation::Idle)
    );

    driver.advance_by(300);
    assert!(!view.is_animating());
    assert_eq!(view.selected_position(), Some(1));
    assert_eq!(view.scroll_position(), 1.0);
    assert_eq!(shown_text(&view).as_deref(), Some("X"));
    assert_eq!(notifications(&view), 2);
    assert_eq!(view.tap(), Some(1));
}

#[test]
fn insertion_before_selection_keeps_showing_the_same_card() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B"]);
    view.animate(1, AnimationKind::Navigation);
    driver.run_until_idle();
    assert_eq!(shown_text(&view).as_deref(), Some("B"));

    view.with_adapter_mut(|adapter| {
        adapter.insert_card_without_notification(0, card("X"), ());
    });
    view.animate(0, AnimationKind::Insertion);
    assert_eq!(view.selected_position(), Some(2));
    assert_eq!(shown_text(&view).as_deref(), Some("B"));

    driver.run_until_idle();
    assert_eq!(view.selected_position(), Some(0));
    assert_eq!(shown_text(&view).as_deref(), Some("X"));
}

#[test]
fn deletion_notifies_only_when_animation_ends() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C", "D"]);

    let removed = view
        .with_adapter_mut(|adapter| adapter.delete_card_without_notification(0))
        .expect("adapter bound");
    assert_eq!(removed.card, card("A"));

    view.animate(0, AnimationKind::Deletion);
    driver.advance_by(150);
    assert!(view.is_animating());
    assert_eq!(notifications(&view), 1);
    // The removed card stays on screen until the host re-reads the adapter.
    assert_eq!(shown_text(&view).as_deref(), Some("A"));
    let (change, progress) = view.animation_progress().expect("deletion in flight");
    assert_eq!(change.kind, AnimationKind::Deletion);
    assert!(progress > 0.0 && progress < 1.0);

    driver.advance_by(150);
    assert!(!view.is_animating());
    assert_eq!(notifications(&view), 2);
    assert_eq!(view.count(), 3);
    assert_eq!(view.selected_position(), Some(0));
    assert_eq!(shown_text(&view).as_deref(), Some("B"));
}

#[test]
fn deleting_last_card_selects_new_last_card() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C"]);
    view.animate(2, AnimationKind::Navigation);
    driver.run_until_idle();

    view.with_adapter_mut(|adapter| adapter.delete_card_without_notification(2));
    view.animate(2, AnimationKind::Deletion);
    driver.run_until_idle();

    assert_eq!(view.selected_position(), Some(1));
    assert_eq!(shown_text(&view).as_deref(), Some("B"));
}

#[test]
fn deleting_only_card_leaves_empty_view() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A"]);

    view.with_adapter_mut(|adapter| adapter.delete_card_without_notification(0));
    view.animate(0, AnimationKind::Deletion);
    driver.run_until_idle();

    assert_eq!(view.count(), 0);
    assert_eq!(view.selected_position(), None);
    assert!(view.current_view().is_none());
    assert_eq!(view.tap(), None);
}

#[test]
fn navigation_never_notifies() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C"]);

    view.animate(2, AnimationKind::Navigation);
    driver.advance_by(125);
    let midway = view.scroll_position();
    assert!(midway > 0.0 && midway < 2.0, "scroll position {midway}");
    assert_eq!(view.selected_position(), Some(0));

    driver.advance_by(125);
    assert_eq!(view.selected_position(), Some(2));
    assert_eq!(shown_text(&view).as_deref(), Some("C"));
    assert_eq!(notifications(&view), 1);
}

#[test]
fn animate_while_animating_fast_forwards_previous_change() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C", "D"]);

    view.with_adapter_mut(|adapter| adapter.delete_card_without_notification(0));
    view.animate(0, AnimationKind::Deletion);
    driver.advance_by(100);
    assert_eq!(notifications(&view), 1);

    view.animate(1, AnimationKind::Navigation);
    assert_eq!(notifications(&view), 2);
    assert_eq!(view.selected_position(), Some(0));
    assert_eq!(shown_text(&view).as_deref(), Some("B"));
    assert!(view.is_animating());

    driver.run_until_idle();
    assert_eq!(view.selected_position(), Some(1));
    assert_eq!(shown_text(&view).as_deref(), Some("C"));
}

#[test]
#[should_panic(expected = "cannot navigate to 3")]
fn navigation_past_last_card_panics() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C"]);
    view.animate(3, AnimationKind::Navigation);
}

#[test]
#[should_panic(expected = "cannot animate insertion at 2: view holds 2 cards")]
fn insertion_past_last_card_panics_on_static_adapter() {
    let driver = FrameDriver::new();
    let view = CardScrollView::new(driver.handle());
    view.set_adapter(CardAdapter::new(vec![card("A"), card("B")]));
    view.animate(2, AnimationKind::Insertion);
}

#[test]
fn insertion_of_last_card_is_accepted() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B"]);

    let position = view
        .with_adapter_mut(|adapter| adapter.append_card_without_notification(card("C"), ()))
        .expect("adapter bound");
    assert_eq!(position, 2);
    view.animate(position, AnimationKind::Insertion);
    driver.run_until_idle();

    assert_eq!(view.selected_position(), Some(2));
    assert_eq!(shown_text(&view).as_deref(), Some("C"));
}

#[test]
#[should_panic(expected = "no mutation is pending")]
fn deletion_without_mutation_panics() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B", "C"]);
    view.animate(0, AnimationKind::Deletion);
}

#[test]
fn input_is_gated_on_activation() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B"]);

    view.deactivate();
    assert_eq!(view.tap(), None);
    assert!(!view.swipe_forward());

    view.activate();
    assert_eq!(view.tap(), Some(0));
}

#[test]
fn swipes_stop_at_both_ends() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B"]);

    assert!(!view.swipe_back());
    assert!(view.swipe_forward());
    assert!(!view.swipe_forward(), "input ignored while animating");
    driver.run_until_idle();
    assert_eq!(view.selected_position(), Some(1));
    assert!(!view.swipe_forward());
    assert!(view.swipe_back());
    driver.run_until_idle();
    assert_eq!(view.selected_position(), Some(0));
}

#[test]
fn navigation_recycles_view_of_same_type() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B"]);
    let first = view.current_view().expect("bound view");

    view.animate(1, AnimationKind::Navigation);
    driver.run_until_idle();
    let second = view.current_view().expect("bound view");

    assert_eq!(second.id(), first.id());
    assert_eq!(second.bind_count(), first.bind_count() + 1);
    assert_eq!(second.text.as_deref(), Some("B"));
}

#[test]
fn views_of_different_types_are_not_mixed() {
    let driver = FrameDriver::new();
    let view = CardScrollView::new(driver.handle());
    view.set_adapter(CardAdapter::new(vec![
        Card::new(CardLayout::Text).text("text"),
        Card::new(CardLayout::Alert).text("alert"),
        Card::new(CardLayout::Text).text("text again"),
    ]));
    let text_view = view.current_view().expect("bound view");

    view.animate(1, AnimationKind::Navigation);
    driver.run_until_idle();
    let alert_view = view.current_view().expect("bound view");
    assert_ne!(alert_view.id(), text_view.id());
    assert_eq!(alert_view.layout, CardLayout::Alert);

    view.animate(2, AnimationKind::Navigation);
    driver.run_until_idle();
    let again = view.current_view().expect("bound view");
    assert_eq!(again.id(), text_view.id());
    assert_eq!(again.text.as_deref(), Some("text again"));
}

#[test]
fn replacing_adapter_cancels_animation() {
    let driver = FrameDriver::new();
    let view = bound_view(&driver, &["A", "B"]);
    view.animate(1, AnimationKind::Navigation);
    assert!(view.is_animating());

    let previous = view.set_adapter(MutableCardAdapter::new());
    assert_eq!(previous.map(|adapter| adapter.count()), Some(2));
    assert!(!view.is_animating());
    assert_eq!(view.selected_position(), None);

    driver.run_until_idle();
    assert_eq!(view.selected_position(), None);
}
