use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardLayout};
use crate::store::{CardStore, StoreError, StoreOp};

fn card(text: &str) -> Card {
    Card::new(CardLayout::Columns).text(text)
}

fn texts<A>(store: &CardStore<A>) -> Vec<String> {
    store
        .iter()
        .map(|entry| entry.card.text_value().unwrap_or_default().to_string())
        .collect()
}

fn abc() -> CardStore<u32> {
    ["A", "B", "C"]
        .iter()
        .enumerate()
        .map(|(index, text)| (card(text), index as u32))
        .collect()
}

#[test]
fn insert_shifts_later_cards_up() {
    let mut store = abc();
    store.insert_at(1, card("X"), 9).expect("insert in range");
    assert_eq!(texts(&store), vec!["A", "X", "B", "C"]);
    assert_eq!(store.card_at(1), Some(&card("X")));
    assert_eq!(store.action_at(1), Some(&9));
    assert_eq!(store.action_at(2), Some(&1));
}

#[test]
fn insert_at_len_appends() {
    let mut store = abc();
    store.insert_at(3, card("D"), 3).expect("insert at end");
    assert_eq!(texts(&store), vec!["A", "B", "C", "D"]);
}

#[test]
fn remove_shifts_later_cards_down_and_keeps_earlier() {
    let mut store = abc();
    let removed = store.remove_at(1).expect("remove in range");
    assert_eq!(removed.card, card("B"));
    assert_eq!(removed.action, 1);
    assert_eq!(texts(&store), vec!["A", "C"]);
    assert_eq!(store.action_at(1), Some(&2));
}

#[test]
fn out_of_range_remove_fails_and_leaves_store_unmodified() {
    let mut store = abc();
    let before = store.clone();
    let err = store.remove_at(5).expect_err("index past end");
    assert_eq!(
        err,
        StoreError::IndexOutOfRange {
            op: StoreOp::Remove,
            index: 5,
            len: 3
        }
    );
    assert_eq!(store, before);
    assert_eq!(texts(&store), vec!["A", "B", "C"]);
}

#[test]
fn out_of_range_insert_fails_and_leaves_store_unmodified() {
    let mut store = abc();
    let before = store.clone();
    let err = store.insert_at(4, card("X"), 0).expect_err("index past len");
    assert_eq!(err.to_string(), "cannot insert at index 4: store holds 3 cards (valid 0..=3)");
    assert_eq!(store, before);
}

#[test]
fn remove_from_empty_store_fails() {
    let mut store: CardStore<()> = CardStore::new();
    assert!(store.remove_at(0).is_err());
    assert!(store.is_empty());
}

fn churn_against_model(seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut store: CardStore<usize> = CardStore::new();
    let mut model: Vec<(String, usize)> = Vec::new();
    let mut inserts = 0usize;
    let mut removes = 0usize;

    for step in 0..500 {
        if !model.is_empty() && rng.random_range(0..3) == 0 {
            let index = rng.random_range(0..model.len());
            let entry = store.remove_at(index).expect("valid remove");
            let expected = model.remove(index);
            assert_eq!(entry.card.text_value(), Some(expected.0.as_str()));
            assert_eq!(entry.action, expected.1);
            removes += 1;
        } else {
            let index = rng.random_range(0..=model.len());
            let text = format!("card-{step}");
            store.insert_at(index, card(&text), step).expect("valid insert");
            model.insert(index, (text, step));
            inserts += 1;
        }

        assert_eq!(store.len(), inserts - removes);
        assert_eq!(store.len(), model.len());
        for (index, (text, action)) in model.iter().enumerate() {
            assert_eq!(store.card_at(index).and_then(Card::text_value), Some(text.as_str()));
            assert_eq!(store.action_at(index), Some(action));
        }
    }
}

#[test]
fn count_tracks_net_inserts_and_removes() {
    for seed in [7, 11, 2024, 0x5eed] {
        churn_against_model(seed);
    }
}

#[test]
fn position_of_finds_first_equal_card() {
    let mut store = abc();
    store.push(card("B"), 7);
    assert_eq!(store.position_of(&card("B")), Some(1));
    assert_eq!(store.position_of(&card("Z")), None);
}
