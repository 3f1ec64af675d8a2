//! Table integration tests.

mod common;

use std::collections::HashSet;

use deckhand::{
    Card, DECK_SIZE, DealError, Deck, DeckError, DrawError, Intent, IntentError, PickError,
    PickPolicy, Picked, Rank, Suit, Table, TableOptions, TossError, standard_deck,
};

use common::sorted;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const ACE_SPADES: Card = card(Suit::Spades, Rank::Ace);
const TEN_HEARTS: Card = card(Suit::Hearts, Rank::Ten);
const QUEEN_CLUBS: Card = card(Suit::Clubs, Rank::Queen);
const TWO_DIAMONDS: Card = card(Suit::Diamonds, Rank::Two);

fn select_options() -> TableOptions {
    TableOptions::default().with_pick_policy(PickPolicy::Select)
}

fn table_with(options: TableOptions, deck: &[Card], hand: &[Card]) -> Table {
    Table::with_cards(options, 1, deck.to_vec(), hand.to_vec()).unwrap()
}

#[test]
fn standard_deck_has_unique_cards() {
    let cards = standard_deck();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 52);

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(cards[0], ACE_SPADES);
    assert_eq!(cards[51], card(Suit::Clubs, Rank::King));
}

#[test]
fn card_display_uses_labels_and_symbols() {
    assert_eq!(ACE_SPADES.to_string(), "A♠");
    assert_eq!(TEN_HEARTS.to_string(), "10♥");
    assert_eq!(QUEEN_CLUBS.to_string(), "Q♣");
    assert_eq!(TWO_DIAMONDS.to_string(), "2♦");
}

#[test]
fn deck_rejects_duplicate_cards() {
    let err = Deck::from_cards(vec![ACE_SPADES, TEN_HEARTS, ACE_SPADES]).unwrap_err();
    assert_eq!(err, DeckError::DuplicateCard(ACE_SPADES));

    let err = Table::with_cards(
        TableOptions::default(),
        1,
        vec![QUEEN_CLUBS, QUEEN_CLUBS],
        Vec::new(),
    )
    .unwrap_err();
    assert_eq!(err, DeckError::DuplicateCard(QUEEN_CLUBS));
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default();
    assert_eq!(options.pick_policy, PickPolicy::Swap);
    assert_eq!(options.deal_sizes, vec![5, 7]);

    let options = options
        .with_pick_policy(PickPolicy::Select)
        .with_deal_sizes(vec![3]);
    assert_eq!(options.pick_policy, PickPolicy::Select);
    assert_eq!(options.deal_sizes, vec![3]);
}

#[test]
fn new_table_starts_full() {
    let table = Table::new(TableOptions::default(), 42);

    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert_eq!(*table.deck(), Deck::full());
    assert!(table.hand().is_empty());
    assert_eq!(table.selection(), None);
}

#[test]
fn draw_moves_one_card_from_deck_to_hand() {
    let mut table = Table::new(TableOptions::default(), 42);

    let drawn = table.draw().unwrap();

    assert_eq!(table.cards_remaining(), 51);
    assert_eq!(table.hand().cards(), &[drawn]);
    assert!(!table.deck().contains(&drawn));
}

#[test]
fn draw_clears_selection() {
    let mut table = table_with(TableOptions::default(), &[ACE_SPADES], &[TEN_HEARTS]);

    table.pick(TEN_HEARTS).unwrap();
    assert_eq!(table.selection(), Some(TEN_HEARTS));

    assert_eq!(table.draw().unwrap(), ACE_SPADES);
    assert_eq!(table.hand().cards(), &[TEN_HEARTS, ACE_SPADES]);
    assert_eq!(table.selection(), None);
}

#[test]
fn draw_from_empty_deck_is_rejected() {
    let mut table = table_with(TableOptions::default(), &[], &[TEN_HEARTS]);
    table.pick(TEN_HEARTS).unwrap();

    assert_eq!(table.draw().unwrap_err(), DrawError::EmptyDeck);
    assert_eq!(table.hand().cards(), &[TEN_HEARTS]);
    assert_eq!(table.selection(), Some(TEN_HEARTS));
}

#[test]
fn deal_five_from_fresh_deck() {
    let mut table = Table::new(TableOptions::default(), 7);

    let hand = table.deal(5).unwrap().to_vec();

    assert_eq!(hand.len(), 5);
    assert_eq!(table.cards_remaining(), 47);

    let unique: HashSet<Card> = hand.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    assert!(hand.iter().all(|card| !table.deck().contains(card)));
}

#[test]
fn deal_replaces_hand_without_returning_cards() {
    let mut table = Table::new(TableOptions::default(), 11);
    for _ in 0..3 {
        table.draw().unwrap();
    }
    let previous = table.hand().cards().to_vec();

    table.deal(7).unwrap();

    assert_eq!(table.hand().len(), 7);
    assert_eq!(table.cards_remaining(), DECK_SIZE - 3 - 7);
    assert!(previous.iter().all(|card| !table.deck().contains(card)));
}

#[test]
fn deal_with_too_few_cards_is_rejected() {
    let mut table = table_with(
        TableOptions::default(),
        &[ACE_SPADES, TEN_HEARTS, QUEEN_CLUBS],
        &[TWO_DIAMONDS],
    );
    table.pick(TWO_DIAMONDS).unwrap();
    let before = table.clone();

    assert_eq!(
        table.deal(7).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 7,
            remaining: 3,
        }
    );

    assert_eq!(table.deck(), before.deck());
    assert_eq!(table.hand(), before.hand());
    assert_eq!(table.selection(), Some(TWO_DIAMONDS));
}

#[test]
fn deal_all_remaining_cards_empties_deck() {
    let deck = [ACE_SPADES, TEN_HEARTS, QUEEN_CLUBS];
    let mut table = table_with(TableOptions::default(), &deck, &[]);

    let hand = table.deal(3).unwrap().to_vec();

    assert_eq!(sorted(&hand), sorted(&deck));
    assert!(table.deck().is_empty());
    assert!(!table.view().can_draw);
}

#[test]
fn reset_restores_initial_state() {
    let mut table = Table::new(TableOptions::default(), 3);
    table.deal(7).unwrap();
    table.add_wildcard();
    table.pick_at(0).unwrap();

    table.reset();

    assert_eq!(*table.deck(), Deck::full());
    assert!(table.hand().is_empty());
    assert_eq!(table.selection(), None);
}

#[test]
fn select_policy_toggles_and_replaces() {
    let hand = [ACE_SPADES, TEN_HEARTS, QUEEN_CLUBS];
    let mut table = table_with(select_options(), &[], &hand);

    assert_eq!(table.pick(ACE_SPADES).unwrap(), Picked::Selected(ACE_SPADES));
    assert_eq!(table.pick(TEN_HEARTS).unwrap(), Picked::Selected(TEN_HEARTS));
    assert_eq!(table.selection(), Some(TEN_HEARTS));
    assert_eq!(table.hand().cards(), &hand);

    assert_eq!(table.pick(TEN_HEARTS).unwrap(), Picked::Cleared);
    assert_eq!(table.selection(), None);
}

#[test]
fn swap_policy_exchanges_positions() {
    let mut table = table_with(
        TableOptions::default(),
        &[],
        &[ACE_SPADES, TEN_HEARTS, QUEEN_CLUBS],
    );

    assert_eq!(table.pick(ACE_SPADES).unwrap(), Picked::Selected(ACE_SPADES));
    assert_eq!(
        table.pick(QUEEN_CLUBS).unwrap(),
        Picked::Swapped { from: 0, to: 2 }
    );

    assert_eq!(table.hand().cards(), &[QUEEN_CLUBS, TEN_HEARTS, ACE_SPADES]);
    assert_eq!(table.selection(), None);
}

#[test]
fn swap_policy_toggles_same_card() {
    let mut table = table_with(TableOptions::default(), &[], &[ACE_SPADES, TEN_HEARTS]);

    table.pick(TEN_HEARTS).unwrap();
    assert_eq!(table.pick(TEN_HEARTS).unwrap(), Picked::Cleared);
    assert_eq!(table.hand().cards(), &[ACE_SPADES, TEN_HEARTS]);
}

#[test]
fn swap_with_duplicates_moves_first_match() {
    let mut table = table_with(
        TableOptions::default(),
        &[],
        &[ACE_SPADES, TEN_HEARTS, ACE_SPADES, QUEEN_CLUBS],
    );

    table.pick(QUEEN_CLUBS).unwrap();
    assert_eq!(
        table.pick_at(2).unwrap(),
        Picked::Swapped { from: 3, to: 0 }
    );

    assert_eq!(
        table.hand().cards(),
        &[QUEEN_CLUBS, TEN_HEARTS, ACE_SPADES, ACE_SPADES]
    );
}

#[test]
fn pick_rejects_cards_not_in_hand() {
    let mut table = table_with(TableOptions::default(), &[QUEEN_CLUBS], &[ACE_SPADES]);
    table.pick(ACE_SPADES).unwrap();

    assert_eq!(table.pick(QUEEN_CLUBS).unwrap_err(), PickError::NotInHand);
    assert_eq!(table.pick_at(1).unwrap_err(), PickError::OutOfRange);
    assert_eq!(table.selection(), Some(ACE_SPADES));
}

#[test]
fn toss_removes_one_matching_card() {
    let mut table = table_with(
        TableOptions::default(),
        &[QUEEN_CLUBS],
        &[ACE_SPADES, TEN_HEARTS, ACE_SPADES],
    );

    table.pick_at(2).unwrap();
    assert_eq!(table.toss().unwrap(), ACE_SPADES);

    assert_eq!(table.hand().cards(), &[TEN_HEARTS, ACE_SPADES]);
    assert_eq!(table.deck().cards(), &[QUEEN_CLUBS]);
    assert_eq!(table.selection(), None);
}

#[test]
fn toss_without_selection_is_rejected() {
    let mut table = Table::new(TableOptions::default(), 5);
    table.deal(5).unwrap();
    let before = table.clone();

    assert_eq!(table.toss().unwrap_err(), TossError::NoSelection);
    assert_eq!(table.hand(), before.hand());
    assert_eq!(table.deck(), before.deck());
}

#[test]
fn wildcard_grows_hand_only() {
    let mut table = Table::new(TableOptions::default(), 9);
    table.draw().unwrap();
    table.draw().unwrap();
    table.pick_at(0).unwrap();
    let selection = table.selection();
    let deck = table.deck().clone();

    let wildcard = table.add_wildcard();

    assert_eq!(table.hand().len(), 3);
    assert_eq!(table.hand().get(2), Some(wildcard));
    assert_eq!(*table.deck(), deck);
    assert_eq!(table.selection(), selection);
}

#[test]
fn wildcard_may_duplicate_hand_cards() {
    let mut table = table_with(TableOptions::default(), &[], &[]);

    for _ in 0..60 {
        table.add_wildcard();
    }

    let unique: HashSet<Card> = table.hand().cards().iter().copied().collect();
    assert_eq!(table.hand().len(), 60);
    assert!(unique.len() < 60);
    assert!(table.deck().is_empty());
}

#[test]
fn regroup_preserves_cards_and_selection() {
    let mut table = Table::new(select_options(), 21);
    table.deal(7).unwrap();
    table.add_wildcard();
    table.pick_at(3).unwrap();
    let selection = table.selection();
    let before = sorted(table.hand().cards());
    let deck = table.deck().clone();

    table.regroup();

    assert_eq!(sorted(table.hand().cards()), before);
    assert_eq!(table.selection(), selection);
    assert_eq!(*table.deck(), deck);
}

#[test]
fn regroup_on_empty_hand_is_harmless() {
    let mut table = Table::new(TableOptions::default(), 2);

    table.regroup();

    assert!(table.hand().is_empty());
    assert!(!table.view().can_regroup);
}

#[test]
fn apply_dispatches_intents() {
    let mut table = Table::new(TableOptions::default(), 13);

    table.apply(Intent::Deal(5)).unwrap();
    table.apply(Intent::Draw).unwrap();
    table.apply(Intent::Wildcard).unwrap();
    table.apply(Intent::PickAt(0)).unwrap();
    table.apply(Intent::Toss).unwrap();
    table.apply(Intent::Regroup).unwrap();

    assert_eq!(table.hand().len(), 6);
    assert_eq!(table.cards_remaining(), 46);

    let first = table.hand().get(0).unwrap();
    table.apply(Intent::Pick(first)).unwrap();
    assert_eq!(table.selection(), Some(first));

    table.apply(Intent::Reset).unwrap();
    assert_eq!(table.cards_remaining(), DECK_SIZE);
}

#[test]
fn apply_reports_rejections() {
    let mut table = table_with(TableOptions::default(), &[ACE_SPADES], &[]);

    assert_eq!(
        table.apply(Intent::Toss).unwrap_err(),
        IntentError::Toss(TossError::NoSelection)
    );
    assert_eq!(
        table.apply(Intent::Deal(2)).unwrap_err(),
        IntentError::Deal(DealError::NotEnoughCards {
            requested: 2,
            remaining: 1,
        })
    );
    assert_eq!(
        table.apply(Intent::PickAt(0)).unwrap_err(),
        IntentError::Pick(PickError::OutOfRange)
    );

    table.apply(Intent::Draw).unwrap();
    assert_eq!(
        table.apply(Intent::Draw).unwrap_err(),
        IntentError::Draw(DrawError::EmptyDeck)
    );
}

#[test]
fn view_reports_available_actions() {
    let table = Table::new(TableOptions::default(), 1);
    let view = table.view();

    assert_eq!(view.cards_remaining, DECK_SIZE);
    assert!(view.can_draw);
    assert!(view.deals.iter().all(|deal| deal.enabled));
    assert!(!view.can_toss);
    assert!(!view.can_regroup);
    assert!(view.hand.is_empty());

    let deck: Vec<Card> = standard_deck().into_iter().take(6).collect();
    let table = table_with(TableOptions::default(), &deck, &[]);
    let view = table.view();
    let enabled: Vec<(usize, bool)> = view
        .deals
        .iter()
        .map(|deal| (deal.size, deal.enabled))
        .collect();
    assert_eq!(enabled, vec![(5, true), (7, false)]);
}

#[test]
fn view_tags_every_matching_card() {
    let mut table = table_with(
        select_options(),
        &[],
        &[ACE_SPADES, TEN_HEARTS, ACE_SPADES],
    );
    table.pick(ACE_SPADES).unwrap();

    let view = table.view();
    let selected: Vec<bool> = view.hand.iter().map(|slot| slot.selected).collect();

    assert_eq!(selected, vec![true, false, true]);
    assert_eq!(view.selection, Some(ACE_SPADES));
    assert!(view.can_toss);
    assert!(view.can_regroup);
}

#[test]
fn same_seed_replays_identically() {
    let intents = [
        Intent::Draw,
        Intent::Deal(5),
        Intent::Wildcard,
        Intent::PickAt(1),
        Intent::PickAt(4),
        Intent::Regroup,
        Intent::Draw,
    ];

    let mut a = Table::new(TableOptions::default(), 2024);
    let mut b = Table::new(TableOptions::default(), 2024);
    for intent in intents {
        let _ = a.apply(intent);
        let _ = b.apply(intent);
    }

    assert_eq!(a.view(), b.view());
    assert_eq!(a.deck(), b.deck());
}

#[test]
fn draw_picks_different_cards_across_seeds() {
    let drawn: HashSet<Card> = (0..16)
        .map(|seed| Table::new(TableOptions::default(), seed).draw().unwrap())
        .collect();

    assert!(drawn.len() > 1, "every seed drew {drawn:?}");
}

#[test]
fn regroup_reorders_hand_for_some_seed() {
    let reordered = (0..8).any(|seed| {
        let mut table = Table::new(TableOptions::default(), seed);
        table.deal(7).unwrap();
        let before = table.hand().cards().to_vec();

        table.regroup();

        table.hand().cards() != before.as_slice()
    });

    assert!(reordered);
}

#[test]
fn wildcard_varies_suit_and_rank_across_seeds() {
    let wildcards: Vec<Card> = (0..64)
        .map(|seed| Table::new(TableOptions::default(), seed).add_wildcard())
        .collect();

    let suits: HashSet<Suit> = wildcards.iter().map(|card| card.suit).collect();
    let ranks: HashSet<Rank> = wildcards.iter().map(|card| card.rank).collect();

    assert_eq!(suits.len(), Suit::ALL.len());
    assert!(ranks.len() > 1, "every wildcard had rank {ranks:?}");
}
