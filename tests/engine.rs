//! Deck, scoring, and dealer policy tests.

#![expect(clippy::cast_precision_loss, reason = "card counts fit in f64")]

use std::collections::HashSet;

use bjlite::{
    BLACKJACK, Card, DECK_SIZE, DealError, DealerPolicy, DealerState, Deck, Hand, Rank, Suit,
    deal_card, generate_deck, hand_value, shuffle_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

fn card_set(cards: &[Card]) -> HashSet<Card> {
    cards.iter().copied().collect()
}

#[test]
fn generated_deck_is_full_product_in_order() {
    let deck = generate_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique = card_set(deck.cards());
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)));
        }
    }

    let cards = deck.cards();
    assert_eq!(cards[0], card(Suit::Hearts, Rank::Ace));
    assert_eq!(cards[12], card(Suit::Hearts, Rank::King));
    assert_eq!(cards[13], card(Suit::Diamonds, Rank::Ace));
    assert_eq!(cards[51], card(Suit::Spades, Rank::King));
    assert_eq!(Deck::default(), deck);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let original = generate_deck();
    let shuffled = shuffle_deck(original.clone(), &mut rng);

    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(card_set(shuffled.cards()), card_set(original.cards()));
    assert_ne!(shuffled, original);
}

#[test]
fn shuffle_is_reproducible_from_seed() {
    let a = shuffle_deck(generate_deck(), &mut ChaCha8Rng::seed_from_u64(11));
    let b = shuffle_deck(generate_deck(), &mut ChaCha8Rng::seed_from_u64(11));
    let c = shuffle_deck(generate_deck(), &mut ChaCha8Rng::seed_from_u64(12));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn shuffle_degenerate_decks_unchanged() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let empty = shuffle_deck(Deck::from(Vec::new()), &mut rng);
    assert!(empty.is_empty());

    let single = vec![card(Suit::Clubs, Rank::Seven)];
    let shuffled = shuffle_deck(Deck::from(single.clone()), &mut rng);
    assert_eq!(shuffled.cards(), single.as_slice());
}

#[test]
fn shuffle_positions_are_uniform() {
    const TRIALS: usize = 20_800;
    let expected = (TRIALS / DECK_SIZE) as f64;
    let tracked = card(Suit::Hearts, Rank::Ace);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts = [0_usize; DECK_SIZE];
    for _ in 0..TRIALS {
        let deck = shuffle_deck(generate_deck(), &mut rng);
        let position = deck
            .cards()
            .iter()
            .position(|c| *c == tracked)
            .expect("tracked card is in every deck");
        counts[position] += 1;
    }

    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 51 degrees of freedom; p = 0.0001 is roughly 95.6.
    assert!(chi_square < 100.0, "chi-square too large: {chi_square}");
}

#[test]
fn deal_removes_top_card() {
    let mut deck = generate_deck();
    let top = *deck.cards().last().unwrap();

    assert_eq!(deal_card(&mut deck), Ok(top));
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(!deck.cards().contains(&top));
}

#[test]
fn deal_from_empty_deck_fails() {
    let mut deck = Deck::from_draw_order(&[card(Suit::Hearts, Rank::Two)]);
    assert_eq!(deck.deal(), Ok(card(Suit::Hearts, Rank::Two)));
    assert!(deck.is_empty());
    assert_eq!(deal_card(&mut deck), Err(DealError::EmptyDeck));
    assert_eq!(deck.deal(), Err(DealError::EmptyDeck));
}

#[test]
fn draw_order_deck_deals_first_card_first() {
    let mut deck = Deck::from_draw_order(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ]);
    assert_eq!(deck.deal(), Ok(card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.deal(), Ok(card(Suit::Clubs, Rank::Three)));
}

#[test]
fn hand_values() {
    let ace_king = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::King)];
    assert_eq!(hand_value(&ace_king), 21);

    let two_aces = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace)];
    assert_eq!(hand_value(&two_aces), 12);

    let aces_nine = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Nine),
    ];
    assert_eq!(hand_value(&aces_nine), 21);

    let bust = [
        card(Suit::Hearts, Rank::King),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Clubs, Rank::Two),
    ];
    assert_eq!(hand_value(&bust), 22);

    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn hand_value_reduces_each_ace_separately() {
    let four_aces = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
    ];
    assert_eq!(hand_value(&four_aces), 14);

    let hard = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::Queen),
    ];
    assert_eq!(hand_value(&hard), 22);
}

#[test]
fn hand_value_of_huge_slice_saturates() {
    let kings = vec![card(Suit::Hearts, Rank::King); 7000];
    assert_eq!(hand_value(&kings), u16::MAX);
    assert!(Hand::from(kings).is_bust());

    let aces = vec![card(Suit::Spades, Rank::Ace); 7000];
    assert_eq!(hand_value(&aces), 7000);
    assert!(!Hand::from(aces).is_soft());
}

#[test]
fn hand_flags_and_idempotent_scoring() {
    let soft = hand(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Six)]);
    assert_eq!(soft.value(), 17);
    assert_eq!(soft.value(), soft.value());
    assert!(soft.is_soft());
    assert!(!soft.is_bust());
    assert!(!soft.is_blackjack());

    let natural = hand(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Jack)]);
    assert!(natural.is_blackjack());
    assert_eq!(natural.value(), BLACKJACK);

    let hard = hand(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Spades, Rank::Ten),
    ]);
    assert_eq!(hard.value(), 17);
    assert!(!hard.is_soft());

    let bust = hand(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Spades, Rank::Two),
    ]);
    assert!(bust.is_bust());
    assert_eq!(bust.len(), 3);
    assert!(Hand::new().is_empty());
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Clubs, Rank::Ten).to_string(), "10 of Clubs");
    assert_eq!(card(Suit::Spades, Rank::Queen).to_string(), "Queen of Spades");
}

#[test]
fn dealer_draws_until_seventeen_then_stops() {
    let mut dealer = hand(&[card(Suit::Hearts, Rank::Six), card(Suit::Clubs, Rank::Five)]);
    let mut deck = Deck::from_draw_order(&[
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Hearts, Rank::Three),
    ]);

    let drawn = DealerPolicy::default().play(&mut dealer, &mut deck).unwrap();
    assert_eq!(drawn, vec![card(Suit::Spades, Rank::Nine)]);
    assert_eq!(dealer.value(), 20);
    assert_eq!(deck.len(), 2);
}

#[test]
fn dealer_draws_several_cards() {
    let mut dealer = hand(&[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Three)]);
    let mut deck = Deck::from_draw_order(&[
        card(Suit::Spades, Rank::Four),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::King),
    ]);

    let drawn = DealerPolicy::default().play(&mut dealer, &mut deck).unwrap();
    assert_eq!(drawn.len(), 3);
    assert_eq!(dealer.value(), 24);
    assert!(dealer.is_bust());
    assert_eq!(deck.len(), 1);
}

#[test]
fn dealer_stands_without_drawing_at_seventeen() {
    let mut dealer = hand(&[card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Seven)]);
    let mut deck = Deck::from_draw_order(&[card(Suit::Spades, Rank::Two)]);

    let drawn = DealerPolicy::default().play(&mut dealer, &mut deck).unwrap();
    assert!(drawn.is_empty());
    assert_eq!(deck.len(), 1);
}

#[test]
fn dealer_soft_seventeen_rule() {
    let soft_17 = [card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Six)];
    let next = [card(Suit::Spades, Rank::Two)];

    let stand = DealerPolicy::default();
    assert_eq!(stand.state(&hand(&soft_17)), DealerState::Standing);

    let hit = DealerPolicy {
        stand_on_soft: false,
        ..DealerPolicy::default()
    };
    assert_eq!(hit.state(&hand(&soft_17)), DealerState::Drawing);

    let mut dealer = hand(&soft_17);
    let mut deck = Deck::from_draw_order(&next);
    let drawn = hit.play(&mut dealer, &mut deck).unwrap();
    assert_eq!(drawn, next.to_vec());
    assert_eq!(dealer.value(), 19);
}

#[test]
fn dealer_soft_rule_follows_threshold() {
    let soft_18 = hand(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Seven)]);
    let hard_18 = hand(&[card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Eight)]);

    let stand = DealerPolicy {
        stands_on: 18,
        stand_on_soft: true,
    };
    assert_eq!(stand.state(&soft_18), DealerState::Standing);

    let hit = DealerPolicy {
        stands_on: 18,
        stand_on_soft: false,
    };
    assert_eq!(hit.state(&soft_18), DealerState::Drawing);
    assert_eq!(hit.state(&hard_18), DealerState::Standing);
}

#[test]
fn dealer_policy_surfaces_empty_deck() {
    let mut dealer = hand(&[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Three)]);
    let mut deck = Deck::from_draw_order(&[card(Suit::Spades, Rank::Four)]);

    let err = DealerPolicy::default()
        .play(&mut dealer, &mut deck)
        .unwrap_err();
    assert_eq!(err, DealError::EmptyDeck);
    assert_eq!(dealer.len(), 3);
}
