use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use showdown_engine::cards::{full_deck, parse_cards, Card};
use showdown_engine::errors::GameError;
use showdown_engine::hand::{compare_hands, evaluate, evaluate_five, Category, RankedHand};

fn eval(codes: &str) -> RankedHand {
    evaluate(&parse_cards(codes).unwrap()).unwrap()
}

#[test]
fn detects_royal_flush() {
    let hs = eval("AS KS QS JS 10S 2H 3D");
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreak, [14, 13, 12, 11, 10]);
    assert_eq!(hs.cards.to_vec(), parse_cards("AS KS QS JS 10S").unwrap());
    assert_eq!(hs.describe(), "Royal Flush");
}

#[test]
fn four_aces_break_ties_on_ace_then_kicker() {
    let hs = eval("AH AD AC AS 2H 3D 4C");
    assert_eq!(hs.category, Category::FourOfAKind);
    assert_eq!(hs.tiebreak[0], 14);
    assert_eq!(hs.tiebreak[1], 4, "best remaining card is the kicker");
    assert_eq!(hs.describe(), "Four of a Kind, Aces");
}

#[test]
fn split_runs_without_a_six_are_high_card() {
    // 2-3-4-5 hearts and 7-8-9 diamonds: no straight, no five of one suit
    let hs = eval("2H 3H 4H 5H 7D 8D 9D");
    assert_eq!(hs.category, Category::HighCard);
    assert_eq!(hs.tiebreak, [9, 8, 7, 5, 4]);
    assert_eq!(hs.describe(), "Nine High");
}

#[test]
fn wheel_straight_plays_ace_low() {
    let wheel = eval("AS 2H 3D 4C 5S 9H 9D");
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.tiebreak, [5, 4, 3, 2, 1]);
    assert_eq!(wheel.describe(), "Straight, Five High");

    let six_high = eval("2H 3D 4C 5S 6H 9C KD");
    assert_eq!(six_high.category, Category::Straight);
    assert!(compare_hands(&wheel, &six_high).is_lt());
}

#[test]
fn broadway_straight_plays_ace_high() {
    let hs = eval("AS KH QD JC 10S 3H 2D");
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.tiebreak, [14, 13, 12, 11, 10]);
    assert_eq!(hs.describe(), "Straight, Ace High");
}

#[test]
fn ace_cannot_wrap_around() {
    // Q-K-A-2-3 is not a straight
    let hs = eval("QS KH AD 2C 3S");
    assert_eq!(hs.category, Category::HighCard);
}

#[test]
fn steel_wheel_is_a_straight_flush() {
    let hs = eval("AH 2H 3H 4H 5H KD KC");
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreak, [5, 4, 3, 2, 1]);
    assert_eq!(hs.describe(), "Straight Flush, Five High");
}

#[test]
fn flush_beats_straight_and_is_detected() {
    let flush = eval("2H 7H JH QH 9H AC KD");
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(flush.tiebreak, [12, 11, 9, 7, 2]);
    let straight = eval("5C 6H 7C 8H 9D 2S 3C");
    assert_eq!(straight.category, Category::Straight);
    assert!(compare_hands(&flush, &straight).is_gt());
}

#[test]
fn flush_picks_top_five_of_six_suited() {
    let hs = eval("2S 4S 6S 8S 10S QS 3D");
    assert_eq!(hs.category, Category::Flush);
    assert_eq!(hs.tiebreak, [12, 10, 8, 6, 4]);
    assert_eq!(hs.describe(), "Flush, Queen High");
}

#[test]
fn two_trips_make_the_higher_full_house() {
    let hs = eval("KH KD KC 10S 10H 10D 2C");
    assert_eq!(hs.category, Category::FullHouse);
    assert_eq!(&hs.tiebreak[..2], &[13, 10]);
    assert_eq!(hs.describe(), "Full House, Kings over Tens");
}

#[test]
fn three_pairs_keep_the_best_kicker() {
    let hs = eval("AH AD KC KS QH QD 2C");
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.tiebreak, [14, 13, 12, 0, 0]);
    assert_eq!(hs.describe(), "Two Pair, Aces and Kings");
}

#[test]
fn trips_with_two_kickers() {
    let hs = eval("7H 7D 7C AS 9H 4D 2C");
    assert_eq!(hs.category, Category::ThreeOfAKind);
    assert_eq!(hs.tiebreak, [7, 14, 9, 0, 0]);
    assert_eq!(hs.describe(), "Three of a Kind, Sevens");
}

#[test]
fn pair_kickers_decide_between_equal_pairs() {
    let king_kicker = eval("AH AD KC 9S 7H 4D 2C");
    let queen_kicker = eval("AS AC QC 9D 7D 4H 2S");
    assert_eq!(king_kicker.category, Category::Pair);
    assert_eq!(king_kicker.tiebreak, [14, 13, 9, 7, 0]);
    assert_eq!(king_kicker.describe(), "Pair of Aces");
    assert!(compare_hands(&king_kicker, &queen_kicker).is_gt());
}

#[test]
fn category_ordering_is_correct() {
    let ladder = [
        eval("AH KD 9C 7S 5H 3D 2C"),
        eval("2H 2D 9C 7S 5H 3D KC"),
        eval("2H 2D 3C 3S 5H 9D KC"),
        eval("2H 2D 2C 7S 5H 9D KC"),
        eval("2H 3D 4C 5S 6H 9D KC"),
        eval("2H 7H 9H JH KH 3D 4C"),
        eval("2H 2D 2C 3S 3H 9D KC"),
        eval("2H 2D 2C 2S 5H 9D KC"),
        eval("2H 3H 4H 5H 6H 9D KC"),
    ];
    for (i, pair) in ladder.windows(2).enumerate() {
        assert_eq!(pair[0].category as usize, i);
        assert!(pair[0] < pair[1], "{:?} should lose to {:?}", pair[0], pair[1]);
    }
}

#[test]
fn same_key_from_different_cards_is_equal() {
    let a = eval("2H 3D 10C JD QH KS AC");
    let b = eval("2S 3C 10C JD QH KS AC");
    assert_eq!(a, b);
    assert!(compare_hands(&a, &b).is_eq());
}

#[test]
fn five_and_six_card_inputs_are_accepted() {
    assert_eq!(eval("AS AH 3D 4C 9S").category, Category::Pair);
    assert_eq!(eval("AS AH 3D 3C 9S 9H").category, Category::TwoPair);
    let five = parse_cards("AS AH 3D 4C 9S").unwrap();
    let arr: [Card; 5] = five.clone().try_into().unwrap();
    assert_eq!(evaluate_five(&arr), evaluate(&five).unwrap());
}

#[test]
fn rejects_too_few_or_too_many_cards() {
    let four = parse_cards("AS AH 3D 4C").unwrap();
    assert_eq!(evaluate(&four).unwrap_err(), GameError::InvalidInputSize(4));
    let eight = parse_cards("AS AH 3D 4C 5C 6C 7C 8C").unwrap();
    assert_eq!(evaluate(&eight).unwrap_err(), GameError::InvalidInputSize(8));
    assert_eq!(evaluate(&[]).unwrap_err(), GameError::InvalidInputSize(0));
}

#[test]
fn evaluation_ignores_input_order() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut deck = full_deck();
        deck.shuffle(&mut rng);
        let mut seven: Vec<Card> = deck[..7].to_vec();
        let reference = evaluate(&seven).unwrap();
        for _ in 0..10 {
            seven.shuffle(&mut rng);
            let again = evaluate(&seven).unwrap();
            assert_eq!(again, reference);
            assert_eq!(again.category, reference.category);
            assert_eq!(again.tiebreak, reference.tiebreak);
            assert_eq!(again.cards, reference.cards, "chosen five must not depend on order");
        }
    }
}

#[test]
fn best_hand_is_at_least_every_five_card_subset() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for _ in 0..50 {
        let mut deck = full_deck();
        deck.shuffle(&mut rng);
        let seven = &deck[..7];
        let best = evaluate(seven).unwrap();
        for skip_a in 0..7 {
            for skip_b in skip_a + 1..7 {
                let five: Vec<Card> = seven
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c)
                    .collect();
                let arr: [Card; 5] = five.try_into().unwrap();
                assert!(evaluate_five(&arr) <= best);
            }
        }
        let chosen = best.cards;
        assert!(chosen.iter().all(|c| seven.contains(c)));
        assert_eq!(evaluate_five(&chosen), best);
    }
}

#[test]
fn independent_evaluations_run_concurrently() {
    let hands = [
        "AS KS QS JS 10S 2H 3D",
        "AH AD AC AS 2H 3D 4C",
        "2H 3H 4H 5H 7D 8D 9D",
        "AS 2H 3D 4C 5S 9H 9D",
    ];
    let expected: Vec<RankedHand> = hands.iter().map(|h| eval(h)).collect();
    let results: Vec<RankedHand> = std::thread::scope(|s| {
        let workers: Vec<_> = hands.iter().map(|h| s.spawn(move || eval(h))).collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}
