use criterion::{criterion_group, criterion_main, Criterion};

use poker_hands::core::{winner, Card, Classify, ClassifiedHand};

fn cards(hand: &str) -> Vec<Card> {
    hand.split(' ').map(|token| token.parse().unwrap()).collect()
}

fn classify_hands(c: &mut Criterion) {
    let high_card = cards("2C 3C AC 8C 9D");
    let two_pair = cards("5C AD 5D AC 9C");
    let straight_flush = cards("4C 5C 6C 7C 8C");

    c.bench_function("classify_high_card", |b| {
        b.iter(|| high_card.classify().unwrap())
    });
    c.bench_function("classify_two_pair", |b| {
        b.iter(|| two_pair.classify().unwrap())
    });
    c.bench_function("classify_straight_flush", |b| {
        b.iter(|| straight_flush.classify().unwrap())
    });
}

fn evaluate_deal(c: &mut Criterion) {
    let hands: [ClassifiedHand; 2] = [
        cards("6C 6D QC JC TC").classify().unwrap(),
        cards("AC KC 2D 4H 4S").classify().unwrap(),
    ];

    c.bench_function("deal_winner", |b| b.iter(|| winner(&hands).unwrap()));
}

criterion_group!(benches, classify_hands, evaluate_deal);
criterion_main!(benches);
