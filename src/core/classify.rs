use core::cmp::Ordering;

use crate::core::card::{Card, Value};
use crate::core::errors::ClassifyError;

/// All the different hand categories in ascending strength order.
///
/// This is the primary sort key for every hand comparison; the
/// declaration order here is the domain order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    /// No matches.
    HighCard,
    /// One card value matches another.
    OnePair,
    /// Two different pairs of matching values.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five contiguous values. Aces are always high, there is no wheel.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five contiguous values all of the same suit.
    StraightFlush,
}

/// A five card hand classified into its category, carrying exactly
/// the values needed to break ties against another hand of the same
/// category and nothing else.
///
/// List valued payloads are fixed arrays sorted from highest to
/// lowest, so the derived array comparison is the positional
/// first-difference-decides kicker rule.
///
/// A classified hand is immutable and keeps no reference back to the
/// cards it was built from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub enum ClassifiedHand {
    /// All five values, descending.
    HighCard { values: [Value; 5] },
    /// The paired value, then the three kickers descending.
    OnePair { pair: Value, kickers: [Value; 3] },
    /// The higher pair, the lower pair, then the odd card.
    TwoPair {
        higher_pair: Value,
        lower_pair: Value,
        kicker: Value,
    },
    /// The tripled value, then the two kickers descending.
    ThreeOfAKind { triple: Value, kickers: [Value; 2] },
    /// The highest value in the straight.
    Straight { highest: Value },
    /// All five values, descending.
    Flush { values: [Value; 5] },
    /// The tripled value, then the paired value.
    FullHouse { triple: Value, pair: Value },
    /// The quadrupled value, then the odd card.
    FourOfAKind { quad: Value, kicker: Value },
    /// The highest value in the straight.
    StraightFlush { highest: Value },
}

impl ClassifiedHand {
    /// The category this hand was classified into.
    pub const fn category(&self) -> HandCategory {
        match self {
            ClassifiedHand::HighCard { .. } => HandCategory::HighCard,
            ClassifiedHand::OnePair { .. } => HandCategory::OnePair,
            ClassifiedHand::TwoPair { .. } => HandCategory::TwoPair,
            ClassifiedHand::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            ClassifiedHand::Straight { .. } => HandCategory::Straight,
            ClassifiedHand::Flush { .. } => HandCategory::Flush,
            ClassifiedHand::FullHouse { .. } => HandCategory::FullHouse,
            ClassifiedHand::FourOfAKind { .. } => HandCategory::FourOfAKind,
            ClassifiedHand::StraightFlush { .. } => HandCategory::StraightFlush,
        }
    }

    /// Break a tie between two hands of the same category by
    /// comparing the payload fields in their fixed precedence order.
    ///
    /// Only ever called with equal categories, so payloads of
    /// different shapes are never compared against each other.
    fn break_tie(&self, other: &Self) -> Ordering {
        use ClassifiedHand::*;
        match (self, other) {
            (HighCard { values: ours }, HighCard { values: theirs }) => ours.cmp(theirs),
            (
                OnePair {
                    pair: ours,
                    kickers: our_kickers,
                },
                OnePair {
                    pair: theirs,
                    kickers: their_kickers,
                },
            ) => ours.cmp(theirs).then_with(|| our_kickers.cmp(their_kickers)),
            (
                TwoPair {
                    higher_pair: our_higher,
                    lower_pair: our_lower,
                    kicker: our_kicker,
                },
                TwoPair {
                    higher_pair: their_higher,
                    lower_pair: their_lower,
                    kicker: their_kicker,
                },
            ) => our_higher
                .cmp(their_higher)
                .then_with(|| our_lower.cmp(their_lower))
                .then_with(|| our_kicker.cmp(their_kicker)),
            (
                ThreeOfAKind {
                    triple: ours,
                    kickers: our_kickers,
                },
                ThreeOfAKind {
                    triple: theirs,
                    kickers: their_kickers,
                },
            ) => ours.cmp(theirs).then_with(|| our_kickers.cmp(their_kickers)),
            (Straight { highest: ours }, Straight { highest: theirs }) => ours.cmp(theirs),
            (Flush { values: ours }, Flush { values: theirs }) => ours.cmp(theirs),
            (
                FullHouse {
                    triple: our_triple,
                    pair: our_pair,
                },
                FullHouse {
                    triple: their_triple,
                    pair: their_pair,
                },
            ) => our_triple
                .cmp(their_triple)
                .then_with(|| our_pair.cmp(their_pair)),
            (
                FourOfAKind {
                    quad: our_quad,
                    kicker: our_kicker,
                },
                FourOfAKind {
                    quad: their_quad,
                    kicker: their_kicker,
                },
            ) => our_quad
                .cmp(their_quad)
                .then_with(|| our_kicker.cmp(their_kicker)),
            (StraightFlush { highest: ours }, StraightFlush { highest: theirs }) => {
                ours.cmp(theirs)
            }
            _ => unreachable!("tie break is only evaluated for hands of equal categories"),
        }
    }
}

/// Convert from `ClassifiedHand` to `HandCategory` by stripping the
/// tie break payload. Useful for tallying outcomes by category.
impl From<ClassifiedHand> for HandCategory {
    fn from(hand: ClassifiedHand) -> Self {
        hand.category()
    }
}

/// The total order over classified hands: category first, then the
/// category specific tie break. Equal category and equal payload is
/// a legitimate tie and compares `Equal`.
impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| self.break_tie(other))
    }
}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Can this be classified into a hand? There are default
/// implementations for `Vec<Card>` and slices of cards.
pub trait Classify {
    /// The cards making up the hand.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Classify exactly five distinct cards into a `ClassifiedHand`.
    ///
    /// Any other cardinality is a caller contract violation and is
    /// reported as an error with no partial result. Duplicate
    /// (value, suit) pairs are not defended against; five distinct
    /// cards are the caller's contract.
    ///
    /// The branches are evaluated in strength descending order.
    /// That ordering is load bearing: a straight that is also a
    /// flush must classify as a straight flush, and a paired hand
    /// must hit the count based branches before straight detection
    /// is ever consulted.
    ///
    /// # Examples
    /// ```
    /// use poker_hands::core::{Card, Classify, ClassifiedHand, Suit, Value};
    ///
    /// let cards = vec![
    ///     Card::new(Value::Six, Suit::Club),
    ///     Card::new(Value::Six, Suit::Diamond),
    ///     Card::new(Value::Queen, Suit::Club),
    ///     Card::new(Value::Jack, Suit::Club),
    ///     Card::new(Value::Ten, Suit::Club),
    /// ];
    /// let classified = cards.classify().unwrap();
    /// assert_eq!(
    ///     ClassifiedHand::OnePair {
    ///         pair: Value::Six,
    ///         kickers: [Value::Queen, Value::Jack, Value::Ten],
    ///     },
    ///     classified
    /// );
    /// ```
    fn classify(&self) -> Result<ClassifiedHand, ClassifyError> {
        let cards: Vec<Card> = self.cards().collect();
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| ClassifyError::InvalidCardCount(cards.len()))?;
        Ok(classify_five(&cards))
    }
}

impl Classify for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Classify for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Classify for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Classify for [Card; 5] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

/// Classify exactly five cards.
///
/// The cardinality contract is already enforced; this is the pure
/// branch logic.
fn classify_five(cards: &[Card; 5]) -> ClassifiedHand {
    let mut count_by_value = [0u8; 13];
    for card in cards {
        count_by_value[card.value as usize] += 1;
    }

    // Distinct values ordered by descending card count. The sort is
    // stable so values with equal counts stay in ascending value
    // order; every payload below re-sorts where descending kicker
    // order is required, so that residual order never matters.
    let mut groups: Vec<(Value, u8)> = Value::values()
        .into_iter()
        .filter(|value| count_by_value[*value as usize] > 0)
        .map(|value| (value, count_by_value[value as usize]))
        .collect();
    groups.sort_by(|first, second| second.1.cmp(&first.1));

    let all_same_suit = cards.iter().all(|card| card.suit == cards[0].suit);
    let straight = is_straight(&groups);

    if all_same_suit && straight {
        ClassifiedHand::StraightFlush {
            highest: highest_value(cards),
        }
    } else if groups.len() == 2 && groups[0].1 == 4 {
        ClassifiedHand::FourOfAKind {
            quad: groups[0].0,
            kicker: groups[1].0,
        }
    } else if groups.len() == 2 {
        // Two distinct values and no quads leaves only counts {3, 2}.
        ClassifiedHand::FullHouse {
            triple: groups[0].0,
            pair: groups[1].0,
        }
    } else if all_same_suit {
        ClassifiedHand::Flush {
            values: values_descending(cards),
        }
    } else if straight {
        ClassifiedHand::Straight {
            highest: highest_value(cards),
        }
    } else if groups.len() == 3 && groups[0].1 == 3 {
        let mut kickers = [groups[1].0, groups[2].0];
        kickers.sort_unstable_by(|first, second| second.cmp(first));
        ClassifiedHand::ThreeOfAKind {
            triple: groups[0].0,
            kickers,
        }
    } else if groups.len() == 3 {
        // Three distinct values without a triple is two pairs.
        ClassifiedHand::TwoPair {
            higher_pair: groups[0].0.max(groups[1].0),
            lower_pair: groups[0].0.min(groups[1].0),
            kicker: groups[2].0,
        }
    } else if groups.len() == 4 {
        let mut kickers = [groups[1].0, groups[2].0, groups[3].0];
        kickers.sort_unstable_by(|first, second| second.cmp(first));
        ClassifiedHand::OnePair {
            pair: groups[0].0,
            kickers,
        }
    } else {
        ClassifiedHand::HighCard {
            values: values_descending(cards),
        }
    }
}

/// A hand is a straight iff all five values are distinct and the
/// contiguous range from the lowest to the highest value has exactly
/// five members. Aces are always high so A-2-3-4-5 is not a straight.
fn is_straight(groups: &[(Value, u8)]) -> bool {
    if groups.len() != 5 {
        return false;
    }
    let values = groups.iter().map(|(value, _)| *value);
    match (Value::min_in(values.clone()), Value::max_in(values)) {
        (Some(lowest), Some(highest)) => highest as u8 - lowest as u8 == 4,
        _ => false,
    }
}

fn highest_value(cards: &[Card; 5]) -> Value {
    cards
        .iter()
        .map(|card| card.value)
        .fold(Value::Two, Value::max)
}

fn values_descending(cards: &[Card; 5]) -> [Value; 5] {
    let mut values = [
        cards[0].value,
        cards[1].value,
        cards[2].value,
        cards[3].value,
        cards[4].value,
    ];
    values.sort_unstable_by(|first, second| second.cmp(first));
    values
}
