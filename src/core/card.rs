use core::fmt;
use std::str::FromStr;

use crate::core::errors::CardParseError;

/// Card value, or rank, of a card.
///
/// Values are totally ordered by their declaration order,
/// `Two` lowest through `Ace` highest. There is no ace-low
/// ordering anywhere in this crate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s in order from lowest to highest.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Get the one character symbol for this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::Value;
    ///
    /// assert_eq!('A', Value::Ace.to_char());
    /// assert_eq!('T', Value::Ten.to_char());
    /// ```
    pub const fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    /// The highest value among `values`, or `None` for an empty iterator.
    pub fn max_in(values: impl IntoIterator<Item = Value>) -> Option<Value> {
        values.into_iter().max()
    }

    /// The lowest value among `values`, or `None` for an empty iterator.
    pub fn min_in(values: impl IntoIterator<Item = Value>) -> Option<Value> {
        values.into_iter().min()
    }

    /// Collect `values` into a vector sorted from highest to lowest.
    pub fn sorted_descending(values: impl IntoIterator<Item = Value>) -> Vec<Value> {
        let mut sorted: Vec<Value> = values.into_iter().collect();
        sorted.sort_unstable_by(|first, second| second.cmp(first));
        sorted
    }
}

/// Parse a `Value` from its one character symbol.
impl TryFrom<char> for Value {
    type Error = CardParseError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            'T' => Ok(Value::Ten),
            'J' => Ok(Value::Jack),
            'Q' => Ok(Value::Queen),
            'K' => Ok(Value::King),
            'A' => Ok(Value::Ace),
            _ => Err(CardParseError::UnknownValueSymbol(symbol)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
///
/// Suits carry no ordering for hand strength. They only ever
/// matter for flush detection, so only equality is exposed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the `Suit`'s.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Get the one character symbol for this suit.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// Parse a `Suit` from its one character symbol.
impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'C' => Ok(Suit::Club),
            'D' => Ok(Suit::Diamond),
            'H' => Ok(Suit::Heart),
            'S' => Ok(Suit::Spade),
            _ => Err(CardParseError::UnknownSuitSymbol(symbol)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The core card type. A card is a value and a suit with
/// structural equality; two cards are equal iff both fields match.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hands::core::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ace, Suit::Spade);
    /// assert_eq!("AS", card.to_string());
    /// ```
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Parse a card from its two character token, value symbol
/// first then suit symbol, e.g. `"TD"` for the ten of diamonds.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut symbols = token.chars();
        let card = match (symbols.next(), symbols.next(), symbols.next()) {
            (Some(value), Some(suit), None) => Card {
                value: Value::try_from(value)?,
                suit: Suit::try_from(suit)?,
            },
            _ => return Err(CardParseError::InvalidCardToken(token.to_string())),
        };
        Ok(card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}
