//! This module replays recorded deal files. Each line of a deal
//! file holds one two player deal: two five card hands of space
//! separated two character card tokens (value symbol then suit
//! symbol), the first hand in columns 0..14 and the second in
//! columns 15..29, e.g.
//!
//! ```text
//! 8C TS KC 9H 4S 7D 2S 5D 3S AC
//! ```
//!
//! Every deal is parsed, classified, and evaluated independently,
//! and the history answers how many deals each player won. Any
//! format violation aborts the load with a distinguishable error;
//! there is no partial history.

use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::core::{
    Card, CardParseError, Classify, ClassifiedHand, ClassifyError, Deal, DealError, DealOutcome,
};

/// Errors from loading a deal file.
#[derive(Error, Debug)]
pub enum DealHistoryError {
    #[error("Failed to read deal file")]
    Io(#[from] std::io::Error),

    #[error("Unsupported deal record format, offending line: {0}")]
    MalformedLine(String),

    #[error(transparent)]
    Card(#[from] CardParseError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Parse and classify one hand string of five space separated card
/// tokens, e.g. `"8C TS KC 9H 4S"`.
pub fn parse_hand(hand_str: &str) -> Result<ClassifiedHand, DealHistoryError> {
    let cards: Vec<Card> = hand_str
        .split(' ')
        .map(|token| token.parse())
        .collect::<Result<_, _>>()?;
    Ok(cards.classify()?)
}

/// Parse one deal record line into an evaluated two player deal.
pub fn parse_deal(line: &str) -> Result<Deal, DealHistoryError> {
    if line.len() != 29 || !line.is_ascii() {
        return Err(DealHistoryError::MalformedLine(line.to_string()));
    }

    let first_player_hand = &line[0..14];
    let second_player_hand = &line[15..];
    Ok(Deal::new(vec![
        parse_hand(first_player_hand)?,
        parse_hand(second_player_hand)?,
    ])?)
}

/// A replayed batch of two player deals.
#[derive(Debug, Clone)]
pub struct DealHistory {
    deals: Vec<Deal>,
}

impl DealHistory {
    /// Create a history from already evaluated deals.
    pub fn new(deals: Vec<Deal>) -> Self {
        Self { deals }
    }

    /// Load a history from a deal file, one deal per line.
    ///
    /// # Examples
    /// ```
    /// use poker_hands::history::DealHistory;
    ///
    /// let records = "8C TS KC 9H 4S 7D 2S 5D 3S AC\n\
    ///                5C AD 5D AC 9C 7C 5H 8D TD KS";
    /// let history = DealHistory::from_reader(records.as_bytes()).unwrap();
    /// assert_eq!(2, history.deal_count());
    /// ```
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DealHistoryError> {
        let mut deals = Vec::new();
        for line in reader.lines() {
            deals.push(parse_deal(&line?)?);
        }
        debug!(deal_count = deals.len(), "loaded deal history");
        Ok(Self::new(deals))
    }

    /// How many deals this history holds.
    pub fn deal_count(&self) -> usize {
        self.deals.len()
    }

    /// How many deals the player at `player_index` won outright.
    pub fn wins_of_player(&self, player_index: usize) -> usize {
        self.deals
            .iter()
            .filter(|deal| deal.is_won_by(player_index))
            .count()
    }

    /// How many deals ended without a single winner.
    pub fn tie_count(&self) -> usize {
        self.deals
            .iter()
            .filter(|deal| deal.outcome() == DealOutcome::Tie)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DealOutcome, HandCategory, Value};

    #[test]
    fn test_parse_hand() {
        let classified = parse_hand("6C 6D QC JC TC").unwrap();
        assert_eq!(
            ClassifiedHand::OnePair {
                pair: Value::Six,
                kickers: [Value::Queen, Value::Jack, Value::Ten],
            },
            classified
        );
    }

    #[test]
    fn test_parse_hand_bad_token() {
        assert!(matches!(
            parse_hand("6C 6D QC JC 1C"),
            Err(DealHistoryError::Card(
                CardParseError::UnknownValueSymbol('1')
            ))
        ));
    }

    #[test]
    fn test_parse_deal() {
        let deal = parse_deal("8C TS KC 9H 4S 7D 2S 5D 3S AC").unwrap();
        assert_eq!(DealOutcome::Winner(1), deal.outcome());
    }

    #[test]
    fn test_parse_deal_rejects_wrong_length() {
        assert!(matches!(
            parse_deal("8C TS KC 9H 4S 7D 2S 5D 3S"),
            Err(DealHistoryError::MalformedLine(_))
        ));
        assert!(matches!(
            parse_deal(""),
            Err(DealHistoryError::MalformedLine(_))
        ));
    }

    #[test]
    fn test_parse_deal_classifies_both_hands() {
        let first = parse_hand("5C AD 5D AC 9C").unwrap();
        let second = parse_hand("7C 5H 8D TD KS").unwrap();
        assert_eq!(HandCategory::TwoPair, first.category());
        assert_eq!(HandCategory::HighCard, second.category());
        let deal = parse_deal("5C AD 5D AC 9C 7C 5H 8D TD KS").unwrap();
        assert_eq!(DealOutcome::Winner(0), deal.outcome());
    }

    #[test_log::test]
    fn test_history_tally() {
        // Hand verified: player 1 takes the first deal with the ace
        // high card, player 0 takes the next three (two pair over
        // high card, ace high over king high, pair of sixes over
        // pair of fours), and the last deal is an exact tie.
        let records = "8C TS KC 9H 4S 7D 2S 5D 3S AC\n\
                       5C AD 5D AC 9C 7C 5H 8D TD KS\n\
                       2C 3C AC 8C 9D KC 2D 7C 4C 5C\n\
                       6C 6D QC JC TC AC KH 2D 4H 4S\n\
                       4C 5C 6C 7C 8C 4D 5D 6D 8D 7D";
        let history = DealHistory::from_reader(records.as_bytes()).unwrap();

        assert_eq!(5, history.deal_count());
        assert_eq!(3, history.wins_of_player(0));
        assert_eq!(1, history.wins_of_player(1));
        assert_eq!(1, history.tie_count());
    }

    #[test]
    fn test_history_rejects_malformed_file() {
        let records = "8C TS KC 9H 4S 7D 2S 5D 3S AC\nnot a deal";
        assert!(DealHistory::from_reader(records.as_bytes()).is_err());
    }
}
