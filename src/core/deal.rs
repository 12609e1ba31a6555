use core::cmp::Ordering;

use crate::core::classify::ClassifiedHand;
use crate::core::errors::DealError;

/// The result of evaluating one deal: either one player's hand is
/// the unique maximum, or both hands compare exactly equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub enum DealOutcome {
    /// Index of the player holding the strictly strongest hand.
    Winner(usize),
    /// Both hands rank exactly equal, so no single winner exists.
    Tie,
}

/// One comparison unit: two players' classified hands, in player
/// order. Hands are totally ordered, so every deal evaluates to a
/// winner or a tie with no further state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub struct Deal {
    hands: [ClassifiedHand; 2],
}

impl Deal {
    /// Create a deal from the players' hands in player order.
    ///
    /// The documented contract of this system is two player deals,
    /// so any other hand count is rejected.
    pub fn new(hands: Vec<ClassifiedHand>) -> Result<Self, DealError> {
        let hands: [ClassifiedHand; 2] = hands
            .try_into()
            .map_err(|hands: Vec<ClassifiedHand>| DealError::InvalidHandCount(hands.len()))?;
        Ok(Self { hands })
    }

    /// Evaluate the deal with the hand total order.
    pub fn outcome(&self) -> DealOutcome {
        match self.hands[0].cmp(&self.hands[1]) {
            Ordering::Greater => DealOutcome::Winner(0),
            Ordering::Less => DealOutcome::Winner(1),
            Ordering::Equal => DealOutcome::Tie,
        }
    }

    /// Did the player at `player_index` win this deal outright?
    /// A tie is won by nobody.
    pub fn is_won_by(&self, player_index: usize) -> bool {
        self.outcome() == DealOutcome::Winner(player_index)
    }
}

/// Determine the winner among exactly two classified hands.
///
/// # Examples
/// ```
/// use poker_hands::core::{Card, Classify, DealOutcome, winner};
///
/// let six_pair: Vec<Card> = "6C 6D QC JC TC"
///     .split(' ')
///     .map(|token| token.parse().unwrap())
///     .collect();
/// let four_pair: Vec<Card> = "AC KC 2D 4H 4S"
///     .split(' ')
///     .map(|token| token.parse().unwrap())
///     .collect();
///
/// assert_eq!(
///     Ok(DealOutcome::Winner(0)),
///     winner(&[six_pair.classify().unwrap(), four_pair.classify().unwrap()])
/// );
/// ```
pub fn winner(hands: &[ClassifiedHand]) -> Result<DealOutcome, DealError> {
    let hands: [ClassifiedHand; 2] = hands
        .try_into()
        .map_err(|_| DealError::InvalidHandCount(hands.len()))?;
    Ok(Deal { hands }.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Card;
    use crate::core::classify::Classify;

    fn hand(cards: &str) -> ClassifiedHand {
        let cards: Vec<Card> = cards
            .split(' ')
            .map(|token| token.parse().unwrap())
            .collect();
        cards.classify().unwrap()
    }

    #[test]
    fn test_first_player_wins() {
        let deal = Deal::new(vec![hand("2C 3C AC 8C 9D"), hand("KC 2D 7C 4C 5C")]).unwrap();
        assert_eq!(DealOutcome::Winner(0), deal.outcome());
        assert!(deal.is_won_by(0));
        assert!(!deal.is_won_by(1));
    }

    #[test]
    fn test_second_player_wins() {
        let deal = Deal::new(vec![hand("AC KC 2D 4H 4S"), hand("6C 6D QC JC TC")]).unwrap();
        assert_eq!(DealOutcome::Winner(1), deal.outcome());
        assert!(!deal.is_won_by(0));
        assert!(deal.is_won_by(1));
    }

    #[test]
    fn test_equal_hands_tie() {
        let deal = Deal::new(vec![hand("4C 5C 6C 7C 8C"), hand("4D 5D 6D 8D 7D")]).unwrap();
        assert_eq!(DealOutcome::Tie, deal.outcome());
        assert!(!deal.is_won_by(0));
        assert!(!deal.is_won_by(1));
    }

    #[test]
    fn test_invalid_hand_count() {
        assert_eq!(
            Err(DealError::InvalidHandCount(1)),
            Deal::new(vec![hand("2C 3C AC 8C 9D")])
        );
        assert_eq!(
            Err(DealError::InvalidHandCount(3)),
            winner(&[
                hand("2C 3C AC 8C 9D"),
                hand("KC 2D 7C 4C 5C"),
                hand("6C 6D QC JC TC"),
            ])
        );
    }

    #[test]
    fn test_winner_matches_deal_outcome() {
        let first = hand("3C 3D 3H 5C 5D");
        let second = hand("7S 7D 2C 2D 2S");
        assert_eq!(Ok(DealOutcome::Winner(0)), winner(&[first, second]));
        assert_eq!(Ok(DealOutcome::Winner(1)), winner(&[second, first]));
    }
}
