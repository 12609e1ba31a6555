/// Module with all the card value, suit, and card types.
mod card;
/// Export all the card model types.
pub use self::card::{Card, Suit, Value};

/// Module with the error types of the core.
mod errors;
/// Export the error enums.
pub use self::errors::{CardParseError, ClassifyError, DealError};

/// Module with the hand classifier and the hand total order.
mod classify;
/// Export the classification types.
pub use self::classify::{Classify, ClassifiedHand, HandCategory};

/// Module with the two player deal evaluator.
mod deal;
/// Export the deal types and the winner function.
pub use self::deal::{winner, Deal, DealOutcome};
