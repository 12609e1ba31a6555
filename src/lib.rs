//! A library for five card poker hands. It classifies a hand into
//! its category (high card through straight flush), totally orders
//! classified hands including multi level kicker tie breaks, and
//! evaluates two player deals to a winner or a tie.
//!
//! The core is pure and synchronous: classification and comparison
//! are referentially transparent functions over `Copy` value types,
//! so batches of deals can be evaluated in parallel with no
//! coordination.
//!
//! One deliberate rules choice: aces are always high. There is no
//! ace low straight (wheel) anywhere in this crate.

/// The core card model, hand classifier, hand total order, and deal
/// evaluator.
pub mod core;

/// Replaying recorded deal files and tallying wins per player.
pub mod history;
