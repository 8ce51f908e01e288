//! poker-eval: bitwise poker hand evaluation
//!
//! Goals:
//! - Classify 2–7 cards into their best five-card hand without sorting or
//!   enumerating subsets
//! - One comparable integer per hand, so showdowns are a plain `cmp`
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use poker_eval::card_list::CardList;
//! use poker_eval::evaluator::{evaluate_with_board, Category};
//!
//! let board: CardList = "[Kc,Qd,Jh,3s,2c]".parse().unwrap();
//! let aces: CardList = "[As,Ah]".parse().unwrap();
//! let tens: CardList = "[Ts,9h]".parse().unwrap();
//!
//! let a = evaluate_with_board(aces.iter().copied(), board.iter().copied());
//! let b = evaluate_with_board(tens.iter().copied(), board.iter().copied());
//! assert_eq!(a.category(), Category::Pair);
//! assert_eq!(b.category(), Category::Straight);
//! assert!(b > a);
//! ```

pub mod card_list;
pub mod card_set;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod pocket;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
