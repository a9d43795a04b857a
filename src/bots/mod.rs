//! Automated players.
//!
//! A seat whose identity falls in the reserved automated range is played by
//! a [`BotPolicy`]; the turn engine asks the policy for a move whenever such
//! a seat is current.

pub mod policy;

pub use policy::{threatened, BotPolicy, HeuristicBot, UniformBot};
