//! Request data: verbs, actions, envelopes and the requesting actor.

pub mod action;
pub mod envelope;

pub use action::*;
pub use envelope::*;
