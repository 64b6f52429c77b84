//! State the presentation layer renders from.

pub mod mvi;
pub mod spin;
