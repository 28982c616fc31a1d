//! Explanation-to-feedback engine for student predictions.
//!
//! Takes the loosely formatted explanation string attached to a model
//! prediction (performance score or dropout probability), re-derives the
//! pedagogically correct sign of each mentioned factor, and synthesizes
//! a coaching message with ranked factors and actionable suggestions.
//!
//! The engine is pure and synchronous: no I/O, no shared state, and no
//! failure mode — every input yields a complete [`types::FeedbackMessage`].
//! Entry points live in [`compose`].

pub mod bounds;
pub mod compose;
pub mod extract;
pub mod picker;
pub mod resolve;
pub mod sentiment;
pub mod suggest;
pub mod types;

pub use compose::{
    dropout_feedback, dropout_feedback_with, performance_feedback, performance_feedback_with,
};
pub use types::{FeedbackMessage, ParsedFeature};
