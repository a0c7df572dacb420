//! Operator sessions

pub mod label_session;

pub use label_session::{GenerateOutcome, LabelSession};
