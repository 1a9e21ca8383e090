//! Quick Translate - terminal translation widget
//!
//! Pick a source and target language, enter text, and get it translated by the
//! public MyMemory API. The session state machine, the view and the requester
//! are independent of the terminal so they can be driven and tested directly.

pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod session;
pub mod translate;
pub mod view;
pub mod widget;
