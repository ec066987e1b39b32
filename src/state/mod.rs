//! Page-level state module

mod access_gate;
mod contact_form;
mod submission;

pub use access_gate::*;
pub use contact_form::*;
pub use submission::*;
