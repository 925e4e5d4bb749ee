//! Domain layer - Core registry entities
//!
//! Plain data types for citizens and their audit log, independent of the
//! database layer. Validation lives here; persistence does not.

pub mod citoyen;
pub mod journalisation;

pub use citoyen::{Citoyen, NewCitoyen};
pub use journalisation::{Journalisation, NewJournalisation};
