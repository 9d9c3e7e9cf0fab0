// Application layer: the ledger service every client (menu, subcommands)
// goes through, plus the report shapes it returns.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
