mod amount;
mod expense;
mod ledger;
mod shared;

pub use amount::*;
pub use expense::*;
pub use ledger::*;
pub use shared::*;
