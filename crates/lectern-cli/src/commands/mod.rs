//! Command implementations, one module per subcommand.

mod check;
mod generate;
mod index;
mod locate;
mod outline;
mod search;

pub use check::execute as check;
pub use generate::{GenerateOptions, execute as generate};
pub use index::execute as index;
pub use locate::execute as locate;
pub use outline::execute as outline;
pub use search::execute as search;
