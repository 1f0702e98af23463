pub mod account;
pub mod roster;
pub mod value;

pub use account::{ACCOUNT_COLUMNS, AccountRecord};
pub use roster::{ROSTER_COLUMNS, RosterRecord};
pub use value::SqlValue;
