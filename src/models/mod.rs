pub mod pot;
pub mod provider;
pub mod report;
pub mod snapshot;
pub mod transaction;

pub use pot::{NewPot, Pot, PotStatus};
pub use provider::{NewProvider, Provider};
pub use report::PotReport;
pub use snapshot::{NewSnapshot, Snapshot};
pub use transaction::{NewTransaction, Transaction, TransactionType};
