pub mod account;
pub mod error;
pub mod money;
pub mod operation;
pub mod traits;

pub use account::{Account, AccountConfig, AccountType};
pub use error::{Error, Rejection};
pub use money::Money;
pub use operation::{Operation, OperationKind};
pub use traits::{DeadLetterQueue, OutputRepository};
