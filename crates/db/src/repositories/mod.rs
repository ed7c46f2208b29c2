//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Every operation takes the acting user's ID explicitly and
//! scopes its queries to that user's own rows.

pub mod profile;
pub mod report;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use profile::{ProfileError, ProfileRepository, SalaryUpdate};
pub use report::{ReportError, ReportRepository};
pub use transaction::{
    TransactionError, TransactionListFilter, TransactionRepository, UpdateTransactionInput,
};
pub use user::{NewUserAccount, UserRepository};
pub use wallet::{WalletError, WalletRepository};
