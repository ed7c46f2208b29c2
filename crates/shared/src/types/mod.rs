//! Shared domain types.

pub mod id;
pub mod pagination;

pub use id::{ProfileId, TransactionId, UserId, WalletId};
pub use pagination::{PageMeta, PageRequest, PageResponse};
