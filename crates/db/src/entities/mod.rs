//! `SeaORM` entity definitions.

pub mod sea_orm_active_enums;
pub mod transactions;
pub mod user_profiles;
pub mod users;
pub mod wallets;
