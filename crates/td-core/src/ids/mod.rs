//! Identifier wrapper types.

mod account_id;
mod id_macro;

pub use account_id::AccountId;
pub(crate) use id_macro::impl_id;
