//! # rowcheck-validators
//!
//! Regex-based format validators: [`EmailValidator`] and [`PhoneValidator`].
//!
//! Both locate their column by header synonym, skip empty cells and short
//! rows, and flag invalid entries red for the highlighting layer.

mod email;
mod phone;

pub use email::EmailValidator;
pub use phone::PhoneValidator;
