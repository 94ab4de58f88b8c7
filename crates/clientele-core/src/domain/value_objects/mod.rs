//! Domain value objects.

pub mod email;
pub mod gender;

pub use email::{Email, EmailError};
pub use gender::{Gender, GenderError};
