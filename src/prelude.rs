pub use crate::cli::{command, run, run_app};
pub use crate::domain::{
    book::{self, AddressBook},
    contact::{self, ContactDetails},
};
pub use crate::errors::AppError;
