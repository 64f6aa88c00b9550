pub mod account;
pub mod api_descriptor;
pub mod dto;
pub mod error;
pub use account::{Account, AccountType};
pub use api_descriptor::{api_descriptor, ApiDescriptor};
pub use error::{AccountError, Error};
