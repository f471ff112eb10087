pub mod rest;
pub mod source;
pub mod types;

pub use rest::RestCountriesSource;
pub use source::{CountrySource, SourceError};
pub use types::{Country, CountryName, Currency, Flags};
