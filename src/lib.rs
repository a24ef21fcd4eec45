// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod error;
mod inn;
mod input;
mod observability;
mod secondary_validation;
mod service;

// This is the public API of the INN validation library
pub use config::{SecondaryValidator, ValidatorConfig};
pub use error::InnError;
pub use inn::{Inn, InnKind};
pub use input::DigitInput;
pub use observability::labels::Labels;
pub use secondary_validation::{
    FnValidator, IndividualInnChecksum, LegalEntityInnChecksum, RussianInnChecksum, Validator,
};
pub use service::InnValidatorService;
