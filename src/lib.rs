//! Phone number validation for a single serverless endpoint.
//!
//! With an API key (from the deployment or the caller) the number is sent to
//! one of three providers and the answer is normalized into a
//! [`ValidationResult`]. Without a key the number is checked against a
//! compiled-in dialing-code table instead.

pub mod basic;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod handler;
pub mod providers;
pub mod registry;
pub mod validation_result;
pub(crate) mod string_util;

pub use basic::basic_validation;
pub use config::Config;
pub use fetcher::{JsonFetcher, ReqwestFetcher};
pub use handler::{handle, HandlerRequest, HandlerResponse, PhoneValidationHandler};
pub use providers::{Provider, ProviderAdapter};
pub use registry::{CountryEntry, CountryRegistry, Region, COUNTRY_REGISTRY};
pub use validation_result::ValidationResult;

#[cfg(test)]
mod tests;
