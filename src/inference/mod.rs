//! Clients for the external inference collaborators

pub mod caption;
pub mod translate;

pub use caption::CaptionClient;
pub use translate::TranslationClient;
