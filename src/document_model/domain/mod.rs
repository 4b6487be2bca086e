/// Record types carried across the serialization boundary
mod component;
mod member;
mod metadata;
mod service;

pub use component::{Component, LicenseChoice, LicenseContent};
pub use member::Member;
pub use metadata::Metadata;
pub use service::Service;
