//! Data Transfer Objects for form input and page payloads.
//!
//! Form submissions arrive `application/x-www-form-urlencoded`; every page
//! is answered as a JSON view model.

pub mod form_dto;
pub mod page_dto;

pub use form_dto::*;
pub use page_dto::*;
