//! Decompose hrefs into URL components and recompose them.
//!
//! A [`UrlComposer`] wraps one [`LinkSource`], parses its href once into a
//! [`ParsedUrl`] with defaults for missing pieces, and builds strings from any
//! ordered subset of components via [`UrlComposer::build`].

pub mod config;
pub mod logging;

pub mod composer;
pub mod error;
pub mod link;
pub mod url_model;

pub use composer::{LinkAttributes, UrlComposer};
pub use error::ComposeError;
pub use link::{AnchorNode, Link, LinkSource};
pub use url_model::{parse_href, ComponentKey, ParsedUrl, UrlDefaults};
