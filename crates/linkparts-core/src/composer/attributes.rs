//! Read-only snapshot of a composed link.

use serde::Serialize;

/// The attributes consumers usually want from one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAttributes<N> {
    pub request_uri: String,
    pub node: N,
    pub href: String,
    pub base: String,
    pub path: String,
    pub next: String,
}
