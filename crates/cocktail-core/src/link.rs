//! Link construction for hypermedia responses.
//!
//! Every `self` link is built from a [`BaseUrl`] that the caller derives from
//! the inbound request (or from configuration). Nothing in this crate infers
//! it on its own.

use std::fmt;

use crate::{Error, Result};

// ─── Resource kinds ──────────────────────────────────────────────────────────

/// The top-level collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
  Drinks,
  Bottles,
}

impl ResourceKind {
  /// Collection name, used both as the path segment and as the `_embedded`
  /// key.
  pub fn plural(self) -> &'static str {
    match self {
      Self::Drinks => "drinks",
      Self::Bottles => "bottles",
    }
  }

  pub fn singular(self) -> &'static str {
    match self {
      Self::Drinks => "drink",
      Self::Bottles => "bottle",
    }
  }
}

impl fmt::Display for ResourceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.plural())
  }
}

// ─── Base URL ────────────────────────────────────────────────────────────────

/// Scheme and authority that all links in a response are rooted at, e.g.
/// `http://example.org`. Never carries a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
  /// Build from a scheme and a host (which may include a port).
  pub fn from_parts(scheme: &str, host: &str) -> Self {
    Self::trimmed(format!("{scheme}://{host}"))
  }

  /// Validate a configured public URL.
  pub fn parse(url: &str) -> Result<Self> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
      return Err(Error::InvalidBaseUrl(url.to_owned()));
    }
    Ok(Self::trimmed(url.to_owned()))
  }

  fn trimmed(mut url: String) -> Self {
    while url.ends_with('/') {
      url.pop();
    }
    Self(url)
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// `{base}/{collection}`
  pub fn collection(&self, kind: ResourceKind) -> String {
    format!("{}/{}", self.0, kind.plural())
  }

  /// `{base}/{collection}/{id}`
  pub fn member(&self, kind: ResourceKind, id: i64) -> String {
    format!("{}/{}/{id}", self.0, kind.plural())
  }
}

impl fmt::Display for BaseUrl {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
