//! Resource identifier classification.
//!
//! Identifiers are `/`-separated paths. A trailing separator (or the root `/`
//! itself) marks a container; anything else is a leaf.

use crate::error::ErrorCode;

/// The path separator.
pub const SEPARATOR: char = '/';

/// Whether an identifier addresses a container or a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceShape {
    Container,
    Leaf,
}

/// Returns `false` for an empty identifier.
pub fn is_valid(identifier: &str) -> bool {
    !identifier.is_empty()
}

/// Returns `true` when the identifier ends with a separator.
pub fn is_container(identifier: &str) -> bool {
    identifier.ends_with(SEPARATOR)
}

/// Classifies a non-empty identifier.
///
/// # Errors
///
/// `RESOURCE_NOT_FOUND` when the identifier is empty.
pub fn classify(identifier: &str) -> Result<ResourceShape, ErrorCode> {
    if !is_valid(identifier) {
        return Err(ErrorCode::ResourceNotFound);
    }
    if is_container(identifier) {
        Ok(ResourceShape::Container)
    } else {
        Ok(ResourceShape::Leaf)
    }
}

/// An identifier split into its parent path and resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceAddress<'a> {
    /// Everything up to the final separator. Containers keep the whole identifier.
    pub path: &'a str,
    /// The final segment of a leaf; `None` for containers.
    pub resource: Option<&'a str>,
}

impl<'a> ResourceAddress<'a> {
    pub fn is_container(&self) -> bool {
        self.resource.is_none()
    }
}

/// Checks a `(path, resource)` pair.
///
/// # Errors
///
/// `INVALID_RESOURCE_PATH` for an empty path, then `INVALID_RESOURCE` for an empty resource.
pub fn validate_segments(path: &str, resource: &str) -> Result<(), ErrorCode> {
    if path.is_empty() {
        Err(ErrorCode::InvalidResourcePath)
    } else if resource.is_empty() {
        Err(ErrorCode::InvalidResource)
    } else {
        Ok(())
    }
}

/// Splits an identifier on its final separator.
///
/// A leaf directly under the root (`/name`) or with no separator at all has an
/// empty path and is rejected.
pub fn split(identifier: &str) -> Result<ResourceAddress<'_>, ErrorCode> {
    if identifier.is_empty() {
        return Err(ErrorCode::InvalidResourcePath);
    }
    if is_container(identifier) {
        return Ok(ResourceAddress { path: identifier, resource: None });
    }

    let (path, resource) = match identifier.rfind(SEPARATOR) {
        Some(idx) => (&identifier[..idx], &identifier[idx + 1..]),
        None => ("", identifier),
    };
    validate_segments(path, resource)?;
    Ok(ResourceAddress { path, resource: Some(resource) })
}
