// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Path-addressed differential elements.

/// One entry of a differential: a path plus an opaque, caller-owned payload.
///
/// The payload type is never inspected by this crate. Synthetic elements are
/// produced only by the normalizer and always carry `payload: None`; consumers
/// that aggregate payload meaning should skip them (see
/// [`originals`](crate::inspect::originals)).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferentialElement<P> {
    /// Delimiter-segmented node path.
    pub path: String,
    /// Opaque domain payload; absent for placeholders.
    ///
    /// With the `serde` feature, a missing `payload` key and an explicit
    /// `null` both read as `None`, and `None` is written back as `null`. Wrap
    /// the payload type if a literal `null` payload must survive a round trip.
    pub payload: Option<P>,
    /// True only for elements inserted by the normalizer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub synthetic: bool,
}

impl<P> DifferentialElement<P> {
    /// An original element carrying `payload`.
    pub fn new(path: impl Into<String>, payload: P) -> Self {
        Self {
            path: path.into(),
            payload: Some(payload),
            synthetic: false,
        }
    }

    /// An original element without a payload.
    pub fn bare(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            payload: None,
            synthetic: false,
        }
    }

    /// A placeholder inserted to complete the tree skeleton.
    pub fn synthetic(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            payload: None,
            synthetic: true,
        }
    }

    /// Borrow the path.
    pub fn path(&self) -> &str {
        &self.path
    }
}
