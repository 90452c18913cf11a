// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use serde::{Deserialize, Serialize};

pub trait IdentifierMarkerName: Copy {
    const NAME: &'static str;
}

/// Marker-typed numeric identifier.
///
/// Worker and shift identifiers share the same representation but must never
/// be confused with one another; the zero-sized marker makes the mixup a
/// compile error.
#[repr(transparent)]
#[must_use]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Identifier<M>(u64, #[serde(skip)] core::marker::PhantomData<M>);

impl<M> Identifier<M> {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id, core::marker::PhantomData)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl<M> std::fmt::Display for Identifier<M>
where
    M: IdentifierMarkerName,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", M::NAME, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerMarker;

impl IdentifierMarkerName for WorkerMarker {
    const NAME: &'static str = "WorkerId";
}

pub type WorkerIdentifier = Identifier<WorkerMarker>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShiftMarker;

impl IdentifierMarkerName for ShiftMarker {
    const NAME: &'static str = "ShiftId";
}

pub type ShiftIdentifier = Identifier<ShiftMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_marker_name() {
        assert_eq!(WorkerIdentifier::new(7).to_string(), "WorkerId(7)");
        assert_eq!(ShiftIdentifier::new(2).to_string(), "ShiftId(2)");
    }

    #[test]
    fn test_ordering_follows_value() {
        let a = WorkerIdentifier::new(1);
        let b = WorkerIdentifier::new(5);
        assert!(a < b);
        assert_eq!(a, WorkerIdentifier::new(1));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ShiftIdentifier::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let back: ShiftIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
