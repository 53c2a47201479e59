//! Request and cache-line data shapes.
//!
//! The trace layer owns these values; the controller consumes only the id.
//! [`Req`] is one record of the request stream (id plus optional size and
//! operation metadata); [`CacheLine`] is the value shape for one retained
//! line. Entries are counted as unit-weight slots — `size` is carried for
//! trace fidelity and for callers experimenting with size-weighted lambda,
//! not consulted by the base policy.

use std::hash::Hash;

/// Operation recorded on a trace request.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OpKind {
    Read,
    Write,
}

/// One object-access request from the trace stream.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Req<K> {
    item_id: K,
    size: u64,
    op: Option<OpKind>,
}

impl<K> Req<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a unit-size request with no operation metadata.
    pub fn new(item_id: K) -> Self {
        Self {
            item_id,
            size: 1,
            op: None,
        }
    }

    /// Sets the object size in trace units.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Sets the recorded operation.
    pub fn with_op(mut self, op: OpKind) -> Self {
        self.op = Some(op);
        self
    }

    /// Returns the accessed object id.
    pub fn item_id(&self) -> &K {
        &self.item_id
    }

    /// Returns the object size in trace units (default 1).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the recorded operation, if any.
    pub fn op(&self) -> Option<OpKind> {
        self.op
    }
}

/// One retained cache line: the id plus the request metadata it was
/// admitted with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CacheLine<K> {
    item_id: K,
    size: u64,
    op: Option<OpKind>,
}

impl<K> CacheLine<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a unit-size line.
    pub fn new(item_id: K) -> Self {
        Self {
            item_id,
            size: 1,
            op: None,
        }
    }

    /// Builds the line for a request, copying its metadata.
    pub fn from_req(req: &Req<K>) -> Self {
        Self {
            item_id: req.item_id().clone(),
            size: req.size(),
            op: req.op(),
        }
    }

    /// Returns the line's object id.
    pub fn item_id(&self) -> &K {
        &self.item_id
    }

    /// Returns the admitted size in trace units.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the operation the line was admitted under, if any.
    pub fn op(&self) -> Option<OpKind> {
        self.op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn req_defaults_to_unit_size() {
        let req = Req::new(7u64);
        assert_eq!(*req.item_id(), 7);
        assert_eq!(req.size(), 1);
        assert_eq!(req.op(), None);
    }

    #[test]
    fn req_builder_setters() {
        let req = Req::new("obj").with_size(512).with_op(OpKind::Write);
        assert_eq!(req.size(), 512);
        assert_eq!(req.op(), Some(OpKind::Write));
    }

    #[test]
    fn cache_line_from_req_copies_metadata() {
        let req = Req::new(3u32).with_size(8).with_op(OpKind::Read);
        let line = CacheLine::from_req(&req);
        assert_eq!(*line.item_id(), 3);
        assert_eq!(line.size(), 8);
        assert_eq!(line.op(), Some(OpKind::Read));
    }
}
