// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Id

/// IDs that are unique across one run of the model
///
/// Each [`Entity`](crate::entity::Entity) is given a unique ID when it is
/// created. IDs up to and including [ROOT](crate::ROOT) are reserved.
#[derive(Copy, Clone, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Id(pub u64);

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
