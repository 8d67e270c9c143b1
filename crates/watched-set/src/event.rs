//! Watch notification kinds.

/// A notification delivered to one of the predicates.
///
/// Create, update, and delete come from the primary watch and are the
/// only kinds that change membership. Generic events come from
/// secondary sources with no API change behind them and are the only
/// kind the read side serves.
#[derive(Debug, Clone, Copy)]
pub enum ResourceEvent<'a, K> {
    /// A resource appeared
    Created(&'a K),

    /// A resource changed; carries the object's new state
    Updated(&'a K),

    /// A resource was removed
    Deleted(&'a K),

    /// An out-of-band notification about a resource
    Generic(&'a K),
}

impl<'a, K> ResourceEvent<'a, K> {
    /// The object whose identity this event is about.
    pub fn object(&self) -> &'a K {
        match *self {
            Self::Created(obj) | Self::Updated(obj) | Self::Deleted(obj) | Self::Generic(obj) => {
                obj
            }
        }
    }
}
