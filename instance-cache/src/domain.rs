use std::fmt;
use uuid::Uuid;

/// Key of a cached instance.
///
/// Any string or integer works, but ids share one keyspace with every other
/// user of the store, so [`InstanceId::random`] is the safe choice when the
/// caller has no globally unique id of its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh v4 UUID id
    pub fn random() -> Self {
        Self::from(Uuid::new_v4())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for InstanceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&InstanceId> for InstanceId {
    fn from(id: &InstanceId) -> Self {
        id.clone()
    }
}

impl From<Uuid> for InstanceId {
    fn from(id: Uuid) -> Self {
        Self(id.hyphenated().to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for InstanceId {
                fn from(id: $ty) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u32, u64, i32, i64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_string_ids_share_keyspace() {
        assert_eq!(InstanceId::from(42u64), InstanceId::from("42"));
        assert_eq!(InstanceId::from(-7i32).as_str(), "-7");
    }

    #[test]
    fn test_uuid_id_is_hyphenated() {
        let uuid = Uuid::new_v4();
        let id = InstanceId::from(uuid);
        assert_eq!(id.as_str(), uuid.to_string());
        assert_eq!(id.as_str().len(), 36);
    }

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(InstanceId::random(), InstanceId::random());
    }
}
