use std::fmt;
use std::str::FromStr;

/// Business record types managed by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Party,
    Staff,
    Product,
    Order,
    Payment,
    Attendance,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Party,
        EntityKind::Staff,
        EntityKind::Product,
        EntityKind::Order,
        EntityKind::Payment,
        EntityKind::Attendance,
    ];

    /// Singular lower-case name, as used in list paths and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Party => "party",
            EntityKind::Staff => "staff",
            EntityKind::Product => "product",
            EntityKind::Order => "order",
            EntityKind::Payment => "payment",
            EntityKind::Attendance => "attendance",
        }
    }

    /// Collection segment for create/update/delete (`/{resource}[/{id}]`).
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Party => "parties",
            EntityKind::Staff => "staffs",
            EntityKind::Product => "products",
            EntityKind::Order => "orders",
            EntityKind::Payment => "payments",
            EntityKind::Attendance => "attendances",
        }
    }

    /// Read endpoint scoped to the records one user owns.
    pub fn list_path(&self, user_id: &str) -> String {
        match self {
            EntityKind::Party | EntityKind::Product | EntityKind::Order => {
                format!("/{}/creator/{}", self.as_str(), user_id)
            }
            EntityKind::Staff | EntityKind::Payment | EntityKind::Attendance => {
                format!("/{}/{}", self.as_str(), user_id)
            }
        }
    }

    /// Path for a mutating call on this entity.
    pub fn item_path(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("/{}/{}", self.resource(), id),
            None => format!("/{}", self.resource()),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity type '{0}'")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered || kind.resource() == lowered)
            .ok_or(UnknownEntityKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singular_and_plural() {
        assert_eq!("party".parse::<EntityKind>(), Ok(EntityKind::Party));
        assert_eq!("Parties".parse::<EntityKind>(), Ok(EntityKind::Party));
        assert_eq!("staff".parse::<EntityKind>(), Ok(EntityKind::Staff));
        assert!("invoice".parse::<EntityKind>().is_err());
    }

    #[test]
    fn paths() {
        assert_eq!(EntityKind::Party.list_path("4"), "/party/creator/4");
        assert_eq!(EntityKind::Staff.list_path("4"), "/staff/4");
        assert_eq!(EntityKind::Party.item_path(None), "/parties");
        assert_eq!(EntityKind::Staff.item_path(Some("7")), "/staffs/7");
    }
}
