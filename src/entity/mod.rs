//! Entity kinds, record types and demo datasets.

mod kind;
mod model;
pub mod sample;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use kind::{EntityKind, UnknownEntityKind};
pub use model::{Order, Party, Payment, Product, Staff};

/// A record that a collection screen can list, search and reconcile.
pub trait Entity:
    Debug + Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    const KIND: EntityKind;

    /// Server-assigned identity.
    fn id(&self) -> &str;

    /// Fields matched by the screen's search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Records shown in demo mode.
    fn samples() -> Vec<Self>;

    /// Case-insensitive substring match over `search_fields`.
    /// An empty or blank needle matches everything.
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Entity for Party {
    const KIND: EntityKind = EntityKind::Party;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.party_name.as_str()];
        fields.extend(self.gst_number.as_deref());
        fields
    }

    fn samples() -> Vec<Self> {
        sample::parties()
    }
}

impl Entity for Staff {
    const KIND: EntityKind = EntityKind::Staff;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.designation.as_str(),
            self.phone.as_str(),
        ];
        fields.extend(self.email.as_deref());
        fields
    }

    fn samples() -> Vec<Self> {
        sample::staff()
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.product_name.as_str()];
        fields.extend(self.category.as_deref());
        fields
    }

    fn samples() -> Vec<Self> {
        sample::products()
    }
}

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.party_name.as_str(),
            self.product_name.as_str(),
            self.status.as_str(),
        ]
    }

    fn samples() -> Vec<Self> {
        sample::orders()
    }
}

impl Entity for Payment {
    const KIND: EntityKind = EntityKind::Payment;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.party_name.as_str(), self.payment_mode.as_str()];
        fields.extend(self.reference.as_deref());
        fields
    }

    fn samples() -> Vec<Self> {
        sample::payments()
    }
}
