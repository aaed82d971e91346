use serde::{Deserialize, Serialize};
use sportslink_core::{
    errors::{BookingError, BookingResult},
    models::{
        EquipmentId,
        equipment::{EquipmentItem, EquipmentType},
    },
};

/// A facility's equipment as fetched from the backend.
///
/// The catalog is the source of truth for which equipment exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentCatalog {
    items: Vec<EquipmentItem>,
}

/// Filters of the equipment picker. The default shows available items of
/// every type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentFilter {
    pub show_available: bool,
    pub show_unavailable: bool,
    pub equipment_type: Option<EquipmentType>,
}

impl Default for EquipmentFilter {
    fn default() -> Self {
        Self {
            show_available: true,
            show_unavailable: false,
            equipment_type: None,
        }
    }
}

impl EquipmentFilter {
    pub fn matches(&self, item: &EquipmentItem) -> bool {
        let status_match = if item.is_available() {
            self.show_available
        } else {
            self.show_unavailable
        };
        let type_match = self
            .equipment_type
            .as_ref()
            .is_none_or(|wanted| *wanted == item.equipment_type);

        status_match && type_match
    }
}

impl EquipmentCatalog {
    pub fn new(items: Vec<EquipmentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[EquipmentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: EquipmentId) -> Option<&EquipmentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Like [`get`](Self::get) but a missing id is an error.
    pub fn require(&self, id: EquipmentId) -> BookingResult<&EquipmentItem> {
        self.get(id)
            .ok_or_else(|| BookingError::NotFound(format!("Equipment with ID {} not found", id)))
    }

    /// First item carrying exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&EquipmentItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn filter<'a>(
        &'a self,
        filter: &'a EquipmentFilter,
    ) -> impl Iterator<Item = &'a EquipmentItem> + 'a {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Items whose ids are listed, in catalog order; unknown ids are skipped.
    pub fn select<'a>(&'a self, ids: &'a [EquipmentId]) -> impl Iterator<Item = &'a EquipmentItem> + 'a {
        self.items.iter().filter(move |item| ids.contains(&item.id))
    }
}

impl From<Vec<EquipmentItem>> for EquipmentCatalog {
    fn from(items: Vec<EquipmentItem>) -> Self {
        Self::new(items)
    }
}
