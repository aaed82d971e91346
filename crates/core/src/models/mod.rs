pub mod equipment;
pub mod facility;
pub mod payment;
pub mod rental;
pub mod suggestion;
pub mod time_slot;

/// Backend identifiers are 64-bit database keys.
pub type FacilityId = i64;
pub type EquipmentId = i64;
pub type RentalId = i64;
pub type UserId = i64;
