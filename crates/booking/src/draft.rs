//! # Booking Draft
//!
//! The in-progress, unsaved state of one rental request. Transitions update
//! the draft in place. Every check runs before anything is changed, so a
//! rejected step returns its error and leaves the draft exactly as it was.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty → DateSelected → SlotSelected → EquipmentEditing ⇄ PriceComputed → Submitted
//!                                                                        ↘ Abandoned
//! ```
//!
//! - Selecting a date always returns to `DateSelected` and forgets the slot.
//! - Equipment and duration changes recompute the quote immediately. Once a
//!   slot is chosen they move the draft to `PriceComputed`; before that the
//!   selection is only remembered.
//! - A failed submission goes back to `PriceComputed` carrying the error.
//! - `Submitted` and `Abandoned` are terminal.

use std::{collections::BTreeMap, fmt};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sportslink_core::{
    errors::{BookingError, BookingResult},
    models::{
        EquipmentId, FacilityId, RentalId, UserId,
        equipment::EquipmentItem,
        facility::Facility,
        rental::{RentalRequest, RentalResponse},
        time_slot::TimeSlot,
    },
};
use tracing::{debug, warn};

use crate::{
    catalog::EquipmentCatalog,
    pricing::{self, BookingDuration, CostBreakdown, Money},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftStage {
    Empty,
    DateSelected,
    SlotSelected,
    EquipmentEditing,
    PriceComputed,
    Submitted,
    Abandoned,
}

impl DraftStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DraftStage::Submitted | DraftStage::Abandoned)
    }

    fn has_slot(&self) -> bool {
        matches!(
            self,
            DraftStage::SlotSelected | DraftStage::EquipmentEditing | DraftStage::PriceComputed
        )
    }
}

impl fmt::Display for DraftStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedEquipment {
    pub id: EquipmentId,
    pub name: String,
    pub rate: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    facility_id: FacilityId,
    field_rate: Money,
    stage: DraftStage,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    duration: BookingDuration,
    equipment: BTreeMap<EquipmentId, SelectedEquipment>,
    quote: CostBreakdown,
    rental_id: Option<RentalId>,
    last_error: Option<String>,
}

impl BookingDraft {
    /// A fresh draft for `facility` with a one-hour duration.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the facility's hourly price is negative or not a number.
    pub fn new(facility: &Facility) -> BookingResult<Self> {
        let field_rate = Money::from_amount(facility.price_per_hour)?;
        let duration = BookingDuration::default();

        Ok(Self {
            facility_id: facility.id,
            field_rate,
            stage: DraftStage::Empty,
            date: None,
            start_time: None,
            duration,
            equipment: BTreeMap::new(),
            quote: pricing::quote(field_rate, duration, Vec::new()),
            rental_id: None,
            last_error: None,
        })
    }

    /// Rebuilds a draft from an existing rental so it can be edited.
    ///
    /// The backend reports rental equipment by name only; each name is mapped
    /// to the first catalog item carrying it and unknown names are skipped.
    pub fn from_rental(
        rental: &RentalResponse,
        facility: &Facility,
        catalog: &EquipmentCatalog,
    ) -> BookingResult<Self> {
        if rental.facility_id != facility.id {
            return Err(BookingError::invalid_input(format!(
                "Rental {} belongs to facility {}, not {}",
                rental.id, rental.facility_id, facility.id
            )));
        }

        let minutes = rental
            .end_time
            .signed_duration_since(rental.start_time)
            .num_minutes();
        let minutes = u32::try_from(minutes)
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or_else(|| {
                BookingError::invalid_input(format!("Rental {} does not end after it starts", rental.id))
            })?;

        let mut draft = Self::new(facility)?;
        draft.date = Some(rental.start_time.date());
        draft.start_time = Some(rental.start_time.time());
        draft.duration = BookingDuration::from_minutes(minutes);
        draft.rental_id = Some(rental.id);
        draft.stage = DraftStage::SlotSelected;

        for name in &rental.equipments {
            match catalog.find_by_name(name) {
                Some(item) => {
                    let rate = Money::from_amount(item.price_per_hour)?;
                    draft.equipment.entry(item.id).or_insert(SelectedEquipment {
                        id: item.id,
                        name: item.name.clone(),
                        rate,
                    });
                }
                None => debug!(rental_id = rental.id, %name, "rental equipment not in catalog"),
            }
        }

        draft.reprice();
        Ok(draft)
    }

    pub fn facility_id(&self) -> FacilityId {
        self.facility_id
    }

    pub fn stage(&self) -> DraftStage {
        self.stage
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    /// Start plus duration on the 24-hour clock.
    pub fn end_time(&self) -> Option<NaiveTime> {
        self.start_time
            .map(|start| pricing::end_time(start, self.duration))
    }

    pub fn duration(&self) -> BookingDuration {
        self.duration
    }

    /// Selected ids in ascending order.
    pub fn equipment_ids(&self) -> Vec<EquipmentId> {
        self.equipment.keys().copied().collect()
    }

    pub fn selected_equipment(&self) -> impl Iterator<Item = &SelectedEquipment> {
        self.equipment.values()
    }

    pub fn is_selected(&self, id: EquipmentId) -> bool {
        self.equipment.contains_key(&id)
    }

    pub fn quote(&self) -> &CostBreakdown {
        &self.quote
    }

    pub fn total(&self) -> Money {
        self.quote.total
    }

    /// Id of the rental this draft was submitted as, or is editing.
    pub fn rental_id(&self) -> Option<RentalId> {
        self.rental_id
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn ensure_live(&self, action: &str) -> BookingResult<()> {
        if self.stage.is_terminal() {
            return Err(BookingError::invalid_state(format!(
                "Cannot {} a booking that is {}",
                action, self.stage
            )));
        }
        Ok(())
    }

    fn ensure_slot(&self, action: &str) -> BookingResult<()> {
        if !self.stage.has_slot() {
            return Err(BookingError::invalid_state(format!(
                "Cannot {} a booking that is {}",
                action, self.stage
            )));
        }
        Ok(())
    }

    fn move_to(&mut self, stage: DraftStage) {
        debug!(facility_id = self.facility_id, from = %self.stage, to = %stage, "booking draft transition");
        self.stage = stage;
    }

    fn reprice(&mut self) {
        self.quote = pricing::quote(
            self.field_rate,
            self.duration,
            self.equipment.values().map(|item| item.rate),
        );

        if self.stage.has_slot() {
            self.move_to(DraftStage::PriceComputed);
        }
    }

    /// Chooses the booking day and clears any previously chosen slot.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a day before `today`, `InvalidState` once terminal.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> BookingResult<()> {
        self.ensure_live("change the date of")?;
        if date < today {
            return Err(BookingError::invalid_input(format!(
                "Cannot book {} because it is in the past",
                date
            )));
        }

        self.date = Some(date);
        self.start_time = None;
        self.move_to(DraftStage::DateSelected);
        Ok(())
    }

    pub fn select_slot(&mut self, slot: &TimeSlot) -> BookingResult<()> {
        self.ensure_live("choose a slot for")?;

        let Some(date) = self.date else {
            return Err(BookingError::invalid_state("Select a date before choosing a time slot"));
        };
        if slot.date != date {
            return Err(BookingError::invalid_input(format!(
                "Slot on {} does not match the selected date {}",
                slot.date, date
            )));
        }
        if slot.facility_id != self.facility_id {
            return Err(BookingError::invalid_input(format!(
                "Slot belongs to facility {}, not {}",
                slot.facility_id, self.facility_id
            )));
        }
        if !slot.available {
            return Err(BookingError::invalid_input(format!(
                "Slot {} on {} is already booked",
                slot.label(),
                slot.date
            )));
        }

        self.start_time = Some(slot.start_time());
        self.move_to(DraftStage::SlotSelected);
        Ok(())
    }

    pub fn begin_equipment_editing(&mut self) -> BookingResult<()> {
        self.ensure_live("edit equipment of")?;
        self.ensure_slot("edit equipment of")?;
        self.move_to(DraftStage::EquipmentEditing);
        Ok(())
    }

    /// Adds an item to the selection; adding it twice is a no-op.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for items that are not `AVAILABLE` or carry an invalid
    /// price. The draft is left untouched.
    pub fn add_equipment(&mut self, item: &EquipmentItem) -> BookingResult<()> {
        self.ensure_live("add equipment to")?;
        if !item.is_available() {
            return Err(BookingError::invalid_input(format!(
                "Equipment '{}' is not available",
                item.name
            )));
        }

        let rate = Money::from_amount(item.price_per_hour)?;
        self.equipment.entry(item.id).or_insert_with(|| SelectedEquipment {
            id: item.id,
            name: item.name.clone(),
            rate,
        });
        self.reprice();
        Ok(())
    }

    pub fn add_equipment_by_id(
        &mut self,
        id: EquipmentId,
        catalog: &EquipmentCatalog,
    ) -> BookingResult<()> {
        let item = catalog.require(id)?;
        self.add_equipment(item)
    }

    /// Removing an id that is not selected is a no-op.
    pub fn remove_equipment(&mut self, id: EquipmentId) -> BookingResult<()> {
        self.ensure_live("remove equipment from")?;
        self.equipment.remove(&id);
        self.reprice();
        Ok(())
    }

    pub fn set_duration(&mut self, duration: BookingDuration) -> BookingResult<()> {
        self.ensure_live("change the duration of")?;
        self.duration = duration;
        self.reprice();
        Ok(())
    }

    /// The request body for `POST /rentals`.
    ///
    /// The end timestamp is start plus duration, so a booking that runs past
    /// midnight ends on the following day.
    pub fn to_rental_request(&self, user_id: UserId) -> BookingResult<RentalRequest> {
        let (Some(date), Some(start_time)) = (self.date, self.start_time) else {
            return Err(BookingError::invalid_state(
                "Select a date and a time slot before submitting",
            ));
        };

        let start = date.and_time(start_time);
        Ok(RentalRequest {
            user_id,
            facility_id: self.facility_id,
            start_time: start,
            end_time: start + self.duration.as_delta(),
            equipment_ids: self.equipment_ids(),
        })
    }

    pub fn mark_submitted(&mut self, rental_id: RentalId) -> BookingResult<()> {
        self.ensure_live("submit")?;
        self.ensure_slot("submit")?;

        self.rental_id = Some(rental_id);
        self.last_error = None;
        self.move_to(DraftStage::Submitted);
        Ok(())
    }

    /// Records a rejected submission; the draft stays editable.
    pub fn mark_submission_failed(&mut self, reason: impl Into<String>) -> BookingResult<()> {
        self.ensure_live("submit")?;
        self.ensure_slot("submit")?;

        let reason = reason.into();
        warn!(facility_id = self.facility_id, %reason, "booking submission failed");
        self.last_error = Some(reason);
        self.move_to(DraftStage::PriceComputed);
        Ok(())
    }

    pub fn submission_error(&self) -> Option<BookingError> {
        self.last_error
            .as_ref()
            .map(|reason| BookingError::ExternalService(reason.clone()))
    }

    pub fn abandon(&mut self) -> BookingResult<()> {
        self.ensure_live("abandon")?;
        self.move_to(DraftStage::Abandoned);
        Ok(())
    }
}
