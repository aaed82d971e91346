#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use sportslink_core::models::{
    equipment::{EquipmentItem, EquipmentStatus, EquipmentType},
    facility::{Facility, Sport},
    rental::{RentalResponse, RentalStatus},
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn datetime(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").unwrap()
}

pub fn facility(id: i64, price_per_hour: f64) -> Facility {
    Facility {
        id,
        name: "Estádio Municipal".to_string(),
        city: "Aveiro".to_string(),
        address: "Rua do Campo 1".to_string(),
        opening_time: Some("09:00".to_string()),
        closing_time: Some("22:00".to_string()),
        price_per_hour,
        sports: vec![Sport::Football, Sport::Padel],
        image_url: None,
        description: None,
        rating: Some(4.5),
        status: Some("ACTIVE".to_string()),
    }
}

pub fn equipment(id: i64, name: &str, price_per_hour: f64, status: EquipmentStatus) -> EquipmentItem {
    EquipmentItem {
        id,
        name: name.to_string(),
        equipment_type: EquipmentType::Ball,
        description: None,
        quantity: 5,
        price_per_hour,
        status,
    }
}

pub fn available(id: i64, name: &str, price_per_hour: f64) -> EquipmentItem {
    equipment(id, name, price_per_hour, EquipmentStatus::Available)
}

pub fn rental(id: i64, facility_id: i64, start: &str, end: &str, equipments: &[&str]) -> RentalResponse {
    RentalResponse {
        id,
        facility_id,
        start_time: datetime(start),
        end_time: datetime(end),
        status: RentalStatus::Confirmed,
        equipments: equipments.iter().map(|name| name.to_string()).collect(),
    }
}
