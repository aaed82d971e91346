use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string, to_value};
use sportslink_core::models::{
    equipment::{EquipmentItem, EquipmentStatus, EquipmentType},
    facility::{Facility, Sport, parse_hour, parse_time_of_day},
    payment::PaymentStatus,
    rental::{RentalRequest, RentalResponse, RentalStatus, naive_local},
    suggestion::{OwnerSuggestion, SuggestionPriority},
    time_slot::TimeSlot,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_rental_request_serialization() {
    let request = RentalRequest {
        user_id: 3,
        facility_id: 42,
        start_time: at(2025, 11, 27, 18, 0),
        end_time: at(2025, 11, 27, 20, 0),
        equipment_ids: vec![1, 2],
    };

    let value = to_value(&request).expect("Failed to serialize rental request");

    assert_eq!(
        value,
        json!({
            "userId": 3,
            "facilityId": 42,
            "startTime": "2025-11-27T18:00:00",
            "endTime": "2025-11-27T20:00:00",
            "equipmentIds": [1, 2]
        })
    );
    assert!(!value.to_string().contains('Z'));
}

#[rstest]
#[case("2025-11-27T18:00:00", at(2025, 11, 27, 18, 0))]
#[case("2025-11-27T18:00", at(2025, 11, 27, 18, 0))]
#[case("2025-11-27T18:30:00.000", at(2025, 11, 27, 18, 30))]
fn test_naive_local_parse_variants(#[case] raw: &str, #[case] expected: NaiveDateTime) {
    assert_eq!(naive_local::parse(raw), Some(expected));
}

#[test]
fn test_naive_local_rejects_garbage() {
    assert_eq!(naive_local::parse("27/11/2025 18:00"), None);

    let result: Result<RentalResponse, _> = from_str(
        r#"{"id":1,"facilityId":2,"startTime":"tomorrow","endTime":"2025-11-27T20:00:00","status":"CONFIRMED"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_rental_response_deserialization() {
    let json = r#"{
        "id": 7,
        "facilityId": 42,
        "startTime": "2025-12-01T10:00:00",
        "endTime": "2025-12-01T11:30:00",
        "status": "CONFIRMED",
        "equipments": ["Vests", "Football"]
    }"#;

    let rental: RentalResponse = from_str(json).expect("Failed to deserialize rental");

    assert_eq!(rental.id, 7);
    assert_eq!(rental.start_time, at(2025, 12, 1, 10, 0));
    assert_eq!(rental.end_time, at(2025, 12, 1, 11, 30));
    assert_eq!(rental.status, RentalStatus::Confirmed);
    assert_eq!(rental.equipments, vec!["Vests", "Football"]);
    assert!(rental.is_active());
}

#[rstest]
#[case("\"CANCELLED\"", RentalStatus::Cancelled)]
#[case("\"COMPLETED\"", RentalStatus::Completed)]
#[case("\"PENDING_REVIEW\"", RentalStatus::Unknown)]
fn test_rental_status_deserialization(#[case] raw: &str, #[case] expected: RentalStatus) {
    assert_eq!(from_str::<RentalStatus>(raw).unwrap(), expected);
}

#[rstest]
#[case("football", Sport::Football)]
#[case("PADEL", Sport::Padel)]
#[case(" Tennis ", Sport::Tennis)]
fn test_sport_from_str(#[case] raw: &str, #[case] expected: Sport) {
    assert_eq!(raw.parse::<Sport>().unwrap(), expected);
}

#[test]
fn test_sport_from_str_unknown() {
    assert!("curling".parse::<Sport>().is_err());
    assert_eq!(Sport::Basketball.to_string(), "BASKETBALL");
}

#[test]
fn test_facility_deserialization() {
    let json = r#"{
        "id": 42,
        "name": "Padel Club Aveiro",
        "city": "Aveiro",
        "address": "Av. Dr. Lourenço Peixinho 10",
        "openingTime": "08:00:00",
        "closingTime": "23:00:00",
        "pricePerHour": 18.5,
        "sports": ["PADEL", "TENNIS"],
        "imageUrl": null,
        "description": "Indoor courts",
        "rating": 4.7,
        "status": "ACTIVE"
    }"#;

    let facility: Facility = from_str(json).expect("Failed to deserialize facility");

    assert_eq!(facility.operating_hours(), Some((8, 23)));
    assert_eq!(
        facility.operating_times(),
        Some((
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap()
        ))
    );
    assert_eq!(facility.primary_sport(), Some(Sport::Padel));
    assert_eq!(facility.price_per_hour, 18.5);
}

#[test]
fn test_facility_without_sports_or_hours() {
    let json = r#"{
        "id": 1,
        "name": "Campo",
        "city": "Porto",
        "address": "Rua 1",
        "openingTime": null,
        "closingTime": "22:00",
        "pricePerHour": 10.0,
        "imageUrl": null,
        "description": null,
        "rating": null,
        "status": null
    }"#;

    let facility: Facility = from_str(json).unwrap();

    assert!(facility.sports.is_empty());
    assert_eq!(facility.operating_hours(), None);
}

#[rstest]
#[case("09:00", Some(9))]
#[case("22:00:00", Some(22))]
#[case("24:00", Some(24))]
#[case("25:00", None)]
#[case("noon", None)]
fn test_parse_hour(#[case] raw: &str, #[case] expected: Option<u32>) {
    assert_eq!(parse_hour(raw), expected);
}

#[rstest]
#[case("09:30", NaiveTime::from_hms_opt(9, 30, 0))]
#[case("22:15:00", NaiveTime::from_hms_opt(22, 15, 0))]
#[case("24:00", NaiveTime::from_hms_opt(23, 59, 59))]
#[case("25:00", None)]
#[case("noon", None)]
fn test_parse_time_of_day(#[case] raw: &str, #[case] expected: Option<NaiveTime>) {
    assert_eq!(parse_time_of_day(raw), expected);
}

#[test]
fn test_equipment_type_keeps_unknown_kinds() {
    let json = r#"{
        "id": 3,
        "name": "Swim Cap",
        "type": "CAP",
        "description": null,
        "quantity": 10,
        "pricePerHour": 0.5,
        "status": "AVAILABLE"
    }"#;

    let item: EquipmentItem = from_str(json).unwrap();

    assert_eq!(item.equipment_type, EquipmentType::Other("CAP".to_string()));
    assert!(item.is_available());
    assert!(to_string(&item).unwrap().contains(r#""type":"CAP""#));

    assert_eq!(EquipmentType::from("racket".to_string()), EquipmentType::Racket);
}

#[test]
fn test_equipment_status_maintenance_not_available() {
    let item: EquipmentItem = from_str(
        r#"{"id":1,"name":"Net","type":"NET","description":null,"quantity":1,"pricePerHour":4.0,"status":"MAINTENANCE"}"#,
    )
    .unwrap();

    assert_eq!(item.status, EquipmentStatus::Maintenance);
    assert!(!item.is_available());
}

#[test]
fn test_time_slot_labels() {
    let slot = TimeSlot {
        facility_id: 1,
        date: NaiveDate::from_ymd_opt(2025, 11, 27).unwrap(),
        start_hour: 9,
        available: true,
    };

    assert_eq!(slot.label(), "09:00");
    assert_eq!(slot.end_hour(), 10);
    assert_eq!(slot.start_time().to_string(), "09:00:00");
}

#[test]
fn test_owner_suggestion_priority_order() {
    let json = r#"{
        "type": "PRICING",
        "facilityId": 4,
        "facilityName": "Arena",
        "title": "Raise weekend prices",
        "description": "Weekend slots are always full",
        "priority": "HIGH",
        "potentialRevenue": 120.0
    }"#;

    let suggestion: OwnerSuggestion = from_str(json).unwrap();

    assert_eq!(suggestion.priority, SuggestionPriority::High);
    assert!(SuggestionPriority::High < SuggestionPriority::Medium);
    assert!(SuggestionPriority::Medium < SuggestionPriority::Low);
}

#[rstest]
#[case("SUCCEEDED", true)]
#[case("paid", true)]
#[case("PENDING", false)]
fn test_payment_status_is_paid(#[case] status: &str, #[case] paid: bool) {
    let payment = PaymentStatus {
        payment_id: Some(1),
        rental_id: 9,
        status: status.to_string(),
        amount: Some(51.0),
        currency: Some("eur".to_string()),
        receipt_url: None,
        customer_email: None,
    };

    assert_eq!(payment.is_paid(), paid);
}
