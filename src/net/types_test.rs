use super::*;

// =============================================================
// Owner ids
// =============================================================

#[test]
fn owner_accepts_string_id() {
    let owner: Owner = serde_json::from_value(serde_json::json!({
        "id": "5f0c",
        "name": "Ada",
        "email": "a@x.com",
        "phone": "555"
    }))
    .unwrap();
    assert_eq!(owner.id, "5f0c");
}

#[test]
fn pet_owner_id_normalizes_numbers_to_strings() {
    let pet: Pet = serde_json::from_value(serde_json::json!({
        "id": 3,
        "owner_id": 42,
        "name": "Rex",
        "species": "Dog"
    }))
    .unwrap();
    assert_eq!(pet.owner_id, "42");
    assert_eq!(pet.breed, None);
    assert_eq!(pet.dob, None);
}

#[test]
fn pet_rejects_boolean_owner_id() {
    let result = serde_json::from_value::<Pet>(serde_json::json!({
        "id": 3,
        "owner_id": true,
        "name": "Rex",
        "species": "Dog"
    }));
    assert!(result.is_err());
}

// =============================================================
// Numeric ids
// =============================================================

#[test]
fn integer_valued_float_ids_are_accepted() {
    let service: Service =
        serde_json::from_value(serde_json::json!({ "id": 7.0, "name": "Vaccination", "price": 45.5 })).unwrap();
    assert_eq!(service.id, 7);
}

#[test]
fn fractional_ids_are_rejected() {
    let result = serde_json::from_value::<Service>(serde_json::json!({ "id": 7.5, "name": "X", "price": 1.0 }));
    assert!(result.is_err());
}

// =============================================================
// Appointments
// =============================================================

#[test]
fn appointment_status_uses_uppercase_wire_names() {
    assert_eq!(serde_json::to_string(&AppointmentStatus::Scheduled).unwrap(), "\"SCHEDULED\"");
    assert_eq!(serde_json::to_string(&AppointmentStatus::Done).unwrap(), "\"DONE\"");
}

#[test]
fn appointment_without_services_defaults_to_empty() {
    let appt: Appointment = serde_json::from_value(serde_json::json!({
        "id": 1,
        "pet_id": 3,
        "vet_name": "Dr. Who",
        "datetime": "2026-03-05T14:30:00",
        "status": "DONE"
    }))
    .unwrap();
    assert!(appt.services.is_empty());
    assert!(appt.is_done());
}

#[test]
fn appointment_with_null_services_decodes_as_empty() {
    let appts: Vec<Appointment> = serde_json::from_str(
        r#"[{"id":1,"pet_id":3,"vet_name":"Dr. Who","datetime":"2026-03-05T14:30:00","status":"SCHEDULED","services":null}]"#,
    )
    .unwrap();
    assert!(appts[0].services.is_empty());
}

// =============================================================
// Invoices
// =============================================================

#[test]
fn invoice_optional_fields_default() {
    let invoice: Invoice = serde_json::from_value(serde_json::json!({ "id": 9, "appointment_id": 1 })).unwrap();
    assert_eq!(invoice.total, None);
    assert!(!invoice.paid);
    assert_eq!(invoice.notes, None);
}

#[test]
fn invoice_null_paid_decodes_as_unpaid() {
    let invoice: Invoice =
        serde_json::from_str(r#"{"id":9,"appointment_id":1,"total":null,"paid":null,"notes":null}"#).unwrap();
    assert!(!invoice.paid);
    assert_eq!(invoice.total, None);
}

// =============================================================
// Create payloads
// =============================================================

#[test]
fn new_appointment_serializes_expected_shape() {
    let payload = NewAppointment {
        pet_id: 3,
        vet_name: "Dr. Sarah Johnson".to_owned(),
        datetime: "2026-03-05T14:30".to_owned(),
        service_ids: vec![1, 2],
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "pet_id": 3,
            "vet_name": "Dr. Sarah Johnson",
            "datetime": "2026-03-05T14:30",
            "service_ids": [1, 2]
        })
    );
}

#[test]
fn new_pet_serializes_owner_id_as_string() {
    let payload = NewPet {
        name: "Max".to_owned(),
        species: "Dog".to_owned(),
        breed: "Beagle".to_owned(),
        dob: "2020-01-02".to_owned(),
        owner_id: "o-1".to_owned(),
    };
    assert_eq!(serde_json::to_value(&payload).unwrap()["owner_id"], serde_json::json!("o-1"));
}
