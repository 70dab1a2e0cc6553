//! Wire DTOs for the clinic REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly. Numeric ids are decoded
//! leniently (integer-valued floats accepted) and owner ids are normalized to
//! strings so client-side owner filtering can compare them verbatim. A
//! `null` services list or paid flag decodes to its default.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A registered pet owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    /// Owner identifier (UUID string on the reference backend).
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A pet belonging to an owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_id_string")]
    pub owner_id: String,
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub breed: Option<String>,
    /// Date of birth as `YYYY-MM-DD`.
    #[serde(default)]
    pub dob: Option<String>,
}

/// A billable clinic offering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Appointment lifecycle as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Done,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub pet_id: i64,
    pub vet_name: String,
    /// ISO-8601 local datetime, e.g. `2026-03-05T14:30:00`.
    pub datetime: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub services: Vec<Service>,
}

impl Appointment {
    pub fn is_done(&self) -> bool {
        self.status == AppointmentStatus::Done
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub appointment_id: i64,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub paid: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// `POST /api/owners` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewOwner {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// `POST /api/pets` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub dob: String,
    pub owner_id: String,
}

/// `POST /api/appointments` payload. Prices are never sent; the backend
/// resolves them from `service_ids`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAppointment {
    pub pet_id: i64,
    pub vet_name: String,
    pub datetime: String,
    pub service_ids: Vec<i64>,
}

/// Treat an explicit `null` like a missing key.
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
