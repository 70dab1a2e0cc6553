//! REST API helpers for the clinic backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against
//! [`config::api_base`](crate::config::api_base).
//! Native builds: every call resolves to [`ApiError::Unavailable`] so page
//! logic stays compilable and testable off the browser.
//!
//! ERROR HANDLING
//! ==============
//! `GET` failures carry a generic `GET {path} failed` message. `POST` failures
//! carry the response body text so backend validation messages reach the
//! toast verbatim, falling back to `POST {path} failed` for empty bodies.
//! No retries, timeouts, or auth headers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Appointment, Invoice, NewAppointment, NewOwner, NewPet, Owner, Pet, Service};

pub const OWNERS_PATH: &str = "/api/owners";
pub const PETS_PATH: &str = "/api/pets";
pub const SERVICES_PATH: &str = "/api/services";
pub const APPOINTMENTS_PATH: &str = "/api/appointments";
pub const INVOICES_PATH: &str = "/api/invoices";

#[cfg(any(test, feature = "csr"))]
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

fn complete_appointment_path(appointment_id: i64) -> String {
    format!("{APPOINTMENTS_PATH}/{appointment_id}/complete")
}

fn create_invoice_path(appointment_id: i64, paid: bool) -> String {
    format!("{INVOICES_PATH}?appt_id={appointment_id}&paid={paid}")
}

#[cfg(any(test, feature = "csr"))]
fn get_failed_message(path: &str) -> String {
    format!("GET {path} failed")
}

#[cfg(any(test, feature = "csr"))]
fn post_failed_message(path: &str, body: &str) -> String {
    if body.trim().is_empty() { format!("POST {path} failed") } else { body.to_owned() }
}

#[cfg(any(test, feature = "csr"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue `GET {base}{path}` with caching disabled and decode the JSON body.
///
/// # Errors
///
/// [`ApiError::Failed`] on non-2xx, [`ApiError::Network`] when the request or
/// body read fails, [`ApiError::Decode`] on shape mismatch.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint_url(crate::config::api_base(), path);
        let resp = gloo_net::http::Request::get(&url)
            .cache(web_sys::RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            log::warn!("GET {path} -> {}", resp.status());
            return Err(ApiError::Failed { status: resp.status(), message: get_failed_message(path) });
        }
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Issue `POST {base}{path}` with a JSON body and decode the JSON response.
///
/// # Errors
///
/// [`ApiError::Failed`] with the response text on non-2xx,
/// [`ApiError::Network`] when the request or body read fails,
/// [`ApiError::Decode`] when the payload cannot be encoded or the response
/// cannot be decoded.
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint_url(crate::config::api_base(), path);
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Decode(format!("request body: {e}")))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            log::warn!("POST {path} -> {status}");
            return Err(ApiError::Failed { status, message: post_failed_message(path, &text) });
        }
        decode_body(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/owners`.
///
/// # Errors
///
/// See [`get`].
pub async fn list_owners() -> Result<Vec<Owner>, ApiError> {
    get(OWNERS_PATH).await
}

/// `POST /api/owners`.
///
/// # Errors
///
/// See [`post`].
pub async fn create_owner(owner: &NewOwner) -> Result<Owner, ApiError> {
    post(OWNERS_PATH, owner).await
}

/// `GET /api/pets`.
///
/// # Errors
///
/// See [`get`].
pub async fn list_pets() -> Result<Vec<Pet>, ApiError> {
    get(PETS_PATH).await
}

/// `POST /api/pets`.
///
/// # Errors
///
/// See [`post`].
pub async fn create_pet(pet: &NewPet) -> Result<Pet, ApiError> {
    post(PETS_PATH, pet).await
}

/// `GET /api/services`.
///
/// # Errors
///
/// See [`get`].
pub async fn list_services() -> Result<Vec<Service>, ApiError> {
    get(SERVICES_PATH).await
}

/// `GET /api/appointments`.
///
/// # Errors
///
/// See [`get`].
pub async fn list_appointments() -> Result<Vec<Appointment>, ApiError> {
    get(APPOINTMENTS_PATH).await
}

/// `POST /api/appointments`.
///
/// # Errors
///
/// See [`post`].
pub async fn create_appointment(appointment: &NewAppointment) -> Result<Appointment, ApiError> {
    post(APPOINTMENTS_PATH, appointment).await
}

/// `POST /api/appointments/{id}/complete` with an empty object body.
///
/// # Errors
///
/// See [`post`].
pub async fn complete_appointment(appointment_id: i64) -> Result<Appointment, ApiError> {
    post(&complete_appointment_path(appointment_id), &serde_json::json!({})).await
}

/// `GET /api/invoices`.
///
/// # Errors
///
/// See [`get`].
pub async fn list_invoices() -> Result<Vec<Invoice>, ApiError> {
    get(INVOICES_PATH).await
}

/// `POST /api/invoices?appt_id=&paid=`. The backend computes the total.
///
/// # Errors
///
/// See [`post`].
pub async fn create_invoice(appointment_id: i64, paid: bool) -> Result<Invoice, ApiError> {
    post(&create_invoice_path(appointment_id, paid), &serde_json::json!({})).await
}
