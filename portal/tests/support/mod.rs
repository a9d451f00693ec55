//! Shared helpers for portal integration tests.
//!
//! Each file under `tests/` compiles as its own crate, so not every helper
//! is used everywhere.
#![allow(dead_code)]

pub mod recording_server;

use serde_json::{Value, json};

/// Address record as the API serialises it.
pub fn address_json(id: u64, user_id: &str, city: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "addressLine1": "12 MG Road",
        "addressLine2": null,
        "city": city,
        "postalCode": "411001",
        "country": "India",
        "phoneNumber": "+91 20 5555 0100",
        "alternatePhoneNumber": null,
        "addressType": "home",
        "createdAt": "2026-02-01T10:00:00Z",
        "updatedAt": "2026-02-01T10:00:00Z",
        "deletedAt": null
    })
}

/// Pagination envelope wrapping `data`.
pub fn envelope(data: Vec<Value>, total: u64, page: u64, page_size: u64, total_pages: u64) -> Value {
    json!({
        "data": data,
        "meta": {
            "total": total,
            "page": page,
            "pageSize": page_size,
            "totalPages": total_pages
        }
    })
}
