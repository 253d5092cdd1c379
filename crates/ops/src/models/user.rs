//! Registered dashboard user model.

use chrono::NaiveDate;
use serde::Serialize;

use washboard_core::{Email, UserId};

/// A registered dashboard user.
///
/// Users are created by registration and deleted by deregistration; they
/// are never updated. They carry no foreign key to pickup orders - the
/// two domains are related only informally by email/phone.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display username.
    pub username: String,
    /// One-way password digest (hex). Never the plaintext.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Login email; unique among users (enforced at the service layer).
    pub email: Email,
    /// Registration date.
    pub registered_on: NaiveDate,
}
