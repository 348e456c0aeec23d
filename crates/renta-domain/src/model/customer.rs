//! Customer accounts

use renta_types::Money;
use serde::{Deserialize, Serialize};

use crate::model::Rental;

/// A registered customer. Only the SHA-256 digest of the password is
/// kept; the plaintext is discarded at registration. The loan balance
/// never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub password_hash: String,
    #[serde(default)]
    pub loan_balance: Money,
    #[serde(default)]
    pub history: Vec<Rental>,
}

impl Customer {
    pub fn new(id: &str, name: &str, password_hash: String) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            password_hash,
            loan_balance: Money::ZERO,
            history: Vec::new(),
        }
    }
}
