//! Explicit field-to-path mapping for payment card data.
//!
//! Rather than reflecting struct fields into JSON, [`Card`] writes each
//! present field to its canonical payload path under
//! `sourceOfFunds.provided.card`, leaving everything else in the payload
//! untouched.

use crate::map::PayloadMap;

/// A card expiration date, month and year as the gateway expects them
/// (`MM` / `YY`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expiry {
    /// Expiration month, format `MM`.
    pub month: Option<String>,
    /// Expiration year, format `YY`.
    pub year: Option<String>,
}

impl Expiry {
    /// Creates an expiry from month and year strings.
    #[must_use]
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: Some(month.into()),
            year: Some(year.into()),
        }
    }
}

/// A payment card to use as the funding source of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    /// The cardholder's name.
    pub name_on_card: Option<String>,
    /// The primary account number.
    pub number: Option<String>,
    /// The card security code.
    pub security_code: Option<String>,
    /// The card expiration date.
    pub expiry: Option<Expiry>,
}

impl Card {
    /// Creates an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cardholder's name.
    #[must_use]
    pub fn with_name_on_card(mut self, name: impl Into<String>) -> Self {
        self.name_on_card = Some(name.into());
        self
    }

    /// Sets the primary account number.
    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Sets the security code.
    #[must_use]
    pub fn with_security_code(mut self, code: impl Into<String>) -> Self {
        self.security_code = Some(code.into());
        self
    }

    /// Sets the expiration date.
    #[must_use]
    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Writes the present fields to their canonical
    /// `sourceOfFunds.provided.card.*` paths.
    pub fn apply_to(&self, payload: &mut PayloadMap) {
        const CARD: &str = "sourceOfFunds.provided.card";
        if let Some(name) = &self.name_on_card {
            payload.set_at(&format!("{CARD}.nameOnCard"), name.as_str());
        }
        if let Some(number) = &self.number {
            payload.set_at(&format!("{CARD}.number"), number.as_str());
        }
        if let Some(code) = &self.security_code {
            payload.set_at(&format!("{CARD}.securityCode"), code.as_str());
        }
        if let Some(expiry) = &self.expiry {
            if let Some(month) = &expiry.month {
                payload.set_at(&format!("{CARD}.expiry.month"), month.as_str());
            }
            if let Some(year) = &expiry.year {
                payload.set_at(&format!("{CARD}.expiry.year"), year.as_str());
            }
        }
    }

    /// Builds a payload containing only this card.
    #[must_use]
    pub fn into_payload(self) -> PayloadMap {
        let mut payload = PayloadMap::new();
        self.apply_to(&mut payload);
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_all_fields_to_their_paths() {
        let payload = Card::new()
            .with_name_on_card("J. Doe")
            .with_number("5111111111111118")
            .with_security_code("100")
            .with_expiry(Expiry::new("05", "21"))
            .into_payload();

        assert_eq!(
            payload,
            PayloadMap::from_json(json!({
                "sourceOfFunds": {"provided": {"card": {
                    "nameOnCard": "J. Doe",
                    "number": "5111111111111118",
                    "securityCode": "100",
                    "expiry": {"month": "05", "year": "21"},
                }}},
            }))
        );
    }

    #[test]
    fn absent_fields_write_nothing() {
        let payload = Card::new().with_number("5111111111111118").into_payload();
        assert_eq!(payload.get_at("sourceOfFunds.provided.card.nameOnCard"), None);
        assert!(payload.get_at("sourceOfFunds.provided.card.number").is_some());
    }

    #[test]
    fn applies_on_top_of_an_existing_payload() {
        let mut payload = PayloadMap::new();
        payload.set_at("session.id", "SESSION001");
        Card::new().with_number("5111111111111118").apply_to(&mut payload);
        assert!(payload.get_at("session.id").is_some());
        assert!(payload.get_at("sourceOfFunds.provided.card.number").is_some());
    }
}
