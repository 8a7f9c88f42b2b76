//! The stock record tracked per ticker symbol

use serde::{Deserialize, Serialize};

/// A single tracked stock.
///
/// `symbol` is the unique key and is always held upper-cased; `price` is a
/// finite non-negative number once a record has passed command parsing or
/// the HTTP-level validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker symbol, upper-cased
    pub symbol: String,
    /// Company name, may contain spaces
    pub name: String,
    /// Last known price
    pub price: f64,
    /// Free-form notes, absent from the wire when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Stock {
    /// Create a record with a canonical (upper-cased) symbol and no notes.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            price,
            notes: None,
        }
    }

    /// Attach notes to the record.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canonicalizes_symbol() {
        let stock = Stock::new("aapl", "Apple", 195.3);
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(stock.name, "Apple");
        assert!(stock.notes.is_none());
    }

    #[test]
    fn test_notes_absent_from_json_when_unset() {
        let stock = Stock::new("MSFT", "Microsoft", 345.67);
        let json = serde_json::to_string(&stock).unwrap();
        assert!(!json.contains("notes"));

        let stock = stock.with_notes("long-term hold");
        let json = serde_json::to_string(&stock).unwrap();
        assert!(json.contains("\"notes\":\"long-term hold\""));
    }

    #[test]
    fn test_deserialize_without_notes() {
        let stock: Stock =
            serde_json::from_str(r#"{"symbol":"AAPL","name":"Apple","price":195.3}"#).unwrap();
        assert_eq!(stock.symbol, "AAPL");
        assert!(stock.notes.is_none());
    }
}
