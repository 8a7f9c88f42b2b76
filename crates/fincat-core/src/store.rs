//! In-memory stock store

use crate::stock::Stock;

/// Insertion-ordered collection of stock records keyed by symbol.
///
/// Symbols are unique within the store and compared case-insensitively:
/// lookups upper-case the argument and inserted records are canonicalized,
/// so `get("aapl")` and `get("AAPL")` address the same record. Every
/// operation is total; absence and conflict are reported through the return
/// value, never as a panic or an error.
#[derive(Debug, Clone, Default)]
pub struct StockStore {
    stocks: Vec<Stock>,
}

impl StockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        let key = symbol.to_uppercase();
        self.stocks.iter().position(|s| s.symbol == key)
    }

    /// All records, cloned, in insertion order. Display ordering is the
    /// client's concern.
    pub fn list(&self) -> Vec<Stock> {
        self.stocks.clone()
    }

    /// Look up a record by symbol, any case.
    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        self.position(symbol).map(|i| &self.stocks[i])
    }

    /// Whether a symbol is tracked.
    pub fn has(&self, symbol: &str) -> bool {
        self.position(symbol).is_some()
    }

    /// Insert a record. Returns `false` without overwriting when the symbol
    /// is already tracked.
    pub fn insert(&mut self, mut stock: Stock) -> bool {
        stock.symbol = stock.symbol.to_uppercase();
        if self.has(&stock.symbol) {
            return false;
        }
        self.stocks.push(stock);
        true
    }

    /// Replace the price of an existing record, leaving every other field
    /// untouched. Returns `false` when the symbol is absent.
    pub fn set_price(&mut self, symbol: &str, price: f64) -> bool {
        match self.position(symbol) {
            Some(i) => {
                self.stocks[i].price = price;
                true
            }
            None => false,
        }
    }

    /// Replace an existing record wholesale, keeping the stored symbol
    /// canonical. Returns `false` when the symbol is absent.
    pub fn replace(&mut self, symbol: &str, mut stock: Stock) -> bool {
        match self.position(symbol) {
            Some(i) => {
                stock.symbol = symbol.to_uppercase();
                self.stocks[i] = stock;
                true
            }
            None => false,
        }
    }

    /// Remove a record. Returns `false` when the symbol is absent.
    pub fn remove(&mut self, symbol: &str) -> bool {
        match self.position(symbol) {
            Some(i) => {
                self.stocks.remove(i);
                true
            }
            None => false,
        }
    }

    /// Number of tracked stocks.
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = StockStore::new();
        assert!(store.insert(Stock::new("AAPL", "Apple", 195.3)));
        assert_eq!(store.len(), 1);

        let stock = store.get("aapl").unwrap();
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(stock.name, "Apple");
    }

    #[test]
    fn test_insert_conflict_keeps_original() {
        let mut store = StockStore::new();
        assert!(store.insert(Stock::new("AAPL", "Apple", 1.0)));
        assert!(!store.insert(Stock::new("aapl", "AppleCo", 2.0)));

        let stock = store.get("AAPL").unwrap();
        assert_eq!(stock.name, "Apple");
        assert_eq!(stock.price, 1.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_price_only_touches_price() {
        let mut store = StockStore::new();
        store.insert(Stock::new("MSFT", "Microsoft", 345.67).with_notes("core holding"));

        assert!(store.set_price("msft", 350.0));
        let stock = store.get("MSFT").unwrap();
        assert_eq!(stock.price, 350.0);
        assert_eq!(stock.name, "Microsoft");
        assert_eq!(stock.notes.as_deref(), Some("core holding"));

        assert!(!store.set_price("GOOG", 100.0));
    }

    #[test]
    fn test_replace_keeps_symbol_canonical() {
        let mut store = StockStore::new();
        store.insert(Stock::new("AAPL", "Apple", 195.3));

        assert!(store.replace("aapl", Stock::new("ignored", "Apple Inc", 200.0)));
        let stock = store.get("AAPL").unwrap();
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(stock.name, "Apple Inc");

        assert!(!store.replace("TSLA", Stock::new("TSLA", "Tesla", 1.0)));
    }

    #[test]
    fn test_remove_is_total() {
        let mut store = StockStore::new();
        store.insert(Stock::new("AAPL", "Apple", 195.3));

        assert!(store.remove("AAPL"));
        assert!(store.is_empty());
        assert!(!store.remove("AAPL"));
        assert!(!store.remove("AAPL"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = StockStore::new();
        store.insert(Stock::new("MSFT", "Microsoft", 345.67));
        store.insert(Stock::new("AAPL", "Apple", 195.3));
        store.insert(Stock::new("GOOGL", "Alphabet", 2801.12));

        let stocks = store.list();
        let symbols: Vec<&str> = stocks.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL", "GOOGL"]);
    }
}
