//! Applies parsed commands to the stock store

use crate::chat::ChatReply;
use crate::command::Command;
use crate::stock::Stock;
use crate::store::StockStore;
use tracing::debug;

/// Apply a classified command to the store.
///
/// Mutation rules:
/// - `add` never overwrites: a duplicate symbol gets a conflict reply and
///   the stored record is untouched
/// - `update` replaces only the price; `remove` deletes; both reply
///   "not in your list" when the target is absent, without mutating
/// - `list` and `Unrecognized` never mutate
///
/// Missing targets, conflicts, and unparseable input all travel inside the
/// reply string; this function has no failure mode.
pub fn execute(command: Command, store: &mut StockStore) -> ChatReply {
    let reply = match command {
        Command::List => format!("You currently have {} stock(s).", store.len()),
        Command::Add {
            symbol,
            name,
            price,
        } => {
            if store.has(&symbol) {
                debug!(%symbol, "add rejected, symbol already tracked");
                format!(
                    "{symbol} is already in your list. Use 'update {symbol} PRICE' to change its price."
                )
            } else {
                let reply = format!("Added {symbol} ({name}) at {price}.");
                store.insert(Stock::new(symbol, name, price));
                reply
            }
        }
        Command::Update { symbol, price } => {
            if store.set_price(&symbol, price) {
                format!("Updated {symbol} to {price}.")
            } else {
                debug!(%symbol, "update target not tracked");
                format!("{symbol} is not in your list.")
            }
        }
        Command::Remove { symbol } => {
            if store.remove(&symbol) {
                format!("Removed {symbol}.")
            } else {
                debug!(%symbol, "remove target not tracked");
                format!("{symbol} is not in your list.")
            }
        }
        Command::Unrecognized => Command::help_text().to_string(),
    };

    ChatReply {
        reply,
        stocks: store.list(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(message: &str, store: &mut StockStore) -> ChatReply {
        execute(Command::parse(message), store)
    }

    #[test]
    fn test_add_then_list_contains_symbol_once() {
        let mut store = StockStore::new();
        run("add AAPL Apple 195.3", &mut store);

        let outcome = run("list", &mut store);
        assert_eq!(outcome.reply, "You currently have 1 stock(s).");
        let matches = outcome.stocks.iter().filter(|s| s.symbol == "AAPL").count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_add_reply_and_snapshot() {
        let mut store = StockStore::new();
        let outcome = run("add AAPL Apple 195.3", &mut store);
        assert_eq!(outcome.reply, "Added AAPL (Apple) at 195.3.");
        assert_eq!(outcome.stocks.len(), 1);
        assert_eq!(outcome.stocks[0].symbol, "AAPL");
    }

    #[test]
    fn test_remove_missing_is_idempotent() {
        let mut store = StockStore::new();
        let first = run("remove msft", &mut store);
        let second = run("remove msft", &mut store);

        assert_eq!(first.reply, "MSFT is not in your list.");
        assert_eq!(second.reply, first.reply);
        assert!(store.is_empty());
        assert!(first.stocks.is_empty());
        assert!(second.stocks.is_empty());
    }

    #[test]
    fn test_add_update_round_trip() {
        let mut store = StockStore::new();
        run("add SYM Name 10.5", &mut store);
        let outcome = run("update SYM 12.0", &mut store);
        assert_eq!(outcome.reply, "Updated SYM to 12.");

        let stock = store.get("SYM").unwrap();
        assert_eq!(stock.price, 12.0);
        assert_eq!(stock.name, "Name");
    }

    #[test]
    fn test_case_insensitive_symbols() {
        let mut store = StockStore::new();
        run("add aapl Apple 195.3", &mut store);
        let outcome = run("update AAPL 200", &mut store);

        assert_eq!(outcome.reply, "Updated AAPL to 200.");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("aapl").unwrap().price, 200.0);
    }

    #[test]
    fn test_unrecognized_leaves_store_unchanged() {
        let mut store = StockStore::new();
        run("add AAPL Apple 195.3", &mut store);
        let before = store.list();

        let outcome = run("add AAPL Apple notanumber", &mut store);
        assert_eq!(outcome.reply, Command::help_text());
        assert_eq!(outcome.stocks, before);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_add_conflict_keeps_original_record() {
        let mut store = StockStore::new();
        run("add AAPL Apple 1", &mut store);
        let outcome = run("add AAPL AppleCo 2", &mut store);

        assert!(outcome.reply.contains("already in your list"));
        let stock = store.get("AAPL").unwrap();
        assert_eq!(stock.name, "Apple");
        assert_eq!(stock.price, 1.0);
        assert_eq!(outcome.stocks.len(), 1);
    }

    #[test]
    fn test_remove_on_empty_store() {
        let mut store = StockStore::new();
        let outcome = run("remove msft", &mut store);
        assert_eq!(outcome.reply, "MSFT is not in your list.");
        assert!(outcome.stocks.is_empty());
    }

    #[test]
    fn test_list_on_empty_store() {
        let mut store = StockStore::new();
        let outcome = run("list", &mut store);
        assert_eq!(outcome.reply, "You currently have 0 stock(s).");
        assert!(outcome.stocks.is_empty());
    }
}
