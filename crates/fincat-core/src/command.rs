//! Chat command parsing
//!
//! Classifies a raw chat message into a command. Parsing is total: anything
//! that does not match a supported shape, including malformed prices and
//! missing arguments, classifies as `Unrecognized` rather than failing.

/// Parsed command from a chat message
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List all tracked stocks
    List,
    /// Start tracking a stock
    Add {
        symbol: String,
        name: String,
        price: f64,
    },
    /// Change the price of a tracked stock
    Update { symbol: String, price: f64 },
    /// Stop tracking a stock
    Remove { symbol: String },
    /// Input that matches no supported command shape
    Unrecognized,
}

/// Accepts only finite, non-negative prices ("inf"/"nan"/negatives all
/// classify the whole message as unrecognized).
fn parse_price(token: &str) -> Option<f64> {
    let price: f64 = token.parse().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

fn is_symbol(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}

impl Command {
    /// Parse a command from a raw chat message.
    ///
    /// Tokenizes on whitespace; the first token selects the verb
    /// (case-insensitive), the rest are positional. For `add`, the last
    /// token must be the price and everything between the symbol and the
    /// price re-joins into the name, so names with interior spaces work:
    /// `add AAPL Apple Inc 195.3`. Symbols are upper-cased here so
    /// `add aapl ...` and `update AAPL ...` address the same record.
    pub fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unrecognized;
        }

        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "list" if args.is_empty() => Command::List,
            "add" if args.len() >= 3 && is_symbol(args[0]) => {
                match parse_price(args[args.len() - 1]) {
                    Some(price) => Command::Add {
                        symbol: args[0].to_uppercase(),
                        name: args[1..args.len() - 1].join(" "),
                        price,
                    },
                    None => Command::Unrecognized,
                }
            }
            "update" if args.len() == 2 && is_symbol(args[0]) => match parse_price(args[1]) {
                Some(price) => Command::Update {
                    symbol: args[0].to_uppercase(),
                    price,
                },
                None => Command::Unrecognized,
            },
            "remove" if args.len() == 1 && is_symbol(args[0]) => Command::Remove {
                symbol: args[0].to_uppercase(),
            },
            _ => Command::Unrecognized,
        }
    }

    /// Supported command grammar, used for unrecognized-input replies and
    /// the CLI banner.
    pub fn help_text() -> &'static str {
        "I support: 'list', 'add SYMBOL NAME PRICE', 'remove SYMBOL', and 'update SYMBOL PRICE'."
    }
}
