//! Currency catalog offered by the invoice form.
//!
//! A currency is a display label only: selecting one never converts
//! amounts, it only changes the code and symbol shown next to them.

use serde::Serialize;

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    /// ISO 4217 code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Symbol prefixed to formatted amounts.
    pub symbol: &'static str,
}

impl Currency {
    /// Look up a catalog entry by its ISO 4217 code (exact match).
    pub fn from_code(code: &str) -> Option<Self> {
        CURRENCIES.iter().find(|c| c.code == code).copied()
    }
}

impl Default for Currency {
    fn default() -> Self {
        CURRENCIES[0]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.symbol)
    }
}

/// The fixed catalog, in the order the form lists it.
pub static CURRENCIES: [Currency; 10] = [
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$" },
    Currency { code: "USD", name: "US Dollar", symbol: "$" },
    Currency { code: "EUR", name: "Euro", symbol: "€" },
    Currency { code: "GBP", name: "British Pound", symbol: "£" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "CN¥" },
    Currency { code: "SEK", name: "Swedish Krona", symbol: "kr" },
    Currency { code: "NZD", name: "New Zealand Dollar", symbol: "NZ$" },
];
