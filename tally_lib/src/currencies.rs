use crate::errors::Error;

#[derive(Default)]
pub struct CurrencyCollection {
    currencies: Vec<Currency>,
}

impl CurrencyCollection {
    /// Register a currency.  If a currency with the same code already
    /// exists, its id is returned and the new definition is ignored.
    pub fn add(&mut self, currency: Currency) -> CurrencyId {
        if let Some(id) = self.find(&currency.code) {
            log::warn!("currency {} registered twice", currency.code);
            return id;
        }
        self.currencies.push(currency);
        CurrencyId(self.currencies.len() as u16)
    }

    pub fn get(&self, id: CurrencyId) -> Option<&Currency> {
        self.currencies.get((id.0 as usize).checked_sub(1)?)
    }

    pub fn find(&self, code: &str) -> Option<CurrencyId> {
        self.currencies
            .iter()
            .position(|c| c.code.eq_ignore_ascii_case(code))
            .map(|idx| CurrencyId(idx as u16 + 1))
    }

    /// Find the currency, or register it from the ISO 4217 table.
    pub fn find_or_add_iso(&mut self, code: &str) -> Result<CurrencyId, Error> {
        match self.find(code) {
            Some(id) => Ok(id),
            None => Ok(self.add(Currency::iso(code)?)),
        }
    }

    pub fn iter_currencies(
        &self,
    ) -> impl Iterator<Item = (CurrencyId, &Currency)> {
        self.currencies
            .iter()
            .enumerate()
            .map(|(idx, c)| (CurrencyId(idx as u16 + 1), c))
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default, PartialOrd, Ord)]
pub struct CurrencyId(pub u16);

/// A currency in which accounts, transactions and goals are expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 alphabetic code, e.g. "EUR"
    pub code: String,

    // Symbol to display the currency, and whether to display it before or
    // after the value.
    pub(crate) symbol: String,
    pub(crate) symbol_after: bool,

    /// Number of digits in the fractional part
    pub(crate) display_precision: u8,
}

// code, symbol, symbol after the value, minor digits
const ISO_4217: &[(&str, &str, bool, u8)] = &[
    ("AUD", "A$", false, 2),
    ("BRL", "R$", false, 2),
    ("CAD", "CA$", false, 2),
    ("CHF", "CHF", false, 2),
    ("CNY", "¥", false, 2),
    ("CZK", "Kč", true, 2),
    ("DKK", "kr", true, 2),
    ("EUR", "€", true, 2),
    ("GBP", "£", false, 2),
    ("HKD", "HK$", false, 2),
    ("HUF", "Ft", true, 2),
    ("INR", "₹", false, 2),
    ("ISK", "kr", true, 0),
    ("JPY", "¥", false, 0),
    ("KRW", "₩", false, 0),
    ("KWD", "KD", false, 3),
    ("MXN", "MX$", false, 2),
    ("NOK", "kr", true, 2),
    ("NZD", "NZ$", false, 2),
    ("PLN", "zł", true, 2),
    ("SEK", "kr", true, 2),
    ("SGD", "S$", false, 2),
    ("TND", "DT", true, 3),
    ("UAH", "₴", true, 2),
    ("USD", "$", false, 2),
    ("ZAR", "R", false, 2),
];

impl Currency {
    pub fn new(
        code: &str,
        symbol: &str,
        symbol_after: bool,
        display_precision: u8,
    ) -> Self {
        Currency {
            code: code.trim().to_ascii_uppercase(),
            symbol: symbol.trim().to_string(),
            symbol_after,
            display_precision,
        }
    }

    /// Build a currency from its ISO 4217 code.
    pub fn iso(code: &str) -> Result<Self, Error> {
        let upper = code.trim().to_ascii_uppercase();
        ISO_4217
            .iter()
            .find(|(c, ..)| *c == upper)
            .map(|(c, symbol, after, precision)| {
                Currency::new(c, symbol, *after, *precision)
            })
            .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn symbol_after(&self) -> bool {
        self.symbol_after
    }

    pub fn get_display_precision(&self) -> u8 {
        self.display_precision
    }
}
