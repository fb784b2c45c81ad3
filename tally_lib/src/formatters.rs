use crate::currencies::Currency;
use crate::flow_signs::FlowSign;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// How to display currencies
#[derive(Clone, Copy, Default)]
pub enum SymbolQuote {
    #[default]
    Symbol, // e.g. $   Will be displayed before or after the value
    Code, // The ISO code of the currency (e.g. USD)
}

/// How to display negative values
#[derive(Clone, Copy, Default)]
pub enum Negative {
    #[default]
    MinusSign, // USD -123
    Parenthesis,  // USD (123)
    SeparateSign, // -USD 123
}

/// How to display large numbers
#[derive(Clone, Copy)]
pub enum Separators {
    None,              // no special formatting    1234456.789
    Every3Digit(char), // char every 3 digits      1,234,456.789
}
impl Default for Separators {
    fn default() -> Self {
        Separators::Every3Digit(',')
    }
}

/// How to display zero values
#[derive(Clone, Copy, Default)]
pub enum Zero {
    #[default]
    Number,                // same as any other value: 0.00 EUR
    Empty,                 // display nothing
    Replace(&'static str), // display a specific text instead (e.g. "-")
}

#[derive(Clone)]
pub struct Formatter {
    pub quote_symbol: SymbolQuote,
    pub negative: Negative,
    pub separators: Separators,
    pub comma: char,
    pub zero: Zero,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            comma: '.',
            quote_symbol: SymbolQuote::default(),
            negative: Negative::default(),
            separators: Separators::default(),
            zero: Zero::default(),
        }
    }
}

impl Formatter {
    fn round(value: Decimal, currency: &Currency) -> Decimal {
        value.round_dp_with_strategy(
            currency.get_display_precision() as u32,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Display the absolute value of value, rounded half away from zero
    fn push_abs_num(&self, into: &mut String, value: Decimal, precision: u8) {
        let rounded = value.abs().round_dp_with_strategy(
            precision as u32,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let text = rounded.to_string();
        let (integral, fraction) =
            text.split_once('.').unwrap_or((text.as_str(), ""));

        match self.separators {
            Separators::None => into.push_str(integral),
            Separators::Every3Digit(sep) => {
                let len = integral.chars().count();
                for (idx, p) in integral.chars().enumerate() {
                    if idx > 0 && (len - idx) % 3 == 0 {
                        into.push(sep);
                    }
                    into.push(p);
                }
            }
        }

        if precision > 0 {
            into.push(self.comma);
            into.push_str(fraction);
            for _ in fraction.len()..precision as usize {
                into.push('0');
            }
        }
    }

    fn push_currency(&self, into: &mut String, currency: &Currency) {
        match self.quote_symbol {
            SymbolQuote::Symbol => into.push_str(currency.get_symbol()),
            SymbolQuote::Code => into.push_str(&currency.code),
        }
    }

    pub fn push_zero(&self, into: &mut String, currency: &Currency) {
        match self.zero {
            Zero::Number => self.push_value(into, Decimal::ZERO, currency),
            Zero::Empty => {}
            Zero::Replace(z) => into.push_str(z),
        }
    }

    /// Values that round to zero for the currency are displayed as zero.
    pub fn push(&self, into: &mut String, value: Decimal, currency: &Currency) {
        let rounded = Formatter::round(value, currency);
        if rounded.is_zero() {
            self.push_zero(into, currency);
        } else {
            self.push_value(into, rounded, currency);
        }
    }

    fn push_value(
        &self,
        into: &mut String,
        value: Decimal,
        currency: &Currency,
    ) {
        let precision = currency.get_display_precision();
        let negative = value.is_sign_negative() && !value.is_zero();

        if currency.symbol_after() {
            match (negative, self.negative) {
                (false, _) => self.push_abs_num(into, value, precision),
                (true, Negative::MinusSign | Negative::SeparateSign) => {
                    into.push('-');
                    self.push_abs_num(into, value, precision);
                }
                (true, Negative::Parenthesis) => {
                    into.push('(');
                    self.push_abs_num(into, value, precision);
                    into.push(')');
                }
            }
            into.push(' ');
            self.push_currency(into, currency);
        } else {
            match (negative, self.negative) {
                (false, _) => {
                    self.push_currency(into, currency);
                    into.push(' ');
                    self.push_abs_num(into, value, precision);
                }
                (true, Negative::SeparateSign) => {
                    into.push('-');
                    self.push_currency(into, currency);
                    into.push(' ');
                    self.push_abs_num(into, value, precision);
                }
                (true, Negative::MinusSign) => {
                    self.push_currency(into, currency);
                    into.push_str(" -");
                    self.push_abs_num(into, value, precision);
                }
                (true, Negative::Parenthesis) => {
                    self.push_currency(into, currency);
                    into.push_str(" (");
                    self.push_abs_num(into, value, precision);
                    into.push(')');
                }
            }
        }
    }

    pub fn display(&self, value: Decimal, currency: &Currency) -> String {
        let mut buffer = String::new();
        self.push(&mut buffer, value, currency);
        buffer
    }

    /// Display the amount of a transfer, with an explicit sign for credits
    /// and debits.  The sign of `amount` itself is ignored.
    pub fn display_signed(
        &self,
        amount: Decimal,
        currency: &Currency,
        sign: FlowSign,
    ) -> String {
        let mut buffer = String::new();
        let amount = Formatter::round(amount, currency);
        if amount.is_zero() {
            self.push_zero(&mut buffer, currency);
            return buffer;
        }
        match sign {
            FlowSign::Credit => {
                buffer.push('+');
                self.push_value(&mut buffer, amount.abs(), currency);
            }
            FlowSign::Debit => {
                self.push_value(&mut buffer, -amount.abs(), currency)
            }
            FlowSign::Neutral => {
                self.push_value(&mut buffer, amount.abs(), currency)
            }
        }
        buffer
    }

    /// Always one decimal, e.g. "100.0%"
    pub fn display_percent(&self, ratio: Decimal) -> String {
        let mut pct = (ratio * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        pct.rescale(1);
        format!("{}%", pct.to_string().replace('.', &self.comma.to_string()))
    }
}

/// How to display dates
#[derive(Clone, Copy, Debug)]
pub enum DateStyle {
    Iso,   // 2024-03-01
    Short, // Mar 1
    Long,  // 1 March 2024

    // today, yesterday, in 3 days,...  relative to the given date
    Relative(NaiveDate),
}

pub fn display_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
        DateStyle::Short => date.format("%b %-d").to_string(),
        DateStyle::Long => date.format("%-d %B %Y").to_string(),
        DateStyle::Relative(today) => match (date - today).num_days() {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            -1 => "yesterday".to_string(),
            d if d > 1 => format!("in {d} days"),
            d => format!("{} days ago", -d),
        },
    }
}
