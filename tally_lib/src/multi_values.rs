use crate::currencies::{CurrencyCollection, CurrencyId};
use crate::formatters::Formatter;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    pub amount: Decimal,
    pub currency: CurrencyId,
}

impl Value {
    pub fn new(amount: Decimal, currency: CurrencyId) -> Self {
        Value { amount, currency }
    }
}

/// A sum of amounts in several currencies.  No conversion is ever made
/// between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiValue {
    values: BTreeMap<CurrencyId, Decimal>,
}

impl MultiValue {
    pub fn from_value(value: Value) -> Self {
        let mut result = MultiValue::default();
        result += value;
        result
    }

    pub fn is_zero(&self) -> bool {
        self.values.values().all(|v| v.is_zero())
    }

    pub fn get(&self, currency: CurrencyId) -> Decimal {
        self.values.get(&currency).copied().unwrap_or_default()
    }

    pub fn display(
        &self,
        format: &Formatter,
        currencies: &CurrencyCollection,
    ) -> String {
        let mut result = String::new();
        for (c, v) in self.values.iter().filter(|(_, v)| !v.is_zero()) {
            let Some(currency) = currencies.get(*c) else {
                continue;
            };
            if !result.is_empty() {
                result.push_str(" + ");
            }
            format.push(&mut result, *v, currency);
        }
        result
    }

    /// Iterate over the non-zero values, ordered by currency
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_zero())
            .map(|(c, v)| Value::new(*v, *c))
    }
}

impl core::ops::AddAssign<Value> for MultiValue {
    fn add_assign(&mut self, rhs: Value) {
        *self.values.entry(rhs.currency).or_default() += rhs.amount;
    }
}

impl core::ops::SubAssign<Value> for MultiValue {
    fn sub_assign(&mut self, rhs: Value) {
        *self.values.entry(rhs.currency).or_default() -= rhs.amount;
    }
}

impl core::ops::AddAssign<&MultiValue> for MultiValue {
    fn add_assign(&mut self, rhs: &MultiValue) {
        for (c, v) in &rhs.values {
            *self.values.entry(*c).or_default() += *v;
        }
    }
}

impl core::ops::Sub<&MultiValue> for &MultiValue {
    type Output = MultiValue;

    fn sub(self, rhs: &MultiValue) -> Self::Output {
        let mut result = self.clone();
        for (c, v) in &rhs.values {
            *result.values.entry(*c).or_default() -= *v;
        }
        result
    }
}

#[cfg(test)]
mod test {
    use crate::currencies::test::{eur, usd};
    use crate::currencies::CurrencyCollection;
    use crate::formatters::Formatter;
    use crate::multi_values::{MultiValue, Value};
    use rust_decimal_macros::dec;

    #[test]
    fn test_multi_value() {
        let mut cc = CurrencyCollection::default();
        let e = cc.add(eur());
        let u = cc.add(usd());

        let mut capital = MultiValue::from_value(Value::new(dec!(100), e));
        capital += Value::new(dec!(20.5), u);
        capital += Value::new(dec!(50), e);

        let mut debt = MultiValue::default();
        debt += Value::new(dec!(30), e);

        let net = &capital - &debt;
        assert_eq!(net.get(e), dec!(120));
        assert_eq!(net.get(u), dec!(20.5));

        let f = Formatter::default();
        assert_eq!(net.display(&f, &cc), "120.00 EUR + $ 20.50");

        let mut zero = MultiValue::default();
        zero += Value::new(dec!(10), e);
        zero -= Value::new(dec!(10), e);
        assert!(zero.is_zero());
        assert_eq!(zero.iter().count(), 0);
        assert_eq!(zero.display(&f, &cc), "");
    }
}
