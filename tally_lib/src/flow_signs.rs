use crate::account_kinds::AccountKind;
use crate::errors::Error;

/// How a transfer shows up on its source account.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum FlowSign {
    Debit = -1,
    Neutral = 0,
    Credit = 1,
}

impl FlowSign {
    pub fn as_i8(&self) -> i8 {
        *self as i8
    }
}

/// An entry of the sign table.  A pair missing from the table is kept
/// distinct from a pair that was given a sign.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum SignRule {
    Listed(FlowSign),
    Unlisted,
}

impl SignRule {
    pub fn sign(&self) -> FlowSign {
        match self {
            SignRule::Listed(sign) => *sign,
            SignRule::Unlisted => FlowSign::Neutral,
        }
    }
}

/// The sign table, over the full (source, target) space.
pub fn sign_rule(source: AccountKind, target: AccountKind) -> SignRule {
    use AccountKind::*;
    use FlowSign::*;

    match source {
        CapitalNormal | CapitalSavings => match target {
            DebtLoan | DebtPersonal | DebtCredit => SignRule::Listed(Debit),

            // Income and expense targets are used as corrections
            ExternalIncome | ExternalExpense => SignRule::Listed(Debit),
            CapitalNormal | CapitalSavings | SystemHistoric => {
                SignRule::Unlisted
            }
        },
        DebtLoan | DebtPersonal => match target {
            CapitalNormal | CapitalSavings => SignRule::Listed(Credit),
            DebtCredit => SignRule::Listed(Debit),
            ExternalIncome | ExternalExpense => SignRule::Listed(Debit),
            DebtLoan | DebtPersonal | SystemHistoric => SignRule::Unlisted,
        },
        DebtCredit => match target {
            CapitalNormal | CapitalSavings => SignRule::Listed(Credit),
            DebtLoan | DebtPersonal => SignRule::Listed(Debit),

            // Not neutral, even though both sides are the same kind
            DebtCredit => SignRule::Listed(Debit),
            ExternalIncome | ExternalExpense => SignRule::Listed(Debit),
            SystemHistoric => SignRule::Unlisted,
        },
        ExternalIncome => match target {
            CapitalNormal | CapitalSavings | DebtLoan | DebtPersonal
            | DebtCredit => SignRule::Listed(Credit),
            ExternalExpense => SignRule::Listed(Debit),
            ExternalIncome | SystemHistoric => SignRule::Unlisted,
        },
        ExternalExpense => match target {
            CapitalNormal | CapitalSavings | DebtLoan | DebtPersonal
            | DebtCredit | ExternalIncome => SignRule::Listed(Credit),
            ExternalExpense | SystemHistoric => SignRule::Unlisted,
        },
        SystemHistoric => SignRule::Unlisted,
    }
}

/// The sign of a transfer from `source` to `target`, as seen on the source
/// account.  Pairs missing from the table are neutral.
pub fn resolve_sign(source: AccountKind, target: AccountKind) -> FlowSign {
    sign_rule(source, target).sign()
}

/// Same as [`resolve_sign`], for kinds given by their wire names.
pub fn resolve_sign_by_name(
    source: &str,
    target: &str,
) -> Result<FlowSign, Error> {
    let source: AccountKind = source.parse()?;
    let target: AccountKind = target.parse()?;
    Ok(resolve_sign(source, target))
}

#[cfg(test)]
mod test {
    use crate::account_kinds::AccountKind::{self, *};
    use crate::errors::Error;
    use crate::flow_signs::{
        resolve_sign, resolve_sign_by_name, sign_rule, FlowSign, SignRule,
    };

    #[test]
    fn test_self_transfer() {
        for kind in AccountKind::ALL {
            let expected = if kind == DebtCredit { -1 } else { 0 };
            assert_eq!(resolve_sign(kind, kind).as_i8(), expected, "{kind:?}");
        }
        assert_eq!(
            sign_rule(DebtCredit, DebtCredit),
            SignRule::Listed(FlowSign::Debit)
        );
        assert_eq!(sign_rule(CapitalNormal, CapitalNormal), SignRule::Unlisted);
    }

    #[test]
    fn test_inverse_pairs() {
        assert_eq!(resolve_sign(CapitalNormal, DebtLoan).as_i8(), -1);
        assert_eq!(resolve_sign(DebtLoan, CapitalNormal).as_i8(), 1);
        assert_eq!(resolve_sign(ExternalIncome, CapitalNormal).as_i8(), 1);
        assert_eq!(resolve_sign(CapitalNormal, ExternalIncome).as_i8(), -1);
        assert_eq!(resolve_sign(CapitalSavings, DebtPersonal).as_i8(), -1);
        assert_eq!(resolve_sign(ExternalExpense, ExternalIncome).as_i8(), 1);
        assert_eq!(resolve_sign(ExternalIncome, ExternalExpense).as_i8(), -1);
    }

    #[test]
    fn test_debt_rows() {
        for source in [DebtLoan, DebtPersonal] {
            assert_eq!(resolve_sign(source, CapitalSavings), FlowSign::Credit);
            assert_eq!(resolve_sign(source, DebtCredit), FlowSign::Debit);
            assert_eq!(resolve_sign(source, ExternalExpense), FlowSign::Debit);
        }
        assert_eq!(resolve_sign(DebtLoan, DebtPersonal), FlowSign::Neutral);
        assert_eq!(resolve_sign(DebtCredit, CapitalNormal), FlowSign::Credit);
        assert_eq!(resolve_sign(DebtCredit, DebtLoan), FlowSign::Debit);
        assert_eq!(resolve_sign(DebtCredit, ExternalIncome), FlowSign::Debit);
    }

    #[test]
    fn test_historic_is_neutral() {
        for kind in AccountKind::ALL {
            assert_eq!(sign_rule(SystemHistoric, kind), SignRule::Unlisted);
            assert_eq!(sign_rule(kind, SystemHistoric), SignRule::Unlisted);
        }
    }

    #[test]
    fn test_table_counts() {
        let mut credits = 0;
        let mut debits = 0;
        for source in AccountKind::ALL {
            for target in AccountKind::ALL {
                match resolve_sign(source, target) {
                    FlowSign::Credit => credits += 1,
                    FlowSign::Debit => debits += 1,
                    FlowSign::Neutral => {}
                }
            }
        }
        // capital: 10 debits, loan/personal: 4 credits + 6 debits,
        // credit: 2 credits + 5 debits, income: 5 credits + 1 debit,
        // expense: 6 credits.
        assert_eq!(credits, 17);
        assert_eq!(debits, 22);
    }

    #[test]
    fn test_by_name() -> Result<(), Error> {
        assert_eq!(
            resolve_sign_by_name("capital_normal", "debt_loan")?,
            FlowSign::Debit
        );
        assert!(matches!(
            resolve_sign_by_name("capital_normal", "crypto"),
            Err(Error::InvalidKind(k)) if k == "crypto"
        ));
        assert!(matches!(
            resolve_sign_by_name("", "debt_loan"),
            Err(Error::InvalidKind(_))
        ));
        Ok(())
    }
}
