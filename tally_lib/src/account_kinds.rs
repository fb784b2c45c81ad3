//! The structural role of an account.  The set of kinds is closed: the rest
//! of the code relies on exhaustive matches over it, so adding a kind means
//! revisiting the category mapping, the labels and the sign table.

use crate::account_categories::AccountCategory;
use crate::errors::Error;
use std::str::FromStr;

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum AccountKind {
    CapitalNormal,
    CapitalSavings,
    DebtLoan,
    DebtPersonal,
    DebtCredit,
    ExternalIncome,
    ExternalExpense,
    SystemHistoric,
}

impl AccountKind {
    pub const ALL: [AccountKind; 8] = [
        AccountKind::CapitalNormal,
        AccountKind::CapitalSavings,
        AccountKind::DebtLoan,
        AccountKind::DebtPersonal,
        AccountKind::DebtCredit,
        AccountKind::ExternalIncome,
        AccountKind::ExternalExpense,
        AccountKind::SystemHistoric,
    ];

    pub fn category(&self) -> AccountCategory {
        match self {
            AccountKind::CapitalNormal | AccountKind::CapitalSavings => {
                AccountCategory::Capital
            }
            AccountKind::DebtLoan
            | AccountKind::DebtPersonal
            | AccountKind::DebtCredit => AccountCategory::Debt,
            AccountKind::ExternalIncome | AccountKind::ExternalExpense => {
                AccountCategory::External
            }
            AccountKind::SystemHistoric => AccountCategory::System,
        }
    }

    pub fn is_capital_account(&self) -> bool {
        matches!(self.category(), AccountCategory::Capital)
    }
    pub fn is_debt_account(&self) -> bool {
        matches!(self.category(), AccountCategory::Debt)
    }
    pub fn is_external_account(&self) -> bool {
        matches!(self.category(), AccountCategory::External)
    }
    pub fn is_income_account(&self) -> bool {
        matches!(self, AccountKind::ExternalIncome)
    }
    pub fn is_expense_account(&self) -> bool {
        matches!(self, AccountKind::ExternalExpense)
    }

    /// Credit lines get a different sign treatment than other debts.
    pub fn is_credit_account(&self) -> bool {
        matches!(self, AccountKind::DebtCredit)
    }
    pub fn is_savings_account(&self) -> bool {
        matches!(self, AccountKind::CapitalSavings)
    }

    /// The name, used for display purposes only
    pub fn to_human(&self) -> &'static str {
        match self {
            AccountKind::CapitalNormal => "Bank",
            AccountKind::CapitalSavings => "Savings",
            AccountKind::DebtLoan => "Loan",
            AccountKind::DebtPersonal => "Personal",
            AccountKind::DebtCredit => "Credit",
            AccountKind::ExternalIncome => "Income",
            AccountKind::ExternalExpense => "Expense",
            AccountKind::SystemHistoric => "Historic",
        }
    }

    // deposit / increase / ...
    pub fn name_when_positive(&self) -> &'static str {
        match self {
            AccountKind::CapitalNormal | AccountKind::CapitalSavings => {
                "Deposit"
            }
            AccountKind::DebtLoan | AccountKind::DebtPersonal => "Borrowed",
            AccountKind::DebtCredit => "Charge",
            AccountKind::ExternalIncome => "Income",
            AccountKind::ExternalExpense => "Refund",
            AccountKind::SystemHistoric => "Increase",
        }
    }

    // payment / decrease / ...
    pub fn name_when_negative(&self) -> &'static str {
        match self {
            AccountKind::CapitalNormal | AccountKind::CapitalSavings => {
                "Payment"
            }
            AccountKind::DebtLoan
            | AccountKind::DebtPersonal
            | AccountKind::DebtCredit => "Repayment",
            AccountKind::ExternalIncome => "Correction",
            AccountKind::ExternalExpense => "Expense",
            AccountKind::SystemHistoric => "Decrease",
        }
    }

    /// The value of the `kind` field in the records sent by the API.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AccountKind::CapitalNormal => "capital_normal",
            AccountKind::CapitalSavings => "capital_savings",
            AccountKind::DebtLoan => "debt_loan",
            AccountKind::DebtPersonal => "debt_personal",
            AccountKind::DebtCredit => "debt_credit",
            AccountKind::ExternalIncome => "external_income",
            AccountKind::ExternalExpense => "external_expense",
            AccountKind::SystemHistoric => "system_historic",
        }
    }
}

impl FromStr for AccountKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountKind::ALL
            .iter()
            .find(|k| k.wire_name() == s)
            .copied()
            .ok_or_else(|| Error::InvalidKind(s.to_string()))
    }
}

impl TryFrom<&str> for AccountKind {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_human())
    }
}

#[cfg(test)]
mod test {
    use crate::account_categories::AccountCategory;
    use crate::account_kinds::AccountKind;
    use crate::errors::Error;

    #[test]
    fn test_exactly_one_category() {
        for kind in AccountKind::ALL {
            let flags = [
                kind.is_capital_account(),
                kind.is_debt_account(),
                kind.is_external_account(),
            ];
            let count = flags.iter().filter(|f| **f).count();
            if kind == AccountKind::SystemHistoric {
                assert_eq!(count, 0, "{kind:?}");
                assert_eq!(kind.category(), AccountCategory::System);
            } else {
                assert_eq!(count, 1, "{kind:?}");
            }
        }
    }

    #[test]
    fn test_fine_grained() {
        for kind in AccountKind::ALL {
            assert_eq!(
                kind.is_credit_account(),
                kind == AccountKind::DebtCredit
            );
            assert_eq!(
                kind.is_income_account(),
                kind == AccountKind::ExternalIncome
            );
            assert_eq!(
                kind.is_expense_account(),
                kind == AccountKind::ExternalExpense
            );
            assert_eq!(
                kind.is_savings_account(),
                kind == AccountKind::CapitalSavings
            );
        }
        assert!(AccountKind::DebtCredit.is_debt_account());
        assert!(AccountKind::ExternalIncome.is_external_account());
    }

    #[test]
    fn test_labels() {
        for kind in AccountKind::ALL {
            assert!(!kind.to_human().is_empty());
            assert!(!kind.name_when_positive().is_empty());
            assert!(!kind.name_when_negative().is_empty());
        }
        assert_eq!(AccountKind::CapitalNormal.to_human(), "Bank");
        assert_eq!(AccountKind::DebtCredit.to_human(), "Credit");
        assert_eq!(AccountKind::DebtLoan.to_string(), "Loan");
    }

    #[test]
    fn test_parse() -> Result<(), Error> {
        for kind in AccountKind::ALL {
            assert_eq!(kind.wire_name().parse::<AccountKind>()?, kind);
        }
        assert_eq!(
            AccountKind::try_from("debt_personal")?,
            AccountKind::DebtPersonal
        );
        assert!(matches!(
            "checking".parse::<AccountKind>(),
            Err(Error::InvalidKind(k)) if k == "checking"
        ));
        assert!(matches!(
            "CapitalNormal".parse::<AccountKind>(),
            Err(Error::InvalidKind(_))
        ));
        Ok(())
    }
}
