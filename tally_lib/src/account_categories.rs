/// A general categorization for account kinds.
/// These match how accounts are sectioned when displayed, though the actual
/// kinds carry finer grained properties.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AccountCategory {
    // Money the user owns: bank and savings accounts.
    Capital,

    // Money the user owes: loans, credit lines, personal debts.
    Debt,

    // The outside world: where income comes from and expenses go to.  These
    // accounts carry no balance of their own.
    External,

    // Placeholders kept for historical data only.
    System,
}

impl AccountCategory {
    pub const ALL: [AccountCategory; 4] = [
        AccountCategory::Capital,
        AccountCategory::Debt,
        AccountCategory::External,
        AccountCategory::System,
    ];

    pub fn to_human(&self) -> &'static str {
        match self {
            AccountCategory::Capital => "Capital",
            AccountCategory::Debt => "Debt",
            AccountCategory::External => "External",
            AccountCategory::System => "System",
        }
    }
}
