pub mod account_categories;
pub mod account_kinds;
pub mod accounts;
pub mod balances;
pub mod colors;
pub mod currencies;
pub mod errors;
pub mod flow_signs;
pub mod formatters;
pub mod goals;
pub mod importers;
pub mod json;
pub mod multi_values;
pub mod query_cache;
pub mod repositories;
pub mod transactions;
