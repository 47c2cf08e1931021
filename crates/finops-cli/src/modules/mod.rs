pub(crate) mod accounts;
pub(crate) mod anomalies;
pub(crate) mod auth;
pub(crate) mod invoices;
pub(crate) mod notifications;
pub(crate) mod reports;
pub(crate) mod shared;
pub(crate) mod system;
pub(crate) mod transactions;
pub(crate) mod users;
