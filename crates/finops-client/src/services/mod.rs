//! Thin call surface over [`ApiClient`] for each backend resource.
//!
//! Business payloads are returned as `serde_json::Value`; the backend owns
//! their shape.

mod anomalies;
mod auth;
mod bank_accounts;
mod collection;
mod invoices;
mod notifications;
mod reports;
mod transactions;
mod users;

pub use anomalies::Anomalies;
pub use auth::{AuthService, ME_PATH, REGISTER_PATH, TOKEN_PATH};
pub use bank_accounts::BankAccounts;
pub use collection::{Collection, ListQuery};
pub use invoices::Invoices;
pub use notifications::Notifications;
pub use reports::Reports;
pub use transactions::Transactions;
pub use users::Users;

use crate::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    pub fn bank_accounts(&self) -> BankAccounts<'_> {
        BankAccounts::new(self)
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports::new(self)
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(self)
    }

    pub fn anomalies(&self) -> Anomalies<'_> {
        Anomalies::new(self)
    }
}
