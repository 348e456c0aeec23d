//! Session control
//!
//! One controller per console session. It owns the registries, tracks
//! the login state, and maps each action to exactly one call into the
//! catalog, directory, or domain services. Errors are recoverable at
//! the boundary; nothing here terminates the process.

use serde::Serialize;
use tracing::info;

use renta_domain::model::{Customer, Rental};
use renta_domain::service::{ledger, pricing};
use renta_store::{AccountDirectory, VehicleCatalog};
use renta_types::{Error, Money, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn { customer_id: String },
}

/// One user-facing action. `Exit` never reaches the controller; the
/// boundary owns process lifetime.
#[derive(Debug, Clone)]
pub enum Action {
    Register {
        id: String,
        name: String,
        password: String,
    },
    Login {
        id: String,
        password: String,
    },
    Rent {
        vehicle_id: String,
        days: u32,
    },
    /// `None` closes the most recent rental, the desk's original
    /// behavior; `Some(id)` returns that vehicle.
    Return {
        vehicle_id: Option<String>,
    },
    RequestLoan {
        amount: Money,
    },
    TransferLoan {
        to_id: String,
        amount: Money,
    },
    ShowHistory,
    SortHistory,
    DeleteAccount,
    Logout,
}

/// Structured result of an action; the boundary renders it.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Registered { customer_id: String },
    LoggedIn { customer_id: String, name: String },
    Rented { rental: Rental },
    Returned { vehicle_id: String },
    NothingToReturn,
    LoanBalance { balance: Money },
    Transferred { to_id: String, amount: Money, balance: Money },
    History { rentals: Vec<Rental> },
    HistorySorted { count: usize },
    AccountDeleted,
    LoggedOut,
}

pub struct SessionController {
    catalog: VehicleCatalog,
    directory: AccountDirectory,
    state: SessionState,
}

impl SessionController {
    pub fn new(catalog: VehicleCatalog, directory: AccountDirectory) -> Self {
        Self {
            catalog,
            directory,
            state: SessionState::LoggedOut,
        }
    }

    pub fn handle(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Register { id, name, password } => self.register(&id, &name, &password),
            Action::Login { id, password } => self.login(&id, &password),
            Action::Rent { vehicle_id, days } => {
                let customer_id = self.require_login()?;
                self.rent(&customer_id, &vehicle_id, days)
            }
            Action::Return { vehicle_id } => {
                let customer_id = self.require_login()?;
                self.return_vehicle(&customer_id, vehicle_id.as_deref())
            }
            Action::RequestLoan { amount } => {
                let customer_id = self.require_login()?;
                let balance = self.directory.request_loan(&customer_id, amount)?;
                info!(customer = %customer_id, %amount, %balance, "loan granted");
                Ok(Outcome::LoanBalance { balance })
            }
            Action::TransferLoan { to_id, amount } => {
                let customer_id = self.require_login()?;
                let (balance, _) = self.directory.transfer_loan(&customer_id, &to_id, amount)?;
                info!(from = %customer_id, to = %to_id, %amount, "loan transferred");
                Ok(Outcome::Transferred { to_id, amount, balance })
            }
            Action::ShowHistory => {
                let customer_id = self.require_login()?;
                let rentals = self.directory.history(&customer_id)?.to_vec();
                Ok(Outcome::History { rentals })
            }
            Action::SortHistory => {
                let customer_id = self.require_login()?;
                let count = self.directory.sort_history(&customer_id)?;
                Ok(Outcome::HistorySorted { count })
            }
            Action::DeleteAccount => {
                let customer_id = self.require_login()?;
                self.directory.delete(&customer_id)?;
                self.state = SessionState::LoggedOut;
                info!(customer = %customer_id, "account deleted");
                Ok(Outcome::AccountDeleted)
            }
            Action::Logout => {
                self.require_login()?;
                self.state = SessionState::LoggedOut;
                Ok(Outcome::LoggedOut)
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    /// The logged-in customer, if any.
    pub fn current_customer(&self) -> Option<&Customer> {
        match &self.state {
            SessionState::LoggedIn { customer_id } => self.directory.get(customer_id).ok(),
            SessionState::LoggedOut => None,
        }
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// Hand the registries back, e.g. for snapshot capture on exit.
    pub fn into_parts(self) -> (VehicleCatalog, AccountDirectory) {
        (self.catalog, self.directory)
    }

    fn require_login(&self) -> Result<String> {
        match &self.state {
            SessionState::LoggedIn { customer_id } => Ok(customer_id.clone()),
            SessionState::LoggedOut => Err(Error::InvalidState("not logged in".to_string())),
        }
    }

    fn require_logged_out(&self) -> Result<()> {
        match &self.state {
            SessionState::LoggedOut => Ok(()),
            SessionState::LoggedIn { customer_id } => Err(Error::InvalidState(format!(
                "already logged in as {}",
                customer_id
            ))),
        }
    }

    fn register(&mut self, id: &str, name: &str, password: &str) -> Result<Outcome> {
        self.require_logged_out()?;
        let customer = self.directory.register(id, name, password)?;
        info!(customer = %customer.id, "account registered");
        Ok(Outcome::Registered {
            customer_id: customer.id.clone(),
        })
    }

    fn login(&mut self, id: &str, password: &str) -> Result<Outcome> {
        self.require_logged_out()?;
        let customer = self.directory.authenticate(id, password)?;
        let outcome = Outcome::LoggedIn {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
        };
        self.state = SessionState::LoggedIn {
            customer_id: id.to_string(),
        };
        Ok(outcome)
    }

    fn rent(&mut self, customer_id: &str, vehicle_id: &str, days: u32) -> Result<Outcome> {
        let vehicle = self.catalog.find(vehicle_id)?;
        let total = pricing::quote(vehicle, days)?;
        self.catalog.mark_rented(vehicle_id)?;
        let rental = Rental::new(vehicle_id, customer_id, days, total);
        self.directory.append_rental(customer_id, rental.clone())?;
        info!(vehicle = %vehicle_id, customer = %customer_id, days, %total, "processed rental");
        Ok(Outcome::Rented { rental })
    }

    fn return_vehicle(&mut self, customer_id: &str, vehicle_id: Option<&str>) -> Result<Outcome> {
        let history = self.directory.history(customer_id)?;
        if history.is_empty() {
            return Ok(Outcome::NothingToReturn);
        }
        let target = match vehicle_id {
            Some(id) => ledger::latest_for_vehicle(history, id)
                .map(|rental| rental.vehicle_id.clone())
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "vehicle {} is not in this account's rental history",
                        id
                    ))
                })?,
            None => match ledger::latest(history) {
                Some(rental) => rental.vehicle_id.clone(),
                None => return Ok(Outcome::NothingToReturn),
            },
        };
        self.catalog.mark_returned(&target)?;
        info!(vehicle = %target, customer = %customer_id, "closed rental");
        Ok(Outcome::Returned { vehicle_id: target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::seed_catalog;
    use rust_decimal_macros::dec;

    fn session_with_u1() -> SessionController {
        let mut directory = AccountDirectory::new();
        directory.register("U1", "Asha", "pw1").unwrap();
        let mut session = SessionController::new(seed_catalog().unwrap(), directory);
        session
            .handle(Action::Login {
                id: "U1".to_string(),
                password: "pw1".to_string(),
            })
            .unwrap();
        session
    }

    fn rent(session: &mut SessionController, vehicle_id: &str, days: u32) -> Outcome {
        session
            .handle(Action::Rent {
                vehicle_id: vehicle_id.to_string(),
                days,
            })
            .unwrap()
    }

    #[test]
    fn test_rent_scenario_discounted_car() {
        let mut session = session_with_u1();
        let outcome = rent(&mut session, "C1", 3);
        match outcome {
            Outcome::Rented { rental } => {
                assert_eq!(rental.total, dec!(5700.00));
                assert_eq!(rental.days, 3);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(session.directory().history("U1").unwrap().len(), 1);
        assert!(!session.catalog().find("C1").unwrap().available);
    }

    #[test]
    fn test_rent_twice_without_return_fails() {
        let mut session = session_with_u1();
        rent(&mut session, "C1", 3);
        let err = session
            .handle(Action::Rent {
                vehicle_id: "C1".to_string(),
                days: 2,
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        // one rental on file, not two
        assert_eq!(session.directory().history("U1").unwrap().len(), 1);
    }

    #[test]
    fn test_return_restores_availability() {
        let mut session = session_with_u1();
        rent(&mut session, "C1", 3);
        let outcome = session
            .handle(Action::Return { vehicle_id: None })
            .unwrap();
        assert!(matches!(outcome, Outcome::Returned { vehicle_id } if vehicle_id == "C1"));
        assert!(session.catalog().find("C1").unwrap().available);
        // history keeps the closed rental
        assert_eq!(session.directory().history("U1").unwrap().len(), 1);
    }

    #[test]
    fn test_return_by_vehicle_id() {
        let mut session = session_with_u1();
        rent(&mut session, "C1", 3);
        rent(&mut session, "T1", 1);
        let outcome = session
            .handle(Action::Return {
                vehicle_id: Some("C1".to_string()),
            })
            .unwrap();
        assert!(matches!(outcome, Outcome::Returned { vehicle_id } if vehicle_id == "C1"));
        assert!(session.catalog().find("C1").unwrap().available);
        assert!(!session.catalog().find("T1").unwrap().available);
    }

    #[test]
    fn test_return_with_empty_history_is_noop() {
        let mut session = session_with_u1();
        let outcome = session
            .handle(Action::Return { vehicle_id: None })
            .unwrap();
        assert!(matches!(outcome, Outcome::NothingToReturn));
    }

    #[test]
    fn test_return_of_vehicle_never_rented_here() {
        let mut session = session_with_u1();
        rent(&mut session, "C1", 3);
        let err = session
            .handle(Action::Return {
                vehicle_id: Some("T1".to_string()),
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_loan_request_and_transfer_scenario() {
        let mut session = session_with_u1();
        session
            .handle(Action::Logout)
            .unwrap();
        session
            .handle(Action::Register {
                id: "U2".to_string(),
                name: "Banu".to_string(),
                password: "pw2".to_string(),
            })
            .unwrap();
        session
            .handle(Action::Login {
                id: "U1".to_string(),
                password: "pw1".to_string(),
            })
            .unwrap();

        let outcome = session
            .handle(Action::RequestLoan { amount: dec!(1000) })
            .unwrap();
        assert!(matches!(outcome, Outcome::LoanBalance { balance } if balance == dec!(1000)));

        let outcome = session
            .handle(Action::TransferLoan {
                to_id: "U2".to_string(),
                amount: dec!(400),
            })
            .unwrap();
        assert!(
            matches!(outcome, Outcome::Transferred { balance, .. } if balance == dec!(600))
        );
        assert_eq!(
            session.directory().get("U2").unwrap().loan_balance,
            dec!(400)
        );
    }

    #[test]
    fn test_actions_require_login() {
        let mut session = SessionController::new(seed_catalog().unwrap(), AccountDirectory::new());
        let err = session
            .handle(Action::Rent {
                vehicle_id: "C1".to_string(),
                days: 1,
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_login_twice_is_invalid_state() {
        let mut session = session_with_u1();
        let err = session
            .handle(Action::Login {
                id: "U1".to_string(),
                password: "pw1".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_delete_account_logs_out_and_forgets() {
        let mut session = session_with_u1();
        let outcome = session.handle(Action::DeleteAccount).unwrap();
        assert!(matches!(outcome, Outcome::AccountDeleted));
        assert!(!session.is_logged_in());
        assert!(session.directory().get("U1").is_err());
    }

    #[test]
    fn test_failed_login_leaves_session_logged_out() {
        let mut directory = AccountDirectory::new();
        directory.register("U1", "Asha", "pw1").unwrap();
        let mut session = SessionController::new(seed_catalog().unwrap(), directory);
        let err = session
            .handle(Action::Login {
                id: "U1".to_string(),
                password: "wrong".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed));
        assert!(!session.is_logged_in());
    }
}
