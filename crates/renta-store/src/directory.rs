//! Customer account directory

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use renta_domain::model::{Customer, Rental};
use renta_domain::service::{ledger, loan};
use renta_types::{Error, Money, Result};

/// Registry of customer accounts, keyed by id.
///
/// All mutation goes through the directory so the invariants hold:
/// passwords are stored as digests only, loan balances never go
/// negative, history entries are never rewritten.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    customers: HashMap<String, Customer>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a directory from snapshot data, re-checking id uniqueness.
    pub fn from_customers(customers: Vec<Customer>) -> Result<Self> {
        let mut directory = Self::new();
        for customer in customers {
            if directory.customers.contains_key(&customer.id) {
                return Err(Error::DuplicateId(customer.id));
            }
            directory.customers.insert(customer.id.clone(), customer);
        }
        Ok(directory)
    }

    /// Register a new account. The plaintext password is hashed here
    /// and dropped.
    pub fn register(&mut self, id: &str, name: &str, password: &str) -> Result<&Customer> {
        if self.customers.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        let customer = Customer::new(id, name, hash_password(password));
        self.customers.insert(id.to_string(), customer);
        self.get(id)
    }

    /// Check credentials. Unknown ids and wrong passwords fail the
    /// same way so callers cannot probe which ids exist.
    pub fn authenticate(&self, id: &str, password: &str) -> Result<&Customer> {
        let customer = self
            .customers
            .get(id)
            .ok_or(Error::AuthenticationFailed)?;
        if customer.password_hash != hash_password(password) {
            return Err(Error::AuthenticationFailed);
        }
        Ok(customer)
    }

    /// Remove an account and its history irrecoverably.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.customers
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::CustomerNotFound(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Result<&Customer> {
        self.customers
            .get(id)
            .ok_or_else(|| Error::CustomerNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Customer> {
        self.customers
            .get_mut(id)
            .ok_or_else(|| Error::CustomerNotFound(id.to_string()))
    }

    /// Grant a loan. No credit check; the desk hands out whatever is
    /// asked. Returns the new balance.
    pub fn request_loan(&mut self, id: &str, amount: Money) -> Result<Money> {
        let customer = self.get_mut(id)?;
        customer.loan_balance = loan::credit(customer.loan_balance, amount)?;
        Ok(customer.loan_balance)
    }

    /// Move loan balance between two accounts. Validates both sides
    /// before writing, so a failure leaves both balances untouched.
    /// Returns the new (from, to) balances.
    pub fn transfer_loan(
        &mut self,
        from_id: &str,
        to_id: &str,
        amount: Money,
    ) -> Result<(Money, Money)> {
        if from_id == to_id {
            return Err(Error::InvalidArgument(
                "cannot transfer a loan to the same account".to_string(),
            ));
        }
        let from_balance = self.get(from_id)?.loan_balance;
        let to_balance = self.get(to_id)?.loan_balance;
        let (new_from, new_to) = loan::transfer(from_balance, to_balance, amount)?;
        if let Some(from) = self.customers.get_mut(from_id) {
            from.loan_balance = new_from;
        }
        if let Some(to) = self.customers.get_mut(to_id) {
            to.loan_balance = new_to;
        }
        Ok((new_from, new_to))
    }

    /// Append a rental to a customer's history.
    pub fn append_rental(&mut self, id: &str, rental: Rental) -> Result<()> {
        let customer = self.get_mut(id)?;
        ledger::append(&mut customer.history, rental);
        Ok(())
    }

    /// Sort a customer's history by rental date, in place. Returns the
    /// entry count.
    pub fn sort_history(&mut self, id: &str) -> Result<usize> {
        let customer = self.get_mut(id)?;
        ledger::sort_by_date(&mut customer.history);
        Ok(customer.history.len())
    }

    pub fn history(&self, id: &str) -> Result<&[Rental]> {
        Ok(&self.get(id)?.history)
    }

    pub fn count(&self) -> usize {
        self.customers.len()
    }

    /// All customers, for snapshot capture. Order is unspecified.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
