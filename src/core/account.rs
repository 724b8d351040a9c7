//! The account ledger
//!
//! This module provides the `Account` struct, the authoritative in-memory
//! record of one account's cash balance, share holdings, and append-only
//! transaction log.
//!
//! The account is responsible for:
//! - Validating every operation before any state changes (atomicity: an
//!   operation is fully applied or fully rejected)
//! - Recording exactly one transaction per successful mutation
//! - Deriving read-only views: portfolio value, gain/loss, holdings
//!   snapshot, transaction history
//!
//! Prices come from an injected [`PriceOracle`]; the account never knows
//! which pricing source backs it.

use crate::pricing::PriceOracle;
use crate::types::{LedgerError, Operation, Quantity, Transaction, TransactionKind};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

/// One account's cash, holdings, and transaction history
///
/// Invariants, maintained across every operation:
/// - the cash balance is never negative
/// - every symbol present in the holdings map has a quantity greater than
///   zero (entries are removed when they reach zero, never stored as zero)
/// - the transaction log is append-only; each successful mutating operation
///   appends exactly one entry, each failed operation appends nothing
///
/// The gain/loss baseline (`initial_deposit`) is fixed at creation; later
/// deposits add cash but never move the baseline.
pub struct Account {
    /// Injected pricing capability used by buy, sell, and valuation
    oracle: Box<dyn PriceOracle>,

    /// Current spendable funds
    cash_balance: Decimal,

    /// Principal contributed at creation, the gain/loss baseline
    initial_deposit: Decimal,

    /// Shares currently owned, keyed by ticker symbol
    holdings: HashMap<String, Quantity>,

    /// Append-only transaction log in chronological order
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create a new account with an opening deposit
    ///
    /// The opening deposit seeds both the cash balance and the gain/loss
    /// baseline. It may be zero (an account can start empty) and is not
    /// recorded in the transaction log.
    ///
    /// # Arguments
    ///
    /// * `oracle` - Pricing capability used for purchases, sales, and
    ///   valuation
    /// * `opening_deposit` - Non-negative starting funds
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when the opening deposit is negative.
    pub fn new(oracle: Box<dyn PriceOracle>, opening_deposit: Decimal) -> Result<Self, LedgerError> {
        if opening_deposit < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(opening_deposit));
        }

        Ok(Account {
            oracle,
            cash_balance: opening_deposit,
            initial_deposit: opening_deposit,
            holdings: HashMap::new(),
            transactions: Vec::new(),
        })
    }

    /// Credit funds to the cash balance
    ///
    /// Does not move the gain/loss baseline: money deposited after creation
    /// is new principal, and folding it into the baseline would hide gains.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative (`InvalidAmount`)
    /// - Adding the amount to the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let new_balance = self
            .cash_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit"))?;

        self.cash_balance = new_balance;
        self.transactions
            .push(Transaction::record(TransactionKind::Deposit { amount }));

        Ok(())
    }

    /// Debit funds from the cash balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative (`InvalidAmount`)
    /// - The amount exceeds the cash balance (`InsufficientFunds`)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        if amount > self.cash_balance {
            return Err(LedgerError::insufficient_funds(self.cash_balance, amount));
        }

        let new_balance = self
            .cash_balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw"))?;

        self.cash_balance = new_balance;
        self.transactions
            .push(Transaction::record(TransactionKind::Withdraw { amount }));

        Ok(())
    }

    /// Purchase shares at the oracle's current price
    ///
    /// The unit price is captured at execution time and recorded with the
    /// transaction; it is never re-derived later.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Ticker symbol to purchase
    /// * `quantity` - Number of shares, greater than zero
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The quantity is zero (`InvalidQuantity`)
    /// - The oracle has no price for the symbol (`UnknownSymbol`)
    /// - The total cost exceeds the cash balance (`InsufficientFunds`)
    /// - The cost or the resulting share count would overflow
    pub fn buy(&mut self, symbol: &str, quantity: Quantity) -> Result<(), LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::invalid_quantity(quantity));
        }

        let unit_price = self.quote(symbol)?;

        let total_cost = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| LedgerError::arithmetic_overflow("buy"))?;

        if total_cost > self.cash_balance {
            return Err(LedgerError::insufficient_funds(
                self.cash_balance,
                total_cost,
            ));
        }

        // Compute every new value before touching state, so a late failure
        // cannot leave a partial effect behind.
        let new_balance = self
            .cash_balance
            .checked_sub(total_cost)
            .ok_or_else(|| LedgerError::arithmetic_overflow("buy"))?;

        let held = self.holdings.get(symbol).copied().unwrap_or(0);
        let new_held = held
            .checked_add(quantity)
            .ok_or_else(|| LedgerError::arithmetic_overflow("buy"))?;

        self.cash_balance = new_balance;
        self.holdings.insert(symbol.to_string(), new_held);
        self.transactions
            .push(Transaction::record(TransactionKind::Buy {
                symbol: symbol.to_string(),
                quantity,
                unit_price,
            }));

        Ok(())
    }

    /// Sell held shares at the oracle's current price
    ///
    /// Removes the holdings entry entirely when the sale brings the share
    /// count to zero.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Ticker symbol to sell
    /// * `quantity` - Number of shares, greater than zero
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The quantity is zero (`InvalidQuantity`)
    /// - The account holds fewer shares than requested, including none at
    ///   all (`InsufficientHoldings`)
    /// - The oracle has no price for the symbol (`UnknownSymbol`)
    /// - The proceeds or the resulting balance would overflow
    pub fn sell(&mut self, symbol: &str, quantity: Quantity) -> Result<(), LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::invalid_quantity(quantity));
        }

        let held = self.holdings.get(symbol).copied().unwrap_or(0);
        if held < quantity {
            return Err(LedgerError::insufficient_holdings(symbol, held, quantity));
        }

        let unit_price = self.quote(symbol)?;

        let proceeds = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| LedgerError::arithmetic_overflow("sell"))?;

        let new_balance = self
            .cash_balance
            .checked_add(proceeds)
            .ok_or_else(|| LedgerError::arithmetic_overflow("sell"))?;

        self.cash_balance = new_balance;
        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), remaining);
        }
        self.transactions
            .push(Transaction::record(TransactionKind::Sell {
                symbol: symbol.to_string(),
                quantity,
                unit_price,
            }));

        Ok(())
    }

    /// Route a parsed operation to the matching typed method
    ///
    /// This is the dispatch seam used by the CSV replay pipeline; typed
    /// callers can invoke [`deposit`](Self::deposit) and friends directly.
    pub fn apply(&mut self, operation: Operation) -> Result<(), LedgerError> {
        match operation {
            Operation::Deposit { amount } => self.deposit(amount),
            Operation::Withdraw { amount } => self.withdraw(amount),
            Operation::Buy { symbol, quantity } => self.buy(&symbol, quantity),
            Operation::Sell { symbol, quantity } => self.sell(&symbol, quantity),
        }
    }

    /// Current spendable funds
    pub fn cash_balance(&self) -> Decimal {
        self.cash_balance
    }

    /// The gain/loss baseline fixed at creation
    pub fn initial_deposit(&self) -> Decimal {
        self.initial_deposit
    }

    /// Current unit price for a symbol from the injected oracle
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` when the oracle has no price for the symbol.
    pub fn quote(&self, symbol: &str) -> Result<Decimal, LedgerError> {
        self.oracle
            .price(symbol)
            .ok_or_else(|| LedgerError::unknown_symbol(symbol))
    }

    /// Cash balance plus the market value of all holdings at current prices
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` if the oracle no longer prices a held symbol
    /// (unreachable with an oracle that is deterministic for the process
    /// lifetime), or an overflow error if valuation exceeds the numeric
    /// range.
    pub fn portfolio_value(&self) -> Result<Decimal, LedgerError> {
        let mut total = self.cash_balance;

        for (symbol, quantity) in &self.holdings {
            let unit_price = self.quote(symbol)?;
            let market_value = unit_price
                .checked_mul(Decimal::from(*quantity))
                .ok_or_else(|| LedgerError::arithmetic_overflow("portfolio_value"))?;
            total = total
                .checked_add(market_value)
                .ok_or_else(|| LedgerError::arithmetic_overflow("portfolio_value"))?;
        }

        Ok(total)
    }

    /// Portfolio value minus the initial deposit baseline
    pub fn gain_or_loss(&self) -> Result<Decimal, LedgerError> {
        let value = self.portfolio_value()?;
        value
            .checked_sub(self.initial_deposit)
            .ok_or_else(|| LedgerError::arithmetic_overflow("gain_or_loss"))
    }

    /// Defensive copy of the holdings map
    ///
    /// Mutating the returned map has no effect on the account.
    pub fn holdings_snapshot(&self) -> HashMap<String, Quantity> {
        self.holdings.clone()
    }

    /// The append-only transaction log in chronological order
    pub fn transaction_history(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("cash_balance", &self.cash_balance)
            .field("initial_deposit", &self.initial_deposit)
            .field("holdings", &self.holdings)
            .field("transactions", &self.transactions.len())
            .finish()
    }
}
