//! Fee-plan arithmetic
//!
//! Splits a plan into installments and tracks what has been paid against it.
//! All amounts are whole rupees.

use crate::models::{Fee, FeePlan, FeeTier, Payment};
use crate::utils::errors::{PcbPointError, Result};

pub const MAX_INSTALLMENTS: u8 = 3;

impl FeePlan {
    /// Create a plan, rejecting impossible schedules
    pub fn new(tier: FeeTier, total: u64, installments: u8) -> Result<Self> {
        let plan = Self { tier, total, installments };
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        if self.installments == 0 || self.installments > MAX_INSTALLMENTS {
            return Err(PcbPointError::InvalidInput(format!(
                "A fee plan has 1 to {} installments, got {}",
                MAX_INSTALLMENTS, self.installments
            )));
        }
        if self.total == 0 {
            return Err(PcbPointError::InvalidInput("Fee total must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Installment amounts. The remainder of an uneven split is carried by the
    /// first installment so the amounts always add up to the total.
    pub fn installment_amounts(&self) -> Result<Vec<u64>> {
        self.validate()?;

        let count = self.installments as u64;
        let base = self.total / count;
        let remainder = self.total % count;

        Ok((0..count)
            .map(|i| if i == 0 { base + remainder } else { base })
            .collect())
    }
}

/// Paid/outstanding view of one student's fee
#[derive(Debug, Clone, PartialEq)]
pub struct FeeLedger {
    plan: FeePlan,
    installments: Vec<u64>,
    paid: u64,
}

impl FeeLedger {
    pub fn new(plan: FeePlan, payments: &[Payment]) -> Result<Self> {
        let installments = plan.installment_amounts()?;
        let paid = payments.iter().map(|p| p.amount).sum();
        Ok(Self { plan, installments, paid })
    }

    pub fn from_fee(fee: &Fee) -> Result<Self> {
        Self::new(fee.plan, &fee.payments)
    }

    pub fn plan(&self) -> &FeePlan {
        &self.plan
    }

    pub fn installments(&self) -> &[u64] {
        &self.installments
    }

    pub fn paid(&self) -> u64 {
        self.paid
    }

    pub fn outstanding(&self) -> u64 {
        self.plan.total.saturating_sub(self.paid)
    }

    pub fn is_cleared(&self) -> bool {
        self.paid >= self.plan.total
    }

    /// Index and remaining amount of the first installment not fully covered
    /// by payments so far. `None` once the fee is cleared.
    pub fn next_installment(&self) -> Option<(usize, u64)> {
        let mut covered = self.paid;
        for (index, &amount) in self.installments.iter().enumerate() {
            if covered >= amount {
                covered -= amount;
            } else {
                return Some((index, amount - covered));
            }
        }
        None
    }

    /// Reject a payment that is zero or larger than what is still owed
    pub fn check_payment(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Err(PcbPointError::InvalidInput("Payment amount must be greater than 0".to_string()));
        }
        if amount > self.outstanding() {
            return Err(PcbPointError::InvalidInput(format!(
                "Payment of {} exceeds the outstanding {}",
                amount,
                self.outstanding()
            )));
        }
        Ok(())
    }
}
