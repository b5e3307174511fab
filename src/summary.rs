// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over a transaction list. Everything here is pure.

use crate::models::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, a| acc.saturating_add(a))
}

fn incomes(list: &[Transaction]) -> impl Iterator<Item = Decimal> + '_ {
    list.iter()
        .filter(|t| t.amount > Decimal::ZERO)
        .map(|t| t.amount)
}

fn expenses(list: &[Transaction]) -> impl Iterator<Item = Decimal> + '_ {
    list.iter()
        .filter(|t| t.amount < Decimal::ZERO)
        .map(|t| t.amount.abs())
}

// The store never holds a list for which `overflow_at` is `Some`, so the
// saturating sums below are exact for anything it hands out.

pub fn total_income(list: &[Transaction]) -> Decimal {
    saturating_sum(incomes(list))
}

pub fn total_expense(list: &[Transaction]) -> Decimal {
    saturating_sum(expenses(list))
}

/// Sum of every amount, zero entries included.
pub fn balance(list: &[Transaction]) -> Decimal {
    saturating_sum(list.iter().map(|t| t.amount))
}

/// Income minus expense. With exact decimals this always equals [`balance`].
pub fn available_balance(list: &[Transaction]) -> Decimal {
    total_income(list).saturating_sub(total_expense(list))
}

/// Index of the first transaction whose amount pushes a running total
/// (income, expense or balance, in list order) past the `Decimal` range.
pub fn overflow_at(list: &[Transaction]) -> Option<usize> {
    let (mut income, mut expense, mut balance) = (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
    for (index, t) in list.iter().enumerate() {
        let step = || -> Option<(Decimal, Decimal, Decimal)> {
            let balance = balance.checked_add(t.amount)?;
            if t.amount > Decimal::ZERO {
                Some((income.checked_add(t.amount)?, expense, balance))
            } else {
                Some((income, expense.checked_add(t.amount.abs())?, balance))
            }
        };
        match step() {
            Some(next) => (income, expense, balance) = next,
            None => return Some(index),
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub color: &'static str,
    #[serde(with = "crate::models::amount")]
    pub value: Decimal,
}

pub fn chart(list: &[Transaction]) -> [ChartSlice; 3] {
    [
        ChartSlice {
            label: "Ingresos",
            color: "#4caf50",
            value: total_income(list),
        },
        ChartSlice {
            label: "Gastos",
            color: "#f44336",
            value: total_expense(list),
        },
        ChartSlice {
            label: "Balance disponible",
            color: "#2196f3",
            value: available_balance(list),
        },
    ]
}

/// Everything a presenter needs to draw one state of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    #[serde(with = "crate::models::amount")]
    pub balance: Decimal,
    #[serde(with = "crate::models::amount")]
    pub income: Decimal,
    #[serde(with = "crate::models::amount")]
    pub expense: Decimal,
    pub chart: [ChartSlice; 3],
}

impl Snapshot {
    pub fn of(list: &[Transaction]) -> Self {
        Snapshot {
            transactions: list.to_vec(),
            balance: balance(list),
            income: total_income(list),
            expense: total_expense(list),
            chart: chart(list),
        }
    }
}

