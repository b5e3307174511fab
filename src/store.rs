// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The canonical transaction list.
//!
//! Every successful mutation re-syncs before returning: the new list is
//! written to storage first, then swapped into memory, then handed to the
//! presenter as a fresh [`Snapshot`]. A storage failure aborts the mutation
//! with memory untouched, so the two never disagree.

use crate::db::KeyValueStore;
use crate::error::{Error, Result};
use crate::models::{Transaction, parse_amount};
use crate::persistence;
use crate::summary::{Snapshot, overflow_at};
use chrono::Utc;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info};

/// Receives a snapshot after every re-sync.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot);
}

impl Presenter for () {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

pub struct Store<K, P> {
    kv: K,
    presenter: P,
    transactions: Vec<Transaction>,
}

impl<K: KeyValueStore, P: Presenter> Store<K, P> {
    /// Loads the persisted list (absent means empty) and runs a full re-sync.
    pub fn initialize(kv: K, presenter: P) -> Result<Self> {
        let loaded = persistence::load(&kv)?;
        debug!(count = loaded.len(), "loaded transactions");
        let mut store = Store {
            kv,
            presenter,
            transactions: Vec::new(),
        };
        store.commit(loaded)?;
        Ok(store)
    }

    /// Appends a transaction. Blank text, an amount that is not a finite
    /// number (or not storable exactly), totals that would leave the
    /// `Decimal` range, or no id left above the largest in use all make this
    /// a no-op returning `Ok(None)`.
    pub fn add(
        &mut self,
        description: &str,
        amount: &str,
        category: &str,
    ) -> Result<Option<i64>> {
        let description = description.trim();
        let category = category.trim();
        let parsed = parse_amount(amount);
        let Some(amount) = parsed.filter(|_| !description.is_empty() && !category.is_empty())
        else {
            debug!(description, amount, category, "add ignored: incomplete input");
            return Ok(None);
        };

        let Some(id) = next_id(self.transactions.iter().map(|t| t.id).max()) else {
            debug!("add ignored: ids exhausted");
            return Ok(None);
        };
        let mut next = self.transactions.clone();
        next.push(Transaction {
            id,
            description: description.to_string(),
            amount,
            category: category.to_string(),
        });
        if overflow_at(&next).is_some() {
            debug!(%amount, "add ignored: totals out of range");
            return Ok(None);
        }
        self.commit(next)?;
        info!(id, %amount, "added transaction");
        Ok(Some(id))
    }

    /// Removes the transaction with `id`. Unknown ids are not an error.
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            debug!(id, "remove ignored: no such transaction");
            return Ok(false);
        };
        let mut next = self.transactions.clone();
        next.remove(pos);
        self.commit(next)?;
        info!(id, "removed transaction");
        Ok(true)
    }

    /// Replaces the whole list with imported records. Either every element
    /// passes the shape check or nothing changes.
    pub fn replace_all(&mut self, records: &[Value]) -> Result<usize> {
        let next = validate_records(records)?;
        let count = next.len();
        self.commit(next)?;
        info!(count, "replaced transactions");
        Ok(count)
    }

    /// Empties the list and drops the persisted entry altogether.
    pub fn clear(&mut self) -> Result<()> {
        persistence::clear_key(&mut self.kv)?;
        self.transactions.clear();
        self.present();
        info!("cleared transactions");
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.transactions)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Ends the session, handing back the storage backend and the presenter.
    pub fn into_parts(self) -> (K, P) {
        (self.kv, self.presenter)
    }

    fn commit(&mut self, next: Vec<Transaction>) -> Result<()> {
        persistence::save(&mut self.kv, &next)?;
        self.transactions = next;
        self.present();
        Ok(())
    }

    fn present(&mut self) {
        let snapshot = Snapshot::of(&self.transactions);
        self.presenter.present(&snapshot);
    }
}

/// Creation time in milliseconds, bumped past the largest id in use.
/// `None` once the largest id is `i64::MAX`.
fn next_id(max_in_use: Option<i64>) -> Option<i64> {
    let now = Utc::now().timestamp_millis();
    match max_in_use {
        Some(max) => max.checked_add(1).map(|n| now.max(n)),
        None => Some(now),
    }
}

/// Like [`next_id`], falling back to the lowest free positive id.
fn fresh_id(used: &HashSet<i64>) -> i64 {
    if let Some(id) = next_id(used.iter().copied().max()) {
        return id;
    }
    let mut id = 1;
    while used.contains(&id) {
        id += 1;
    }
    id
}

/// Shape check for imported records: string `description`, numeric
/// `amount`, string `category`. Integer ids are kept; missing or repeated
/// ones get fresh ids. A list whose totals would leave the `Decimal` range is
/// rejected at the first element that overflows.
pub fn validate_records(records: &[Value]) -> Result<Vec<Transaction>> {
    let mut parsed = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let invalid = |reason: &str| Error::Validation {
            index,
            reason: reason.to_string(),
        };
        let obj = record.as_object().ok_or_else(|| invalid("not an object"))?;
        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("description must be text"))?;
        let amount = obj
            .get("amount")
            .and_then(Value::as_f64)
            .ok_or_else(|| invalid("amount must be a number"))?;
        let amount = crate::models::amount::from_f64(amount)
            .ok_or_else(|| invalid("amount is out of range or too precise"))?;
        let category = obj
            .get("category")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("category must be text"))?;
        let id = obj.get("id").and_then(Value::as_i64);
        parsed.push((id, description.to_string(), amount, category.to_string()));
    }

    let mut used = HashSet::new();
    let mut ids: Vec<Option<i64>> = parsed
        .iter()
        .map(|(id, ..)| id.filter(|id| used.insert(*id)))
        .collect();
    for slot in ids.iter_mut().filter(|slot| slot.is_none()) {
        let id = fresh_id(&used);
        used.insert(id);
        *slot = Some(id);
    }

    let out: Vec<Transaction> = parsed
        .into_iter()
        .zip(ids)
        .map(|((_, description, amount, category), id)| Transaction {
            id: id.unwrap_or_default(),
            description,
            amount,
            category,
        })
        .collect();
    if let Some(index) = overflow_at(&out) {
        return Err(Error::Validation {
            index,
            reason: "amount pushes the totals out of range".to_string(),
        });
    }
    Ok(out)
}
