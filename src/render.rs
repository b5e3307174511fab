// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Terminal rendition of the store: transaction table, balance line and
//! chart table.

use crate::models::Theme;
use crate::store::Presenter;
use crate::summary::Snapshot;
use crate::utils::{fmt_money, pretty_table};
use comfy_table::{Cell, Color, Table};
use rust_decimal::Decimal;

/// Keeps the last snapshot it was handed; `frame` draws it.
#[derive(Debug, Default)]
pub struct TerminalView {
    theme: Theme,
    last: Option<Snapshot>,
    redraws: usize,
}

impl TerminalView {
    pub fn new(theme: Theme) -> Self {
        TerminalView {
            theme,
            ..Default::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    /// How many times the store has asked for a redraw.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    fn palette(&self) -> (Color, Color) {
        match self.theme {
            Theme::Light => (Color::DarkGreen, Color::DarkRed),
            Theme::Dark => (Color::Green, Color::Red),
        }
    }

    pub fn transactions_table(&self) -> Option<Table> {
        let snap = self.last.as_ref()?;
        let (income, expense) = self.palette();
        let mut t = pretty_table(&["ID", "Description", "Amount", "Category", "Kind"], Vec::new());
        for tx in &snap.transactions {
            let (kind, color) = if tx.is_expense() {
                ("Gasto", expense)
            } else {
                ("Ingreso", income)
            };
            t.add_row(vec![
                Cell::new(tx.id),
                Cell::new(&tx.description),
                Cell::new(fmt_money(&tx.amount)).fg(color),
                Cell::new(&tx.category),
                Cell::new(kind).fg(color),
            ]);
        }
        Some(t)
    }

    pub fn chart_table(&self) -> Option<Table> {
        let snap = self.last.as_ref()?;
        let total = snap
            .chart
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.value.abs()));
        let rows = snap
            .chart
            .iter()
            .map(|s| {
                let share = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    s.value.abs() / total * Decimal::ONE_HUNDRED
                };
                vec![
                    s.label.to_string(),
                    s.color.to_string(),
                    fmt_money(&s.value),
                    format!("{}%", share.round_dp(1)),
                ]
            })
            .collect();
        Some(pretty_table(&["Slice", "Colour", "Amount", "Share"], rows))
    }

    pub fn balance_line(&self) -> Option<String> {
        self.last
            .as_ref()
            .map(|s| format!("Balance: {}", fmt_money(&s.balance)))
    }

    /// The full screen: list, balance and chart.
    pub fn frame(&self) -> Option<String> {
        let list = self.transactions_table()?;
        let balance = self.balance_line()?;
        let chart = self.chart_table()?;
        Some(format!("{}\n{}\n{}", list, balance, chart))
    }
}

impl Presenter for TerminalView {
    fn present(&mut self, snapshot: &Snapshot) {
        self.last = Some(snapshot.clone());
        self.redraws += 1;
    }
}
