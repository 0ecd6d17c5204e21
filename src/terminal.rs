// src/terminal.rs
//! Text front-end: bar chart and alert output for a terminal

use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::{info, warn};

use crate::jobs::{ChartHandle, ChartRenderer, ChartSpec, Notification, NotificationLevel, Notifier};

const BAR_WIDTH: usize = 40;

/// Draws bar charts as text. Keeps every live chart until it is destroyed.
#[derive(Debug, Default)]
pub struct TerminalChart {
    next_id: u64,
    live: BTreeMap<u64, ChartSpec>,
}

impl TerminalChart {
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Text of every live chart.
    pub fn draw(&self) -> String {
        self.live.values().map(draw_bars).collect::<Vec<_>>().join("\n")
    }
}

impl ChartRenderer for TerminalChart {
    fn create(&mut self, spec: ChartSpec) -> ChartHandle {
        self.next_id += 1;
        self.live.insert(self.next_id, spec);
        ChartHandle::new(self.next_id)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle.id()).is_none() {
            warn!("Chart {} was already gone", handle.id());
        }
    }
}

fn draw_bars(spec: &ChartSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-- {} --", spec.title);
    let _ = writeln!(out, "   {}", spec.dataset_label);

    let max = spec.counts.iter().copied().max().unwrap_or(0);
    let label_width = spec.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    for (label, &count) in spec.labels.iter().zip(&spec.counts) {
        let len = if max == 0 { 0 } else { (count * BAR_WIDTH).div_ceil(max) };
        let _ = writeln!(
            out,
            "{:<width$} | {} {}",
            label,
            "#".repeat(len),
            count,
            width = label_width
        );
    }
    out
}

/// Prints alerts to stdout and records them in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        info!("Notification: {}", notification);
        let icon = match notification.level {
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        };
        println!("{} {}", icon, notification);
    }
}
