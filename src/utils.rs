use std::{cmp::Ordering, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Section, SectionTableRow};

/// Sorts sections by key, numerically ascending.
///
/// Keys are opaque strings; numeric keys come first in numeric order, any
/// non-numeric key follows in plain string order.
pub fn sort_sections(sections: &mut Vec<Section>) {
    sections.sort_by(|a, b| compare_section_keys(&a.key, &b.key));
}

pub fn compare_section_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

pub fn section_table_rows(sections: &[Section]) -> Vec<SectionTableRow> {
    sections
        .iter()
        .map(|s| SectionTableRow {
            id: s.key.clone(),
            section_type: s.section_type.clone(),
            title: s.title.clone(),
        })
        .collect()
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
