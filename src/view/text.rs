//! Plain-text presentation of a [`Page`] for terminals and logs.

use std::fmt::Write;

use super::notice::NoticeLevel;
use super::page::{Node, Page, RegionId, WidgetId};

const STAT_ORDER: &[(WidgetId, Option<WidgetId>)] = &[
    (WidgetId::HealthText, Some(WidgetId::HealthBar)),
    (WidgetId::SanText, Some(WidgetId::SanBar)),
    (WidgetId::FatigueText, Some(WidgetId::FatigueBar)),
    (WidgetId::Galleons, None),
    (WidgetId::Sickle, None),
    (WidgetId::Knut, None),
    (WidgetId::Time, None),
    (WidgetId::EnemyHealth, None),
    (WidgetId::HandSlot, None),
    (WidgetId::BodySlot, None),
];

/// One line per node: `icon title - description [action|action]`.
pub fn describe_region(page: &Page, region: RegionId) -> String {
    let mut out = String::new();
    let Some(fragment) = page.region(region) else {
        return out;
    };
    for node in &fragment.nodes {
        match node {
            Node::Placeholder(text) => {
                let _ = writeln!(out, "  {}", text);
            }
            Node::Item(item) => {
                let _ = write!(out, "  {} {}", item.icon, item.title);
                if let Some(desc) = &item.description {
                    let _ = write!(out, " - {}", desc);
                }
                if !item.actions.is_empty() {
                    let labels: Vec<&str> = item.actions.iter().map(|a| a.label.as_str()).collect();
                    let _ = write!(out, " [{}]", labels.join("|"));
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Stat widgets in their usual on-page order; unpainted widgets are skipped.
pub fn describe_stats(page: &Page) -> String {
    let mut out = String::new();
    for (text_id, bar_id) in STAT_ORDER {
        let Some(text) = page.text(*text_id) else {
            continue;
        };
        match bar_id.and_then(|id| page.widget(id)).and_then(|w| w.width.as_deref()) {
            Some(width) => {
                let _ = writeln!(out, "  {:<14} ({})", text, width);
            }
            None => {
                let _ = writeln!(out, "  {}", text);
            }
        }
    }
    out
}

/// Label of a paging control, or nothing if it was never painted.
pub fn describe_control(page: &Page, id: WidgetId, label: &str) -> Option<String> {
    page.widget(id)
        .map(|w| format!("{}{}", label, if w.disabled { " (disabled)" } else { "" }))
}

pub fn describe_notices(page: &Page) -> String {
    let mut out = String::new();
    for notice in page.notices.iter() {
        let tag = match notice.level {
            NoticeLevel::Info => "*",
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "x",
        };
        let _ = write!(out, "{} {}", tag, notice.text);
        if notice.retryable {
            out.push_str(" (retry)");
        }
        out.push('\n');
    }
    out
}
