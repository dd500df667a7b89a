//! Stat reconciler and the small counters that go with list loads.
//!
//! Values are assigned straight onto widgets looked up through [`STAT_WIDGETS`];
//! nothing is diffed. Missing optional fields render as placeholders, never fail.

use super::labels;
use super::page::{Page, WidgetId};
use super::pagination::{page_count, Pager};
use crate::config::ViewConfig;
use crate::model::{Equipment, Stats};

/// Stat fields shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Health,
    San,
    Fatigue,
    Galleons,
    Sickle,
    Knut,
    Time,
    EnemyHealth,
    Hand,
    Body,
}

/// Widget(s) each stat is painted into: the text widget and, for percentages, a bar.
pub struct StatWidget {
    pub field: StatField,
    pub text: WidgetId,
    pub bar: Option<WidgetId>,
}

pub const STAT_WIDGETS: &[StatWidget] = &[
    StatWidget { field: StatField::Health, text: WidgetId::HealthText, bar: Some(WidgetId::HealthBar) },
    StatWidget { field: StatField::San, text: WidgetId::SanText, bar: Some(WidgetId::SanBar) },
    StatWidget { field: StatField::Fatigue, text: WidgetId::FatigueText, bar: Some(WidgetId::FatigueBar) },
    StatWidget { field: StatField::Galleons, text: WidgetId::Galleons, bar: None },
    StatWidget { field: StatField::Sickle, text: WidgetId::Sickle, bar: None },
    StatWidget { field: StatField::Knut, text: WidgetId::Knut, bar: None },
    StatWidget { field: StatField::Time, text: WidgetId::Time, bar: None },
    StatWidget { field: StatField::EnemyHealth, text: WidgetId::EnemyHealth, bar: None },
    StatWidget { field: StatField::Hand, text: WidgetId::HandSlot, bar: None },
    StatWidget { field: StatField::Body, text: WidgetId::BodySlot, bar: None },
];

fn percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn slot(item: Option<&str>) -> &str {
    match item {
        Some(name) if !name.is_empty() => name,
        _ => labels::EMPTY_SLOT,
    }
}

fn text_for(field: StatField, stats: &Stats, equipment: &Equipment) -> String {
    match field {
        StatField::Health => format!("{}/100", stats.health),
        StatField::San => format!("{}/100", stats.san),
        StatField::Fatigue => format!("{}/100", stats.fatigue),
        StatField::Galleons => format!("{}: {}", labels::GALLEONS, stats.galleons),
        StatField::Sickle => format!("{}: {}", labels::SICKLE, stats.sickle),
        StatField::Knut => format!("{}: {}", labels::KNUT, stats.knut),
        StatField::Time => format!("{}: {}", labels::TIME, stats.time),
        StatField::EnemyHealth => format!(
            "{}: {}/{}",
            labels::ENEMY_HEALTH,
            optional(stats.enemy_health),
            optional(stats.enemy_max_health)
        ),
        StatField::Hand => format!("{}: {}", labels::HAND, slot(equipment.hand.as_deref())),
        StatField::Body => format!("{}: {}", labels::BODY, slot(equipment.body.as_deref())),
    }
}

fn bar_value(field: StatField, stats: &Stats) -> Option<f64> {
    match field {
        StatField::Health => Some(stats.health),
        StatField::San => Some(stats.san),
        StatField::Fatigue => Some(stats.fatigue),
        _ => None,
    }
}

/// Paint stats and equipment onto their widgets.
pub fn reconcile(page: &mut Page, stats: &Stats, equipment: &Equipment) {
    for binding in STAT_WIDGETS {
        page.set_text(binding.text, text_for(binding.field, stats, equipment));
        if let (Some(bar), Some(value)) = (binding.bar, bar_value(binding.field, stats)) {
            page.widget_mut(bar).width = Some(format!("{}%", percent(value)));
        }
    }
    page.bump_stats_revision();
}

/// `背包容量: n/capacity`, classed `good` below the warning threshold.
pub fn update_capacity(page: &mut Page, inventory_length: u32, config: &ViewConfig) {
    let widget = page.widget_mut(WidgetId::InventoryCapacity);
    widget.text = format!(
        "{}: {}/{}",
        labels::CAPACITY,
        inventory_length,
        config.inventory_capacity
    );
    let class = if inventory_length < config.capacity_warning_at {
        "good"
    } else {
        "warning"
    };
    widget.class = Some(class.to_string());
}

/// The undo button is only live while the server holds a snapshot to revert to.
pub fn update_undo(page: &mut Page, can_undo: bool) {
    page.set_disabled(WidgetId::UndoItem, !can_undo);
}

pub fn update_spells_pagination(page: &mut Page, pager: &Pager, total_items: usize) {
    let total_pages = page_count(total_items, pager.page_size());
    page.set_text(
        WidgetId::SpellsPageInfo,
        labels::page_info(pager.current(), total_pages),
    );
    page.set_disabled(WidgetId::PrevSpells, pager.is_first());
    page.set_disabled(WidgetId::NextSpells, pager.is_last(total_items));
}

pub fn update_skills_pagination(page: &mut Page, pager: &Pager, total_items: usize) {
    let (_, end) = pager.bounds(total_items);
    page.set_disabled(WidgetId::PrevSkills, pager.is_first());
    page.set_disabled(WidgetId::NextSkills, end >= total_items);
}
