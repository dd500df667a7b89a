//! List renderers: data slice in, [`Fragment`] out.
//!
//! Renderers are pure. An empty input always produces a single placeholder node.

use super::labels;
use super::page::{ActionBinding, Fragment, Intent, ItemNode};
use super::selection::SkillSelection;
use crate::model::{
    Achievement, ContainerScope, InventoryMap, ItemActionRequest, ItemVerb, Spell,
};

fn item_binding(label: &str, verb: ItemVerb, item: &str, scope: &ContainerScope) -> ActionBinding {
    ActionBinding {
        label: label.to_string(),
        intent: Intent::Item(ItemActionRequest::new(verb, item, scope.clone())),
    }
}

fn stacked_title(name: &str, quantity: u32) -> String {
    format!("{} (x{})", name, quantity)
}

fn stacks(
    items: &InventoryMap,
    empty: &str,
    bindings: impl Fn(&str) -> Vec<ActionBinding>,
) -> Fragment {
    if items.is_empty() {
        return Fragment::placeholder(empty);
    }
    Fragment::items(
        items
            .iter()
            .map(|(name, quantity)| ItemNode {
                icon: labels::ICON_BAG,
                title: stacked_title(name, *quantity),
                description: None,
                actions: bindings(name),
            })
            .collect(),
    )
}

fn described(icon: &'static str, name: &str, description: &str) -> ItemNode {
    ItemNode {
        icon,
        title: name.to_string(),
        description: Some(description.to_string()),
        actions: Vec::new(),
    }
}

/// Backpack panel: use or discard each stack.
pub fn render_inventory(items: &InventoryMap) -> Fragment {
    let scope = ContainerScope::Inventory;
    stacks(items, labels::EMPTY_INVENTORY, |name| {
        vec![
            item_binding(labels::USE, ItemVerb::Use, name, &scope),
            item_binding(labels::DISCARD, ItemVerb::Discard, name, &scope),
        ]
    })
}

/// Container side of the container panel: take out or discard.
pub fn render_container_items(container_id: &str, items: &InventoryMap) -> Fragment {
    let scope = ContainerScope::named(container_id);
    stacks(items, labels::EMPTY_CONTAINER, |name| {
        vec![
            item_binding(labels::TAKE_OUT, ItemVerb::MoveToInventory, name, &scope),
            item_binding(labels::DISCARD, ItemVerb::Discard, name, &scope),
        ]
    })
}

/// Backpack side of the container panel: put into the container.
pub fn render_container_inventory(container_id: &str, inventory: &InventoryMap) -> Fragment {
    let scope = ContainerScope::named(container_id);
    stacks(inventory, labels::EMPTY_INVENTORY, |name| {
        vec![item_binding(
            labels::PUT_IN,
            ItemVerb::MoveToContainer,
            name,
            &scope,
        )]
    })
}

pub fn render_spells(spells: &[Spell]) -> Fragment {
    if spells.is_empty() {
        return Fragment::placeholder(labels::NO_SPELLS);
    }
    Fragment::items(
        spells
            .iter()
            .map(|s| described(labels::ICON_WAND, &s.name, &s.description))
            .collect(),
    )
}

/// Skill picker: each spell gets a select/deselect toggle reflecting `selection`.
pub fn render_skills(skills: &[Spell], selection: &SkillSelection) -> Fragment {
    if skills.is_empty() {
        return Fragment::placeholder(labels::NO_SKILLS);
    }
    Fragment::items(
        skills
            .iter()
            .map(|s| {
                let label = if selection.contains(&s.name) {
                    labels::DESELECT
                } else {
                    labels::SELECT
                };
                let mut node = described(labels::ICON_SWORDS, &s.name, &s.description);
                node.actions.push(ActionBinding {
                    label: label.to_string(),
                    intent: Intent::ToggleSkill(s.name.clone()),
                });
                node
            })
            .collect(),
    )
}

pub fn render_achievements(achievements: &[Achievement]) -> Fragment {
    if achievements.is_empty() {
        return Fragment::placeholder(labels::NO_ACHIEVEMENTS);
    }
    Fragment::items(
        achievements
            .iter()
            .map(|a| described(labels::ICON_TROPHY, &a.name, &a.description))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::page::Node;

    fn spell(name: &str) -> Spell {
        Spell {
            name: name.to_string(),
            description: format!("{} description", name),
        }
    }

    #[test]
    fn empty_inventory_is_only_the_placeholder() {
        let fragment = render_inventory(&InventoryMap::new());
        assert_eq!(
            fragment.nodes,
            vec![Node::Placeholder(labels::EMPTY_INVENTORY.to_string())]
        );
        assert_eq!(fragment.item_nodes().count(), 0);
    }

    #[test]
    fn every_empty_list_has_its_own_placeholder() {
        let empty = InventoryMap::new();
        assert_eq!(
            render_container_items("trunk", &empty),
            Fragment::placeholder(labels::EMPTY_CONTAINER)
        );
        assert_eq!(
            render_container_inventory("trunk", &empty),
            Fragment::placeholder(labels::EMPTY_INVENTORY)
        );
        assert_eq!(render_spells(&[]), Fragment::placeholder(labels::NO_SPELLS));
        assert_eq!(
            render_skills(&[], &SkillSelection::new(3)),
            Fragment::placeholder(labels::NO_SKILLS)
        );
        assert_eq!(
            render_achievements(&[]),
            Fragment::placeholder(labels::NO_ACHIEVEMENTS)
        );
    }

    #[test]
    fn inventory_bindings_target_the_player_inventory() {
        let mut items = InventoryMap::new();
        items.insert("Chocolate Frog".into(), 2);
        let fragment = render_inventory(&items);
        let intent = fragment
            .binding("Chocolate Frog (x2)", labels::USE)
            .expect("use binding");
        assert_eq!(
            intent,
            &Intent::Item(ItemActionRequest::new(
                ItemVerb::Use,
                "Chocolate Frog",
                ContainerScope::Inventory
            ))
        );
    }

    #[test]
    fn container_bindings_carry_the_container_id() {
        let mut items = InventoryMap::new();
        items.insert("Wand".into(), 1);
        let fragment = render_container_items("trunk", &items);
        assert_eq!(
            fragment.binding("Wand (x1)", labels::TAKE_OUT),
            Some(&Intent::Item(ItemActionRequest::new(
                ItemVerb::MoveToInventory,
                "Wand",
                ContainerScope::named("trunk")
            )))
        );
        let paired = render_container_inventory("trunk", &items);
        assert_eq!(
            paired.binding("Wand (x1)", labels::PUT_IN),
            Some(&Intent::Item(ItemActionRequest::new(
                ItemVerb::MoveToContainer,
                "Wand",
                ContainerScope::named("trunk")
            )))
        );
    }

    #[test]
    fn stacks_render_sorted_by_name() {
        let mut items = InventoryMap::new();
        items.insert("Quill".into(), 1);
        items.insert("Bezoar".into(), 3);
        let titles: Vec<_> = render_inventory(&items)
            .item_nodes()
            .map(|n| n.title.clone())
            .collect();
        assert_eq!(titles, vec!["Bezoar (x3)", "Quill (x1)"]);
    }

    #[test]
    fn skill_toggle_label_follows_selection() {
        let mut selection = SkillSelection::new(3);
        selection.toggle("Protego");
        let fragment = render_skills(&[spell("Protego"), spell("Stupefy")], &selection);
        assert!(fragment.binding("Protego", labels::DESELECT).is_some());
        assert!(fragment.binding("Stupefy", labels::SELECT).is_some());
        assert!(fragment.binding("Protego", labels::SELECT).is_none());
    }

    #[test]
    fn spells_show_descriptions_without_actions() {
        let fragment = render_spells(&[spell("Lumos")]);
        let node = fragment.item_nodes().next().expect("one node");
        assert_eq!(node.icon, labels::ICON_WAND);
        assert_eq!(node.description.as_deref(), Some("Lumos description"));
        assert!(node.actions.is_empty());
    }
}
