//! Panels, tabs and the sidebar.
mod common;

use common::*;
use wandview::client::Panel;
use wandview::gateway::Endpoint;
use wandview::model::Achievement;
use wandview::view::{labels, PanelId, RegionId};

#[tokio::test]
async fn opening_a_panel_loads_it_once() {
    let (client, gateway) = stocked();

    client.open(Panel::Inventory).await.unwrap();
    assert_eq!(gateway.count(Endpoint::Container), 1);
    client.open(Panel::Spells).await.unwrap();
    assert_eq!(gateway.count(Endpoint::Spells), 1);
    client.open(Panel::Achievements).await.unwrap();
    assert_eq!(gateway.count(Endpoint::Achievements), 1);
    client.open(Panel::Skills).await.unwrap();
    assert_eq!(gateway.count(Endpoint::Spells), 2);
    client.open_default_container().await.unwrap();
    assert_eq!(
        gateway.calls_to(Endpoint::Container)[1].fields,
        vec![("container".to_string(), "trunk".to_string())]
    );
    assert_eq!(gateway.calls().len(), 5);

    let page = client.page();
    assert_eq!(page.revision(RegionId::Skills), 1);
    for panel in [
        PanelId::Inventory,
        PanelId::Spells,
        PanelId::Achievements,
        PanelId::Skills,
        PanelId::Container,
    ] {
        assert!(page.is_open(panel));
    }
}

#[tokio::test]
async fn tabs_and_closing_never_fetch() {
    let (client, gateway) = stocked();
    client.open(Panel::Container("trunk".into())).await.unwrap();
    gateway.clear_calls();

    assert_eq!(
        client.with_page(|p| p.active_tab(PanelId::Container)),
        Some(RegionId::ContainerItems)
    );
    assert!(client.show_tab(PanelId::Container, RegionId::ContainerInventory));
    assert!(!client.show_tab(PanelId::Container, RegionId::Spells));
    let page = client.page();
    assert!(page.is_visible(RegionId::ContainerInventory));
    assert!(!page.is_visible(RegionId::ContainerItems));

    client.close(PanelId::Container);
    assert!(!client.page().is_open(PanelId::Container));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn page_load_collapses_sidebar_and_fills_skills() {
    let (client, gateway) = client();
    gateway.set_spells(spells(2));

    assert!(!client.toggle_sidebar());
    client.page_loaded().await.unwrap();

    let page = client.page();
    assert!(page.sidebar_collapsed());
    assert_eq!(page.revision(RegionId::Skills), 1);
    assert_eq!(gateway.count(Endpoint::Spells), 1);
    assert!(!client.toggle_sidebar());
    assert!(client.toggle_sidebar());
}

#[tokio::test]
async fn achievements_render_with_trophy() {
    let (client, gateway) = client();
    client.open(Panel::Achievements).await.unwrap();
    assert!(client
        .page()
        .region(RegionId::Achievements)
        .unwrap()
        .is_placeholder());

    gateway.set_achievements(vec![Achievement {
        name: "初出茅庐".into(),
        description: "完成第一场战斗".into(),
    }]);
    client.load_achievements().await.unwrap();
    let page = client.page();
    let node = page
        .region(RegionId::Achievements)
        .and_then(|f| f.item_nodes().next().cloned())
        .unwrap();
    assert_eq!(node.icon, labels::ICON_TROPHY);
    assert_eq!(node.title, "初出茅庐");
    assert_eq!(node.description.as_deref(), Some("完成第一场战斗"));
}
