//! The bundled demo table, loaded the way the demo binary loads it.

use anyhow::{Context, Result};
use seat_shared::{SeatToken, TableMsg};
use seat_view::classifier::{BlockKind, Border, SeatStatus};
use seat_view::pretty::format_plan;
use seat_view::{Origin, SeatView, TableStore};

fn load_store() -> Result<TableStore> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/river-7.json");
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let msg: TableMsg = serde_json::from_str(&text).context("parsing table snapshot")?;
    let mut store = TableStore::new("unnamed");
    store.apply_msg(msg);
    Ok(store)
}

fn view(store: &TableStore, token: &str) -> Result<SeatView> {
    SeatView::from_store(store, &SeatToken::from(token), Origin::new("https:", "poker.example"))
        .with_context(|| format!("seat {} missing", token))
}

#[test]
fn snapshot_renames_table() -> Result<()> {
    let store = load_store()?;
    assert_eq!(store.table_name(), "river-7");
    assert_eq!(store.tokens().count(), 3);
    Ok(())
}

#[test]
fn free_seat_links_to_table() -> Result<()> {
    let store = load_store()?;
    let text = format_plan(&SeatToken::from("abc123"), view(&store, "abc123")?.plan(), false);
    assert!(text.contains("https://poker.example/river-7/abc123"));
    Ok(())
}

#[test]
fn active_seat_is_highlighted_and_can_bet() -> Result<()> {
    let store = load_store()?;
    let plan = view(&store, "def456")?.plan().clone();
    assert_eq!(plan.frame.border, Border::TurnAccent);
    assert!(plan.has(BlockKind::BetControls));
    let pocket = plan.pocket_cards().context("pocket cards")?;
    assert_eq!(
        pocket.cards.iter().map(|c| c.highlight).collect::<Vec<_>>(),
        vec![true, false]
    );
    assert_eq!(pocket.description.as_deref(), Some("Pair, A♠ A♦, kickers K♥"));
    Ok(())
}

#[test]
fn bust_dealer_still_deals() -> Result<()> {
    let store = load_store()?;
    let plan = view(&store, "ghi789")?.plan().clone();
    assert_eq!(plan.status(), Some(SeatStatus::Bust));
    assert!(plan.has(BlockKind::DealerMarker));
    assert!(plan.has(BlockKind::DealAction));
    assert!(!plan.has(BlockKind::BetControls));
    Ok(())
}
