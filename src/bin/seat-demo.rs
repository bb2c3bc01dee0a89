//! Demo entry point: load a table snapshot and render every seat.
//!
//! Usage:
//!   seat-demo [--config PATH] [--seats TABLE.json] [--gui]

use anyhow::Context;
use clap::Parser;
use seat_shared::{
    Card, CardFace, CardSuit, Hand, HandRankCategory, Seat, SeatFlags, SeatSnapshot, TableMsg,
};
use seat_view::cli::DemoCli;
use seat_view::config::ViewerConfig;
use seat_view::pretty::format_plan;
use seat_view::{SeatView, TableStore};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = DemoCli::parse();

    let log_filter = if cli.debug {
        "debug".to_string()
    } else {
        "seat_view=info,seat_shared=info,warn".to_string()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .init();

    let mut cfg = ViewerConfig::load_or_create(&cli.config)
        .with_context(|| format!("loading or creating config '{}'", cli.config.display()))?;

    // Overrides are in-memory unless --persist is given.
    if let Some(table) = cli.table.clone() {
        cfg.table_name = table;
    }
    if let Some(host) = cli.host.clone() {
        cfg.host = host;
    }
    if let Some(seats) = cli.seats.clone() {
        cfg.seats_file = Some(seats);
    }
    if cli.persist {
        cfg.save(&cli.config)
            .with_context(|| format!("saving updated config '{}'", cli.config.display()))?;
    }

    let table = match &cfg.seats_file {
        Some(path) => load_table(path)?,
        None => sample_table(&cfg.table_name),
    };
    let mut store = TableStore::new(cfg.table_name.clone());
    store.apply_msg(table);
    tracing::info!(table = store.table_name(), seats = store.tokens().count(), "table loaded");

    if cli.gui {
        let app = seat_view::app::TableApp::new(cfg.origin(), store);
        eframe::run_native(
            "seat-demo",
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(app))),
        )
        .map_err(|e| anyhow::anyhow!("running window: {}", e))?;
        return Ok(());
    }

    for token in store.tokens() {
        if let Some(view) = SeatView::from_store(&store, token, cfg.origin()) {
            print!("{}", format_plan(token, view.plan(), true));
        }
    }
    Ok(())
}

fn load_table(path: &Path) -> anyhow::Result<TableMsg> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading table snapshot '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing table snapshot '{}'", path.display()))
}

/// A four-seat table mid-hand, used when no snapshot file is configured.
fn sample_table(name: &str) -> TableMsg {
    let ace_spades = Card::new(CardFace::Ace, CardSuit::Spades);
    let king_hearts = Card::new(CardFace::King, CardSuit::Hearts);

    let mut you = SeatSnapshot::new(Seat::occupied("seat-you", "You", 940));
    you.seat.chips_bet_count = 60;
    you.flags = SeatFlags {
        is_current_user: true,
        is_turn: true,
        can_bet: true,
        ..SeatFlags::default()
    };
    you.pocket_cards = Some(vec![ace_spades, king_hearts]);
    you.hand = Some(
        Hand::new(
            HandRankCategory::Pair,
            vec![ace_spades, Card::new(CardFace::Ace, CardSuit::Diamonds)],
        )
        .with_kickers(vec![king_hearts]),
    );

    let mut dealer = SeatSnapshot::new(Seat::occupied("seat-ann", "Ann", 1200));
    dealer.flags.is_dealer = true;
    dealer.flags.can_deal = true;

    let mut folded = SeatSnapshot::new(Seat::occupied("seat-bo", "Bo", 300));
    folded.flags.is_folded = true;

    TableMsg::Table {
        name: name.to_string(),
        seats: vec![you, dealer, folded, SeatSnapshot::new(Seat::empty("seat-free"))],
    }
}
