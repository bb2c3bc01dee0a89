//! Seat view wiring: bet lifecycle, action dispatch and store subscription.

use anyhow::Result;
use seat_shared::{
    Card, CardFace, CardSuit, Hand, HandRankCategory, Seat, SeatAction, SeatFlags, SeatSnapshot,
    SeatToken, TableMsg,
};
use seat_view::classifier::BlockKind;
use seat_view::{
    BetError, Origin, SeatActions, SeatButton, SeatProps, SeatView, TableStore,
};

/// Records every callback, the way a table host would.
#[derive(Default)]
struct Recorder {
    deals: usize,
    bets: Vec<f64>,
    checks: usize,
    calls: usize,
    folds: usize,
}

impl SeatActions for Recorder {
    fn on_deal_press(&mut self) {
        self.deals += 1;
    }
    fn on_bet_press(&mut self, amount: f64) {
        self.bets.push(amount);
    }
    fn on_check_press(&mut self) {
        self.checks += 1;
    }
    fn on_call_press(&mut self) {
        self.calls += 1;
    }
    fn on_fold_press(&mut self) {
        self.folds += 1;
    }
}

fn props(flags: SeatFlags) -> SeatProps {
    let mut snapshot = SeatSnapshot::new(Seat::occupied("seat-1", "Ann", 1000));
    snapshot.flags = flags;
    SeatProps {
        table_name: "river-7".into(),
        snapshot,
    }
}

fn betting_view() -> SeatView {
    SeatView::new(
        Origin::new("https:", "poker.example"),
        props(SeatFlags {
            can_bet: true,
            ..SeatFlags::default()
        }),
    )
}

#[test]
fn bet_of_fifty_dispatches_and_resets() {
    let mut view = betting_view();
    let mut host = Recorder::default();

    assert!(!view.is_enabled(SeatButton::Bet));
    view.set_bet_text("50");
    assert!(view.is_enabled(SeatButton::Bet));

    let action = view.press(SeatButton::Bet, &mut host);

    assert_eq!(action, Some(SeatAction::Bet(50.0)));
    assert_eq!(host.bets, vec![50.0]);
    assert_eq!(view.bet_text(), "");
    assert!(!view.is_enabled(SeatButton::Bet));
    assert_eq!(
        view.plan().bet_controls().map(|c| c.bet_enabled),
        Some(false)
    );
}

#[test]
fn bet_disabled_for_empty_buffer() {
    let mut view = betting_view();
    let mut host = Recorder::default();
    assert_eq!(view.press(SeatButton::Bet, &mut host), None);
    assert!(host.bets.is_empty());
}

#[test]
fn invalid_bet_is_rejected_and_kept() {
    let mut view = betting_view();
    let mut host = Recorder::default();

    view.set_bet_text("lots");
    assert!(view.is_enabled(SeatButton::Bet));
    assert_eq!(view.press(SeatButton::Bet, &mut host), None);

    assert!(host.bets.is_empty());
    assert_eq!(view.bet_text(), "lots");
    let controls = view.plan().bet_controls().cloned();
    assert_eq!(
        controls.and_then(|c| c.error),
        Some(BetError::NotANumber("lots".into()).to_string())
    );

    // Fixing the text clears the error and the bet goes through.
    view.set_bet_text("25");
    assert_eq!(view.plan().bet_controls().and_then(|c| c.error.clone()), None);
    assert_eq!(view.press(SeatButton::Bet, &mut host), Some(SeatAction::Bet(25.0)));
}

#[test]
fn zero_and_negative_bets_are_not_dispatched() {
    let mut view = betting_view();
    let mut host = Recorder::default();
    for text in ["0", "-10", "inf"] {
        view.set_bet_text(text);
        assert_eq!(view.press(SeatButton::Bet, &mut host), None, "{}", text);
    }
    assert!(host.bets.is_empty());
}

#[test]
fn check_call_fold_leave_the_buffer_alone() {
    let mut view = betting_view();
    let mut host = Recorder::default();
    view.set_bet_text("40");

    assert_eq!(view.press(SeatButton::Check, &mut host), Some(SeatAction::Check));
    assert_eq!(view.press(SeatButton::Call, &mut host), Some(SeatAction::Call));
    assert_eq!(view.press(SeatButton::Fold, &mut host), Some(SeatAction::Fold));

    assert_eq!((host.checks, host.calls, host.folds), (1, 1, 1));
    assert_eq!(view.bet_text(), "40");
}

#[test]
fn hidden_buttons_do_nothing() {
    let mut view = SeatView::new(Origin::default(), props(SeatFlags::default()));
    let mut host = Recorder::default();
    for button in [
        SeatButton::Bet,
        SeatButton::Check,
        SeatButton::Call,
        SeatButton::Fold,
        SeatButton::Deal,
    ] {
        assert!(!view.is_enabled(button));
        assert_eq!(view.press(button, &mut host), None);
    }
    assert_eq!(host.deals + host.checks + host.calls + host.folds, 0);
}

#[test]
fn deal_dispatches_when_allowed() {
    let mut view = SeatView::new(
        Origin::default(),
        props(SeatFlags {
            can_deal: true,
            ..SeatFlags::default()
        }),
    );
    let mut log = Vec::new();
    let action = view.press(SeatButton::Deal, &mut |a: SeatAction| log.push(a));
    assert_eq!(action, Some(SeatAction::Deal));
    assert_eq!(log, vec![SeatAction::Deal]);
}

#[test]
fn bet_buffer_survives_prop_changes() {
    let mut view = betting_view();
    view.set_bet_text("75");
    view.set_props(props(SeatFlags {
        can_bet: true,
        is_turn: true,
        ..SeatFlags::default()
    }));
    assert_eq!(view.bet_text(), "75");
    assert_eq!(view.plan().bet_controls().map(|c| c.text.as_str()), Some("75"));
}

#[test]
fn seats_do_not_share_bet_buffers() {
    let mut first = betting_view();
    let second = betting_view();
    first.set_bet_text("10");
    assert_eq!(second.bet_text(), "");
}

#[test]
fn view_follows_store_updates() -> Result<()> {
    let token = SeatToken::from("seat-1");
    let mut store = TableStore::new("river-7");
    store.apply_msg(TableMsg::Table {
        name: "river-7".into(),
        seats: vec![SeatSnapshot::new(Seat::occupied("seat-1", "Ann", 1000))],
    });

    let mut view = SeatView::from_store(&store, &token, Origin::default())
        .ok_or_else(|| anyhow::anyhow!("seat missing from store"))?;
    assert!(!view.sync(&store), "fresh view is already current");
    assert!(view.plan().pocket_cards().is_none());

    let ace_spades = Card::new(CardFace::Ace, CardSuit::Spades);
    let king_hearts = Card::new(CardFace::King, CardSuit::Hearts);
    store.queue_msg(TableMsg::PocketCards {
        token: token.clone(),
        cards: Some(vec![ace_spades, king_hearts]),
    });
    store.dispatch_pending_messages();
    assert!(view.sync(&store));
    let pocket = view
        .plan()
        .pocket_cards()
        .ok_or_else(|| anyhow::anyhow!("pocket cards not shown"))?;
    assert!(pocket.cards.iter().all(|c| !c.highlight));
    assert!(pocket.description.is_none());

    store.apply_msg(TableMsg::Hand {
        token: token.clone(),
        hand: Some(Hand::new(HandRankCategory::HighCard, vec![ace_spades])),
    });
    assert!(view.sync(&store));
    let pocket = view
        .plan()
        .pocket_cards()
        .ok_or_else(|| anyhow::anyhow!("pocket cards not shown"))?;
    assert!(pocket.cards[0].highlight);
    assert!(!pocket.cards[1].highlight);
    assert!(pocket.description.is_some());

    assert!(!view.sync(&store));
    Ok(())
}

#[test]
fn player_leaving_turns_seat_into_invite() -> Result<()> {
    let token = SeatToken::from("abc123");
    let mut store = TableStore::new("river-7");
    store.apply_msg(TableMsg::Seat(SeatSnapshot::new(Seat::occupied(
        "abc123", "Ann", 1000,
    ))));
    let mut view = SeatView::from_store(&store, &token, Origin::new("https:", "poker.example"))
        .ok_or_else(|| anyhow::anyhow!("seat missing from store"))?;
    assert!(view.plan().has(BlockKind::DisplayName));

    store.apply_msg(TableMsg::Seat(SeatSnapshot::new(Seat::empty("abc123"))));
    assert!(view.sync(&store));
    assert!(view.plan().is_empty_seat());
    assert_eq!(
        view.plan().blocks[0],
        seat_view::SeatBlock::Empty {
            invite_url: "https://poker.example/river-7/abc123".into()
        }
    );
    Ok(())
}
