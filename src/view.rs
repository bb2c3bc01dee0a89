//! The seat view: one per seat, owning its bet input and render plan.

use seat_shared::{SeatAction, SeatSnapshot, SeatToken};

use crate::bet_input::{BetAmount, BetError, BetInput};
use crate::classifier::{classify, BlockKind, ClassifyInput, SeatPlan};
use crate::highlight::{
    highlight_pocket_cards, CardEquality, CategoryDescriber, HandDescriber, ValueEquality,
};
use crate::invite::Origin;
use crate::store::TableStore;

/// Callbacks a seat uses to forward user intents to the table. Dispatch is
/// fire-and-forget; nothing is returned to the seat.
pub trait SeatActions {
    fn on_deal_press(&mut self);
    fn on_bet_press(&mut self, amount: f64);
    fn on_check_press(&mut self);
    fn on_call_press(&mut self);
    fn on_fold_press(&mut self);
}

impl<F> SeatActions for F
where
    F: FnMut(SeatAction),
{
    fn on_deal_press(&mut self) {
        self(SeatAction::Deal)
    }
    fn on_bet_press(&mut self, amount: f64) {
        self(SeatAction::Bet(amount))
    }
    fn on_check_press(&mut self) {
        self(SeatAction::Check)
    }
    fn on_call_press(&mut self) {
        self(SeatAction::Call)
    }
    fn on_fold_press(&mut self) {
        self(SeatAction::Fold)
    }
}

/// Buttons a seat can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatButton {
    Bet,
    Check,
    Call,
    Fold,
    Deal,
}

impl SeatButton {
    /// The three buttons that sit next to Bet in the betting row.
    pub const BETTING_ROW: [SeatButton; 3] = [SeatButton::Check, SeatButton::Call, SeatButton::Fold];

    pub fn label(self) -> &'static str {
        match self {
            SeatButton::Bet => "Bet",
            SeatButton::Check => "Check",
            SeatButton::Call => "Call",
            SeatButton::Fold => "Fold",
            SeatButton::Deal => "Deal",
        }
    }
}

/// Caller-supplied inputs for one seat.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatProps {
    pub table_name: String,
    pub snapshot: SeatSnapshot,
}

pub struct SeatView {
    origin: Origin,
    props: SeatProps,
    bet_input: BetInput,
    equality: Box<dyn CardEquality>,
    describer: Box<dyn HandDescriber>,
    plan: SeatPlan,
    seen_revision: Option<u64>,
}

impl SeatView {
    pub fn new(origin: Origin, props: SeatProps) -> Self {
        Self::with_collaborators(
            origin,
            props,
            Box::new(ValueEquality),
            Box::new(CategoryDescriber),
        )
    }

    /// Build a view with a specific card-equality predicate and hand
    /// describer.
    pub fn with_collaborators(
        origin: Origin,
        props: SeatProps,
        equality: Box<dyn CardEquality>,
        describer: Box<dyn HandDescriber>,
    ) -> Self {
        let bet_input = BetInput::new();
        let plan = build_plan(&origin, &props, &bet_input, &*equality, &*describer);
        Self {
            origin,
            props,
            bet_input,
            equality,
            describer,
            plan,
            seen_revision: None,
        }
    }

    /// Subscribe to the seat `token` held by `store`.
    pub fn from_store(store: &TableStore, token: &SeatToken, origin: Origin) -> Option<Self> {
        let props = store.props(token)?;
        let mut view = Self::new(origin, props);
        view.seen_revision = store.revision(token);
        Some(view)
    }

    pub fn token(&self) -> &SeatToken {
        self.props.snapshot.token()
    }

    pub fn props(&self) -> &SeatProps {
        &self.props
    }

    pub fn plan(&self) -> &SeatPlan {
        &self.plan
    }

    pub fn bet_text(&self) -> &str {
        self.bet_input.text()
    }

    /// Change notification for the seat inputs.
    pub fn set_props(&mut self, props: SeatProps) {
        if props == self.props {
            return;
        }
        self.props = props;
        self.rebuild();
    }

    /// Pull the latest props from `store` if the seat changed since the last
    /// sync. Returns whether the plan was rebuilt.
    pub fn sync(&mut self, store: &TableStore) -> bool {
        let token = self.token().clone();
        let Some(revision) = store.revision(&token) else {
            return false;
        };
        if self.seen_revision == Some(revision) {
            return false;
        }
        self.seen_revision = Some(revision);
        match store.props(&token) {
            Some(props) => {
                self.set_props(props);
                true
            }
            None => false,
        }
    }

    pub fn set_bet_text(&mut self, text: impl Into<String>) {
        self.bet_input.set_text(text);
        self.rebuild();
    }

    /// Whether `button` is currently shown and clickable.
    pub fn is_enabled(&self, button: SeatButton) -> bool {
        match button {
            SeatButton::Bet => self
                .plan
                .bet_controls()
                .is_some_and(|controls| controls.bet_enabled),
            SeatButton::Check | SeatButton::Call | SeatButton::Fold => {
                self.plan.has(BlockKind::BetControls)
            }
            SeatButton::Deal => self.plan.has(BlockKind::DealAction),
        }
    }

    /// Handle a click on `button`, dispatching to `actions` when the button
    /// is enabled. Returns the dispatched action.
    pub fn press(&mut self, button: SeatButton, actions: &mut dyn SeatActions) -> Option<SeatAction> {
        if !self.is_enabled(button) {
            tracing::debug!(seat = %self.token(), ?button, "ignoring press on disabled button");
            return None;
        }

        let action = match button {
            SeatButton::Bet => match self.submit_bet() {
                Ok(amount) => {
                    actions.on_bet_press(amount.value());
                    SeatAction::Bet(amount.value())
                }
                Err(_) => return None,
            },
            SeatButton::Check => {
                actions.on_check_press();
                SeatAction::Check
            }
            SeatButton::Call => {
                actions.on_call_press();
                SeatAction::Call
            }
            SeatButton::Fold => {
                actions.on_fold_press();
                SeatAction::Fold
            }
            SeatButton::Deal => {
                actions.on_deal_press();
                SeatAction::Deal
            }
        };
        tracing::info!(seat = %self.token(), ?action, "seat action");
        Some(action)
    }

    fn submit_bet(&mut self) -> Result<BetAmount, BetError> {
        let result = self.bet_input.submit_and_reset();
        if let Err(e) = &result {
            tracing::warn!(seat = %self.token(), error = %e, "bet rejected");
        }
        self.rebuild();
        result
    }

    fn rebuild(&mut self) {
        self.plan = build_plan(
            &self.origin,
            &self.props,
            &self.bet_input,
            &*self.equality,
            &*self.describer,
        );
        tracing::debug!(seat = %self.token(), blocks = ?self.plan.kinds(), "seat plan rebuilt");
    }
}

fn build_plan(
    origin: &Origin,
    props: &SeatProps,
    bet_input: &BetInput,
    equality: &dyn CardEquality,
    describer: &dyn HandDescriber,
) -> SeatPlan {
    let snapshot = &props.snapshot;
    let pocket_cards = snapshot
        .pocket_cards
        .as_deref()
        .map(|cards| highlight_pocket_cards(cards, snapshot.hand.as_ref(), equality, describer));

    classify(ClassifyInput {
        origin,
        table_name: &props.table_name,
        seat: &snapshot.seat,
        flags: snapshot.flags,
        pocket_cards,
        bet_input,
    })
}
