use seat_shared::{SeatSnapshot, SeatToken, TableMsg};
use std::collections::VecDeque;

use crate::view::SeatProps;

#[derive(Clone, Debug)]
struct SeatEntry {
    snapshot: SeatSnapshot,
    revision: u64,
}

/// Client-side copy of the table, fed by [`TableMsg`]s.
///
/// Every change to a seat gives it a fresh revision; seat views compare
/// revisions to learn when to rebuild.
#[derive(Clone, Debug, Default)]
pub struct TableStore {
    table_name: String,
    seats: Vec<SeatEntry>,
    next_revision: u64,
    pending_messages: VecDeque<TableMsg>,
    last_error: Option<String>,
}

impl TableStore {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &SeatToken> {
        self.seats.iter().map(|e| e.snapshot.token())
    }

    pub fn snapshot(&self, token: &SeatToken) -> Option<&SeatSnapshot> {
        self.entry(token).map(|e| &e.snapshot)
    }

    pub fn revision(&self, token: &SeatToken) -> Option<u64> {
        self.entry(token).map(|e| e.revision)
    }

    pub fn props(&self, token: &SeatToken) -> Option<SeatProps> {
        self.snapshot(token).map(|snapshot| SeatProps {
            table_name: self.table_name.clone(),
            snapshot: snapshot.clone(),
        })
    }

    pub fn queue_msg(&mut self, msg: TableMsg) {
        self.pending_messages.push_back(msg);
    }

    pub fn dispatch_pending_messages(&mut self) {
        while let Some(msg) = self.pending_messages.pop_front() {
            self.apply_msg(msg);
        }
    }

    pub fn apply_msg(&mut self, msg: TableMsg) {
        match msg {
            TableMsg::Table { name, seats } => {
                tracing::debug!(table = %name, seats = seats.len(), "table replaced");
                // The name is part of every seat's props, so all seats change.
                self.table_name = name;
                self.seats.clear();
                for snapshot in seats {
                    let revision = self.bump();
                    self.seats.push(SeatEntry { snapshot, revision });
                }
                self.last_error = None;
            }
            TableMsg::Seat(snapshot) => {
                let revision = self.bump();
                match self.entry_mut(snapshot.token()) {
                    Some(entry) => {
                        entry.snapshot = snapshot;
                        entry.revision = revision;
                    }
                    None => self.seats.push(SeatEntry { snapshot, revision }),
                }
            }
            TableMsg::Flags { token, flags } => {
                self.update(&token, |s| s.flags = flags);
            }
            TableMsg::PocketCards { token, cards } => {
                self.update(&token, |s| s.pocket_cards = cards);
            }
            TableMsg::Hand { token, hand } => {
                self.update(&token, |s| s.hand = hand);
            }
            TableMsg::Error(e) => {
                tracing::warn!(error = %e, "table reported an error");
                self.last_error = Some(e);
            }
        }
    }

    fn update(&mut self, token: &SeatToken, f: impl FnOnce(&mut SeatSnapshot)) {
        let revision = self.bump();
        match self.entry_mut(token) {
            Some(entry) => {
                f(&mut entry.snapshot);
                entry.revision = revision;
            }
            None => {
                tracing::warn!(seat = %token, "update for unknown seat");
                self.last_error = Some(format!("unknown seat '{}'", token));
            }
        }
    }

    fn bump(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }

    fn entry(&self, token: &SeatToken) -> Option<&SeatEntry> {
        self.seats.iter().find(|e| e.snapshot.token() == token)
    }

    fn entry_mut(&mut self, token: &SeatToken) -> Option<&mut SeatEntry> {
        self.seats.iter_mut().find(|e| e.snapshot.token() == token)
    }
}
