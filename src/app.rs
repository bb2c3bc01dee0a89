//! eframe app that lays out every seat of one table.

use egui::{Context, RichText};
use seat_shared::{SeatAction, SeatToken};

use crate::invite::Origin;
use crate::store::TableStore;
use crate::theme::{SeatColors, MARGIN_MD};
use crate::view::SeatView;

/// How many dispatched actions the log panel keeps.
const ACTION_LOG_LEN: usize = 50;

pub struct TableApp {
    origin: Origin,
    store: TableStore,
    views: Vec<SeatView>,
    colors: SeatColors,
    action_log: Vec<(SeatToken, SeatAction)>,
}

impl TableApp {
    pub fn new(origin: Origin, store: TableStore) -> Self {
        let mut app = Self {
            origin,
            store,
            views: Vec::new(),
            colors: SeatColors::default(),
            action_log: Vec::new(),
        };
        app.sync_views();
        app
    }

    fn sync_views(&mut self) {
        self.store.dispatch_pending_messages();

        let tokens: Vec<SeatToken> = self.store.tokens().cloned().collect();
        self.views.retain(|v| tokens.contains(v.token()));
        for token in &tokens {
            match self.views.iter_mut().find(|v| v.token() == token) {
                Some(view) => {
                    view.sync(&self.store);
                }
                None => {
                    if let Some(view) = SeatView::from_store(&self.store, token, self.origin.clone()) {
                        self.views.push(view);
                    }
                }
            }
        }
        // Keep table order.
        self.views.sort_by_key(|v| tokens.iter().position(|t| t == v.token()));
    }

    fn record(&mut self, token: SeatToken, action: SeatAction) {
        self.action_log.push((token, action));
        if self.action_log.len() > ACTION_LOG_LEN {
            let excess = self.action_log.len() - ACTION_LOG_LEN;
            self.action_log.drain(..excess);
        }
    }

    pub fn ui(&mut self, ctx: &Context) {
        self.sync_views();

        let mut dispatched = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.store.table_name());
            if let Some(err) = self.store.last_error() {
                ui.colored_label(self.colors.error, err);
            }
            ui.add_space(MARGIN_MD);
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for view in self.views.iter_mut() {
                        let token = view.token().clone();
                        crate::render::render_seat(
                            ui,
                            view,
                            &self.colors,
                            &mut |action: SeatAction| dispatched.push((token.clone(), action)),
                        );
                    }
                });
                ui.separator();
                ui.label(RichText::new("Dispatched actions:").strong());
                for (token, action) in self.action_log.iter().rev() {
                    ui.monospace(format!("{} {:?}", token, action));
                }
            });
        });

        for (token, action) in dispatched {
            self.record(token, action);
        }
    }
}

impl eframe::App for TableApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
