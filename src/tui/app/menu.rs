use crate::dealer::Dealer;
use crate::deck::DOUBLE_DECK_LEN;
use crate::cards::Rank;

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    HandSize,
    MaxAttempts,
    MaxSets,
    RequireSatisfying,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::HandSize, MenuItem::MaxAttempts, MenuItem::MaxSets, MenuItem::RequireSatisfying];

const ATTEMPT_STEP: u32 = 100;
const MAX_SET_LIMIT: usize = Rank::ALL.len();

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg_hand_size),
            MenuItem::MaxAttempts => format!("Max Deals: {}", app.cfg_max_attempts),
            MenuItem::MaxSets => format!("Max Set Candidates: {}", app.cfg_max_sets),
            MenuItem::RequireSatisfying => format!(
                "Require Straight + Set: {}",
                if app.cfg_require_satisfying { "Yes" } else { "No" }
            ),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size < DOUBLE_DECK_LEN {
                    app.cfg_hand_size += 1;
                }
            }
            MenuItem::MaxAttempts => {
                app.cfg_max_attempts = if app.cfg_max_attempts == 1 {
                    ATTEMPT_STEP
                } else {
                    app.cfg_max_attempts.saturating_add(ATTEMPT_STEP)
                };
            }
            MenuItem::MaxSets => {
                if app.cfg_max_sets < MAX_SET_LIMIT {
                    app.cfg_max_sets += 1;
                }
            }
            MenuItem::RequireSatisfying => {
                app.cfg_require_satisfying = !app.cfg_require_satisfying;
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size > 1 {
                    app.cfg_hand_size -= 1;
                }
            }
            MenuItem::MaxAttempts => {
                app.cfg_max_attempts = app.cfg_max_attempts.saturating_sub(ATTEMPT_STEP).max(1);
            }
            MenuItem::MaxSets => {
                app.cfg_max_sets = app.cfg_max_sets.saturating_sub(1);
            }
            MenuItem::RequireSatisfying => {
                app.cfg_require_satisfying = !app.cfg_require_satisfying;
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.set_menu_error(None);
        let cfg = *self.dealer.config();
        self.menu_index = 0;
        self.cfg_hand_size = cfg.hand_size;
        self.cfg_max_attempts = cfg.max_attempts;
        self.cfg_max_sets = cfg.eval.max_set_candidates;
        self.cfg_require_satisfying = cfg.require_satisfying;
        self.scene = Scene::Menu;
    }

    /// Rebuild the dealer from the edited values and deal right away.
    pub fn apply_menu(&mut self) {
        match Dealer::new(self.edited_config()) {
            Ok(dealer) => {
                self.dealer = dealer;
                self.set_menu_error(None);
                self.scene = Scene::Hand;
                self.new_deal();
            }
            Err(err) => self.set_menu_error(Some(err.to_string())),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.set_menu_error(None);
        self.scene = Scene::Hand;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_size_is_clamped() {
        let mut app = AppState::default();
        app.cfg_hand_size = 1;
        app.menu_index = 0;
        app.menu_dec();
        assert_eq!(app.cfg_hand_size, 1);
        app.cfg_hand_size = DOUBLE_DECK_LEN;
        app.menu_inc();
        assert_eq!(app.cfg_hand_size, DOUBLE_DECK_LEN);
    }

    #[test]
    fn attempts_never_reach_zero() {
        let mut app = AppState::default();
        app.menu_index = 1;
        app.cfg_max_attempts = 50;
        app.menu_dec();
        assert_eq!(app.cfg_max_attempts, 1);
        app.menu_inc();
        assert_eq!(app.cfg_max_attempts, ATTEMPT_STEP);
    }

    #[test]
    fn apply_rebuilds_dealer_and_deals() {
        let mut app = AppState::default();
        app.cfg_hand_size = 30;
        app.cfg_require_satisfying = false;
        app.apply_menu();
        assert_eq!(app.scene, Scene::Hand);
        assert_eq!(app.dealer.config().hand_size, 30);
        assert_eq!(app.deal.as_ref().map(|d| d.hand.len()), Some(30));
    }

    #[test]
    fn open_menu_restores_applied_values() {
        let mut app = AppState::default();
        app.apply_menu();
        app.cfg_max_sets = 9;
        app.open_menu();
        assert_eq!(app.cfg_max_sets, app.dealer.config().eval.max_set_candidates);
    }
}
