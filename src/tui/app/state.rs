use crate::dealer::{Deal, DealConfig, Dealer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Hand,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Deal,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub dealer: Dealer,
    /// Most recent deal, if any.
    pub deal: Option<Deal>,
    pub deals_made: u32,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_hand_size: usize,
    pub cfg_max_attempts: u32,
    pub cfg_max_sets: usize,
    pub cfg_require_satisfying: bool,
    rng: ChaCha8Rng,
    help_open: bool,
    deal_error: Option<String>,
    menu_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Dealer::default())
    }
}

impl AppState {
    /// Build the app around a validated dealer. A seeded config makes the
    /// whole sequence of deals reproducible.
    pub fn new(dealer: Dealer) -> Self {
        let cfg = *dealer.config();
        let rng = match cfg.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            scene: Scene::Menu,
            dealer,
            deal: None,
            deals_made: 0,
            menu_index: 0,
            cfg_hand_size: cfg.hand_size,
            cfg_max_attempts: cfg.max_attempts,
            cfg_max_sets: cfg.eval.max_set_candidates,
            cfg_require_satisfying: cfg.require_satisfying,
            rng,
            help_open: false,
            deal_error: None,
            menu_error: None,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn deal_error(&self) -> Option<&str> {
        self.deal_error.as_deref()
    }

    pub fn menu_error(&self) -> Option<&str> {
        self.menu_error.as_deref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn set_menu_error(&mut self, err: Option<String>) {
        self.menu_error = err;
    }

    pub(crate) fn edited_config(&self) -> DealConfig {
        let mut cfg = *self.dealer.config();
        cfg.hand_size = self.cfg_hand_size;
        cfg.max_attempts = self.cfg_max_attempts;
        cfg.require_satisfying = self.cfg_require_satisfying;
        cfg.eval.max_set_candidates = self.cfg_max_sets;
        cfg
    }

    /// Returns true when the action changed what is shown.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                true
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Hand {
                    self.help_open = !self.help_open;
                    return true;
                }
                false
            }
            InputAction::MenuNext => self.in_menu(Self::menu_next),
            InputAction::MenuPrev => self.in_menu(Self::menu_prev),
            InputAction::MenuInc => self.in_menu(Self::menu_inc),
            InputAction::MenuDec => self.in_menu(Self::menu_dec),
            InputAction::MenuApply => self.in_menu(Self::apply_menu),
            InputAction::MenuCancel => self.in_menu(Self::cancel_menu),
            InputAction::Deal => {
                if self.scene == Scene::Hand {
                    self.new_deal();
                    return true;
                }
                false
            }
        }
    }

    fn in_menu(&mut self, f: fn(&mut Self)) -> bool {
        if self.scene != Scene::Menu {
            return false;
        }
        f(self);
        true
    }

    /// Deal a fresh hand, re-dealing until the gate passes if configured.
    pub fn new_deal(&mut self) {
        self.close_help();
        match self.dealer.deal_with(&mut self.rng) {
            Ok(deal) => {
                self.deals_made += 1;
                self.deal = Some(deal);
                self.deal_error = None;
            }
            Err(err) => {
                self.deal_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_ignored_in_menu() {
        let mut app = AppState::default();
        assert!(!app.handle_input(InputAction::Deal));
        assert!(app.deal.is_none());
    }

    #[test]
    fn seeded_apps_deal_the_same_sequence() {
        let cfg = DealConfig { seed: Some(11), ..DealConfig::default() };
        let mut a = AppState::new(Dealer::new(cfg).unwrap());
        let mut b = AppState::new(Dealer::new(cfg).unwrap());
        a.scene = Scene::Hand;
        b.scene = Scene::Hand;
        for _ in 0..3 {
            a.new_deal();
            b.new_deal();
            assert_eq!(a.deal, b.deal);
        }
        assert_eq!(a.deals_made, 3);
    }

    #[test]
    fn exhausted_budget_is_reported() {
        let cfg = DealConfig { hand_size: 3, max_attempts: 2, ..DealConfig::default() };
        let mut app = AppState::new(Dealer::new(cfg).unwrap());
        app.scene = Scene::Hand;
        app.new_deal();
        assert!(app.deal.is_none());
        assert!(app.deal_error().unwrap().contains("2 deals"));
    }
}
