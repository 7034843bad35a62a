//! Placement cards: per-kind cooldowns and the current selection.

use serde::{Deserialize, Serialize};

use crate::defender::DefenderKind;

/// One placement card in the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Defender this card places.
    pub kind: DefenderKind,
    /// Ticks until the card may be used again; zero means ready.
    pub cooldown_remaining: u32,
}

impl Card {
    /// A fresh, ready card.
    #[must_use]
    pub const fn new(kind: DefenderKind) -> Self {
        Self {
            kind,
            cooldown_remaining: 0,
        }
    }

    /// Currency cost of this card's defender.
    #[must_use]
    pub const fn cost(&self) -> i32 {
        self.kind.cost()
    }

    /// Whether the card is off cooldown.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    /// Restart the placement cooldown after a successful placement.
    pub fn start_cooldown(&mut self) {
        self.cooldown_remaining = self.kind.card_cooldown_ticks();
    }

    /// Run the cooldown down by one tick.
    pub fn tick(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }
}

/// The full card tray plus the player's current selection.
///
/// Selection is pure UI state the core tracks on the renderer's
/// behalf; placement requests name their kind explicitly and are
/// validated against the matching card regardless of selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTray {
    cards: Vec<Card>,
    selected: Option<DefenderKind>,
}

impl CardTray {
    /// Tray with one ready card per defender kind.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: DefenderKind::ALL.map(Card::new).to_vec(),
            selected: None,
        }
    }

    /// All cards, in tray order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card for `kind`, if the tray carries one.
    #[must_use]
    pub fn card(&self, kind: DefenderKind) -> Option<&Card> {
        self.cards.iter().find(|c| c.kind == kind)
    }

    /// Mutable access to the card for `kind`.
    pub fn card_mut(&mut self, kind: DefenderKind) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.kind == kind)
    }

    /// The currently selected kind, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<DefenderKind> {
        self.selected
    }

    /// Select a card. Ignored while the card is cooling down.
    pub fn select(&mut self, kind: DefenderKind) {
        if self.card(kind).is_some_and(Card::is_ready) {
            self.selected = Some(kind);
        }
    }

    /// Drop the current selection (after a successful placement).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Run every card's cooldown down by one tick.
    pub fn tick(&mut self) {
        for card in &mut self.cards {
            card.tick();
        }
    }
}

impl Default for CardTray {
    fn default() -> Self {
        Self::new()
    }
}
