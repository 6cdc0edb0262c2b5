//! Cupcake Clicker game state definitions.

/// Ticks per second. One tick is the 100ms cadence everything runs on:
/// trophy checks, banner timers, and the fastest auto-clicker.
pub const TICKS_PER_SEC: u32 = 10;

/// The six purchasable store items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemId {
    Sprinkles,
    Cocoa,
    Cream,
    Eggs,
    Vanilla,
    Chocolate,
}

/// What buying an item does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    /// Permanently add to the per-click yield.
    ClickBoost(u64),
    /// Install (or replace) the auto-clicker with this firing period.
    AutoClicker { interval_ticks: u32 },
}

impl ItemId {
    /// All items in store display order.
    pub fn all() -> &'static [ItemId] {
        &[
            ItemId::Sprinkles,
            ItemId::Cocoa,
            ItemId::Cream,
            ItemId::Eggs,
            ItemId::Vanilla,
            ItemId::Chocolate,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ItemId::Sprinkles => "Sprinkles (+1 Click)",
            ItemId::Cocoa => "Cocoa (+5 Click)",
            ItemId::Cream => "Whipped Cream (+10 Click)",
            ItemId::Eggs => "Eggs (Auto 3 sec)",
            ItemId::Vanilla => "Vanilla (Auto 1 sec)",
            ItemId::Chocolate => "Choco (Auto 0.1 sec)",
        }
    }

    /// Cost of the first purchase. Escalates ×1.5 (rounded up) afterwards.
    pub fn base_cost(&self) -> u64 {
        match self {
            ItemId::Sprinkles => 50,
            ItemId::Cocoa => 200,
            ItemId::Cream => 500,
            ItemId::Eggs => 100,
            ItemId::Vanilla => 1_000,
            ItemId::Chocolate => 5_000,
        }
    }

    /// Purchase effect.
    pub fn effect(&self) -> ItemEffect {
        match self {
            ItemId::Sprinkles => ItemEffect::ClickBoost(1),
            ItemId::Cocoa => ItemEffect::ClickBoost(5),
            ItemId::Cream => ItemEffect::ClickBoost(10),
            ItemId::Eggs => ItemEffect::AutoClicker { interval_ticks: 30 },
            ItemId::Vanilla => ItemEffect::AutoClicker { interval_ticks: 10 },
            ItemId::Chocolate => ItemEffect::AutoClicker { interval_ticks: 1 },
        }
    }

    /// Key to buy (1-6 mapped to store index).
    pub fn key(&self) -> char {
        match self {
            ItemId::Sprinkles => '1',
            ItemId::Cocoa => '2',
            ItemId::Cream => '3',
            ItemId::Eggs => '4',
            ItemId::Vanilla => '5',
            ItemId::Chocolate => '6',
        }
    }

    /// Index into `ItemId::all()` / `BakeryState::shop`.
    pub fn index(&self) -> usize {
        match self {
            ItemId::Sprinkles => 0,
            ItemId::Cocoa => 1,
            ItemId::Cream => 2,
            ItemId::Eggs => 3,
            ItemId::Vanilla => 4,
            ItemId::Chocolate => 5,
        }
    }
}

/// A store entry: a static item plus its current (escalated) price.
#[derive(Clone, Debug)]
pub struct ShopItem {
    pub id: ItemId,
    /// Current price. Grows geometrically after every purchase.
    pub cost: u64,
}

impl ShopItem {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            cost: id.base_cost(),
        }
    }

    /// Raise the price after a purchase: `ceil(cost * 1.5)` in integer math.
    pub fn escalate(&mut self) {
        self.cost = (self.cost * 3).div_ceil(2);
    }
}

/// The four trophies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrophyId {
    First,
    Dough,
    Cheat,
    Oven,
}

impl TrophyId {
    /// All trophies in display order.
    pub fn all() -> &'static [TrophyId] {
        &[
            TrophyId::First,
            TrophyId::Dough,
            TrophyId::Cheat,
            TrophyId::Oven,
        ]
    }

    /// Full display text.
    pub fn text(&self) -> &'static str {
        match self {
            TrophyId::First => "CUPTASTIC: Clicked 1 time",
            TrophyId::Dough => "Making Dough: 50 Cupcakes",
            TrophyId::Cheat => "Stop Cheating: Bought Auto Clicker",
            TrophyId::Oven => "Fresh Oven: Bought Sprinkles",
        }
    }

    /// Icon shown in the trophy strip.
    pub fn icon(&self) -> &'static str {
        match self {
            TrophyId::First => "👆",
            TrophyId::Dough => "🥯",
            TrophyId::Cheat => "🥚",
            TrophyId::Oven => "✨",
        }
    }
}

/// A trophy with its unlock flag. Unlocks at most once, in any order.
#[derive(Clone, Debug)]
pub struct Trophy {
    pub id: TrophyId,
    pub unlocked: bool,
}

/// A floating text particle ("+N" rising from the cupcake).
#[derive(Clone, Debug)]
pub struct Particle {
    /// Text to display.
    pub text: String,
    /// Column offset from the center of the cupcake display.
    pub col_offset: i16,
    /// Remaining lifetime in ticks (starts high, counts down).
    pub life: u32,
    /// Maximum lifetime (for computing fade).
    pub max_life: u32,
}

/// Entry in the event log.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// The trophy-unlock banner: text plus its remaining display time.
#[derive(Clone, Debug)]
pub struct Banner {
    pub text: String,
    /// Ticks until the banner clears itself (3 seconds on unlock).
    pub ticks_left: u32,
}

/// Full state of a Cupcake Clicker game.
pub struct BakeryState {
    /// Current cupcake balance.
    pub cupcakes: u64,
    /// Cupcakes gained per manual click (and per auto-clicker fire).
    pub click_value: u64,
    /// Lifetime manual clicks.
    pub total_clicks: u64,
    /// Firing period of the single active auto-clicker, in ticks.
    /// None until an auto upgrade is bought; replaced wholesale on re-buy.
    pub auto_interval: Option<u32>,
    /// Ticks elapsed toward the next auto-clicker fire.
    pub auto_phase: u32,
    /// The store with current prices.
    pub shop: Vec<ShopItem>,
    /// Items purchased at least once, in first-purchase order.
    pub owned: Vec<ItemId>,
    /// Trophies with unlock flags.
    pub trophies: Vec<Trophy>,
    /// Message log.
    pub log: Vec<LogEntry>,
    /// Trophy-unlock banner, if one is showing.
    pub banner: Option<Banner>,
    /// Whether the help overlay is showing.
    pub show_help: bool,
    /// Animation frame counter (incremented every tick).
    pub anim_frame: u32,
    /// Recent click flash timer (ticks remaining for visual feedback).
    pub click_flash: u32,
    /// Purchase celebration flash timer.
    pub purchase_flash: u32,
    /// Active floating particles.
    pub particles: Vec<Particle>,
    /// Ticks since the last autosave.
    pub autosave_counter: u32,
    /// Simple RNG state for particle spread.
    pub rng_state: u32,
}

impl BakeryState {
    pub fn new() -> Self {
        Self {
            cupcakes: 0,
            click_value: 1,
            total_clicks: 0,
            auto_interval: None,
            auto_phase: 0,
            shop: ItemId::all().iter().map(|id| ShopItem::new(*id)).collect(),
            owned: Vec::new(),
            trophies: TrophyId::all()
                .iter()
                .map(|id| Trophy {
                    id: *id,
                    unlocked: false,
                })
                .collect(),
            log: vec![LogEntry {
                text: "Welcome to the Cupcake Bakery!".into(),
                is_important: true,
            }],
            banner: None,
            show_help: false,
            anim_frame: 0,
            click_flash: 0,
            purchase_flash: 0,
            particles: Vec::new(),
            autosave_counter: 0,
            rng_state: 42,
        }
    }

    /// Whether an item has ever been bought (trophy predicates use this).
    pub fn owns(&self, id: ItemId) -> bool {
        self.owned.contains(&id)
    }

    /// Cupcakes per second from the auto-clicker, if one is installed.
    pub fn auto_per_sec(&self) -> Option<f64> {
        self.auto_interval.map(|interval| {
            self.click_value as f64 * TICKS_PER_SEC as f64 / interval as f64
        })
    }

    /// Count of unlocked trophies.
    pub fn unlocked_trophy_count(&self) -> usize {
        self.trophies.iter().filter(|t| t.unlocked).count()
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }

    /// Show (or replace) the unlock banner for 3 seconds.
    pub fn set_banner(&mut self, text: String) {
        self.banner = Some(Banner {
            text,
            ticks_left: 3 * TICKS_PER_SEC,
        });
    }

    /// Tiny xorshift RNG for particle spread. Not gameplay-relevant.
    pub fn next_random(&mut self) -> u32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_initial_costs_match_catalog() {
        let state = BakeryState::new();
        let costs: Vec<u64> = state.shop.iter().map(|i| i.cost).collect();
        assert_eq!(costs, vec![50, 200, 500, 100, 1_000, 5_000]);
    }

    #[test]
    fn escalate_rounds_up() {
        let mut item = ShopItem::new(ItemId::Sprinkles);
        item.escalate();
        assert_eq!(item.cost, 75); // 50 * 1.5
        item.escalate();
        assert_eq!(item.cost, 113); // ceil(75 * 1.5) = ceil(112.5)
        item.escalate();
        assert_eq!(item.cost, 170); // ceil(113 * 1.5) = ceil(169.5)
    }

    #[test]
    fn item_index_matches_all_order() {
        for (i, id) in ItemId::all().iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn item_keys_are_1_to_6() {
        let keys: Vec<char> = ItemId::all().iter().map(|id| id.key()).collect();
        assert_eq!(keys, vec!['1', '2', '3', '4', '5', '6']);
    }

    #[test]
    fn auto_item_intervals() {
        assert_eq!(
            ItemId::Eggs.effect(),
            ItemEffect::AutoClicker { interval_ticks: 30 }
        );
        assert_eq!(
            ItemId::Vanilla.effect(),
            ItemEffect::AutoClicker { interval_ticks: 10 }
        );
        assert_eq!(
            ItemId::Chocolate.effect(),
            ItemEffect::AutoClicker { interval_ticks: 1 }
        );
    }

    #[test]
    fn new_state_has_no_auto_clicker() {
        let state = BakeryState::new();
        assert_eq!(state.auto_interval, None);
        assert_eq!(state.auto_per_sec(), None);
    }

    #[test]
    fn auto_per_sec_scales_with_click_value() {
        let mut state = BakeryState::new();
        state.auto_interval = Some(10); // fires once per second
        state.click_value = 6;
        assert!((state.auto_per_sec().unwrap() - 6.0).abs() < 0.001);

        state.auto_interval = Some(30); // fires every 3 seconds
        assert!((state.auto_per_sec().unwrap() - 2.0).abs() < 0.001);
    }

    #[test]
    fn owns_reflects_purchase_set() {
        let mut state = BakeryState::new();
        assert!(!state.owns(ItemId::Eggs));
        state.owned.push(ItemId::Eggs);
        assert!(state.owns(ItemId::Eggs));
        assert!(!state.owns(ItemId::Sprinkles));
    }

    #[test]
    fn log_truncation() {
        let mut state = BakeryState::new();
        for i in 0..60 {
            state.add_log(&format!("msg {}", i), false);
        }
        assert!(state.log.len() <= 50);
    }

    #[test]
    fn banner_lasts_three_seconds() {
        let mut state = BakeryState::new();
        state.set_banner("Unlocked: CUPTASTIC: Clicked 1 time".into());
        assert_eq!(state.banner.as_ref().unwrap().ticks_left, 30);
    }

    #[test]
    fn next_random_changes_state() {
        let mut state = BakeryState::new();
        let a = state.next_random();
        let b = state.next_random();
        assert_ne!(a, b);
    }
}
