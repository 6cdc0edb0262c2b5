//! Semantic click-action IDs.
//!
//! Mouse clicks resolve to one of these IDs via the click targets registered
//! during render; the controller dispatches on the ID, so keyboard and mouse
//! share one code path.

/// Tap the big cupcake.
pub const CLICK_CUPCAKE: u16 = 0;
/// Toggle the help overlay (help bar tap).
pub const TOGGLE_HELP: u16 = 1;
/// Dismiss the help overlay (tap anywhere while it is open).
pub const CLOSE_HELP: u16 = 2;

/// Buy the store item at `BUY_ITEM_BASE + index` (six items, 100..=105).
pub const BUY_ITEM_BASE: u16 = 100;

/// Map an action ID back to a store index, if it is a buy action.
pub fn buy_index(action_id: u16) -> Option<usize> {
    if (BUY_ITEM_BASE..BUY_ITEM_BASE + 6).contains(&action_id) {
        Some((action_id - BUY_ITEM_BASE) as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_index_maps_range() {
        assert_eq!(buy_index(BUY_ITEM_BASE), Some(0));
        assert_eq!(buy_index(BUY_ITEM_BASE + 5), Some(5));
        assert_eq!(buy_index(BUY_ITEM_BASE + 6), None);
        assert_eq!(buy_index(CLICK_CUPCAKE), None);
        assert_eq!(buy_index(TOGGLE_HELP), None);
    }
}
