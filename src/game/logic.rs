//! Cupcake Clicker game logic — pure functions, fully testable.

use super::state::{BakeryState, ItemEffect, ItemId, Particle, TrophyId};

/// Advance the game by `delta_ticks` ticks (at 10 ticks/sec).
pub fn tick(state: &mut BakeryState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);

    // The auto-clicker advances tick by tick so a multi-tick frame (e.g.
    // after a dropped frame) yields exactly what single ticks would have.
    if let Some(interval) = state.auto_interval {
        for _ in 0..delta_ticks {
            state.auto_phase += 1;
            if state.auto_phase >= interval {
                state.auto_phase = 0;
                state.cupcakes += state.click_value;
            }
        }
    }

    // Banner clears itself 3 seconds after an unlock
    if let Some(banner) = &mut state.banner {
        banner.ticks_left = banner.ticks_left.saturating_sub(delta_ticks);
        if banner.ticks_left == 0 {
            state.banner = None;
        }
    }

    if state.click_flash > 0 {
        state.click_flash = state.click_flash.saturating_sub(delta_ticks);
    }
    if state.purchase_flash > 0 {
        state.purchase_flash = state.purchase_flash.saturating_sub(delta_ticks);
    }

    // Update particles
    for p in &mut state.particles {
        p.life = p.life.saturating_sub(delta_ticks);
    }
    state.particles.retain(|p| p.life > 0);

    // The 100ms trophy poll
    check_trophies(state);
}

/// Manual click: add `click_value` cupcakes + spawn a particle.
pub fn click(state: &mut BakeryState) {
    state.cupcakes += state.click_value;
    state.total_clicks += 1;
    state.click_flash = 3; // flash for 3 ticks

    // Spawn floating "+N" particle
    let col_offset = (state.next_random() % 13) as i16 - 6; // -6..+6
    let life = 8 + (state.next_random() % 5); // 8-12 ticks
    state.particles.push(Particle {
        text: format!("+{}", format_number(state.click_value)),
        col_offset,
        life,
        max_life: life,
    });
    // Cap particles to avoid unbounded growth under rapid clicking
    if state.particles.len() > 20 {
        state.particles.remove(0);
    }
}

/// Try to buy the store item at `index`. Returns true if successful.
///
/// Purchases are repeatable: the effect re-applies and the price escalates
/// every time. The owned set only records the first purchase.
pub fn buy(state: &mut BakeryState, index: usize) -> bool {
    let (id, cost) = match state.shop.get(index) {
        Some(item) => (item.id, item.cost),
        None => return false,
    };
    if state.cupcakes < cost {
        return false;
    }

    state.cupcakes -= cost;
    state.shop[index].escalate();
    if !state.owns(id) {
        state.owned.push(id);
    }
    state.purchase_flash = 5; // flash for 5 ticks (0.5s)

    match id.effect() {
        ItemEffect::ClickBoost(boost) => {
            state.click_value += boost;
            state.add_log(
                &format!(
                    "Bought {} — click power is now {}",
                    id.name(),
                    format_number(state.click_value)
                ),
                false,
            );
        }
        ItemEffect::AutoClicker { interval_ticks } => {
            // Only one timer is ever active: installing a new one replaces
            // the previous, faster or slower, and restarts its phase.
            let replaced = state.auto_interval.is_some();
            state.auto_interval = Some(interval_ticks);
            state.auto_phase = 0;
            let per_sec = state
                .auto_per_sec()
                .map(|c| format!("{:.1}", c))
                .unwrap_or_default();
            if replaced {
                state.add_log(
                    &format!("Bought {} — auto-clicker replaced ({}/sec)", id.name(), per_sec),
                    false,
                );
            } else {
                state.add_log(
                    &format!("Bought {} — auto-clicker installed ({}/sec)", id.name(), per_sec),
                    false,
                );
            }
        }
    }

    true
}

/// Evaluate all trophy predicates and unlock newly met ones.
/// Each trophy unlocks at most once, in any order.
pub fn check_trophies(state: &mut BakeryState) {
    for i in 0..state.trophies.len() {
        if state.trophies[i].unlocked {
            continue;
        }
        let id = state.trophies[i].id;
        if trophy_met(state, id) {
            unlock_trophy(state, i);
        }
    }
}

/// Trophy predicate over the current state.
fn trophy_met(state: &BakeryState, id: TrophyId) -> bool {
    match id {
        TrophyId::First => state.total_clicks >= 1,
        // Evaluated on the balance, not lifetime earnings
        TrophyId::Dough => state.cupcakes >= 50,
        TrophyId::Cheat => state.owns(ItemId::Eggs),
        TrophyId::Oven => state.owns(ItemId::Sprinkles),
    }
}

fn unlock_trophy(state: &mut BakeryState, index: usize) {
    state.trophies[index].unlocked = true;
    let id = state.trophies[index].id;
    state.add_log(&format!("🏆 Unlocked: {}", id.text()), true);
    state.set_banner(format!("Unlocked: {}", id.text()));
}

/// Format a count with commas (e.g. 1234567 → "1,234,567").
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
