mod clock;
mod game;
mod input;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use clock::TickClock;
use game::state::TICKS_PER_SEC;
use game::CupcakeGame;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};

/// Query the grid container's bounding rect and convert a pixel click to a
/// terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Wall-clock milliseconds from the browser, for the tick clock.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let game = Rc::new(RefCell::new(CupcakeGame::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = Rc::new(RefCell::new(TickClock::new(TICKS_PER_SEC)));

    #[cfg(target_arch = "wasm32")]
    {
        let mut g = game.borrow_mut();
        if crate::game::save::load_game(&mut g.state) {
            g.state.add_log("Save loaded — welcome back!", true);
        }
    }

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let (col, row) = (mouse_event.col, mouse_event.row);
            let action = cs.hit_test(col, row);

            web_sys::console::log_1(
                &format!(
                    "click: cell=({},{}), action={:?}, targets={}",
                    col,
                    row,
                    action,
                    cs.targets.len()
                )
                .into(),
            );
            drop(cs);

            if let Some(action_id) = action {
                game.borrow_mut()
                    .handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let mut g = game.borrow_mut();
            match key_event.code {
                KeyCode::Char(c) => {
                    g.handle_input(&InputEvent::Key(c.to_ascii_lowercase()));
                }
                KeyCode::Esc if g.state.show_help => {
                    g.state.show_help = false;
                }
                _ => {}
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();

            // Update terminal dimensions and clear last frame's targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let delta_ticks = clock.borrow_mut().update(now_ms());

            let mut g = game.borrow_mut();
            g.tick(delta_ticks);
            g.render(f, size, &click_state);
        }
    });

    Ok(())
}
