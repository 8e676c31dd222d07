//! Terminal drift runner (default binary).
//!
//! Fly a ship through a parallax starfield and pick up fuel cans before the
//! tank runs dry. Uses crossterm for input and the framebuffer renderer from
//! `tui_drift::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_drift::config::Config;
use tui_drift::core::{Canvas, GameState};
use tui_drift::engine::Driver;
use tui_drift::headless::run_headless;
use tui_drift::input::{should_quit, KeyEdge, KeyTracker};
use tui_drift::logging::init_logging;
use tui_drift::term::{FrameBuffer, GameView, PixelCanvas, TerminalRenderer, Viewport};
use tui_drift::types::{CANVAS_HEIGHT, CANVAS_WIDTH};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load(&args)?;
    init_logging(&config)?;

    if let Some(ticks) = config.headless_ticks {
        print!("{}", run_headless(&config, ticks));
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    let release_events = term.enter()?;

    let result = run(&mut term, &config, release_events);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, release_events: bool) -> Result<()> {
    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let (pw, ph) = view.layout(viewport).pixel_size();

    let game = GameState::new(config.world, config.tuning);
    let canvas = PixelCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, pw, ph);
    let mut driver = Driver::new(game, canvas);

    let mut keys = KeyTracker::new().with_release_events(release_events);
    if let Some(ms) = config.release_timeout_ms {
        keys = keys.with_release_timeout_ms(ms);
    }
    log::info!(
        "starting: {}x{} terminal, canvas {}x{} px, release events {}",
        w,
        h,
        driver.canvas().px_width(),
        driver.canvas().px_height(),
        release_events
    );

    let mut fb = FrameBuffer::new(w, h);
    let mut last = Instant::now();
    let mut key_clock = last;
    let mut dirty = true;

    loop {
        if event::poll(driver.time_until_next())? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        log::info!("quit after {} ticks", driver.game().ticks());
                        return Ok(());
                    }
                    let edge = match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            keys.handle_key_press(key.code)
                        }
                        KeyEventKind::Release => keys.handle_key_release(key.code),
                    };
                    if let Some(edge) = edge {
                        apply_edge(&mut driver, edge);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    let (pw, ph) = view.layout(viewport).pixel_size();
                    driver.canvas_mut().resize(pw, ph);
                    term.invalidate();
                    dirty = true;
                }
                Event::FocusLost => {
                    for edge in keys.release_all() {
                        apply_edge(&mut driver, edge);
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last);
        last = now;

        // Whole milliseconds only; the remainder carries to the next pass.
        let key_ms = elapsed_ms(now.duration_since(key_clock));
        if key_ms > 0 {
            key_clock += Duration::from_millis(u64::from(key_ms));
            for edge in keys.update(key_ms) {
                apply_edge(&mut driver, edge);
            }
        }

        if driver.advance(elapsed).is_some() {
            dirty = true;
        }

        if dirty {
            let snap = driver.game().snapshot();
            view.render_into(driver.canvas(), &snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }
    }
}

fn apply_edge<C: Canvas>(driver: &mut Driver<C>, edge: KeyEdge) {
    match edge {
        KeyEdge::Down(direction) => driver.key_down(direction),
        KeyEdge::Up(direction) => driver.key_up(direction),
    }
}

fn elapsed_ms(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}
