//! Falling-sand window: macroquad entry point.
//!
//! The grid is sized from the window at startup, one cell per
//! [`PIXEL_SIZE`] screen pixels, and stays that size for the session.

use macroquad::prelude::*;

use sand_core::{SandConfig, Scene};
use sand_gui::app::AppState;
use sand_gui::input::{self, Pointer};
use sand_gui::theme::{
    PIXEL_SIZE, TEXT_SIZE, background, foreground, palette, screen_to_grid, to_screen,
};

const HELP: [&str; 5] = [
    "Left drag: paint",
    "Right click: choose material",
    "1-6: pick brush   +/-: pen size",
    "D: dark mode   C: clear",
    "Esc: close menu / quit",
];

fn window_conf() -> Conf {
    Conf {
        window_title: "Falling Sand".to_owned(),
        window_width: 640,
        window_height: 360,
        window_resizable: false,
        ..Default::default()
    }
}

/// Value following `flag` on the command line.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

fn draw_help() {
    let line_h = TEXT_SIZE + 4.0;
    let h = line_h * HELP.len() as f32 + 16.0;
    let w = 300.0;
    let (x, y) = ((screen_width() - w) / 2.0, (screen_height() - h) / 2.0);
    draw_rectangle(x, y, w, h, palette::SHADE);
    for (i, line) in HELP.iter().enumerate() {
        let ty = y + 8.0 + line_h * (i as f32 + 1.0) - 4.0;
        draw_text(line, x + 12.0, ty, TEXT_SIZE, palette::WHITE);
    }
}

fn draw_status(app: &AppState) {
    let status = format!(
        "{}  pen {}  cells {}",
        app.brush,
        app.pen_size,
        app.sim.grid().len()
    );
    draw_text(
        &status,
        6.0,
        screen_height() - 6.0,
        TEXT_SIZE,
        foreground(app.sim.dark_mode()),
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    // Parse CLI args: --scene <name> --seed <n> --dark
    let args: Vec<String> = std::env::args().collect();
    let scene = match arg_value(&args, "--scene").map(|s| s.parse::<Scene>()) {
        Some(Ok(scene)) => scene,
        Some(Err(e)) => {
            eprintln!("error: {e}");
            Scene::Empty
        }
        None => Scene::Empty,
    };
    let mut config = SandConfig::for_viewport(
        screen_width() as u32,
        screen_height() as u32,
        PIXEL_SIZE,
    );
    if args.iter().any(|a| a == "--dark") {
        config = config.with_dark_mode(true);
    }
    if let Some(seed) = arg_value(&args, "--seed") {
        match seed.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(e) => eprintln!("error: invalid seed '{seed}': {e}"),
        }
    }

    let mut app = match AppState::new(config, scene) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };

    let cell = PIXEL_SIZE as f32;

    loop {
        let pointer = Pointer::sample();

        if pointer.pressed || pointer.menu {
            app.show_help = false;
        }
        if pointer.menu {
            app.open_menu(pointer.x, pointer.y, screen_width(), screen_height());
        }

        if app.menu.is_open() {
            if pointer.pressed {
                app.click_menu(pointer.x, pointer.y);
            }
        } else {
            let (gx, gy) = screen_to_grid(pointer.x, pointer.y);
            app.paint(pointer.down, gx, gy);
        }

        if let Some(brush) = input::brush_pressed() {
            app.select(brush);
        }
        app.resize_pen(input::pen_delta());
        if input::dark_mode_pressed() {
            app.toggle_dark_mode();
        }
        if input::clear_pressed() {
            app.clear();
        }
        if input::escape_pressed() {
            app.escape();
        }
        if app.should_quit {
            break;
        }

        app.sim.step();

        clear_background(background(app.sim.dark_mode()));
        app.sim.paint_all(|x, y, color| {
            draw_rectangle(x as f32 * cell, y as f32 * cell, cell, cell, to_screen(color));
        });

        draw_status(&app);
        if app.menu.is_open() {
            app.menu
                .draw(app.sim.factory(), app.brush, (pointer.x, pointer.y));
        }
        if app.show_help {
            draw_help();
        }

        next_frame().await;
    }
}
