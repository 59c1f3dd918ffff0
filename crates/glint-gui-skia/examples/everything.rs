//! Everything example
//!
//! Builds one of each widget kind, replays a scripted pointer session
//! against them headlessly and writes the final frame to `everything.png`.
//!
//! Run with `RUST_LOG=debug` to watch focus and click resolution.

use glint_gui::{Color, Corners, Rect, Surface, Vec2, WidgetKind};
use glint_gui_interactive::{Button, CheckBox, Slider, Text, Ui, View};
use glint_gui_skia::{Canvas, SkiaBackend, SkiaConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const WIDTH: i32 = 600;
const HEIGHT: i32 = 400;
const BACKGROUND: Color = Color::rgb(24, 26, 30);

/// Pointer samples: (x, y, pressed)
const SCRIPT: &[(i32, i32, bool)] = &[
    // Hover, then click "Hello"
    (100, 40, false),
    (100, 40, true),
    (100, 40, false),
    // Drag the slider from the left towards the right
    (60, 110, false),
    (60, 110, true),
    (180, 110, true),
    (260, 115, true),
    (260, 115, false),
    // Pick the second radio option
    (65, 175, false),
    (65, 175, true),
    (65, 175, false),
    // Quit needs confirming: click twice
    (500, 350, false),
    (500, 350, true),
    (500, 350, false),
    (500, 350, true),
    (500, 350, false),
];

fn main() -> glint_gui::Result<()> {
    env_logger::init();

    let backend = SkiaBackend::new(SkiaConfig::default());
    let mut ui = Ui::new(backend);

    let hellos = Rc::new(Cell::new(0));
    let quit = Rc::new(Cell::new(false));
    let volume = Rc::new(Cell::new(0.0_f32));
    let choice = Rc::new(RefCell::new(String::from("a")));

    let counter = hellos.clone();
    ui.add_button(
        Button::new("hello", (20, 20))
            .size((200, 40))
            .text("Hello")
            .on_click(move || counter.set(counter.get() + 1)),
    )?;

    let quitting = quit.clone();
    ui.add_button(
        Button::new("quit", (440, 330))
            .size((140, 40))
            .text("Quit")
            .confirm(true)
            .on_click(move || quitting.set(true)),
    )?;

    ui.add_button(Button::new("disabled", (240, 20)).size((160, 40)).text("Locked"))?;
    ui.lock(WidgetKind::Button, "disabled")?;

    let level = volume.clone();
    ui.add_slider(
        Slider::new("volume", (20, 100), (300, 26))
            .range(0.0, 100.0)
            .ticks(10)
            .value(0.0)
            .on_value_changed(move |value| level.set(value)),
    )?;

    let radios = ["a", "b", "c"];
    for (i, name) in radios.into_iter().enumerate() {
        let selected = choice.clone();
        ui.add_checkbox(
            CheckBox::new(name, (20 + i as i32 * 40, 160))
                .checked(i == 0)
                .group(radios)
                .on_check(move || *selected.borrow_mut() = name.to_string()),
        )?;
    }

    ui.add_text(
        Text::new("title", (WIDTH / 2, HEIGHT / 2))
            .text("glint-gui")
            .centered(true, true),
    )?;

    ui.add_view(
        View::new("swatch")
            .pos((440, 100))
            .size((140, 140))
            .on_screen_update(|canvas: &mut Canvas| {
                canvas.fill(Color::rgb(40, 44, 52));
                canvas.draw_rect(
                    Rect::new(10, 10, 120, 120),
                    Color::rgb(0, 66, 47),
                    Corners::all(12.0),
                );
                canvas.draw_circle(Vec2::new(70.0, 70.0), 30.0, Color::rgb(93, 67, 0));
            }),
    );

    let mut screen = Canvas::new(glint_gui::IVec2::new(WIDTH, HEIGHT));
    for &(x, y, pressed) in SCRIPT {
        screen.fill(BACKGROUND);
        ui.update(&mut screen, x, y, pressed);
        ui.set_text("title", format!("volume {:.0}", volume.get()))?;

        if ui.clicked(WidgetKind::Button, "quit")? && !ui.confirmed(WidgetKind::Button, "quit")? {
            log::info!("quit armed, click again to confirm");
        }
    }

    log::info!(
        "hello clicked {} times, volume {}, option {:?}, quit {}",
        hellos.get(),
        volume.get(),
        choice.borrow(),
        quit.get()
    );

    screen.save_png("everything.png")?;
    println!("wrote everything.png");
    Ok(())
}
