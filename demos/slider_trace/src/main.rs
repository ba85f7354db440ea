//! Drives a slider through a scripted session and prints what a painter
//! would see after each step.
//!
//! ```text
//! RUST_LOG=debug cargo run -p slider_trace -- [config.json]
//! ```

use anyhow::Context;
use notch_core::{
    InputEvent, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerEventKind, Rect,
};
use notch_ui::{Slider, SliderConfig, SliderEvent};

fn load_config() -> anyhow::Result<SliderConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text =
                std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(SliderConfig::new()
            .min(-20.0)
            .max(20.0)
            .label_interval(2)
            .show_tickmarks(true)
            .show_tooltip(true)),
    }
}

fn pointer(kind: PointerEventKind, x: f64) -> InputEvent {
    InputEvent::Pointer(PointerEvent::mouse(kind, x, 10.0))
}

fn key(k: Key) -> InputEvent {
    InputEvent::Key(KeyEvent::new(k))
}

fn script() -> Vec<(&'static str, InputEvent)> {
    vec![
        ("measure", InputEvent::Resize(Rect::new(0.0, 0.0, 800.0, 24.0))),
        ("hover", pointer(PointerEventKind::Enter, 200.0)),
        (
            "press",
            pointer(PointerEventKind::Down(PointerButton::Primary), 200.0),
        ),
        ("drag", pointer(PointerEventKind::Move, 530.0)),
        (
            "release",
            pointer(PointerEventKind::Up(PointerButton::Primary), 530.0),
        ),
        ("leave", pointer(PointerEventKind::Leave, 530.0)),
        ("focus", InputEvent::Focus),
        ("arrow right", key(Key::ArrowRight)),
        (
            "ctrl+arrow left",
            InputEvent::Key(KeyEvent::new(Key::ArrowLeft).with_modifiers(Modifiers::CTRL)),
        ),
        ("end", key(Key::End)),
        ("escape", key(Key::Escape)),
        ("resize narrow", InputEvent::Resize(Rect::new(0.0, 0.0, 260.0, 24.0))),
        ("blur", InputEvent::Blur),
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut slider = Slider::new(load_config()?);
    slider.set_attribute("value", "4")?;

    slider.events().subscribe(|e: &SliderEvent| {
        log::info!("{} {}", e.name(), e.value());
        match serde_json::to_string(e) {
            Ok(json) => println!("  event {json}"),
            Err(err) => log::warn!("could not serialize {} event: {err}", e.name()),
        }
    });

    for (name, event) in script() {
        let consumed = slider.handle_input(&event);
        let view = slider.render();
        println!(
            "{name:>16}: value={} handle=\"{}\" consumed={consumed} overlapping={} hidden_ticks={}",
            slider.value(),
            view.handle,
            view.labels_overlapping,
            view.hidden_tickmarks,
        );
    }

    let view = slider.render();
    println!("{}", serde_json::to_string_pretty(&view)?);
    log::debug!("layout computed {} times", slider.layout_computations());
    Ok(())
}
