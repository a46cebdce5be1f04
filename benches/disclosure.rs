//! Benchmarks for the disclosure hot paths
//!
//! Run with: cargo bench disclosure

use sidepanel::config::AppConfig;
use sidepanel::disclosure::{transition, DisclosureEvent, PanelState};
use sidepanel::messages::{DisclosureMsg, Msg, PointerMsg, ViewportMsg};
use sidepanel::update::update;
use sidepanel::AppModel;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_model(width: u32, nav_items: usize) -> AppModel {
    let mut config = AppConfig::default();
    config.window.width = width;
    config.page.nav_items = nav_items;
    AppModel::new(config)
}

// ============================================================================
// Pure state machine
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn transition_sequence(iterations: usize) {
    let events = [
        DisclosureEvent::ToggleActivated,
        DisclosureEvent::PointerDown {
            viewport_width: 500.0,
            inside_panel: false,
            on_toggle: false,
        },
        DisclosureEvent::Resized {
            viewport_width: 1024.0,
        },
        DisclosureEvent::DismissRequested,
    ];

    let mut state = PanelState::Closed;
    for i in 0..iterations {
        state = transition(state, divan::black_box(events[i % events.len()]), 768.0);
    }
    divan::black_box(state);
}

// ============================================================================
// Update loop
// ============================================================================

#[divan::bench(args = [6, 60])]
fn update_toggle_click(bencher: divan::Bencher, nav_items: usize) {
    bencher
        .with_inputs(|| make_model(500, nav_items))
        .bench_local_refs(|model| {
            let toggle = model.controllers[0].toggle();
            update(model, Msg::Disclosure(DisclosureMsg::Click(toggle)))
        });
}

#[divan::bench(args = [6, 60])]
fn update_outside_click(bencher: divan::Bencher, nav_items: usize) {
    bencher
        .with_inputs(|| {
            let mut model = make_model(500, nav_items);
            let toggle = model.controllers[0].toggle();
            update(&mut model, Msg::Disclosure(DisclosureMsg::Click(toggle)));
            model
        })
        .bench_local_refs(|model| {
            update(model, Msg::Pointer(PointerMsg::Pressed { x: 400.0, y: 100.0 }));
            update(model, Msg::Pointer(PointerMsg::Released { x: 400.0, y: 100.0 }))
        });
}

#[divan::bench(args = [100, 1000])]
fn update_pointer_moves(iterations: usize) {
    let mut model = make_model(1024, 6);
    for i in 0..iterations {
        let y = (i % 600) as f64;
        let cmd = update(&mut model, Msg::Pointer(PointerMsg::Moved { x: 100.0, y }));
        divan::black_box(cmd);
    }
}

#[divan::bench(args = [100, 1000])]
fn update_resize_across_breakpoint(iterations: usize) {
    let mut model = make_model(1024, 6);
    for i in 0..iterations {
        let width = if i % 2 == 0 { 500.0 } else { 1024.0 };
        let cmd = update(
            &mut model,
            Msg::Viewport(ViewportMsg::Resized {
                width,
                height: 600.0,
            }),
        );
        divan::black_box(cmd);
    }
}
