//! End-to-end choreography: show, tap, transition, hide.
//!
//! Drives the bar through whole animations with a simulated 60 Hz frame
//! loop and checks the observable contract: event ordering, deferred state
//! commits, and the resting geometry after each move.

use std::cell::RefCell;
use std::rc::Rc;

use pillbar::{
    BarConfig, CommandBuffer, IconSource, IconVisual, PointerState, RenderCommand, TabBar,
    TabBarObserver, TabBarState, Vertex, Widget, WidgetId,
};

const DT: f32 = 1.0 / 60.0;
const SCREEN_WIDTH: f32 = 400.0;
const SCREEN_HEIGHT: f32 = 800.0;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Selected(usize, TabBarState),
    WillAnimateFrom(TabBarState),
    DidAnimateTo(TabBarState),
}

struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl TabBarObserver for Recorder {
    fn did_select(&mut self, index: usize, state: TabBarState) {
        self.events.borrow_mut().push(Event::Selected(index, state));
    }

    fn will_animate_from(&mut self, state: TabBarState) {
        self.events.borrow_mut().push(Event::WillAnimateFrom(state));
    }

    fn did_animate_to(&mut self, state: TabBarState) {
        self.events.borrow_mut().push(Event::DidAnimateTo(state));
    }
}

struct Icons;

impl IconSource for Icons {
    fn icon_count(&self) -> usize {
        5
    }

    fn icon_for(&self, index: usize, state: TabBarState) -> IconVisual {
        match state {
            TabBarState::Normal => IconVisual::new(index as u32),
            TabBarState::Options => IconVisual::new(100 + index as u32),
        }
    }
}

fn harness() -> (TabBar, Rc<RefCell<Vec<Event>>>) {
    let config = BarConfig::default().resolve();
    let mut bar = TabBar::new(
        WidgetId::new(1),
        &config,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        Box::new(Icons),
    );
    let events = Rc::new(RefCell::new(Vec::new()));
    bar.set_observer(Box::new(Recorder {
        events: Rc::clone(&events),
    }));
    (bar, events)
}

fn run_frames(bar: &mut TabBar, frames: usize) {
    let input = PointerState::new();
    for _ in 0..frames {
        bar.update(&input, DT);
    }
}

fn settle(bar: &mut TabBar) {
    run_frames(bar, 900);
    assert!(!bar.is_animating(), "bar failed to settle");
}

fn tap_at(bar: &mut TabBar, x: f32, y: f32) {
    let mut input = PointerState::new();
    input.press(x, y);
    bar.update(&input, DT);
}

#[test]
fn full_show_tap_transition_hide_cycle() {
    let (mut bar, events) = harness();
    assert!(bar.is_hidden());

    bar.show();
    settle(&mut bar);
    assert!(!bar.is_hidden());
    assert_eq!(bar.bar_state(), TabBarState::Normal);

    // Tap the middle icon: select fires with the pre-transition state,
    // the transition runs, then the commit event fires.
    let mid = bar.metrics().middle_index();
    let center = bar.icon_rect(mid).center();
    tap_at(&mut bar, center.x, center.y);

    assert_eq!(bar.bar_state(), TabBarState::Normal, "state must not change mid-flight");
    settle(&mut bar);
    assert_eq!(bar.bar_state(), TabBarState::Options);

    assert_eq!(
        events.borrow().as_slice(),
        &[
            Event::Selected(mid, TabBarState::Normal),
            Event::WillAnimateFrom(TabBarState::Normal),
            Event::DidAnimateTo(TabBarState::Options),
        ]
    );
    events.borrow_mut().clear();

    // Tap a non-middle icon: selection reports the options state, the bar
    // always lands back in normal.
    let first = bar.icon_rect(0).center();
    tap_at(&mut bar, first.x, first.y);
    settle(&mut bar);
    assert_eq!(bar.bar_state(), TabBarState::Normal);
    assert_eq!(
        events.borrow().first(),
        Some(&Event::Selected(0, TabBarState::Options))
    );

    bar.hide();
    settle(&mut bar);
    assert!(bar.is_hidden());
}

#[test]
fn tap_outside_the_bar_collapses_options() {
    let (mut bar, events) = harness();
    bar.show();
    settle(&mut bar);

    bar.set_state(TabBarState::Options);
    settle(&mut bar);
    events.borrow_mut().clear();

    tap_at(&mut bar, 2.0, 2.0);
    settle(&mut bar);

    assert_eq!(bar.bar_state(), TabBarState::Normal);
    // No selection happened; only the transition events fired.
    assert_eq!(
        events.borrow().as_slice(),
        &[
            Event::WillAnimateFrom(TabBarState::Options),
            Event::DidAnimateTo(TabBarState::Normal),
        ]
    );
}

#[test]
fn retargeting_runs_a_single_settle() {
    let (mut bar, events) = harness();
    bar.show();
    settle(&mut bar);
    events.borrow_mut().clear();

    // Start toward options, then reverse while in flight.
    bar.set_state(TabBarState::Options);
    run_frames(&mut bar, 3);
    bar.set_state(TabBarState::Normal);
    settle(&mut bar);

    assert_eq!(bar.bar_state(), TabBarState::Normal);
    let events = events.borrow();
    let commits = events
        .iter()
        .filter(|e| matches!(e, Event::DidAnimateTo(_)))
        .collect::<Vec<_>>();
    assert_eq!(commits, vec![&Event::DidAnimateTo(TabBarState::Normal)]);
}

#[test]
fn hide_then_immediate_show_ends_visible() {
    let (mut bar, _) = harness();
    bar.show();
    settle(&mut bar);

    bar.hide();
    bar.show();
    settle(&mut bar);

    assert!(!bar.is_hidden());
    assert_eq!(bar.bar_state(), TabBarState::Normal);
    for index in 0..5 {
        let rect = bar.icon_rect(index);
        let slot = bar.metrics().slot(index);
        let expected_y = if index == bar.metrics().middle_index() {
            slot.center().y - bar.metrics().icon_size
        } else {
            slot.center().y
        };
        assert!((rect.center().x - slot.center().x).abs() < 0.5);
        assert!((rect.center().y - expected_y).abs() < 0.5);
    }
}

#[test]
fn command_buffer_collects_a_full_frame() {
    let (mut bar, _) = harness();
    bar.show();
    settle(&mut bar);

    let mut buffer = CommandBuffer::new();
    buffer.begin_frame();
    bar.render(buffer.as_mut_vec());

    // Background, pill path, five icons.
    assert_eq!(buffer.len(), 7);

    // The pill path flattens into uploadable geometry.
    let Some(RenderCommand::Path { commands, fill, .. }) = buffer
        .commands()
        .iter()
        .find(|c| matches!(c, RenderCommand::Path { .. }))
    else {
        panic!("expected a path command");
    };
    let outline = pillbar::shape::flatten_path(commands, 16);
    let vertices = Vertex::fan(&outline, *fill);
    assert!(!vertices.is_empty());
    assert_eq!(vertices.len() % 3, 0);
}
