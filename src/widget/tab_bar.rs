//! The tab bar widget: layout, tap dispatch, and transition choreography.
//!
//! The bar holds one spring-animated slot per icon and toggles between two
//! layouts. In `Normal` the middle icon rests raised above its slot at
//! 1.2x scale; in `Options` the middle icon drops into the row while the
//! other icons fan upward, each by a multiple of the icon size. The state
//! variable only changes once every spring has settled, at which point the
//! observer's `did_animate_to` fires.

use crate::animation::{Animation, Easing, Spring, Spring2D};
use crate::config::ResolvedConfig;
use crate::input::PointerState;
use crate::layout::{BarMetrics, Point, Rect};
use crate::render::{RenderCommand, Shadow};
use crate::shape::{pill_path, PathCommand};
use crate::style::{BarStyle, Color};
use crate::widget::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};

/// Which icon layout the bar is displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabBarState {
    /// The resting layout: icons in a row, middle icon raised.
    #[default]
    Normal,
    /// The alternate layout: outer icons fanned upward.
    Options,
}

impl TabBarState {
    /// Returns the other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Options,
            Self::Options => Self::Normal,
        }
    }
}

/// The displayable unit for one tab slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconVisual {
    /// Icon ID in the host's atlas.
    pub icon_id: u32,
    /// Optional glyph tint.
    pub tint: Option<Color>,
}

impl IconVisual {
    /// Creates an untinted icon.
    #[must_use]
    pub const fn new(icon_id: u32) -> Self {
        Self {
            icon_id,
            tint: None,
        }
    }

    /// Sets a glyph tint.
    #[must_use]
    pub const fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }
}

/// Supplies the bar's icons.
///
/// `icon_count` is queried once when the bar is built and is not expected
/// to change afterward. Icons are requested anew on every state refresh;
/// the bar never reuses a previously returned visual.
pub trait IconSource {
    /// Total number of icon slots.
    fn icon_count(&self) -> usize;

    /// The icon to display at `index` in the given state.
    fn icon_for(&self, index: usize, state: TabBarState) -> IconVisual;
}

/// Receives the bar's notifications. All methods default to no-ops.
pub trait TabBarObserver {
    /// An icon was tapped. `state` is the layout state at tap time.
    fn did_select(&mut self, index: usize, state: TabBarState) {
        let _ = (index, state);
    }

    /// A transition animation is about to start from `state`.
    fn will_animate_from(&mut self, state: TabBarState) {
        let _ = state;
    }

    /// A transition animation settled; the bar is now in `state`.
    fn did_animate_to(&mut self, state: TabBarState) {
        let _ = state;
    }
}

/// Per-slot animation state. Rebuilt, not reused, on every state refresh.
struct IconSlot {
    visual: IconVisual,
    /// Resting center in the `Normal` layout (middle icon already raised).
    home: Point,
    position: Spring2D,
    scale: Spring,
    alpha: Animation,
    /// 0 = transparent plate, 1 = active background color.
    active_blend: Animation,
}

/// What the bar is currently animating toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    Idle,
    Showing,
    Hiding,
    Transitioning { target: TabBarState },
}

/// The floating tab bar.
pub struct TabBar {
    widget: WidgetState,
    metrics: BarMetrics,
    style: BarStyle,
    source: Box<dyn IconSource>,
    observer: Option<Box<dyn TabBarObserver>>,
    icons: Vec<IconSlot>,
    state: TabBarState,
    motion: Motion,
    /// Vertical displacement from the resting frame; positive is off
    /// screen below.
    bar_offset: Spring,
    bar_alpha: Animation,
    /// 1 in `Normal`, collapsing toward 0 in `Options`.
    bar_scale: Spring,
    path_cache: Vec<PathCommand>,
    path_size: (f32, f32),
}

impl TabBar {
    /// Fraction of the icon size the outer icons travel per slot of
    /// distance from the middle.
    pub const OUTWARD_SCALE: f32 = 0.6;
    /// Scale applied to the raised middle icon.
    pub const MIDDLE_SCALE: f32 = 1.2;
    /// Blur radius of the bar and icon shadows.
    const SHADOW_RADIUS: f32 = 5.0;
    /// Opacity of each icon's shadow.
    const ICON_SHADOW_OPACITY: f32 = 0.5;

    /// Builds a bar for the given screen, querying the source once for the
    /// icon count. The bar starts hidden; call [`TabBar::show`].
    #[must_use]
    pub fn new(
        id: WidgetId,
        config: &ResolvedConfig,
        screen_width: f32,
        screen_height: f32,
        source: Box<dyn IconSource>,
    ) -> Self {
        let metrics = BarMetrics::new(
            source.icon_count(),
            config.icon_size,
            config.padding,
            config.spacing,
            screen_width,
            screen_height,
        );
        let frame = metrics.bar_frame();
        let below = metrics.bar_height() + metrics.icon_size;

        let mut bar = Self {
            widget: WidgetState::new(id),
            metrics,
            style: config.style,
            source,
            observer: None,
            icons: Vec::new(),
            state: TabBarState::Normal,
            motion: Motion::Idle,
            bar_offset: Spring::new(below),
            bar_alpha: Animation::new(0.0, Easing::ExponentialOut),
            bar_scale: Spring::new(1.0),
            path_cache: pill_path(frame.width, frame.height),
            path_size: (frame.width, frame.height),
        };
        bar.rebuild_icons(TabBarState::Normal);
        let center = frame.center();
        for slot in &mut bar.icons {
            slot.position.set_immediate(center.x, center.y);
            slot.alpha.set_immediate(0.0);
        }
        bar.widget.rect = frame;
        bar
    }

    /// Registers the observer receiving selection and animation events.
    pub fn set_observer(&mut self, observer: Box<dyn TabBarObserver>) {
        self.observer = Some(observer);
    }

    /// Returns the current layout state.
    ///
    /// Only updated when a transition animation settles, never at its
    /// start.
    #[must_use]
    pub fn bar_state(&self) -> TabBarState {
        self.state
    }

    /// Returns true while the bar is off screen.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.widget.is_hidden()
    }

    /// Returns true while an entrance, exit, or transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion != Motion::Idle
    }

    /// Returns the bar's layout metrics.
    #[must_use]
    pub fn metrics(&self) -> &BarMetrics {
        &self.metrics
    }

    /// Current bounds of icon `index`, scale applied.
    #[must_use]
    pub fn icon_rect(&self, index: usize) -> Rect {
        let slot = &self.icons[index];
        let (x, y) = slot.position.value();
        let side = self.metrics.icon_size * slot.scale.value();
        Rect::centered_at(Point::new(x, y), side, side)
    }

    /// Animates the bar up from below the screen into place.
    ///
    /// Icons burst outward from the bar center to their `Normal` slots;
    /// the middle icon settles raised and enlarged. The hidden flag clears
    /// once everything has settled.
    pub fn show(&mut self) {
        tracing::debug!("tab bar entrance started");
        self.state = TabBarState::Normal;
        self.rebuild_icons(TabBarState::Normal);

        let frame = self.metrics.bar_frame();
        let center = frame.center();
        let below = self.metrics.bar_height() + self.metrics.icon_size;
        self.bar_offset.set_immediate(below);
        self.bar_offset.set_target(0.0);
        self.bar_alpha.set_immediate(0.0);
        self.bar_alpha.set_target(1.0);
        self.bar_scale.set_immediate(1.0);

        let mid = self.metrics.middle_index();
        for (index, slot) in self.icons.iter_mut().enumerate() {
            slot.position.set_immediate(center.x, center.y);
            slot.position.set_target(slot.home.x, slot.home.y);
            slot.alpha.set_immediate(0.0);
            slot.alpha.set_target(1.0);
            slot.scale.set_immediate(1.0);
            if index == mid {
                slot.scale.set_target(Self::MIDDLE_SCALE);
                slot.active_blend.set_immediate(1.0);
            } else {
                slot.active_blend.set_immediate(0.0);
            }
        }

        self.motion = Motion::Showing;
        self.widget.flags.set(WidgetFlags::ANIMATING);
        self.widget.mark_dirty();
    }

    /// Animates the bar back down off screen.
    ///
    /// Icons collapse to the (departing) bar center and fade out. The
    /// hidden flag is recorded once everything has settled.
    pub fn hide(&mut self) {
        tracing::debug!("tab bar exit started");
        let below = self.metrics.bar_height() + self.metrics.icon_size;
        let departed = self.metrics.bar_frame().center().offset(0.0, below);
        self.bar_offset.set_target(below);
        self.bar_alpha.set_target(0.0);

        for slot in &mut self.icons {
            slot.position.set_target(departed.x, departed.y);
            slot.alpha.set_target(0.0);
            slot.scale.set_target(1.0);
        }

        self.motion = Motion::Hiding;
        self.widget.flags.set(WidgetFlags::ANIMATING);
        self.widget.mark_dirty();
    }

    /// Forces a transition to the given layout state.
    ///
    /// Requesting the state the bar is already in (or already animating
    /// toward) is a no-op with a diagnostic notice, as is a request while
    /// an entrance or exit is in flight. A request while another transition
    /// is in flight retargets the springs; the settle step runs once, for
    /// the newest target.
    pub fn set_state(&mut self, target: TabBarState) {
        if matches!(self.motion, Motion::Showing | Motion::Hiding) {
            tracing::debug!(?target, "state request ignored during entrance/exit");
            return;
        }
        if target == self.effective_state() {
            tracing::debug!(?target, "tab bar already in requested state");
            return;
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.will_animate_from(self.state);
        }
        tracing::debug!(from = ?self.state, to = ?target, "tab bar transition started");

        self.rebuild_icons(target);
        let mid = self.metrics.middle_index();
        for index in 0..self.icons.len() {
            let resting = match target {
                TabBarState::Normal => self.icons[index].home,
                TabBarState::Options => {
                    let dy = self.options_offset(index);
                    self.icons[index].home.offset(0.0, dy)
                }
            };
            let slot = &mut self.icons[index];
            slot.position.set_target(resting.x, resting.y);
            slot.alpha.set_target(1.0);
            slot.scale.set_target(if index == mid && target == TabBarState::Normal {
                Self::MIDDLE_SCALE
            } else {
                1.0
            });
            let active = index == mid || target == TabBarState::Options;
            slot.active_blend.set_target(if active { 1.0 } else { 0.0 });
        }

        self.bar_scale.set_target(match target {
            TabBarState::Normal => 1.0,
            TabBarState::Options => 0.0,
        });

        self.motion = Motion::Transitioning { target };
        self.widget.flags.set(WidgetFlags::ANIMATING);
        self.widget.mark_dirty();
    }

    /// Vertical travel of icon `index` when entering `Options`, relative
    /// to its `Normal` resting position (y-down; signs invert on the way
    /// back).
    ///
    /// The middle icon drops by one icon size; icons left of the middle
    /// rise by `0.6 * (index + 1)` icon sizes; icons right of it rise by
    /// `0.6 * (count - index)` icon sizes. Indices past the last slot
    /// have no travel and return zero.
    #[must_use]
    pub fn options_offset(&self, index: usize) -> f32 {
        let mid = self.metrics.middle_index();
        let size = self.metrics.icon_size;
        if index == mid {
            size
        } else if index < mid {
            -(Self::OUTWARD_SCALE * (index as f32 + 1.0) * size)
        } else {
            let distance = self.metrics.icon_count.saturating_sub(index);
            -(Self::OUTWARD_SCALE * distance as f32 * size)
        }
    }

    /// The state taps should be judged against: the in-flight target if a
    /// transition is running, the committed state otherwise.
    fn effective_state(&self) -> TabBarState {
        match self.motion {
            Motion::Transitioning { target } => target,
            _ => self.state,
        }
    }

    /// `Normal`-layout resting center for icon `index`.
    fn home_center(&self, index: usize) -> Point {
        let center = self.metrics.slot(index).center();
        if index == self.metrics.middle_index() {
            center.offset(0.0, -self.metrics.icon_size)
        } else {
            center
        }
    }

    /// Discards the current icons and queries the source for fresh ones.
    ///
    /// New slots pick up where the old ones visually left off, but carry
    /// no other state over.
    fn rebuild_icons(&mut self, state: TabBarState) {
        let mid = self.metrics.middle_index();
        let previous: Vec<(Point, f32, f32, f32)> = self
            .icons
            .iter()
            .map(|slot| {
                let (x, y) = slot.position.value();
                (
                    Point::new(x, y),
                    slot.scale.value(),
                    slot.alpha.value(),
                    slot.active_blend.value(),
                )
            })
            .collect();

        let mut icons = Vec::with_capacity(self.metrics.icon_count);
        for index in 0..self.metrics.icon_count {
            let visual = self.source.icon_for(index, state);
            let home = self.home_center(index);
            let resting_blend = if index == mid { 1.0 } else { 0.0 };
            let (start, scale, alpha, blend) = previous
                .get(index)
                .copied()
                .unwrap_or((home, 1.0, 1.0, resting_blend));

            icons.push(IconSlot {
                visual,
                home,
                position: Spring2D::new(start.x, start.y),
                scale: Spring::new(scale),
                alpha: Animation::new(alpha, Easing::ExponentialOut),
                active_blend: Animation::new(blend, Easing::Linear),
            });
        }
        self.icons = icons;
    }

    /// Hit-tests the icons at the given point.
    fn hit_icon(&self, x: f32, y: f32) -> Option<usize> {
        (0..self.icons.len()).find(|&index| self.icon_rect(index).contains(x, y))
    }

    /// The bar's on-screen frame this instant: resting frame displaced by
    /// the entrance spring and collapsed by the options scale.
    fn current_frame(&self) -> Rect {
        self.metrics
            .bar_frame()
            .translated(0.0, self.bar_offset.value())
            .scaled_about_center(self.bar_scale.value())
    }

    /// True once every spring and fade has come to rest.
    fn all_settled(&self) -> bool {
        self.bar_offset.is_settled()
            && self.bar_scale.is_settled()
            && self.bar_alpha.is_complete()
            && self.icons.iter().all(|slot| {
                slot.position.is_settled()
                    && slot.scale.is_settled()
                    && slot.alpha.is_complete()
                    && slot.active_blend.is_complete()
            })
    }

    /// Commits the outcome of a finished animation.
    fn complete_motion(&mut self, response: &mut WidgetResponse) {
        match self.motion {
            Motion::Idle => return,
            Motion::Showing => {
                self.widget.flags.clear(WidgetFlags::HIDDEN);
                self.widget.flags.set(WidgetFlags::VISIBLE);
                response.visibility_changed = true;
                tracing::debug!("tab bar entrance settled");
            }
            Motion::Hiding => {
                self.widget.flags.set(WidgetFlags::HIDDEN);
                self.widget.flags.clear(WidgetFlags::VISIBLE);
                response.visibility_changed = true;
                tracing::debug!("tab bar exit settled");
            }
            Motion::Transitioning { target } => {
                self.state = target;
                response.state_changed = Some(target);
                if let Some(observer) = self.observer.as_mut() {
                    observer.did_animate_to(target);
                }
                tracing::debug!(?target, "tab bar transition settled");
            }
        }
        self.motion = Motion::Idle;
        self.widget.flags.clear(WidgetFlags::ANIMATING);
        self.widget.mark_dirty();
    }

    /// Routes a tap to selection and state changes.
    fn dispatch_tap(&mut self, x: f32, y: f32, response: &mut WidgetResponse) {
        if let Some(index) = self.hit_icon(x, y) {
            if let Some(observer) = self.observer.as_mut() {
                observer.did_select(index, self.state);
            }
            response.selected = Some(index);
            if index == self.metrics.middle_index() {
                self.set_state(self.effective_state().toggled());
            } else {
                self.set_state(TabBarState::Normal);
            }
        } else if !self.current_frame().contains(x, y)
            && self.effective_state() == TabBarState::Options
        {
            self.set_state(TabBarState::Normal);
        }
    }
}

impl Widget for TabBar {
    fn state(&self) -> &WidgetState {
        &self.widget
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.widget
    }

    fn update(&mut self, input: &PointerState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        if !self.widget.is_hidden() {
            if let Some((x, y)) = input.tapped() {
                self.dispatch_tap(x, y, &mut response);
            }
        }

        self.bar_offset.update(dt);
        self.bar_scale.update(dt);
        self.bar_alpha.update(dt);
        for slot in &mut self.icons {
            slot.position.update(dt);
            slot.scale.update(dt);
            slot.alpha.update(dt);
            slot.active_blend.update(dt);
        }

        if self.motion != Motion::Idle && self.all_settled() {
            self.complete_motion(&mut response);
        }

        // Regenerate the pill path whenever the bar's bounds change.
        let frame = self.current_frame();
        if (frame.width, frame.height) != self.path_size {
            self.path_cache = pill_path(frame.width, frame.height);
            self.path_size = (frame.width, frame.height);
            self.widget.mark_dirty();
        }
        self.widget.rect = frame;

        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if self.widget.is_hidden() && self.motion == Motion::Idle {
            return;
        }

        let frame = self.current_frame();
        let alpha = self.bar_alpha.value();

        commands.push(RenderCommand::Rect {
            bounds: frame,
            color: self.style.bar_background.faded(alpha),
            corner_radius: self.metrics.icon_size / 2.0,
        });
        commands.push(RenderCommand::Path {
            commands: self.path_cache.clone(),
            origin: Point::new(frame.x, frame.y),
            fill: self.style.shape_fill.faded(alpha),
            shadow: Some(Shadow {
                color: self.style.shape_fill,
                radius: Self::SHADOW_RADIUS,
                opacity: alpha,
            }),
        });

        for (index, slot) in self.icons.iter().enumerate() {
            let bounds = self.icon_rect(index);
            let blend = slot.active_blend.value();
            commands.push(RenderCommand::Icon {
                bounds,
                icon_id: slot.visual.icon_id,
                tint: slot.visual.tint,
                background: Color::TRANSPARENT.lerp(self.style.icon_background, blend),
                corner_radius: bounds.width / 2.0,
                shadow: Some(Shadow {
                    color: self.style.icon_shadow,
                    radius: Self::SHADOW_RADIUS,
                    opacity: Self::ICON_SHADOW_OPACITY * slot.alpha.value(),
                }),
                alpha: slot.alpha.value(),
            });
        }
    }
}
