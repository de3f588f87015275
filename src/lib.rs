//! # Pillbar
//!
//! A floating, pill-shaped tab bar widget with a morphing vector path and
//! spring-animated state transitions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     WIDGET PIPELINE                      │
//! ├─────────────────────────────────────────────────────────┤
//! │  Pointer Input → TabBar Update → Springs → Commands     │
//! │       ↓               ↓             ↓           ↓        │
//! │   Hit Testing    Choreography   Settling   Host Draws   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate is renderer-agnostic: [`TabBar`] consumes per-frame pointer
//! state and a delta time, advances its animations, and emits
//! [`RenderCommand`]s that a host renderer turns into pixels. There is no
//! windowing, GPU, or OS dependency here.
//!
//! ## The two layouts
//!
//! The bar toggles between two icon layouts, [`TabBarState::Normal`] and
//! [`TabBarState::Options`]. Tapping the middle icon toggles the state;
//! tapping any other icon (or outside the bar) forces `Normal`. Icons are
//! rebuilt from the [`IconSource`] on every transition and repositioned
//! with damped springs; the state variable itself only changes once every
//! spring has settled.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod shape;
pub mod style;
pub mod widget;

pub use animation::{Animation, Easing, Spring, Spring2D};
pub use config::{BarConfig, ResolvedConfig};
pub use error::ConfigError;
pub use input::PointerState;
pub use layout::{BarMetrics, Point, Rect};
pub use render::{CommandBuffer, RenderCommand, Shadow, Vertex};
pub use shape::{pill_path, CubicBezier, PathCommand};
pub use style::{BarStyle, Color};
pub use widget::{
    IconSource, IconVisual, TabBar, TabBarObserver, TabBarState, Widget, WidgetFlags, WidgetId,
    WidgetResponse, WidgetState,
};
