//! Widget types: the common contract and the tab bar itself.

mod core;
mod tab_bar;

pub use self::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use tab_bar::{IconSource, IconVisual, TabBar, TabBarObserver, TabBarState};
