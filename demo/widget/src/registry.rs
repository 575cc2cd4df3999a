//! An in-memory widget store implementing the generated interface.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use eyre::{Result, eyre};

use crate::{
    layer::{Extensions, WidgetApi},
    widget::{Color, Widget, WidgetResult},
};

#[derive(Debug, Clone)]
struct Entry {
    widget: Widget,
    color: Color,
}

/// Widgets keyed by id.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: Mutex<BTreeMap<u32, Entry>>,
    extensions: Extensions,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a widget; new widgets start black.
    pub fn insert(&self, id: u32, name: impl Into<String>) -> Result<()> {
        let widget = Widget {
            id,
            name: name.into(),
        };
        self.lock()?.insert(
            id,
            Entry {
                widget,
                color: Color::default(),
            },
        );
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<u32, Entry>>> {
        self.widgets
            .lock()
            .map_err(|_| eyre!("widget store lock poisoned"))
    }
}

impl WidgetApi for WidgetRegistry {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn get_widget(&self, id: u32, out: &mut Widget) -> Result<WidgetResult> {
        Ok(match self.lock()?.get(&id) {
            Some(entry) => {
                *out = entry.widget.clone();
                WidgetResult::Success
            }
            None => WidgetResult::NotFound,
        })
    }

    fn reset_widgets(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn count_widgets(&self, out: &mut u32) -> Result<WidgetResult> {
        *out = u32::try_from(self.lock()?.len())?;
        Ok(WidgetResult::Success)
    }

    fn describe_widget(&self, id: u32) -> Result<Option<String>> {
        Ok(self.lock()?.get(&id).map(|entry| {
            let Color { r, g, b } = entry.color;
            format!("{} #{:02x}{:02x}{:02x}", entry.widget.name, r, g, b)
        }))
    }

    fn get_widget_color(&self, id: u32, out: &mut Color) -> Result<WidgetResult> {
        Ok(match self.lock()?.get(&id) {
            Some(entry) => {
                *out = entry.color;
                WidgetResult::Success
            }
            None => WidgetResult::NotFound,
        })
    }

    fn paint_widget(&self, id: u32, color: Color) -> Result<WidgetResult> {
        Ok(match self.lock()?.get_mut(&id) {
            Some(entry) => {
                entry.color = color;
                WidgetResult::Success
            }
            None => WidgetResult::NotFound,
        })
    }
}
