//! Reuse pool keyed by reuse identifier

use std::collections::{HashMap, VecDeque};

use skeletonable_core::{Error, Result};
use tracing::trace;

use crate::appearance::AppearanceDefaults;
use crate::capability::RecyclableItem;

/// Builds a fresh item from a registered template
pub type ItemFactory = Box<dyn Fn() -> Box<dyn RecyclableItem>>;

#[derive(Default)]
pub struct ReusePool {
    templates: HashMap<String, ItemFactory>,
    recycled: HashMap<String, VecDeque<Box<dyn RecyclableItem>>>,
    instantiated: usize,
}

impl ReusePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. Re-registering replaces the factory but keeps
    /// items already recycled under that identifier
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn RecyclableItem> + 'static,
    {
        self.templates.insert(identifier.into(), Box::new(factory));
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.templates.contains_key(identifier)
    }

    /// Hand out a recycled item, oldest first, or build a new one.
    ///
    /// New items are woken with `appearance`; recycled ones are prepared for
    /// reuse, which never leaves a skeleton showing.
    pub fn dequeue(
        &mut self,
        identifier: &str,
        appearance: &AppearanceDefaults,
    ) -> Result<Box<dyn RecyclableItem>> {
        if let Some(mut item) = self
            .recycled
            .get_mut(identifier)
            .and_then(|queue| queue.pop_front())
        {
            item.prepare_for_reuse();
            return Ok(item);
        }

        let factory = self
            .templates
            .get(identifier)
            .ok_or_else(|| Error::TemplateNotRegistered(identifier.to_string()))?;
        let mut item = factory();
        item.awake(appearance);
        self.instantiated += 1;
        trace!(identifier, total = self.instantiated, "instantiated item");
        Ok(item)
    }

    pub fn recycle(&mut self, item: Box<dyn RecyclableItem>) {
        let identifier = item.reuse_identifier().to_string();
        self.recycled.entry(identifier).or_default().push_back(item);
    }

    /// Items built from templates so far
    pub fn instantiated(&self) -> usize {
        self.instantiated
    }

    pub fn recycled_count(&self, identifier: &str) -> usize {
        self.recycled.get(identifier).map_or(0, VecDeque::len)
    }
}
