//! Named, depth-ordered storage for drawables.
//!
//! An [`ElementContainer`] owns its drawables and indexes them by a unique
//! string key. Storage keeps insertion order; traversal for rendering is a
//! derived order, ascending by effective z-index with insertion order as the
//! tie-break.
//!
//! # Auto-naming
//!
//! Drawables added without a name receive the key `_<n>`, where `n` is the
//! number of elements in the container at insertion time. A manual key that
//! matches this pattern can make a later auto-named insertion fail with
//! [`Error::DuplicateKey`].

use std::{any::type_name, vec};

use indexmap::IndexMap;
use log::debug;

use crate::{Error, draw::Drawable};

/// A collection of uniquely named drawables with z-order traversal.
///
/// # Examples
///
/// ```
/// # use plotcanvas_core::{container::ElementContainer, draw::{Drawable, Rect}};
/// let mut container = ElementContainer::new();
/// container.add(Box::new(Rect::new(0.0, 0.0, 1.0, 1.0).with_z_index(3)), Some("top")).unwrap();
/// container.add(Box::new(Rect::new(0.0, 0.0, 2.0, 2.0).with_z_index(1)), None).unwrap();
///
/// let order: Vec<i32> = container.iter_in_z_order().map(|d| d.effective_z_index()).collect();
/// assert_eq!(order, vec![1, 3]);
/// ```
#[derive(Debug, Default)]
pub struct ElementContainer {
    elements: IndexMap<String, Box<dyn Drawable>>,
}

impl ElementContainer {
    /// Creates a new empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a drawable under `name`, or under an auto-generated key when
    /// `name` is `None`.
    ///
    /// # Returns
    ///
    /// The key the drawable was stored under.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the key is already taken. The
    /// container is left unchanged and the drawable is dropped.
    pub fn add(&mut self, drawable: Box<dyn Drawable>, name: Option<&str>) -> Result<String, Error> {
        let key = match name {
            Some(name) => name.to_string(),
            None => self.next_auto_key(),
        };

        if self.elements.contains_key(&key) {
            debug!(key, kind = drawable.kind(); "Rejected duplicate drawable key");
            return Err(Error::DuplicateKey(key));
        }

        debug!(key, kind = drawable.kind(), z_index:? = drawable.z_index(); "Adding drawable");
        self.elements.insert(key.clone(), drawable);
        Ok(key)
    }

    /// Returns the drawable stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no drawable has that key.
    pub fn get(&self, name: &str) -> Result<&dyn Drawable, Error> {
        self.elements
            .get(name)
            .map(|drawable| &**drawable)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))
    }

    /// Returns a mutable reference to the drawable stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no drawable has that key.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut dyn Drawable, Error> {
        match self.elements.get_mut(name) {
            Some(drawable) => Ok(&mut **drawable),
            None => Err(Error::KeyNotFound(name.to_string())),
        }
    }

    /// Returns the drawable stored under `name` as concrete type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent, or
    /// [`Error::TypeMismatch`] if the drawable is not a `T`.
    pub fn get_as<T: Drawable + 'static>(&self, name: &str) -> Result<&T, Error> {
        let drawable = self.get(name)?;
        drawable
            .downcast_ref::<T>()
            .ok_or_else(|| Error::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
                actual: drawable.type_name(),
            })
    }

    /// Removes and returns the drawable stored under `name`.
    ///
    /// The relative order of the remaining drawables is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no drawable has that key.
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn Drawable>, Error> {
        let drawable = self
            .elements
            .shift_remove(name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))?;
        debug!(key = name, kind = drawable.kind(); "Removed drawable");
        Ok(drawable)
    }

    /// Returns true if a drawable is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    /// Returns the number of drawables in the container.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the container holds no drawables.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the keys in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Iterates over the drawables in ascending z-order.
    ///
    /// Drawables with equal effective z-index are yielded in insertion order.
    /// Each call produces a fresh iterator over the current contents.
    pub fn iter_in_z_order(&self) -> Drawables<'_> {
        Drawables {
            inner: self.iter_named_in_z_order(),
        }
    }

    /// Iterates over `(key, drawable)` pairs in ascending z-order.
    ///
    /// Uses the same ordering as [`iter_in_z_order`](Self::iter_in_z_order).
    pub fn iter_named_in_z_order(&self) -> ZOrderIter<'_> {
        let mut entries: Vec<_> = self
            .elements
            .iter()
            .map(|(key, drawable)| (key.as_str(), &**drawable))
            .collect();

        // `sort_by_key` is stable, which keeps insertion order among equal z-indices.
        entries.sort_by_key(|(_, drawable)| drawable.effective_z_index());

        ZOrderIter {
            entries: entries.into_iter(),
        }
    }

    fn next_auto_key(&self) -> String {
        format!("_{}", self.elements.len())
    }
}

/// Iterator over `(key, drawable)` pairs in z-order.
///
/// Created by [`ElementContainer::iter_named_in_z_order`].
#[derive(Debug)]
pub struct ZOrderIter<'a> {
    entries: vec::IntoIter<(&'a str, &'a dyn Drawable)>,
}

impl<'a> Iterator for ZOrderIter<'a> {
    type Item = (&'a str, &'a dyn Drawable);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl DoubleEndedIterator for ZOrderIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl ExactSizeIterator for ZOrderIter<'_> {}

/// Iterator over drawables in z-order, without their keys.
///
/// Created by [`ElementContainer::iter_in_z_order`].
#[derive(Debug)]
pub struct Drawables<'a> {
    inner: ZOrderIter<'a>,
}

impl<'a> Iterator for Drawables<'a> {
    type Item = &'a dyn Drawable;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, drawable)| drawable)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Drawables<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, drawable)| drawable)
    }
}

impl ExactSizeIterator for Drawables<'_> {}

impl<'a> IntoIterator for &'a ElementContainer {
    type Item = &'a dyn Drawable;
    type IntoIter = Drawables<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_in_z_order()
    }
}
