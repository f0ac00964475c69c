//! Drawable Elements
//!
//! This module provides the [`Drawable`] trait implemented by everything that
//! can be placed in an [`ElementContainer`](crate::container::ElementContainer),
//! together with the shape primitives shipped by this crate.
//!
//! # Depth Ordering
//!
//! Every drawable carries an optional z-index. Containers traverse their
//! contents in ascending z-index order; a drawable without a z-index sorts as
//! if it had [`DEFAULT_Z_INDEX`]. Elements with equal effective z-index keep
//! their insertion order.
//!
//! # Variant Dispatch
//!
//! The set of drawables is open: downstream crates may implement [`Drawable`]
//! for their own types. Renderers recognize concrete variants through
//! `<dyn Drawable>::downcast_ref` and decide what to
//! do with the ones they do not know.

mod rect;

pub use rect::Rect;

use std::{
    any::{self, Any},
    fmt,
};

/// Z-index used for ordering when a drawable has none set.
pub const DEFAULT_Z_INDEX: i32 = 0;

/// Trait for renderable scene elements with a depth ordering key.
pub trait Drawable: fmt::Debug {
    /// Returns the explicit z-index, if one was set.
    fn z_index(&self) -> Option<i32>;

    /// Sets or clears the z-index.
    fn set_z_index(&mut self, z_index: Option<i32>);

    /// Short variant name used in diagnostics (e.g. `"rect"`).
    fn kind(&self) -> &'static str;

    /// Full Rust type name of the concrete drawable.
    fn type_name(&self) -> &'static str {
        any::type_name::<Self>()
    }

    /// Returns `self` as [`Any`] for variant dispatch.
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as mutable [`Any`] for variant dispatch.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the z-index used for ordering.
    fn effective_z_index(&self) -> i32 {
        self.z_index().unwrap_or(DEFAULT_Z_INDEX)
    }
}

impl<'a> dyn Drawable + 'a {
    /// Returns true if the drawable is of concrete type `T`.
    pub fn is<T: Drawable + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns a reference to the concrete variant, or `None` if it is another type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plotcanvas_core::draw::{Drawable, Rect};
    /// let drawable: Box<dyn Drawable> = Box::new(Rect::new(0.0, 0.0, 1.0, 1.0));
    /// assert!(drawable.downcast_ref::<Rect>().is_some());
    /// ```
    pub fn downcast_ref<T: Drawable + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns a mutable reference to the concrete variant, or `None` if it is another type.
    pub fn downcast_mut<T: Drawable + 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
