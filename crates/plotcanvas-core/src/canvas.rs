//! The root drawing sheet.
//!
//! A [`Canvas`] pairs sheet extents with an owned [`ElementContainer`]. The
//! extents are plain fields, never entries of the container, so an element
//! name can never shadow canvas metadata.

use log::debug;

use crate::{
    Error,
    container::{Drawables, ElementContainer, ZOrderIter},
    draw::Drawable,
    geometry::Size,
};

/// A single sheet on which drawables are placed.
///
/// All [`ElementContainer`] operations are available directly on the canvas.
///
/// # Examples
///
/// ```
/// # use plotcanvas_core::{canvas::Canvas, draw::{Drawable, Rect}};
/// let mut canvas = Canvas::new(14.0, 10.0).unwrap();
/// canvas.add(Box::new(Rect::new(0.1, 0.2, 0.6, 0.7)), Some("box1")).unwrap();
///
/// let rect = canvas.get_as::<Rect>("box1").unwrap();
/// assert_eq!(rect.x2(), 0.6);
///
/// // Stacked insertion assigns increasing z-indices.
/// canvas.add_on_top(Box::new(Rect::new(0.0, 0.0, 1.0, 1.0)), Some("over")).unwrap();
/// assert_eq!(canvas.get("over").unwrap().z_index(), Some(0));
/// assert_eq!(canvas.next_z_index(), 1);
/// ```
#[derive(Debug)]
pub struct Canvas {
    size: Size,
    elements: ElementContainer,
    next_z_index: i32,
}

impl Canvas {
    /// Creates an empty canvas with the given extents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is not a
    /// finite number greater than zero.
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        validate_extent("width", width)?;
        validate_extent("height", height)?;

        debug!(width, height; "Created canvas");
        Ok(Self {
            size: Size::new(width, height),
            elements: ElementContainer::new(),
            next_z_index: 0,
        })
    }

    /// Creates an empty canvas from a [`Size`].
    ///
    /// # Errors
    ///
    /// See [`Canvas::new`].
    pub fn with_size(size: Size) -> Result<Self, Error> {
        Self::new(size.width(), size.height())
    }

    pub fn width(&self) -> f64 {
        self.size.width()
    }

    pub fn height(&self) -> f64 {
        self.size.height()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the z-index that the next [`add_on_top`](Self::add_on_top) will assign.
    pub fn next_z_index(&self) -> i32 {
        self.next_z_index
    }

    /// Returns the contained elements.
    pub fn elements(&self) -> &ElementContainer {
        &self.elements
    }

    /// Returns the contained elements mutably.
    pub fn elements_mut(&mut self) -> &mut ElementContainer {
        &mut self.elements
    }

    /// Inserts a drawable; see [`ElementContainer::add`].
    ///
    /// The drawable's z-index is left untouched.
    pub fn add(&mut self, drawable: Box<dyn Drawable>, name: Option<&str>) -> Result<String, Error> {
        self.elements.add(drawable, name)
    }

    /// Inserts a drawable above everything previously stacked with this method.
    ///
    /// The drawable's z-index is overwritten with [`next_z_index`](Self::next_z_index),
    /// and the counter advances only if the insertion succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the key is already taken, or
    /// [`Error::ZIndexExhausted`] once the counter cannot advance further.
    pub fn add_on_top(
        &mut self,
        mut drawable: Box<dyn Drawable>,
        name: Option<&str>,
    ) -> Result<String, Error> {
        let z_index = self.next_z_index;
        let next_z_index = z_index.checked_add(1).ok_or(Error::ZIndexExhausted)?;
        drawable.set_z_index(Some(z_index));

        let key = self.elements.add(drawable, name)?;
        self.next_z_index = next_z_index;
        Ok(key)
    }

    /// See [`ElementContainer::get`].
    pub fn get(&self, name: &str) -> Result<&dyn Drawable, Error> {
        self.elements.get(name)
    }

    /// See [`ElementContainer::get_mut`].
    pub fn get_mut(&mut self, name: &str) -> Result<&mut dyn Drawable, Error> {
        self.elements.get_mut(name)
    }

    /// See [`ElementContainer::get_as`].
    pub fn get_as<T: Drawable + 'static>(&self, name: &str) -> Result<&T, Error> {
        self.elements.get_as(name)
    }

    /// See [`ElementContainer::remove`].
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn Drawable>, Error> {
        self.elements.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains(name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// See [`ElementContainer::iter_in_z_order`].
    pub fn iter_in_z_order(&self) -> Drawables<'_> {
        self.elements.iter_in_z_order()
    }

    /// See [`ElementContainer::iter_named_in_z_order`].
    pub fn iter_named_in_z_order(&self) -> ZOrderIter<'_> {
        self.elements.iter_named_in_z_order()
    }
}

impl<'a> IntoIterator for &'a Canvas {
    type Item = &'a dyn Drawable;
    type IntoIter = Drawables<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_in_z_order()
    }
}

fn validate_extent(axis: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension { axis, value })
    }
}
