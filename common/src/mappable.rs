//! # Mappable Capability
//!
//! Anything with a position and something to say about itself can be placed
//! on a map surface. There is no shared base type; implementing the trait is
//! enough.

use std::rc::Rc;

use crate::geo::Coordinate;

pub trait Mappable {
    /// Where the marker for this entity goes.
    fn location(&self) -> Coordinate;

    /// Markup shown when the entity's marker is clicked.
    ///
    /// Must not fail and must not mutate the entity. Called lazily, so the
    /// result reflects the entity's state at the time of the click.
    fn marker_content(&self) -> String;
}

impl<T: Mappable + ?Sized> Mappable for &T {
    fn location(&self) -> Coordinate {
        (**self).location()
    }

    fn marker_content(&self) -> String {
        (**self).marker_content()
    }
}

impl<T: Mappable + ?Sized> Mappable for Box<T> {
    fn location(&self) -> Coordinate {
        (**self).location()
    }

    fn marker_content(&self) -> String {
        (**self).marker_content()
    }
}

impl<T: Mappable + ?Sized> Mappable for Rc<T> {
    fn location(&self) -> Coordinate {
        (**self).location()
    }

    fn marker_content(&self) -> String {
        (**self).marker_content()
    }
}
