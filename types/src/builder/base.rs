use crate::Vec;
use core::slice;

/// A mutable record that produces immutable values.
///
/// `build` may be called any number of times; each call recursively builds
/// all child builders in order and returns an independent value.
pub trait Builder: Clone + Default {
    type Target;

    fn build(&self) -> Self::Target;
}

/// A value that can be turned back into a builder.
///
/// The builder is pre-populated from every field, and every element of a
/// collection field becomes its own child builder, so that
/// `value.edit().build() == value`.
pub trait Editable: Sized {
    type Builder: Builder<Target = Self>;

    fn edit(&self) -> Self::Builder;
}

/// Ordered list of child builders backing a collection field.
#[derive(Debug, Clone, PartialEq)]
pub struct Children<B>(Vec<B>);

impl<B> Default for Children<B> {
    fn default() -> Self {
        Children(Vec::new())
    }
}

impl<B> Children<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, B> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, B> {
        self.0.iter_mut()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn push_builder(&mut self, builder: B) {
        self.0.push(builder);
    }
}

impl<B: Builder> Children<B> {
    pub fn build(&self) -> Vec<B::Target> {
        self.0.iter().map(Builder::build).collect()
    }
}

impl<B> Children<B>
where
    B: Builder,
    B::Target: Editable<Builder = B> + PartialEq,
{
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a B::Target>) -> Self
    where
        B::Target: 'a,
    {
        Children(values.into_iter().map(Editable::edit).collect())
    }

    /// Append a child builder editing `value`.
    pub fn push(&mut self, value: &B::Target) {
        self.0.push(value.edit());
    }

    /// Remove the first child that builds to a value equal to `value`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, value: &B::Target) -> bool {
        match self.0.iter().position(|child| child.build() == *value) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }
}
