//! Method generators shared by the fluent traits.
//!
//! Most macros expand to default trait methods and expect to be invoked
//! inside a trait whose supertrait is `Fluent<SomeBuilder>`. `end_aliases!`
//! is invoked at module level.

/// Implements `Fluent<B>` for the builder itself.
macro_rules! impl_fluent {
    ($($builder:ty),* $(,)?) => {
        $(
            impl Fluent<$builder> for $builder {
                fn staged(&mut self) -> &mut $builder {
                    self
                }

                fn staged_ref(&self) -> &$builder {
                    self
                }
            }
        )*
    };
}

/// `with_attributes`, `add_to_attributes`, `remove_from_attributes`,
/// `attributes`.
macro_rules! attribute_methods {
    () => {
        fn with_attributes(mut self, attributes: Attributes) -> Self {
            self.staged().attributes = attributes;
            self
        }

        fn add_to_attributes(
            mut self,
            key: impl Into<String>,
            value: impl Into<AttributeValue>,
        ) -> Self {
            self.staged().attributes.insert(key.into(), value.into());
            self
        }

        fn remove_from_attributes(mut self, key: &str) -> Self {
            self.staged().attributes.remove(key);
            self
        }

        fn attributes(&self) -> &Attributes {
            &self.staged_ref().attributes
        }
    };
}

/// Methods for a collection field whose elements all have one builder type.
macro_rules! child_list_methods {
    (
        field: $field:ident,
        item: $item:ty,
        builder: $builder:ty,
        with: $with:ident,
        add: $add:ident,
        remove: $remove:ident,
        new: $new:ident,
        new_like: $new_like:ident $(,)?
    ) => {
        fn $field(&self) -> Vec<$item> {
            self.staged_ref().$field.build()
        }

        fn $with(mut self, items: impl IntoIterator<Item = $item>) -> Self {
            self.staged().$field.clear();
            self.$add(items)
        }

        fn $add(mut self, items: impl IntoIterator<Item = $item>) -> Self {
            for item in items {
                self.staged().$field.push(&item);
            }
            self
        }

        fn $remove(mut self, items: impl IntoIterator<Item = $item>) -> Self {
            for item in items {
                self.staged().$field.remove(&item);
            }
            self
        }

        fn $new(self) -> Nested<Self, $builder> {
            Nested::new(self, <$builder>::default(), |parent, value| {
                parent.$add([value])
            })
        }

        fn $new_like(self, item: &$item) -> Nested<Self, $builder> {
            Nested::new(self, item.edit(), |parent, value| parent.$add([value]))
        }
    };
}

/// Methods for a collection field of [`TypeRef`](crate::TypeRef).
///
/// Every variant gets its own add/remove pair and nested scopes; the
/// untyped pair matches on the variant and routes to the typed one. All of
/// them write one ordered list.
macro_rules! ref_list_methods {
    (
        field: $field:ident,
        with: $with:ident,
        add: $add:ident,
        remove: $remove:ident,
        variants: [$(
            $tag:ident($item:ident, $builder:ident) => {
                add: $add_v:ident,
                remove: $remove_v:ident,
                new: $new_v:ident,
                new_like: $new_like_v:ident $(,)?
            }
        ),* $(,)?] $(,)?
    ) => {
        fn $field(&self) -> Vec<TypeRef> {
            self.staged_ref().$field.build()
        }

        fn $with(mut self, items: impl IntoIterator<Item = TypeRef>) -> Self {
            self.staged().$field.clear();
            self.$add(items)
        }

        fn $add(mut self, items: impl IntoIterator<Item = TypeRef>) -> Self {
            for item in items {
                self = match item {
                    $(TypeRef::$tag(r) => self.$add_v([r]),)*
                };
            }
            self
        }

        fn $remove(mut self, items: impl IntoIterator<Item = TypeRef>) -> Self {
            for item in items {
                self = match item {
                    $(TypeRef::$tag(r) => self.$remove_v([r]),)*
                };
            }
            self
        }

        $(
            fn $add_v(mut self, items: impl IntoIterator<Item = $item>) -> Self {
                for item in items {
                    self.staged().$field.push_variant(&item);
                }
                self
            }

            fn $remove_v(mut self, items: impl IntoIterator<Item = $item>) -> Self {
                for item in items {
                    self.staged().$field.remove_variant(&item);
                }
                self
            }

            fn $new_v(self) -> Nested<Self, $builder> {
                Nested::new(self, $builder::default(), |parent, value| {
                    parent.$add_v([value])
                })
            }

            fn $new_like_v(self, item: &$item) -> Nested<Self, $builder> {
                Nested::new(self, item.edit(), |parent, value| parent.$add_v([value]))
            }
        )*
    };
}

/// Methods for a single [`TypeRef`](crate::TypeRef) field: a setter taking
/// any variant and per-variant nested scopes.
macro_rules! ref_field_methods {
    (
        field: $field:ident,
        with: $with:ident,
        variants: [$(
            $item:ident($builder:ident) => {
                new: $new_v:ident,
                new_like: $new_like_v:ident $(,)?
            }
        ),* $(,)?] $(,)?
    ) => {
        fn $field(&self) -> TypeRef {
            self.staged_ref().$field.build()
        }

        fn $with(mut self, value: TypeRef) -> Self {
            self.staged().$field = value.edit();
            self
        }

        $(
            fn $new_v(self) -> Nested<Self, $builder> {
                Nested::new(self, $builder::default(), |parent, value| {
                    parent.$with(TypeRef::from(value))
                })
            }

            fn $new_like_v(self, item: &$item) -> Nested<Self, $builder> {
                Nested::new(self, item.edit(), |parent, value| {
                    parent.$with(TypeRef::from(value))
                })
            }
        )*
    };
}

/// Named closers for the scopes a fluent trait opens, e.g.
/// `end_class_ref_bound` on a `Nested<P, ClassRefBuilder>` whose parent
/// stages a wildcard.
macro_rules! end_aliases {
    ($fluent:ident: $($builder:ident => $end:ident),+ $(,)?) => {
        $(
            impl<P: $fluent> Nested<P, $builder> {
                /// Same as [`Nested::and`].
                pub fn $end(self) -> P {
                    self.and()
                }
            }
        )+
    };
}
