use crate::O;

/// A host value that carries its own "absent" sentinel.
///
/// Implementors decide what absence looks like for them; everything else is
/// present, including zero, empty and `false` payloads.
pub trait Nullable {
    type Value;

    fn into_o(self) -> O<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_o(self) -> O<T> {
        match self {
            Some(val) => O::Some(val),
            None => O::None,
        }
    }
}

impl<T> Nullable for O<T> {
    type Value = T;

    fn into_o(self) -> O<T> {
        self
    }
}

// Null pointers are absent. The pointer is passed through untouched and
// never dereferenced.
impl<T: ?Sized> Nullable for *const T {
    type Value = *const T;

    fn into_o(self) -> O<*const T> {
        if self.is_null() { O::None } else { O::Some(self) }
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = *mut T;

    fn into_o(self) -> O<*mut T> {
        if self.is_null() { O::None } else { O::Some(self) }
    }
}
