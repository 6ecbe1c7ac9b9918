use std::borrow::Cow;

/// A value handed to [`Validator::validate`](crate::Validator::validate).
///
/// Only values with a textual form can be valid encodings; everything else
/// reports `None` and is rejected without further inspection.
pub trait Subject {
    fn as_text(&self) -> Option<&str>;
}

impl Subject for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Subject for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Subject for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl Subject for [u8] {
    fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(self).ok()
    }
}

impl Subject for Vec<u8> {
    fn as_text(&self) -> Option<&str> {
        self.as_slice().as_text()
    }
}

impl Subject for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Subject> Subject for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.as_text())
    }
}

macro_rules! impl_non_text_subject {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Subject for $ty {
                fn as_text(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

impl_non_text_subject!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, ()
);
