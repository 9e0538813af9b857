use bitvec::prelude::*;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A set of kernel codes, stored as the same bitmap the `EVIOCGBIT` ioctl fills in.
///
/// A device reports one of these for the event types it understands and, if it understands
/// [`EventType::FORCEFEEDBACK`](crate::EventType::FORCEFEEDBACK), another one for the force
/// feedback effects it can play.
#[repr(transparent)]
pub struct AttributeSetRef<T> {
    _indexer: std::marker::PhantomData<T>,
    bitslice: BitSlice<u8>,
}

impl<T: EvdevEnum> AttributeSetRef<T> {
    #[inline]
    fn new(bitslice: &BitSlice<u8>) -> &Self {
        // SAFETY: for<T> AttributeSetRef<T> is repr(transparent) over BitSlice<u8>
        unsafe { &*(bitslice as *const BitSlice<u8> as *const Self) }
    }

    #[inline]
    fn new_mut(bitslice: &mut BitSlice<u8>) -> &mut Self {
        // SAFETY: for<T> AttributeSetRef<T> is repr(transparent) over BitSlice<u8>
        unsafe { &mut *(bitslice as *mut BitSlice<u8> as *mut Self) }
    }

    /// Returns `true` if the code is in the set. Codes past the end of the bitmap are not.
    #[inline]
    pub fn contains(&self, attr: T) -> bool {
        self.bitslice.get(attr.to_index()).map_or(false, |b| *b)
    }

    /// Iterates over every code in the set, lowest first.
    #[inline]
    pub fn iter(&self) -> AttributeSetRefIter<'_, T> {
        self.into_iter()
    }

    pub fn insert(&mut self, attr: T) {
        self.bitslice.set(attr.to_index(), true)
    }

    pub fn remove(&mut self, attr: T) {
        self.bitslice.set(attr.to_index(), false)
    }
}

impl<T: EvdevEnum + fmt::Debug> fmt::Debug for AttributeSetRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T: EvdevEnum> IntoIterator for &'a AttributeSetRef<T> {
    type Item = T;
    type IntoIter = AttributeSetRefIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        AttributeSetRefIter {
            _indexer: std::marker::PhantomData,
            inner: self.bitslice.iter_ones(),
        }
    }
}

pub struct AttributeSetRefIter<'a, T> {
    _indexer: std::marker::PhantomData<&'a T>,
    inner: bitvec::slice::IterOnes<'a, u8, Lsb0>,
}

impl<T: EvdevEnum> Iterator for AttributeSetRefIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(T::from_index)
    }
}

/// Owned storage for an [`AttributeSetRef`], sized for every code of `T`.
pub struct AttributeSet<T: ArrayedEvdevEnum> {
    container: T::Array,
}

impl<T: ArrayedEvdevEnum> AttributeSet<T> {
    pub fn new() -> Self {
        Self {
            container: T::zeroed_array(),
        }
    }

    /// The raw bitmap, in the byte order `EVIOCGBIT` writes it.
    #[inline]
    pub(crate) fn as_mut_raw_slice(&mut self) -> &mut [u8] {
        T::array_as_buf(&mut self.container)
    }
}

impl<T: ArrayedEvdevEnum> Default for AttributeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrayedEvdevEnum> FromIterator<T> for AttributeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = AttributeSet::default();
        iter.into_iter().for_each(|el| set.insert(el));
        set
    }
}

impl<T: ArrayedEvdevEnum> Deref for AttributeSet<T> {
    type Target = AttributeSetRef<T>;
    fn deref(&self) -> &AttributeSetRef<T> {
        AttributeSetRef::new(T::array_as_slice(&self.container))
    }
}

impl<T: ArrayedEvdevEnum> DerefMut for AttributeSet<T> {
    fn deref_mut(&mut self) -> &mut AttributeSetRef<T> {
        AttributeSetRef::new_mut(T::array_as_slice_mut(&mut self.container))
    }
}

impl<T: ArrayedEvdevEnum> Clone for AttributeSet<T>
where
    T::Array: Clone,
{
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
        }
    }
}

impl<T: ArrayedEvdevEnum + fmt::Debug> fmt::Debug for AttributeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (**self).fmt(f)
    }
}

pub trait EvdevEnum: Copy + 'static {
    fn from_index(i: usize) -> Self;
    fn to_index(self) -> usize;
}

pub trait ArrayedEvdevEnum: EvdevEnum {
    type Array;
    fn array_as_slice(arr: &Self::Array) -> &BitSlice<u8>;
    fn array_as_slice_mut(arr: &mut Self::Array) -> &mut BitSlice<u8>;
    fn array_as_buf(arr: &mut Self::Array) -> &mut [u8];
    fn zeroed_array() -> Self::Array;
}

/// Declares the named codes of a `u16` newtype and wires it into [`AttributeSet`].
///
/// The type must provide `const COUNT: usize`, the number of codes the kernel bitmap holds.
macro_rules! evdev_enum {
    ($t:ty, Array, $($(#[$attr:meta])* $c:ident = $val:expr,)*) => {
        impl $crate::attribute_set::ArrayedEvdevEnum for $t {
            type Array = bitvec::BitArr!(for <$t>::COUNT, in u8);
            fn array_as_slice(arr: &Self::Array) -> &bitvec::slice::BitSlice<u8> {
                arr
            }
            fn array_as_slice_mut(arr: &mut Self::Array) -> &mut bitvec::slice::BitSlice<u8> {
                arr
            }
            fn array_as_buf(arr: &mut Self::Array) -> &mut [u8] {
                arr.as_raw_mut_slice()
            }
            fn zeroed_array() -> Self::Array {
                bitvec::array::BitArray::ZERO
            }
        }
        evdev_enum!($t, $($(#[$attr])* $c = $val,)*);
    };
    ($t:ty, $($(#[$attr:meta])* $c:ident = $val:expr,)*) => {
        impl $t {
            $($(#[$attr])* pub const $c: Self = Self($val);)*

            const NAME_MAP: &'static [(&'static str, $t)] = &[
                $((stringify!($c), Self::$c),)*
            ];
        }
        impl std::str::FromStr for $t {
            type Err = crate::EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match Self::NAME_MAP.iter().find(|e| e.0 == s) {
                    Some(e) => Ok(e.1),
                    None => Err(crate::EnumParseError(())),
                }
            }
        }
        impl std::fmt::Debug for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match Self::NAME_MAP.iter().find(|e| e.1 == *self) {
                    Some(e) => f.pad(e.0),
                    None => write!(f, "unknown code: {}", self.0),
                }
            }
        }
        impl $crate::attribute_set::EvdevEnum for $t {
            #[inline]
            fn from_index(i: usize) -> Self {
                Self(i as _)
            }
            #[inline]
            fn to_index(self) -> usize {
                self.0 as _
            }
        }
        #[cfg(feature = "serde")]
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                match Self::NAME_MAP.iter().find(|e| e.1 == *self) {
                    Some(e) => serializer.serialize_str(e.0),
                    None => serializer.serialize_u16(self.0),
                }
            }
        }
        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = $t;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        write!(formatter, "a string with any of the constants in {}", stringify!($t))
                    }

                    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        match <$t>::NAME_MAP.iter().find(|(key, _)| s.eq_ignore_ascii_case(key)) {
                            Some((_, v)) => Ok(*v),
                            None => Err(serde::de::Error::invalid_value(serde::de::Unexpected::Str(s), &self)),
                        }
                    }
                }
                deserializer.deserialize_str(Visitor)
            }
        }
    }
}
