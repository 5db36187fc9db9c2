use std::{convert::TryFrom, error::Error, fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        pub use self::$name::{$falsy, $truthy};

        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $falsy => $truthy,
                    $truthy => $falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl From<$name> for bool {
            fn from(val: $name) -> Self {
                val == $truthy
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq)]
        #[allow(missing_docs)]
        pub struct $parse_err {
            failed: char,
        }

        impl fmt::Display for $parse_err {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl Error for $parse_err {}

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $true_ch => Ok($truthy),
                    $false_ch => Ok($falsy),
                    _ => Err($parse_err { failed: c }),
                }
            }
        }

        impl From<$name> for char {
            fn from(val: $name) -> Self {
                match val {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", char::from(*self))
            }
        }
    };
}

bool_enum!(
    /// The hemisphere of a latitude
    Pole: North and South; parse from 'N':'S' with ParsePoleError
);
bool_enum!(
    /// The hemisphere of a longitude
    RotationalDirection: East and West; parse from 'E':'W' with ParseDirectionError
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pole_from_char() {
        assert_eq!(Pole::try_from('N').unwrap(), North);
        assert_eq!(Pole::try_from('S').unwrap(), South);
    }

    #[test]
    #[should_panic(expected = "Cannot parse Pole from 'E'")]
    fn pole_from_longitude_letter() {
        let _p = Pole::try_from('E').map_err(|e| e.to_string()).unwrap();
    }

    #[test]
    fn direction_display() {
        assert_eq!(East.to_string(), "E");
        assert_eq!(West.to_string(), "W");
        assert_eq!(char::from(South), 'S');
    }

    #[test]
    fn opposite() {
        assert_eq!(-North, South);
        assert_eq!(-West, East);
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(Pole::from(true), North);
        assert_eq!(RotationalDirection::from(false), West);
        assert!(bool::from(East));
        assert!(!bool::from(South));
    }
}
