//! Lazy arithmetic between optionals and raw values.

use std::ops::{Add, Div, Mul, Sub};

use crate::Optional;

macro_rules! impl_arithmetic {
    ($($trait:ident, $operator:ident, $method:ident, $symbol:literal);+ $(;)?) => {
        impl<T: Clone + 'static> Optional<T> {
            $(
                #[doc = concat!("Lazily applies `", $symbol, "` to the values of both operands.")]
                ///
                /// The result is empty when either operand is empty.
                pub fn $method<U>(self, other: Optional<U>) -> Optional<T::Output>
                where
                    T: $trait<U>,
                    T::Output: Clone + 'static,
                    U: Clone + 'static,
                {
                    self.reduce(other, <T as $trait<U>>::$operator)
                }
            )+
        }

        $(
            impl<T, U> $trait<Optional<U>> for Optional<T>
            where
                T: $trait<U> + Clone + 'static,
                T::Output: Clone + 'static,
                U: Clone + 'static,
            {
                type Output = Optional<T::Output>;

                fn $operator(self, other: Optional<U>) -> Self::Output {
                    self.$method(other)
                }
            }
        )+
    };
}

impl_arithmetic! {
    Add, add, plus, "+";
    Sub, sub, minus, "-";
    Mul, mul, times, "*";
    Div, div, divide, "/";
}

macro_rules! impl_raw_arithmetic {
    ($($primitive:ty),+ $(,)?) => {
        $(
            impl_raw_arithmetic!(@operator $primitive, Add, add, plus);
            impl_raw_arithmetic!(@operator $primitive, Sub, sub, minus);
            impl_raw_arithmetic!(@operator $primitive, Mul, mul, times);
            impl_raw_arithmetic!(@operator $primitive, Div, div, divide);
        )+
    };
    (@operator $primitive:ty, $trait:ident, $operator:ident, $method:ident) => {
        impl $trait<$primitive> for Optional<$primitive> {
            type Output = Self;

            fn $operator(self, other: $primitive) -> Self::Output {
                self.$method(Optional::of(other))
            }
        }

        impl $trait<Optional<$primitive>> for $primitive {
            type Output = Optional<$primitive>;

            fn $operator(self, other: Optional<$primitive>) -> Self::Output {
                Optional::of(self).$method(other)
            }
        }
    };
}

impl_raw_arithmetic!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
