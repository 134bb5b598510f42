//! Utility macros.

/// Implements a binary operator between two (possibly distinct) value types
/// generic over the scalar type, for every combination of owned and borrowed
/// operands.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ident, $tr:ident, $to:ident, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, T: crate::num::Float> ::std::ops::$op<&'a $tr<T>> for &'a $tl<T> {
            type Output = $to<T>;

            #[inline]
            fn $method(self, rhs: &'a $tr<T>) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: crate::num::Float> ::std::ops::$op<$tr<T>> for &$tl<T> {
            type Output = $to<T>;

            #[inline]
            fn $method(self, rhs: $tr<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, T: crate::num::Float> ::std::ops::$op<&'a $tr<T>> for $tl<T> {
            type Output = $to<T>;

            #[inline]
            fn $method(self, rhs: &'a $tr<T>) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<T: crate::num::Float> ::std::ops::$op<$tr<T>> for $tl<T> {
            type Output = $to<T>;

            #[inline]
            fn $method(self, rhs: $tr<T>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

/// Implements a binary operator whose right-hand side is the scalar type
/// itself.
macro_rules! impl_scalar_binop {
    ($op:ident, $method:ident, $t:ident, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<T: crate::num::Float> ::std::ops::$op<T> for &$t<T> {
            type Output = $t<T>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: crate::num::Float> ::std::ops::$op<T> for $t<T> {
            type Output = $t<T>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

/// Implements scalar-on-the-left multiplication for a concrete scalar type.
/// Coherence forbids a blanket impl with the scalar as a type parameter, so
/// this is instantiated once per supported scalar.
macro_rules! impl_scalar_lhs_mul {
    ($f:ty, $t:ident) => {
        impl ::std::ops::Mul<$t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: $t<$f>) -> Self::Output {
                rhs.mul(self)
            }
        }

        impl<'a> ::std::ops::Mul<&'a $t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: &'a $t<$f>) -> Self::Output {
                rhs.mul(self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ident, $tr:ident, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<T: crate::num::Float> ::std::ops::$op<&$tr<T>> for $tl<T> {
            #[inline]
            fn $method(&mut self, rhs: &$tr<T>) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: crate::num::Float> ::std::ops::$op<$tr<T>> for $tl<T> {
            #[inline]
            fn $method(&mut self, rhs: $tr<T>) {
                self.$method(&rhs);
            }
        }
    };
}

macro_rules! impl_scalar_binop_assign {
    ($op:ident, $method:ident, $t:ident, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<T: crate::num::Float> ::std::ops::$op<T> for $t<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ident, $to:ident, |$this:ident| $body:block) => {
        impl<T: crate::num::Float> ::std::ops::$op for &$t<T> {
            type Output = $to<T>;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<T: crate::num::Float> ::std::ops::$op for $t<T> {
            type Output = $to<T>;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ident, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<T: crate::num::Float> ::approx::AbsDiffEq for $t<T> {
            type Epsilon = T;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ident, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<T: crate::num::Float> ::approx::RelativeEq for $t<T> {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

// The swizzle macros below expand inside an `impl` block and emit one method
// per ordered selection (with repetition) of the listed components. A
// component that does not exist on the vector is simply never listed, so an
// invalid swizzle is a missing method: a compile error, never a runtime
// error. The nested index loops are expressed as macro recursion over the
// first index.

macro_rules! impl_swizzle2 {
    ($out:ident, [], $bs:tt) => {};
    ($out:ident, [$a:ident $(, $as:ident)*], [$($b:ident),*]) => {
        ::pastey::paste! {
            $(
                #[doc = concat!(
                    "The (", stringify!($a), ", ", stringify!($b),
                    ") components of this vector as a new vector."
                )]
                #[inline]
                pub fn [<$a $b>](&self) -> $out<T> {
                    $out::new(self.$a, self.$b)
                }
            )*
        }
        impl_swizzle2!($out, [$($as),*], [$($b),*]);
    };
}

macro_rules! impl_swizzle3 {
    ($out:ident, [], $bs:tt, $cs:tt) => {};
    ($out:ident, [$a:ident $(, $as:ident)*], $bs:tt, $cs:tt) => {
        impl_swizzle3!(@mid $out, $a, $bs, $cs);
        impl_swizzle3!($out, [$($as),*], $bs, $cs);
    };
    (@mid $out:ident, $a:ident, [], $cs:tt) => {};
    (@mid $out:ident, $a:ident, [$b:ident $(, $bs:ident)*], $cs:tt) => {
        impl_swizzle3!(@last $out, $a, $b, $cs);
        impl_swizzle3!(@mid $out, $a, [$($bs),*], $cs);
    };
    (@last $out:ident, $a:ident, $b:ident, [$($c:ident),*]) => {
        ::pastey::paste! {
            $(
                #[doc = concat!(
                    "The (", stringify!($a), ", ", stringify!($b), ", ",
                    stringify!($c), ") components of this vector as a new vector."
                )]
                #[inline]
                pub fn [<$a $b $c>](&self) -> $out<T> {
                    $out::new(self.$a, self.$b, self.$c)
                }
            )*
        }
    };
}

macro_rules! impl_swizzle4 {
    ($out:ident, [], $bs:tt, $cs:tt, $ds:tt) => {};
    ($out:ident, [$a:ident $(, $as:ident)*], $bs:tt, $cs:tt, $ds:tt) => {
        impl_swizzle4!(@second $out, $a, $bs, $cs, $ds);
        impl_swizzle4!($out, [$($as),*], $bs, $cs, $ds);
    };
    (@second $out:ident, $a:ident, [], $cs:tt, $ds:tt) => {};
    (@second $out:ident, $a:ident, [$b:ident $(, $bs:ident)*], $cs:tt, $ds:tt) => {
        impl_swizzle4!(@third $out, $a, $b, $cs, $ds);
        impl_swizzle4!(@second $out, $a, [$($bs),*], $cs, $ds);
    };
    (@third $out:ident, $a:ident, $b:ident, [], $ds:tt) => {};
    (@third $out:ident, $a:ident, $b:ident, [$c:ident $(, $cs:ident)*], $ds:tt) => {
        impl_swizzle4!(@last $out, $a, $b, $c, $ds);
        impl_swizzle4!(@third $out, $a, $b, [$($cs),*], $ds);
    };
    (@last $out:ident, $a:ident, $b:ident, $c:ident, [$($d:ident),*]) => {
        ::pastey::paste! {
            $(
                #[doc = concat!(
                    "The (", stringify!($a), ", ", stringify!($b), ", ",
                    stringify!($c), ", ", stringify!($d),
                    ") components of this vector as a new vector."
                )]
                #[inline]
                pub fn [<$a $b $c $d>](&self) -> $out<T> {
                    $out::new(self.$a, self.$b, self.$c, self.$d)
                }
            )*
        }
    };
}
