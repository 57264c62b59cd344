/// Implements a binary operator for every owned/borrowed combination of
/// operands by forwarding to the `&lhs op &rhs` implementation, which must be
/// written by hand.
macro_rules! impl_forward_bin_ops_to_ref {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl_forward_bin_ops_to_ref! {
            impl $trait<$type> for $type { fn $func() -> $type }
            $($remainder)*
        }
    };

    (
        impl $trait:ident<$rhs:ty> for $type:ty { fn $func:ident() -> $ret:ty }
        $($remainder:tt)*
    ) => {
        impl $trait<$rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(&self, &rhs)
            }
        }
        impl<'a> $trait<$rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(self, &rhs)
            }
        }
        impl<'a> $trait<&'a $rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: &'a $rhs) -> $ret {
                $trait::$func(&self, rhs)
            }
        }
        impl_forward_bin_ops_to_ref! { $($remainder)* }
    };
}

/// Implements `AbsDiffEq` for a struct of three float coordinates.
macro_rules! impl_xyz_abs_diff_eq {
    (impl for $type:ty) => {
        impl $crate::approx::AbsDiffEq for $type {
            type Epsilon = $crate::Float;

            fn default_epsilon() -> Self::Epsilon {
                $crate::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $crate::approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
                    && $crate::approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
                    && $crate::approx::AbsDiffEq::abs_diff_eq(&self.z, &other.z, epsilon)
            }
        }
    };
}
