//! Arithmetic operators on [`Entity`], building operator nodes without simplifying them.

use std::ops::{Add, Div, Mul, Neg, Sub};
use super::{Entity, Op};

/// Implements a binary operator for every combination of owned and borrowed operands.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Entity> for Entity {
            type Output = Entity;

            fn $method(self, rhs: Entity) -> Entity {
                Entity::binary($op, self, rhs)
            }
        }

        impl $trait<&Entity> for Entity {
            type Output = Entity;

            fn $method(self, rhs: &Entity) -> Entity {
                Entity::binary($op, self, rhs.clone())
            }
        }

        impl $trait<Entity> for &Entity {
            type Output = Entity;

            fn $method(self, rhs: Entity) -> Entity {
                Entity::binary($op, self.clone(), rhs)
            }
        }

        impl $trait<&Entity> for &Entity {
            type Output = Entity;

            fn $method(self, rhs: &Entity) -> Entity {
                Entity::binary($op, self.clone(), rhs.clone())
            }
        }
    };
}

binary_op!(Add, add, Op::Sum);
binary_op!(Sub, sub, Op::Minus);
binary_op!(Mul, mul, Op::Mul);
binary_op!(Div, div, Op::Div);

impl Neg for Entity {
    type Output = Entity;

    fn neg(self) -> Entity {
        Entity::unary(Op::Neg, self)
    }
}

impl Neg for &Entity {
    type Output = Entity;

    fn neg(self) -> Entity {
        Entity::unary(Op::Neg, self.clone())
    }
}
