//! Order item quantity modification.

use super::{OrderError, OrderItem};

/// Sets an item quantity and keeps the line total consistent.
///
/// Quantity changes are routed through this collaborator rather than plain
/// field assignment because they carry side effects (total recalculation).
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantityModifier;

impl QuantityModifier {
    pub fn new() -> Self {
        Self
    }

    /// Sets the item quantity and recalculates its total.
    pub fn modify(&self, item: &mut OrderItem, quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity { quantity });
        }

        item.quantity = quantity;
        item.total = item.unit_price.multiply(quantity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Money;

    #[test]
    fn modify_updates_quantity_and_total() {
        let mut item = OrderItem::new("MUG-BLUE", "Blue Mug", 5, Money::from_cents(1000));
        QuantityModifier::new().modify(&mut item, 2).unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(item.total.cents(), 2000);
    }

    #[test]
    fn modify_to_zero_fails() {
        let mut item = OrderItem::new("MUG-BLUE", "Blue Mug", 1, Money::from_cents(1000));
        let result = QuantityModifier::new().modify(&mut item, 0);

        assert!(matches!(
            result,
            Err(OrderError::InvalidQuantity { quantity: 0 })
        ));
        assert_eq!(item.quantity, 1);
    }
}
