use crate::errors::BagError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Item name the capture flow consumes unless a session configures another.
pub const CAPTURE_ITEM: &str = "Poke Ball";

/// Named-quantity inventory. Counts never go negative: a consume on a zero
/// count fails without mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBag {
    // BTreeMap keeps Display output in a stable order
    items: BTreeMap<String, u32>,
}

impl ItemBag {
    pub fn new() -> Self {
        ItemBag::default()
    }

    /// The reference starting stock: 5 capture items and 2 potions.
    pub fn with_starting_stock() -> Self {
        let mut bag = ItemBag::new();
        bag.add(CAPTURE_ITEM, 5);
        bag.add("Potion", 2);
        bag
    }

    pub fn add(&mut self, item: impl Into<String>, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(item.into()).or_insert(0) += quantity;
    }

    /// Decrement the named item by one.
    pub fn consume(&mut self, item: &str) -> Result<(), BagError> {
        match self.items.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(BagError::OutOfStock(item.to_string())),
        }
    }

    pub fn quantity(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl fmt::Display for ItemBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listing: Vec<String> = self
            .items
            .iter()
            .map(|(item, count)| format!("{} x{}", item, count))
            .collect();
        write!(f, "{}", listing.join(", "))
    }
}
