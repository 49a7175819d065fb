//! A small in-memory shop: customers and the items they want to buy.
//!
//! [`customers()`] returns the fixed roster the reductions in this crate are
//! demonstrated against, and [`BIT_LIST`] the fixed token list for
//! [`BitString`](crate::bits::BitString).

/// Something a customer may want to buy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
}

impl Item {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A customer, identified by name, with a wish list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer {
    name: String,
    wanted: Vec<Item>,
}

impl Customer {
    /// Creates a customer wanting the given items.
    ///
    /// # Examples
    ///
    /// ```
    /// use fold_merge::store::Customer;
    ///
    /// let joe = Customer::new("Joe", ["plate", "fork"]);
    ///
    /// assert_eq!(joe.name(), "Joe");
    /// assert_eq!(joe.wanted().len(), 2);
    /// ```
    pub fn new<I>(name: impl Into<String>, wanted: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            name: name.into(),
            wanted: wanted.into_iter().map(Item::new).collect(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items this customer wants to buy. May be empty.
    #[inline]
    pub fn wanted(&self) -> &[Item] {
        &self.wanted
    }
}

/// Positions decoded by the bit-string example.
pub const BIT_LIST: &str = "22-24,9,42-44,11,4,46,14-17,5,2,38-40,33,50,48";

/// The fixed ten-customer roster, in registration order.
pub fn customers() -> Vec<Customer> {
    const NONE: [&str; 0] = [];

    vec![
        Customer::new("Joe", ["small table", "plate", "fork"]),
        Customer::new("Steven", ["ice cream", "earphone", "cable"]),
        Customer::new("Patrick", ["onion", "ice cream", "crayon"]),
        Customer::new("Diana", ["cable", "cold medicine"]),
        Customer::new("Chris", ["plane", "chair"]),
        Customer::new("Kathy", ["screwdriver", "bag"]),
        Customer::new("Alice", ["desk", "pants"]),
        Customer::new("Andrew", NONE),
        Customer::new("Martin", ["plate", "fork", "pen"]),
        Customer::new("Amy", ["onion", "bag"]),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::customers;

    #[test]
    fn roster_names_are_unique() {
        let roster = customers();
        let names: HashSet<_> = roster.iter().map(|c| c.name()).collect();

        assert_eq!(roster.len(), 10);
        assert_eq!(names.len(), roster.len());
    }

    #[test]
    fn andrew_wants_nothing() {
        let roster = customers();
        let andrew = roster.iter().find(|c| c.name() == "Andrew");

        assert!(andrew.is_some_and(|c| c.wanted().is_empty()));
    }
}
