use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    /// Assigned by storage on first persist, never changed afterwards.
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

impl Product {
    /// Overwrites every field except `id` with the values from `data`.
    pub fn overwrite_with(&mut self, data: Product) {
        self.name = data.name;
        self.description = data.description;
        self.price = data.price;
        self.quantity = data.quantity;
    }

    pub fn has_stock_for(&self, count: i32) -> bool {
        self.quantity >= count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: Option<i64>, quantity: i32) -> Product {
        Product {
            id,
            name: "Widget".to_string(),
            description: None,
            price: 1.5,
            quantity,
        }
    }

    #[test]
    fn overwrite_keeps_id() {
        let mut existing = product(Some(7), 5);
        let mut update = product(Some(99), 10);
        update.name = "Gadget".to_string();
        update.description = Some("shiny".to_string());
        update.price = 3.25;

        existing.overwrite_with(update);

        assert_eq!(existing.id, Some(7));
        assert_eq!(existing.name, "Gadget");
        assert_eq!(existing.description.as_deref(), Some("shiny"));
        assert_eq!(existing.price, 3.25);
        assert_eq!(existing.quantity, 10);
    }

    #[test]
    fn stock_boundary() {
        let p = product(Some(1), 10);
        assert!(p.has_stock_for(10));
        assert!(!p.has_stock_for(11));
        assert!(p.has_stock_for(0));
        assert!(p.has_stock_for(-4));
    }
}
