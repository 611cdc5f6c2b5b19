use crate::db::models::NewResource;
use crate::error::StockroomError;

/// Raw text captured by the insert prompt, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceForm {
    pub name: String,
    pub timeline: String,
    pub quantity: String,
    pub cost: String,
}

impl ResourceForm {
    pub fn new(
        name: impl Into<String>,
        timeline: impl Into<String>,
        quantity: impl Into<String>,
        cost: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            timeline: timeline.into(),
            quantity: quantity.into(),
            cost: cost.into(),
        }
    }

    /// Validate the numeric fields. Name and timeline are free text.
    pub fn parse(&self) -> Result<NewResource, StockroomError> {
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| StockroomError::parse("quantity", &self.quantity))?;
        let cost = self
            .cost
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
            .ok_or_else(|| StockroomError::parse("cost", &self.cost))?;

        Ok(NewResource {
            name: self.name.clone(),
            timeline: self.timeline.clone(),
            quantity,
            cost,
        })
    }
}

pub fn parse_resource_id(input: &str) -> Result<i64, StockroomError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| StockroomError::parse("resource id", input))
}
