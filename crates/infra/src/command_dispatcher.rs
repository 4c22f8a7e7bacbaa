//! Dispatch of `POST /api/data` actions.
//!
//! There is no backing store yet: a recognised action is acknowledged and its
//! payload echoed back, and nothing else happens. Parsing the action tag into
//! [`DataAction`] keeps the set of supported actions closed and exhaustively
//! matched.

use core::str::FromStr;

use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Supported write actions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DataAction {
    UpdateInventory,
    AddSales,
}

impl DataAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataAction::UpdateInventory => "updateInventory",
            DataAction::AddSales => "addSales",
        }
    }

    /// User-facing acknowledgement text.
    pub fn acknowledgement(&self) -> &'static str {
        match self {
            DataAction::UpdateInventory => "Инвентарь обновлен",
            DataAction::AddSales => "Продажи добавлены",
        }
    }
}

impl FromStr for DataAction {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "updateInventory" => Ok(Self::UpdateInventory),
            "addSales" => Ok(Self::AddSales),
            other => Err(DispatchError::UnknownAction(other.to_string())),
        }
    }
}

/// Acknowledgement returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub message: &'static str,
    pub data: JsonValue,
}

/// Parses the action tag and acknowledges it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataCommandDispatcher;

impl DataCommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn dispatch(&self, action: &str, data: JsonValue) -> Result<Acknowledgement, DispatchError> {
        let action: DataAction = action.parse()?;
        tracing::info!(action = action.as_str(), "data action acknowledged (not persisted)");
        Ok(Acknowledgement {
            message: action.acknowledgement(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn update_inventory_echoes_payload() {
        let ack = DataCommandDispatcher::new()
            .dispatch("updateInventory", json!({"sku": "SKU001", "stock": 10}))
            .unwrap();
        assert_eq!(ack.message, "Инвентарь обновлен");
        assert_eq!(ack.data, json!({"sku": "SKU001", "stock": 10}));
    }

    #[test]
    fn add_sales_echoes_payload() {
        let payload = json!([{"sku": "SKU002", "quantity": 3}]);
        let ack = DataCommandDispatcher::new()
            .dispatch("addSales", payload.clone())
            .unwrap();
        assert_eq!(ack.message, "Продажи добавлены");
        assert_eq!(ack.data, payload);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = DataCommandDispatcher::new()
            .dispatch("deleteEverything", JsonValue::Null)
            .unwrap_err();
        assert_eq!(err, DispatchError::UnknownAction("deleteEverything".to_string()));
    }

    #[test]
    fn action_tags_are_case_sensitive() {
        assert!("UpdateInventory".parse::<DataAction>().is_err());
        assert!("addsales".parse::<DataAction>().is_err());
    }

    #[test]
    fn as_str_roundtrips() {
        for action in [DataAction::UpdateInventory, DataAction::AddSales] {
            assert_eq!(action.as_str().parse::<DataAction>().unwrap(), action);
        }
    }

    #[test]
    fn acknowledgement_serializes_message_and_data() {
        let ack = Acknowledgement {
            message: "Инвентарь обновлен",
            data: JsonValue::Null,
        };
        assert_eq!(
            serde_json::to_value(ack).unwrap(),
            json!({"message": "Инвентарь обновлен", "data": null})
        );
    }
}
