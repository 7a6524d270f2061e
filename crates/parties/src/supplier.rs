use serde::{Deserialize, Serialize};

use repairstock_core::{DomainError, DomainResult, Entity, SupplierId};

/// Contact information for a counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A parts supplier: the required counterpart of a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    id: SupplierId,
    name: String,
    #[serde(default)]
    contact: ContactInfo,
}

impl Supplier {
    pub fn new(
        id: SupplierId,
        name: impl Into<String>,
        contact: ContactInfo,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        Ok(Self { id, name, contact })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &SupplierId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_supplier_keeps_its_fields() {
        let id = SupplierId::new();
        let supplier = Supplier::new(
            id,
            "Pantalla Parts SRL",
            ContactInfo {
                phone: Some("555-0101".to_string()),
                ..ContactInfo::default()
            },
        )
        .unwrap();

        assert_eq!(supplier.id_typed(), id);
        assert_eq!(supplier.name(), "Pantalla Parts SRL");
        assert_eq!(supplier.contact().phone.as_deref(), Some("555-0101"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Supplier::new(SupplierId::new(), "   ", ContactInfo::default()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }
}
