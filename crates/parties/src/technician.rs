use serde::{Deserialize, Serialize};

use repairstock_core::{DomainError, DomainResult, Entity, TechnicianId};

/// A repair technician: the optional counterpart of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    id: TechnicianId,
    code: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
}

impl Technician {
    pub fn new(
        id: TechnicianId,
        code: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
    ) -> DomainResult<Self> {
        let code = code.into();
        let first_name = first_name.into();
        let last_name = last_name.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("technician code cannot be empty"));
        }
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(DomainError::validation("technician name cannot be empty"));
        }
        Ok(Self {
            id,
            code,
            first_name,
            last_name,
            phone,
        })
    }

    pub fn id_typed(&self) -> TechnicianId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Display name as shown in the counterpart picker.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Technician {
    type Id = TechnicianId;

    fn id(&self) -> &TechnicianId {
        &self.id
    }
}
