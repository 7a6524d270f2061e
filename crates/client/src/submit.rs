//! Submission payloads and the submit contract.

use serde::Serialize;

use repairstock_cart::{Cart, LineItem};
use repairstock_core::{Money, SupplierId, TechnicianId, UserId, VariantId};

use crate::error::SubmitError;
use crate::session::Session;

/// One cart line in the shape the persistence API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePayload {
    pub variant_id: VariantId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl From<&LineItem> for LinePayload {
    fn from(line: &LineItem) -> Self {
        Self {
            variant_id: line.variant_id(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
        }
    }
}

/// A finalized purchase, ready to post. A supplier is required by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSubmission {
    pub details: Vec<LinePayload>,
    pub supplier_id: SupplierId,
    pub user_id: UserId,
}

impl PurchaseSubmission {
    /// Map a finalized cart. Line order is the cart's display order.
    pub fn from_cart(
        cart: &Cart,
        supplier_id: SupplierId,
        session: &Session,
    ) -> Result<Self, SubmitError> {
        Ok(Self {
            details: payload_lines(cart)?,
            supplier_id,
            user_id: session.user_id(),
        })
    }
}

/// A finalized sale, ready to post. The technician is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSubmission {
    pub details: Vec<LinePayload>,
    pub technician_id: Option<TechnicianId>,
    pub user_id: UserId,
}

impl SaleSubmission {
    pub fn from_cart(
        cart: &Cart,
        technician_id: Option<TechnicianId>,
        session: &Session,
    ) -> Result<Self, SubmitError> {
        Ok(Self {
            details: payload_lines(cart)?,
            technician_id,
            user_id: session.user_id(),
        })
    }
}

fn payload_lines(cart: &Cart) -> Result<Vec<LinePayload>, SubmitError> {
    if cart.is_empty() {
        return Err(SubmitError::EmptyCart);
    }
    Ok(cart.lines().iter().map(LinePayload::from).collect())
}

/// The persistence boundary the entry dialogs call.
///
/// Success means the cart may be discarded; failure carries a
/// human-readable message and the caller keeps the cart so the operator
/// can correct and re-click.
pub trait SubmitAdapter {
    async fn submit_purchase(
        &self,
        submission: &PurchaseSubmission,
        session: &Session,
    ) -> Result<(), SubmitError>;

    async fn submit_sale(
        &self,
        submission: &SaleSubmission,
        session: &Session,
    ) -> Result<(), SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use repairstock_cart::LineCandidate;

    fn session() -> Session {
        Session::new(UserId::new(), "token")
    }

    fn cart_with_lines(pairs: &[(VariantId, u64, u32)]) -> Cart {
        let mut cart = Cart::purchase();
        for (variant_id, price_cents, quantity) in pairs {
            cart.add_or_merge(LineCandidate {
                variant_id: *variant_id,
                display_name: "screen".to_string(),
                brand: "brand".to_string(),
                grade_label: "grade".to_string(),
                unit_price: Money::from_cents(*price_cents),
                quantity: *quantity,
                stock_ceiling: None,
            })
            .unwrap();
        }
        cart
    }

    #[test]
    fn empty_cart_cannot_be_submitted() {
        let err =
            PurchaseSubmission::from_cart(&Cart::purchase(), SupplierId::new(), &session())
                .unwrap_err();
        assert_eq!(err, SubmitError::EmptyCart);

        let err = SaleSubmission::from_cart(&Cart::sale(), None, &session()).unwrap_err();
        assert_eq!(err, SubmitError::EmptyCart);
    }

    #[test]
    fn details_preserve_cart_display_order() {
        let a = VariantId::new();
        let b = VariantId::new();
        let cart = cart_with_lines(&[(a, 10_000, 2), (b, 5_000, 1)]);

        let submission =
            PurchaseSubmission::from_cart(&cart, SupplierId::new(), &session()).unwrap();

        assert_eq!(submission.details.len(), 2);
        assert_eq!(submission.details[0].variant_id, a);
        assert_eq!(submission.details[0].quantity, 2);
        assert_eq!(submission.details[0].unit_price, Money::from_cents(10_000));
        assert_eq!(submission.details[1].variant_id, b);
    }

    #[test]
    fn purchase_serializes_to_camel_case_wire_shape() {
        let cart = cart_with_lines(&[(VariantId::new(), 10_000, 2)]);
        let submission =
            PurchaseSubmission::from_cart(&cart, SupplierId::new(), &session()).unwrap();

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("supplierId").is_some());
        assert!(json.get("userId").is_some());
        let line = &json["details"][0];
        assert!(line.get("variantId").is_some());
        assert_eq!(line["quantity"], 2);
        assert_eq!(line["unitPrice"], 10_000);
    }

    #[test]
    fn sale_without_technician_serializes_null() {
        let mut cart = Cart::sale();
        cart.add_or_merge(LineCandidate {
            variant_id: VariantId::new(),
            display_name: "screen".to_string(),
            brand: "brand".to_string(),
            grade_label: "grade".to_string(),
            unit_price: Money::from_cents(5_000),
            quantity: 1,
            stock_ceiling: Some(3),
        })
        .unwrap();

        let submission = SaleSubmission::from_cart(&cart, None, &session()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json["technicianId"].is_null());
    }

    #[test]
    fn user_id_comes_from_the_session() {
        let user_id = UserId::new();
        let session = Session::new(user_id, "token");
        let cart = cart_with_lines(&[(VariantId::new(), 10_000, 1)]);

        let submission =
            SaleSubmission::from_cart(&cart, Some(TechnicianId::new()), &session).unwrap();
        assert_eq!(submission.user_id, user_id);
    }

    mod adapter_contract {
        use super::*;
        use std::cell::RefCell;

        /// Scripted adapter: fails each submission until told otherwise.
        struct ScriptedAdapter {
            outcomes: RefCell<Vec<Result<(), SubmitError>>>,
        }

        impl ScriptedAdapter {
            fn new(outcomes: Vec<Result<(), SubmitError>>) -> Self {
                Self {
                    outcomes: RefCell::new(outcomes),
                }
            }

            fn next(&self) -> Result<(), SubmitError> {
                self.outcomes.borrow_mut().remove(0)
            }
        }

        impl SubmitAdapter for ScriptedAdapter {
            async fn submit_purchase(
                &self,
                _submission: &PurchaseSubmission,
                _session: &Session,
            ) -> Result<(), SubmitError> {
                self.next()
            }

            async fn submit_sale(
                &self,
                _submission: &SaleSubmission,
                _session: &Session,
            ) -> Result<(), SubmitError> {
                self.next()
            }
        }

        #[tokio::test]
        async fn rejected_submission_preserves_the_cart_for_retry() {
            let adapter = ScriptedAdapter::new(vec![
                Err(SubmitError::Rejected("insufficient stock".to_string())),
                Ok(()),
            ]);
            let session = session();
            let mut cart = cart_with_lines(&[(VariantId::new(), 10_000, 2)]);

            let submission =
                PurchaseSubmission::from_cart(&cart, SupplierId::new(), &session).unwrap();
            let err = adapter
                .submit_purchase(&submission, &session)
                .await
                .unwrap_err();
            assert_eq!(err, SubmitError::Rejected("insufficient stock".to_string()));

            // The cart is untouched; the operator re-clicks.
            assert_eq!(cart.len(), 1);
            let retry =
                PurchaseSubmission::from_cart(&cart, SupplierId::new(), &session).unwrap();
            adapter.submit_purchase(&retry, &session).await.unwrap();

            // Success: the dialog discards the cart.
            cart.clear();
            assert!(cart.is_empty());
        }
    }
}
