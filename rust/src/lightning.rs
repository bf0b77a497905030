use serde::{Deserialize, Serialize};

use crate::event::RawEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightningInvoice {
    pub invoice: String,
    pub amount_sats: f64,
    pub description: Option<String>,
    pub is_paid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightningPayment {
    pub preimage: String,
    pub is_paid: bool,
}

/// Reads `["bolt11", <invoice>, <amount msats>, <description>]`.
pub fn event_to_lightning_invoice(event: &RawEvent) -> Option<LightningInvoice> {
    let tag = event.find_tag("bolt11")?;
    let invoice = tag.get(1).filter(|s| !s.is_empty())?;
    let amount_msats = tag
        .get(2)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0);
    Some(LightningInvoice {
        invoice: invoice.clone(),
        amount_sats: amount_msats / 1000.0,
        description: tag.get(3).cloned(),
        is_paid: false,
    })
}

/// Reads `["preimage", <preimage>]`.
pub fn event_to_lightning_payment(event: &RawEvent) -> Option<LightningPayment> {
    let preimage = event.tag_value("preimage").filter(|s| !s.is_empty())?;
    Some(LightningPayment {
        preimage: preimage.to_string(),
        is_paid: false,
    })
}
