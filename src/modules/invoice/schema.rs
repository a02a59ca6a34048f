use serde::{Deserialize, Serialize};

pub const CUSTOMER_ID_ERROR: &str = "Customer ID must be a string.";
pub const AMOUNT_ERROR: &str = "Amount must be greater than 0.";
pub const STATUS_ERROR: &str = "Status must be either \"pending\" or \"paid\".";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl TryFrom<String> for InvoiceStatus {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| format!("unknown invoice status {:?}", raw))
    }
}

/// The invoice form exactly as submitted: every field is a string or
/// absent. Typing happens in [`validate`], not in the extractor.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceFields {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceFields {
    /// Major-unit amount converted to an integer count of minor units.
    pub fn amount_in_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}

/// One message list per invalid field. Clean fields are omitted from
/// the serialized mapping.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(InvoiceFields),
    Invalid(FieldErrors),
}

pub fn validate(form: &RawInvoiceForm) -> Validation {
    let mut errors = FieldErrors::default();

    let customer_id = match form.customer_id.clone() {
        Some(customer_id) => Some(customer_id),
        None => {
            errors.customer_id.push(CUSTOMER_ID_ERROR.to_string());
            None
        }
    };

    let amount = match parse_amount(form.amount.as_deref()) {
        Some(amount) if amount > 0.0 => Some(amount),
        _ => {
            errors.amount.push(AMOUNT_ERROR.to_string());
            None
        }
    };

    let status = match form.status.as_deref().and_then(InvoiceStatus::parse) {
        Some(status) => Some(status),
        None => {
            errors.status.push(STATUS_ERROR.to_string());
            None
        }
    };

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Validation::Valid(InvoiceFields {
            customer_id,
            amount,
            status,
        }),
        _ => Validation::Invalid(errors),
    }
}

fn parse_amount(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|amount| amount.is_finite())
}

/// Display-formatted echo of a rejected submission, sent back so the
/// form can re-render pre-filled. Built explicitly per field instead of
/// round-tripping the raw strings.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldEcho {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
}

impl FormFieldEcho {
    /// Create echoes the customer id only when a non-empty one was
    /// submitted.
    pub fn for_create(form: &RawInvoiceForm) -> Self {
        Self {
            customer_id: form.customer_id.clone().filter(|id| !id.is_empty()),
            amount: echo_amount(form),
            status: form.status.as_deref().and_then(InvoiceStatus::parse),
        }
    }

    /// Update defaults a missing customer id to an empty string. The
    /// asymmetry with [`Self::for_create`] is inherited behavior, kept
    /// for compatibility with existing form clients.
    pub fn for_update(form: &RawInvoiceForm) -> Self {
        Self {
            customer_id: Some(form.customer_id.clone().unwrap_or_default()),
            ..Self::for_create(form)
        }
    }
}

// Only a usable display value is echoed: unparseable or non-positive
// amounts come back absent.
fn echo_amount(form: &RawInvoiceForm) -> Option<f64> {
    parse_amount(form.amount.as_deref()).filter(|amount| *amount > 0.0)
}

/// Result payload of the non-redirecting handler paths.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_fields: Option<FormFieldEcho>,
}

impl InvoiceFormState {
    pub fn message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::default()
        }
    }
}
