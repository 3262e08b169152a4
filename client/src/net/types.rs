//! Resource records and the schema that drives the generic CRUD views.
//!
//! DESIGN
//! ======
//! Every admin table is rendered by one generic component. Everything that
//! differs between tables (resource path, labels, page size, searchable
//! fields, form fields, table columns, sort key, toggle field) is declared
//! here through the [`Entity`] trait, next to the wire record it describes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt::Debug;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Every resource path the admin UI manages, in sidebar order.
pub const RESOURCES: &[&str] = &[
    AboutCompany::RESOURCE,
    ServiceFeature::RESOURCE,
    Faq::RESOURCE,
    ProcessStep::RESOURCE,
    TeamMember::RESOURCE,
    Testimonial::RESOURCE,
    ContactLead::RESOURCE,
];

/// Input widget used to edit a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    TextArea,
    /// Integer input with optional inclusive bounds.
    Number { min: Option<i64>, max: Option<i64> },
    Email,
    Url,
    /// Boolean switch.
    Checkbox,
    /// One of a fixed set of string values.
    Select(&'static [&'static str]),
}

/// One editable field of a record form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key on the wire record.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self { key, label, kind, required }
    }
}

/// How a table cell renders its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Full value as text.
    Text,
    /// Text clipped to a short preview.
    Clipped,
    /// Status badge (booleans and lead status).
    Badge,
    /// Thumbnail from a URL value.
    Image,
}

/// One column of a resource table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: CellKind,
}

impl ColumnSpec {
    const fn new(key: &'static str, label: &'static str, kind: CellKind) -> Self {
        Self { key, label, kind }
    }
}

/// Schema binding a wire record to its REST resource and admin table.
pub trait Entity:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Path segment under `/api/resources/`.
    const RESOURCE: &'static str;
    /// Singular display name, e.g. `"FAQ"`.
    const LABEL: &'static str;
    /// Plural display name used for page titles.
    const PLURAL: &'static str;
    /// Rows per table page.
    const PAGE_SIZE: usize = 5;
    /// JSON keys matched by the table search box.
    const SEARCH_FIELDS: &'static [&'static str];
    /// Editable fields, in form order.
    const FIELDS: &'static [FieldSpec];
    /// Table columns, in display order.
    const COLUMNS: &'static [ColumnSpec];

    /// Identifier assigned by the remote API; empty before creation.
    fn id(&self) -> &str;

    /// Ascending sort key applied after every fetch, if the resource is ordered.
    fn sort_key(&self) -> Option<i64> {
        None
    }

    /// Current value of the `is_active` flag, if the resource has one.
    fn is_active(&self) -> Option<bool> {
        None
    }

    /// Single-field PATCH body that flips this record's toggle field.
    fn toggle_patch(&self) -> Option<serde_json::Value> {
        None
    }
}

fn active_toggle(current: bool) -> serde_json::Value {
    serde_json::json!({ "is_active": !current })
}

const fn default_true() -> bool {
    true
}

// =============================================================================
// ABOUT COMPANY
// =============================================================================

/// Company profile text shown on the public site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutCompany {
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub vision: String,
    #[serde(default)]
    pub values: String,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub founded_year: i64,
    #[serde(default)]
    pub headquarters: String,
}

impl Entity for AboutCompany {
    const RESOURCE: &'static str = "about-company";
    const LABEL: &'static str = "Company Profile";
    const PLURAL: &'static str = "Company Profiles";
    const PAGE_SIZE: usize = 4;
    const SEARCH_FIELDS: &'static [&'static str] = &["overview", "mission", "headquarters"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("overview", "Overview", FieldKind::TextArea, true),
        FieldSpec::new("mission", "Mission", FieldKind::TextArea, true),
        FieldSpec::new("vision", "Vision", FieldKind::TextArea, true),
        FieldSpec::new("values", "Values", FieldKind::TextArea, false),
        FieldSpec::new("founded_year", "Founded Year", FieldKind::Number { min: Some(1800), max: Some(2100) }, true),
        FieldSpec::new("headquarters", "Headquarters", FieldKind::Text, true),
    ];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("overview", "Overview", CellKind::Clipped),
        ColumnSpec::new("mission", "Mission", CellKind::Clipped),
        ColumnSpec::new("founded_year", "Founded", CellKind::Text),
        ColumnSpec::new("headquarters", "Headquarters", CellKind::Text),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// SERVICE FEATURE
// =============================================================================

/// A selling point attached to one service offering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceFeature {
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub service_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Default for ServiceFeature {
    fn default() -> Self {
        Self {
            id: String::new(),
            service_id: String::new(),
            title: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl Entity for ServiceFeature {
    const RESOURCE: &'static str = "service-features";
    const LABEL: &'static str = "Service Feature";
    const PLURAL: &'static str = "Service Features";
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description", "service_id"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("service_id", "Service ID", FieldKind::Text, true),
        FieldSpec::new("title", "Title", FieldKind::Text, true),
        FieldSpec::new("description", "Description", FieldKind::TextArea, true),
        FieldSpec::new("is_active", "Active", FieldKind::Checkbox, false),
    ];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("service_id", "Service", CellKind::Text),
        ColumnSpec::new("title", "Title", CellKind::Text),
        ColumnSpec::new("description", "Description", CellKind::Clipped),
        ColumnSpec::new("is_active", "Status", CellKind::Badge),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn toggle_patch(&self) -> Option<serde_json::Value> {
        Some(active_toggle(self.is_active))
    }
}

// =============================================================================
// FAQ
// =============================================================================

/// A question/answer pair, ordered by `display_order`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub display_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Default for Faq {
    fn default() -> Self {
        Self {
            id: String::new(),
            question: String::new(),
            answer: String::new(),
            display_order: 1,
            is_active: true,
        }
    }
}

impl Entity for Faq {
    const RESOURCE: &'static str = "faqs";
    const LABEL: &'static str = "FAQ";
    const PLURAL: &'static str = "FAQs";
    const SEARCH_FIELDS: &'static [&'static str] = &["question", "answer"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("question", "Question", FieldKind::Text, true),
        FieldSpec::new("answer", "Answer", FieldKind::TextArea, true),
        FieldSpec::new("display_order", "Display Order", FieldKind::Number { min: Some(1), max: None }, true),
        FieldSpec::new("is_active", "Active", FieldKind::Checkbox, false),
    ];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("display_order", "#", CellKind::Text),
        ColumnSpec::new("question", "Question", CellKind::Text),
        ColumnSpec::new("answer", "Answer", CellKind::Clipped),
        ColumnSpec::new("is_active", "Status", CellKind::Badge),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> Option<i64> {
        Some(self.display_order)
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn toggle_patch(&self) -> Option<serde_json::Value> {
        Some(active_toggle(self.is_active))
    }
}

// =============================================================================
// PROCESS STEP
// =============================================================================

/// One step of the engagement process, ordered by `step_number`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub step_number: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Default for ProcessStep {
    fn default() -> Self {
        Self {
            id: String::new(),
            step_number: 1,
            title: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl Entity for ProcessStep {
    const RESOURCE: &'static str = "process-steps";
    const LABEL: &'static str = "Process Step";
    const PLURAL: &'static str = "Process Steps";
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("step_number", "Step Number", FieldKind::Number { min: Some(1), max: None }, true),
        FieldSpec::new("title", "Title", FieldKind::Text, true),
        FieldSpec::new("description", "Description", FieldKind::TextArea, true),
        FieldSpec::new("is_active", "Active", FieldKind::Checkbox, false),
    ];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("step_number", "Step", CellKind::Text),
        ColumnSpec::new("title", "Title", CellKind::Text),
        ColumnSpec::new("description", "Description", CellKind::Clipped),
        ColumnSpec::new("is_active", "Status", CellKind::Badge),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> Option<i64> {
        Some(self.step_number)
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn toggle_patch(&self) -> Option<serde_json::Value> {
        Some(active_toggle(self.is_active))
    }
}

// =============================================================================
// TEAM MEMBER
// =============================================================================

/// A leadership/team profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Default for TeamMember {
    fn default() -> Self {
        Self {
            id: String::new(),
            full_name: String::new(),
            designation: String::new(),
            bio: String::new(),
            profile_image: String::new(),
            linkedin_url: String::new(),
            is_active: true,
        }
    }
}

impl Entity for TeamMember {
    const RESOURCE: &'static str = "team-members";
    const LABEL: &'static str = "Team Member";
    const PLURAL: &'static str = "Team Members";
    const SEARCH_FIELDS: &'static [&'static str] = &["full_name", "designation"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("full_name", "Full Name", FieldKind::Text, true),
        FieldSpec::new("designation", "Designation", FieldKind::Text, true),
        FieldSpec::new("bio", "Bio", FieldKind::TextArea, false),
        FieldSpec::new("profile_image", "Profile Image URL", FieldKind::Url, false),
        FieldSpec::new("linkedin_url", "LinkedIn URL", FieldKind::Url, false),
        FieldSpec::new("is_active", "Active", FieldKind::Checkbox, false),
    ];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("profile_image", "Photo", CellKind::Image),
        ColumnSpec::new("full_name", "Name", CellKind::Text),
        ColumnSpec::new("designation", "Designation", CellKind::Text),
        ColumnSpec::new("is_active", "Status", CellKind::Badge),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn toggle_patch(&self) -> Option<serde_json::Value> {
        Some(active_toggle(self.is_active))
    }
}

// =============================================================================
// TESTIMONIAL
// =============================================================================

/// A client quote with a 1-5 rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub testimonial_text: String,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub rating: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: String::new(),
            client_name: String::new(),
            company_name: String::new(),
            testimonial_text: String::new(),
            rating: 5,
            is_active: true,
        }
    }
}

impl Entity for Testimonial {
    const RESOURCE: &'static str = "testimonials";
    const LABEL: &'static str = "Testimonial";
    const PLURAL: &'static str = "Testimonials";
    const PAGE_SIZE: usize = 4;
    const SEARCH_FIELDS: &'static [&'static str] = &["client_name", "company_name", "testimonial_text"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("client_name", "Client Name", FieldKind::Text, true),
        FieldSpec::new("company_name", "Company", FieldKind::Text, false),
        FieldSpec::new("testimonial_text", "Testimonial", FieldKind::TextArea, true),
        FieldSpec::new("rating", "Rating", FieldKind::Number { min: Some(1), max: Some(5) }, true),
        FieldSpec::new("is_active", "Active", FieldKind::Checkbox, false),
    ];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("client_name", "Client", CellKind::Text),
        ColumnSpec::new("company_name", "Company", CellKind::Text),
        ColumnSpec::new("testimonial_text", "Testimonial", CellKind::Clipped),
        ColumnSpec::new("rating", "Rating", CellKind::Text),
        ColumnSpec::new("is_active", "Status", CellKind::Badge),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn toggle_patch(&self) -> Option<serde_json::Value> {
        Some(active_toggle(self.is_active))
    }
}

// =============================================================================
// CONTACT LEAD
// =============================================================================

/// Follow-up state of a contact form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
}

impl LeadStatus {
    pub const ALL: &'static [&'static str] = &["new", "contacted"];

    /// The status a toggle moves to.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::New => Self::Contacted,
            Self::Contacted => Self::New,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
        }
    }
}

/// An inbound enquiry from the public contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactLead {
    #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_lead_status")]
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl Entity for ContactLead {
    const RESOURCE: &'static str = "contact-leads";
    const LABEL: &'static str = "Contact Lead";
    const PLURAL: &'static str = "Contact Leads";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "message", "status"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text, true),
        FieldSpec::new("email", "Email", FieldKind::Email, true),
        FieldSpec::new("message", "Message", FieldKind::TextArea, true),
        FieldSpec::new("status", "Status", FieldKind::Select(LeadStatus::ALL), true),
    ];
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::new("name", "Name", CellKind::Text),
        ColumnSpec::new("email", "Email", CellKind::Text),
        ColumnSpec::new("message", "Message", CellKind::Clipped),
        ColumnSpec::new("status", "Status", CellKind::Badge),
        ColumnSpec::new("created_at", "Received", CellKind::Text),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn toggle_patch(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "status": self.status.next().as_str() }))
    }
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

/// Accept ids sent either as JSON strings or numbers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

/// Accept any casing of a lead status; blank, null or unrecognized values read as `New`.
fn deserialize_lead_status<'de, D>(deserializer: D) -> Result<LeadStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let status = value.as_str().map(|s| s.trim().to_ascii_lowercase());
    Ok(match status.as_deref() {
        Some("contacted") => LeadStatus::Contacted,
        _ => LeadStatus::New,
    })
}

/// Accept integers sent as JSON numbers or numeric strings.
fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {s:?}"))),
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
