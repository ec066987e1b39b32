//! Fixed site configuration
//!
//! Everything here ships inside the WASM bundle and is visible to any
//! client; nothing in this module is a secret.

/// Endpoint the contact form posts to. The hosting platform's form
/// ingestion intercepts url-encoded POSTs to the site root.
pub const FORM_ENDPOINT: &str = "/";

/// Form identifier sent as the `form-name` field so the backend routes the
/// submission to the right bucket.
pub const FORM_NAME: &str = "velora-contact";

/// Fallback contact address surfaced when a submission fails.
pub const CONTACT_EMAIL: &str = "founder@velorapro.com";

/// Minimum interval between accepted submissions, in milliseconds.
pub const RATE_LIMIT_MS: f64 = 15_000.0;

/// Pilot access code. A convenience barrier for invited clinics, compared
/// client-side after trimming and lowercasing. Not authentication: the
/// literal and the comparison both live in the bundle.
pub const PILOT_ACCESS_CODE: &str = "velora";

/// How long the unlock control stays disabled after a wrong code, in
/// milliseconds. Blunts rapid guessing, nothing more.
pub const GATE_COOLDOWN_MS: f64 = 1_500.0;

/// Adobe Sign widget embedded behind the access gate on the home page.
pub const LOI_WIDGET_URL: &str = "https://eu1.documents.adobe.com/public/esignWidget?wid=CBFCIBAA3AAABLblqZhATyOPGy7lwveoMjippRMAt9uT7x4GJCWFcbV33-vDlgt6cjV-JUByQSybWNgRUYL0*&hosted=false";

/// Adobe Sign widget embedded on the pilot page.
pub const PILOT_LOI_WIDGET_URL: &str = "https://eu1.documents.adobe.com/public/esignWidget?wid=CBFCIBAA3AAABLblqZhBu6S7IPk2oztdDce9H9ftxY5rsCFGIq7bk0S6gODJiKGXvyzuLhiliBC8l0Paky2I*&hosted=false";

/// Company LinkedIn profile linked from the footer.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/velora-intelligence";
