//! Backend endpoint URLs.

/// `POST` — authenticate, returns a bearer token.
pub fn login(base: &str) -> String {
    format!("{base}api/v1/auth/login")
}

/// `GET` to list, `POST` to create.
pub fn tenants(base: &str) -> String {
    format!("{base}api/v1/tenants")
}

/// `DELETE` — remove one tenant.
pub fn tenant(base: &str, tenant_id: &str) -> String {
    format!("{base}api/v1/tenants/{tenant_id}")
}

/// `GET` — processes under one tenant.
pub fn tenant_processes(base: &str, tenant_id: &str) -> String {
    format!("{base}api/v1/tenants/{tenant_id}/processes")
}

/// `POST` multipart — upload a process definition.
pub fn process_upload(base: &str) -> String {
    format!("{base}api/v1/ews/consents/upload")
}
