// mebel-client/tests/support/mod.rs
// In-memory admin API used by the integration tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{Value, json};
use shared::models::{
    Address, Customer, DeliveryNote, PaymentRecord, PurchaseOrder, PurchaseOrderStatus,
    ReportRow,
};
use shared::{AppError, ErrorCode, RoleFlags, UserProfile};

use mebel_client::OneshotHttpClient;

pub const TOKEN: &str = "token-admin";

#[derive(Default)]
pub struct FakeState {
    /// "METHOD /path" -> count, query string excluded
    pub hits: HashMap<String, usize>,
    /// Query parameters of every `GET /admin/customers`
    pub customer_queries: Vec<HashMap<String, String>>,
    pub customers: Vec<Customer>,
    pub undeletable: HashSet<String>,
    pub purchase_orders: HashMap<String, PurchaseOrder>,
    pub delivery_notes: Vec<DeliveryNote>,
    pub payments: Vec<PaymentRecord>,
    pub report_rows: Vec<ReportRow>,
    pub fail_status_patch: bool,
    pub fail_note_delete: bool,
    /// Answer deletes with `204 No Content` instead of `{"data": null}`
    pub no_content_deletes: bool,
    pub next_id: u64,
}

/// Shared handle to the fake API state
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.state.lock())
    }

    pub fn hits(&self, key: &str) -> usize {
        self.with(|s| s.hits.get(key).copied().unwrap_or(0))
    }

    /// Sum of hits whose key starts with `prefix`
    pub fn hits_prefix(&self, prefix: &str) -> usize {
        self.with(|s| {
            s.hits
                .iter()
                .filter(|(k, _)| k.starts_with(prefix))
                .map(|(_, n)| *n)
                .sum()
        })
    }

    /// Count of every write (POST, PUT, PATCH, DELETE)
    pub fn writes(&self) -> usize {
        ["POST ", "PUT ", "PATCH ", "DELETE "]
            .iter()
            .map(|m| self.hits_prefix(m))
            .sum()
    }

    pub fn client(&self) -> OneshotHttpClient {
        OneshotHttpClient::new(self.router())
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/auth/login", post(login))
            .route("/auth/me", get(me))
            .route("/admin/customers", get(list_customers).post(create_customer))
            .route(
                "/admin/customers/{id}",
                delete(delete_customer).put(update_customer),
            )
            .route("/admin/products", get(list_products))
            .route(
                "/admin/delivery-notes",
                get(list_notes).post(create_note),
            )
            .route("/admin/delivery-notes/{id}", delete(delete_note))
            .route("/admin/purchase-orders/{id}/status", patch(patch_status))
            .route("/admin/payments", get(list_payments).post(create_payment))
            .route("/admin/payments/{id}/paid", patch(mark_paid))
            .route("/admin/payments/{id}/confirm", patch(confirm_payment))
            .route("/admin/reports/sales", get(sales_report))
            .layer(middleware::from_fn_with_state(self.clone(), count_hits))
            .with_state(self.clone())
    }

    pub fn next_id(&self, prefix: &str) -> String {
        self.with(|s| {
            s.next_id += 1;
            format!("{prefix}-{}", s.next_id)
        })
    }
}

pub fn customer(id: &str, name: &str) -> Customer {
    Customer {
        id: id.into(),
        merchant_name: name.into(),
        category: "Toko".into(),
        address: Address {
            province: "Jawa Tengah".into(),
            city: "Jepara".into(),
            district: "Tahunan".into(),
            subdistrict: "Mantingan".into(),
            street: None,
        },
        credit_limit: rust_decimal::Decimal::from(50_000_000),
        tenor_days: 30,
    }
}

pub fn purchase_order(id: &str, status: PurchaseOrderStatus) -> PurchaseOrder {
    PurchaseOrder {
        id: id.into(),
        order_id: "o-1".into(),
        customer_id: "c-1".into(),
        number: format!("PO/{id}"),
        lines: vec![],
        payment: Default::default(),
        status,
        cancel_reason: None,
        total: rust_decimal::Decimal::from(1_000_000),
        created_at: None,
    }
}

fn data(value: impl serde::Serialize) -> Json<Value> {
    Json(json!({ "data": value }))
}

fn deleted(api: &FakeApi) -> Response {
    if api.with(|s| s.no_content_deletes) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        data(Value::Null).into_response()
    }
}

async fn count_hits(State(api): State<FakeApi>, req: Request, next: Next) -> Response {
    let key = format!("{} {}", req.method(), req.uri().path());
    api.with(|s| *s.hits.entry(key).or_default() += 1);
    next.run(req).await
}

async fn login(Json(body): Json<Value>) -> Result<Json<Value>, AppError> {
    if body["password"] != "rahasia" {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }
    Ok(data(json!({
        "token": TOKEN,
        "user": UserProfile {
            id: "u-1".into(),
            name: "Admin Toko".into(),
            username: body["username"].as_str().unwrap_or_default().into(),
            roles: RoleFlags { admin: true, ..Default::default() },
        }
    })))
}

async fn me(headers: HeaderMap) -> Result<Json<Value>, AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != format!("Bearer {TOKEN}") {
        return Err(AppError::not_authenticated());
    }
    Ok(data(UserProfile {
        id: "u-1".into(),
        name: "Admin Toko".into(),
        username: "admin".into(),
        roles: RoleFlags {
            admin: true,
            ..Default::default()
        },
    }))
}

async fn list_customers(
    State(api): State<FakeApi>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    if let Some(ms) = query.get("delay_ms").and_then(|v| v.parse().ok()) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
    let search = query.get("search").cloned().unwrap_or_default().to_lowercase();
    let rows: Vec<Customer> = api.with(|s| {
        s.customer_queries.push(query.clone());
        s.customers
            .iter()
            .filter(|c| c.merchant_name.to_lowercase().contains(&search))
            .cloned()
            .collect()
    });
    data(rows)
}

async fn create_customer(State(api): State<FakeApi>, Json(body): Json<Value>) -> Json<Value> {
    let id = api.next_id("c");
    let mut created = body;
    created["id"] = json!(id);
    data(created)
}

async fn update_customer(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    let mut updated = body;
    updated["id"] = json!(id);
    data(updated)
}

async fn delete_customer(
    State(api): State<FakeApi>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    api.with(|s| {
        if s.undeletable.contains(&id) {
            return Err(AppError::with_message(
                ErrorCode::CustomerHasOrders,
                format!("customer {id} still has orders"),
            ));
        }
        s.customers.retain(|c| c.id != id);
        Ok(())
    })?;
    Ok(deleted(&api))
}

async fn list_products() -> Json<Value> {
    data(Vec::<Value>::new())
}

async fn list_notes(
    State(api): State<FakeApi>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let po = query.get("purchase_order_id").cloned();
    let notes: Vec<DeliveryNote> = api.with(|s| {
        s.delivery_notes
            .iter()
            .filter(|n| po.as_ref().is_none_or(|po| &n.purchase_order_id == po))
            .cloned()
            .collect()
    });
    data(notes)
}

async fn create_note(State(api): State<FakeApi>, Json(body): Json<Value>) -> Json<Value> {
    let note = DeliveryNote {
        id: api.next_id("dn"),
        purchase_order_id: body["purchase_order_id"].as_str().unwrap_or_default().into(),
        number: body["number"].as_str().unwrap_or_default().into(),
        driver: body["driver"].as_str().map(Into::into),
        note: None,
        issued_at: None,
        cancelled: false,
    };
    api.with(|s| s.delivery_notes.push(note.clone()));
    data(note)
}

async fn delete_note(
    State(api): State<FakeApi>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    api.with(|s| {
        if s.fail_note_delete {
            return Err(AppError::internal("storage unavailable"));
        }
        s.delivery_notes.retain(|n| n.id != id);
        Ok(())
    })?;
    Ok(deleted(&api))
}

async fn patch_status(
    State(api): State<FakeApi>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    api.with(|s| {
        if s.fail_status_patch {
            return Err(AppError::internal("database is locked"));
        }
        let status: PurchaseOrderStatus = serde_json::from_value(body["status"].clone())
            .map_err(|e| AppError::validation(e.to_string()))?;
        let po = s
            .purchase_orders
            .entry(id.clone())
            .or_insert_with(|| purchase_order(&id, PurchaseOrderStatus::Dipesan));
        po.status = status;
        po.cancel_reason = body["cancel_reason"].as_str().map(Into::into);
        Ok(data(po.clone()))
    })
}

async fn list_payments(State(api): State<FakeApi>) -> Json<Value> {
    data(api.with(|s| s.payments.clone()))
}

async fn create_payment(State(api): State<FakeApi>, Json(body): Json<Value>) -> Json<Value> {
    let record = PaymentRecord {
        id: api.next_id("pay"),
        purchase_order_id: body["purchase_order_id"].as_str().unwrap_or_default().into(),
        amount: serde_json::from_value(body["amount"].clone()).unwrap_or_default(),
        is_paid: false,
        is_confirmed: false,
        paid_at: None,
        note: None,
    };
    api.with(|s| s.payments.push(record.clone()));
    data(record)
}

fn update_payment(
    api: &FakeApi,
    id: &str,
    f: impl FnOnce(&mut PaymentRecord),
) -> Result<Json<Value>, AppError> {
    api.with(|s| {
        let record = s
            .payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::PaymentNotFound))?;
        f(record);
        Ok(data(record.clone()))
    })
}

async fn mark_paid(State(api): State<FakeApi>, Path(id): Path<String>) -> Result<Json<Value>, AppError> {
    update_payment(&api, &id, |p| p.is_paid = true)
}

async fn confirm_payment(
    State(api): State<FakeApi>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    update_payment(&api, &id, |p| p.is_confirmed = true)
}

async fn sales_report(
    State(api): State<FakeApi>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let date = |key: &str| {
        query
            .get(key)
            .and_then(|v| chrono::NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
    };
    let (from, to) = (date("from"), date("to"));
    let search = query.get("search").cloned().unwrap_or_default().to_lowercase();
    let rows: Vec<ReportRow> = api.with(|s| {
        s.report_rows
            .iter()
            .filter(|r| from.is_none_or(|f| r.date >= f))
            .filter(|r| to.is_none_or(|t| r.date <= t))
            .filter(|r| r.customer_name.to_lowercase().contains(&search))
            .cloned()
            .collect()
    });
    data(rows)
}
