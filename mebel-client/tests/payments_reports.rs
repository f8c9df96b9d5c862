// mebel-client/tests/payments_reports.rs
// Payment confirmation flow and the filtered sales report

mod support;

use std::sync::Arc;

use chrono::NaiveDate;
use mebel_client::api::{PaymentApi, PaymentSummary, ReportApi};
use mebel_client::{ErrorCode, FetchOutcome};
use rust_decimal_macros::dec;
use shared::models::{PaymentPayload, ReportQuery, ReportRow};
use support::FakeApi;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn row(order: &str, customer: &str, date: NaiveDate) -> ReportRow {
    ReportRow {
        order_id: order.into(),
        customer_name: customer.into(),
        date,
        total: dec!(1000000),
        paid: dec!(400000),
        outstanding: dec!(600000),
    }
}

#[tokio::test]
async fn test_payment_must_be_paid_before_confirm() {
    let api = FakeApi::new();
    let payments = PaymentApi::new(Arc::new(api.client()));

    let record = payments
        .create(&PaymentPayload {
            purchase_order_id: "po-1".into(),
            amount: dec!(750000),
            note: None,
        })
        .await
        .unwrap();
    assert!(!record.is_paid);

    let err = payments.confirm(&record).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::PaymentNotPaid));
    assert_eq!(api.hits_prefix("PATCH "), 0);

    let paid = payments.mark_paid(&record.id).await.unwrap();
    let confirmed = payments.confirm(&paid).await.unwrap();
    assert!(confirmed.is_confirmed);

    let err = payments.confirm(&confirmed).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::PaymentAlreadyConfirmed));

    let records = payments.for_purchase_order("po-1");
    records.mount().await.unwrap();
    let summary = PaymentSummary::new(dec!(2000000), &records.data().await.unwrap());
    assert_eq!(summary.paid, dec!(750000));
    assert_eq!(summary.outstanding, dec!(1250000));
}

#[tokio::test]
async fn test_invalid_amount_sends_nothing() {
    let api = FakeApi::new();
    let payments = PaymentApi::new(Arc::new(api.client()));

    for amount in [dec!(0), dec!(-5000)] {
        let err = payments
            .create(&PaymentPayload {
                purchase_order_id: "po-1".into(),
                amount,
                note: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), Some(ErrorCode::PaymentInvalidAmount));
    }
    assert_eq!(api.writes(), 0);
}

#[tokio::test]
async fn test_report_filters() {
    let api = FakeApi::new();
    api.with(|s| {
        s.report_rows = vec![
            row("o-1", "Toko Jati Makmur", day(1)),
            row("o-2", "Mebel Sinar Jaya", day(10)),
            row("o-3", "Jati Indah Furniture", day(20)),
        ];
    });
    let reports = ReportApi::new(Arc::new(api.client()));

    let reader = reports
        .sales(&ReportQuery {
            from: Some(day(5)),
            ..Default::default()
        })
        .unwrap();
    reader.mount().await.unwrap();
    assert_eq!(reader.data().await.unwrap().len(), 2);

    // a cleared filter overrides the old one
    let outcome = reports
        .refilter(
            &reader,
            &ReportQuery {
                search: Some("jati".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome, FetchOutcome::Applied);
    let orders: Vec<String> = reader.data().await.unwrap().into_iter().map(|r| r.order_id).collect();
    assert_eq!(orders, vec!["o-1", "o-3"]);
}

#[tokio::test]
async fn test_inverted_range_rejected() {
    let api = FakeApi::new();
    let reports = ReportApi::new(Arc::new(api.client()));
    let inverted = ReportQuery {
        from: Some(day(20)),
        to: Some(day(1)),
        search: None,
    };

    assert!(reports.sales(&inverted).is_err());

    let reader = reports.sales(&ReportQuery::default()).unwrap();
    let err = reports.refilter(&reader, &inverted).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::ValidationFailed));
    assert_eq!(api.hits("GET /admin/reports/sales"), 0);
}
