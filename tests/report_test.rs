//! Integration tests for the pot report endpoint.

mod common;

use axum::http::StatusCode;
use common::TestClient;
use serde_json::json;

/// A pot with no snapshots reports zeros and nulls rather than failing.
#[tokio::test]
async fn test_report_without_snapshots() {
    let client = TestClient::new();
    let provider = client.create_provider("ReportProv").await;
    let pot = client.create_pot("ReportPot", Some(provider)).await;

    let (status, report) = client.get_json(&format!("/api/reports/{}", pot)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        report,
        json!({
            "potId": pot,
            "fromDate": null,
            "toDate": null,
            "openingBalance": 0.0,
            "currentBalance": 0.0,
            "contributionsExclRebates": 0.0,
            "contributionsInclRebates": 0.0,
            "netFlows": 0.0,
            "growth": 0.0,
            "cagrAnnualPercent": null,
            "irrAnnualPercent": null
        })
    );
}

/// Unknown pot ids are a 404 with no report body.
#[tokio::test]
async fn test_report_unknown_pot() {
    let client = TestClient::new();

    let (status, body) = client.get_json("/api/reports/9999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("potId").is_none());
    assert_eq!(body["error"], "Pot 9999999 not found");
}

/// Two snapshots a year apart and no cash flows.
#[tokio::test]
async fn test_report_balance_growth() {
    let client = TestClient::new();
    let pot = client.create_pot("Growth", None).await;
    assert!(client.create_snapshot(pot, "2023-01-01", 100.00).await);
    assert!(client.create_snapshot(pot, "2024-01-01", 125.00).await);

    let (status, report) = client.get_json(&format!("/api/reports/{}", pot)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["fromDate"], "2023-01-01");
    assert_eq!(report["toDate"], "2024-01-01");
    assert_eq!(report["openingBalance"], 100.0);
    assert_eq!(report["currentBalance"], 125.0);
    assert_eq!(report["netFlows"], 0.0);
    assert_eq!(report["growth"], 25.0);
    assert_eq!(report["cagrAnnualPercent"], 25.0);
    assert!(report["irrAnnualPercent"].is_null());
}

/// A contribution is netted out of growth.
#[tokio::test]
async fn test_report_with_contribution() {
    let client = TestClient::new();
    let pot = client.create_pot("Contrib", None).await;
    assert!(client.create_snapshot(pot, "2023-01-01", 100.00).await);
    assert!(client.create_snapshot(pot, "2024-01-01", 150.00).await);
    assert_eq!(
        client
            .create_transaction(pot, "2023-06-01", "contribution", 30.00)
            .await,
        StatusCode::CREATED
    );

    let (status, report) = client.get_json(&format!("/api/reports/{}", pot)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["contributionsExclRebates"], 30.0);
    assert_eq!(report["contributionsInclRebates"], 30.0);
    assert_eq!(report["netFlows"], 30.0);
    assert_eq!(report["growth"], 20.0);
}

/// Snapshots inserted out of order are still reported oldest to newest.
#[tokio::test]
async fn test_report_uses_date_order_not_insert_order() {
    let client = TestClient::new();
    let pot = client.create_pot("Unordered", None).await;
    assert!(client.create_snapshot(pot, "2024-01-01", 125.00).await);
    assert!(client.create_snapshot(pot, "2023-07-01", 110.00).await);
    assert!(client.create_snapshot(pot, "2023-01-01", 100.00).await);

    let (_, report) = client.get_json(&format!("/api/reports/{}", pot)).await;

    assert_eq!(report["fromDate"], "2023-01-01");
    assert_eq!(report["toDate"], "2024-01-01");
    assert_eq!(report["openingBalance"], 100.0);
    assert_eq!(report["currentBalance"], 125.0);
}

/// Rebates count only towards the inclusive total; fees reduce net flows.
#[tokio::test]
async fn test_report_rebates_and_fees() {
    let client = TestClient::new();
    let pot = client.create_pot("Mixed", None).await;
    assert!(client.create_snapshot(pot, "2022-04-06", 5000.00).await);
    assert!(client.create_snapshot(pot, "2024-04-05", 6400.00).await);

    for (date, kind, amount) in [
        ("2022-05-01", "contribution", 500.00),
        ("2022-05-01", "EMPLOYER_MATCH", 250.00),
        ("2023-01-15", "rebate", 12.50),
        ("2023-03-31", "fee", -20.00),
        ("2023-09-01", "transfer_in", 300.00),
    ] {
        assert_eq!(
            client.create_transaction(pot, date, kind, amount).await,
            StatusCode::CREATED
        );
    }

    let (status, report) = client.get_json(&format!("/api/reports/{}", pot)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["contributionsExclRebates"], 1050.0);
    assert_eq!(report["contributionsInclRebates"], 1062.5);
    assert_eq!(report["netFlows"], 1042.5);
    assert_eq!(report["growth"], 357.5);
    assert!(report["cagrAnnualPercent"].is_number());
    // The opening balance is not a flow, so the return on the flows is high
    assert_eq!(report["irrAnnualPercent"], 186.69);
}

/// The money-weighted return is exposed alongside CAGR.
#[tokio::test]
async fn test_report_money_weighted_return() {
    let client = TestClient::new();
    let pot = client.create_pot("Irr", None).await;
    assert!(client.create_snapshot(pot, "2023-01-01", 0.00).await);
    assert!(client.create_snapshot(pot, "2024-01-01", 1100.00).await);
    assert_eq!(
        client
            .create_transaction(pot, "2023-01-01", "contribution", 1000.00)
            .await,
        StatusCode::CREATED
    );

    let (_, report) = client.get_json(&format!("/api/reports/{}", pot)).await;

    assert_eq!(report["irrAnnualPercent"], 10.0);
    assert!(report["cagrAnnualPercent"].is_null());
}

/// Asking twice returns the same bytes.
#[tokio::test]
async fn test_report_is_idempotent() {
    let client = TestClient::new();
    let pot = client.create_pot("Stable", None).await;
    assert!(client.create_snapshot(pot, "2023-01-01", 1000.00).await);
    assert!(client.create_snapshot(pot, "2024-06-30", 1234.56).await);
    assert_eq!(
        client
            .create_transaction(pot, "2023-02-01", "contribution", 100.00)
            .await,
        StatusCode::CREATED
    );

    let uri = format!("/api/reports/{}", pot);
    let (_, first) = client.get(&uri).await;
    let (_, second) = client.get(&uri).await;
    assert_eq!(first, second);
}

/// Reports only see their own pot's records.
#[tokio::test]
async fn test_reports_are_per_pot() {
    let client = TestClient::new();
    let a = client.create_pot("A", None).await;
    let b = client.create_pot("B", None).await;
    assert!(client.create_snapshot(a, "2023-01-01", 100.00).await);
    assert!(client.create_snapshot(a, "2024-01-01", 200.00).await);
    assert_eq!(
        client.create_transaction(b, "2023-05-01", "contribution", 50.00).await,
        StatusCode::CREATED
    );

    let (_, report_a) = client.get_json(&format!("/api/reports/{}", a)).await;
    let (_, report_b) = client.get_json(&format!("/api/reports/{}", b)).await;

    assert_eq!(report_a["netFlows"], 0.0);
    assert_eq!(report_a["growth"], 100.0);
    assert!(report_b["fromDate"].is_null());
    assert_eq!(report_b["netFlows"], 0.0);
}

/// Totals beyond the decimal range are a client error, not a crash.
#[tokio::test]
async fn test_report_out_of_range_totals() {
    let client = TestClient::new();
    let pot = client.create_pot("Huge", None).await;
    assert!(client.create_snapshot(pot, "2023-01-01", 100.00).await);

    for date in ["2023-02-01", "2023-03-01"] {
        let (status, _) = client
            .post_json(
                "/api/transactions",
                &json!({
                    "potId": pot,
                    "date": date,
                    "type": "contribution",
                    "amount": "50000000000000000000000000000"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = client.get_json(&format!("/api/reports/{}", pot)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], format!("Pot {} totals are out of range", pot));
}
