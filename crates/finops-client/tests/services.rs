use chrono::NaiveDate;
use finops_client::models::{NewUser, TokenPair};
use finops_client::services::ListQuery;
use finops_client::{ApiClient, FilePart, Session};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn client_for(server: &ServerGuard) -> ApiClient {
    let client = ApiClient::builder()
        .base_url(format!("{}/api", server.url()))
        .session(Session::in_memory())
        .login_redirect(|_: &str| {})
        .build();
    client
        .session()
        .store_tokens(&TokenPair {
            access: "A1".to_string(),
            refresh: "R1".to_string(),
        })
        .expect("store tokens");
    client
}

#[tokio::test]
async fn transaction_list_sends_filters_as_query() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/api/transactions/")
        .match_header("authorization", "Bearer A1")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("search".into(), "loyer mars".into()),
            Matcher::UrlEncoded("transaction_type".into(), "expense".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"count":11,"results":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ListQuery::default()
        .page(2)
        .search("loyer mars")
        .filter("transaction_type", "expense");
    let body = client.transactions().list(&query).await.expect("list");

    assert_eq!(body["count"], 11);
    list.assert_async().await;
}

#[tokio::test]
async fn reconcile_posts_both_ids() {
    let mut server = Server::new_async().await;
    let reconcile = server
        .mock("POST", "/api/transactions/reconcile_with_invoice/")
        .match_body(Matcher::Json(json!({"transaction_id": 4, "invoice_id": 17})))
        .with_status(200)
        .with_body(r#"{"message":"Transaction reconciled with invoice successfully"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let body = client
        .transactions()
        .reconcile_with_invoice(4, 17)
        .await
        .expect("reconcile");

    assert_eq!(
        body["message"],
        "Transaction reconciled with invoice successfully"
    );
    reconcile.assert_async().await;
}

#[tokio::test]
async fn ocr_upload_is_multipart_and_survives_refresh() {
    let mut server = Server::new_async().await;
    let stale = server
        .mock("POST", "/api/invoices/upload_with_ocr/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("POST", "/api/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access":"A2"}"#)
        .create_async()
        .await;
    let upload = server
        .mock("POST", "/api/invoices/upload_with_ocr/")
        .match_header("authorization", "Bearer A2")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="facture-0042.pdf""#.to_string()),
            Matcher::Regex("%PDF-1.4".to_string()),
        ]))
        .with_status(201)
        .with_body(r#"{"id":42,"status":"pending"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let file = FilePart::new("file", "facture-0042.pdf", b"%PDF-1.4".to_vec())
        .with_mime("application/pdf");
    let body = client
        .invoices()
        .upload_with_ocr(file)
        .await
        .expect("upload");

    assert_eq!(body["id"], 42);
    stale.assert_async().await;
    upload.assert_async().await;
}

#[tokio::test]
async fn invoice_export_returns_raw_csv() {
    let mut server = Server::new_async().await;
    let csv = "Numéro de facture,Fournisseur\nF-1,ACME\n";
    let export = server
        .mock("GET", "/api/invoices/export/")
        .match_query(Matcher::UrlEncoded("status".into(), "paid".into()))
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body(csv)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let bytes = client
        .invoices()
        .export(&ListQuery::default().filter("status", "paid"))
        .await
        .expect("export");

    assert_eq!(String::from_utf8(bytes).expect("utf8"), csv);
    export.assert_async().await;
}

#[tokio::test]
async fn income_statement_sends_iso_dates() {
    let mut server = Server::new_async().await;
    let generate = server
        .mock("POST", "/api/reports/generate_income_statement/")
        .match_body(Matcher::Json(json!({
            "start_date": "2024-01-01",
            "end_date": "2024-03-31"
        })))
        .with_status(201)
        .with_body(r#"{"id":5,"report_type":"income_statement"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
    let end = NaiveDate::from_ymd_opt(2024, 3, 31).expect("date");
    let body = client
        .reports()
        .generate_income_statement(start, end)
        .await
        .expect("generate");
    assert_eq!(body["report_type"], "income_statement");

    let err = client
        .reports()
        .generate_income_statement(end, start)
        .await
        .unwrap_err();
    assert!(matches!(err, finops_client::ApiError::InvalidRequest(_)));
    generate.assert_async().await;
}

#[tokio::test]
async fn anomaly_actions_hit_detail_routes() {
    let mut server = Server::new_async().await;
    let resolve = server
        .mock("POST", "/api/anomalies/8/resolve/")
        .with_status(200)
        .with_body(r#"{"status":"Anomaly resolved"}"#)
        .expect(1)
        .create_async()
        .await;
    let false_positive = server
        .mock("POST", "/api/anomalies/9/mark_false_positive/")
        .with_status(200)
        .with_body(r#"{"status":"Anomaly marked as false positive"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client.anomalies().resolve(8).await.expect("resolve");
    client
        .anomalies()
        .mark_as_false_positive(9)
        .await
        .expect("false positive");

    resolve.assert_async().await;
    false_positive.assert_async().await;
}

#[tokio::test]
async fn notifications_mark_read() {
    let mut server = Server::new_async().await;
    let one = server
        .mock("PATCH", "/api/notifications/3/")
        .match_body(Matcher::Json(json!({"read": true})))
        .with_status(200)
        .with_body(r#"{"id":3,"read":true}"#)
        .expect(1)
        .create_async()
        .await;
    let all = server
        .mock("POST", "/api/notifications/mark_all_read/")
        .with_status(200)
        .with_body(r#"{"status":"All notifications marked as read"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client.notifications().mark_as_read(3).await.expect("one");
    client.notifications().mark_all_as_read().await.expect("all");

    one.assert_async().await;
    all.assert_async().await;
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let mut server = Server::new_async().await;
    let delete = server
        .mock("DELETE", "/api/bank-accounts/2/")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client.bank_accounts().delete(2).await.expect("delete");
    delete.assert_async().await;
}

#[tokio::test]
async fn register_and_login_caches_user() {
    let mut server = Server::new_async().await;
    let register = server
        .mock("POST", "/api/users/register/")
        .match_body(Matcher::PartialJson(json!({
            "username": "dfin",
            "password": "pw",
            "password_confirmation": "pw",
            "role": "financial_director"
        })))
        .with_status(201)
        .with_body(r#"{"access":"X","refresh":"Y","user":{"id":12,"username":"dfin"}}"#)
        .expect(1)
        .create_async()
        .await;
    let token = server
        .mock("POST", "/api/token/")
        .match_body(Matcher::Json(json!({"username": "dfin", "password": "pw"})))
        .with_status(200)
        .with_body(r#"{"access":"A9","refresh":"R9"}"#)
        .expect(1)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/api/users/me/")
        .match_header("authorization", "Bearer A9")
        .with_status(200)
        .with_body(
            json!({
                "id": 12,
                "username": "dfin",
                "email": "dfin@example.com",
                "first_name": "Dana",
                "last_name": "Fin",
                "role": "financial_director",
                "profile_image": null
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = ApiClient::builder()
        .base_url(format!("{}/api", server.url()))
        .session(Session::in_memory())
        .build();
    let user = client
        .auth()
        .register_and_login(&NewUser {
            username: "dfin".to_string(),
            email: "dfin@example.com".to_string(),
            password: "pw".to_string(),
            password_confirmation: "pw".to_string(),
            first_name: Some("Dana".to_string()),
            last_name: Some("Fin".to_string()),
            role: Some("financial_director".to_string()),
        })
        .await
        .expect("register");

    assert_eq!(user.id, 12);
    assert_eq!(client.session().cached_user().expect("cached"), Some(user));
    assert_eq!(
        client.session().refresh_token().expect("refresh").as_deref(),
        Some("R9")
    );
    register.assert_async().await;
    token.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn load_user_without_token_does_nothing() {
    let mut server = Server::new_async().await;
    let me = server
        .mock("GET", "/api/users/me/")
        .expect(0)
        .create_async()
        .await;

    let client = ApiClient::builder()
        .base_url(format!("{}/api", server.url()))
        .session(Session::in_memory())
        .build();
    assert_eq!(client.auth().load_user().await.expect("load"), None);
    me.assert_async().await;
}
